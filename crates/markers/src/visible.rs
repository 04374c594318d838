use crate::feature::PostFeature;
use foundation::geo::GeoBounds;

/// Filter describing which features the viewport should currently show.
#[derive(Debug, Clone)]
pub struct FeatureQuery {
    pub bounds: Option<GeoBounds>,
    pub category: Option<String>,
    pub limit: usize,
}

impl Default for FeatureQuery {
    fn default() -> Self {
        Self {
            bounds: None,
            category: None,
            limit: 1000,
        }
    }
}

impl FeatureQuery {
    pub fn within(bounds: GeoBounds) -> Self {
        Self {
            bounds: Some(bounds),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Recomputes the visible feature set for the current viewport.
///
/// Notes:
/// - Input order is preserved, so downstream aggregation sees a stable
///   sequence.
/// - Features with non-finite positions are ignored.
/// - Zero matches is a valid result, not an error.
pub fn visible_features(features: &[PostFeature], query: &FeatureQuery) -> Vec<PostFeature> {
    let mut out = Vec::new();
    if query.limit == 0 {
        return out;
    }

    for feature in features {
        if !feature.position.is_finite() {
            continue;
        }
        if let Some(bounds) = query.bounds
            && !bounds.contains(feature.position)
        {
            continue;
        }
        if let Some(category) = &query.category
            && !feature.has_category(category)
        {
            continue;
        }

        out.push(feature.clone());
        if out.len() >= query.limit {
            break;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::{FeatureQuery, visible_features};
    use crate::feature::PostFeature;
    use foundation::geo::{GeoBounds, GeoPoint};

    fn fixture() -> Vec<PostFeature> {
        vec![
            PostFeature::new("a/1", GeoPoint::new(0.5, 0.5)).with_category("foodies"),
            PostFeature::new("b/2", GeoPoint::new(0.6, 0.4)).with_category("travel"),
            PostFeature::new("c/3", GeoPoint::new(50.0, 50.0)).with_category("foodies"),
        ]
    }

    #[test]
    fn bounds_filter_keeps_order() {
        let bounds = GeoBounds::new(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0));
        let visible = visible_features(&fixture(), &FeatureQuery::within(bounds));
        let ids: Vec<&str> = visible.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["a/1", "b/2"]);
    }

    #[test]
    fn category_filter_composes_with_bounds() {
        let bounds = GeoBounds::new(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0));
        let visible = visible_features(
            &fixture(),
            &FeatureQuery::within(bounds).with_category("foodies"),
        );
        let ids: Vec<&str> = visible.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["a/1"]);
    }

    #[test]
    fn limit_truncates() {
        let query = FeatureQuery {
            limit: 2,
            ..FeatureQuery::default()
        };
        assert_eq!(visible_features(&fixture(), &query).len(), 2);
    }

    #[test]
    fn zero_limit_yields_nothing() {
        let query = FeatureQuery {
            limit: 0,
            ..FeatureQuery::default()
        };
        assert!(visible_features(&fixture(), &query).is_empty());
    }

    #[test]
    fn non_finite_positions_are_dropped() {
        let features = vec![PostFeature::new("nan", GeoPoint::new(f64::NAN, 0.0))];
        assert!(visible_features(&features, &FeatureQuery::default()).is_empty());
    }
}
