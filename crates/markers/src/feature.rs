use foundation::geo::GeoPoint;
use foundation::ids::FeatureId;
use std::collections::BTreeSet;

/// One geotagged post to be plotted.
///
/// Immutable for the lifetime of a map session; the visible subset is
/// recomputed whenever the viewport changes.
#[derive(Debug, Clone, PartialEq)]
pub struct PostFeature {
    pub id: FeatureId,
    pub position: GeoPoint,
    pub categories: BTreeSet<String>,
}

impl PostFeature {
    pub fn new(id: impl Into<FeatureId>, position: GeoPoint) -> Self {
        Self {
            id: id.into(),
            position,
            categories: BTreeSet::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.insert(category.into());
        self
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains(category)
    }
}
