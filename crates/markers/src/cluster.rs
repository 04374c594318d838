use crate::feature::PostFeature;
use foundation::geo::GeoPoint;
use foundation::ids::FeatureId;
use std::collections::BTreeMap;

/// The renderable aggregate standing in for one or more posts.
///
/// `feature_id` and `position` belong to the group's representative post, so
/// interaction handlers keyed on the id stay stable across re-renders as long
/// as the representative itself is unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerCluster {
    pub feature_id: FeatureId,
    pub position: GeoPoint,
    pub count: usize,
}

impl MarkerCluster {
    /// Renderers draw a count badge only on true aggregates.
    pub fn shows_badge(&self) -> bool {
        self.count > 1
    }
}

/// Groups features into marker clusters by a caller-supplied key.
///
/// The grouping criterion is a pluggable strategy: rounded coordinate buckets
/// ([`grid_key`]), a shared venue identifier, or anything else the caller
/// derives from the feature.
///
/// Ordering contract:
/// - Output is ordered by ascending group key.
/// - Each group's representative is its lowest `FeatureId`; the cluster takes
///   that feature's id and position.
/// - The whole function is pure: the same features and key function always
///   yield the identical cluster list, regardless of input order. Markers
///   must not change identity on unrelated re-renders.
pub fn aggregate<K>(features: &[PostFeature], key: K) -> Vec<MarkerCluster>
where
    K: Fn(&PostFeature) -> String,
{
    let mut groups: BTreeMap<String, (FeatureId, GeoPoint, usize)> = BTreeMap::new();

    for feature in features {
        let k = key(feature);
        match groups.get_mut(&k) {
            None => {
                groups.insert(k, (feature.id.clone(), feature.position, 1));
            }
            Some((lead_id, lead_pos, count)) => {
                *count += 1;
                if feature.id < *lead_id {
                    *lead_id = feature.id.clone();
                    *lead_pos = feature.position;
                }
            }
        }
    }

    groups
        .into_values()
        .map(|(feature_id, position, count)| MarkerCluster {
            feature_id,
            position,
            count,
        })
        .collect()
}

/// Coordinate-bucket grouping key.
///
/// Snaps both axes to a grid of `cells_per_degree` cells so that nearby posts
/// collapse into one marker. Non-finite positions are expected to be culled
/// by `visible_features` before aggregation.
pub fn grid_key(cells_per_degree: f64) -> impl Fn(&PostFeature) -> String {
    move |feature: &PostFeature| {
        let lat_cell = (feature.position.latitude * cells_per_degree).floor() as i64;
        let lon_cell = (feature.position.longitude * cells_per_degree).floor() as i64;
        format!("{lat_cell}:{lon_cell}")
    }
}
