/// Geographic point in WGS84 degrees.
///
/// Equality is exact. Nothing at this layer merges nearby points; grouping
/// decisions belong to the marker aggregation above it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// Axis-aligned geographic rectangle (a map viewport).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoBounds {
    pub min: GeoPoint,
    pub max: GeoPoint,
}

impl GeoBounds {
    pub fn new(min: GeoPoint, max: GeoPoint) -> Self {
        Self { min, max }
    }

    /// Bounds spanning `half_span_deg` degrees in each direction from `center`.
    pub fn around(center: GeoPoint, half_span_deg: f64) -> Self {
        Self {
            min: GeoPoint::new(
                center.latitude - half_span_deg,
                center.longitude - half_span_deg,
            ),
            max: GeoPoint::new(
                center.latitude + half_span_deg,
                center.longitude + half_span_deg,
            ),
        }
    }

    /// Inclusive on all edges.
    pub fn contains(&self, p: GeoPoint) -> bool {
        p.latitude >= self.min.latitude
            && p.latitude <= self.max.latitude
            && p.longitude >= self.min.longitude
            && p.longitude <= self.max.longitude
    }
}

#[cfg(test)]
mod tests {
    use super::{GeoBounds, GeoPoint};

    #[test]
    fn contains_is_inclusive_on_edges() {
        let b = GeoBounds::new(GeoPoint::new(-1.0, -1.0), GeoPoint::new(1.0, 1.0));
        assert!(b.contains(GeoPoint::new(0.0, 0.0)));
        assert!(b.contains(GeoPoint::new(1.0, -1.0)));
        assert!(!b.contains(GeoPoint::new(1.0001, 0.0)));
    }

    #[test]
    fn around_builds_symmetric_bounds() {
        let b = GeoBounds::around(GeoPoint::new(10.0, 20.0), 0.5);
        assert_eq!(b.min, GeoPoint::new(9.5, 19.5));
        assert_eq!(b.max, GeoPoint::new(10.5, 20.5));
    }
}
