use foundation::geo::GeoPoint;

/// A named location selected from outside the map (search box, breadcrumb).
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub name: String,
    pub position: GeoPoint,
}

impl Place {
    pub fn new(name: impl Into<String>, position: GeoPoint) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// Map zoom level, matching the usual 0..=22 tile-pyramid range.
pub type Zoom = u8;
