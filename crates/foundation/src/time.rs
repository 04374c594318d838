/// Time primitives
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Time(pub f64); // seconds

impl Time {
    pub fn after(self, seconds: f64) -> Self {
        Time(self.0 + seconds)
    }

    /// Seconds elapsed since `earlier`, clamped at zero.
    pub fn since(self, earlier: Time) -> f64 {
        (self.0 - earlier.0).max(0.0)
    }
}
