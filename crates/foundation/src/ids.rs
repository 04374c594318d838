/// Stable string identity of one underlying post.
///
/// Ordering contract:
/// - `Ord` is the lexicographic order of the underlying string. Aggregation
///   uses this order to pick cluster representatives, so it must stay total
///   and deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeatureId(String);

impl FeatureId {
    pub fn new(id: impl Into<String>) -> Self {
        FeatureId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FeatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FeatureId {
    fn from(s: &str) -> Self {
        FeatureId(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::FeatureId;

    #[test]
    fn orders_lexicographically() {
        let a = FeatureId::new("a");
        let b = FeatureId::new("b");
        assert!(a < b);
        assert_eq!(a, FeatureId::from("a"));
    }
}
