/// Decoder settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of records a decoded pack may hold
    ///
    /// `None` accepts any number. A first element holding only base fields does not count.
    pub max_records: Option<usize>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject packs holding more than `limit` records
    pub fn with_max_records(mut self, limit: usize) -> Self {
        self.max_records = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        assert_eq!(Config::new().max_records, None);
        assert_eq!(Config::new().with_max_records(4).max_records, Some(4));
    }
}
