//! Filtering records by a caller-supplied key list

/// Which records a request asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyFilter<K> {
    /// No filter parameter, or an empty one
    All,
    /// Keys parsed from the parameter; may be empty when every token was rejected
    Only(Vec<K>),
}

impl<K: PartialEq> KeyFilter<K> {
    /// Build a filter from a comma-separated query value.
    ///
    /// Tokens are trimmed before `parse`; tokens it rejects are dropped.
    pub fn from_param<F>(raw: Option<&str>, parse: F) -> Self
    where
        F: Fn(&str) -> Option<K>,
    {
        match raw {
            None | Some("") => KeyFilter::All,
            Some(raw) => KeyFilter::Only(raw.split(',').map(str::trim).filter_map(parse).collect()),
        }
    }

    /// Keep records whose key matches any target, preserving source order
    pub fn apply<T, F>(&self, records: Vec<T>, key: F) -> Vec<T>
    where
        F: Fn(&T) -> &K,
    {
        match self {
            KeyFilter::All => records,
            KeyFilter::Only(targets) => records
                .into_iter()
                .filter(|record| targets.contains(key(record)))
                .collect(),
        }
    }
}

/// Exhibit ids are integers; anything else is skipped
pub fn parse_id(token: &str) -> Option<i64> {
    token.parse().ok()
}

/// Object numbers match as exact strings
pub fn parse_object_number(token: &str) -> Option<String> {
    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: Option<&str>) -> KeyFilter<i64> {
        KeyFilter::from_param(raw, parse_id)
    }

    #[test]
    fn test_absent_or_empty_param_is_all() {
        assert_eq!(ids(None), KeyFilter::All);
        assert_eq!(ids(Some("")), KeyFilter::All);
    }

    #[test]
    fn test_tokens_trimmed_and_invalid_dropped() {
        assert_eq!(ids(Some(" 3, x,5 ,,-1")), KeyFilter::Only(vec![3, 5, -1]));
    }

    #[test]
    fn test_all_invalid_matches_nothing() {
        let filter = ids(Some("abc,def"));
        assert_eq!(filter, KeyFilter::Only(vec![]));
        assert!(filter.apply(vec![1i64, 2, 3], |n| n).is_empty());
    }

    #[test]
    fn test_apply_preserves_source_order_without_duplicates() {
        let records = vec![(1i64, "a"), (2, "b"), (3, "c"), (4, "d")];
        let filtered = ids(Some("4,1,4,1")).apply(records, |r| &r.0);
        assert_eq!(filtered, vec![(1, "a"), (4, "d")]);
    }

    #[test]
    fn test_all_returns_everything() {
        let records = vec![3i64, 1, 2];
        assert_eq!(KeyFilter::All.apply(records.clone(), |n| n), records);
    }

    #[test]
    fn test_object_numbers_exact_match() {
        let filter = KeyFilter::from_param(Some(" Q1.1 ,q1.1"), parse_object_number);
        let records = vec!["Q1.1".to_string(), "Q1.10".to_string(), "q1.1".to_string()];
        let filtered = filter.apply(records, |s| s);
        assert_eq!(filtered, vec!["Q1.1".to_string(), "q1.1".to_string()]);
    }
}
