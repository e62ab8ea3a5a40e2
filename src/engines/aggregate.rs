// src/engines/aggregate.rs
use crate::types::{FundingRecord, UNKNOWN_LABEL};
use std::collections::{BTreeMap, BTreeSet};

/// Round half to even, the rounding the dashboard numbers are quoted in.
/// Never returns `-0.0`.
pub fn round_amount(value: f64) -> f64 {
    value.round_ties_even() + 0.0
}

/// Group key for a nullable category: nulls share one `Unknown` bucket.
pub fn category(value: &Option<String>) -> Option<String> {
    Some(value.clone().unwrap_or_else(|| UNKNOWN_LABEL.to_string()))
}

/// Sum `amount` per key. Rows whose key is `None` are skipped; null amounts
/// contribute nothing but still create their group.
pub fn sum_by<'a, K, I, F>(records: I, key: F) -> BTreeMap<K, f64>
where
    K: Ord,
    I: IntoIterator<Item = &'a FundingRecord>,
    F: Fn(&FundingRecord) -> Option<K>,
{
    let mut groups = BTreeMap::new();
    for record in records {
        if let Some(k) = key(record) {
            *groups.entry(k).or_insert(0.0) += record.amount.unwrap_or(0.0);
        }
    }
    groups
}

/// Count rows per key where `present` holds (non-null count of a column).
pub fn count_by<'a, K, I, F, P>(records: I, key: F, present: P) -> BTreeMap<K, usize>
where
    K: Ord,
    I: IntoIterator<Item = &'a FundingRecord>,
    F: Fn(&FundingRecord) -> Option<K>,
    P: Fn(&FundingRecord) -> bool,
{
    let mut groups = BTreeMap::new();
    for record in records {
        if let Some(k) = key(record) {
            let count = groups.entry(k).or_insert(0);
            if present(record) {
                *count += 1;
            }
        }
    }
    groups
}

/// Sum of all non-null amounts.
pub fn total_amount<'a, I>(records: I) -> f64
where
    I: IntoIterator<Item = &'a FundingRecord>,
{
    records
        .into_iter()
        .filter_map(|r| r.amount)
        .fold(0.0, |acc, amount| acc + amount)
}

/// Number of distinct non-null values.
pub fn distinct<'a, I, F>(records: I, value: F) -> usize
where
    I: IntoIterator<Item = &'a FundingRecord>,
    F: Fn(&'a FundingRecord) -> Option<&'a str>,
{
    records.into_iter().filter_map(value).collect::<BTreeSet<_>>().len()
}

/// The `n` largest groups, descending. Ties keep ascending key order.
pub fn top_n<K: Ord>(groups: BTreeMap<K, f64>, n: usize) -> Vec<(K, f64)> {
    let mut entries: Vec<(K, f64)> = groups.into_iter().collect();
    entries.sort_by(|a, b| b.1.total_cmp(&a.1));
    entries.truncate(n);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(startup: Option<&str>, city: Option<&str>, amount: Option<f64>) -> FundingRecord {
        FundingRecord {
            date: None,
            startup: startup.map(str::to_string),
            vertical: None,
            city: city.map(str::to_string),
            investor: None,
            round: None,
            amount,
        }
    }

    #[test]
    fn test_round_half_even() {
        assert_eq!(round_amount(17.5), 18.0);
        assert_eq!(round_amount(16.5), 16.0);
        assert_eq!(round_amount(16.51), 17.0);
        assert_eq!(round_amount(-2.5), -2.0);
        assert!(round_amount(-0.4).is_sign_positive());
    }

    #[test]
    fn test_total_of_nothing_is_positive_zero() {
        let records = vec![record(Some("A"), None, None)];
        assert!(total_amount(&records).is_sign_positive());
        assert!(total_amount(&Vec::<FundingRecord>::new()).is_sign_positive());
    }

    #[test]
    fn test_sum_by_skips_null_keys_and_amounts() {
        let records = vec![
            record(Some("A"), None, Some(10.0)),
            record(Some("A"), None, None),
            record(Some("B"), None, None),
            record(None, None, Some(99.0)),
        ];
        let sums = sum_by(&records, |r| r.startup.clone());
        assert_eq!(sums.len(), 2);
        assert_eq!(sums["A"], 10.0);
        assert_eq!(sums["B"], 0.0);
    }

    #[test]
    fn test_null_category_is_own_bucket() {
        let records = vec![
            record(Some("A"), Some("Pune"), Some(1.0)),
            record(Some("B"), None, Some(2.0)),
            record(Some("C"), None, Some(3.0)),
        ];
        let sums = sum_by(&records, |r| category(&r.city));
        assert_eq!(sums["Pune"], 1.0);
        assert_eq!(sums[UNKNOWN_LABEL], 5.0);
    }

    #[test]
    fn test_count_by_counts_present_only() {
        let records = vec![
            record(Some("A"), Some("Pune"), Some(1.0)),
            record(Some("B"), Some("Pune"), None),
            record(Some("C"), Some("Goa"), None),
        ];
        let counts = count_by(&records, |r| category(&r.city), |r| r.amount.is_some());
        assert_eq!(counts["Pune"], 1);
        assert_eq!(counts["Goa"], 0);
    }

    #[test]
    fn test_top_n_descending_with_stable_ties() {
        let groups: BTreeMap<String, f64> = [("b", 5.0), ("a", 5.0), ("c", 9.0), ("d", 1.0)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        let top = top_n(groups, 3);
        assert_eq!(
            top,
            vec![("c".to_string(), 9.0), ("a".to_string(), 5.0), ("b".to_string(), 5.0)]
        );
    }

    #[test]
    fn test_distinct_ignores_nulls() {
        let records = vec![
            record(Some("A"), None, None),
            record(Some("A"), None, None),
            record(None, None, None),
            record(Some("B"), None, None),
        ];
        assert_eq!(distinct(&records, |r| r.startup.as_deref()), 2);
    }
}
