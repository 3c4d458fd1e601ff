//! Domain-specific assertion macros for cureat harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear which search invariant was violated.

/// Assert that a result set holds exactly these ids, in this order.
///
/// ```rust
/// assert_ids!(results, ["101", "103"]);
/// ```
#[macro_export]
macro_rules! assert_ids {
    ($results:expr, [$($id:expr),* $(,)?]) => {{
        let results = &$results;
        let actual: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        let expected: Vec<&str> = vec![$($id),*];
        pretty_assertions::assert_eq!(actual, expected, "result ids (in order)");
    }};
}

/// Assert that `$sub` is a subset of `$sup`, comparing by id.
#[macro_export]
macro_rules! assert_subset {
    ($sub:expr, $sup:expr) => {{
        let (sub, sup) = (&$sub, &$sup);
        let sup: std::collections::HashSet<&str> = sup.iter().map(|r| r.id.as_str()).collect();
        let extra: Vec<&str> = sub
            .iter()
            .map(|r| r.id.as_str())
            .filter(|id| !sup.contains(id))
            .collect();
        if !extra.is_empty() {
            panic!(
                "assert_subset! failed: {} id(s) not present in the superset: {:?}",
                extra.len(),
                extra
            );
        }
    }};
}

/// Ids of `records`, in order. Useful for `prop_assert_eq!`.
pub fn ids(records: &[cureat::Record]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}
