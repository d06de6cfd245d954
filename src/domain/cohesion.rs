use crate::domain::access::AccessMap;
use std::collections::BTreeSet;

/// Tight Class Cohesion: fraction of method pairs that share at least one local property.
///
/// With fewer than two methods there are no pairs; such a class is treated as fully cohesive
/// and the result is 1.0.
pub fn tight_class_cohesion(accesses: &AccessMap) -> f64 {
    let sets: Vec<&BTreeSet<String>> = accesses.values().collect();
    let max_pairs = max_method_pairs(sets.len());
    if max_pairs == 0 {
        return 1.0;
    }

    let mut connected = 0usize;
    for (i, first) in sets.iter().enumerate() {
        for second in &sets[i + 1..] {
            if shares_property(first, second) {
                connected += 1;
            }
        }
    }

    connected as f64 / max_pairs as f64
}

/// Number of unordered method pairs among `method_count` methods.
pub fn max_method_pairs(method_count: usize) -> usize {
    method_count * method_count.saturating_sub(1) / 2
}

// |A ∪ B| < |A| + |B|
fn shares_property(first: &BTreeSet<String>, second: &BTreeSet<String>) -> bool {
    !first.is_disjoint(second)
}
