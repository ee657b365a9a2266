use std::hash::Hash;

use indexmap::IndexSet;
use onceseq_core::nullable::is_null;

/// Drain into a vector, in order.
pub fn to_array<I: IntoIterator>(iter: I) -> Vec<I::Item> {
    iter.into_iter().collect()
}

/// Drain into a set of distinct elements, kept in first-seen order.
pub fn to_set<I>(iter: I) -> IndexSet<I::Item>
where
    I: IntoIterator,
    I::Item: Hash + Eq,
{
    iter.into_iter().collect()
}

/// All the present values, or `None` if any element was absent.
///
/// The whole source is drained either way; a partial collection is discarded.
pub fn none_null<I, T>(iter: I) -> Option<Vec<T>>
where
    I: IntoIterator<Item = Option<T>>,
{
    let mut values = Vec::new();
    let mut saw_null = false;
    for element in iter {
        if is_null(&element) {
            saw_null = true;
            values.clear();
        } else if !saw_null {
            values.extend(element);
        }
    }
    if saw_null {
        None
    } else {
        Some(values)
    }
}
