//! Single-pass grouping into insertion-ordered maps.

use std::hash::Hash;

use indexmap::IndexMap;

/// All elements per key, in encounter order.
pub fn key_by<I, K, F>(iter: I, mut select: F) -> IndexMap<K, Vec<I::Item>>
where
    I: IntoIterator,
    K: Hash + Eq,
    F: FnMut(&I::Item, usize) -> K,
{
    map_key_by(iter, |element, index| (select(&element, index), element))
}

/// The first element seen per key.
pub fn key_first_by<I, K, F>(iter: I, mut select: F) -> IndexMap<K, I::Item>
where
    I: IntoIterator,
    K: Hash + Eq,
    F: FnMut(&I::Item, usize) -> K,
{
    let mut groups = IndexMap::new();
    for (index, element) in iter.into_iter().enumerate() {
        groups.entry(select(&element, index)).or_insert(element);
    }
    groups
}

/// The last element seen per key. Keys keep the position of their first
/// occurrence.
pub fn key_last_by<I, K, F>(iter: I, mut select: F) -> IndexMap<K, I::Item>
where
    I: IntoIterator,
    K: Hash + Eq,
    F: FnMut(&I::Item, usize) -> K,
{
    let mut groups = IndexMap::new();
    for (index, element) in iter.into_iter().enumerate() {
        groups.insert(select(&element, index), element);
    }
    groups
}

/// Like [`key_by`], but `project` chooses both the key and the stored value.
pub fn map_key_by<I, K, V, F>(iter: I, mut project: F) -> IndexMap<K, Vec<V>>
where
    I: IntoIterator,
    K: Hash + Eq,
    F: FnMut(I::Item, usize) -> (K, V),
{
    let mut groups: IndexMap<K, Vec<V>> = IndexMap::new();
    for (index, element) in iter.into_iter().enumerate() {
        let (key, value) = project(element, index);
        groups.entry(key).or_default().push(value);
    }
    groups
}
