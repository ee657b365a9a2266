//! Curried terminal consumers: `contains_fn(3)` is `|iter| contains(iter, 3)`.

use std::cmp::Ordering;
use std::hash::Hash;

use indexmap::IndexMap;
use onceseq_core::Result;
use onceseq_terminal::{
    all, any, contains, equal, equal_by, find, find_index, fold, fold1, index, index_of, key_by,
    key_first_by, key_last_by, map_key_by, maximum_by, maximum_with, minimum_by, minimum_with,
    not_equal, not_equal_by, prefix_match, prefix_match_by, IndexArg,
};

pub fn index_fn<I, N>(n: N) -> impl FnOnce(I) -> Result<Option<I::Item>>
where
    I: IntoIterator,
    N: IndexArg,
{
    move |iter| index(iter, n)
}

/// Compare the piped source against `b`.
pub fn equal_fn<A, B>(b: B) -> impl FnOnce(A) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    A::Item: PartialEq<B::Item>,
{
    move |a| equal(a, b)
}

pub fn equal_by_fn<A, B, F>(b: B, elements_equal: F) -> impl FnOnce(A) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(A::Item, B::Item) -> bool,
{
    move |a| equal_by(a, b, elements_equal)
}

pub fn not_equal_fn<A, B>(b: B) -> impl FnOnce(A) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    A::Item: PartialEq<B::Item>,
{
    move |a| not_equal(a, b)
}

pub fn not_equal_by_fn<A, B, F>(b: B, elements_equal: F) -> impl FnOnce(A) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(A::Item, B::Item) -> bool,
{
    move |a| not_equal_by(a, b, elements_equal)
}

/// True when `prefix` is a prefix of the piped source.
pub fn prefix_match_fn<A, B>(prefix: B) -> impl FnOnce(A) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    A::Item: PartialEq<B::Item>,
{
    move |a| prefix_match(a, prefix)
}

pub fn prefix_match_by_fn<A, B, F>(prefix: B, elements_equal: F) -> impl FnOnce(A) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(A::Item, B::Item) -> bool,
{
    move |a| prefix_match_by(a, prefix, elements_equal)
}

pub fn maximum_with_fn<I, C>(compare: C) -> impl FnOnce(I) -> Option<I::Item>
where
    I: IntoIterator,
    C: Fn(&I::Item, &I::Item) -> Ordering,
{
    move |iter| maximum_with(iter, compare)
}

pub fn minimum_with_fn<I, C>(compare: C) -> impl FnOnce(I) -> Option<I::Item>
where
    I: IntoIterator,
    C: Fn(&I::Item, &I::Item) -> Ordering,
{
    move |iter| minimum_with(iter, compare)
}

pub fn maximum_by_fn<I, K, F>(select: F) -> impl FnOnce(I) -> Option<I::Item>
where
    I: IntoIterator,
    K: PartialOrd,
    F: FnMut(&I::Item, usize) -> K,
{
    move |iter| maximum_by(iter, select)
}

pub fn minimum_by_fn<I, K, F>(select: F) -> impl FnOnce(I) -> Option<I::Item>
where
    I: IntoIterator,
    K: PartialOrd,
    F: FnMut(&I::Item, usize) -> K,
{
    move |iter| minimum_by(iter, select)
}

pub fn fold_fn<I, A, F>(f: F, initial: A) -> impl FnOnce(I) -> A
where
    I: IntoIterator,
    F: FnMut(A, I::Item, usize) -> A,
{
    move |iter| fold(iter, f, initial)
}

pub fn fold1_fn<I, F>(f: F) -> impl FnOnce(I) -> Result<I::Item>
where
    I: IntoIterator,
    F: FnMut(I::Item, I::Item, usize) -> I::Item,
{
    move |iter| fold1(iter, f)
}

pub fn key_by_fn<I, K, F>(select: F) -> impl FnOnce(I) -> IndexMap<K, Vec<I::Item>>
where
    I: IntoIterator,
    K: Hash + Eq,
    F: FnMut(&I::Item, usize) -> K,
{
    move |iter| key_by(iter, select)
}

pub fn key_first_by_fn<I, K, F>(select: F) -> impl FnOnce(I) -> IndexMap<K, I::Item>
where
    I: IntoIterator,
    K: Hash + Eq,
    F: FnMut(&I::Item, usize) -> K,
{
    move |iter| key_first_by(iter, select)
}

pub fn key_last_by_fn<I, K, F>(select: F) -> impl FnOnce(I) -> IndexMap<K, I::Item>
where
    I: IntoIterator,
    K: Hash + Eq,
    F: FnMut(&I::Item, usize) -> K,
{
    move |iter| key_last_by(iter, select)
}

pub fn map_key_by_fn<I, K, V, F>(project: F) -> impl FnOnce(I) -> IndexMap<K, Vec<V>>
where
    I: IntoIterator,
    K: Hash + Eq,
    F: FnMut(I::Item, usize) -> (K, V),
{
    move |iter| map_key_by(iter, project)
}

pub fn contains_fn<I, V>(value: V) -> impl FnOnce(I) -> bool
where
    I: IntoIterator,
    I::Item: PartialEq<V>,
{
    move |iter| contains(iter, value)
}

pub fn index_of_fn<I, V>(value: V) -> impl FnOnce(I) -> Option<usize>
where
    I: IntoIterator,
    I::Item: PartialEq<V>,
{
    move |iter| index_of(iter, value)
}

pub fn find_index_fn<I, P>(predicate: P) -> impl FnOnce(I) -> Option<usize>
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    move |iter| find_index(iter, predicate)
}

pub fn find_fn<I, P>(predicate: P) -> impl FnOnce(I) -> Option<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    move |iter| find(iter, predicate)
}

pub fn any_fn<I, P>(predicate: P) -> impl FnOnce(I) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    move |iter| any(iter, predicate)
}

pub fn all_fn<I, P>(predicate: P) -> impl FnOnce(I) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    move |iter| all(iter, predicate)
}
