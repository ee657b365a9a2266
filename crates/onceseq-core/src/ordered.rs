//! Default ordering and equality collaborators.
//!
//! Primitives that compare elements take an optional override; these are the
//! defaults they fall back on.

use std::cmp::Ordering;

/// A total comparison between two elements.
pub type Comparator<'a, T> = dyn Fn(&T, &T) -> Ordering + 'a;

/// Natural ordering. Incomparable pairs (NaN) compare as equal, so they never
/// displace a running extremum.
#[inline]
pub fn compare<T: PartialOrd + ?Sized>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Default element equality.
#[inline]
pub fn equal<T: PartialEq + ?Sized>(a: &T, b: &T) -> bool {
    a == b
}

/// Turn a comparator around.
pub fn reverse<T, F>(compare: F) -> impl Fn(&T, &T) -> Ordering
where
    F: Fn(&T, &T) -> Ordering,
{
    move |a: &T, b: &T| compare(b, a)
}
