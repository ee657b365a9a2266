//! Numeric and boolean folds.

use std::borrow::Borrow;
use std::ops::{Add, Mul};

use num_traits::{One, ToPrimitive, Zero};

use crate::search::find_index;

/// Sum, seeded at zero.
pub fn sum<I>(iter: I) -> I::Item
where
    I: IntoIterator,
    I::Item: Zero + Add<Output = I::Item>,
{
    iter.into_iter().fold(I::Item::zero(), |total, n| total + n)
}

/// Product, seeded at one.
pub fn product<I>(iter: I) -> I::Item
where
    I: IntoIterator,
    I::Item: One + Mul<Output = I::Item>,
{
    iter.into_iter().fold(I::Item::one(), |total, n| total * n)
}

/// Arithmetic mean, or `None` for an empty source.
///
/// Elements with no `f64` representation count as NaN.
pub fn average<I>(iter: I) -> Option<f64>
where
    I: IntoIterator,
    I::Item: ToPrimitive,
{
    let (total, count) = iter.into_iter().fold((0.0, 0usize), |(total, count), n| {
        (total + n.to_f64().unwrap_or(f64::NAN), count + 1)
    });
    if count == 0 {
        None
    } else {
        Some(total / count as f64)
    }
}

/// True unless some element is `false`. Stops at the first `false`.
pub fn and<I>(iter: I) -> bool
where
    I: IntoIterator,
    I::Item: Borrow<bool>,
{
    find_index(iter, |b, _| !*b.borrow()).is_none()
}

/// True if some element is `true`. Stops at the first `true`.
pub fn or<I>(iter: I) -> bool
where
    I: IntoIterator,
    I::Item: Borrow<bool>,
{
    find_index(iter, |b, _| *b.borrow()).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum() {
        assert_eq!(sum(vec![1, 2, 3, 2]), 8);
        assert_eq!(sum(Vec::<i64>::new()), 0);
        assert_eq!(sum(vec![0.5, 0.25]), 0.75);
    }

    #[test]
    fn test_product() {
        assert_eq!(product(vec![1, 2, 3, 2]), 12);
        assert_eq!(product(Vec::<u32>::new()), 1);
    }

    #[test]
    fn test_average() {
        assert_eq!(average(vec![1, 2, 3, 2]), Some(2.0));
        assert_eq!(average(vec![1.0, 2.0]), Some(1.5));
        assert_eq!(average(Vec::<i32>::new()), None);
    }

    #[test]
    fn test_and() {
        assert!(and(vec![true, true]));
        assert!(!and(vec![true, false, true]));
        assert!(and(Vec::<bool>::new()));
        assert!(and([&true, &true]));
    }

    #[test]
    fn test_or() {
        assert!(or(vec![false, true]));
        assert!(!or(vec![false, false]));
        assert!(!or(Vec::<bool>::new()));
    }

    #[test]
    fn test_and_short_circuits() {
        let mut source = vec![true, false, true, true].into_iter();
        assert!(!and(&mut source));
        assert_eq!(source.len(), 2);
    }
}
