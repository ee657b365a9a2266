//! Positional access: `first`, `last`, `only`, `empty`, `not_empty`, `index`.

use onceseq_core::error::{Error, Result};

/// The first element, pulling exactly one.
pub fn first<I: IntoIterator>(iter: I) -> Option<I::Item> {
    iter.into_iter().next()
}

/// The final element. Drains the source.
pub fn last<I: IntoIterator>(iter: I) -> Option<I::Item> {
    let mut last = None;
    for element in iter {
        last = Some(element);
    }
    last
}

/// The element of a one-element sequence; `None` for zero or several.
///
/// Pulls at most two elements.
pub fn only<I: IntoIterator>(iter: I) -> Option<I::Item> {
    let mut it = iter.into_iter();
    let first = it.next()?;
    match it.next() {
        Some(_) => None,
        None => Some(first),
    }
}

/// True when the first pull reports done.
pub fn empty<I: IntoIterator>(iter: I) -> bool {
    iter.into_iter().next().is_none()
}

pub fn not_empty<I: IntoIterator>(iter: I) -> bool {
    !empty(iter)
}

/// An argument accepted by [`index`].
///
/// Signed integers fail when negative; floats fail when negative, non-finite
/// or non-integral. Valid values past `usize::MAX` saturate, since no source
/// reaches that position.
pub trait IndexArg: Copy {
    fn to_index(self) -> Result<usize>;
}

impl IndexArg for usize {
    fn to_index(self) -> Result<usize> {
        Ok(self)
    }
}

macro_rules! unsigned_index_arg {
    ($($t:ty),*) => {
        $(
            impl IndexArg for $t {
                fn to_index(self) -> Result<usize> {
                    Ok(usize::try_from(self).unwrap_or(usize::MAX))
                }
            }
        )*
    };
}

unsigned_index_arg!(u8, u16, u32, u64, u128);

macro_rules! signed_index_arg {
    ($($t:ty),*) => {
        $(
            impl IndexArg for $t {
                fn to_index(self) -> Result<usize> {
                    if self < 0 {
                        return Err(Error::illegal_index(self));
                    }
                    Ok(usize::try_from(self).unwrap_or(usize::MAX))
                }
            }
        )*
    };
}

signed_index_arg!(i8, i16, i32, i64, i128, isize);

macro_rules! float_index_arg {
    ($($t:ty),*) => {
        $(
            impl IndexArg for $t {
                fn to_index(self) -> Result<usize> {
                    if !self.is_finite() || self < 0.0 || self.fract() != 0.0 {
                        return Err(Error::illegal_index(self));
                    }
                    // `as` saturates at `usize::MAX`.
                    Ok(self as usize)
                }
            }
        )*
    };
}

float_index_arg!(f32, f64);

/// The element at position `index` (0-based), or `None` when the source is
/// shorter.
///
/// A malformed index is rejected before the source is touched.
pub fn index<I, N>(iter: I, index: N) -> Result<Option<I::Item>>
where
    I: IntoIterator,
    N: IndexArg,
{
    let n = index.to_index()?;
    Ok(iter.into_iter().nth(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first() {
        assert_eq!(first(vec![4, 5]), Some(4));
        assert_eq!(first(Vec::<i32>::new()), None);
    }

    #[test]
    fn test_last() {
        assert_eq!(last(Vec::<i32>::new()), None);
        assert_eq!(last(vec![1, 2, 3]), Some(3));
    }

    #[test]
    fn test_only() {
        assert_eq!(only(Vec::<i32>::new()), None);
        assert_eq!(only(vec![4]), Some(4));
        assert_eq!(only(vec![3, 4, 5]), None);
    }

    #[test]
    fn test_only_pulls_at_most_two() {
        let mut source = vec![3, 4, 5].into_iter();
        assert_eq!(only(&mut source), None);
        assert_eq!(source.next(), Some(5));
    }

    #[test]
    fn test_empty() {
        assert!(empty(Vec::<i32>::new()));
        assert!(!empty(vec![1]));
        assert!(!empty(vec![1, 2, 3]));
        assert!(!not_empty(Vec::<i32>::new()));
        assert!(not_empty(vec![1]));
        assert!(not_empty(vec![1, 2, 3]));
    }

    #[test]
    fn test_index() {
        assert_eq!(index(vec![1, 2, 3, 4, 3, 2, 1], 2usize), Ok(Some(3)));
        assert_eq!(index(vec![1, 2, 3, 4, 3, 2, 1], 7), Ok(None));
        assert_eq!(index(vec![1, 2, 3], 0i64), Ok(Some(1)));
        assert_eq!(index(vec![1, 2, 3], 1.0), Ok(Some(2)));
    }

    #[test]
    fn test_index_rejects_malformed_arguments() {
        assert_eq!(
            index(vec![1, 2, 3], -1),
            Err(Error::IllegalIndex("-1".into()))
        );
        assert!(index(vec![1, 2, 3], 1.5).is_err());
        assert!(index(vec![1, 2, 3], -0.5f32).is_err());
        assert!(index(vec![1, 2, 3], f64::INFINITY).is_err());
        assert!(index(vec![1, 2, 3], f64::NAN).is_err());
    }

    #[test]
    fn test_index_past_pointer_width_is_out_of_range() {
        assert_eq!(index(vec![1, 2, 3], 1e20f64), Ok(None));
        assert_eq!(index(vec![1, 2, 3], 2f64.powi(64)), Ok(None));
        assert_eq!(index(vec![1, 2, 3], f32::MAX), Ok(None));
        assert_eq!(index(vec![1, 2, 3], u64::MAX), Ok(None));
        assert_eq!(index(vec![1, 2, 3], u128::MAX), Ok(None));
        assert_eq!(index(vec![1, 2, 3], i128::MAX), Ok(None));
        assert_eq!(u128::MAX.to_index(), Ok(usize::MAX));
        assert_eq!(1e300f64.to_index(), Ok(usize::MAX));
    }

    #[test]
    fn test_index_rejects_before_pulling() {
        let mut source = vec![1, 2].into_iter();
        assert!(index(&mut source, -2).is_err());
        assert_eq!(source.len(), 2);
    }
}
