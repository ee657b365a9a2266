use onceseq_core::error::{Error, Result};

/// Left fold; `f` receives `(accumulator, element, index)`.
pub fn fold<I, A, F>(iter: I, mut f: F, initial: A) -> A
where
    I: IntoIterator,
    F: FnMut(A, I::Item, usize) -> A,
{
    let mut accumulator = initial;
    for (index, element) in iter.into_iter().enumerate() {
        accumulator = f(accumulator, element, index);
    }
    accumulator
}

/// Fold seeded by the first element. Indices passed to `f` start at 1.
///
/// An empty source has no seed and fails with [`Error::EmptyInput`].
pub fn fold1<I, F>(iter: I, mut f: F) -> Result<I::Item>
where
    I: IntoIterator,
    F: FnMut(I::Item, I::Item, usize) -> I::Item,
{
    let mut it = iter.into_iter();
    let seed = it.next().ok_or_else(|| Error::empty_input("fold1"))?;
    Ok(fold(
        it,
        |accumulator, element, index| f(accumulator, element, index + 1),
        seed,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold() {
        assert_eq!(fold(vec![1, 2, 3], |a, e, i| a + e * i as i32, 0), 8);
        assert_eq!(fold(Vec::<i32>::new(), |a, e, _| a + e, 5), 5);
        let joined = fold(vec!["x", "y"], |a: String, e, i| format!("{a}{i}{e}"), String::new());
        assert_eq!(joined, "0x1y");
    }

    #[test]
    fn test_fold1() {
        assert_eq!(fold1(vec![1, 2, 3], |a, e, i| a + e * i as i32), Ok(9));
        assert_eq!(fold1(vec![4], |a, e, _| a + e), Ok(4));
    }

    #[test]
    fn test_fold1_empty_fails() {
        assert_eq!(
            fold1(Vec::<i32>::new(), |a, e, _| a + e),
            Err(Error::EmptyInput { operation: "fold1" })
        );
    }
}
