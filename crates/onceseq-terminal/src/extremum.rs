//! Single-pass extrema.
//!
//! A later element replaces the running extremum only when it is strictly
//! greater (or strictly lesser), so the first of several equal candidates
//! wins. `minimum` is `maximum` under the reversed comparator.

use std::cmp::Ordering;

use onceseq_core::ordered::{compare, reverse};

fn maximum_of<I, C>(iter: I, compare: C) -> Option<I::Item>
where
    I: IntoIterator,
    C: Fn(&I::Item, &I::Item) -> Ordering,
{
    let mut it = iter.into_iter();
    let mut max = it.next()?;
    for element in it {
        if compare(&element, &max) == Ordering::Greater {
            max = element;
        }
    }
    Some(max)
}

/// Largest element under natural ordering.
pub fn maximum<I>(iter: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    maximum_of(iter, compare::<I::Item>)
}

pub fn maximum_with<I, C>(iter: I, compare: C) -> Option<I::Item>
where
    I: IntoIterator,
    C: Fn(&I::Item, &I::Item) -> Ordering,
{
    maximum_of(iter, compare)
}

/// Smallest element under natural ordering.
pub fn minimum<I>(iter: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    maximum_of(iter, reverse(compare::<I::Item>))
}

pub fn minimum_with<I, C>(iter: I, compare: C) -> Option<I::Item>
where
    I: IntoIterator,
    C: Fn(&I::Item, &I::Item) -> Ordering,
{
    maximum_of(iter, reverse(compare))
}

/// Element with the largest `select(&element, index)`.
pub fn maximum_by<I, K, F>(iter: I, mut select: F) -> Option<I::Item>
where
    I: IntoIterator,
    K: PartialOrd,
    F: FnMut(&I::Item, usize) -> K,
{
    let mut it = iter.into_iter();
    let mut max = it.next()?;
    let mut max_by = select(&max, 0);
    for (index, element) in it.enumerate() {
        let by = select(&element, index + 1);
        if by > max_by {
            max = element;
            max_by = by;
        }
    }
    Some(max)
}

/// Element with the smallest `select(&element, index)`.
pub fn minimum_by<I, K, F>(iter: I, mut select: F) -> Option<I::Item>
where
    I: IntoIterator,
    K: PartialOrd,
    F: FnMut(&I::Item, usize) -> K,
{
    let mut it = iter.into_iter();
    let mut min = it.next()?;
    let mut min_by = select(&min, 0);
    for (index, element) in it.enumerate() {
        let by = select(&element, index + 1);
        if by < min_by {
            min = element;
            min_by = by;
        }
    }
    Some(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(s: &&str, _: usize) -> f64 {
        s.parse().unwrap_or(f64::NAN)
    }

    #[test]
    fn test_maximum() {
        assert_eq!(maximum(vec![1, 2, 3]), Some(3));
        assert_eq!(maximum(vec![1, 2, 3, 4, 3, 2, 1]), Some(4));
        assert_eq!(maximum(Vec::<i32>::new()), None);
        assert_eq!(maximum(vec!["b", "c", "a"]), Some("c"));
    }

    #[test]
    fn test_minimum() {
        assert_eq!(minimum(vec![1, 2, 3]), Some(1));
        assert_eq!(minimum(vec![2, 3, 4, 1, 2, 3]), Some(1));
        assert_eq!(minimum(Vec::<i32>::new()), None);
        assert_eq!(minimum(vec![true, false]), Some(false));
    }

    #[test]
    fn test_with_comparator_first_wins_ties() {
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
        assert_eq!(maximum_with(vec!["aa", "b", "cc"], by_len), Some("aa"));
        assert_eq!(minimum_with(vec!["aa", "b", "c"], by_len), Some("b"));
    }

    #[test]
    fn test_borrowed_elements() {
        let text = String::from("pear fig banana kiwi");
        let words: Vec<&str> = text.split(' ').collect();
        assert_eq!(maximum(words.iter().copied()), Some("pear"));
        assert_eq!(minimum(words.iter().copied()), Some("banana"));
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
        assert_eq!(maximum_with(words.clone(), by_len), Some("banana"));
        assert_eq!(minimum_with(words, by_len), Some("fig"));
    }

    #[test]
    fn test_maximum_by() {
        assert_eq!(maximum_by(vec!["1", "2", "3"], number), Some("3"));
        assert_eq!(
            maximum_by(vec!["1", "2", "3", "4", "3", "2", "1"], number),
            Some("4")
        );
        assert_eq!(maximum_by(Vec::<&str>::new(), number), None);
    }

    #[test]
    fn test_minimum_by() {
        assert_eq!(minimum_by(vec!["1", "2", "3"], number), Some("1"));
        assert_eq!(
            minimum_by(vec!["2", "3", "4", "1", "2", "3"], number),
            Some("1")
        );
        assert_eq!(minimum_by(Vec::<&str>::new(), number), None);
    }

    #[test]
    fn test_by_first_seen_wins_ties() {
        let pairs = vec![(1, 'a'), (3, 'b'), (3, 'c'), (0, 'd'), (0, 'e')];
        assert_eq!(maximum_by(pairs.clone(), |p, _| p.0), Some((3, 'b')));
        assert_eq!(minimum_by(pairs, |p, _| p.0), Some((0, 'd')));
    }

    #[test]
    fn test_by_receives_index() {
        assert_eq!(maximum_by(vec![9, 9, 9], |_, i| i), Some(9));
        let mut seen = Vec::new();
        maximum_by(vec![5, 6, 7], |_, i| {
            seen.push(i);
            i
        });
        assert_eq!(seen, vec![0, 1, 2]);
    }
}
