//! Flattening: `concat`, `concat_map`, `prepend`, `append`.

use std::fmt;
use std::iter::FusedIterator;

use crate::map::{map, Map};
use crate::DONE_HINT;

#[derive(Debug, Clone)]
enum ConcatState<J> {
    Between,
    Inner(J),
    After,
}

/// The inner sequences of an iterator-of-iterables, in order.
///
/// The outer source is pulled only once the current inner one is exhausted.
pub struct Concat<O>
where
    O: Iterator,
    O::Item: IntoIterator,
{
    outer: O,
    state: ConcatState<<O::Item as IntoIterator>::IntoIter>,
}

impl<O> Clone for Concat<O>
where
    O: Iterator + Clone,
    O::Item: IntoIterator,
    <O::Item as IntoIterator>::IntoIter: Clone,
{
    fn clone(&self) -> Self {
        Concat {
            outer: self.outer.clone(),
            state: self.state.clone(),
        }
    }
}

impl<O> fmt::Debug for Concat<O>
where
    O: Iterator + fmt::Debug,
    O::Item: IntoIterator,
    <O::Item as IntoIterator>::IntoIter: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Concat")
            .field("outer", &self.outer)
            .field("state", &self.state)
            .finish()
    }
}

pub fn concat<O>(iters: O) -> Concat<O::IntoIter>
where
    O: IntoIterator,
    O::Item: IntoIterator,
{
    Concat {
        outer: iters.into_iter(),
        state: ConcatState::Between,
    }
}

impl<O> Iterator for Concat<O>
where
    O: Iterator,
    O::Item: IntoIterator,
{
    type Item = <O::Item as IntoIterator>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match &mut self.state {
                ConcatState::Inner(inner) => {
                    if let Some(element) = inner.next() {
                        return Some(element);
                    }
                    self.state = ConcatState::Between;
                }
                ConcatState::Between => match self.outer.next() {
                    Some(next) => self.state = ConcatState::Inner(next.into_iter()),
                    None => {
                        self.state = ConcatState::After;
                        return None;
                    }
                },
                ConcatState::After => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            ConcatState::Inner(inner) => (inner.size_hint().0, None),
            ConcatState::Between => (0, None),
            ConcatState::After => DONE_HINT,
        }
    }
}

impl<O> FusedIterator for Concat<O>
where
    O: Iterator,
    O::Item: IntoIterator,
{
}

/// `concat` of `map`: `f(element, index)` produces an iterable per element.
pub fn concat_map<I, U, F>(iter: I, f: F) -> Concat<Map<I::IntoIter, F>>
where
    I: IntoIterator,
    U: IntoIterator,
    F: FnMut(I::Item, usize) -> U,
{
    concat(map(iter, f))
}

#[derive(Debug, Clone)]
enum JoinState {
    First,
    Second,
    Done,
}

/// Two sequences back to back: the two-element case of [`concat`], for
/// sources whose iterator types differ.
#[derive(Debug, Clone)]
pub struct Joined<A, B> {
    first: A,
    second: B,
    state: JoinState,
}

/// `prefix` followed by `iter`.
pub fn prepend<I, P>(iter: I, prefix: P) -> Joined<P::IntoIter, I::IntoIter>
where
    I: IntoIterator,
    P: IntoIterator<Item = I::Item>,
{
    Joined {
        first: prefix.into_iter(),
        second: iter.into_iter(),
        state: JoinState::First,
    }
}

/// `iter` followed by `suffix`.
pub fn append<I, S>(iter: I, suffix: S) -> Joined<I::IntoIter, S::IntoIter>
where
    I: IntoIterator,
    S: IntoIterator<Item = I::Item>,
{
    Joined {
        first: iter.into_iter(),
        second: suffix.into_iter(),
        state: JoinState::First,
    }
}

impl<A, B> Iterator for Joined<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        if let JoinState::First = self.state {
            if let Some(element) = self.first.next() {
                return Some(element);
            }
            self.state = JoinState::Second;
        }
        match self.state {
            JoinState::Second => {
                let element = self.second.next();
                if element.is_none() {
                    self.state = JoinState::Done;
                }
                element
            }
            _ => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let add = |(alo, ahi): (usize, Option<usize>), (blo, bhi): (usize, Option<usize>)| {
            let hi = match (ahi, bhi) {
                (Some(a), Some(b)) => a.checked_add(b),
                _ => None,
            };
            (alo.saturating_add(blo), hi)
        };
        match self.state {
            JoinState::First => add(self.first.size_hint(), self.second.size_hint()),
            JoinState::Second => self.second.size_hint(),
            JoinState::Done => DONE_HINT,
        }
    }
}

impl<A, B> FusedIterator for Joined<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::drain_past_end;

    #[test]
    fn test_concat() {
        let got: Vec<i32> = concat(vec![vec![1, 2], vec![], vec![3], vec![4, 5]]).collect();
        assert_eq!(got, vec![1, 2, 3, 4, 5]);
        let empty: Vec<i32> = concat(vec![Vec::<i32>::new(), Vec::new()]).collect();
        assert!(empty.is_empty());
        let none: Vec<i32> = concat(Vec::<Vec<i32>>::new()).collect();
        assert!(none.is_empty());
    }

    #[test]
    fn test_concat_pulls_outer_lazily() {
        let mut outer = vec![vec![1, 2], vec![3]].into_iter();
        let mut it = concat(&mut outer);
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), Some(2));
        drop(it);
        assert_eq!(outer.len(), 1);
    }

    #[test]
    fn test_concat_stays_done() {
        assert_eq!(drain_past_end(concat(vec![vec![1], vec![2]]), 3), vec![1, 2]);
    }

    #[test]
    fn test_prepend() {
        let all = |a: Vec<i32>, b: Vec<i32>| prepend(b, a).collect::<Vec<_>>();
        assert_eq!(all(vec![1, 2, 3], vec![4, 5, 6]), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(all(vec![], vec![4, 5, 6]), vec![4, 5, 6]);
        assert_eq!(all(vec![1, 2, 3], vec![]), vec![1, 2, 3]);
    }

    #[test]
    fn test_append() {
        let all = |a: Vec<i32>, b: Vec<i32>| append(a, b).collect::<Vec<_>>();
        assert_eq!(all(vec![1, 2, 3], vec![4, 5, 6]), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(all(vec![1, 2, 3], vec![]), vec![1, 2, 3]);
        assert_eq!(all(vec![], vec![4, 5, 6]), vec![4, 5, 6]);
        assert_eq!(append(vec![1], vec![2, 3]).size_hint(), (3, Some(3)));
    }

    #[test]
    fn test_append_mixed_sources() {
        let got: Vec<i32> = append(1..3, vec![7]).collect();
        assert_eq!(got, vec![1, 2, 7]);
        assert_eq!(drain_past_end(append(1..2, 5..6), 3), vec![1, 5]);
    }

    #[test]
    fn test_concat_map() {
        let got: Vec<&str> = concat_map(vec!["1,2,3", "4,5,6"], |s, _| s.split(',')).collect();
        assert_eq!(got, vec!["1", "2", "3", "4", "5", "6"]);
    }
}
