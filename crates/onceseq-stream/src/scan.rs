//! Running folds that emit every intermediate accumulator.

use std::iter::FusedIterator;
use std::mem;

use crate::DONE_HINT;

#[derive(Debug, Clone)]
enum ScanState<A> {
    Start,
    During(A),
    After,
}

/// `f(accumulator, element, index)` after each element; the seed itself is
/// not emitted.
#[derive(Debug, Clone)]
pub struct Scan<I, F, A> {
    iter: I,
    f: F,
    index: usize,
    state: ScanState<A>,
}

pub fn scan<I, A, F>(iter: I, f: F, initial: A) -> Scan<I::IntoIter, F, A>
where
    I: IntoIterator,
    A: Clone,
    F: FnMut(A, I::Item, usize) -> A,
{
    Scan {
        iter: iter.into_iter(),
        f,
        index: 0,
        state: ScanState::During(initial),
    }
}

impl<I, F, A> Iterator for Scan<I, F, A>
where
    I: Iterator,
    A: Clone,
    F: FnMut(A, I::Item, usize) -> A,
{
    type Item = A;

    fn next(&mut self) -> Option<A> {
        let accumulator = match mem::replace(&mut self.state, ScanState::After) {
            ScanState::During(accumulator) => accumulator,
            ScanState::Start | ScanState::After => return None,
        };
        let element = self.iter.next()?;
        let index = self.index;
        self.index += 1;
        let accumulator = (self.f)(accumulator, element, index);
        self.state = ScanState::During(accumulator.clone());
        Some(accumulator)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            ScanState::After => DONE_HINT,
            _ => self.iter.size_hint(),
        }
    }
}

impl<I, F, A> FusedIterator for Scan<I, F, A>
where
    I: Iterator,
    A: Clone,
    F: FnMut(A, I::Item, usize) -> A,
{
}

/// `scan` seeded by the first element, which is emitted unchanged. Indices
/// passed to `f` start at 1, matching `fold1`.
#[derive(Debug, Clone)]
pub struct Scan1<I: Iterator, F> {
    iter: I,
    f: F,
    index: usize,
    state: ScanState<I::Item>,
}

pub fn scan1<I, F>(iter: I, f: F) -> Scan1<I::IntoIter, F>
where
    I: IntoIterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item, usize) -> I::Item,
{
    Scan1 {
        iter: iter.into_iter(),
        f,
        index: 0,
        state: ScanState::Start,
    }
}

impl<I, F> Iterator for Scan1<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item, usize) -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let accumulator = match mem::replace(&mut self.state, ScanState::After) {
            ScanState::Start => {
                let first = self.iter.next()?;
                self.index = 1;
                first
            }
            ScanState::During(accumulator) => {
                let element = self.iter.next()?;
                let index = self.index;
                self.index += 1;
                (self.f)(accumulator, element, index)
            }
            ScanState::After => return None,
        };
        self.state = ScanState::During(accumulator.clone());
        Some(accumulator)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            ScanState::After => DONE_HINT,
            _ => self.iter.size_hint(),
        }
    }
}

impl<I, F> FusedIterator for Scan1<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item, usize) -> I::Item,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{drain_past_end, Relapsing};

    #[test]
    fn test_scan() {
        assert_eq!(
            scan(vec![1, 2, 3], |a, e, i| a + e * i as i32, 0).collect::<Vec<_>>(),
            vec![0, 2, 8]
        );
        assert_eq!(
            scan(vec!["a", "b", "c"], |a: String, e, i| format!("{a} {i} {e}"), "_".to_string())
                .collect::<Vec<_>>(),
            vec!["_ 0 a", "_ 0 a 1 b", "_ 0 a 1 b 2 c"]
        );
    }

    #[test]
    fn test_scan_empty_emits_nothing() {
        assert_eq!(scan(Vec::<i32>::new(), |a, e, _| a + e, 10).next(), None);
    }

    #[test]
    fn test_scan1() {
        assert_eq!(
            scan1(vec![1, 2, 3], |a, e, i| a + e * i as i32).collect::<Vec<_>>(),
            vec![1, 3, 9]
        );
        assert_eq!(scan1(vec![7], |a, e, _| a + e).collect::<Vec<_>>(), vec![7]);
        assert_eq!(scan1(Vec::<i32>::new(), |a, e, _| a + e).next(), None);
    }

    #[test]
    fn test_scan_stays_done() {
        assert_eq!(
            drain_past_end(scan(Relapsing::new(vec![1, 2]), |a, e, _| a + e, 0), 3),
            vec![1, 3]
        );
        assert_eq!(
            drain_past_end(scan1(Relapsing::new(vec![1, 2]), |a, e, _| a * 10 + e), 3),
            vec![1, 12]
        );
    }
}
