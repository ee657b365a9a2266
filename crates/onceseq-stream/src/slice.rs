//! Positional windows: `slice`, `take`, `drop`.

use std::iter::FusedIterator;

use crate::{hint_cap, hint_sub, DONE_HINT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Before,
    During,
    After,
}

/// Elements with `start <= index < end` of the source.
#[derive(Debug, Clone)]
pub struct Slice<I> {
    iter: I,
    start: usize,
    end: Option<usize>,
    /// Position of the next element the source will yield.
    index: usize,
    phase: Phase,
}

/// `end = None` means unbounded. When `end <= start` the result is done
/// without pulling the source at all.
pub fn slice<I: IntoIterator>(iter: I, start: usize, end: Option<usize>) -> Slice<I::IntoIter> {
    let phase = match end {
        Some(end) if end <= start => Phase::After,
        _ => Phase::Before,
    };
    Slice {
        iter: iter.into_iter(),
        start,
        end,
        index: 0,
        phase,
    }
}

impl<I: Iterator> Iterator for Slice<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.phase == Phase::Before {
            while self.index < self.start {
                if self.iter.next().is_none() {
                    self.phase = Phase::After;
                    return None;
                }
                self.index += 1;
            }
            self.phase = Phase::During;
        }

        match self.phase {
            Phase::During => {
                if self.end.is_some_and(|end| self.index >= end) {
                    self.phase = Phase::After;
                    return None;
                }
                match self.iter.next() {
                    Some(element) => {
                        self.index += 1;
                        Some(element)
                    }
                    None => {
                        self.phase = Phase::After;
                        None
                    }
                }
            }
            _ => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.phase == Phase::After {
            return DONE_HINT;
        }
        let from = self.index.max(self.start);
        let hint = hint_sub(self.iter.size_hint(), from - self.index);
        match self.end {
            Some(end) => hint_cap(hint, end.saturating_sub(from)),
            None => hint,
        }
    }
}

impl<I: Iterator> FusedIterator for Slice<I> {}

/// The first `count` elements.
#[derive(Debug, Clone)]
pub struct Take<I> {
    iter: I,
    remaining: usize,
    phase: Phase,
}

pub fn take<I: IntoIterator>(iter: I, count: usize) -> Take<I::IntoIter> {
    Take {
        iter: iter.into_iter(),
        remaining: count,
        phase: if count == 0 {
            Phase::After
        } else {
            Phase::During
        },
    }
}

impl<I: Iterator> Iterator for Take<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.phase != Phase::During {
            return None;
        }
        match self.iter.next() {
            Some(element) => {
                self.remaining -= 1;
                if self.remaining == 0 {
                    self.phase = Phase::After;
                }
                Some(element)
            }
            None => {
                self.phase = Phase::After;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.phase {
            Phase::During => hint_cap(self.iter.size_hint(), self.remaining),
            _ => DONE_HINT,
        }
    }
}

impl<I: Iterator> FusedIterator for Take<I> {}

/// Everything after the first `count` elements.
#[derive(Debug, Clone)]
pub struct Dropping<I> {
    iter: I,
    count: usize,
    phase: Phase,
}

/// With `count == 0` the source passes through untouched.
pub fn drop<I: IntoIterator>(iter: I, count: usize) -> Dropping<I::IntoIter> {
    Dropping {
        iter: iter.into_iter(),
        count,
        phase: if count == 0 {
            Phase::During
        } else {
            Phase::Before
        },
    }
}

impl<I: Iterator> Iterator for Dropping<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.phase == Phase::Before {
            for _ in 0..self.count {
                if self.iter.next().is_none() {
                    self.phase = Phase::After;
                    return None;
                }
            }
            self.phase = Phase::During;
        }
        if self.phase == Phase::After {
            return None;
        }
        let element = self.iter.next();
        if element.is_none() {
            self.phase = Phase::After;
        }
        element
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.phase {
            Phase::Before => hint_sub(self.iter.size_hint(), self.count),
            Phase::During => self.iter.size_hint(),
            Phase::After => DONE_HINT,
        }
    }
}

impl<I: Iterator> FusedIterator for Dropping<I> {}
