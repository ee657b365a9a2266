//! Predicate-bounded prefixes: `take_while`/`take_until`, `drop_while`/`drop_until`.
//!
//! The `until` forms are the `while` forms with the predicate inverted. In
//! every case the index handed to the predicate counts only elements that
//! were actually tested.

use std::iter::FusedIterator;

use crate::DONE_HINT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Before,
    During,
    After,
}

/// Leading elements while the predicate holds (or, for `take_until`, while
/// it does not).
#[derive(Debug, Clone)]
pub struct TakeWhile<I, P> {
    iter: I,
    predicate: P,
    /// The predicate result that keeps an element.
    keep: bool,
    index: usize,
    phase: Phase,
}

pub fn take_while<I, P>(iter: I, predicate: P) -> TakeWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    TakeWhile {
        iter: iter.into_iter(),
        predicate,
        keep: true,
        index: 0,
        phase: Phase::During,
    }
}

pub fn take_until<I, P>(iter: I, predicate: P) -> TakeWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    TakeWhile {
        keep: false,
        ..take_while(iter, predicate)
    }
}

impl<I, P> Iterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.phase != Phase::During {
            return None;
        }
        match self.iter.next() {
            Some(element) => {
                let index = self.index;
                self.index += 1;
                if (self.predicate)(&element, index) == self.keep {
                    Some(element)
                } else {
                    self.phase = Phase::After;
                    None
                }
            }
            None => {
                self.phase = Phase::After;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.phase {
            Phase::After => DONE_HINT,
            _ => (0, self.iter.size_hint().1),
        }
    }
}

impl<I, P> FusedIterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, usize) -> bool,
{
}

/// The source after its leading run of matching elements has been skipped.
#[derive(Debug, Clone)]
pub struct DropWhile<I, P> {
    iter: I,
    predicate: P,
    /// The predicate result that drops an element.
    skip: bool,
    index: usize,
    phase: Phase,
}

pub fn drop_while<I, P>(iter: I, predicate: P) -> DropWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    DropWhile {
        iter: iter.into_iter(),
        predicate,
        skip: true,
        index: 0,
        phase: Phase::Before,
    }
}

pub fn drop_until<I, P>(iter: I, predicate: P) -> DropWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    DropWhile {
        skip: false,
        ..drop_while(iter, predicate)
    }
}

impl<I, P> Iterator for DropWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let element = match self.phase {
            Phase::Before => {
                self.phase = Phase::During;
                loop {
                    match self.iter.next() {
                        Some(e) => {
                            let index = self.index;
                            self.index += 1;
                            if (self.predicate)(&e, index) != self.skip {
                                break Some(e);
                            }
                        }
                        None => break None,
                    }
                }
            }
            Phase::During => self.iter.next(),
            Phase::After => return None,
        };
        if element.is_none() {
            self.phase = Phase::After;
        }
        element
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.phase {
            Phase::Before => (0, self.iter.size_hint().1),
            Phase::During => self.iter.size_hint(),
            Phase::After => DONE_HINT,
        }
    }
}

impl<I, P> FusedIterator for DropWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, usize) -> bool,
{
}
