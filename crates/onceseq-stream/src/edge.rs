//! Transforms that touch only the ends of a sequence.

use std::iter::{Fuse, FusedIterator};
use std::mem;

use crate::{hint_add, hint_sub, DONE_HINT};

/// Advance past the first element and hand back the remainder.
///
/// This is the one transform that pulls eagerly: the first element is
/// discarded before `tail` returns. An empty source yields a done iterator.
pub fn tail<I: IntoIterator>(iter: I) -> Fuse<I::IntoIter> {
    let mut it = iter.into_iter().fuse();
    it.next();
    it
}

#[derive(Debug, Clone)]
enum PushState<T> {
    Source(T),
    Done,
}

/// The source followed by one extra element.
#[derive(Debug, Clone)]
pub struct Push<I, T> {
    iter: I,
    state: PushState<T>,
}

pub fn push<I: IntoIterator>(iter: I, value: I::Item) -> Push<I::IntoIter, I::Item> {
    Push {
        iter: iter.into_iter(),
        state: PushState::Source(value),
    }
}

impl<I: Iterator> Iterator for Push<I, I::Item> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        match self.state {
            PushState::Source(_) => match self.iter.next() {
                Some(element) => Some(element),
                None => match mem::replace(&mut self.state, PushState::Done) {
                    PushState::Source(value) => Some(value),
                    PushState::Done => None,
                },
            },
            PushState::Done => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            PushState::Source(_) => hint_add(self.iter.size_hint(), 1),
            PushState::Done => DONE_HINT,
        }
    }
}

impl<I: Iterator> FusedIterator for Push<I, I::Item> {}

#[derive(Debug, Clone)]
enum UnshiftState<T> {
    Head(T),
    Source,
    Done,
}

/// One extra element followed by the source.
#[derive(Debug, Clone)]
pub struct Unshift<I, T> {
    iter: I,
    state: UnshiftState<T>,
}

pub fn unshift<I: IntoIterator>(iter: I, value: I::Item) -> Unshift<I::IntoIter, I::Item> {
    Unshift {
        iter: iter.into_iter(),
        state: UnshiftState::Head(value),
    }
}

impl<I: Iterator> Iterator for Unshift<I, I::Item> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        match mem::replace(&mut self.state, UnshiftState::Done) {
            UnshiftState::Head(value) => {
                self.state = UnshiftState::Source;
                Some(value)
            }
            UnshiftState::Source => {
                let element = self.iter.next()?;
                self.state = UnshiftState::Source;
                Some(element)
            }
            UnshiftState::Done => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            UnshiftState::Head(_) => hint_add(self.iter.size_hint(), 1),
            UnshiftState::Source => self.iter.size_hint(),
            UnshiftState::Done => DONE_HINT,
        }
    }
}

impl<I: Iterator> FusedIterator for Unshift<I, I::Item> {}

#[derive(Debug, Clone)]
enum InitialState<T> {
    Start,
    Holding(T),
    Done,
}

/// Every element except the last, using one element of lookahead.
#[derive(Debug, Clone)]
pub struct Initial<I: Iterator> {
    iter: I,
    state: InitialState<I::Item>,
}

pub fn initial<I: IntoIterator>(iter: I) -> Initial<I::IntoIter> {
    Initial {
        iter: iter.into_iter(),
        state: InitialState::Start,
    }
}

impl<I: Iterator> Iterator for Initial<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        // A held element is only released once a successor proves it is not last.
        let held = match mem::replace(&mut self.state, InitialState::Done) {
            InitialState::Start => self.iter.next()?,
            InitialState::Holding(element) => element,
            InitialState::Done => return None,
        };
        let successor = self.iter.next()?;
        self.state = InitialState::Holding(successor);
        Some(held)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            InitialState::Start => hint_sub(self.iter.size_hint(), 1),
            InitialState::Holding(_) => self.iter.size_hint(),
            InitialState::Done => DONE_HINT,
        }
    }
}

impl<I: Iterator> FusedIterator for Initial<I> {}
