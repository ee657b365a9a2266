//! Element selection: `filter`, `exclude`, `exclude_first`, `remove`,
//! `remove_first`, `exclude_null`.

use std::iter::FusedIterator;

use onceseq_core::nullable::is_not_null;

use crate::DONE_HINT;

/// Element test used by [`Filter`] and [`ExcludeFirst`].
///
/// Any `FnMut(&T, usize) -> bool` is a predicate; [`Equals`] is the nameable
/// one behind `remove` and `remove_first`.
pub trait Predicate<T> {
    fn test(&mut self, element: &T, index: usize) -> bool;
}

impl<T, F> Predicate<T> for F
where
    F: FnMut(&T, usize) -> bool,
{
    #[inline]
    fn test(&mut self, element: &T, index: usize) -> bool {
        self(element, index)
    }
}

/// Matches elements equal to the held value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equals<T>(pub T);

impl<T: PartialEq> Predicate<T> for Equals<T> {
    #[inline]
    fn test(&mut self, element: &T, _index: usize) -> bool {
        *element == self.0
    }
}

/// Elements for which the predicate returns `keep`.
#[derive(Debug, Clone)]
pub struct Filter<I, P> {
    iter: I,
    predicate: P,
    keep: bool,
    index: usize,
    done: bool,
}

/// Keep elements where `predicate(&element, index)` is true.
pub fn filter<I, P>(iter: I, predicate: P) -> Filter<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    Filter {
        iter: iter.into_iter(),
        predicate,
        keep: true,
        index: 0,
        done: false,
    }
}

/// Drop elements where `predicate(&element, index)` is true.
pub fn exclude<I, P>(iter: I, predicate: P) -> Filter<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    Filter {
        keep: false,
        ..filter(iter, predicate)
    }
}

/// Drop every element equal to `value`.
pub fn remove<I>(iter: I, value: I::Item) -> Filter<I::IntoIter, Equals<I::Item>>
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    Filter {
        iter: iter.into_iter(),
        predicate: Equals(value),
        keep: false,
        index: 0,
        done: false,
    }
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: Predicate<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.done {
            return None;
        }
        for element in self.iter.by_ref() {
            let index = self.index;
            self.index += 1;
            if self.predicate.test(&element, index) == self.keep {
                return Some(element);
            }
        }
        self.done = true;
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            DONE_HINT
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}

impl<I, P> FusedIterator for Filter<I, P>
where
    I: Iterator,
    P: Predicate<I::Item>,
{
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Before,
    After,
    Done,
}

/// The source with only its first matching element removed.
#[derive(Debug, Clone)]
pub struct ExcludeFirst<I, P> {
    iter: I,
    predicate: P,
    index: usize,
    phase: Phase,
}

pub fn exclude_first<I, P>(iter: I, predicate: P) -> ExcludeFirst<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    ExcludeFirst {
        iter: iter.into_iter(),
        predicate,
        index: 0,
        phase: Phase::Before,
    }
}

/// Drop the first element equal to `value`.
pub fn remove_first<I>(iter: I, value: I::Item) -> ExcludeFirst<I::IntoIter, Equals<I::Item>>
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    ExcludeFirst {
        iter: iter.into_iter(),
        predicate: Equals(value),
        index: 0,
        phase: Phase::Before,
    }
}

impl<I, P> Iterator for ExcludeFirst<I, P>
where
    I: Iterator,
    P: Predicate<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let element = match self.phase {
            Phase::Before => match self.iter.next() {
                Some(element) => {
                    let index = self.index;
                    self.index += 1;
                    if !self.predicate.test(&element, index) {
                        return Some(element);
                    }
                    self.phase = Phase::After;
                    self.iter.next()
                }
                None => None,
            },
            Phase::After => self.iter.next(),
            Phase::Done => return None,
        };
        if element.is_none() {
            self.phase = Phase::Done;
        }
        element
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.phase {
            Phase::Before => {
                let (lo, hi) = self.iter.size_hint();
                (lo.saturating_sub(1), hi)
            }
            Phase::After => self.iter.size_hint(),
            Phase::Done => DONE_HINT,
        }
    }
}

impl<I, P> FusedIterator for ExcludeFirst<I, P>
where
    I: Iterator,
    P: Predicate<I::Item>,
{
}

/// Present values of an `Option` sequence, unwrapped.
#[derive(Debug, Clone)]
pub struct ExcludeNull<I> {
    iter: I,
    done: bool,
}

pub fn exclude_null<I, T>(iter: I) -> ExcludeNull<I::IntoIter>
where
    I: IntoIterator<Item = Option<T>>,
{
    ExcludeNull {
        iter: iter.into_iter(),
        done: false,
    }
}

impl<I, T> Iterator for ExcludeNull<I>
where
    I: Iterator<Item = Option<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.done {
            return None;
        }
        let found = self.iter.find(is_not_null).flatten();
        if found.is_none() {
            self.done = true;
        }
        found
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            DONE_HINT
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}

impl<I, T> FusedIterator for ExcludeNull<I> where I: Iterator<Item = Option<T>> {}
