use std::iter::FusedIterator;
use std::mem;

use crate::{hint_sub, DONE_HINT};

#[derive(Debug, Clone)]
enum PairState<T> {
    Start,
    Holding(T),
    After,
}

/// Overlapping pairs of consecutive elements. Fewer than two elements yield
/// nothing.
#[derive(Debug, Clone)]
pub struct Pairwise<I: Iterator> {
    iter: I,
    state: PairState<I::Item>,
}

pub fn pairwise<I>(iter: I) -> Pairwise<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Pairwise {
        iter: iter.into_iter(),
        state: PairState::Start,
    }
}

impl<I> Iterator for Pairwise<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (I::Item, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let previous = match mem::replace(&mut self.state, PairState::After) {
            PairState::Start => self.iter.next()?,
            PairState::Holding(previous) => previous,
            PairState::After => return None,
        };
        let current = self.iter.next()?;
        self.state = PairState::Holding(current.clone());
        Some((previous, current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            PairState::Start => hint_sub(self.iter.size_hint(), 1),
            PairState::Holding(_) => self.iter.size_hint(),
            PairState::After => DONE_HINT,
        }
    }
}

impl<I> FusedIterator for Pairwise<I>
where
    I: Iterator,
    I::Item: Clone,
{
}
