//! The pull iterator protocol.
//!
//! A pull iterator is a plain [`Iterator`]: `next()` is the only way to
//! advance and `None` is the done marker. Anything implementing
//! [`IntoIterator`] is "iterator-like": an iterator converts into itself, a
//! collection produces one fresh iterator. [`IteratorLike`] makes that choice
//! an explicit value when a caller needs to hold either form.
//!
//! Ownership rule: handing an iterator to a primitive moves it. The primitive
//! becomes its sole consumer.

use std::iter::FusedIterator;

/// Normalize an iterator-like value into a pull iterator.
///
/// For an iterator this is the identity (position is preserved); for an
/// iterable it calls `into_iter` exactly once. Never buffers.
#[inline]
pub fn iterator<X: IntoIterator>(x: X) -> X::IntoIter {
    x.into_iter()
}

/// Either an iterator that is already positioned, or an iterable that can
/// produce one.
#[derive(Debug, Clone)]
pub enum IteratorLike<I, C> {
    Iterator(I),
    Iterable(C),
}

impl<I, C> IteratorLike<I, C>
where
    I: Iterator,
    C: IntoIterator<Item = I::Item>,
{
    pub fn is_iterator(&self) -> bool {
        matches!(self, IteratorLike::Iterator(_))
    }

    /// Resolve into the single concrete iterator type used downstream.
    pub fn into_pull(self) -> PullIter<I, C::IntoIter> {
        match self {
            IteratorLike::Iterator(it) => PullIter::Direct(it),
            IteratorLike::Iterable(c) => PullIter::Produced(c.into_iter()),
        }
    }
}

impl<I, C> IntoIterator for IteratorLike<I, C>
where
    I: Iterator,
    C: IntoIterator<Item = I::Item>,
{
    type Item = I::Item;
    type IntoIter = PullIter<I, C::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_pull()
    }
}

/// The resolved form of an [`IteratorLike`].
#[derive(Debug, Clone)]
pub enum PullIter<A, B> {
    Direct(A),
    Produced(B),
}

impl<A, B> Iterator for PullIter<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    type Item = A::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            PullIter::Direct(it) => it.next(),
            PullIter::Produced(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            PullIter::Direct(it) => it.size_hint(),
            PullIter::Produced(it) => it.size_hint(),
        }
    }
}

impl<A, B> FusedIterator for PullIter<A, B>
where
    A: FusedIterator,
    B: FusedIterator<Item = A::Item>,
{
}
