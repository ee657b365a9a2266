//! Method-call forms of the stream transforms.
//!
//! Names that would collide with `Iterator`'s own methods are changed:
//! `map_indexed`, `filter_indexed`, `take_while_indexed`, `take_n`,
//! `drop_n`, `scan_seeded` and `zip_pulled`.

use onceseq_core::config::TraceConfig;
use onceseq_stream::{
    append, concat, concat_map, drop, drop_until, drop_while, exclude, exclude_first, exclude_null,
    filter, initial, map, pairwise, prepend, push, remove, remove_first, scan, scan1, slice, tail,
    take, take_until, take_while, traced, unshift, zip, Concat, DropWhile, Dropping, Equals,
    ExcludeFirst, ExcludeNull, Filter, Initial, Joined, Map, Pairwise, Push, Scan, Scan1, Slice,
    Take, TakeWhile, Traced, Unshift, Zip,
};
use std::iter::Fuse;

pub trait OnceIteratorExt: Iterator + Sized {
    fn slice(self, start: usize, end: Option<usize>) -> Slice<Self> {
        slice(self, start, end)
    }

    fn take_n(self, count: usize) -> Take<Self> {
        take(self, count)
    }

    fn drop_n(self, count: usize) -> Dropping<Self> {
        drop(self, count)
    }

    fn take_while_indexed<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        P: FnMut(&Self::Item, usize) -> bool,
    {
        take_while(self, predicate)
    }

    fn take_until<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        P: FnMut(&Self::Item, usize) -> bool,
    {
        take_until(self, predicate)
    }

    fn drop_while<P>(self, predicate: P) -> DropWhile<Self, P>
    where
        P: FnMut(&Self::Item, usize) -> bool,
    {
        drop_while(self, predicate)
    }

    fn drop_until<P>(self, predicate: P) -> DropWhile<Self, P>
    where
        P: FnMut(&Self::Item, usize) -> bool,
    {
        drop_until(self, predicate)
    }

    fn map_indexed<U, F>(self, f: F) -> Map<Self, F>
    where
        F: FnMut(Self::Item, usize) -> U,
    {
        map(self, f)
    }

    fn filter_indexed<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Item, usize) -> bool,
    {
        filter(self, predicate)
    }

    fn exclude<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Item, usize) -> bool,
    {
        exclude(self, predicate)
    }

    fn exclude_first<P>(self, predicate: P) -> ExcludeFirst<Self, P>
    where
        P: FnMut(&Self::Item, usize) -> bool,
    {
        exclude_first(self, predicate)
    }

    fn exclude_null<T>(self) -> ExcludeNull<Self>
    where
        Self: Iterator<Item = Option<T>>,
    {
        exclude_null(self)
    }

    fn remove(self, value: Self::Item) -> Filter<Self, Equals<Self::Item>>
    where
        Self::Item: PartialEq,
    {
        remove(self, value)
    }

    fn remove_first(self, value: Self::Item) -> ExcludeFirst<Self, Equals<Self::Item>>
    where
        Self::Item: PartialEq,
    {
        remove_first(self, value)
    }

    fn concat(self) -> Concat<Self>
    where
        Self::Item: IntoIterator,
    {
        concat(self)
    }

    fn concat_map<U, F>(self, f: F) -> Concat<Map<Self, F>>
    where
        U: IntoIterator,
        F: FnMut(Self::Item, usize) -> U,
    {
        concat_map(self, f)
    }

    fn prepend<P>(self, prefix: P) -> Joined<P::IntoIter, Self>
    where
        P: IntoIterator<Item = Self::Item>,
    {
        prepend(self, prefix)
    }

    fn append<S>(self, suffix: S) -> Joined<Self, S::IntoIter>
    where
        S: IntoIterator<Item = Self::Item>,
    {
        append(self, suffix)
    }

    fn push(self, value: Self::Item) -> Push<Self, Self::Item> {
        push(self, value)
    }

    fn unshift(self, value: Self::Item) -> Unshift<Self, Self::Item> {
        unshift(self, value)
    }

    /// Pulls the first element right away.
    fn tail(self) -> Fuse<Self> {
        tail(self)
    }

    fn initial(self) -> Initial<Self> {
        initial(self)
    }

    fn scan_seeded<A, F>(self, f: F, initial: A) -> Scan<Self, F, A>
    where
        A: Clone,
        F: FnMut(A, Self::Item, usize) -> A,
    {
        scan(self, f, initial)
    }

    fn scan1<F>(self, f: F) -> Scan1<Self, F>
    where
        Self::Item: Clone,
        F: FnMut(Self::Item, Self::Item, usize) -> Self::Item,
    {
        scan1(self, f)
    }

    fn pairwise(self) -> Pairwise<Self>
    where
        Self::Item: Clone,
    {
        pairwise(self)
    }

    fn zip_pulled<B: IntoIterator>(self, b: B) -> Zip<Self, B::IntoIter> {
        zip(self, b)
    }

    fn traced(self, config: &TraceConfig) -> Traced<Self> {
        traced(self, config)
    }
}

impl<I: Iterator> OnceIteratorExt for I {}
