//! Curried stream transforms: `take_fn(3)` is `|iter| take(iter, 3)`.

use onceseq_core::config::TraceConfig;
use onceseq_stream::{
    append, concat_map, drop, drop_until, drop_while, exclude, exclude_first, filter, map, prepend,
    push, remove, remove_first, scan, scan1, slice, take, take_until, take_while, traced, unshift,
    zip, Concat, Dropping, DropWhile, Equals, ExcludeFirst, Filter, Joined, Map, Push, Scan, Scan1,
    Slice, Take, TakeWhile, Traced, Unshift, Zip,
};

pub fn slice_fn<I: IntoIterator>(
    start: usize,
    end: Option<usize>,
) -> impl FnOnce(I) -> Slice<I::IntoIter> {
    move |iter| slice(iter, start, end)
}

pub fn take_fn<I: IntoIterator>(count: usize) -> impl FnOnce(I) -> Take<I::IntoIter> {
    move |iter| take(iter, count)
}

pub fn drop_fn<I: IntoIterator>(count: usize) -> impl FnOnce(I) -> Dropping<I::IntoIter> {
    move |iter| drop(iter, count)
}

pub fn take_while_fn<I, P>(predicate: P) -> impl FnOnce(I) -> TakeWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    move |iter| take_while(iter, predicate)
}

pub fn take_until_fn<I, P>(predicate: P) -> impl FnOnce(I) -> TakeWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    move |iter| take_until(iter, predicate)
}

pub fn drop_while_fn<I, P>(predicate: P) -> impl FnOnce(I) -> DropWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    move |iter| drop_while(iter, predicate)
}

pub fn drop_until_fn<I, P>(predicate: P) -> impl FnOnce(I) -> DropWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    move |iter| drop_until(iter, predicate)
}

pub fn map_fn<I, U, F>(f: F) -> impl FnOnce(I) -> Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item, usize) -> U,
{
    move |iter| map(iter, f)
}

pub fn concat_map_fn<I, U, F>(f: F) -> impl FnOnce(I) -> Concat<Map<I::IntoIter, F>>
where
    I: IntoIterator,
    U: IntoIterator,
    F: FnMut(I::Item, usize) -> U,
{
    move |iter| concat_map(iter, f)
}

pub fn filter_fn<I, P>(predicate: P) -> impl FnOnce(I) -> Filter<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    move |iter| filter(iter, predicate)
}

pub fn exclude_fn<I, P>(predicate: P) -> impl FnOnce(I) -> Filter<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    move |iter| exclude(iter, predicate)
}

pub fn exclude_first_fn<I, P>(predicate: P) -> impl FnOnce(I) -> ExcludeFirst<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    move |iter| exclude_first(iter, predicate)
}

pub fn remove_fn<I>(value: I::Item) -> impl FnOnce(I) -> Filter<I::IntoIter, Equals<I::Item>>
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    move |iter| remove(iter, value)
}

pub fn remove_first_fn<I>(
    value: I::Item,
) -> impl FnOnce(I) -> ExcludeFirst<I::IntoIter, Equals<I::Item>>
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    move |iter| remove_first(iter, value)
}

pub fn push_fn<I: IntoIterator>(value: I::Item) -> impl FnOnce(I) -> Push<I::IntoIter, I::Item> {
    move |iter| push(iter, value)
}

pub fn unshift_fn<I: IntoIterator>(
    value: I::Item,
) -> impl FnOnce(I) -> Unshift<I::IntoIter, I::Item> {
    move |iter| unshift(iter, value)
}

/// `prefix`, then the piped source.
pub fn prepend_fn<I, P>(prefix: P) -> impl FnOnce(I) -> Joined<P::IntoIter, I::IntoIter>
where
    I: IntoIterator,
    P: IntoIterator<Item = I::Item>,
{
    move |iter| prepend(iter, prefix)
}

/// The piped source, then `suffix`.
pub fn append_fn<I, S>(suffix: S) -> impl FnOnce(I) -> Joined<I::IntoIter, S::IntoIter>
where
    I: IntoIterator,
    S: IntoIterator<Item = I::Item>,
{
    move |iter| append(iter, suffix)
}

pub fn scan_fn<I, A, F>(f: F, initial: A) -> impl FnOnce(I) -> Scan<I::IntoIter, F, A>
where
    I: IntoIterator,
    A: Clone,
    F: FnMut(A, I::Item, usize) -> A,
{
    move |iter| scan(iter, f, initial)
}

pub fn scan1_fn<I, F>(f: F) -> impl FnOnce(I) -> Scan1<I::IntoIter, F>
where
    I: IntoIterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item, usize) -> I::Item,
{
    move |iter| scan1(iter, f)
}

/// Zip the piped source (left) with `b` (right).
pub fn zip_fn<A, B>(b: B) -> impl FnOnce(A) -> Zip<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator,
{
    move |a| zip(a, b)
}

pub fn traced_fn<I: IntoIterator>(config: &TraceConfig) -> impl FnOnce(I) -> Traced<I::IntoIter> {
    let config = config.clone();
    move |iter| traced(iter, &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipe::Pipe;
    use onceseq_stream::tail;

    #[test]
    fn test_slicing_fns() {
        assert_eq!(slice_fn(1, Some(3))(vec![1, 2, 3, 4]).collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(take_fn(2)(vec![1, 2, 3]).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(drop_fn(2)(vec![1, 2, 3]).collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_pipeline() {
        let out: Vec<i32> = vec![1, 2, 3, 4, 5, 6]
            .pipe(filter_fn(|n: &i32, _| n % 2 == 0))
            .pipe(map_fn(|n: i32, i| n * 10 + i as i32))
            .pipe(push_fn(0))
            .collect();
        assert_eq!(out, vec![20, 41, 62, 0]);
    }

    #[test]
    fn test_pipe_macro_with_fns() {
        let out: Vec<i32> = crate::pipe!(
            1..10,
            drop_while_fn(|n: &i32, _| *n < 3),
            take_until_fn(|n: &i32, _| *n > 6),
            remove_fn(5),
            unshift_fn(0),
        )
        .collect();
        assert_eq!(out, vec![0, 3, 4, 6]);
    }

    #[test]
    fn test_prepend_append_fns() {
        let out: Vec<i32> = vec![2, 3]
            .pipe(prepend_fn(vec![1]))
            .pipe(append_fn(vec![4]))
            .collect();
        assert_eq!(out, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_scan_fns() {
        let sums: Vec<i32> = scan_fn(|a: i32, e: i32, _| a + e, 0)(vec![1, 2, 3]).collect();
        assert_eq!(sums, vec![1, 3, 6]);
        let maxes: Vec<i32> = scan1_fn(|a: i32, e: i32, _| a.max(e))(vec![2, 1, 3]).collect();
        assert_eq!(maxes, vec![2, 2, 3]);
    }

    #[test]
    fn test_zip_and_concat_map_fns() {
        let pairs: Vec<(i32, char)> = zip_fn(vec!['a', 'b'])(vec![1, 2, 3]).collect();
        assert_eq!(pairs, vec![(1, 'a'), (2, 'b')]);
        let flat: Vec<i32> = concat_map_fn(|n: i32, _| vec![n; n as usize])(vec![1, 2]).collect();
        assert_eq!(flat, vec![1, 2, 2]);
    }

    #[test]
    fn test_exclusion_fns() {
        let out: Vec<i32> = vec![1, 2, 3, 2, 1]
            .pipe(remove_first_fn(2))
            .pipe(exclude_first_fn(|n: &i32, _| *n == 1))
            .pipe(exclude_fn(|n: &i32, _| *n == 3))
            .collect();
        assert_eq!(out, vec![2, 1]);
        let rest: Vec<i32> = take_while_fn(|n: &i32, _| *n < 4)(vec![2, 3, 4])
            .pipe(drop_until_fn(|n: &i32, _| *n == 3))
            .pipe(tail)
            .collect();
        assert_eq!(rest, Vec::<i32>::new());
    }

    #[test]
    fn test_traced_fn_counts_pulls() {
        let mut it = traced_fn(&TraceConfig::labeled("compose"))(vec![1, 2]);
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.pulled(), 1);
        assert_eq!(it.config().label, "compose");
    }
}
