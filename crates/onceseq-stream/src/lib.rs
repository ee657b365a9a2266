#![forbid(unsafe_code)]
//! onceseq-stream: lazy transforms over pull iterators.
//!
//! Each transform takes ownership of its input, pulls from it only when its
//! own `next()` is called, and never holds more than one element of
//! lookahead. Transforms that have a "before/during/after" shape keep that
//! phase as an explicit enum; once a transform reaches its terminal phase it
//! returns `None` forever, so every type here is a `FusedIterator`.

pub mod bounded;
pub mod concat;
pub mod edge;
pub mod filter;
pub mod map;
pub mod pairwise;
pub mod scan;
pub mod slice;
pub mod traced;
pub mod zip;

pub use bounded::{drop_until, drop_while, take_until, take_while, DropWhile, TakeWhile};
pub use concat::{append, concat, concat_map, prepend, Concat, Joined};
pub use edge::{initial, push, tail, unshift, Initial, Push, Unshift};
pub use filter::{
    exclude, exclude_first, exclude_null, filter, remove, remove_first, Equals, ExcludeFirst,
    ExcludeNull, Filter, Predicate,
};
pub use map::{map, Map};
pub use pairwise::{pairwise, Pairwise};
pub use scan::{scan, scan1, Scan, Scan1};
pub use slice::{drop, slice, take, Dropping, Slice, Take};
pub use traced::{traced, Traced};
pub use zip::{zip, Zip};

/// `(lo, hi)` of an exhausted transform.
pub(crate) const DONE_HINT: (usize, Option<usize>) = (0, Some(0));

/// Remove `n` leading elements from a size hint.
pub(crate) fn hint_sub((lo, hi): (usize, Option<usize>), n: usize) -> (usize, Option<usize>) {
    (lo.saturating_sub(n), hi.map(|h| h.saturating_sub(n)))
}

/// Add `n` extra elements to a size hint.
pub(crate) fn hint_add((lo, hi): (usize, Option<usize>), n: usize) -> (usize, Option<usize>) {
    (lo.saturating_add(n), hi.and_then(|h| h.checked_add(n)))
}

/// Cap a size hint at `n` elements.
pub(crate) fn hint_cap((lo, hi): (usize, Option<usize>), n: usize) -> (usize, Option<usize>) {
    (lo.min(n), Some(hi.map_or(n, |h| h.min(n))))
}

#[cfg(test)]
pub(crate) mod test_util {
    /// A source that keeps yielding after reporting done, to show that our
    /// transforms stay done regardless.
    pub struct Relapsing {
        pub items: Vec<i32>,
        pub pos: usize,
    }

    impl Relapsing {
        pub fn new(items: Vec<i32>) -> Self {
            Self { items, pos: 0 }
        }
    }

    impl Iterator for Relapsing {
        type Item = i32;

        fn next(&mut self) -> Option<i32> {
            let pos = self.pos;
            self.pos += 1;
            if pos < self.items.len() {
                Some(self.items[pos])
            } else if pos == self.items.len() {
                None
            } else {
                Some(-1)
            }
        }
    }

    /// Pull `extra` more times after the first `None`; all must be `None`.
    pub fn drain_past_end<I: Iterator>(mut it: I, extra: usize) -> Vec<I::Item> {
        let mut out = Vec::new();
        while let Some(e) = it.next() {
            out.push(e);
        }
        for _ in 0..extra {
            assert!(it.next().is_none(), "transform resumed after done");
        }
        out
    }
}
