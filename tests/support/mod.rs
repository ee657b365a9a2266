//! Shared sources for the integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

/// Yields `items` in order and records how many times it was pulled,
/// including the pull that reported done.
pub struct Counting<T> {
    items: std::vec::IntoIter<T>,
    pulls: Rc<Cell<usize>>,
}

impl<T> Counting<T> {
    pub fn new(items: Vec<T>) -> (Self, Rc<Cell<usize>>) {
        let pulls = Rc::new(Cell::new(0));
        let source = Self {
            items: items.into_iter(),
            pulls: Rc::clone(&pulls),
        };
        (source, pulls)
    }
}

impl<T> Iterator for Counting<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.pulls.set(self.pulls.get() + 1);
        self.items.next()
    }
}

/// Reports done once, then starts producing `-1` forever. A well-behaved
/// transform never asks again after the first `None`.
pub struct Relapsing {
    items: Vec<i32>,
    pos: usize,
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
        match pos.cmp(&self.items.len()) {
            std::cmp::Ordering::Less => Some(self.items[pos]),
            std::cmp::Ordering::Equal => None,
            std::cmp::Ordering::Greater => Some(-1),
        }
    }
}

/// Drain `it`, then pull `extra` more times and require `None` each time.
pub fn drain_past_end<I: Iterator>(mut it: I, extra: usize) -> Vec<I::Item> {
    let mut out = Vec::new();
    for e in it.by_ref() {
        out.push(e);
    }
    for _ in 0..extra {
        assert!(it.next().is_none(), "transform resumed after reporting done");
    }
    out
}
