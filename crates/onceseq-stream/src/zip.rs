use std::iter::FusedIterator;

use crate::DONE_HINT;

/// Elements of two sequences in lock step; ends with the shorter one.
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    a: A,
    b: B,
    done: bool,
}

pub fn zip<A: IntoIterator, B: IntoIterator>(a: A, b: B) -> Zip<A::IntoIter, B::IntoIter> {
    Zip {
        a: a.into_iter(),
        b: b.into_iter(),
        done: false,
    }
}

impl<A: Iterator, B: Iterator> Iterator for Zip<A, B> {
    type Item = (A::Item, B::Item);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        // `b` is not pulled once `a` has run out.
        let pair = self.a.next().and_then(|a| self.b.next().map(|b| (a, b)));
        if pair.is_none() {
            self.done = true;
        }
        pair
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return DONE_HINT;
        }
        let (alo, ahi) = self.a.size_hint();
        let (blo, bhi) = self.b.size_hint();
        let hi = match (ahi, bhi) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, b) => b,
        };
        (alo.min(blo), hi)
    }
}

impl<A: Iterator, B: Iterator> FusedIterator for Zip<A, B> {}
