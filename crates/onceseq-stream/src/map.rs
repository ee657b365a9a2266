use std::iter::FusedIterator;

use crate::DONE_HINT;

/// Apply `f(element, index)` to every element. The index advances once per
/// source element, in order.
#[derive(Debug, Clone)]
pub struct Map<I, F> {
    iter: I,
    f: F,
    index: usize,
    done: bool,
}

pub fn map<I, U, F>(iter: I, f: F) -> Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item, usize) -> U,
{
    Map {
        iter: iter.into_iter(),
        f,
        index: 0,
        done: false,
    }
}

impl<I, U, F> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item, usize) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        if self.done {
            return None;
        }
        match self.iter.next() {
            Some(element) => {
                let index = self.index;
                self.index += 1;
                Some((self.f)(element, index))
            }
            None => {
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            DONE_HINT
        } else {
            self.iter.size_hint()
        }
    }
}

impl<I, U, F> FusedIterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item, usize) -> U,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{drain_past_end, Relapsing};

    #[test]
    fn test_map() {
        assert_eq!(map(vec![1, 2, 3], |e, _| e + 1).collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(
            map(vec![1, 2, 3], |e, i| if i == 1 { e * 10 } else { e }).collect::<Vec<_>>(),
            vec![1, 20, 3]
        );
    }

    #[test]
    fn test_map_changes_type() {
        let got: Vec<String> = map(vec![1, 2], |e, i| format!("{i}:{e}")).collect();
        assert_eq!(got, vec!["0:1", "1:2"]);
    }

    #[test]
    fn test_map_stays_done() {
        assert_eq!(
            drain_past_end(map(Relapsing::new(vec![1]), |e, _| e * 2), 3),
            vec![2]
        );
    }
}
