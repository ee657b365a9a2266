//! Lock-step comparison of two sequences.
//!
//! Element comparators take both elements by value, so sequences of
//! iterators can be compared with a nested [`equal`].

/// True when both sequences end at the same step with every pair equal.
pub fn equal<A, B>(a: A, b: B) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    A::Item: PartialEq<B::Item>,
{
    equal_by(a, b, |x, y| x == y)
}

pub fn equal_by<A, B, F>(a: A, b: B, mut elements_equal: F) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(A::Item, B::Item) -> bool,
{
    let mut a = a.into_iter();
    let mut b = b.into_iter();
    loop {
        match (a.next(), b.next()) {
            (Some(x), Some(y)) => {
                if !elements_equal(x, y) {
                    return false;
                }
            }
            (None, None) => return true,
            _ => return false,
        }
    }
}

pub fn not_equal<A, B>(a: A, b: B) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    A::Item: PartialEq<B::Item>,
{
    !equal(a, b)
}

pub fn not_equal_by<A, B, F>(a: A, b: B, elements_equal: F) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(A::Item, B::Item) -> bool,
{
    !equal_by(a, b, elements_equal)
}

/// True when `b` is a prefix of `a`. An empty `b` always matches.
pub fn prefix_match<A, B>(a: A, b: B) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    A::Item: PartialEq<B::Item>,
{
    prefix_match_by(a, b, |x, y| x == y)
}

pub fn prefix_match_by<A, B, F>(a: A, b: B, mut elements_equal: F) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(A::Item, B::Item) -> bool,
{
    let mut a = a.into_iter();
    let mut b = b.into_iter();
    loop {
        // `b` is pulled first: once it ends, `a` is left untouched.
        let Some(y) = b.next() else {
            return true;
        };
        match a.next() {
            Some(x) => {
                if !elements_equal(x, y) {
                    return false;
                }
            }
            None => return false,
        }
    }
}
