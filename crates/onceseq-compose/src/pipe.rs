//! Left-to-right and right-to-left application.

/// Feed `self` into a one-shot function. Implemented for every type.
pub trait Pipe: Sized {
    #[inline]
    fn pipe<R, F>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        f(self)
    }
}

impl<T> Pipe for T {}

/// `outer(inner(x))`.
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl FnOnce(A) -> C
where
    F: FnOnce(B) -> C,
    G: FnOnce(A) -> B,
{
    move |a| outer(inner(a))
}

/// Thread a value through functions left to right:
/// `pipe!(x, f, g)` is `g(f(x))`.
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };
    ($value:expr, $f:expr $(, $rest:expr)* $(,)?) => {
        $crate::pipe!(($f)($value) $(, $rest)*)
    };
}
