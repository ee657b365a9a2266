//! Searches. All of them stop pulling at the first hit.

/// True when some element equals `value`.
pub fn contains<I, V>(iter: I, value: V) -> bool
where
    I: IntoIterator,
    I::Item: PartialEq<V>,
{
    index_of(iter, value).is_some()
}

/// Position of the first element equal to `value`.
pub fn index_of<I, V>(iter: I, value: V) -> Option<usize>
where
    I: IntoIterator,
    I::Item: PartialEq<V>,
{
    find_index(iter, |element, _| *element == value)
}

/// Position of the first element for which `predicate(&element, index)` holds.
pub fn find_index<I, P>(iter: I, mut predicate: P) -> Option<usize>
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    iter.into_iter()
        .enumerate()
        .find(|(index, element)| predicate(element, *index))
        .map(|(index, _)| index)
}

/// The first element for which `predicate(&element, index)` holds.
pub fn find<I, P>(iter: I, mut predicate: P) -> Option<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    iter.into_iter()
        .enumerate()
        .find(|(index, element)| predicate(element, *index))
        .map(|(_, element)| element)
}

/// Existential quantifier over `predicate`.
pub fn any<I, P>(iter: I, predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    find_index(iter, predicate).is_some()
}

/// Universal quantifier over `predicate`; vacuously true.
pub fn all<I, P>(iter: I, mut predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    find_index(iter, |element, index| !predicate(element, index)).is_none()
}
