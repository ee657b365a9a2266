//! Absent-value detection over `Option`.

#[inline]
pub fn is_null<T>(value: &Option<T>) -> bool {
    value.is_none()
}

#[inline]
pub fn is_not_null<T>(value: &Option<T>) -> bool {
    value.is_some()
}
