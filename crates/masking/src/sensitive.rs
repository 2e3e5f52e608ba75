//!
//! Read-once container.
//!

use std::fmt;

///
/// Value which can be read exactly once.
///
/// The first call to [`SensitiveValue::peek`] hands the value out and leaves the container
/// empty, so a card payload kept inside a payment record cannot be recovered once it was sent.
/// Neither `Debug` nor serialization reveal the value.
///
/// ```
/// use masking::SensitiveValue;
///
/// let mut cvv = SensitiveValue::new(123);
/// assert_eq!(cvv.peek(), Some(123));
/// assert_eq!(cvv.peek(), None);
/// assert!(cvv.is_erased());
/// ```
///
pub struct SensitiveValue<T> {
    value: Option<T>,
}

impl<T> SensitiveValue<T> {
    /// Wrap a value.
    pub fn new(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// An already consumed container.
    pub fn erased() -> Self {
        Self { value: None }
    }

    /// Take the value out. Every later call returns `None`.
    pub fn peek(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Whether the value was already read.
    pub fn is_erased(&self) -> bool {
        self.value.is_none()
    }
}

impl<T> From<T> for SensitiveValue<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> Default for SensitiveValue<T> {
    fn default() -> Self {
        Self::erased()
    }
}

impl<T> PartialEq for SensitiveValue<T> {
    // Contents are never compared; two containers are equal when both are consumed or both are not.
    fn eq(&self, other: &Self) -> bool {
        self.is_erased() == other.is_erased()
    }
}

impl<T> fmt::Debug for SensitiveValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_erased() {
            f.write_str("SensitiveValue(erased)")
        } else {
            f.write_str("SensitiveValue(*** sensitive ***)")
        }
    }
}
