//! Specification wrappers for closures and constants.

use std::borrow::Cow;
use std::fmt;

use super::traits::Specification;

/// A specification that accepts every item.
///
/// Filtering with it leaves the input unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrueSpecification;

impl<T: ?Sized> Specification<T> for TrueSpecification {
    #[inline]
    fn is_satisfied(&self, _: &T) -> bool {
        true
    }

    fn describe(&self) -> String {
        "always".to_string()
    }
}

/// A specification wrapping a closure.
///
/// # Example
///
/// ```
/// use sieve_core::spec::{FnSpecification, Specification};
///
/// let short = FnSpecification::new(|s: &str| s.len() < 5).with_label("short");
///
/// assert!(short.is_satisfied("tree"));
/// assert!(!short.is_satisfied("house"));
/// assert_eq!(short.describe(), "short");
/// ```
pub struct FnSpecification<F> {
    f: F,
    label: Cow<'static, str>,
}

impl<F> FnSpecification<F> {
    #[inline]
    pub fn new(f: F) -> Self {
        Self {
            f,
            label: Cow::Borrowed("fn"),
        }
    }

    /// Sets the description reported by [`Specification::describe`].
    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = label.into();
        self
    }
}

impl<T: ?Sized, F> Specification<T> for FnSpecification<F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        (self.f)(item)
    }

    fn describe(&self) -> String {
        self.label.to_string()
    }
}

impl<F> fmt::Debug for FnSpecification<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSpecification")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
