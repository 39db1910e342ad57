//! The specification trait and its extension methods.

use std::fmt;
use std::sync::Arc;

use super::composition::{AndSpecification, NotSpecification, OrSpecification};

/// A boolean decision rule over a single item.
///
/// Any type implementing this trait can be handed to [`filter`](crate::filter::filter)
/// or combined with other specifications. Adding a new criterion means adding a
/// new implementor; neither the filter nor existing specifications change.
///
/// # Example
///
/// ```
/// use sieve_core::spec::Specification;
///
/// struct Heavy {
///     threshold: u32,
/// }
///
/// impl Specification<u32> for Heavy {
///     fn is_satisfied(&self, weight: &u32) -> bool {
///         *weight > self.threshold
///     }
/// }
///
/// let spec = Heavy { threshold: 10 };
/// assert!(spec.is_satisfied(&12));
/// assert!(!spec.is_satisfied(&3));
/// ```
pub trait Specification<T: ?Sized>: Send + Sync {
    /// Returns true if the item satisfies this specification.
    ///
    /// Must be a pure function of the item and the specification's own
    /// configuration.
    fn is_satisfied(&self, item: &T) -> bool;

    /// Human-readable description, used in logs and `Debug` output.
    ///
    /// The default is the implementing type's short name, taken from
    /// [`std::any::type_name`], whose output is not guaranteed stable across
    /// compiler versions. Override it when the text is shown to users or
    /// compared in tests.
    fn describe(&self) -> String {
        short_type_name::<Self>().to_string()
    }
}

impl<T: ?Sized> fmt::Debug for dyn Specification<T> + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for &S {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Arc<S> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Combinator methods available on every specification.
///
/// # Example
///
/// ```
/// use sieve_core::spec::{FnSpecification, Specification, SpecificationExt};
///
/// let even = FnSpecification::new(|n: &i32| n % 2 == 0);
/// let positive = FnSpecification::new(|n: &i32| *n > 0);
///
/// let spec = even.and(positive);
/// assert!(spec.is_satisfied(&4));
/// assert!(!spec.is_satisfied(&-4));
/// assert!(!spec.is_satisfied(&3));
/// ```
pub trait SpecificationExt<T: ?Sized>: Specification<T> + Sized {
    /// Conjunction of `self` and `other`.
    fn and<O>(self, other: O) -> AndSpecification<T>
    where
        Self: 'static,
        O: Specification<T> + 'static,
    {
        AndSpecification::pair(Box::new(self), Box::new(other))
    }

    /// Disjunction of `self` and `other`.
    fn or<O>(self, other: O) -> OrSpecification<T>
    where
        Self: 'static,
        O: Specification<T> + 'static,
    {
        OrSpecification::pair(Box::new(self), Box::new(other))
    }

    /// Negation of `self`.
    fn not(self) -> NotSpecification<Self> {
        NotSpecification::new(self)
    }

    /// Erases the concrete type.
    fn boxed(self) -> Box<dyn Specification<T>>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<T: ?Sized, S: Specification<T>> SpecificationExt<T> for S {}

// `sieve_core::spec::NotSpecification<...>` becomes `NotSpecification`.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
