//! Combinators: conjunction, disjunction and negation.
//!
//! Conjunction and disjunction are N-ary and type-erased so that children of
//! different concrete types (and trees built at runtime from configuration)
//! share one representation. Negation wraps exactly one child and stays
//! generic.

use std::fmt;

use super::traits::Specification;
use crate::error::{Result, SieveError};

const MIN_CHILDREN: usize = 2;

fn check_arity(len: usize) -> Result<()> {
    if len < MIN_CHILDREN {
        return Err(SieveError::invalid_argument(
            "children",
            format!("expected at least {MIN_CHILDREN} child specifications, got {len}"),
        ));
    }
    Ok(())
}

fn require_all<T: ?Sized, I>(children: I) -> Result<Vec<Box<dyn Specification<T>>>>
where
    I: IntoIterator<Item = Option<Box<dyn Specification<T>>>>,
{
    children
        .into_iter()
        .enumerate()
        .map(|(i, child)| child.ok_or_else(|| SieveError::missing(format!("children[{i}]"))))
        .collect()
}

fn join<T: ?Sized>(children: &[Box<dyn Specification<T>>], op: &str) -> String {
    let parts: Vec<String> = children.iter().map(|c| c.describe()).collect();
    format!("({})", parts.join(op))
}

/// Satisfied when every child is satisfied.
///
/// Evaluation stops at the first child that rejects the item, so cheap or
/// selective children are best placed first. Order never changes the result.
///
/// # Example
///
/// ```
/// use sieve_core::spec::{AndSpecification, FnSpecification, Specification, SpecificationExt};
///
/// let spec = AndSpecification::new(vec![
///     FnSpecification::new(|n: &i32| *n > 0).boxed(),
///     FnSpecification::new(|n: &i32| *n < 100).boxed(),
///     FnSpecification::new(|n: &i32| n % 2 == 0).boxed(),
/// ])
/// .unwrap();
///
/// assert!(spec.is_satisfied(&42));
/// assert!(!spec.is_satisfied(&41));
/// assert!(!spec.is_satisfied(&200));
/// ```
pub struct AndSpecification<T: ?Sized> {
    children: Vec<Box<dyn Specification<T>>>,
}

impl<T: ?Sized> AndSpecification<T> {
    /// Creates a conjunction over two or more children.
    ///
    /// # Errors
    ///
    /// Returns [`SieveError::InvalidArgument`] if fewer than two children are given.
    pub fn new(children: Vec<Box<dyn Specification<T>>>) -> Result<Self> {
        check_arity(children.len())?;
        Ok(Self { children })
    }

    /// Creates a conjunction from children that may be absent.
    ///
    /// Each child is checked in order; the error names the first missing one
    /// (e.g. `children[1]`).
    pub fn try_from_optional<I>(children: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<Box<dyn Specification<T>>>>,
    {
        Self::new(require_all(children)?)
    }

    pub(crate) fn pair(first: Box<dyn Specification<T>>, second: Box<dyn Specification<T>>) -> Self {
        Self {
            children: vec![first, second],
        }
    }

    /// Appends another child, keeping the conjunction flat.
    pub fn and<O>(mut self, other: O) -> Self
    where
        O: Specification<T> + 'static,
    {
        self.children.push(Box::new(other));
        self
    }

    /// The children, in evaluation order.
    pub fn children(&self) -> &[Box<dyn Specification<T>>] {
        &self.children
    }
}

impl<T: ?Sized> Specification<T> for AndSpecification<T> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        self.children.iter().all(|c| c.is_satisfied(item))
    }

    fn describe(&self) -> String {
        join(&self.children, " AND ")
    }
}

impl<T: ?Sized> fmt::Debug for AndSpecification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AndSpecification")
            .field("children", &self.describe())
            .finish()
    }
}

/// Satisfied when at least one child is satisfied.
///
/// Evaluation stops at the first child that accepts the item.
pub struct OrSpecification<T: ?Sized> {
    children: Vec<Box<dyn Specification<T>>>,
}

impl<T: ?Sized> OrSpecification<T> {
    /// Creates a disjunction over two or more children.
    ///
    /// # Errors
    ///
    /// Returns [`SieveError::InvalidArgument`] if fewer than two children are given.
    pub fn new(children: Vec<Box<dyn Specification<T>>>) -> Result<Self> {
        check_arity(children.len())?;
        Ok(Self { children })
    }

    /// Creates a disjunction from children that may be absent.
    pub fn try_from_optional<I>(children: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<Box<dyn Specification<T>>>>,
    {
        Self::new(require_all(children)?)
    }

    pub(crate) fn pair(first: Box<dyn Specification<T>>, second: Box<dyn Specification<T>>) -> Self {
        Self {
            children: vec![first, second],
        }
    }

    /// Appends another alternative, keeping the disjunction flat.
    pub fn or<O>(mut self, other: O) -> Self
    where
        O: Specification<T> + 'static,
    {
        self.children.push(Box::new(other));
        self
    }

    /// The children, in evaluation order.
    pub fn children(&self) -> &[Box<dyn Specification<T>>] {
        &self.children
    }
}

impl<T: ?Sized> Specification<T> for OrSpecification<T> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        self.children.iter().any(|c| c.is_satisfied(item))
    }

    fn describe(&self) -> String {
        join(&self.children, " OR ")
    }
}

impl<T: ?Sized> fmt::Debug for OrSpecification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrSpecification")
            .field("children", &self.describe())
            .finish()
    }
}

/// Inverts a single child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotSpecification<S> {
    inner: S,
}

impl<S> NotSpecification<S> {
    /// Wraps `inner`.
    #[inline]
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Wraps `inner`, failing if it is absent.
    pub fn try_new(inner: Option<S>) -> Result<Self> {
        inner.map(Self::new).ok_or_else(|| SieveError::missing("inner"))
    }

    /// Returns the wrapped specification.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<T: ?Sized, S: Specification<T>> Specification<T> for NotSpecification<S> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        !self.inner.is_satisfied(item)
    }

    fn describe(&self) -> String {
        format!("NOT {}", self.inner.describe())
    }
}
