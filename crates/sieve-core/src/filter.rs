//! The generic, lazy filter.
//!
//! [`filter`] never changes when a new criterion is introduced: it only knows
//! about [`Specification`]. The returned [`Filtered`] iterator is single-pass;
//! to iterate again, call [`filter`] again on the same input.

use std::fmt;
use std::iter::FusedIterator;

use crate::error::{Result, SieveError};
use crate::spec::Specification;

/// Lazily yields the items of `items` that satisfy `spec`, in input order.
///
/// Items are yielded by reference; nothing is cloned, cached, deduplicated or
/// reordered. The specification is evaluated once per item, on demand.
///
/// # Example
///
/// ```
/// use sieve_core::filter;
/// use sieve_core::spec::FnSpecification;
///
/// let words = ["apple", "tree", "house", "car"];
/// let short = FnSpecification::new(|w: &&str| w.len() <= 4);
///
/// let picked: Vec<_> = filter(&words, &short).copied().collect();
/// assert_eq!(picked, ["tree", "car"]);
/// ```
pub fn filter<'a, 's, T, I, S>(items: I, spec: &'s S) -> Filtered<'s, I::IntoIter, S>
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
    S: Specification<T> + ?Sized,
{
    Filtered::new(items.into_iter(), spec)
}

/// Like [`filter`], but fails if the specification is absent.
///
/// # Errors
///
/// Returns [`SieveError::InvalidArgument`] for parameter `spec` when `spec` is `None`.
pub fn try_filter<'a, 's, T, I, S>(
    items: I,
    spec: Option<&'s S>,
) -> Result<Filtered<'s, I::IntoIter, S>>
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
    S: Specification<T> + ?Sized,
{
    let spec = spec.ok_or_else(|| SieveError::missing("spec"))?;
    Ok(filter(items, spec))
}

/// Counts the items of `items` that satisfy `spec`.
pub fn count_satisfying<'a, T, I, S>(items: I, spec: &S) -> usize
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
    S: Specification<T> + ?Sized,
{
    filter(items, spec).count()
}

/// Iterator returned by [`filter`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Filtered<'s, I, S: ?Sized> {
    items: I,
    spec: &'s S,
}

impl<'s, I, S: ?Sized> Filtered<'s, I, S> {
    fn new(items: I, spec: &'s S) -> Self {
        Self { items, spec }
    }

    /// The specification driving this filter.
    pub fn spec(&self) -> &'s S {
        self.spec
    }
}

impl<'a, 's, T, I, S> Iterator for Filtered<'s, I, S>
where
    T: ?Sized + 'a,
    I: Iterator<Item = &'a T>,
    S: Specification<T> + ?Sized,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        let spec = self.spec;
        self.items.find(|item| spec.is_satisfied(*item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.items.size_hint().1)
    }
}

impl<'a, 's, T, I, S> DoubleEndedIterator for Filtered<'s, I, S>
where
    T: ?Sized + 'a,
    I: DoubleEndedIterator<Item = &'a T>,
    S: Specification<T> + ?Sized,
{
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        let spec = self.spec;
        self.items.rfind(|item| spec.is_satisfied(*item))
    }
}

impl<'a, 's, T, I, S> FusedIterator for Filtered<'s, I, S>
where
    T: ?Sized + 'a,
    I: FusedIterator<Item = &'a T>,
    S: Specification<T> + ?Sized,
{
}

impl<I, S: ?Sized> fmt::Debug for Filtered<'_, I, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filtered").finish_non_exhaustive()
    }
}

/// Adds [`satisfying`](SatisfyingExt::satisfying) to iterators of references.
///
/// ```
/// use sieve_core::SatisfyingExt;
/// use sieve_core::spec::FnSpecification;
///
/// let odd = FnSpecification::new(|n: &u8| n % 2 == 1);
/// let total: u8 = [1u8, 2, 3, 4, 5].iter().satisfying(&odd).sum();
/// assert_eq!(total, 9);
/// ```
pub trait SatisfyingExt<'a, T: ?Sized + 'a>: Iterator<Item = &'a T> + Sized {
    /// Keeps only the items satisfying `spec`. Equivalent to [`filter`].
    fn satisfying<S>(self, spec: &S) -> Filtered<'_, Self, S>
    where
        S: Specification<T> + ?Sized,
    {
        Filtered::new(self, spec)
    }
}

impl<'a, T: ?Sized + 'a, I: Iterator<Item = &'a T>> SatisfyingExt<'a, T> for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{FnSpecification, SpecificationExt, TrueSpecification};

    fn is_even() -> FnSpecification<impl Fn(&i32) -> bool + Send + Sync> {
        FnSpecification::new(|n: &i32| n % 2 == 0)
    }

    #[test]
    fn test_filter_preserves_order() {
        let items = [5, 2, 8, 1, 4, 4, 7];
        let picked: Vec<i32> = filter(&items, &is_even()).copied().collect();
        assert_eq!(picked, vec![2, 8, 4, 4]);
    }

    #[test]
    fn test_filter_empty_input() {
        let items: [i32; 0] = [];
        assert_eq!(filter(&items, &TrueSpecification).count(), 0);
        assert_eq!(filter(&items, &is_even()).count(), 0);
    }

    #[test]
    fn test_filter_identity() {
        let items = vec![3, 1, 2];
        let picked: Vec<&i32> = filter(&items, &TrueSpecification).collect();
        assert_eq!(picked, items.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_filter_yields_same_instances() {
        let items = vec![String::from("a"), String::from("bb")];
        let spec = FnSpecification::new(|s: &String| s.len() == 2);
        let picked: Vec<&String> = filter(&items, &spec).collect();
        assert_eq!(picked.len(), 1);
        assert!(std::ptr::eq(picked[0], &items[1]));
    }

    #[test]
    fn test_filter_is_lazy() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = AtomicUsize::new(0);
        let spec = FnSpecification::new(|n: &i32| {
            calls.fetch_add(1, Ordering::Relaxed);
            *n > 0
        });
        let items = [1, 2, 3, 4];

        let mut iter = filter(&items, &spec);
        assert_eq!(calls.load(Ordering::Relaxed), 0);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_filter_restart_by_reinvoking() {
        let items = [1, 2, 3, 4];
        let spec = is_even();
        let first: Vec<_> = filter(&items, &spec).collect();
        let second: Vec<_> = filter(&items, &spec).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_filter_reverse() {
        let items = [1, 2, 3, 4, 6];
        let picked: Vec<i32> = filter(&items, &is_even()).rev().copied().collect();
        assert_eq!(picked, vec![6, 4, 2]);
    }

    #[test]
    fn test_filter_with_dyn_spec() {
        let items = [1, 2, 3, 4];
        let spec: Box<dyn Specification<i32>> = is_even().not().boxed();
        let picked: Vec<i32> = filter(&items, spec.as_ref()).copied().collect();
        assert_eq!(picked, vec![1, 3]);
    }

    #[test]
    fn test_try_filter_missing_spec() {
        let items = [1, 2, 3];
        let err = try_filter::<i32, _, TrueSpecification>(&items, None).unwrap_err();
        assert_eq!(err.param(), "spec");
    }

    #[test]
    fn test_try_filter_present_spec() {
        let items = [1, 2, 3, 4];
        let spec = is_even();
        let picked: Vec<_> = try_filter(&items, Some(&spec)).unwrap().collect();
        assert_eq!(picked, vec![&2, &4]);
    }

    #[test]
    fn test_count_and_satisfying() {
        let items = vec![1, 2, 3, 4, 5, 6];
        assert_eq!(count_satisfying(&items, &is_even()), 3);
        assert_eq!(items.iter().satisfying(&is_even()).count(), 3);
    }

    #[test]
    fn test_size_hint_upper_bound() {
        let items = [1, 2, 3];
        let spec = is_even();
        let iter = filter(&items, &spec);
        assert_eq!(iter.size_hint(), (0, Some(3)));
    }
}
