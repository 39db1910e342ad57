//! Sieve Core - specifications and the generic filter
//!
//! This crate provides the fundamental abstractions for Sieve:
//! - The [`Specification`] trait, a boolean rule over one item
//! - Combinators for conjunction, disjunction and negation
//! - A lazy, order-preserving [`filter`] driven by any specification
//! - The [`SieveError`] raised by invalid construction
//!
//! # Example
//!
//! ```
//! use sieve_core::{filter, Specification, SpecificationExt};
//! use sieve_core::spec::FnSpecification;
//!
//! let numbers = [1, 2, 3, 4, 5, 6];
//! let even = FnSpecification::new(|n: &i32| n % 2 == 0);
//! let big = FnSpecification::new(|n: &i32| *n > 3);
//! let spec = even.and(big);
//!
//! let picked: Vec<&i32> = filter(&numbers, &spec).collect();
//! assert_eq!(picked, [&4, &6]);
//! ```

pub mod error;
pub mod filter;
mod macros;
pub mod spec;

pub use error::SieveError;
pub use filter::{count_satisfying, filter, try_filter, Filtered, SatisfyingExt};
pub use spec::{
    AndSpecification, FnSpecification, NotSpecification, OrSpecification, Specification,
    SpecificationExt, TrueSpecification,
};
