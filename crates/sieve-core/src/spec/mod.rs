//! Composable specifications.
//!
//! Leaf specifications test one attribute of an item; combinators compose
//! other specifications. All of them implement [`Specification`], which is the
//! only thing the filter depends on.

mod composition;
mod traits;
mod wrappers;


pub use composition::{AndSpecification, NotSpecification, OrSpecification};
pub use traits::{Specification, SpecificationExt};
pub use wrappers::{FnSpecification, TrueSpecification};
