//! Sieve - composable specifications and filtering in Rust
//!
//! Define each selection criterion once, combine criteria at the call site,
//! and run them through one generic filter.
//!
//! # Example
//!
//! ```rust
//! use sieve::prelude::*;
//!
//! let products = vec![
//!     Product::new("Tree", Color::Green, Size::Large, Price::Affordable).unwrap(),
//!     Product::new("House", Color::Blue, Size::Large, Price::Expensive).unwrap(),
//! ];
//!
//! let spec = ColorSpecification::new(Color::Blue)
//!     .and(SizeSpecification::new(Size::Large))
//!     .and(PriceSpecification::new(Price::Expensive));
//!
//! let names: Vec<&str> = filter(&products, &spec).map(|p| p.name.as_str()).collect();
//! assert_eq!(names, ["House"]);
//! ```

// Core abstractions
pub use sieve_core::{
    all_of, any_of, count_satisfying, error, filter, leaf_specification, spec, try_filter,
    Filtered, SatisfyingExt, SieveError,
};

// Reference domain
pub use sieve_catalog as catalog;

// Configuration
pub use sieve_config::{CatalogConfig, ConfigError, ProductConfig, QueryConfig, SpecConfig};

pub mod query;
pub use query::{build_products, build_spec, run_queries, run_query, QueryError, QueryResult};

// Console output (optional)
#[cfg(feature = "console")]
pub use sieve_console::init as init_console;

pub mod prelude {
    pub use sieve_catalog::{
        Color, ColorSpecification, NameSpecification, Price, PriceSpecification, Product,
        ProductBuilder, Size, SizeSpecification,
    };
    pub use sieve_core::spec::{
        AndSpecification, FnSpecification, NotSpecification, OrSpecification, Specification,
        SpecificationExt, TrueSpecification,
    };
    pub use sieve_core::{all_of, any_of, filter, SatisfyingExt, SieveError};
}
