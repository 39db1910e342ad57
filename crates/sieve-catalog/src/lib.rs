//! Product catalog domain for Sieve.
//!
//! - [`Product`] with its closed attributes [`Color`], [`Size`] and [`Price`]
//! - One leaf specification per attribute
//! - [`ProductBuilder`] for assembling products field by field
//!
//! # Example
//!
//! ```
//! use sieve_catalog::{Color, ColorSpecification, Price, Product, Size};
//! use sieve_core::filter;
//!
//! let products = vec![
//!     Product::new("Apple", Color::Green, Size::Small, Price::Cheap).unwrap(),
//!     Product::new("Car", Color::Red, Size::Large, Price::Expensive).unwrap(),
//! ];
//!
//! let green: Vec<&str> = filter(&products, &ColorSpecification::new(Color::Green))
//!     .map(|p| p.name.as_str())
//!     .collect();
//! assert_eq!(green, ["Apple"]);
//! ```

pub mod builder;
pub mod product;
pub mod specs;

pub use builder::ProductBuilder;
pub use product::{Color, Price, Product, Size};
pub use specs::{ColorSpecification, NameSpecification, PriceSpecification, SizeSpecification};
