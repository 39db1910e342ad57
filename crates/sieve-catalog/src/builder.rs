//! Fluent product construction.

use sieve_core::error::Result;
use sieve_core::SieveError;

use crate::product::{Color, Price, Product, Size};

/// Assembles a [`Product`] field by field.
///
/// Setting a field twice keeps the last value. Nothing is produced until
/// [`build`](ProductBuilder::build) is called.
///
/// # Example
///
/// ```
/// use sieve_catalog::{Color, Price, Product, Size};
///
/// let car = Product::builder()
///     .name("Car")
///     .color(Color::Blue)
///     .color(Color::Red)
///     .size(Size::Large)
///     .price(Price::Expensive)
///     .build()
///     .unwrap();
///
/// assert_eq!(car.color, Color::Red);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProductBuilder {
    name: Option<String>,
    color: Option<Color>,
    size: Option<Size>,
    price: Option<Price>,
}

impl ProductBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    /// Finishes the product.
    ///
    /// # Errors
    ///
    /// Returns [`SieveError::InvalidArgument`] naming the first unset field,
    /// checked in the order name, color, size, price.
    pub fn build(self) -> Result<Product> {
        let name = self.name.ok_or_else(|| SieveError::missing("name"))?;
        let color = self.color.ok_or_else(|| SieveError::missing("color"))?;
        let size = self.size.ok_or_else(|| SieveError::missing("size"))?;
        let price = self.price.ok_or_else(|| SieveError::missing("price"))?;
        Product::new(name, color, size, price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_complete() {
        let p = ProductBuilder::new()
            .name("Apple")
            .color(Color::Green)
            .size(Size::Small)
            .price(Price::Cheap)
            .build()
            .unwrap();
        assert_eq!(
            p,
            Product::new("Apple", Color::Green, Size::Small, Price::Cheap).unwrap()
        );
    }

    #[test]
    fn test_last_write_wins() {
        let p = ProductBuilder::new()
            .name("Draft")
            .name("Tree")
            .size(Size::Small)
            .size(Size::Large)
            .color(Color::Green)
            .price(Price::Affordable)
            .build()
            .unwrap();
        assert_eq!(p.name, "Tree");
        assert_eq!(p.size, Size::Large);
    }

    #[test]
    fn test_missing_field_is_named() {
        let err = ProductBuilder::new()
            .name("House")
            .color(Color::Blue)
            .price(Price::Expensive)
            .build()
            .unwrap_err();
        assert_eq!(err.param(), "size");

        let err = ProductBuilder::new().build().unwrap_err();
        assert_eq!(err.param(), "name");
    }
}
