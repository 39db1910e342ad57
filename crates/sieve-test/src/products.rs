//! Reference catalog fixtures.
//!
//! ```
//! use sieve_test::products::{names, sample_products};
//!
//! let products = sample_products();
//! assert_eq!(names(&products), ["Apple", "Tree", "House", "Car"]);
//! ```

use sieve_catalog::{Color, Price, Product, Size};

fn product(name: &str, color: Color, size: Size, price: Price) -> Product {
    Product {
        name: name.to_string(),
        color,
        size,
        price,
    }
}

/// Green, small, cheap.
pub fn apple() -> Product {
    product("Apple", Color::Green, Size::Small, Price::Cheap)
}

/// Green, large, affordable.
pub fn tree() -> Product {
    product("Tree", Color::Green, Size::Large, Price::Affordable)
}

/// Blue, large, expensive.
pub fn house() -> Product {
    product("House", Color::Blue, Size::Large, Price::Expensive)
}

/// Red, large, expensive.
pub fn car() -> Product {
    product("Car", Color::Red, Size::Large, Price::Expensive)
}

/// Apple, tree, house and car, in that order.
pub fn sample_products() -> Vec<Product> {
    vec![apple(), tree(), house(), car()]
}

/// Collects product names, keeping order.
pub fn names<'a, I>(products: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a Product>,
{
    products.into_iter().map(|p| p.name.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_products() {
        let products = sample_products();
        assert_eq!(products.len(), 4);
        assert_eq!(products[2], house());
        assert!(products.iter().all(|p| !p.name.is_empty()));
    }
}
