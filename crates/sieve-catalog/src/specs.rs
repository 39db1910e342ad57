//! Leaf specifications over [`Product`] attributes.
//!
//! Each one is a single macro invocation. A new filterable attribute gets its
//! own invocation here; the filter and the combinators stay untouched.

use sieve_core::leaf_specification;

use crate::product::{Color, Price, Product, Size};

leaf_specification! {
    /// Matches products of one [`Color`].
    pub struct ColorSpecification for Product { color: Color }
}

leaf_specification! {
    /// Matches products of one [`Size`].
    pub struct SizeSpecification for Product { size: Size }
}

leaf_specification! {
    /// Matches products of one [`Price`] band.
    pub struct PriceSpecification for Product { price: Price }
}

leaf_specification! {
    /// Matches products by exact name.
    pub struct NameSpecification for Product { name: String }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sieve_core::spec::Specification;

    fn tree() -> Product {
        Product::new("Tree", Color::Green, Size::Large, Price::Affordable).unwrap()
    }

    #[test]
    fn test_leaf_specs_compare_one_attribute() {
        let tree = tree();
        assert!(ColorSpecification::new(Color::Green).is_satisfied(&tree));
        assert!(!ColorSpecification::new(Color::Blue).is_satisfied(&tree));
        assert!(SizeSpecification::new(Size::Large).is_satisfied(&tree));
        assert!(PriceSpecification::new(Price::Affordable).is_satisfied(&tree));
        assert!(!PriceSpecification::new(Price::Cheap).is_satisfied(&tree));
        assert!(NameSpecification::new("Tree".to_string()).is_satisfied(&tree));
    }

    #[test]
    fn test_leaf_specs_agree_with_attribute_equality() {
        let tree = tree();
        for color in Color::ALL {
            assert_eq!(
                ColorSpecification::new(*color).is_satisfied(&tree),
                tree.color == *color
            );
        }
        for size in Size::ALL {
            assert_eq!(
                SizeSpecification::new(*size).is_satisfied(&tree),
                tree.size == *size
            );
        }
    }

    #[test]
    fn test_missing_target_value() {
        assert_eq!(ColorSpecification::try_new(None).unwrap_err().param(), "color");
        assert_eq!(SizeSpecification::try_new(None).unwrap_err().param(), "size");
        assert_eq!(PriceSpecification::try_new(None).unwrap_err().param(), "price");
    }

    #[test]
    fn test_describe() {
        assert_eq!(SizeSpecification::new(Size::Yuge).describe(), "size = Yuge");
    }
}
