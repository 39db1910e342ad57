//! The per-attribute filter that specifications replace.
//!
//! `LegacyProductFilter` needs a new method for every criterion and every
//! combination of criteria: three attributes already call for seven methods.
//! It lives here only to show that one specification-driven filter gives the
//! same answers.

use sieve_catalog::{Color, ColorSpecification, Price, Product, Size, SizeSpecification};
use sieve_core::{filter, SpecificationExt};
use sieve_test::{names, sample_products};

struct LegacyProductFilter;

impl LegacyProductFilter {
    fn by_color<'a>(&self, products: &'a [Product], color: Color) -> Vec<&'a Product> {
        products.iter().filter(|p| p.color == color).collect()
    }

    fn by_size<'a>(&self, products: &'a [Product], size: Size) -> Vec<&'a Product> {
        products.iter().filter(|p| p.size == size).collect()
    }

    fn by_size_and_color<'a>(
        &self,
        products: &'a [Product],
        size: Size,
        color: Color,
    ) -> Vec<&'a Product> {
        products
            .iter()
            .filter(|p| p.size == size && p.color == color)
            .collect()
    }

    // by_price, by_color_and_price, by_size_and_price, by_all... would follow.
}

#[test]
fn test_legacy_and_specification_agree_on_color() {
    let products = sample_products();
    let legacy = LegacyProductFilter.by_color(&products, Color::Green);
    let spec = ColorSpecification::new(Color::Green);
    assert_eq!(names(filter(&products, &spec)), names(legacy));
}

#[test]
fn test_legacy_and_specification_agree_on_size() {
    let products = sample_products();
    let legacy = LegacyProductFilter.by_size(&products, Size::Large);
    let spec = SizeSpecification::new(Size::Large);
    assert_eq!(names(filter(&products, &spec)), names(legacy));
}

#[test]
fn test_legacy_and_specification_agree_on_combination() {
    let products = sample_products();
    for size in Size::ALL {
        for color in Color::ALL {
            let legacy = LegacyProductFilter.by_size_and_color(&products, *size, *color);
            let spec = SizeSpecification::new(*size).and(ColorSpecification::new(*color));
            assert_eq!(filter(&products, &spec).collect::<Vec<_>>(), legacy);
        }
    }
}

#[test]
fn test_price_needs_no_new_filter_method() {
    let products = sample_products();
    let spec = sieve_catalog::PriceSpecification::new(Price::Expensive);
    assert_eq!(names(filter(&products, &spec)), ["House", "Car"]);
}
