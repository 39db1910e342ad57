//! Product Catalog Example
//!
//! Filters a small product catalog by color, size and price. Each criterion is
//! its own specification; combinations are built at the call site instead of
//! being added to the filter as new methods.
//!
//! Run without arguments for the built-in listings, or pass a catalog file
//! (`.toml`, `.yaml` or `.yml`) to run the queries it declares.

use sieve::prelude::*;
use sieve::{build_products, run_queries, CatalogConfig, QueryError};

fn catalog() -> Result<Vec<Product>, SieveError> {
    Ok(vec![
        Product::new("Apple", Color::Green, Size::Small, Price::Cheap)?,
        Product::new("Tree", Color::Green, Size::Large, Price::Affordable)?,
        Product::new("House", Color::Blue, Size::Large, Price::Expensive)?,
        Product::builder()
            .name("Car")
            .color(Color::Red)
            .size(Size::Large)
            .price(Price::Expensive)
            .build()?,
    ])
}

fn print_listing<'a>(title: &str, suffix: &str, products: impl Iterator<Item = &'a Product>) {
    println!("{}:", title);
    for p in products {
        println!(" - {} is {}", p.name, suffix);
    }
}

fn run_builtin() -> Result<(), QueryError> {
    let products = catalog()?;

    // Before: a hand-written loop per criterion
    println!("Green products (hand-written loop):");
    for p in &products {
        if p.color == Color::Green {
            println!(" - {} is green", p.name);
        }
    }

    // After: one filter, any specification
    print_listing(
        "Green products (specification)",
        "green",
        filter(&products, &ColorSpecification::new(Color::Green)),
    );

    print_listing(
        "Large products",
        "large",
        filter(&products, &SizeSpecification::new(Size::Large)),
    );

    let big_blue_expensive = all_of![
        ColorSpecification::new(Color::Blue),
        SizeSpecification::new(Size::Large),
        PriceSpecification::new(Price::Expensive),
    ]?;
    print_listing(
        "Large blue, expensive items",
        "big, blue and expensive",
        filter(&products, &big_blue_expensive),
    );

    let not_green_or_cheap = ColorSpecification::new(Color::Green)
        .not()
        .or(PriceSpecification::new(Price::Cheap));
    print_listing(
        "Not green, or cheap",
        "not green or cheap",
        products.iter().satisfying(&not_green_or_cheap),
    );

    Ok(())
}

fn run_file(path: &str) -> Result<(), QueryError> {
    sieve::init_console();

    let config = CatalogConfig::load(path)?;
    let products = build_products(&config)?;

    for result in run_queries(&products, &config.queries)? {
        println!("\n{} ({}):", result.name, result.description);
        for p in &result.matches {
            println!(" - {}", p);
        }
    }
    Ok(())
}

fn main() -> Result<(), QueryError> {
    println!("Sieve Product Catalog Example");
    println!("=============================\n");

    match std::env::args().nth(1) {
        Some(path) => run_file(&path),
        None => run_builtin(),
    }
}
