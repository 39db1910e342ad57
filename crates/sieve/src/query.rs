//! Runs configured queries against a product list.
//!
//! Logs query progress via `tracing`:
//!
//! - **INFO**: `query_start` / `query_end` per query
//! - **DEBUG**: one `match` event per accepted product
//! - **WARN**: `query_invalid` when a query can't be built

use std::time::Instant;

use sieve_catalog::{
    ColorSpecification, NameSpecification, PriceSpecification, Product, SizeSpecification,
};
use sieve_config::{CatalogConfig, ConfigError, QueryConfig, SpecConfig};
use sieve_core::spec::{
    AndSpecification, NotSpecification, OrSpecification, Specification, TrueSpecification,
};
use sieve_core::{filter, SieveError};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Error from building or running a configured query.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Spec(#[from] SieveError),
}

/// Outcome of one query.
#[derive(Debug, Clone)]
pub struct QueryResult<'a> {
    /// Query name from the configuration.
    pub name: String,

    /// Description of the specification that ran.
    pub description: String,

    /// Number of products scanned.
    pub scanned: usize,

    /// Accepted products, in catalog order.
    pub matches: Vec<&'a Product>,
}

impl QueryResult<'_> {
    /// Names of the accepted products.
    pub fn names(&self) -> Vec<&str> {
        self.matches.iter().map(|p| p.name.as_str()).collect()
    }
}

/// Turns a configured tree into a specification tree.
///
/// # Errors
///
/// Returns the [`SieveError`] raised by the first constructor that rejects its
/// arguments: a leaf without a value, a combinator with a missing child or
/// fewer than two children.
///
/// # Example
///
/// ```
/// use sieve::prelude::*;
/// use sieve::{build_spec, SpecConfig};
///
/// let config = SpecConfig::any([SpecConfig::color(Color::Red), SpecConfig::size(Size::Small)]);
/// let spec = build_spec(&config).unwrap();
///
/// let car = Product::new("Car", Color::Red, Size::Large, Price::Expensive).unwrap();
/// assert!(spec.is_satisfied(&car));
/// assert_eq!(spec.describe(), "(color = Red OR size = Small)");
/// ```
pub fn build_spec(config: &SpecConfig) -> Result<Box<dyn Specification<Product>>, SieveError> {
    let spec: Box<dyn Specification<Product>> = match config {
        SpecConfig::Color(value) => Box::new(ColorSpecification::try_new(*value)?),
        SpecConfig::Size(value) => Box::new(SizeSpecification::try_new(*value)?),
        SpecConfig::Price(value) => Box::new(PriceSpecification::try_new(*value)?),
        SpecConfig::Name(value) => Box::new(NameSpecification::try_new(value.clone())?),
        SpecConfig::All(children) => {
            Box::new(AndSpecification::try_from_optional(build_children(children)?)?)
        }
        SpecConfig::Any(children) => {
            Box::new(OrSpecification::try_from_optional(build_children(children)?)?)
        }
        SpecConfig::Not(child) => {
            let inner = child.as_deref().map(build_spec).transpose()?;
            Box::new(NotSpecification::try_new(inner)?)
        }
        SpecConfig::Always => Box::new(TrueSpecification),
    };
    Ok(spec)
}

// Present children are built; absent ones stay `None` so the combinator can name them.
fn build_children(
    children: &[Option<SpecConfig>],
) -> Result<Vec<Option<Box<dyn Specification<Product>>>>, SieveError> {
    children
        .iter()
        .map(|child| child.as_ref().map(build_spec).transpose())
        .collect()
}

/// Builds every configured product, in order.
pub fn build_products(config: &CatalogConfig) -> Result<Vec<Product>, QueryError> {
    let products = config
        .products
        .iter()
        .map(|p| p.build())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(products)
}

/// Runs one query.
pub fn run_query<'a>(
    products: &'a [Product],
    query: &QueryConfig,
) -> Result<QueryResult<'a>, QueryError> {
    let spec = match build_spec(&query.spec) {
        Ok(spec) => spec,
        Err(err) => {
            warn!(event = "query_invalid", query = %query.name, error = %err);
            return Err(err.into());
        }
    };
    let description = spec.describe();

    info!(
        event = "query_start",
        query = %query.name,
        spec = %description,
        item_count = products.len() as u64,
    );

    let start = Instant::now();
    let mut matches = Vec::new();
    for product in filter(products, spec.as_ref()) {
        debug!(event = "match", query = %query.name, product = %product.name);
        matches.push(product);
    }

    info!(
        event = "query_end",
        query = %query.name,
        item_count = products.len() as u64,
        match_count = matches.len() as u64,
        duration_ms = start.elapsed().as_millis() as u64,
    );

    Ok(QueryResult {
        name: query.name.clone(),
        description,
        scanned: products.len(),
        matches,
    })
}

/// Runs queries in order, stopping at the first one that fails.
pub fn run_queries<'a>(
    products: &'a [Product],
    queries: &[QueryConfig],
) -> Result<Vec<QueryResult<'a>>, QueryError> {
    queries.iter().map(|q| run_query(products, q)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sieve_catalog::{Color, Price, Size};

    fn products() -> Vec<Product> {
        vec![
            Product::new("Apple", Color::Green, Size::Small, Price::Cheap).unwrap(),
            Product::new("Car", Color::Red, Size::Large, Price::Expensive).unwrap(),
        ]
    }

    #[test]
    fn test_build_leaf_without_value() {
        let err = build_spec(&SpecConfig::Price(None)).unwrap_err();
        assert_eq!(err.param(), "price");
    }

    #[test]
    fn test_build_all_with_one_child() {
        let err = build_spec(&SpecConfig::all([SpecConfig::Always])).unwrap_err();
        assert_eq!(err.param(), "children");
    }

    #[test]
    fn test_build_all_with_missing_child() {
        let config = SpecConfig::All(vec![Some(SpecConfig::color(Color::Red)), None]);
        let err = build_spec(&config).unwrap_err();
        assert_eq!(err.param(), "children[1]");
    }

    #[test]
    fn test_build_not_without_child() {
        let err = build_spec(&SpecConfig::Not(None)).unwrap_err();
        assert_eq!(err.param(), "inner");
    }

    #[test]
    fn test_nested_error_propagates() {
        let config = SpecConfig::any([
            SpecConfig::Always,
            SpecConfig::negate(SpecConfig::Size(None)),
        ]);
        let err = build_spec(&config).unwrap_err();
        assert_eq!(err.param(), "size");
    }

    #[test]
    fn test_run_query() {
        let products = products();
        let query = QueryConfig {
            name: "not_green".into(),
            spec: SpecConfig::negate(SpecConfig::color(Color::Green)),
        };

        let result = run_query(&products, &query).unwrap();
        assert_eq!(result.names(), ["Car"]);
        assert_eq!(result.scanned, 2);
        assert_eq!(result.description, "NOT color = Green");
        assert!(std::ptr::eq(result.matches[0], &products[1]));
    }

    #[test]
    fn test_run_query_invalid() {
        let products = products();
        let query = QueryConfig {
            name: "broken".into(),
            spec: SpecConfig::Color(None),
        };
        assert!(matches!(
            run_query(&products, &query),
            Err(QueryError::Spec(SieveError::InvalidArgument { .. }))
        ));
    }
}
