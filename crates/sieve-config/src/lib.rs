//! Configuration system for Sieve.
//!
//! Describe a product catalog and named queries in TOML or YAML, so that
//! selection criteria can change without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use sieve_catalog::Color;
//! use sieve_config::{CatalogConfig, SpecConfig};
//!
//! let config = CatalogConfig::from_toml_str(r#"
//!     [[products]]
//!     name = "Apple"
//!     color = "green"
//!     size = "small"
//!     price = "cheap"
//!
//!     [[queries]]
//!     name = "green_and_small"
//!     spec = { all = [{ color = "green" }, { size = "small" }] }
//! "#).unwrap();
//!
//! assert_eq!(config.products.len(), 1);
//! let query = config.query("green_and_small").unwrap();
//! assert!(matches!(&query.spec, SpecConfig::All(children) if children.len() == 2));
//! ```
//!
//! A missing leaf value is representable (YAML `null`) and is rejected only
//! when the query is turned into a specification:
//!
//! ```
//! use sieve_config::{CatalogConfig, SpecConfig};
//!
//! let config = CatalogConfig::from_yaml_str(r#"
//!     queries:
//!       - name: broken
//!         spec:
//!           color: ~
//! "#).unwrap();
//!
//! assert_eq!(config.queries[0].spec, SpecConfig::Color(None));
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sieve_catalog::{Color, Price, Product, Size};
use thiserror::Error;


/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// A catalog of products plus the named queries to run against it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CatalogConfig {
    /// Products, in catalog order.
    #[serde(default)]
    pub products: Vec<ProductConfig>,

    /// Queries, in execution order.
    #[serde(default)]
    pub queries: Vec<QueryConfig>,
}

impl CatalogConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file.
    ///
    /// Files ending in `.yaml` or `.yml` are read as YAML, anything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file can't be read, doesn't parse, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Adds a product.
    pub fn with_product(mut self, product: ProductConfig) -> Self {
        self.products.push(product);
        self
    }

    /// Adds a query.
    pub fn with_query(mut self, name: impl Into<String>, spec: SpecConfig) -> Self {
        self.queries.push(QueryConfig {
            name: name.into(),
            spec,
        });
        self
    }

    /// Looks up a query by name.
    pub fn query(&self, name: &str) -> Option<&QueryConfig> {
        self.queries.iter().find(|q| q.name == name)
    }

    /// Checks structural rules that serde can't express.
    ///
    /// Product and query names must be non-blank and query names unique.
    /// Leaf values and combinator arity are checked later, when a query is
    /// turned into a specification.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(i) = self.products.iter().position(|p| p.name.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "products[{i}]: name must not be empty"
            )));
        }

        let mut seen = HashSet::new();
        for (i, query) in self.queries.iter().enumerate() {
            if query.name.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "queries[{i}]: name must not be empty"
                )));
            }
            if !seen.insert(query.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "queries[{i}]: duplicate query name `{}`",
                    query.name
                )));
            }
        }
        Ok(())
    }
}

/// One product entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ProductConfig {
    pub name: String,
    pub color: Color,
    pub size: Size,
    pub price: Price,
}

impl ProductConfig {
    pub fn new(name: impl Into<String>, color: Color, size: Size, price: Price) -> Self {
        Self {
            name: name.into(),
            color,
            size,
            price,
        }
    }

    /// Builds the catalog product.
    pub fn build(&self) -> sieve_core::error::Result<Product> {
        Product::new(self.name.clone(), self.color, self.size, self.price)
    }
}

/// A named query.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct QueryConfig {
    /// Name used in logs and for lookup.
    pub name: String,

    /// The selection criteria.
    ///
    /// Variants are written as single-key maps (`color: green`) in YAML as
    /// well as TOML.
    #[serde(with = "serde_yaml::with::singleton_map_recursive")]
    pub spec: SpecConfig,
}

/// Declarative specification tree.
///
/// Leaf values are optional so that a document can say "no value" (YAML
/// `null`); such a leaf fails when built. Combinator children are optional
/// for the same reason.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecConfig {
    /// Product color equals the value.
    Color(Option<Color>),

    /// Product size equals the value.
    Size(Option<Size>),

    /// Product price equals the value.
    Price(Option<Price>),

    /// Product name equals the value.
    Name(Option<String>),

    /// Every child matches (two or more).
    All(Vec<Option<SpecConfig>>),

    /// At least one child matches (two or more).
    Any(Vec<Option<SpecConfig>>),

    /// The child does not match.
    Not(Option<Box<SpecConfig>>),

    /// Matches everything.
    Always,
}

impl SpecConfig {
    pub fn color(color: Color) -> Self {
        SpecConfig::Color(Some(color))
    }

    pub fn size(size: Size) -> Self {
        SpecConfig::Size(Some(size))
    }

    pub fn price(price: Price) -> Self {
        SpecConfig::Price(Some(price))
    }

    pub fn name(name: impl Into<String>) -> Self {
        SpecConfig::Name(Some(name.into()))
    }

    pub fn all(children: impl IntoIterator<Item = SpecConfig>) -> Self {
        SpecConfig::All(children.into_iter().map(Some).collect())
    }

    pub fn any(children: impl IntoIterator<Item = SpecConfig>) -> Self {
        SpecConfig::Any(children.into_iter().map(Some).collect())
    }

    pub fn negate(child: SpecConfig) -> Self {
        SpecConfig::Not(Some(Box::new(child)))
    }

    /// Number of leaves in the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            SpecConfig::All(children) | SpecConfig::Any(children) => {
                children.iter().flatten().map(SpecConfig::leaf_count).sum()
            }
            SpecConfig::Not(child) => child.as_deref().map_or(0, SpecConfig::leaf_count),
            _ => 1,
        }
    }
}
