//! Catalog configuration documents.
//!
//! Both documents describe the reference catalog and the same three queries:
//! `green`, `large` and `big_blue_expensive`.

/// The reference catalog as TOML.
pub const SAMPLE_CATALOG_TOML: &str = r#"
[[products]]
name = "Apple"
color = "green"
size = "small"
price = "cheap"

[[products]]
name = "Tree"
color = "green"
size = "large"
price = "affordable"

[[products]]
name = "House"
color = "blue"
size = "large"
price = "expensive"

[[products]]
name = "Car"
color = "red"
size = "large"
price = "expensive"

[[queries]]
name = "green"
spec = { color = "green" }

[[queries]]
name = "large"
spec = { size = "large" }

[[queries]]
name = "big_blue_expensive"
spec = { all = [{ color = "blue" }, { size = "large" }, { price = "expensive" }] }
"#;

/// The reference catalog as YAML.
pub const SAMPLE_CATALOG_YAML: &str = r#"
products:
  - { name: Apple, color: green, size: small, price: cheap }
  - { name: Tree, color: green, size: large, price: affordable }
  - { name: House, color: blue, size: large, price: expensive }
  - { name: Car, color: red, size: large, price: expensive }
queries:
  - name: green
    spec:
      color: green
  - name: large
    spec:
      size: large
  - name: big_blue_expensive
    spec:
      all:
        - color: blue
        - size: large
        - price: expensive
"#;
