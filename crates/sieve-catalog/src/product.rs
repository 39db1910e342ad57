//! The product item and its attribute enumerations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sieve_core::error::Result;
use sieve_core::SieveError;

macro_rules! attribute_enum {
    ($(#[$meta:meta])* $name:ident, $param:literal, [$($variant:ident),+ $(,)?]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The value's name.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = SieveError;

            /// Parses a value name, ignoring case and surrounding whitespace.
            fn from_str(s: &str) -> Result<Self> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| {
                        SieveError::invalid_argument($param, format!("unknown {} `{}`", $param, s))
                    })
            }
        }
    };
}

attribute_enum!(
    /// Product color.
    Color,
    "color",
    [Red, Green, Blue]
);

attribute_enum!(
    /// Product size.
    Size,
    "size",
    [Small, Medium, Large, Yuge]
);

attribute_enum!(
    /// Product price band.
    Price,
    "price",
    [Cheap, Affordable, Expensive, Ridiculous]
);

/// A catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub color: Color,
    pub size: Size,
    pub price: Price,
}

impl Product {
    /// Creates a product.
    ///
    /// # Errors
    ///
    /// Returns [`SieveError::InvalidArgument`] if `name` is blank.
    pub fn new(name: impl Into<String>, color: Color, size: Size, price: Price) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SieveError::invalid_argument("name", "must not be empty"));
        }
        Ok(Self {
            name,
            color,
            size,
            price,
        })
    }

    /// Starts a [`ProductBuilder`](crate::ProductBuilder).
    pub fn builder() -> crate::ProductBuilder {
        crate::ProductBuilder::new()
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {}, {})", self.name, self.color, self.size, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!("green".parse::<Color>().unwrap(), Color::Green);
        assert_eq!(" LARGE ".parse::<Size>().unwrap(), Size::Large);
        assert_eq!("Ridiculous".parse::<Price>().unwrap(), Price::Ridiculous);
    }

    #[test]
    fn test_parse_unknown_value() {
        let err = "purple".parse::<Color>().unwrap_err();
        assert_eq!(err.param(), "color");
        assert_eq!(err.to_string(), "Invalid argument `color`: unknown color `purple`");
    }

    #[test]
    fn test_all_round_trips_through_display() {
        for size in Size::ALL {
            assert_eq!(size.to_string().parse::<Size>().unwrap(), *size);
        }
        assert_eq!(Price::ALL.len(), 4);
    }

    #[test]
    fn test_product_new_rejects_blank_name() {
        let err = Product::new("  ", Color::Red, Size::Small, Price::Cheap).unwrap_err();
        assert_eq!(err.param(), "name");
    }

    #[test]
    fn test_product_display() {
        let p = Product::new("House", Color::Blue, Size::Large, Price::Expensive).unwrap();
        assert_eq!(p.to_string(), "House (Blue, Large, Expensive)");
    }
}
