//! Declarative macros for defining and combining specifications.

/// Defines a leaf specification comparing one field of an item for equality.
///
/// The generated type has an infallible `new(target)`, a `try_new(Option<target>)`
/// that rejects a missing target value, and a `target()` accessor. The value type
/// must implement `Display`, `Clone` and `Eq`.
///
/// # Example
///
/// ```
/// use sieve_core::leaf_specification;
/// use sieve_core::spec::Specification;
///
/// pub struct Book {
///     pub genre: &'static str,
/// }
///
/// leaf_specification! {
///     /// Matches books of one genre.
///     pub struct GenreSpecification for Book { genre: &'static str }
/// }
///
/// let spec = GenreSpecification::new("poetry");
/// assert!(spec.is_satisfied(&Book { genre: "poetry" }));
/// assert!(!spec.is_satisfied(&Book { genre: "crime" }));
/// assert!(GenreSpecification::try_new(None).is_err());
/// ```
#[macro_export]
macro_rules! leaf_specification {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident for $item:ty { $field:ident : $value:ty }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        $vis struct $name {
            target: $value,
        }

        impl $name {
            /// Creates the specification for one target value.
            #[inline]
            pub fn new(target: $value) -> Self {
                Self { target }
            }

            /// Creates the specification, failing if the target value is missing.
            pub fn try_new(target: ::std::option::Option<$value>) -> $crate::error::Result<Self> {
                target
                    .map(Self::new)
                    .ok_or_else(|| $crate::error::SieveError::missing(stringify!($field)))
            }

            /// The value items are compared against.
            pub fn target(&self) -> &$value {
                &self.target
            }
        }

        impl $crate::spec::Specification<$item> for $name {
            #[inline]
            fn is_satisfied(&self, item: &$item) -> bool {
                item.$field == self.target
            }

            fn describe(&self) -> String {
                format!("{} = {}", stringify!($field), self.target)
            }
        }
    };
}

/// Builds an [`AndSpecification`](crate::spec::AndSpecification) from two or more
/// specifications of possibly different types.
///
/// Expands to a `Result`, since a conjunction needs at least two children.
///
/// ```
/// use sieve_core::all_of;
/// use sieve_core::spec::{FnSpecification, Specification};
///
/// let spec = all_of![
///     FnSpecification::new(|n: &i32| *n > 0),
///     FnSpecification::new(|n: &i32| *n < 10),
/// ]
/// .unwrap();
/// assert!(spec.is_satisfied(&5));
/// assert!(!spec.is_satisfied(&15));
/// ```
#[macro_export]
macro_rules! all_of {
    ($($spec:expr),+ $(,)?) => {
        $crate::spec::AndSpecification::new(::std::vec![
            $($crate::spec::SpecificationExt::boxed($spec)),+
        ])
    };
}

/// Builds an [`OrSpecification`](crate::spec::OrSpecification) from two or more
/// specifications. Expands to a `Result`.
#[macro_export]
macro_rules! any_of {
    ($($spec:expr),+ $(,)?) => {
        $crate::spec::OrSpecification::new(::std::vec![
            $($crate::spec::SpecificationExt::boxed($spec)),+
        ])
    };
}
