//! Closed sets of string-valued options with a canonical order.
//!
//! A family is declared with [`string_enum!`]:
//!
//! ```
//! use vyper_semantics::string_enum;
//! use vyper_semantics::string_enum::StringEnum;
//!
//! string_enum! {
//!     pub enum Visibility {
//!         External,
//!         Internal,
//!     }
//! }
//!
//! assert_eq!(Visibility::values(), vec!["external", "internal"]);
//! assert!(Visibility::External < Visibility::Internal);
//! ```
//!
//! Each member's value is the lowercase of its variant name, and ordering is
//! the declaration order. Members of different families are different Rust
//! types, so comparing across families does not compile.
//!
//! ```compile_fail
//! use vyper_semantics::string_enum;
//!
//! string_enum! {
//!     pub enum Visibility { External, Internal }
//! }
//!
//! string_enum! {
//!     pub enum Mutability { Pure, View }
//! }
//!
//! let _ = Visibility::External == Mutability::Pure;
//! ```
//!
//! ```compile_fail
//! use vyper_semantics::string_enum;
//!
//! string_enum! {
//!     pub enum Visibility { External, Internal }
//! }
//!
//! string_enum! {
//!     pub enum Mutability { Pure, View }
//! }
//!
//! let _ = Visibility::External < Mutability::Pure;
//! ```

use crate::errors::InternalError;

pub trait StringEnum: Copy + Ord + Sized + 'static {
    /// Name of the family, used in internal error messages.
    const FAMILY: &'static str;

    /// Every member in declaration order.
    fn options() -> &'static [Self];

    /// The member's variant name as declared.
    fn variant_name(&self) -> &'static str;

    #[must_use]
    fn value(&self) -> String {
        self.variant_name().to_lowercase()
    }

    #[must_use]
    fn values() -> Vec<String> {
        Self::options().iter().map(StringEnum::value).collect()
    }

    #[must_use]
    fn is_valid_value(value: &str) -> bool {
        Self::options().iter().any(|option| option.value() == value)
    }

    /// Member whose value is `value`.
    ///
    /// # Errors
    ///
    /// Returns [`InternalError::InvalidEnumValue`] when no member matches. Values
    /// are expected to be checked with [`StringEnum::is_valid_value`] first, so
    /// reaching this error is a compiler bug.
    fn from_value(value: &str) -> Result<Self, InternalError> {
        Self::options()
            .iter()
            .copied()
            .find(|option| option.value() == value)
            .ok_or_else(|| InternalError::InvalidEnumValue {
                value: value.to_string(),
                family: Self::FAMILY,
            })
    }
}

#[macro_export]
macro_rules! string_enum {
    (
        $(#[$outer:meta])*
        $enum_vis:vis enum $name:ident {
            $(
                $(#[$arm_attr:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        $enum_vis enum $name {
            $(
                $(#[$arm_attr])*
                $variant,
            )+
        }

        impl $crate::string_enum::StringEnum for $name {
            const FAMILY: &'static str = stringify!($name);

            fn options() -> &'static [Self] {
                &[$($name::$variant,)+]
            }

            fn variant_name(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", $crate::string_enum::StringEnum::value(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::errors::InternalError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as $crate::string_enum::StringEnum>::from_value(s)
            }
        }
    };
}
