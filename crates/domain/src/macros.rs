//! Macro for implementing Display and FromStr for small domain enums
//!
//! Used for every enum that crosses a text boundary (JSON input, config
//! files, CLI flags) so they all agree on spelling.
//!
//! # Example
//!
//! ```rust
//! use dashlens_domain::impl_domain_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Trend {
//!     Rising,
//!     Falling,
//! }
//!
//! impl_domain_enum_conversions!(Trend {
//!     Rising => "rising",
//!     Falling => "falling",
//! });
//!
//! assert_eq!("RISING".parse::<Trend>().unwrap(), Trend::Rising);
//! ```

/// Implements Display and FromStr traits for domain enums
///
/// - Display writes the canonical (kebab-case) spelling
/// - FromStr is case-insensitive and treats `_` the same as `-`, so both
///   `negative_change` and `Negative-Change` parse
#[macro_export]
macro_rules! impl_domain_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                let normalized = s.trim().to_lowercase().replace('_', "-");
                match normalized.as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestTag {
        Critical,
        NegativeChange,
    }

    impl_domain_enum_conversions!(TestTag {
        Critical => "critical",
        NegativeChange => "negative-change",
    });

    #[test]
    fn test_display_conversion() {
        assert_eq!(TestTag::Critical.to_string(), "critical");
        assert_eq!(TestTag::NegativeChange.to_string(), "negative-change");
    }

    #[test]
    fn test_fromstr_accepts_case_and_separator_variants() {
        assert_eq!(TestTag::from_str("CRITICAL").unwrap(), TestTag::Critical);
        assert_eq!(TestTag::from_str("negative_change").unwrap(), TestTag::NegativeChange);
        assert_eq!(TestTag::from_str(" Negative-Change ").unwrap(), TestTag::NegativeChange);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestTag::from_str("severe");
        assert!(result.unwrap_err().contains("Invalid TestTag: severe"));
        assert!(TestTag::from_str("").is_err());
    }
}
