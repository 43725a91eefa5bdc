//! Strongly-typed value objects used by the search domain.
//!
//! A [`SearchTerm`] can only be built from text that still has content after
//! trimming, so once a request reaches the service layer the query is known
//! to be worth sending upstream.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
}

/// Trimmed, non-empty search text.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Trims the input and rejects blank values.
    pub fn new<S: AsRef<str>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            Err(TypeConstraintError::EmptyString)
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    /// Borrow the term as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for SearchTerm {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for SearchTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for SearchTerm {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for SearchTerm {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SearchTerm> for String {
    fn from(value: SearchTerm) -> Self {
        value.0
    }
}

/// Macro to generate pagination counters with a fallback value.
///
/// The counters are deliberately unbounded: zero or negative values are
/// forwarded to the upstream as-is.
macro_rules! counter_newtype {
    ($name:ident, $default:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Value used when the caller does not supply one.
            pub const DEFAULT: Self = Self($default);

            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw `i64` backing this counter.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::DEFAULT
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

counter_newtype!(PageNumber, 1, "1-indexed page requested from the upstream.");
counter_newtype!(PageSize, 10, "Number of results requested per page.");
