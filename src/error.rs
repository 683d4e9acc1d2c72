//! Error types shared by every operation of the crate.
//!
//! All fallible operations return [`Result<T, Error>`]. Nothing in the crate
//! aborts on a malformed callable or container: arity and shape mismatches
//! are ordinary, recoverable outcomes, in particular while building
//! point-free combinator expressions.
//!
//! # Examples
//!
//! ```rust
//! use lambdakit::{Error, Expected};
//!
//! let error = Error::Arity {
//!     context: "flip",
//!     expected: Expected::AtLeast(2),
//!     found: 1,
//! };
//! assert_eq!(
//!     format!("{error}"),
//!     "flip: expected at least 2 parameter(s), found 1"
//! );
//! ```

use std::fmt;

use crate::value::Kind;

/// The parameter count an operation requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expected {
    /// Exactly this many parameters.
    Exactly(usize),
    /// This many parameters or more.
    AtLeast(usize),
}

impl Expected {
    /// Returns whether `count` satisfies the requirement.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdakit::Expected;
    ///
    /// assert!(Expected::AtLeast(2).admits(3));
    /// assert!(!Expected::Exactly(2).admits(3));
    /// ```
    #[must_use]
    pub const fn admits(self, count: usize) -> bool {
        match self {
            Self::Exactly(required) => count == required,
            Self::AtLeast(required) => count >= required,
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(count) => write!(formatter, "exactly {count}"),
            Self::AtLeast(count) => write!(formatter, "at least {count}"),
        }
    }
}

/// Errors reported by callables, composition, traversal and the combinator
/// engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A callable has the wrong parameter count for the role it is used in.
    #[error("{context}: expected {expected} parameter(s), found {found}")]
    Arity {
        /// The operation that rejected the callable.
        context: &'static str,
        /// The required parameter count.
        expected: Expected,
        /// The parameter count that was supplied.
        found: usize,
    },

    /// A value is not callable, or a callable produces the wrong number or
    /// shape of results.
    #[error("{context}: {detail}")]
    Shape {
        /// The operation that rejected the value.
        context: &'static str,
        /// What was wrong with the shape.
        detail: String,
    },

    /// A positional, element, key or value kind did not match.
    #[error("{context}: position {position} expects <{expected}>, found <{found}>")]
    TypeMismatch {
        /// The operation that detected the mismatch.
        context: &'static str,
        /// Zero-based position of the first mismatch.
        position: usize,
        /// The kind that was required.
        expected: Kind,
        /// The kind that was supplied.
        found: Kind,
    },

    /// The operation is not defined for this kind of container or value.
    #[error("{operation} is not supported for {subject}")]
    Unsupported {
        /// The operation that was requested.
        operation: &'static str,
        /// The kind of value it was requested on.
        subject: &'static str,
    },

    /// The application engine only reduces callables of arity 1, 2 or 3.
    #[error("invalid args: application expects a callable of arity 1, 2 or 3, found arity {arity}")]
    InvalidArgs {
        /// The arity of the rejected callable.
        arity: usize,
    },
}

impl Error {
    pub(crate) fn shape(context: &'static str, detail: impl Into<String>) -> Self {
        Self::Shape {
            context,
            detail: detail.into(),
        }
    }

    pub(crate) const fn mismatch(
        context: &'static str,
        position: usize,
        expected: Kind,
        found: Kind,
    ) -> Self {
        Self::TypeMismatch {
            context,
            position,
            expected,
            found,
        }
    }
}
