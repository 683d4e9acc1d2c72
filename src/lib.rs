//! # lambdakit
//!
//! A small functional programming toolkit built around dynamically shaped
//! callables.
//!
//! ## Overview
//!
//! - **Callables**: [`Function`] handles carrying a fixed arity and the
//!   [`Kind`] of every parameter and result, checked on each call
//! - **Function Composition**: `curry`, `partial`, `compose`, `flip` and the
//!   `compose!` macro
//! - **Traversal**: `map`, `filter`, `fold` and `each` over sequences,
//!   mappings and character sequences
//! - **Combinators**: the SKI basis and the derived `B`, `C`, `M` terms,
//!   reduced by a strict "apply one argument" engine
//!
//! ## Feature Flags
//!
//! - `compose`: Currying and composition
//! - `traverse`: Container traversal algorithms
//! - `combinator`: Application engine and combinator basis
//! - `serde`: Serialization of the shape descriptors
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambdakit::prelude::*;
//!
//! let add = Function::binary(|first: i64, second: i64| first + second);
//! assert_eq!(add.shape().parameters(), &[Kind::Int, Kind::Int]);
//!
//! let result = add.call1(vec![Value::Int(2), Value::Int(1)]);
//! assert_eq!(result, Ok(Value::Int(3)));
//!
//! // Arguments are checked against the declared kinds
//! assert!(add.call1(vec![Value::Int(2), Value::from("1")]).is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use lambdakit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::callable::*;
    pub use crate::error::*;
    pub use crate::value::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "traverse")]
    pub use crate::traverse::*;

    #[cfg(feature = "combinator")]
    pub use crate::combinator::*;
}

pub mod callable;
pub mod error;
pub mod value;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "traverse")]
pub mod traverse;

#[cfg(feature = "combinator")]
pub mod combinator;

pub use callable::{Function, Shape, Typed};
pub use error::{Error, Expected};
pub use value::{Key, Kind, Value};
