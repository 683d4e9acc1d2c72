//! Combinatory logic over [`Value`](crate::Value) terms.
//!
//! A term is any [`Value`](crate::Value); applying a term means handing it
//! one argument with [`apply_left`]:
//!
//! | Term arity | Result of applying one argument |
//! |---|---|
//! | 1 | the function's result |
//! | 2 or 3 | the function with the argument bound |
//! | anything else | [`Error::InvalidArgs`](crate::Error::InvalidArgs) |
//!
//! [`apply_all`] and the [`apply!`](crate::apply) macro apply a whole
//! argument list left to right. The primitives `S` and `K` and the
//! combinators derived from them live in the shared [`Basis`].
//!
//! [`basis`] returns a `Result` like every other operation here: the
//! derived terms are built with the engine itself, and reduction failures
//! are reported, never raised.
//!
//! # Laws
//!
//! For any functions `f`, `g` and values `x`, `y`:
//!
//! ```text
//! I x     == x
//! K x y   == x
//! S x y z == x z (y z)
//! B f g x == f (g x)
//! C f x y == f y x
//! M f     == f f
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambdakit::combinator::basis;
//! use lambdakit::{apply, Function, Value};
//!
//! let basis = basis()?;
//! let subtract = Function::binary(|first: i64, second: i64| first - second);
//!
//! assert_eq!(apply!(basis.c(), &subtract, 10, 3), Ok(Value::Int(-7)));
//! assert_eq!(apply!(basis.k(), 1, "ignored"), Ok(Value::Int(1)));
//! # Ok::<(), lambdakit::Error>(())
//! ```

mod apply;
mod basis;

pub use apply::{apply_all, apply_left};
pub use basis::{Basis, basis};
