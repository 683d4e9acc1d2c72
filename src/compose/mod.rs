//! Currying, partial application, composition and argument flipping.
//!
//! Every operation here takes [`Function`](crate::Function) handles and returns a new handle
//! capturing its inputs by value; the originals are never modified. Shape
//! requirements are checked when the new handle is built, so an ill-fitting
//! composition fails immediately instead of on first call.
//!
//! # Overview
//!
//! - [`curry`]: Turn an `n`-ary function into a chain of unary functions
//! - [`partial`]: Bind the first argument, leaving the rest as parameters
//! - [`compose`]: Right-to-left composition, `compose(f, g)(x) = f(g(x))`
//! - [`flip`]: Swap the first two parameters
//! - [`compose!`](crate::compose!): Variadic composition
//!
//! # Examples
//!
//! ## Currying
//!
//! ```
//! use lambdakit::compose::curry;
//! use lambdakit::{Function, Value};
//!
//! let add = Function::binary(|first: i64, second: i64| first + second);
//! let curried = curry(&add).unwrap();
//!
//! let add_two = curried.apply(2).unwrap();
//! assert_eq!(add_two.apply(1), Ok(Value::Int(3)));
//! ```
//!
//! ## Composition
//!
//! ```
//! use lambdakit::compose::compose;
//! use lambdakit::{Function, Value};
//!
//! let increment = Function::unary(|number: i64| number + 1);
//! let double = Function::unary(|number: i64| number * 2);
//!
//! // compose(f, g)(x) = f(g(x)) = increment(double(1)) = 3
//! let composed = compose(&increment, &double).unwrap();
//! assert_eq!(composed.apply(1), Ok(Value::Int(3)));
//! ```
//!
//! ## Flip
//!
//! ```
//! use lambdakit::compose::flip;
//! use lambdakit::{Function, Value};
//!
//! let divide = Function::binary(|numerator: f64, denominator: f64| numerator / denominator);
//! let flipped = flip(&divide).unwrap();
//!
//! let result = flipped.call1(vec![Value::Float(2.0), Value::Float(3.0)]);
//! assert_eq!(result, Ok(Value::Float(1.5)));
//! ```
//!
//! # Laws
//!
//! - **Curry**: `curry(f)(a1)...(an) == f(a1, ..., an)`
//! - **Composition**: `compose(f, g)(x) == f(g(x))`
//! - **Associativity**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
//! - **Double Flip Identity**: `flip(flip(f)) == f`
//! - **Flip Definition**: `flip(f)(a, b, rest...) == f(b, a, rest...)`

mod compose_macro;
mod curry;
mod utils;

pub use curry::{curry, partial};
pub use utils::{compose, flip};
