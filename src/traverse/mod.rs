//! Traversal algorithms over sequences, mappings and character sequences.
//!
//! Every algorithm takes a [`Container`] and a visitor [`Function`] and
//! dispatches on the container kind. The visitor's arity must match the
//! kind before any element is visited:
//!
//! | Container | Visitor parameters |
//! |---|---|
//! | [`Container::Sequence`] | `(element)` |
//! | [`Container::Chars`] | `(char)` |
//! | [`Container::Mapping`] | `(key, value)` |
//!
//! Inputs are never modified; [`map`] and [`filter`] always return a fresh
//! container of the same kind.
//!
//! # Overview
//!
//! - [`fold`]: Left fold over a sequence or character sequence
//! - [`map`]: Transform every element or entry
//! - [`filter`]: Keep the elements or entries a predicate accepts
//! - [`each`]: Visit every element or entry for its side effects
//!
//! # Examples
//!
//! ```rust
//! use lambdakit::traverse::{Container, filter, fold, map};
//! use lambdakit::{Function, Value};
//!
//! let numbers = Container::sequence([1, 2, 3]);
//!
//! let doubled = map(&numbers, &Function::unary(|number: i64| number * 2)).unwrap();
//! assert_eq!(doubled, Container::sequence([2, 4, 6]));
//!
//! let even = filter(&numbers, &Function::unary(|number: i64| number % 2 == 0)).unwrap();
//! assert_eq!(even, Container::sequence([2]));
//!
//! let add = Function::binary(|first: i64, second: i64| first + second);
//! assert_eq!(fold(&add, &numbers, None), Ok(Some(Value::Int(6))));
//! ```

mod container;
mod each;
mod filter;
mod fold;
mod map;

pub use container::{Container, ContainerKind};
pub use each::each;
pub use filter::filter;
pub use fold::{fold, fold_function};
pub use map::map;

use crate::callable::Function;
use crate::error::{Error, Expected};
use crate::value::{Key, Kind, Value};

fn check_arity(
    operation: &'static str,
    container: &Container,
    visitor: &Function,
) -> Result<(), Error> {
    let required = container.kind().visitor_arity();
    if visitor.arity() == required {
        Ok(())
    } else {
        let error = Error::Arity {
            context: operation,
            expected: Expected::Exactly(required),
            found: visitor.arity(),
        };
        tracing::debug!(%error, container = %container.kind(), "rejected visitor");
        Err(error)
    }
}

fn check_result_count(
    operation: &'static str,
    visitor: &Function,
    required: usize,
) -> Result<(), Error> {
    let produced = visitor.shape().results().len();
    if produced == required {
        Ok(())
    } else {
        Err(Error::shape(
            operation,
            format!("visitor returns {produced} value(s), expected {required}"),
        ))
    }
}

/// Checks that a single-result visitor is declared to return `kind` (or
/// [`Kind::Any`], in which case the result is checked per call).
fn check_result_kind(operation: &'static str, visitor: &Function, kind: Kind) -> Result<(), Error> {
    match visitor.shape().results() {
        [declared] if declared.accepts(kind) => Ok(()),
        _ => Err(Error::shape(
            operation,
            format!("visitor must return a single <{kind}>, declared {}", visitor.shape()),
        )),
    }
}

/// Checks that the first result of a mapping visitor may hold a key.
fn check_key_result(operation: &'static str, visitor: &Function) -> Result<(), Error> {
    match visitor.shape().results().first() {
        Some(&declared) if !Key::admits(declared) => Err(Error::shape(
            operation,
            format!("visitor returns keys of kind <{declared}>, expected bool, int, char or str"),
        )),
        _ => Ok(()),
    }
}

fn check_char_parameter(operation: &'static str, visitor: &Function) -> Result<(), Error> {
    match visitor.shape().parameters() {
        [parameter] if !parameter.accepts(Kind::Char) => {
            Err(Error::mismatch(operation, 0, *parameter, Kind::Char))
        }
        _ => Ok(()),
    }
}

fn expect_char(operation: &'static str, value: Value) -> Result<char, Error> {
    match value {
        Value::Char(character) => Ok(character),
        other => Err(Error::mismatch(operation, 0, Kind::Char, other.kind())),
    }
}

fn expect_bool(operation: &'static str, value: &Value) -> Result<bool, Error> {
    match value {
        Value::Bool(accepted) => Ok(*accepted),
        other => Err(Error::mismatch(operation, 0, Kind::Bool, other.kind())),
    }
}
