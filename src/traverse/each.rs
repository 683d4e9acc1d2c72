//! Visiting every element for its side effects.

use super::{Container, check_arity, check_char_parameter};
use crate::callable::Function;
use crate::error::Error;
use crate::value::Value;

/// Calls `visitor` once per element or entry, discarding whatever it
/// returns.
///
/// Sequences and character sequences are visited in ascending index order.
/// Mapping entries are visited as `(key, value)` in unspecified order.
/// Visiting stops at the first error the visitor reports.
///
/// # Errors
///
/// - [`Error::Arity`] if the visitor arity does not match the container kind
/// - [`Error::TypeMismatch`] if an element does not fit the visitor
/// - any error the visitor itself reports
///
/// # Examples
///
/// ```rust
/// use std::sync::{Arc, Mutex};
///
/// use lambdakit::traverse::{Container, each};
/// use lambdakit::Function;
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let recorder = {
///     let seen = Arc::clone(&seen);
///     Function::unary(move |number: i64| seen.lock().unwrap().push(number))
/// };
///
/// each(&Container::sequence([3, 1, 2]), &recorder).unwrap();
/// assert_eq!(*seen.lock().unwrap(), vec![3, 1, 2]);
/// ```
pub fn each(container: &Container, visitor: &Function) -> Result<(), Error> {
    check_arity("each", container, visitor)?;

    match container {
        Container::Sequence(items) => {
            for item in items {
                visitor.call(vec![item.clone()])?;
            }
        }
        Container::Chars(text) => {
            check_char_parameter("each", visitor)?;
            for character in text.chars() {
                visitor.call(vec![Value::Char(character)])?;
            }
        }
        Container::Mapping(entries) => {
            for (key, value) in entries {
                visitor.call(vec![Value::from(key.clone()), value.clone()])?;
            }
        }
    }
    Ok(())
}
