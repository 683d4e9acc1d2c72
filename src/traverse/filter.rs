//! Predicate-based selection.

use std::collections::HashMap;

use super::{Container, check_arity, check_char_parameter, check_result_kind, expect_bool};
use crate::callable::Function;
use crate::error::Error;
use crate::value::{Kind, Value};

/// Keeps the elements or entries `predicate` accepts.
///
/// The predicate follows the visitor arity of [`map`](super::map) and must
/// return a single `bool`. Sequences and character sequences keep the
/// relative order of the accepted elements; a mapping yields the
/// sub-mapping of accepted entries.
///
/// # Errors
///
/// - [`Error::Arity`] if the predicate arity does not match the container
///   kind
/// - [`Error::Shape`] if the predicate is not declared to return a `bool`
/// - [`Error::TypeMismatch`] if an element has the wrong kind, or a
///   predicate declared as [`Kind::Any`] returns something other than a
///   `bool`
///
/// # Examples
///
/// ```rust
/// use lambdakit::traverse::{Container, filter};
/// use lambdakit::Function;
///
/// let lowercase = Function::unary(|character: char| character.is_lowercase());
/// assert_eq!(filter(&Container::chars("aBcdEFg"), &lowercase), Ok(Container::chars("acdg")));
///
/// let is_b = Function::binary(|key: String, _: i64| key == "b");
/// let prices = Container::mapping([("a", 1), ("b", 10), ("c", 100)]);
/// assert_eq!(filter(&prices, &is_b), Ok(Container::mapping([("b", 10)])));
/// ```
pub fn filter(container: &Container, predicate: &Function) -> Result<Container, Error> {
    check_arity("filter", container, predicate)?;
    check_result_kind("filter", predicate, Kind::Bool)?;

    match container {
        Container::Sequence(items) => {
            let mut kept = Vec::new();
            for item in items {
                let verdict = predicate.call1(vec![item.clone()])?;
                if expect_bool("filter", &verdict)? {
                    kept.push(item.clone());
                }
            }
            Ok(Container::Sequence(kept))
        }
        Container::Chars(text) => {
            check_char_parameter("filter", predicate)?;
            let mut kept = String::new();
            for character in text.chars() {
                if expect_bool("filter", &predicate.apply(character)?)? {
                    kept.push(character);
                }
            }
            Ok(Container::Chars(kept))
        }
        Container::Mapping(entries) => {
            let mut kept = HashMap::new();
            for (key, value) in entries {
                let verdict = predicate.call1(vec![Value::from(key.clone()), value.clone()])?;
                if expect_bool("filter", &verdict)? {
                    kept.insert(key.clone(), value.clone());
                }
            }
            Ok(Container::Mapping(kept))
        }
    }
}
