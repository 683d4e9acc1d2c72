//! Element-wise transformation.

use std::collections::HashMap;

use super::{
    Container, check_arity, check_char_parameter, check_key_result, check_result_count,
    check_result_kind, expect_char,
};
use crate::callable::{Function, unpack};
use crate::error::Error;
use crate::value::{Key, Kind, Value};

/// Applies `function` to every element or entry and collects the results
/// into a new container of the same kind.
///
/// - [`Container::Sequence`]: `function` takes one element and returns one
///   value of any kind; the result has the same length and order.
/// - [`Container::Chars`]: `function` must be `char -> char`; the result is
///   new text with as many characters as the input.
/// - [`Container::Mapping`]: `function` takes `(key, value)` and returns a
///   new `(key, value)` pair. When two entries map to the same key, the one
///   visited later wins; the visiting order of a mapping is unspecified.
///
/// # Errors
///
/// - [`Error::Arity`] if the visitor arity does not match the container kind
/// - [`Error::Shape`] if the visitor returns the wrong number of values, a
///   character visitor is not declared to return a `char`, or a mapping
///   visitor returns keys that are not `bool`, `int`, `char` or `str`
/// - [`Error::TypeMismatch`] if an element or returned character has the
///   wrong kind
/// - any error the visitor itself reports
///
/// # Examples
///
/// ```rust
/// use lambdakit::traverse::{Container, map};
/// use lambdakit::Function;
///
/// let shout = Function::unary(|character: char| character.to_ascii_uppercase());
/// assert_eq!(map(&Container::chars("abc"), &shout), Ok(Container::chars("ABC")));
///
/// let scores = Container::mapping([("abc", 1), ("def", 2)]);
/// let adjusted = Function::binary_to_pair(|key: String, value: i64| (key.to_uppercase(), value * 2));
/// assert_eq!(
///     map(&scores, &adjusted),
///     Ok(Container::mapping([("ABC", 2), ("DEF", 4)]))
/// );
/// ```
pub fn map(container: &Container, function: &Function) -> Result<Container, Error> {
    check_arity("map", container, function)?;

    match container {
        Container::Sequence(items) => {
            check_result_count("map", function, 1)?;
            items
                .iter()
                .map(|item| function.call1(vec![item.clone()]))
                .collect::<Result<Vec<_>, _>>()
                .map(Container::Sequence)
        }
        Container::Chars(text) => {
            check_char_parameter("map", function)?;
            check_result_kind("map", function, Kind::Char)?;
            text.chars()
                .map(|character| expect_char("map", function.apply(character)?))
                .collect::<Result<String, _>>()
                .map(Container::Chars)
        }
        Container::Mapping(entries) => {
            check_result_count("map", function, 2)?;
            check_key_result("map", function)?;
            let mut mapped = HashMap::with_capacity(entries.len());
            for (key, value) in entries {
                let results = function.call(vec![Value::from(key.clone()), value.clone()])?;
                let [key, value] = unpack("map", results)?;
                mapped.insert(Key::try_from(key)?, value);
            }
            Ok(Container::Mapping(mapped))
        }
    }
}
