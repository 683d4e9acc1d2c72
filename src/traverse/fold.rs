//! Left fold over sequences and character sequences.

use super::{Container, ContainerKind};
use crate::callable::{Function, Shape, unpack};
use crate::error::{Error, Expected};
use crate::value::{Kind, Value};

/// Reduces a sequence or character sequence with a binary function, left to
/// right.
///
/// When `initial` is supplied it is appended to the elements as a final
/// extra element; it does not seed the accumulator. The fold starts from the
/// first original element, so `initial` is the *last* right-hand input:
///
/// ```text
/// fold(f, [a, b], Some(z)) == f(f(a, b), z)
/// ```
///
/// This ordering matters for non-associative functions and is kept exactly.
/// It reads like an accident of the original design rather than the usual
/// seeded fold, so callers folding with a non-associative function should
/// pass `None` and combine the initial value themselves.
///
/// An empty sequence (with no `initial`) folds to `None`.
///
/// # Errors
///
/// - [`Error::Unsupported`] for a [`Container::Mapping`]
/// - [`Error::Arity`] if `function` is not binary
/// - [`Error::Shape`] if `function` does not return exactly one value
/// - [`Error::TypeMismatch`] if `initial` differs in kind from the elements,
///   or `function` cannot take or return the element kind
///
/// # Examples
///
/// ```rust
/// use lambdakit::traverse::{Container, fold};
/// use lambdakit::{Function, Value};
///
/// let concat = Function::binary(|first: String, second: String| first + &second);
/// let letters = Container::sequence(["a", "b", "c"]);
///
/// assert_eq!(fold(&concat, &letters, Some(Value::from(""))), Ok(Some(Value::from("abc"))));
/// assert_eq!(fold(&concat, &letters, Some(Value::from("!"))), Ok(Some(Value::from("abc!"))));
/// assert_eq!(fold(&concat, &Container::sequence(Vec::<String>::new()), None), Ok(None));
/// ```
pub fn fold(
    function: &Function,
    container: &Container,
    initial: Option<Value>,
) -> Result<Option<Value>, Error> {
    let mut elements: Vec<Value> = match container {
        Container::Sequence(items) => items.clone(),
        Container::Chars(text) => text.chars().map(Value::Char).collect(),
        Container::Mapping(_) => {
            return Err(Error::Unsupported {
                operation: "fold",
                subject: ContainerKind::Mapping.name(),
            });
        }
    };

    if function.arity() != 2 {
        return Err(Error::Arity {
            context: "fold",
            expected: Expected::Exactly(2),
            found: function.arity(),
        });
    }
    let &[result] = function.shape().results() else {
        return Err(Error::shape(
            "fold",
            format!("function must return exactly one value, declared {}", function.shape()),
        ));
    };

    if let Some(initial) = initial {
        if let Some(first) = elements.first()
            && first.kind() != initial.kind()
        {
            return Err(Error::mismatch("fold", elements.len(), first.kind(), initial.kind()));
        }
        elements.push(initial);
    }

    let mut elements = elements.into_iter();
    let Some(first) = elements.next() else {
        return Ok(None);
    };

    let element = first.kind();
    if let Some((position, &parameter)) = function
        .shape()
        .parameters()
        .iter()
        .enumerate()
        .find(|(_, parameter)| !parameter.accepts(element))
    {
        return Err(Error::mismatch("fold", position, parameter, element));
    }
    if !result.accepts(element) {
        return Err(Error::shape(
            "fold",
            format!("function should return a single <{element}>, declared {}", function.shape()),
        ));
    }

    elements
        .try_fold(first, |accumulator, element| {
            function.call1(vec![accumulator, element])
        })
        .map(Some)
}

/// Returns [`fold`] itself as a ternary [`Function`].
///
/// The parameters are `(function, container, initial)`; the container is
/// passed as a [`Value`] (text, sequence or mapping). [`Value::Nil`] stands
/// for "no initial value" and is also what an empty fold returns, which
/// makes the lifted fold unable to append a literal `Nil`. Being a plain
/// [`Function`], it can be curried and composed like any other.
///
/// ```rust
/// use lambdakit::traverse::fold_function;
/// use lambdakit::{Function, Value};
///
/// let add = Function::binary(|first: i64, second: i64| first + second);
/// let numbers = Value::Sequence(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
///
/// let total = fold_function().call1(vec![Value::from(add), numbers, Value::Nil]);
/// assert_eq!(total, Ok(Value::Int(6)));
/// ```
pub fn fold_function() -> Function {
    Function::new(
        Shape::new(vec![Kind::Function, Kind::Any, Kind::Any], vec![Kind::Any]),
        |arguments| {
            let [function, container, initial] = unpack("fold", arguments)?;
            let function = Function::try_from(function)?;
            let container = Container::try_from(container)?;
            let initial = (!initial.is_nil()).then_some(initial);
            let folded = fold(&function, &container, initial)?;
            Ok(vec![folded.unwrap_or_default()])
        },
    )
}
