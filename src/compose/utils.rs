//! Composition and argument flipping.
//!
//! - [`compose`]: The B combinator over shaped callables
//! - [`flip`]: The C combinator, generalized to any arity of two or more

use crate::callable::{Function, Shape};
use crate::error::{Error, Expected};

/// Composes two functions right to left.
///
/// Returns `h` such that `h(x...) == f(g(x...))`. `h` takes the parameters
/// of `g` and produces the results of `f`. Every result of `g` is passed to
/// `f` positionally, so `g` may return several values when `f` takes
/// several parameters.
///
/// # Errors
///
/// - [`Error::Arity`] if the arity of `f` differs from the number of
///   results of `g`
/// - [`Error::TypeMismatch`] naming the first position where a result of
///   `g` does not fit the matching parameter of `f`
///
/// # Examples
///
/// ```
/// use lambdakit::compose::compose;
/// use lambdakit::{Function, Value};
///
/// let increment = Function::unary(|number: i64| number + 1);
/// let double = Function::unary(|number: i64| number * 2);
///
/// let increment_after_double = compose(&increment, &double).unwrap();
/// let double_after_increment = compose(&double, &increment).unwrap();
///
/// assert_eq!(increment_after_double.apply(1), Ok(Value::Int(3)));
/// assert_eq!(double_after_increment.apply(1), Ok(Value::Int(4)));
/// ```
///
/// ## Shapes must line up
///
/// ```
/// use lambdakit::compose::compose;
/// use lambdakit::{Error, Function, Kind};
///
/// let increment = Function::unary(|number: i64| number + 1);
/// let halve = Function::unary(|number: f64| number / 2.0);
///
/// assert_eq!(
///     compose(&increment, &halve).unwrap_err(),
///     Error::TypeMismatch {
///         context: "compose",
///         position: 0,
///         expected: Kind::Int,
///         found: Kind::Float,
///     }
/// );
/// ```
pub fn compose(f: &Function, g: &Function) -> Result<Function, Error> {
    let parameters = f.shape().parameters();
    let produced = g.shape().results();

    if parameters.len() != produced.len() {
        let error = Error::Arity {
            context: "compose",
            expected: Expected::Exactly(produced.len()),
            found: parameters.len(),
        };
        tracing::debug!(%error, "rejected composition");
        return Err(error);
    }

    if let Some((position, (&expected, &found))) = parameters
        .iter()
        .zip(produced)
        .enumerate()
        .find(|(_, (parameter, result))| !parameter.accepts(**result))
    {
        let error = Error::mismatch("compose", position, expected, found);
        tracing::debug!(%error, "rejected composition");
        return Err(error);
    }

    let shape = Shape::new(g.shape().parameters().to_vec(), f.shape().results().to_vec());
    let (outer, inner) = (f.clone(), g.clone());
    Ok(Function::new(shape, move |arguments| {
        outer.call(inner.call(arguments)?)
    }))
}

/// Swaps the first two parameters of a function.
///
/// Returns `f'` such that `f'(a, b, rest...) == f(b, a, rest...)`; any
/// parameters past the second keep their position.
///
/// # Errors
///
/// Returns [`Error::Arity`] if `function` takes fewer than two arguments.
///
/// # Examples
///
/// ```
/// use lambdakit::compose::flip;
/// use lambdakit::{Function, Value};
///
/// let describe = Function::ternary(|first: i64, second: String, third: bool| {
///     format!("{first}-{second}-{third}")
/// });
/// let flipped = flip(&describe).unwrap();
///
/// let result = flipped.call1(vec![Value::from("b"), Value::Int(1), Value::Bool(true)]);
/// assert_eq!(result, Ok(Value::from("1-b-true")));
/// ```
pub fn flip(function: &Function) -> Result<Function, Error> {
    let parameters = function.shape().parameters();
    if parameters.len() < 2 {
        let error = Error::Arity {
            context: "flip",
            expected: Expected::AtLeast(2),
            found: parameters.len(),
        };
        tracing::debug!(%error, "rejected flip");
        return Err(error);
    }

    let mut swapped = parameters.to_vec();
    swapped.swap(0, 1);
    let shape = Shape::new(swapped, function.shape().results().to_vec());
    let target = function.clone();
    Ok(Function::new(shape, move |mut arguments| {
        arguments.swap(0, 1);
        target.call(arguments)
    }))
}
