//! Currying and partial application.
//!
//! [`partial`] is the primitive: it binds the first argument of a function
//! and returns a function of the remaining parameters. [`curry`] builds a
//! chain of unary steps out of it, re-currying the partially applied
//! function at every step until a single parameter is left.

use crate::callable::{Function, Shape, unpack};
use crate::error::{Error, Expected};
use crate::value::{Kind, Value};

/// Converts a function of arity `n >= 1` into a curried chain.
///
/// Applying one argument to the chain yields either the next step (a chain
/// of arity `n - 1` with that argument captured) or, once every argument is
/// supplied, the result of the original function. Every step is an
/// independent handle and may be applied any number of times.
///
/// # Errors
///
/// Returns [`Error::Arity`] if `function` takes no arguments.
///
/// # Examples
///
/// ```
/// use lambdakit::compose::curry;
/// use lambdakit::{Function, Value};
///
/// fn volume(width: i64, height: i64, depth: i64) -> i64 {
///     width * height * depth
/// }
///
/// let curried = curry(&Function::ternary(volume)).unwrap();
/// let with_width = curried.apply(2).unwrap();
/// let with_width_height = with_width.apply(3).unwrap();
///
/// assert_eq!(with_width_height.apply(4), Ok(Value::Int(24)));
/// // Partial applications are reusable
/// assert_eq!(with_width_height.apply(5), Ok(Value::Int(30)));
/// ```
pub fn curry(function: &Function) -> Result<Function, Error> {
    let Some(&first) = function.shape().parameters().first() else {
        let error = Error::Arity {
            context: "curry",
            expected: Expected::AtLeast(1),
            found: 0,
        };
        tracing::debug!(%error, "rejected curry");
        return Err(error);
    };
    Ok(chain(function.clone(), first))
}

fn chain(function: Function, first: Kind) -> Function {
    let results = if function.arity() == 1 {
        function.shape().results().to_vec()
    } else {
        vec![Kind::Function]
    };

    Function::new(Shape::new(vec![first], results), move |arguments| {
        let [argument] = unpack("curry", arguments)?;
        if function.arity() == 1 {
            function.call(vec![argument])
        } else {
            let rest = curry(&partial(&function, argument)?)?;
            Ok(vec![Value::Function(rest)])
        }
    })
}

/// Binds the first argument of `function`.
///
/// The returned function takes the remaining parameters in their original
/// order and produces the original results. Unlike [`curry`], the remainder
/// is not curried further.
///
/// # Errors
///
/// - [`Error::Arity`] if `function` takes no arguments
/// - [`Error::TypeMismatch`] if `argument` does not fit the first parameter
///
/// # Examples
///
/// ```
/// use lambdakit::compose::partial;
/// use lambdakit::{Function, Value};
///
/// let clamp = Function::ternary(|low: i64, high: i64, number: i64| number.clamp(low, high));
/// let at_least_zero = partial(&clamp, 0).unwrap();
///
/// assert_eq!(at_least_zero.arity(), 2);
/// assert_eq!(at_least_zero.call1(vec![Value::Int(10), Value::Int(-4)]), Ok(Value::Int(0)));
/// ```
pub fn partial(function: &Function, argument: impl Into<Value>) -> Result<Function, Error> {
    let argument = argument.into();
    let Some((&first, rest)) = function.shape().parameters().split_first() else {
        return Err(Error::Arity {
            context: "partial",
            expected: Expected::AtLeast(1),
            found: 0,
        });
    };
    if !first.accepts(argument.kind()) {
        return Err(Error::mismatch("partial", 0, first, argument.kind()));
    }

    let shape = Shape::new(rest.to_vec(), function.shape().results().to_vec());
    let target = function.clone();
    Ok(Function::new(shape, move |arguments| {
        let mut bound = Vec::with_capacity(arguments.len() + 1);
        bound.push(argument.clone());
        bound.extend(arguments);
        target.call(bound)
    }))
}
