//! The application engine: apply one argument, reduce or re-curry.

use crate::callable::{Function, Shape};
use crate::compose::partial;
use crate::error::Error;
use crate::value::{Kind, Value};

/// Applies `term` to a single argument.
///
/// - A term of arity 1 is fully reduced: the call's direct result is
///   returned.
/// - A term of arity 2 or 3 captures the argument and the partially applied
///   function is returned, not reduced further.
///
/// # Errors
///
/// - [`Error::Shape`] if `term` is not a function
/// - [`Error::InvalidArgs`] if `term` has an arity other than 1, 2 or 3
/// - any error raised while reducing
///
/// # Examples
///
/// ```rust
/// use lambdakit::combinator::apply_left;
/// use lambdakit::{Function, Value};
///
/// let add = Value::from(Function::binary(|first: i64, second: i64| first + second));
///
/// let add_two = apply_left(&add, Value::Int(2)).unwrap();
/// assert_eq!(apply_left(&add_two, Value::Int(1)), Ok(Value::Int(3)));
/// ```
pub fn apply_left(term: &Value, argument: Value) -> Result<Value, Error> {
    let Value::Function(function) = term else {
        return Err(Error::shape(
            "apply",
            format!("value of kind <{}> is not callable", term.kind()),
        ));
    };

    tracing::trace!(arity = function.arity(), argument = %argument, "applying term");
    match function.arity() {
        1 => function.call1(vec![argument]),
        2 | 3 => partial(function, argument).map(Value::Function),
        arity => Err(Error::InvalidArgs { arity }),
    }
}

/// Applies `term` to every argument in turn, left to right.
///
/// The running result becomes the term for the next argument. The first
/// failure is returned as is and no further argument is applied.
///
/// # Errors
///
/// The first error reported by [`apply_left`].
pub fn apply_all<I>(term: Value, arguments: I) -> Result<Value, Error>
where
    I: IntoIterator<Item = Value>,
{
    arguments
        .into_iter()
        .try_fold(term, |running, argument| apply_left(&running, argument))
}

/// Wraps a reduced term as a function of `arity` [`Kind::Any`] parameters
/// that applies all of its arguments to the term at once.
pub(super) fn saturating(arity: usize, term: Value) -> Function {
    Function::new(
        Shape::new(vec![Kind::Any; arity], vec![Kind::Any]),
        move |arguments| apply_all(term.clone(), arguments).map(|reduced| vec![reduced]),
    )
}

/// Applies a term to any number of arguments with [`apply_all`].
///
/// Every operand is converted with [`Value::from`], so functions, function
/// references and plain values can be mixed freely. Evaluates to
/// `Result<Value, Error>`.
///
/// # Examples
///
/// ```rust
/// use lambdakit::combinator::basis;
/// use lambdakit::{apply, Function, Value};
///
/// let basis = basis().unwrap();
/// let increment = Function::unary(|number: i64| number + 1);
/// let double = Function::unary(|number: i64| number * 2);
///
/// // B f g x = f(g(x))
/// let result = apply!(basis.b(), &increment, &double, 5);
/// assert_eq!(result, Ok(Value::Int(11)));
/// ```
#[macro_export]
macro_rules! apply {
    ($term:expr $(, $argument:expr)* $(,)?) => {
        $crate::combinator::apply_all(
            $crate::Value::from($term),
            [$($crate::Value::from($argument)),*],
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn of_arity(arity: usize) -> Value {
        Value::from(Function::new(
            Shape::new(vec![Kind::Any; arity], vec![Kind::Any]),
            |arguments| Ok(vec![Value::Int(i64::try_from(arguments.len()).unwrap_or_default())]),
        ))
    }

    #[rstest]
    fn arity_one_reduces() {
        assert_eq!(apply_left(&of_arity(1), Value::Nil), Ok(Value::Int(1)));
    }

    #[rstest]
    #[case(2)]
    #[case(3)]
    fn higher_arity_recurries(#[case] arity: usize) {
        let applied = apply_left(&of_arity(arity), Value::Nil).unwrap();
        let Value::Function(function) = applied else {
            panic!("expected a partially applied function");
        };
        assert_eq!(function.arity(), arity - 1);
    }

    #[rstest]
    #[case(0)]
    #[case(4)]
    fn other_arities_are_invalid(#[case] arity: usize) {
        assert_eq!(
            apply_left(&of_arity(arity), Value::Nil),
            Err(Error::InvalidArgs { arity })
        );
    }

    #[rstest]
    fn applying_a_non_function_is_shape_error() {
        assert!(matches!(
            apply_left(&Value::Int(1), Value::Nil),
            Err(Error::Shape { context: "apply", .. })
        ));
    }

    #[rstest]
    fn apply_all_saturates_step_by_step() {
        let total = apply_all(of_arity(3), [Value::Nil, Value::Nil, Value::Nil]);
        assert_eq!(total, Ok(Value::Int(3)));
    }

    #[rstest]
    fn apply_all_propagates_first_error() {
        // after reduction the running term is an integer
        let result = apply_all(of_arity(1), [Value::Nil, Value::Nil]);
        assert!(matches!(result, Err(Error::Shape { .. })));
    }

    #[rstest]
    fn apply_all_without_arguments_returns_term() {
        let term = of_arity(2);
        assert_eq!(apply_all(term.clone(), Vec::new()), Ok(term));
    }

    #[rstest]
    fn saturating_applies_everything() {
        let wrapped = saturating(3, of_arity(3));
        assert_eq!(wrapped.arity(), 3);
        assert_eq!(
            wrapped.call1(vec![Value::Nil, Value::Nil, Value::Nil]),
            Ok(Value::Int(3))
        );
    }
}
