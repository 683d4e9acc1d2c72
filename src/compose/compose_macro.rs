//! The `compose!` macro for variadic function composition.
//!
//! This module provides the [`compose!`] macro which composes any number of
//! [`Function`](crate::Function) handles from right to left.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)` builds the function `x -> f(g(h(x)))`. Every adjacent
/// pair is checked with [`compose`](crate::compose::compose), so the whole
/// expression evaluates to `Result<Function, Error>` and fails on the first
/// pair whose shapes do not line up.
///
/// # Syntax
///
/// - `compose!(f)` - Returns a handle to `f` unchanged
/// - `compose!(f, g)` - Returns `x -> f(g(x))`
/// - `compose!(f, g, h, ...)` - Composes any number of functions
///
/// Arguments may be `Function` values or references to them.
///
/// # Examples
///
/// ```
/// use lambdakit::{compose, Function, Value};
///
/// let add_one = Function::unary(|number: i64| number + 1);
/// let double = Function::unary(|number: i64| number * 2);
/// let square = Function::unary(|number: i64| number * number);
///
/// // add_one(double(square(3))) = add_one(double(9)) = add_one(18) = 19
/// let composed = compose!(add_one, double, square).unwrap();
/// assert_eq!(composed.apply(3), Ok(Value::Int(19)));
/// ```
///
/// ## Failing on the first mismatched pair
///
/// ```
/// use lambdakit::{compose, Error, Function};
///
/// let length = Function::unary(|text: String| text.len() as i64);
/// let negate = Function::unary(|number: i64| -number);
///
/// let composed = compose!(negate, length, negate);
/// assert!(matches!(composed, Err(Error::TypeMismatch { .. })));
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        ::core::result::Result::<$crate::Function, $crate::Error>::Ok(
            $crate::Function::clone(&$function),
        )
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose!($($rest),+)
            .and_then(|inner| $crate::compose::compose(&$first, &inner))
    };
}

#[cfg(test)]
mod tests {
    use crate::{Error, Function, Value};
    use rstest::rstest;

    #[rstest]
    fn single_function_is_returned_unchanged() {
        let double = Function::unary(|number: i64| number * 2);
        let composed = compose!(double).unwrap();
        assert!(composed.ptr_eq(&double));
    }

    #[rstest]
    fn accepts_references() {
        let double = Function::unary(|number: i64| number * 2);
        let negate = Function::unary(|number: i64| -number);
        let composed = compose!(&negate, &double).unwrap();
        assert_eq!(composed.apply(4), Ok(Value::Int(-8)));
    }

    #[rstest]
    fn associativity() {
        let f = Function::unary(|number: i64| number + 1);
        let g = Function::unary(|number: i64| number * 2);
        let h = Function::unary(|number: i64| number - 3);

        let left = compose!(f, compose!(g, h).unwrap()).unwrap();
        let right = compose!(compose!(f, g).unwrap(), h).unwrap();

        for input in -5..5 {
            assert_eq!(left.apply(input), right.apply(input));
        }
    }

    #[rstest]
    fn mismatch_stops_composition() {
        let to_text = Function::unary(|number: i64| number.to_string());
        let negate = Function::unary(|number: i64| -number);
        assert!(matches!(
            compose!(negate, to_text),
            Err(Error::TypeMismatch { context: "compose", .. })
        ));
    }
}
