//! Integration tests for `curry` and `partial`.

#![cfg(feature = "compose")]

use lambdakit::compose::{curry, partial};
use lambdakit::{Error, Expected, Function, Kind, Shape, Typed, Value};
use rstest::rstest;

fn add3() -> Function {
    Function::ternary(|first: i64, second: i64, third: i64| first + second + third)
}

fn greet() -> Function {
    Function::binary(|greeting: String, name: String| format!("{greeting}, {name}!"))
}

// =============================================================================
// curry
// =============================================================================

#[rstest]
fn test_curry_saturates_one_argument_at_a_time() {
    let curried = curry(&add3()).unwrap();
    let result = curried
        .apply(1)
        .and_then(|step| step.apply(2))
        .and_then(|step| step.apply(3));
    assert_eq!(result, Ok(Value::Int(6)));
}

#[rstest]
fn test_curry_steps_are_reusable() {
    let curried = curry(&greet()).unwrap();
    let hello = curried.apply("Hello").unwrap();

    assert_eq!(hello.apply("Alice"), Ok(Value::from("Hello, Alice!")));
    assert_eq!(hello.apply("Bob"), Ok(Value::from("Hello, Bob!")));
}

#[rstest]
fn test_curry_intermediate_steps_are_functions() {
    let curried = curry(&add3()).unwrap();
    let step = curried.apply(1).unwrap().into_function().unwrap();

    assert_eq!(step.arity(), 1);
    assert_eq!(step.shape().parameters(), &[Kind::Int]);
    assert_eq!(step.shape().results(), &[Kind::Function]);
}

#[rstest]
fn test_curry_last_step_keeps_all_results() {
    let split = Function::binary_to_pair(|quotient: i64, divisor: i64| {
        (quotient / divisor, quotient % divisor)
    });
    let curried = curry(&split).unwrap();
    let last = curried.apply(17).unwrap().into_function().unwrap();

    assert_eq!(last.call(vec![Value::Int(5)]), Ok(vec![Value::Int(3), Value::Int(2)]));
}

#[rstest]
fn test_curry_rejects_nullary() {
    let answer = Function::nullary(|| 42_i64);
    assert_eq!(
        curry(&answer).unwrap_err(),
        Error::Arity {
            context: "curry",
            expected: Expected::AtLeast(1),
            found: 0,
        }
    );
}

#[rstest]
fn test_curry_checks_each_argument() {
    let curried = curry(&add3()).unwrap();
    let result = curried.apply(1).and_then(|step| step.apply("two"));
    assert!(matches!(result, Err(Error::TypeMismatch { found: Kind::Str, .. })));
}

#[rstest]
fn test_curry_over_raw_function() {
    let join = Function::new(
        Shape::new(vec![Kind::Str; 4], vec![Kind::Str]),
        |arguments| {
            let parts = arguments
                .into_iter()
                .map(String::from_value)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(vec![Value::from(parts.join("-"))])
        },
    );

    let mut step = Value::from(curry(&join).unwrap());
    for part in ["a", "b", "c", "d"] {
        step = step.apply(part).unwrap();
    }
    assert_eq!(step, Value::from("a-b-c-d"));
}

// =============================================================================
// partial
// =============================================================================

#[rstest]
fn test_partial_binds_first_argument_only() {
    let bound = partial(&add3(), 10).unwrap();
    assert_eq!(bound.arity(), 2);
    assert_eq!(bound.call1(vec![Value::Int(1), Value::Int(2)]), Ok(Value::Int(13)));
}

#[rstest]
fn test_partial_down_to_nullary() {
    let negate = Function::unary(|number: i64| -number);
    let bound = partial(&negate, 5).unwrap();

    assert_eq!(bound.arity(), 0);
    assert_eq!(bound.call1(Vec::new()), Ok(Value::Int(-5)));
    assert!(matches!(partial(&bound, 1), Err(Error::Arity { context: "partial", .. })));
}

#[rstest]
#[case(Value::from("ten"), Kind::Str)]
#[case(Value::Float(1.0), Kind::Float)]
#[case(Value::Nil, Kind::Nil)]
fn test_partial_rejects_wrong_kind(#[case] argument: Value, #[case] found: Kind) {
    assert_eq!(
        partial(&add3(), argument).unwrap_err(),
        Error::TypeMismatch {
            context: "partial",
            position: 0,
            expected: Kind::Int,
            found,
        }
    );
}
