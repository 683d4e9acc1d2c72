#![cfg(feature = "combinator")]
//! Law tests for the combinator basis.
//!
//! The reduction laws of `S`, `K`, `I`, `B`, `C` and `M` are checked on
//! concrete terms and on generated inputs.

use lambdakit::combinator::{Basis, apply_all, apply_left, basis};
use lambdakit::{Error, Function, Kind, Shape, Value, apply};
use proptest::prelude::*;
use rstest::rstest;

fn increment() -> Function {
    Function::unary(|number: i64| number.wrapping_add(1))
}

fn double() -> Function {
    Function::unary(|number: i64| number.wrapping_mul(2))
}

fn subtract() -> Function {
    Function::binary(|first: i64, second: i64| first.wrapping_sub(second))
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Nil),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<char>().prop_map(Value::Char),
        ".{0,8}".prop_map(Value::from),
    ]
}

// =============================================================================
// Concrete reductions
// =============================================================================

#[rstest]
fn test_initialize_before_use() {
    Basis::initialize().unwrap();
    let first = basis().unwrap();
    let second = basis().unwrap();
    assert!(std::ptr::eq(first, second));
    assert!(first.b().ptr_eq(second.b()));
}

#[rstest]
fn test_basis_errors_propagate_with_question_mark() {
    fn flip_subtract(first: i64, second: i64) -> Result<Value, Error> {
        apply!(basis()?.c(), subtract(), first, second)
    }

    assert_eq!(flip_subtract(10, 3), Ok(Value::Int(-7)));
}

#[rstest]
fn test_identity_of_nothing() {
    assert_eq!(basis().unwrap().i().apply(Value::Nil), Ok(Value::Nil));
}

#[rstest]
fn test_identity_of_function_is_same_handle() {
    let basis = basis().unwrap();
    let function = increment();
    let result = basis.i().apply(&function).unwrap().into_function().unwrap();
    assert!(result.ptr_eq(&function));
}

#[rstest]
fn test_b_is_composition() {
    let basis = basis().unwrap();
    assert_eq!(apply!(basis.b(), increment(), double(), 5), Ok(Value::Int(11)));
    assert_eq!(apply!(basis.b(), double(), increment(), 5), Ok(Value::Int(12)));
}

#[rstest]
fn test_c_swaps_arguments() {
    let basis = basis().unwrap();
    assert_eq!(apply!(basis.c(), subtract(), 10, 3), Ok(Value::Int(-7)));
}

#[rstest]
fn test_m_of_identity_is_identity() {
    let basis = basis().unwrap();
    let result = basis.m().apply(basis.i()).unwrap().into_function().unwrap();
    assert!(result.ptr_eq(basis.i()));
}

#[rstest]
fn test_m_self_application_of_plain_function() {
    let basis = basis().unwrap();
    let arity = Function::unary(|function: Function| {
        i64::try_from(function.arity()).unwrap_or(i64::MAX)
    });
    assert_eq!(basis.m().apply(&arity), Ok(Value::Int(1)));
}

#[rstest]
fn test_combinators_accept_partial_application() {
    let basis = basis().unwrap();
    let compose_with_increment = basis.b().call1(vec![Value::from(increment()), Value::Nil]);
    // B is saturating: a missing argument is an arity error
    assert!(matches!(compose_with_increment, Err(Error::Arity { .. })));

    let step = apply_left(&Value::from(basis.b()), Value::from(increment())).unwrap();
    let step = apply_left(&step, Value::from(double())).unwrap();
    assert_eq!(apply_left(&step, Value::Int(1)), Ok(Value::Int(3)));
}

#[rstest]
fn test_ill_typed_expression_is_an_error() {
    let basis = basis().unwrap();
    // I applied to an integer reduces to that integer, which cannot be applied
    let result = apply!(basis.i(), 1, 2);
    assert!(matches!(result, Err(Error::Shape { context: "apply", .. })));
}

#[rstest]
fn test_application_needs_small_arity() {
    let four = Function::new(Shape::new(vec![Kind::Any; 4], vec![Kind::Any]), |_| {
        Ok(vec![Value::Nil])
    });
    assert_eq!(
        apply_all(Value::from(four), vec![Value::Nil]),
        Err(Error::InvalidArgs { arity: 4 })
    );
}

// =============================================================================
// Laws over generated values
// =============================================================================

proptest! {
    /// Identity Law: I x == x
    #[test]
    fn prop_identity_law(value in scalar()) {
        let basis = basis().unwrap();
        prop_assert_eq!(basis.i().apply(value.clone()), Ok(value));
    }

    /// Constant Law: K x y == x
    #[test]
    fn prop_constant_law(kept in scalar(), dropped in scalar()) {
        let basis = basis().unwrap();
        prop_assert_eq!(apply!(basis.k(), kept.clone(), dropped), Ok(kept));
    }

    /// S K K behaves as I
    #[test]
    fn prop_skk_is_identity(value in scalar()) {
        let basis = basis().unwrap();
        prop_assert_eq!(apply!(basis.s(), basis.k(), basis.k(), value.clone()), Ok(value));
    }

    /// Composition Law: B f g x == f (g x)
    #[test]
    fn prop_composition_law(number in any::<i64>()) {
        let basis = basis().unwrap();
        let expected = double().apply(number).and_then(|inner| increment().apply(inner));
        prop_assert_eq!(apply!(basis.b(), increment(), double(), number), expected);
    }

    /// Flip Law: C f x y == f y x
    #[test]
    fn prop_flip_law(first in any::<i64>(), second in any::<i64>()) {
        let basis = basis().unwrap();
        let expected = subtract().call1(vec![Value::Int(second), Value::Int(first)]);
        prop_assert_eq!(apply!(basis.c(), subtract(), first, second), expected);
    }

    /// Substitution Law: S f g x == f x (g x)
    #[test]
    fn prop_substitution_law(number in any::<i64>()) {
        let basis = basis().unwrap();
        let expected = double()
            .apply(number)
            .and_then(|doubled| subtract().call1(vec![Value::Int(number), doubled]));
        prop_assert_eq!(apply!(basis.s(), subtract(), double(), number), expected);
    }
}
