//! Callable handles with an explicit, fixed shape.
//!
//! A [`Function`] wraps any closure over [`Value`]s together with the
//! [`Shape`] it was declared with: the [`Kind`] of every parameter and of
//! every result. The shape is fixed at construction and is what every other
//! part of the crate inspects before calling: currying checks the arity,
//! composition lines up results against parameters, traversal checks the
//! visitor against the container kind.
//!
//! Each [`Function::call`] is validated against the shape on both sides:
//!
//! - the argument count must equal the arity ([`Error::Arity`])
//! - every argument must fit its parameter ([`Error::TypeMismatch`])
//! - the body must return as many results as declared ([`Error::Shape`])
//! - every result must fit its declared kind ([`Error::TypeMismatch`])
//!
//! # Examples
//!
//! ```rust
//! use lambdakit::{Function, Kind, Value};
//!
//! let add = Function::binary(|first: i64, second: i64| first + second);
//! assert_eq!(add.arity(), 2);
//! assert_eq!(add.shape().parameters(), &[Kind::Int, Kind::Int]);
//!
//! let sum = add.call1(vec![Value::Int(1), Value::Int(2)]);
//! assert_eq!(sum, Ok(Value::Int(3)));
//!
//! // Arguments are checked against the declared kinds
//! assert!(add.call1(vec![Value::Int(1), Value::from("2")]).is_err());
//! ```

mod typed;

pub use typed::Typed;

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Expected};
use crate::value::{Kind, Value};

/// The erased body of a [`Function`].
///
/// Bodies receive ownership of their argument vector and return every
/// result in order.
pub type Body = dyn Fn(Vec<Value>) -> Result<Vec<Value>, Error> + Send + Sync;

/// The declared parameter and result kinds of a callable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    parameters: Vec<Kind>,
    results: Vec<Kind>,
}

impl Shape {
    /// Creates a shape from parameter and result kinds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdakit::{Kind, Shape};
    ///
    /// let shape = Shape::new(vec![Kind::Str, Kind::Int], vec![Kind::Bool]);
    /// assert_eq!(shape.arity(), 2);
    /// assert_eq!(format!("{shape}"), "(str, int) -> bool");
    /// ```
    #[must_use]
    pub const fn new(parameters: Vec<Kind>, results: Vec<Kind>) -> Self {
        Self {
            parameters,
            results,
        }
    }

    /// Returns the number of parameters.
    #[inline]
    #[must_use]
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// Returns the parameter kinds in order.
    #[must_use]
    pub fn parameters(&self) -> &[Kind] {
        &self.parameters
    }

    /// Returns the result kinds in order.
    #[must_use]
    pub fn results(&self) -> &[Kind] {
        &self.results
    }

    pub(crate) fn check_arguments(
        &self,
        context: &'static str,
        arguments: &[Value],
    ) -> Result<(), Error> {
        if arguments.len() != self.arity() {
            return Err(Error::Arity {
                context,
                expected: Expected::Exactly(self.arity()),
                found: arguments.len(),
            });
        }
        check_kinds(context, &self.parameters, arguments)
    }

    pub(crate) fn check_results(&self, context: &'static str, results: &[Value]) -> Result<(), Error> {
        if results.len() != self.results.len() {
            return Err(Error::shape(
                context,
                format!(
                    "callable returned {} value(s), declared {}",
                    results.len(),
                    self.results.len()
                ),
            ));
        }
        check_kinds(context, &self.results, results)
    }
}

fn check_kinds(context: &'static str, kinds: &[Kind], values: &[Value]) -> Result<(), Error> {
    kinds
        .iter()
        .zip(values)
        .enumerate()
        .find(|(_, (kind, value))| !kind.accepts(value.kind()))
        .map_or(Ok(()), |(position, (kind, value))| {
            Err(Error::mismatch(context, position, *kind, value.kind()))
        })
}

impl fmt::Display for Shape {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_kinds(formatter, &self.parameters, true)?;
        formatter.write_str(" -> ")?;
        write_kinds(formatter, &self.results, self.results.len() != 1)
    }
}

fn write_kinds(formatter: &mut fmt::Formatter<'_>, kinds: &[Kind], parenthesize: bool) -> fmt::Result {
    if parenthesize {
        formatter.write_str("(")?;
    }
    for (index, kind) in kinds.iter().enumerate() {
        if index > 0 {
            formatter.write_str(", ")?;
        }
        write!(formatter, "{kind}")?;
    }
    if parenthesize {
        formatter.write_str(")")?;
    }
    Ok(())
}

/// An immutable handle to a callable with a fixed [`Shape`].
///
/// Cloning a `Function` is cheap and yields a handle to the same closure;
/// [`Function::ptr_eq`] tells handles apart.
#[derive(Clone)]
pub struct Function {
    shape: Arc<Shape>,
    body: Arc<Body>,
}

static_assertions::assert_impl_all!(Function: Send, Sync, Clone);

impl Function {
    /// Creates a callable from a shape and an erased body.
    ///
    /// The body is only ever invoked with arguments that fit `shape`, and
    /// whatever it returns is checked against the declared results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdakit::{Function, Kind, Shape, Value};
    ///
    /// let split = Function::new(
    ///     Shape::new(vec![Kind::Int], vec![Kind::Int, Kind::Int]),
    ///     |arguments| {
    ///         let number = match arguments.first() {
    ///             Some(Value::Int(number)) => *number,
    ///             _ => 0,
    ///         };
    ///         Ok(vec![Value::Int(number / 10), Value::Int(number % 10)])
    ///     },
    /// );
    /// assert_eq!(split.call(vec![Value::Int(42)]), Ok(vec![Value::Int(4), Value::Int(2)]));
    /// ```
    pub fn new<F>(shape: Shape, body: F) -> Self
    where
        F: Fn(Vec<Value>) -> Result<Vec<Value>, Error> + Send + Sync + 'static,
    {
        Self {
            shape: Arc::new(shape),
            body: Arc::new(body),
        }
    }

    /// Returns the number of parameters.
    #[inline]
    #[must_use]
    pub fn arity(&self) -> usize {
        self.shape.arity()
    }

    /// Returns the declared shape.
    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Calls the function and returns every result.
    ///
    /// # Errors
    ///
    /// - [`Error::Arity`] if the argument count differs from the arity
    /// - [`Error::TypeMismatch`] if an argument or result has the wrong kind
    /// - [`Error::Shape`] if the body returns the wrong number of results
    /// - any error the body itself reports
    pub fn call(&self, arguments: Vec<Value>) -> Result<Vec<Value>, Error> {
        self.shape.check_arguments("call", &arguments)?;
        let results = (self.body)(arguments)?;
        self.shape.check_results("call", &results)?;
        Ok(results)
    }

    /// Calls the function and returns its single result.
    ///
    /// # Errors
    ///
    /// Everything [`Function::call`] reports, plus [`Error::Shape`] if the
    /// function does not produce exactly one result.
    pub fn call1(&self, arguments: Vec<Value>) -> Result<Value, Error> {
        let mut results = self.call(arguments)?;
        let count = results.len();
        match (results.pop(), count) {
            (Some(value), 1) => Ok(value),
            _ => Err(Error::shape(
                "call",
                format!("expected a single result, callable returns {count}"),
            )),
        }
    }

    /// Applies the function to one argument and returns its single result.
    ///
    /// # Errors
    ///
    /// Everything [`Function::call1`] reports.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdakit::{Function, Value};
    ///
    /// let double = Function::unary(|number: i64| number * 2);
    /// assert_eq!(double.apply(21), Ok(Value::Int(42)));
    /// ```
    pub fn apply(&self, argument: impl Into<Value>) -> Result<Value, Error> {
        self.call1(vec![argument.into()])
    }

    /// Returns whether both handles refer to the same closure.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Function")
            .field("shape", &format_args!("{}", self.shape))
            .finish_non_exhaustive()
    }
}

impl TryFrom<Value> for Function {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Error> {
        match value {
            Value::Function(function) => Ok(function),
            other => Err(Error::shape(
                "callable",
                format!("value of kind <{}> is not callable", other.kind()),
            )),
        }
    }
}

/// Splits an argument vector into a fixed-size array.
pub(crate) fn unpack<const N: usize>(
    context: &'static str,
    arguments: Vec<Value>,
) -> Result<[Value; N], Error> {
    let found = arguments.len();
    <[Value; N]>::try_from(arguments).map_err(|_| Error::Arity {
        context,
        expected: Expected::Exactly(N),
        found,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn add() -> Function {
        Function::binary(|first: i64, second: i64| first + second)
    }

    #[rstest]
    fn call_checks_argument_count() {
        let result = add().call(vec![Value::Int(1)]);
        assert_eq!(
            result,
            Err(Error::Arity {
                context: "call",
                expected: Expected::Exactly(2),
                found: 1,
            })
        );
    }

    #[rstest]
    fn call_names_first_mismatched_argument() {
        let result = add().call(vec![Value::Int(1), Value::Float(2.0)]);
        assert_eq!(result, Err(Error::mismatch("call", 1, Kind::Int, Kind::Float)));
    }

    #[rstest]
    fn call_checks_declared_result_count() {
        let liar = Function::new(Shape::new(vec![], vec![Kind::Int]), |_| Ok(vec![]));
        assert!(matches!(liar.call(vec![]), Err(Error::Shape { .. })));
    }

    #[rstest]
    fn call_checks_declared_result_kind() {
        let liar = Function::new(Shape::new(vec![], vec![Kind::Int]), |_| {
            Ok(vec![Value::from("not a number")])
        });
        assert_eq!(
            liar.call(vec![]),
            Err(Error::mismatch("call", 0, Kind::Int, Kind::Str))
        );
    }

    #[rstest]
    fn call1_rejects_multiple_results() {
        let pair = Function::new(Shape::new(vec![], vec![Kind::Int, Kind::Int]), |_| {
            Ok(vec![Value::Int(1), Value::Int(2)])
        });
        assert!(matches!(pair.call1(vec![]), Err(Error::Shape { .. })));
    }

    #[rstest]
    fn try_from_non_function_is_shape_error() {
        let result = Function::try_from(Value::Int(3));
        assert!(matches!(result, Err(Error::Shape { context: "callable", .. })));
    }

    #[rstest]
    #[case(Shape::new(vec![Kind::Int, Kind::Int], vec![Kind::Int]), "(int, int) -> int")]
    #[case(Shape::new(vec![], vec![Kind::Nil]), "() -> nil")]
    #[case(Shape::new(vec![Kind::Str, Kind::Int], vec![Kind::Str, Kind::Int]), "(str, int) -> (str, int)")]
    #[case(Shape::new(vec![Kind::Any], vec![]), "(any) -> ()")]
    fn shape_display(#[case] shape: Shape, #[case] expected: &str) {
        assert_eq!(format!("{shape}"), expected);
    }

    #[rstest]
    fn clones_share_identity() {
        let original = add();
        let copy = original.clone();
        assert!(original.ptr_eq(&copy));
        assert!(!original.ptr_eq(&add()));
    }

    #[rstest]
    fn unpack_exact() {
        let [first, second] = unpack::<2>("test", vec![Value::Int(1), Value::Int(2)]).unwrap();
        assert_eq!(first, Value::Int(1));
        assert_eq!(second, Value::Int(2));
        assert!(unpack::<2>("test", vec![Value::Nil]).is_err());
    }
}
