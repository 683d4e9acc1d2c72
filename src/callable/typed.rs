//! Lifting typed Rust closures into [`Function`] handles.
//!
//! The [`Typed`] trait ties a Rust type to the [`Kind`] it occupies in a
//! [`Shape`] and converts between the two representations. The typed
//! constructors on [`Function`] derive the whole shape from the closure's
//! signature, so a `Function::binary(|a: i64, b: i64| a + b)` is known to be
//! `(int, int) -> int` without any runtime inspection of the closure.

use super::{Function, Shape, unpack};
use crate::error::Error;
use crate::value::{Kind, Value};

/// A Rust type with a fixed [`Kind`] and a conversion to and from [`Value`].
///
/// [`Value`] itself is `Typed` with [`Kind::Any`], which is how closures opt
/// out of kind checking for a position.
pub trait Typed: Sized + 'static {
    /// The kind this type occupies in a shape.
    const KIND: Kind;

    /// Converts into a dynamic value.
    fn into_value(self) -> Value;

    /// Converts from a dynamic value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value has a different kind.
    fn from_value(value: Value) -> Result<Self, Error>;
}

macro_rules! impl_typed {
    ($($target:ty => $kind:ident),* $(,)?) => {
        $(
            impl Typed for $target {
                const KIND: Kind = Kind::$kind;

                fn into_value(self) -> Value {
                    Value::$kind(self)
                }

                fn from_value(value: Value) -> Result<Self, Error> {
                    match value {
                        Value::$kind(inner) => Ok(inner),
                        other => Err(Error::mismatch("convert", 0, Kind::$kind, other.kind())),
                    }
                }
            }
        )*
    };
}

impl_typed!(
    bool => Bool,
    i64 => Int,
    f64 => Float,
    char => Char,
    String => Str,
    Function => Function,
);

impl Typed for i32 {
    const KIND: Kind = Kind::Int;

    fn into_value(self) -> Value {
        Value::Int(i64::from(self))
    }

    fn from_value(value: Value) -> Result<Self, Error> {
        let wide = i64::from_value(value)?;
        Self::try_from(wide)
            .map_err(|_| Error::shape("convert", format!("integer {wide} does not fit in i32")))
    }
}

impl Typed for () {
    const KIND: Kind = Kind::Nil;

    fn into_value(self) -> Value {
        Value::Nil
    }

    fn from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::Nil => Ok(()),
            other => Err(Error::mismatch("convert", 0, Kind::Nil, other.kind())),
        }
    }
}

impl Typed for Value {
    const KIND: Kind = Kind::Any;

    fn into_value(self) -> Value {
        self
    }

    fn from_value(value: Value) -> Result<Self, Error> {
        Ok(value)
    }
}

impl Function {
    /// Lifts a closure taking no arguments.
    pub fn nullary<R, F>(function: F) -> Self
    where
        R: Typed,
        F: Fn() -> R + Send + Sync + 'static,
    {
        Self::new(Shape::new(Vec::new(), vec![R::KIND]), move |_| {
            Ok(vec![function().into_value()])
        })
    }

    /// Lifts a one-argument closure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdakit::{Function, Kind};
    ///
    /// let length = Function::unary(|text: String| text.len() as i64);
    /// assert_eq!(length.shape().parameters(), &[Kind::Str]);
    /// assert_eq!(length.shape().results(), &[Kind::Int]);
    /// ```
    pub fn unary<A, R, F>(function: F) -> Self
    where
        A: Typed,
        R: Typed,
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        Self::new(Shape::new(vec![A::KIND], vec![R::KIND]), move |arguments| {
            let [first] = unpack("call", arguments)?;
            Ok(vec![function(A::from_value(first)?).into_value()])
        })
    }

    /// Lifts a two-argument closure.
    pub fn binary<A, B, R, F>(function: F) -> Self
    where
        A: Typed,
        B: Typed,
        R: Typed,
        F: Fn(A, B) -> R + Send + Sync + 'static,
    {
        Self::new(
            Shape::new(vec![A::KIND, B::KIND], vec![R::KIND]),
            move |arguments| {
                let [first, second] = unpack("call", arguments)?;
                Ok(vec![
                    function(A::from_value(first)?, B::from_value(second)?).into_value(),
                ])
            },
        )
    }

    /// Lifts a three-argument closure.
    pub fn ternary<A, B, C, R, F>(function: F) -> Self
    where
        A: Typed,
        B: Typed,
        C: Typed,
        R: Typed,
        F: Fn(A, B, C) -> R + Send + Sync + 'static,
    {
        Self::new(
            Shape::new(vec![A::KIND, B::KIND, C::KIND], vec![R::KIND]),
            move |arguments| {
                let [first, second, third] = unpack("call", arguments)?;
                Ok(vec![
                    function(
                        A::from_value(first)?,
                        B::from_value(second)?,
                        C::from_value(third)?,
                    )
                    .into_value(),
                ])
            },
        )
    }

    /// Lifts a two-argument closure returning two results.
    ///
    /// This is the shape of a mapping visitor for
    /// [`map`](crate::traverse::map): `(key, value) -> (key, value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdakit::{Function, Kind, Value};
    ///
    /// let swap = Function::binary_to_pair(|key: String, value: i64| (value, key));
    /// assert_eq!(swap.shape().results(), &[Kind::Int, Kind::Str]);
    /// assert_eq!(
    ///     swap.call(vec![Value::from("a"), Value::Int(1)]),
    ///     Ok(vec![Value::Int(1), Value::from("a")])
    /// );
    /// ```
    pub fn binary_to_pair<A, B, R1, R2, F>(function: F) -> Self
    where
        A: Typed,
        B: Typed,
        R1: Typed,
        R2: Typed,
        F: Fn(A, B) -> (R1, R2) + Send + Sync + 'static,
    {
        Self::new(
            Shape::new(vec![A::KIND, B::KIND], vec![R1::KIND, R2::KIND]),
            move |arguments| {
                let [first, second] = unpack("call", arguments)?;
                let (left, right) = function(A::from_value(first)?, B::from_value(second)?);
                Ok(vec![left.into_value(), right.into_value()])
            },
        )
    }
}
