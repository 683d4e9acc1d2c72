//! Dynamic values consumed and produced by [`Function`] handles.
//!
//! This module provides:
//!
//! - [`Kind`]: the shape descriptor of a single parameter or result position
//! - [`Value`]: the tagged union every callable operates on
//! - [`Key`]: the hashable subset of [`Value`] used as mapping keys
//!
//! Typed Rust closures never see a [`Value`] directly; the typed constructors
//! on [`Function`] convert at the boundary through the
//! [`Typed`](crate::callable::Typed) trait.
//!
//! # Examples
//!
//! ```rust
//! use lambdakit::{Kind, Value};
//!
//! let value = Value::from("abc");
//! assert_eq!(value.kind(), Kind::Str);
//! assert!(Kind::Any.accepts(value.kind()));
//! assert!(!Kind::Int.accepts(value.kind()));
//! ```

use std::collections::HashMap;
use std::fmt;

use crate::callable::Function;
use crate::error::Error;

/// The shape of one parameter or result position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    /// Accepts a value of any kind.
    Any,
    /// The explicit "no value".
    Nil,
    /// A boolean.
    Bool,
    /// A signed integer.
    Int,
    /// A floating point number.
    Float,
    /// A single character.
    Char,
    /// Text.
    Str,
    /// A callable.
    Function,
    /// An ordered sequence of values.
    Sequence,
    /// A key-value mapping.
    Mapping,
}

impl Kind {
    /// Returns whether a position of this kind admits a value of `other`.
    ///
    /// [`Kind::Any`] admits everything; every other kind admits only itself.
    #[inline]
    #[must_use]
    pub fn accepts(self, other: Self) -> bool {
        self == Self::Any || self == other
    }

    /// Returns the lowercase name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Nil => "nil",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Char => "char",
            Self::Str => "str",
            Self::Function => "function",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// A mapping key: the hashable subset of [`Value`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    /// A boolean key.
    Bool(bool),
    /// An integer key.
    Int(i64),
    /// A character key.
    Char(char),
    /// A text key.
    Str(String),
}

impl Key {
    /// Returns the kind of the key.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::Int,
            Self::Char(_) => Kind::Char,
            Self::Str(_) => Kind::Str,
        }
    }

    /// Returns whether a value declared as `kind` can be a key.
    ///
    /// [`Kind::Any`] is admitted since the actual value is only known at
    /// call time.
    #[must_use]
    pub const fn admits(kind: Kind) -> bool {
        matches!(
            kind,
            Kind::Any | Kind::Bool | Kind::Int | Kind::Char | Kind::Str
        )
    }
}

impl fmt::Display for Key {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Char(value) => write!(formatter, "{value:?}"),
            Self::Str(value) => write!(formatter, "{value:?}"),
        }
    }
}

impl From<bool> for Key {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<char> for Key {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl TryFrom<Value> for Key {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Error> {
        match value {
            Value::Bool(value) => Ok(Self::Bool(value)),
            Value::Int(value) => Ok(Self::Int(value)),
            Value::Char(value) => Ok(Self::Char(value)),
            Value::Str(value) => Ok(Self::Str(value)),
            other => Err(Error::shape(
                "key",
                format!(
                    "value of kind <{}> cannot be a mapping key, expected bool, int, char or str",
                    other.kind()
                ),
            )),
        }
    }
}

/// A dynamically shaped value.
///
/// Function values compare by identity: two handles are equal when they
/// share the same underlying closure.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The explicit "no value".
    #[default]
    Nil,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A single character.
    Char(char),
    /// Text.
    Str(String),
    /// A callable.
    Function(Function),
    /// An ordered sequence.
    Sequence(Vec<Value>),
    /// A key-value mapping.
    Mapping(HashMap<Key, Value>),
}

impl Value {
    /// Returns the kind of the value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Nil => Kind::Nil,
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::Int,
            Self::Float(_) => Kind::Float,
            Self::Char(_) => Kind::Char,
            Self::Str(_) => Kind::Str,
            Self::Function(_) => Kind::Function,
            Self::Sequence(_) => Kind::Sequence,
            Self::Mapping(_) => Kind::Mapping,
        }
    }

    /// Returns whether the value is [`Value::Nil`].
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Converts the value into a callable handle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Shape`] if the value is not a function.
    pub fn into_function(self) -> Result<Function, Error> {
        Function::try_from(self)
    }

    /// Applies a function value to a single argument.
    ///
    /// This is what makes curried chains read naturally:
    /// `curried.apply(a)?.apply(b)?`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Shape`] if the value is not a function, and any
    /// error the call itself reports.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdakit::{Function, Value};
    ///
    /// let negate = Value::from(Function::unary(|number: i64| -number));
    /// assert_eq!(negate.apply(4), Ok(Value::Int(-4)));
    /// assert!(Value::Int(1).apply(4).is_err());
    /// ```
    pub fn apply(&self, argument: impl Into<Value>) -> Result<Self, Error> {
        match self {
            Self::Function(function) => function.apply(argument),
            other => Err(Error::shape(
                "apply",
                format!("value of kind <{}> is not callable", other.kind()),
            )),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Int(left), Self::Int(right)) => left == right,
            (Self::Float(left), Self::Float(right)) => left == right,
            (Self::Char(left), Self::Char(right)) => left == right,
            (Self::Str(left), Self::Str(right)) => left == right,
            (Self::Function(left), Self::Function(right)) => left.ptr_eq(right),
            (Self::Sequence(left), Self::Sequence(right)) => left == right,
            (Self::Mapping(left), Self::Mapping(right)) => left == right,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => formatter.write_str("nil"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value}"),
            Self::Char(value) => write!(formatter, "{value:?}"),
            Self::Str(value) => write!(formatter, "{value:?}"),
            Self::Function(function) => write!(formatter, "<function {}>", function.shape()),
            Self::Sequence(items) => {
                formatter.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{item}")?;
                }
                formatter.write_str("]")
            }
            Self::Mapping(entries) => {
                formatter.write_str("{")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{key}: {value}")?;
                }
                formatter.write_str("}")
            }
        }
    }
}

macro_rules! impl_value_from {
    ($($source:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$source> for Value {
                fn from(value: $source) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_value_from!(
    bool => Bool,
    i64 => Int,
    f64 => Float,
    char => Char,
    String => Str,
    Function => Function,
    Vec<Value> => Sequence,
    HashMap<Key, Value> => Mapping,
);

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Nil
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<&Function> for Value {
    fn from(value: &Function) -> Self {
        Self::Function(value.clone())
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Bool(value) => Self::Bool(value),
            Key::Int(value) => Self::Int(value),
            Key::Char(value) => Self::Char(value),
            Key::Str(value) => Self::Str(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Nil, Kind::Nil)]
    #[case(Value::from(true), Kind::Bool)]
    #[case(Value::from(3), Kind::Int)]
    #[case(Value::from(1.5), Kind::Float)]
    #[case(Value::from('x'), Kind::Char)]
    #[case(Value::from("text"), Kind::Str)]
    #[case(Value::from(vec![Value::Nil]), Kind::Sequence)]
    #[case(Value::from(HashMap::new()), Kind::Mapping)]
    fn value_kind(#[case] value: Value, #[case] kind: Kind) {
        assert_eq!(value.kind(), kind);
    }

    #[rstest]
    fn any_accepts_every_kind() {
        for kind in [Kind::Nil, Kind::Int, Kind::Function, Kind::Mapping] {
            assert!(Kind::Any.accepts(kind));
        }
        assert!(!Kind::Int.accepts(Kind::Any));
        assert!(!Kind::Int.accepts(Kind::Float));
    }

    #[rstest]
    fn key_round_trips_through_value() {
        let key = Key::from("abc");
        let value = Value::from(key.clone());
        assert_eq!(Key::try_from(value), Ok(key));
    }

    #[rstest]
    #[case(Kind::Any, true)]
    #[case(Kind::Str, true)]
    #[case(Kind::Char, true)]
    #[case(Kind::Float, false)]
    #[case(Kind::Nil, false)]
    #[case(Kind::Function, false)]
    fn key_admits_hashable_kinds(#[case] kind: Kind, #[case] admitted: bool) {
        assert_eq!(Key::admits(kind), admitted);
    }

    #[rstest]
    fn float_is_not_a_key() {
        let error = Key::try_from(Value::Float(1.0)).unwrap_err();
        assert_eq!(
            error.to_string(),
            "key: value of kind <float> cannot be a mapping key, expected bool, int, char or str"
        );
    }

    #[rstest]
    fn functions_compare_by_identity() {
        let first = Function::unary(|number: i64| number);
        let second = Function::unary(|number: i64| number);

        assert_eq!(Value::from(&first), Value::from(first.clone()));
        assert_ne!(Value::from(first), Value::from(second));
    }

    #[rstest]
    fn apply_on_non_function_is_shape_error() {
        let result = Value::from(7).apply(1);
        assert!(matches!(result, Err(Error::Shape { context: "apply", .. })));
    }

    #[rstest]
    fn display_sequence() {
        let value = Value::from(vec![Value::from(1), Value::from("a"), Value::Nil]);
        assert_eq!(format!("{value}"), "[1, \"a\", nil]");
    }
}
