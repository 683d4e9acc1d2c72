//! The closed set of containers the traversal algorithms accept.

use std::collections::HashMap;
use std::fmt;

use crate::error::Error;
use crate::value::{Key, Value};

/// The kind of a [`Container`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// An ordered, index-addressable sequence.
    Sequence,
    /// A key-value mapping with unique keys and unspecified order.
    Mapping,
    /// An ordered sequence of characters.
    Chars,
}

impl ContainerKind {
    /// Returns the number of parameters a visitor over this kind takes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdakit::traverse::ContainerKind;
    ///
    /// assert_eq!(ContainerKind::Sequence.visitor_arity(), 1);
    /// assert_eq!(ContainerKind::Chars.visitor_arity(), 1);
    /// assert_eq!(ContainerKind::Mapping.visitor_arity(), 2);
    /// ```
    #[must_use]
    pub const fn visitor_arity(self) -> usize {
        match self {
            Self::Sequence | Self::Chars => 1,
            Self::Mapping => 2,
        }
    }

    /// Returns the lowercase name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
            Self::Chars => "chars",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// A sequence, mapping or character sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Container {
    /// An ordered sequence of values.
    Sequence(Vec<Value>),
    /// A key-value mapping.
    Mapping(HashMap<Key, Value>),
    /// Text, traversed one character at a time.
    Chars(String),
}

impl Container {
    /// Creates a sequence from any iterable of convertible items.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdakit::traverse::Container;
    /// use lambdakit::Value;
    ///
    /// let words = Container::sequence(["a", "b"]);
    /// assert_eq!(words, Container::Sequence(vec![Value::from("a"), Value::from("b")]));
    /// ```
    pub fn sequence<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Creates a mapping from any iterable of key-value pairs.
    ///
    /// Later pairs overwrite earlier ones with the same key.
    pub fn mapping<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        Self::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Creates a character sequence.
    pub fn chars(text: impl Into<String>) -> Self {
        Self::Chars(text.into())
    }

    /// Returns the kind of the container.
    #[must_use]
    pub const fn kind(&self) -> ContainerKind {
        match self {
            Self::Sequence(_) => ContainerKind::Sequence,
            Self::Mapping(_) => ContainerKind::Mapping,
            Self::Chars(_) => ContainerKind::Chars,
        }
    }

    /// Returns the number of elements, entries or characters.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(items) => items.len(),
            Self::Mapping(entries) => entries.len(),
            Self::Chars(text) => text.chars().count(),
        }
    }

    /// Returns whether the container holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Sequence(items) => items.is_empty(),
            Self::Mapping(entries) => entries.is_empty(),
            Self::Chars(text) => text.is_empty(),
        }
    }
}

impl From<Container> for Value {
    fn from(container: Container) -> Self {
        match container {
            Container::Sequence(items) => Self::Sequence(items),
            Container::Mapping(entries) => Self::Mapping(entries),
            Container::Chars(text) => Self::Str(text),
        }
    }
}

impl TryFrom<Value> for Container {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Error> {
        match value {
            Value::Sequence(items) => Ok(Self::Sequence(items)),
            Value::Mapping(entries) => Ok(Self::Mapping(entries)),
            Value::Str(text) => Ok(Self::Chars(text)),
            other => Err(Error::Unsupported {
                operation: "traversal",
                subject: other.kind().name(),
            }),
        }
    }
}
