//! The S and K primitives and the terms derived from them.

use std::sync::LazyLock;

use super::apply::{apply_left, saturating};
use crate::callable::{Function, Shape, unpack};
use crate::error::Error;
use crate::value::Kind;

static BASIS: LazyLock<Result<Basis, Error>> = LazyLock::new(Basis::build);

/// Returns the shared combinator basis, constructing it on first use.
///
/// Construction happens exactly once per process; every later call returns
/// the same handles.
///
/// The derived terms are reduced by the same checked engine as any user
/// expression, and a failed reduction is returned rather than raised. The
/// crate never panics on a reduction error, so the cached basis keeps that
/// error and hands it to every caller. Propagate it with `?`.
///
/// # Errors
///
/// Returns the error that stopped construction, if any. Construction only
/// reduces fixed, well-shaped terms, so this does not fail in practice.
///
/// # Examples
///
/// ```rust
/// use lambdakit::combinator::basis;
/// use lambdakit::{Error, Value};
///
/// fn identity_of(value: Value) -> Result<Value, Error> {
///     basis()?.i().apply(value)
/// }
///
/// assert_eq!(identity_of(Value::Int(42)), Ok(Value::Int(42)));
/// assert!(basis()?.i().ptr_eq(basis()?.i()));
/// # Ok::<(), Error>(())
/// ```
pub fn basis() -> Result<&'static Basis, Error> {
    BASIS.as_ref().map_err(Clone::clone)
}

/// The SKI basis and the combinators derived from it.
///
/// | Term | Arity | Definition | Reduces to |
/// |---|---|---|---|
/// | `K` | 2 | primitive | `x` |
/// | `S` | 3 | primitive | `x z (y z)` |
/// | `I` | 1 | `S K K` | `x` |
/// | `B` | 3 | `S (K S) K` | `f (g x)` |
/// | `C` | 3 | `S (B B S) (K K)` | `f y x` |
/// | `M` | 1 | `S I I` | `f f` |
///
/// Every handle takes [`Kind::Any`] arguments and reduces them with
/// [`apply_left`], so terms may be passed to each other freely.
///
/// # Divergence
///
/// Evaluation is strict. An expression whose reduction does not terminate
/// under call-by-value does not terminate here either; `M M`, for instance,
/// recurses until the stack is exhausted. For the same reason no fixpoint
/// combinator is provided: `S L L` with `L = C B M` loops forever when
/// applied instead of producing a fixpoint.
#[derive(Debug, Clone)]
pub struct Basis {
    s: Function,
    k: Function,
    i: Function,
    b: Function,
    c: Function,
    m: Function,
    l: Function,
}

impl Basis {
    /// Forces construction of the shared basis.
    ///
    /// Calling this during start-up makes the one-time construction explicit
    /// instead of leaving it to the first use.
    ///
    /// # Errors
    ///
    /// See [`basis`].
    pub fn initialize() -> Result<(), Error> {
        basis().map(|_| ())
    }

    fn build() -> Result<Self, Error> {
        let s = substitution();
        let k = constant();

        let i = saturating(1, crate::apply!(&s, &k, &k)?);
        let b = saturating(3, crate::apply!(&s, crate::apply!(&k, &s)?, &k)?);
        let c = saturating(
            3,
            crate::apply!(&s, crate::apply!(&b, &b, &s)?, crate::apply!(&k, &k)?)?,
        );
        let m = saturating(1, crate::apply!(&s, &i, &i)?);
        let l = saturating(2, crate::apply!(&c, &b, &m)?);

        tracing::debug!("combinator basis constructed");
        Ok(Self { s, k, i, b, c, m, l })
    }

    /// `S x y z = x z (y z)`.
    #[must_use]
    pub const fn s(&self) -> &Function {
        &self.s
    }

    /// `K x y = x`.
    #[must_use]
    pub const fn k(&self) -> &Function {
        &self.k
    }

    /// `I x = x`.
    #[must_use]
    pub const fn i(&self) -> &Function {
        &self.i
    }

    /// `B f g x = f (g x)`.
    #[must_use]
    pub const fn b(&self) -> &Function {
        &self.b
    }

    /// `C f x y = f y x`.
    #[must_use]
    pub const fn c(&self) -> &Function {
        &self.c
    }

    /// `M f = f f`.
    #[must_use]
    pub const fn m(&self) -> &Function {
        &self.m
    }

    /// `L f g = f (g g)`, the building block of the fixpoint combinator.
    #[allow(dead_code)]
    pub(crate) const fn l(&self) -> &Function {
        &self.l
    }
}

fn constant() -> Function {
    Function::new(
        Shape::new(vec![Kind::Any, Kind::Any], vec![Kind::Any]),
        |arguments| {
            let [x, _] = unpack("K", arguments)?;
            Ok(vec![x])
        },
    )
}

fn substitution() -> Function {
    Function::new(
        Shape::new(vec![Kind::Any, Kind::Any, Kind::Any], vec![Kind::Any]),
        |arguments| {
            let [x, y, z] = unpack("S", arguments)?;
            let xz = apply_left(&x, z.clone())?;
            let yz = apply_left(&y, z)?;
            apply_left(&xz, yz).map(|reduced| vec![reduced])
        },
    )
}
