//! The failure value.
//!
//! A [`Failure`] is a cheaply-clonable handle to an immutable record: a kind,
//! an optional message, and an optional cause. Handle identity is what the
//! classifier re-raises and what the chain walker uses for cycle detection,
//! so a clone re-raised at a boundary is indistinguishable from the original.
//!
//! ```
//! use failchain::{failure_kind, Failure};
//!
//! failure_kind!(PARSE = "parse");
//!
//! let failure = Failure::with_message(&PARSE, "unexpected token");
//! assert_eq!(failure.to_string(), "parse: unexpected token");
//! assert!(Failure::ptr_eq(&failure, &failure.clone()));
//! ```

use std::error::Error;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::types::chain::CausalChain;
use crate::types::kind::{self, Category, FailureKind};

/// An immutable failure value: kind, optional message, optional cause.
///
/// Cloning copies the handle, not the record, and preserves identity
/// ([`Failure::ptr_eq`]). The record never changes after construction; the one
/// exception is [`init_cause`](Failure::init_cause), which binds a missing
/// cause at most once as the final construction step.
#[derive(Clone)]
pub struct Failure {
    inner: Arc<Inner>,
}

struct Inner {
    kind: &'static FailureKind,
    message: Option<String>,
    cause: OnceLock<Failure>,
}

impl Failure {
    /// A failure of `kind` with no message and no cause.
    #[must_use]
    pub fn new(kind: &'static FailureKind) -> Self {
        Self::build(kind, None, None)
    }

    /// A failure of `kind` carrying `message`.
    #[must_use]
    pub fn with_message(kind: &'static FailureKind, message: impl Into<String>) -> Self {
        Self::build(kind, Some(message.into()), None)
    }

    /// A failure of `kind` carrying `message`, caused by `cause`.
    #[must_use]
    pub fn with_cause(
        kind: &'static FailureKind,
        message: impl Into<String>,
        cause: Failure,
    ) -> Self {
        Self::build(kind, Some(message.into()), Some(cause))
    }

    /// Wraps `cause` in a fresh [`WRAPPED`](kind::WRAPPED) failure that adopts
    /// the cause's rendering as its message.
    #[must_use]
    pub fn wrapping(cause: Failure) -> Self {
        let message = cause.to_string();
        Self::build(&kind::WRAPPED, Some(message), Some(cause))
    }

    fn build(
        kind: &'static FailureKind,
        message: Option<String>,
        cause: Option<Failure>,
    ) -> Self {
        let cell = OnceLock::new();
        if let Some(cause) = cause {
            let _ = cell.set(cause);
        }
        Self {
            inner: Arc::new(Inner { kind, message, cause: cell }),
        }
    }

    /// The failure's kind.
    #[inline]
    pub fn kind(&self) -> &'static FailureKind {
        self.inner.kind
    }

    /// The failure's message, if any.
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.inner.message.as_deref()
    }

    /// The direct cause, if one is bound.
    #[inline]
    pub fn cause(&self) -> Option<&Failure> {
        self.inner.cause.get()
    }

    /// The propagation category of the failure's kind.
    #[inline]
    pub fn category(&self) -> Category {
        self.inner.kind.category()
    }

    /// `true` when the failure may propagate without a declared contract.
    #[inline]
    pub fn is_unchecked(&self) -> bool {
        self.inner.kind.is_unchecked()
    }

    /// `true` when the failure's kind is `kind` or a sub-kind of it.
    #[inline]
    pub fn is_a(&self, kind: &FailureKind) -> bool {
        self.inner.kind.is_a(kind)
    }

    /// Binds `cause` as this failure's cause after construction.
    ///
    /// The bind happens at most once: rebinding fails with
    /// [`ILLEGAL_STATE`](kind::ILLEGAL_STATE), and a failure cannot be bound
    /// as its own cause ([`INVALID_ARGUMENT`](kind::INVALID_ARGUMENT)).
    pub fn init_cause(&self, cause: Failure) -> Result<(), Failure> {
        if Failure::ptr_eq(self, &cause) {
            return Err(Failure::with_message(
                &kind::INVALID_ARGUMENT,
                "a failure cannot be its own cause",
            ));
        }
        self.inner
            .cause
            .set(cause)
            .map_err(|_| Failure::with_message(&kind::ILLEGAL_STATE, "cause already bound"))
    }

    /// Identity comparison: do both handles refer to the same failure?
    #[inline]
    pub fn ptr_eq(a: &Failure, b: &Failure) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    pub(crate) fn identity(&self) -> *const () {
        Arc::as_ptr(&self.inner).cast()
    }

    /// The deepest failure reachable through cause links.
    ///
    /// Convenience form of [`root_cause`](crate::walk::root_cause) for a
    /// failure in hand; still fails with [`ILLEGAL_STATE`](kind::ILLEGAL_STATE)
    /// on a cyclic chain.
    pub fn root_cause(&self) -> Result<Failure, Failure> {
        crate::walk::root_of(self)
    }

    /// The ordered cause chain starting at this failure.
    ///
    /// Convenience form of [`causal_chain`](crate::walk::causal_chain); cyclic
    /// chains are truncated, so this never fails.
    #[must_use]
    pub fn causal_chain(&self) -> CausalChain {
        crate::walk::chain_of(self)
    }
}

/// Unwraps an optional failure argument, failing with
/// [`INVALID_ARGUMENT`](kind::INVALID_ARGUMENT) when it is absent.
pub(crate) fn require<'f>(
    failure: Option<&'f Failure>,
    operation: &str,
) -> Result<&'f Failure, Failure> {
    failure.ok_or_else(|| {
        Failure::with_message(
            &kind::INVALID_ARGUMENT,
            format!("{operation} requires a failure"),
        )
    })
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "{}: {}", self.inner.kind.name(), message),
            None => f.write_str(self.inner.kind.name()),
        }
    }
}

// Renders the cause one level deep by kind only, so a cyclic graph cannot
// send formatting into a loop.
impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Failure")
            .field("kind", &self.inner.kind.name())
            .field("message", &self.message())
            .field("cause", &self.cause().map(|cause| cause.kind().name()))
            .finish()
    }
}

impl Error for Failure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause().map(|cause| cause as &(dyn Error + 'static))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Failure {
    /// Serializes the failure's own record only; cause links are covered by
    /// [`CausalChain`], which is cycle-safe.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut record = serializer.serialize_struct("Failure", 2)?;
        record.serialize_field("kind", self.inner.kind.name())?;
        record.serialize_field("message", &self.message())?;
        record.end()
    }
}
