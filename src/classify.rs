//! Type-filtered selective re-raise.
//!
//! A boundary that catches every failure usually wants to let a few kinds
//! pass through untouched and convert the rest. Each operation here either
//! re-raises the caller's failure — an `Err` holding an identity-preserving
//! clone — or returns `Ok(())` so the caller's own conversion runs. Nothing
//! is ever swallowed.
//!
//! The absent-failure behavior differs per operation on purpose, mirroring
//! the contracts this module was specified against: [`rethrow_if_unchecked`]
//! and [`rethrow_if_instance_of`] treat an absent failure as a caller bug,
//! while [`rethrow_if_matches`] and [`propagate_if_instance_of`] treat it as
//! "nothing to do".
//!
//! # Examples
//!
//! ```
//! use failchain::{failure_kind, rethrow_if_matches, wrap_and_rethrow, DeclaredKinds, Failure};
//!
//! failure_kind!(CONFIG = "config");
//!
//! fn load(outcome: Result<String, Failure>) -> Result<String, Failure> {
//!     match outcome {
//!         Ok(value) => Ok(value),
//!         Err(failure) => {
//!             // CONFIG failures and anything unchecked pass through verbatim.
//!             rethrow_if_matches(Some(&failure), DeclaredKinds::one(&CONFIG))?;
//!             wrap_and_rethrow(failure)
//!         }
//!     }
//! }
//! ```

use crate::types::failure::require;
use crate::types::kind::{DeclaredKinds, FailureKind};
use crate::types::Failure;

/// Re-raises `failure` when its kind is unchecked; otherwise returns `Ok(())`.
///
/// The re-raised failure is an identity-preserving clone, so downstream
/// handling keyed on kind or identity still matches. An absent failure fails
/// with [`INVALID_ARGUMENT`](crate::kind::INVALID_ARGUMENT).
pub fn rethrow_if_unchecked(failure: Option<&Failure>) -> Result<(), Failure> {
    let failure = require(failure, "rethrow_if_unchecked")?;
    if failure.is_unchecked() {
        return Err(failure.clone());
    }
    Ok(())
}

/// Re-raises `failure` when its kind is unchecked or permitted by `declared`;
/// otherwise returns `Ok(())`.
///
/// Matching is is-a: a declared super-kind permits every sub-kind, never the
/// reverse. With [`DeclaredKinds::none`] only the unchecked test remains. An
/// absent failure is a no-op.
pub fn rethrow_if_matches(failure: Option<&Failure>, declared: DeclaredKinds) -> Result<(), Failure> {
    let Some(failure) = failure else {
        return Ok(());
    };
    if failure.is_unchecked() || declared.permits(failure.kind()) {
        return Err(failure.clone());
    }
    Ok(())
}

/// Re-raises `failure` when its kind is `kind` or a sub-kind of it; otherwise
/// returns `Ok(())`.
///
/// A pure membership test: unlike [`rethrow_if_matches`] there is no
/// unchecked special case. An absent failure fails with
/// [`INVALID_ARGUMENT`](crate::kind::INVALID_ARGUMENT).
pub fn rethrow_if_instance_of(
    failure: Option<&Failure>,
    kind: &'static FailureKind,
) -> Result<(), Failure> {
    let failure = require(failure, "rethrow_if_instance_of")?;
    if failure.is_a(kind) {
        return Err(failure.clone());
    }
    Ok(())
}

/// Absent-tolerant form of [`rethrow_if_instance_of`]: an absent failure
/// returns `Ok(())` instead of failing.
pub fn propagate_if_instance_of(
    failure: Option<&Failure>,
    kind: &'static FailureKind,
) -> Result<(), Failure> {
    match failure {
        Some(failure) if failure.is_a(kind) => Err(failure.clone()),
        _ => Ok(()),
    }
}

/// Raises `failure` in a form that may always propagate; never returns `Ok`.
///
/// Unchecked failures come back identically; checked failures come back
/// wrapped in a fresh [`WRAPPED`](crate::kind::WRAPPED) failure whose cause is
/// the original, so no diagnostic depth is lost. Exists so a caller that has
/// exhausted its selective checks can terminate uniformly:
///
/// ```
/// use failchain::{failure_kind, wrap_and_rethrow, Failure};
///
/// failure_kind!(CONFIG = "config");
///
/// fn give_up(failure: Failure) -> Result<String, Failure> {
///     wrap_and_rethrow(failure)
/// }
///
/// let wrapped = give_up(Failure::new(&CONFIG)).unwrap_err();
/// assert!(wrapped.is_unchecked());
/// ```
pub fn wrap_and_rethrow<T>(failure: Failure) -> Result<T, Failure> {
    if failure.is_unchecked() {
        return Err(failure);
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(kind = failure.kind().name(), "wrapping checked failure for propagation");
    Err(Failure::wrapping(failure))
}
