//! Cause-chain traversal.
//!
//! Two views over the cause-of relation: [`root_cause`] finds the deepest
//! reachable failure, [`causal_chain`] materializes the whole ordered chain.
//! Both walk iteratively with an identity-based visited set, so arbitrarily
//! deep and even cyclic graphs terminate. They diverge on what a cycle means:
//! `root_cause` has no answer to give and fails with
//! [`ILLEGAL_STATE`](crate::kind::ILLEGAL_STATE), while `causal_chain` stops
//! at the first repeat and returns the prefix. The divergence is a deliberate
//! per-operation contract.
//!
//! # Examples
//!
//! ```
//! use failchain::{failure_kind, root_cause, Failure};
//!
//! failure_kind!(IO = "io");
//! failure_kind!(FETCH = "fetch");
//!
//! let disk = Failure::with_message(&IO, "read interrupted");
//! let fetch = Failure::with_cause(&FETCH, "manifest unavailable", disk.clone());
//!
//! let root = root_cause(Some(&fetch)).unwrap();
//! assert!(Failure::ptr_eq(&root, &disk));
//! ```

use smallvec::SmallVec;

use crate::types::failure::require;
use crate::types::kind;
use crate::types::{CausalChain, Failure, LinkVec};

/// Follows cause links from `failure` to the deepest reachable failure.
///
/// A failure with no cause is its own root. A cyclic chain fails with
/// [`ILLEGAL_STATE`](kind::ILLEGAL_STATE); an absent failure fails with
/// [`INVALID_ARGUMENT`](kind::INVALID_ARGUMENT).
pub fn root_cause(failure: Option<&Failure>) -> Result<Failure, Failure> {
    let start = require(failure, "root_cause")?;
    root_of(start)
}

/// Materializes the ordered sequence `[failure, cause(failure), ..., root]`.
///
/// A cyclic chain is truncated just before the first repeated failure rather
/// than reported as an error. An absent failure fails with
/// [`INVALID_ARGUMENT`](kind::INVALID_ARGUMENT). The returned chain is a
/// snapshot: later cause binds upstream do not change it.
pub fn causal_chain(failure: Option<&Failure>) -> Result<CausalChain, Failure> {
    let start = require(failure, "causal_chain")?;
    Ok(chain_of(start))
}

pub(crate) fn root_of(start: &Failure) -> Result<Failure, Failure> {
    let mut visited: SmallVec<[*const (); 8]> = SmallVec::new();
    visited.push(start.identity());

    let mut current = start;
    while let Some(cause) = current.cause() {
        if visited.contains(&cause.identity()) {
            #[cfg(feature = "tracing")]
            tracing::warn!(kind = start.kind().name(), "cyclic cause chain has no root");
            return Err(Failure::with_message(&kind::ILLEGAL_STATE, "cyclic cause chain"));
        }
        visited.push(cause.identity());
        current = cause;
    }
    Ok(current.clone())
}

pub(crate) fn chain_of(start: &Failure) -> CausalChain {
    let mut links: LinkVec<Failure> = LinkVec::new();
    links.push(start.clone());

    // The chain itself is the visited set: stop before any repeat.
    let mut current = start;
    while let Some(cause) = current.cause() {
        if links.iter().any(|seen| Failure::ptr_eq(seen, cause)) {
            #[cfg(feature = "tracing")]
            tracing::warn!(kind = start.kind().name(), "cyclic cause chain truncated");
            break;
        }
        links.push(cause.clone());
        current = cause;
    }
    CausalChain::new(links)
}
