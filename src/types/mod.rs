//! Failure values, the kind taxonomy, and chain views.
//!
//! # Examples
//!
//! ```
//! use failchain::{failure_kind, kind, Failure};
//!
//! failure_kind!(CONFIG = "config");
//!
//! let root = Failure::with_message(&CONFIG, "missing key");
//! let outer = Failure::with_cause(&kind::WRAPPED, "startup aborted", root);
//!
//! println!("{}", outer.causal_chain());
//! // Output: wrapped: startup aborted
//! //           caused by: config: missing key
//! ```

use smallvec::SmallVec;

pub mod chain;
pub mod failure;
pub mod kind;

pub use chain::CausalChain;
pub use failure::Failure;
pub use kind::{Category, DeclaredKinds, FailureKind};

/// SmallVec-backed storage for chain links and traversal bookkeeping.
///
/// Inline storage covers chains up to 4 links deep, which keeps typical
/// materializations off the heap.
pub type LinkVec<F> = SmallVec<[F; 4]>;

/// Result alias for operations whose failure currency is [`Failure`].
pub type FailureResult<T> = Result<T, Failure>;
