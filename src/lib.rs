//! Selective re-raise and cause-chain inspection for structured failure
//! values.
//!
//! A boundary that catches every failure often needs to decide, per declared
//! contract, which failure kinds pass through untouched and which get
//! converted into a single uniform kind — without losing information, without
//! double-wrapping, and without looping on a malformed cause graph. This
//! crate is that decision plus the chain diagnostics that go with it:
//!
//! - [`classify`] — re-raise a failure verbatim when its kind is unchecked or
//!   matches a declared contract, or wrap it for uniform propagation.
//! - [`walk`] — find a failure's root cause or materialize its full ordered
//!   cause chain, safely even when the graph is cyclic.
//!
//! Failure kinds form an explicit tree ([`kind`]) instead of relying on any
//! runtime type machinery, so "is this failure a NETWORK failure" is an
//! ancestry walk over `static` nodes.
//!
//! # Examples
//!
//! ## Selective re-raise at a boundary
//!
//! ```
//! use failchain::{failure_kind, kind, rethrow_if_matches, DeclaredKinds, Failure};
//!
//! failure_kind!(CONFIG = "config");
//! failure_kind!(NETWORK = "network");
//! failure_kind!(BOUNDARY = "boundary", extends kind::UNCHECKED);
//!
//! fn at_boundary(outcome: Result<(), Failure>) -> Result<(), Failure> {
//!     match outcome {
//!         Ok(value) => Ok(value),
//!         Err(failure) => {
//!             // CONFIG failures (and anything unchecked) pass through verbatim.
//!             rethrow_if_matches(Some(&failure), DeclaredKinds::one(&CONFIG))?;
//!             Err(Failure::with_cause(&BOUNDARY, "converted at boundary", failure))
//!         }
//!     }
//! }
//!
//! let config = at_boundary(Err(Failure::new(&CONFIG))).unwrap_err();
//! assert!(config.is_a(&CONFIG));
//!
//! let network = at_boundary(Err(Failure::new(&NETWORK))).unwrap_err();
//! assert!(network.is_a(&BOUNDARY));
//! ```
//!
//! ## Chain inspection
//!
//! ```
//! use failchain::{failure_kind, kind, Failure};
//!
//! failure_kind!(PARSE = "parse");
//!
//! let root = Failure::with_message(&PARSE, "unexpected token");
//! let outer = Failure::with_cause(&kind::WRAPPED, "loading profile", root.clone());
//!
//! let chain = outer.causal_chain();
//! assert_eq!(chain.len(), 2);
//! assert!(Failure::ptr_eq(chain.root(), &root));
//! ```

/// Type-filtered selective re-raise of failures.
pub mod classify;
/// Macro support for declaring failure kinds.
pub mod macros;
/// Convenience re-exports for quick starts.
pub mod prelude;
/// Extension traits for the catch-boundary idiom.
pub mod traits;
/// Failure values, the kind taxonomy, and chain views.
pub mod types;
/// Cause-chain traversal.
pub mod walk;

pub use classify::{
    propagate_if_instance_of, rethrow_if_instance_of, rethrow_if_matches, rethrow_if_unchecked,
    wrap_and_rethrow,
};
pub use traits::ResultExt;
pub use types::kind;
pub use types::{Category, CausalChain, DeclaredKinds, Failure, FailureKind, FailureResult};
pub use walk::{causal_chain, root_cause};
