//! Convenience re-exports for common usage patterns.
//!
//! Import everything a catch boundary needs with:
//!
//! ```
//! use failchain::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macro**: [`failure_kind!`](crate::failure_kind)
//! - **Types**: [`Failure`], [`FailureKind`], [`DeclaredKinds`], [`CausalChain`]
//! - **Trait**: [`ResultExt`]
//! - **Operations**: the classifier and chain-walker functions
//!
//! # Examples
//!
//! ```
//! use failchain::prelude::*;
//!
//! failure_kind!(CONFIG = "config");
//!
//! fn load() -> FailureResult<String> {
//!     Err(Failure::with_message(&CONFIG, "missing key")).propagate()
//! }
//!
//! assert!(load().unwrap_err().is_unchecked());
//! ```

pub use crate::classify::{
    propagate_if_instance_of, rethrow_if_instance_of, rethrow_if_matches, rethrow_if_unchecked,
    wrap_and_rethrow,
};
pub use crate::failure_kind;
pub use crate::traits::ResultExt;
pub use crate::types::{CausalChain, DeclaredKinds, Failure, FailureKind, FailureResult};
pub use crate::walk::{causal_chain, root_cause};
