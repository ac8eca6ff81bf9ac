//! Extension trait for running classifier decisions on `Result` values.
//!
//! The free functions in [`classify`](crate::classify) mirror the boundary
//! contracts exactly; this trait packages the common catch-block shapes as
//! combinators so a boundary is one method call instead of a `match`.
//!
//! # Examples
//!
//! ```
//! use failchain::{failure_kind, DeclaredKinds, Failure, ResultExt};
//!
//! failure_kind!(CONFIG = "config");
//! failure_kind!(NETWORK = "network");
//!
//! fn read_setting() -> Result<String, Failure> {
//!     Err(Failure::with_message(&NETWORK, "connection reset"))
//! }
//!
//! // Callers see CONFIG failures verbatim; everything else comes back wrapped.
//! let failure = read_setting()
//!     .propagate_declared(DeclaredKinds::one(&CONFIG))
//!     .unwrap_err();
//! assert!(failure.is_unchecked());
//! ```

use crate::classify;
use crate::types::{DeclaredKinds, Failure};

/// Catch-boundary combinators for `Result<T, Failure>`.
pub trait ResultExt<T> {
    /// Converts any failure into one that may propagate without a declared
    /// contract, via [`wrap_and_rethrow`](classify::wrap_and_rethrow):
    /// unchecked failures stay identical, checked ones come back wrapped.
    fn propagate(self) -> Result<T, Failure>;

    /// Re-raises failures permitted by `declared` (or unchecked ones)
    /// verbatim and wraps the rest — the whole declared-contract catch block
    /// as one combinator.
    fn propagate_declared(self, declared: DeclaredKinds) -> Result<T, Failure>;
}

impl<T> ResultExt<T> for Result<T, Failure> {
    #[inline]
    fn propagate(self) -> Result<T, Failure> {
        match self {
            Ok(value) => Ok(value),
            Err(failure) => classify::wrap_and_rethrow(failure),
        }
    }

    #[inline]
    fn propagate_declared(self, declared: DeclaredKinds) -> Result<T, Failure> {
        match self {
            Ok(value) => Ok(value),
            Err(failure) => {
                classify::rethrow_if_matches(Some(&failure), declared)?;
                classify::wrap_and_rethrow(failure)
            }
        }
    }
}
