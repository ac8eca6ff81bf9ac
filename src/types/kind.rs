//! The failure-kind taxonomy.
//!
//! Kinds form a tree: every kind links to a parent, terminating at the
//! [`FAILURE`] root. Classification is an ancestry walk over those links, so
//! "is-a" questions are answered structurally instead of through any runtime
//! type machinery. A kind is *unchecked* exactly when it descends from the
//! [`UNCHECKED`] root; everything else is *checked* and needs a declared
//! contract to propagate verbatim.
//!
//! Downstream code declares its own kinds as `static` items, usually through
//! the [`failure_kind!`](crate::failure_kind) macro:
//!
//! ```
//! use failchain::{failure_kind, kind};
//!
//! failure_kind!(CONFIG = "config");
//! failure_kind!(ABORT = "abort", extends kind::UNCHECKED);
//!
//! assert!(CONFIG.is_a(&kind::CHECKED));
//! assert!(ABORT.is_unchecked());
//! ```

use core::fmt;
use core::ptr;

/// A node in the failure-kind tree.
///
/// Identity is the node's address: two kinds are the same kind only if they
/// are the same `static`. The name is a label for rendering and diagnostics,
/// not an identity.
pub struct FailureKind {
    name: &'static str,
    parent: Option<&'static FailureKind>,
}

impl FailureKind {
    /// Declares a new kind under `parent`.
    ///
    /// `const`, so downstream kinds can live in `static` items.
    #[must_use]
    pub const fn new(name: &'static str, parent: &'static FailureKind) -> Self {
        Self { name, parent: Some(parent) }
    }

    const fn base(name: &'static str) -> Self {
        Self { name, parent: None }
    }

    /// The kind's label.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The direct super-kind, `None` only for the [`FAILURE`] root.
    #[inline]
    pub fn parent(&self) -> Option<&'static FailureKind> {
        self.parent
    }

    /// `true` when `self` is `ancestor` or a sub-kind of it.
    ///
    /// Reflexive and transitive; never matches downward (a super-kind is not
    /// a sub-kind of its children).
    pub fn is_a(&self, ancestor: &FailureKind) -> bool {
        let mut node = self;
        loop {
            if ptr::eq(node, ancestor) {
                return true;
            }
            match node.parent {
                Some(parent) => node = parent,
                None => return false,
            }
        }
    }

    /// The propagation category, derived from ancestry to [`UNCHECKED`].
    #[inline]
    pub fn category(&self) -> Category {
        if self.is_a(&UNCHECKED) {
            Category::Unchecked
        } else {
            Category::Checked
        }
    }

    /// Shorthand for `category() == Category::Unchecked`.
    #[inline]
    pub fn is_unchecked(&self) -> bool {
        self.category() == Category::Unchecked
    }
}

impl PartialEq for FailureKind {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }
}

impl Eq for FailureKind {}

impl fmt::Debug for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FailureKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name)
    }
}

/// Whether a failure kind may propagate without a declared contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// Propagation requires a declared-contract match.
    Checked,
    /// May always propagate verbatim.
    Unchecked,
}

/// Root of the kind tree. Every kind descends from it.
pub static FAILURE: FailureKind = FailureKind::base("failure");

/// Root of the unchecked branch. Sub-kinds propagate without a declared
/// contract.
pub static UNCHECKED: FailureKind = FailureKind::new("unchecked", &FAILURE);

/// Root of the checked branch and the default parent for downstream kinds.
pub static CHECKED: FailureKind = FailureKind::new("checked", &FAILURE);

/// A required argument was absent or unusable.
pub static INVALID_ARGUMENT: FailureKind = FailureKind::new("invalid-argument", &UNCHECKED);

/// A structural invariant did not hold.
pub static ILLEGAL_STATE: FailureKind = FailureKind::new("illegal-state", &UNCHECKED);

/// Wrapper kind produced by [`wrap_and_rethrow`](crate::classify::wrap_and_rethrow)
/// around checked failures.
pub static WRAPPED: FailureKind = FailureKind::new("wrapped", &UNCHECKED);

/// The kinds a call site is allowed to propagate verbatim.
///
/// Holds zero, one, or two kind references. Matching is is-a: a declared
/// super-kind permits every sub-kind, never the reverse.
///
/// ```
/// use failchain::{failure_kind, DeclaredKinds};
///
/// failure_kind!(NETWORK = "network");
/// failure_kind!(TIMEOUT = "timeout", extends NETWORK);
///
/// assert!(DeclaredKinds::one(&NETWORK).permits(&TIMEOUT));
/// assert!(!DeclaredKinds::one(&TIMEOUT).permits(&NETWORK));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclaredKinds {
    first: Option<&'static FailureKind>,
    second: Option<&'static FailureKind>,
}

impl DeclaredKinds {
    /// An empty contract: nothing checked is permitted.
    #[must_use]
    pub const fn none() -> Self {
        Self { first: None, second: None }
    }

    /// A single declared kind.
    #[must_use]
    pub const fn one(kind: &'static FailureKind) -> Self {
        Self { first: Some(kind), second: None }
    }

    /// Two declared kinds.
    #[must_use]
    pub const fn two(first: &'static FailureKind, second: &'static FailureKind) -> Self {
        Self { first: Some(first), second: Some(second) }
    }

    /// `true` when `kind` is (a sub-kind of) one of the declared kinds.
    pub fn permits(&self, kind: &FailureKind) -> bool {
        self.first.is_some_and(|declared| kind.is_a(declared))
            || self.second.is_some_and(|declared| kind.is_a(declared))
    }

    /// `true` when no kind is declared.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.first.is_none() && self.second.is_none()
    }
}
