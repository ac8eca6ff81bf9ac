//! Materialized cause-chain views.

use core::fmt;
use core::ops::Index;
use core::slice;

use crate::types::failure::Failure;
use crate::types::LinkVec;

/// A read-only snapshot of a cause chain, ordered from the failure it was
/// materialized from down to the deepest reachable cause.
///
/// The view is independent of the underlying graph: binding a cause upstream
/// after materialization does not change an existing chain. There is no
/// mutating API.
///
/// ```
/// use failchain::{failure_kind, Failure};
///
/// failure_kind!(IO = "io");
/// failure_kind!(FETCH = "fetch");
///
/// let root = Failure::with_message(&IO, "connection reset");
/// let outer = Failure::with_cause(&FETCH, "profile fetch failed", root.clone());
///
/// let chain = outer.causal_chain();
/// assert_eq!(chain.len(), 2);
/// assert!(Failure::ptr_eq(chain.head(), &outer));
/// assert!(Failure::ptr_eq(chain.root(), &root));
/// ```
#[derive(Clone, Debug)]
pub struct CausalChain {
    links: LinkVec<Failure>,
}

impl CausalChain {
    // Chains always hold at least the failure they started from.
    pub(crate) fn new(links: LinkVec<Failure>) -> Self {
        debug_assert!(!links.is_empty());
        Self { links }
    }

    /// Number of failures in the chain.
    #[inline]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Always `false`: a chain holds at least its starting failure.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// The failure the chain was materialized from.
    #[inline]
    pub fn head(&self) -> &Failure {
        &self.links[0]
    }

    /// The deepest reachable cause.
    #[inline]
    pub fn root(&self) -> &Failure {
        &self.links[self.links.len() - 1]
    }

    /// The failure at `index`, counting from the head.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Failure> {
        self.links.get(index)
    }

    /// Iterates from the head to the root.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Failure> {
        self.links.iter()
    }

    /// The chain as a slice, head first.
    #[inline]
    pub fn as_slice(&self) -> &[Failure] {
        &self.links
    }
}

impl Index<usize> for CausalChain {
    type Output = Failure;

    #[inline]
    fn index(&self, index: usize) -> &Failure {
        &self.links[index]
    }
}

impl<'a> IntoIterator for &'a CausalChain {
    type Item = &'a Failure;
    type IntoIter = slice::Iter<'a, Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}

impl IntoIterator for CausalChain {
    type Item = Failure;
    type IntoIter = smallvec::IntoIter<[Failure; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.into_iter()
    }
}

impl fmt::Display for CausalChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.head())?;
        for link in self.iter().skip(1) {
            write!(f, "\n  caused by: {link}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CausalChain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}
