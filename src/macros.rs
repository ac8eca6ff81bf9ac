//! Macro support for declaring failure kinds.

/// Declares a failure kind as a `static` node in the kind tree.
///
/// Without an `extends` clause the kind attaches to the checked branch
/// ([`kind::CHECKED`](crate::kind::CHECKED)). Pass `extends <kind>` — a path
/// to another kind `static` — to attach anywhere else in the taxonomy.
///
/// # Examples
///
/// ```
/// use failchain::{failure_kind, kind, Failure};
///
/// failure_kind!(CONFIG = "config");
/// failure_kind!(ABORT = "abort", extends kind::UNCHECKED);
/// failure_kind!(pub OOM = "out-of-memory", extends ABORT);
///
/// assert!(!Failure::new(&CONFIG).is_unchecked());
/// assert!(Failure::new(&OOM).is_unchecked());
/// ```
#[macro_export]
macro_rules! failure_kind {
    ($vis:vis $name:ident = $label:expr) => {
        $vis static $name: $crate::FailureKind =
            $crate::FailureKind::new($label, &$crate::kind::CHECKED);
    };
    ($vis:vis $name:ident = $label:expr, extends $parent:path) => {
        $vis static $name: $crate::FailureKind = $crate::FailureKind::new($label, &$parent);
    };
}
