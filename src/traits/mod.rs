//! Extension traits for the catch-boundary idiom.

pub mod result_ext;

pub use result_ext::ResultExt;
