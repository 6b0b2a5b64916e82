//! Filesystem helpers for rewriting resolved files in place.

pub mod overwrite;

pub use overwrite::overwrite_in_place;
