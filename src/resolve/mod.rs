//! Conflict-marker resolution.
//!
//! A file is scanned line by line through a three-state region machine.
//! Lines in the current-branch side of a conflict are dropped, lines in the
//! incoming side and outside any conflict are kept verbatim, and the marker
//! lines themselves are consumed.

mod markers;
mod region;
mod scanner;


pub use markers::{DIVIDER_MARKER, END_MARKER, Marker, START_MARKER};
pub use region::{LineAction, Region, Step};
pub use scanner::{Resolution, resolve_text};
