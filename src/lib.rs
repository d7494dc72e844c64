//! Lockstep diff
//!
//! Line diffing for side-by-side editors: both sides are padded to the same
//! number of rows, with position mapping between buffer lines and diff rows
//! and a scaled preview layout for minimaps.

pub mod buffer;
pub mod config;
pub mod constant;
pub mod differ;
pub mod worker;
