//! Market-structure levels.

pub mod pivot;

pub use pivot::{pivot_levels, PivotLevels};
