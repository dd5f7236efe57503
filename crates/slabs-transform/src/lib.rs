//! Outlet code sweep over slab columns.
//!
//! The transform has three stages, all driven by [`sweep`]:
//!
//! 1. [`normalize_code`] maps a raw cell to its canonical code.
//! 2. [`build_reference_set`] collects the canonical codes of the reference
//!    column.
//! 3. [`compact_column`] drops reference codes from a target column and moves
//!    the survivors to the top, padding the tail with nulls.

pub mod compact;
pub mod error;
pub mod normalize;
pub mod reference;
pub mod sweep;

pub use compact::{compact_column, compact_values};
pub use error::{Result, TransformError};
pub use normalize::{normalize_code, normalize_column, normalize_column_in_place};
pub use reference::{ReferenceSet, build_reference_set};
pub use sweep::sweep;
