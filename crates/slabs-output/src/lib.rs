//! Slab sweep output generation.
//!
//! The swept table is written as comma-delimited UTF-8 text with a header row.
//! Null and empty cells become bare empty fields and no row index is written.
//! The file is staged next to its destination and renamed into place.

mod csv;
mod error;

pub use csv::{output_path_for, write_csv};
pub use error::{OutputError, Result};
