//! Table loading for the slab sweep.
//!
//! Every supported input ends up as a Polars [`DataFrame`] whose columns are
//! all `String` typed. Missing cells are nulls, never empty strings: blank
//! cells and the usual NA spellings (`NA`, `N/A`, `NULL`, `nan`, ...) load as
//! null, and rows with no value at all are dropped. Column names are trimmed
//! of surrounding whitespace.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use slabs_ingest::read_table;
//! use slabs_model::SheetSelector;
//!
//! let df = read_table(Path::new("slabs.xlsx"), Some(&SheetSelector::Index(0)))?;
//! println!("rows={}", df.height());
//! ```
//!
//! [`DataFrame`]: polars::prelude::DataFrame

mod cell;
mod csv;
mod error;
mod format;
mod missing;
mod table;
mod workbook;

// === Error Types ===
pub use error::{IngestError, Result};

// === Format Detection ===
pub use format::{TableFormat, WORKBOOK_EXTENSIONS};

// === Loading ===
pub use cell::{cell_text, format_numeric};
pub use csv::{read_csv_frame, validate_encoding};
pub use missing::{MISSING_TOKENS, drop_blank_rows, is_missing_token, null_missing_tokens};
pub use table::{read_table, trim_column_names};
pub use workbook::{read_workbook_frame, resolve_sheet_name};
