//! CSV reading utilities.

mod reader;

pub use reader::{read_csv_frame, validate_encoding};
