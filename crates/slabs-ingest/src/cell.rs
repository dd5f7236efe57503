//! Workbook cell to text conversion.

use calamine::{Data, DataType};

/// Converts a workbook cell to its text form, or `None` when the cell is missing.
///
/// Empty and error cells are missing. Whole floats drop their fractional part
/// so `12.0` reads as `12`, and date-times render as `YYYY-MM-DD HH:MM:SS`.
///
/// # Examples
///
/// ```
/// use calamine::Data;
/// use slabs_ingest::cell_text;
///
/// assert_eq!(cell_text(&Data::Empty), None);
/// assert_eq!(cell_text(&Data::Float(12.0)), Some("12".to_string()));
/// assert_eq!(cell_text(&Data::String("007".into())), Some("007".to_string()));
/// ```
pub fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(value) => Some(value.clone()),
        Data::Int(value) => Some(value.to_string()),
        Data::Float(value) => Some(format_numeric(*value)),
        Data::Bool(value) => Some(if *value { "True" } else { "False" }.to_string()),
        Data::DateTime(_) => cell
            .as_datetime()
            .map(|value| value.to_string())
            .or_else(|| Some(cell.to_string())),
        Data::DateTimeIso(value) | Data::DurationIso(value) => Some(value.clone()),
    }
}

/// Formats a floating-point number as a string without trailing zeros.
///
/// # Examples
///
/// ```
/// use slabs_ingest::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
