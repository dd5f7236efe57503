//! Missing-cell rules shared by every input format.

use polars::prelude::{
    BooleanChunked, Column, DataFrame, IntoColumn, NamedFrom, NewChunkedArray, Series,
};

use crate::error::Result;

/// Cell texts that load as missing, matched exactly (case-sensitive, untrimmed).
pub const MISSING_TOKENS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn is_missing_token(value: &str) -> bool {
    MISSING_TOKENS.contains(&value)
}

/// Turns every missing token into a null, whether or not it was quoted.
pub fn null_missing_tokens(df: &DataFrame) -> Result<DataFrame> {
    let columns = df
        .get_columns()
        .iter()
        .map(null_tokens_in_column)
        .collect::<Result<Vec<Column>>>()?;
    Ok(DataFrame::new(columns)?)
}

fn null_tokens_in_column(column: &Column) -> Result<Column> {
    let values: Vec<Option<&str>> = column
        .str()?
        .into_iter()
        .map(|value| value.filter(|text| !is_missing_token(text)))
        .collect();
    Ok(Series::new(column.name().clone(), values).into_column())
}

/// Drops rows in which every cell is null.
pub fn drop_blank_rows(df: DataFrame) -> Result<DataFrame> {
    if df.width() == 0 {
        return Ok(df);
    }
    let mut keep = vec![false; df.height()];
    for column in df.get_columns() {
        for (row, value) in column.str()?.into_iter().enumerate() {
            if value.is_some() {
                keep[row] = true;
            }
        }
    }
    let blank = keep.iter().filter(|kept| !**kept).count();
    if blank == 0 {
        return Ok(df);
    }
    tracing::debug!(blank_rows = blank, "dropping blank rows");
    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    Ok(df.filter(&mask)?)
}
