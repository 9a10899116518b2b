use crate::config::ImportMetadata;
use crate::process::date_parser::normalize_date;
use crate::process::schema::{InputRow, OutputRow};

/// Map one export row onto the import shape. The price is copied verbatim.
pub fn convert_row(row: &InputRow, meta: &ImportMetadata) -> OutputRow {
    OutputRow {
        created_at: normalize_date(&row.date),
        symbol: meta.symbol.clone(),
        name: meta.name.clone(),
        price: row.price.clone(),
        currency: meta.currency.clone(),
        source: meta.source.clone(),
    }
}

/// Convert every row, one output per input, order preserved.
pub fn convert_rows(rows: &[InputRow], meta: &ImportMetadata) -> Vec<OutputRow> {
    rows.iter().map(|row| convert_row(row, meta)).collect()
}
