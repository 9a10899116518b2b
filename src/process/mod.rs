// src/process/mod.rs
pub mod convert;
pub mod date_parser;
pub mod schema;
pub mod utils;
pub mod write;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::config::ImportConfig;
use crate::process::{
    convert::convert_rows,
    date_parser::parse_date,
    schema::{InputColumns, InputRow, OutputRow},
    write::write_import_csv,
};

/// What a finished run hands back to the caller for reporting.
#[derive(Debug, Clone)]
pub struct ImportSummary {
    pub rows_converted: usize,
    pub output_path: PathBuf,
    /// The first `preview_rows` output rows.
    pub preview: Vec<OutputRow>,
}

/// Read an export from any reader: header row, then one `InputRow` per record.
/// Fails on a missing `Date`/`Price` column or a malformed record. Records
/// shorter or longer than the header are kept.
pub fn read_price_rows<R: Read>(reader: R) -> Result<Vec<InputRow>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // ragged rows still count as rows
        .from_reader(reader);

    let headers = rdr.headers().context("reading CSV header")?.clone();
    let columns = InputColumns::resolve(&headers)?;

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("CSV parse error at record {}", idx))?;
        rows.push(columns.extract(&record));
    }
    Ok(rows)
}

/// Load the whole export at `path` into memory.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.display()))]
pub fn load_price_table(path: &Path) -> Result<Vec<InputRow>> {
    let file = File::open(path).with_context(|| format!("Failed to open input file: {:?}", path))?;
    let rows = read_price_rows(file).with_context(|| format!("Failed to read {:?}", path))?;
    info!(rows = rows.len(), "loaded export");
    Ok(rows)
}

/// Read → convert → write. Date failures never abort the run; anything else does.
pub fn run_import(config: &ImportConfig) -> Result<ImportSummary> {
    let input = load_price_table(&config.input_path)?;

    let fallbacks = input.iter().filter(|r| parse_date(&r.date).is_none()).count();
    if fallbacks > 0 {
        debug!(fallbacks, "dates left as-is");
    }

    let output = convert_rows(&input, &config.metadata);
    write_import_csv(&config.output_path, &output)?;

    Ok(ImportSummary {
        rows_converted: output.len(),
        output_path: config.output_path.clone(),
        preview: output.iter().take(config.preview_rows).cloned().collect(),
    })
}
