use crate::process::schema::{OutputRow, OUTPUT_COLUMNS};
use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::{fs::File, io::Write, path::Path};
use tracing::info;

/// Write the header plus every row to `out`. The header is written even when
/// there are no rows.
pub fn write_rows<W: Write>(out: W, rows: &[OutputRow]) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(out);
    wtr.write_record(OUTPUT_COLUMNS)
        .context("writing import header")?;
    for (idx, row) in rows.iter().enumerate() {
        wtr.serialize(row)
            .with_context(|| format!("writing import row {}", idx))?;
    }
    wtr.flush().context("flushing import writer")?;
    Ok(())
}

/// Create (or truncate) `path` and write the import CSV into it.
#[tracing::instrument(level = "info", skip(path, rows), fields(path = %path.display(), rows = rows.len()))]
pub fn write_import_csv(path: &Path, rows: &[OutputRow]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating output file {:?}", path))?;
    write_rows(file, rows).with_context(|| format!("writing {:?}", path))?;
    info!("wrote import file");
    Ok(())
}
