use crate::process::{
    schema::{OutputRow, OUTPUT_COLUMNS},
    ImportSummary,
};
use anyhow::Result;
use std::io::Write;

/// Column gap in the preview table.
const GAP: &str = "  ";

/// Aligned preview of `rows` with a zero-based index column, cells right-aligned.
///
/// ```text
///    created_at symbol    name   price currency         source
/// 0  2024-03-15  ALI=F  Srebro  25.235      USD  investing_com
/// ```
pub fn render_preview(rows: &[OutputRow]) -> String {
    let index_width = rows.len().saturating_sub(1).to_string().len();

    let mut widths = OUTPUT_COLUMNS.map(str::len);
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row.cells()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&" ".repeat(index_width));
    for (name, w) in OUTPUT_COLUMNS.iter().zip(widths) {
        out.push_str(GAP);
        out.push_str(&format!("{:>w$}", name, w = w));
    }
    out.push('\n');

    for (idx, row) in rows.iter().enumerate() {
        out.push_str(&format!("{:<w$}", idx, w = index_width));
        for (cell, w) in row.cells().iter().zip(widths) {
            out.push_str(GAP);
            out.push_str(&format!("{:>w$}", cell, w = w));
        }
        out.push('\n');
    }
    out
}

/// Operator-facing report: row count, where the file went, then the preview.
pub fn write_report<W: Write>(out: &mut W, summary: &ImportSummary) -> Result<()> {
    writeln!(out, "Converted {} rows", summary.rows_converted)?;
    writeln!(
        out,
        "File {} ready for import into Supabase!",
        summary.output_path.display()
    )?;
    writeln!(out)?;
    writeln!(out, "First {} rows:", summary.preview.len())?;
    write!(out, "{}", render_preview(&summary.preview))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn row(date: &str, price: &str) -> OutputRow {
        OutputRow {
            created_at: date.into(),
            symbol: "ALI=F".into(),
            name: "Srebro".into(),
            price: price.into(),
            currency: "USD".into(),
            source: "investing_com".into(),
        }
    }

    #[test]
    fn preview_is_aligned() {
        let rendered = render_preview(&[row("2024-03-15", "25.235"), row("not-a-date", "1,024.50")]);
        let expected = "\
   created_at  symbol    name     price  currency         source
0  2024-03-15   ALI=F  Srebro    25.235       USD  investing_com
1  not-a-date   ALI=F  Srebro  1,024.50       USD  investing_com
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn empty_preview_is_header_only() {
        let rendered = render_preview(&[]);
        assert_eq!(rendered.lines().count(), 1);
        assert!(rendered.contains("created_at"));
    }

    #[test]
    fn report_lines() -> Result<()> {
        let summary = ImportSummary {
            rows_converted: 1234,
            output_path: PathBuf::from("srebro_import_clean.csv"),
            preview: vec![row("2024-03-15", "25.235")],
        };
        let mut buf = Vec::new();
        write_report(&mut buf, &summary)?;
        let text = String::from_utf8(buf)?;
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Converted 1234 rows");
        assert_eq!(
            lines[1],
            "File srebro_import_clean.csv ready for import into Supabase!"
        );
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "First 1 rows:");
        assert_eq!(lines.len(), 6);
        Ok(())
    }
}
