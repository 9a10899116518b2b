use crate::process::utils::clean_header;
use anyhow::{anyhow, Result};
use csv::StringRecord;
use serde::Serialize;

/// Input header holding the free-text date.
pub const DATE_COLUMN: &str = "Date";
/// Input header holding the price. Some exports name it `Close`; only `Price` is read.
pub const PRICE_COLUMN: &str = "Price";

/// Output header, in write order. Must match the field order of [`OutputRow`].
pub const OUTPUT_COLUMNS: [&str; 6] = ["created_at", "symbol", "name", "price", "currency", "source"];

/// One data row of the export, reduced to the columns we read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRow {
    pub date: String,
    pub price: String,
}

/// One row of the import file. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRow {
    pub created_at: String,
    pub symbol: String,
    pub name: String,
    pub price: String,
    pub currency: String,
    pub source: String,
}

impl OutputRow {
    /// Cell values in [`OUTPUT_COLUMNS`] order.
    pub fn cells(&self) -> [&str; 6] {
        [
            self.created_at.as_str(),
            self.symbol.as_str(),
            self.name.as_str(),
            self.price.as_str(),
            self.currency.as_str(),
            self.source.as_str(),
        ]
    }
}

/// Positions of the columns we read, resolved from the export header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputColumns {
    pub date: usize,
    pub price: usize,
}

impl InputColumns {
    /// Locate `Date` and `Price` by exact name. Extra columns and any column
    /// order are fine; a missing column is an error.
    pub fn resolve(headers: &StringRecord) -> Result<Self> {
        let find = |wanted: &str| {
            headers
                .iter()
                .position(|h| clean_header(h) == wanted)
                .ok_or_else(|| {
                    anyhow!(
                        "missing required column {:?} (found: {:?})",
                        wanted,
                        headers.iter().map(clean_header).collect::<Vec<_>>()
                    )
                })
        };
        Ok(Self {
            date: find(DATE_COLUMN)?,
            price: find(PRICE_COLUMN)?,
        })
    }

    /// Pull the two cells out of a data record. A record too short to reach a
    /// column yields an empty cell for it.
    pub fn extract(&self, record: &StringRecord) -> InputRow {
        let cell = |idx: usize| record.get(idx).unwrap_or_default().to_string();
        InputRow {
            date: cell(self.date),
            price: cell(self.price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_any_order_with_extras() -> Result<()> {
        let headers = StringRecord::from(vec!["Open", "Price", "High", "\u{feff}Date", "Vol."]);
        let cols = InputColumns::resolve(&headers)?;
        assert_eq!(cols, InputColumns { date: 3, price: 1 });

        let record = StringRecord::from(vec!["29.10", "29.55", "29.80", "03/15/2024", "1.2K"]);
        assert_eq!(
            cols.extract(&record),
            InputRow {
                date: "03/15/2024".into(),
                price: "29.55".into(),
            }
        );
        Ok(())
    }

    #[test]
    fn short_record_gives_empty_cells() -> Result<()> {
        let headers = StringRecord::from(vec!["Date", "Open", "Price"]);
        let cols = InputColumns::resolve(&headers)?;
        let row = cols.extract(&StringRecord::from(vec!["03/15/2024"]));
        assert_eq!(row.date, "03/15/2024");
        assert_eq!(row.price, "");
        Ok(())
    }

    #[test]
    fn resolve_is_case_sensitive() {
        let headers = StringRecord::from(vec!["date", "Price"]);
        let err = InputColumns::resolve(&headers).unwrap_err();
        assert!(err.to_string().contains("\"Date\""), "{}", err);
    }

    #[test]
    fn close_is_not_price() {
        let headers = StringRecord::from(vec!["Date", "Close"]);
        let err = InputColumns::resolve(&headers).unwrap_err();
        assert!(err.to_string().contains("\"Price\""), "{}", err);
    }

    #[test]
    fn cells_follow_output_columns() {
        let row = OutputRow {
            created_at: "2024-03-15".into(),
            symbol: "ALI=F".into(),
            name: "Srebro".into(),
            price: "24.50".into(),
            currency: "USD".into(),
            source: "investing_com".into(),
        };
        assert_eq!(
            row.cells(),
            ["2024-03-15", "ALI=F", "Srebro", "24.50", "USD", "investing_com"]
        );
    }
}
