use std::path::PathBuf;

/// Export file as downloaded from Investing.com.
pub const DEFAULT_INPUT: &str = "Silver Futures Historical Data(2).csv";
/// File handed to the Supabase CSV importer.
pub const DEFAULT_OUTPUT: &str = "srebro_import_clean.csv";
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Constant columns stamped onto every output row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportMetadata {
    pub symbol: String,
    pub name: String,
    pub currency: String,
    pub source: String,
}

impl Default for ImportMetadata {
    fn default() -> Self {
        Self {
            symbol: "ALI=F".into(),
            name: "Srebro".into(),
            currency: "USD".into(),
            source: "investing_com".into(),
        }
    }
}

/// Everything one import run needs. There are no flags; edit the defaults.
#[derive(Debug, Clone)]
pub struct ImportConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub metadata: ImportMetadata,
    pub preview_rows: usize,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            metadata: ImportMetadata::default(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}
