/// UTF-8 byte order mark, as written at the start of Investing.com exports.
pub const BOM: char = '\u{feff}';

/// Trim whitespace + strip outer quotes if present, then trim again inside the
/// quotes. Used only to prepare a date for parsing, so `" 03/15/2024 "` still
/// parses; unparseable cells are written back untouched, never cleaned.
pub fn clean_str(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('"') && trimmed.ends_with('"') && trimmed.len() >= 2 {
        trimmed[1..trimmed.len() - 1].trim().to_string()
    } else {
        trimmed.to_string()
    }
}

/// Header cell as written in the file, minus a leading BOM. Nothing else is
/// normalized: header matching is exact.
pub fn clean_header(raw: &str) -> &str {
    raw.trim_start_matches(BOM)
}
