//! Line-oriented CSV splitting for the sheet export.
//!
//! Each physical line is one record. Quotes only toggle whether a comma
//! separates fields; they are never kept and `""` is not unescaped.

/// Splits one line into trimmed fields, keeping commas that sit inside
/// double quotes.
///
/// The last field is always emitted, so a line with `n` unquoted commas
/// yields exactly `n + 1` fields.
#[must_use]
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_owned());
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    fields.push(current.trim().to_owned());
    fields
}

/// Splits the header line on every comma and strips quote characters.
///
/// Only the column count matters to ingestion; names are informational.
#[must_use]
pub fn parse_header(line: &str) -> Vec<String> {
    line.split(',')
        .map(|h| h.trim().replace('"', ""))
        .collect()
}
