//! Parsing of keyword lists uploaded as plain text or CSV.
//!
//! Each line is read as-is (quotes are not CSV-escapes here) and only the text
//! before the first comma is kept, with surrounding quotes stripped. A first row that looks like a header
//! (`keyword`, `query`, `parola chiave`, `kw`) is dropped.

/// Lowercased labels recognised as a header row.
pub const HEADER_LABELS: [&str; 4] = ["keyword", "query", "parola chiave", "kw"];

/// Extract keywords from the text of an uploaded file.
pub fn parse_keyword_csv(text: &str) -> Vec<String> {
    // Strip UTF-8 BOM if present
    let text = text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut keywords: Vec<String> = reader
        .records()
        .filter_map(Result::ok)
        .filter_map(|record| record.get(0).map(clean_cell))
        .filter(|value| !value.is_empty())
        .collect();

    if keywords
        .first()
        .is_some_and(|first| is_header_label(first))
    {
        keywords.remove(0);
    }
    keywords
}

fn clean_cell(cell: &str) -> String {
    cell.trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim()
        .to_string()
}

fn is_header_label(value: &str) -> bool {
    let lowered = value.to_lowercase();
    HEADER_LABELS.contains(&lowered.as_str())
}
