use crate::models::{Record, Table};

// ---------------------------------------------------------------------------
// Tab specs
// ---------------------------------------------------------------------------

/// How to recognize and validate one published tab.
pub struct TableSpec {
    /// Column names that identify the header row; all must appear in it.
    pub markers: &'static [&'static str],
    /// Columns a data row must fill to enter the table.
    pub required: &'static [&'static str],
}

pub const ASSIGNMENTS: TableSpec = TableSpec {
    markers: &["date_pst"],
    required: &["date_pst", "creator_id"],
};

pub const VA_TASKS: TableSpec = TableSpec {
    markers: &["va_id"],
    required: &["date_pst", "va_id"],
};

pub const HUB_RESOURCES: TableSpec = TableSpec {
    markers: &["type", "title"],
    required: &["type", "title"],
};

// ---------------------------------------------------------------------------
// Row tokenizer
// ---------------------------------------------------------------------------

/// Split one record's text into fields on commas, except inside quotes.
/// A quote character toggles the in-quotes state and is dropped from the
/// output; consecutive quotes get no escape treatment. Unbalanced quotes
/// leave the state open and the rest of the line becomes one field.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

// ---------------------------------------------------------------------------
// Record splitter
// ---------------------------------------------------------------------------

/// Split raw CSV text into logical records. A newline inside an open
/// quote belongs to the record; a \r\n pair outside quotes is one
/// boundary, not two. Records that trim to nothing are dropped.
pub fn split_records(text: &str) -> Vec<String> {
    let mut records = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            '\r' | '\n' if !in_quotes => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                let trimmed = current.trim();
                if !trimmed.is_empty() {
                    records.push(trimmed.to_string());
                }
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        records.push(trimmed.to_string());
    }
    records
}

// ---------------------------------------------------------------------------
// Header locator + table builder
// ---------------------------------------------------------------------------

/// Index of the header record: the first whose lower-cased text contains
/// every marker column. The tabs prepend title/metadata rows when
/// published, so the header cannot be assumed to sit at index 0.
pub fn find_header(records: &[String], markers: &[&str]) -> Option<usize> {
    records.iter().position(|record| {
        let lower = record.to_lowercase();
        markers.iter().all(|marker| lower.contains(marker))
    })
}

fn clean_value(raw: &str) -> String {
    let mut value = raw.trim();
    value = value.strip_prefix('"').unwrap_or(value);
    value = value.strip_suffix('"').unwrap_or(value);
    value
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n' | '\t'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Build the ordered record sequence for one tab. Malformed input
/// degrades to an empty table rather than an error: a half-published
/// sheet renders as "no data", it does not take the board down.
pub fn parse_table(text: &str, spec: &TableSpec) -> Table {
    let records = split_records(text);
    let Some(header_idx) = find_header(&records, spec.markers) else {
        tracing::warn!(markers = ?spec.markers, "header row not found, treating tab as empty");
        return Table::new();
    };

    let keys: Vec<String> = tokenize_line(&records[header_idx])
        .iter()
        .map(|h| h.to_lowercase().replace(['"', '\''], "").trim().to_string())
        .collect();

    if !spec.required.iter().all(|req| keys.iter().any(|k| k == req)) {
        tracing::warn!(required = ?spec.required, "required columns missing, treating tab as empty");
        return Table::new();
    }

    let mut table = Table::new();
    for line in &records[header_idx + 1..] {
        // Sheets with trailing formatting publish rows of bare commas.
        if line.replace(',', "").trim().is_empty() {
            continue;
        }
        let values = tokenize_line(line);
        let mut record = Record::default();
        for (i, key) in keys.iter().enumerate() {
            let value = values.get(i).map(String::as_str).unwrap_or("");
            record.insert(key.clone(), clean_value(value));
        }
        if spec.required.iter().any(|req| record.get(req).is_empty()) {
            continue;
        }
        table.push(record);
    }
    tracing::debug!(rows = table.len(), header_row = header_idx, "parsed tab");
    table
}
