use chrono::{Days, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::models::Record;

/// Current civil date in `tz`, shifted by whole calendar days, formatted
/// as zero-padded YYYY-MM-DD. The shift happens on the civil date itself,
/// so a daylight-saving transition cannot move the result by an hour's
/// worth of offset arithmetic.
pub fn civil_date(tz: Tz, offset_days: i64) -> String {
    let today = Utc::now().with_timezone(&tz).date_naive();
    format_date(shift(today, offset_days))
}

/// Shift an already-formatted civil date by whole days. Unparseable input
/// passes through unchanged.
pub fn shift_date(date: &str, days: i64) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => format_date(shift(d, days)),
        Err(_) => date.to_string(),
    }
}

fn shift(date: NaiveDate, days: i64) -> NaiveDate {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Rows whose date column equals `target` exactly. No parsing: the sheet
/// publishes YYYY-MM-DD strings, and string equality avoids ever pulling
/// a stored date through a time zone.
pub fn by_date(rows: &[Record], date_col: &str, target: &str) -> Vec<Record> {
    rows.iter()
        .filter(|row| row.get(date_col) == target)
        .cloned()
        .collect()
}

pub fn normalize_subject(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Rows whose identifier column matches `subject` after trimming and
/// case-folding both sides. A blank or absent subject passes every row.
pub fn by_subject(rows: &[Record], id_col: &str, subject: Option<&str>) -> Vec<Record> {
    let target = subject.map(normalize_subject).unwrap_or_default();
    if target.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| normalize_subject(row.get(id_col)) == target)
        .cloned()
        .collect()
}
