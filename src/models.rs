use std::collections::BTreeMap;

use sha2::{Digest, Sha256};

// Column names shared by the published sheet tabs.
pub const COL_DATE: &str = "date_pst";
pub const COL_CREATOR_ID: &str = "creator_id";
pub const COL_VA_ID: &str = "va_id";
pub const COL_ACCOUNT: &str = "account_name";
pub const COL_PRODUCT: &str = "product_name";
pub const COL_VIDEO_STYLE: &str = "video_style";
pub const COL_SCRIPT_NAME: &str = "script_name";
pub const COL_CREATOR_NAME: &str = "creator_name";
pub const COL_VA_NAME: &str = "va_name";
pub const COL_ASSIGNMENT_ORDER: &str = "assignment_order";
pub const COL_POSTING_ORDER: &str = "posting_order";
pub const COL_CAPTION: &str = "caption_text";
pub const COL_PRODUCT_LINK: &str = "product_link";
pub const COL_VIDEO_FILE_LINK: &str = "video_file_link";
pub const COL_POSTING_DATE: &str = "posting_date";
pub const COL_VA_STATUS: &str = "va_status";
pub const COL_TYPE: &str = "type";
pub const COL_TITLE: &str = "title";
pub const COL_CONTENT: &str = "content";
pub const COL_LINK: &str = "link";
pub const COL_DATE_POSTED: &str = "date_posted";

/// One logical row of sheet data: lower-cased column name -> cleaned value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    /// Duplicate column names overwrite: last key wins.
    pub fn insert(&mut self, key: String, value: String) {
        self.fields.insert(key, value);
    }

    /// Missing columns read as empty, matching the sheet's sparse rows.
    pub fn get(&self, key: &str) -> &str {
        self.fields.get(key).map(String::as_str).unwrap_or("")
    }
}

pub type Table = Vec<Record>;

/// Stable identity for a record, independent of its position in any
/// filtered sequence. Marks persisted under this key survive a refetch
/// that reorders or extends the day's rows, which an index-based key
/// would silently misattribute.
pub fn record_key(record: &Record, subject_col: &str, order_col: &str) -> String {
    let mut hasher = Sha256::new();
    for part in [
        record.get(COL_DATE),
        record.get(subject_col),
        record.get(COL_PRODUCT),
        record.get(order_col),
    ] {
        hasher.update(part.as_bytes());
        hasher.update([0u8]);
    }
    hex::encode(&hasher.finalize()[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        let mut r = Record::default();
        for (k, v) in pairs {
            r.insert(k.to_string(), v.to_string());
        }
        r
    }

    #[test]
    fn test_get_missing_column_is_empty() {
        let r = record(&[("date_pst", "2025-03-01")]);
        assert_eq!(r.get("creator_id"), "");
        assert_eq!(r.get("date_pst"), "2025-03-01");
    }

    #[test]
    fn test_record_key_is_deterministic() {
        let a = record(&[
            ("date_pst", "2025-03-01"),
            ("creator_id", "alice"),
            ("product_name", "Glow Serum"),
            ("assignment_order", "2"),
        ]);
        let b = a.clone();
        assert_eq!(
            record_key(&a, COL_CREATOR_ID, COL_ASSIGNMENT_ORDER),
            record_key(&b, COL_CREATOR_ID, COL_ASSIGNMENT_ORDER)
        );
    }

    #[test]
    fn test_record_key_varies_by_identity_fields() {
        let a = record(&[
            ("date_pst", "2025-03-01"),
            ("creator_id", "alice"),
            ("product_name", "Glow Serum"),
            ("assignment_order", "1"),
        ]);
        let mut b = a.clone();
        b.insert("assignment_order".to_string(), "2".to_string());
        assert_ne!(
            record_key(&a, COL_CREATOR_ID, COL_ASSIGNMENT_ORDER),
            record_key(&b, COL_CREATOR_ID, COL_ASSIGNMENT_ORDER)
        );
    }

    #[test]
    fn test_record_key_field_boundaries_matter() {
        // "ab" + "c" must not collide with "a" + "bc".
        let a = record(&[("date_pst", "ab"), ("creator_id", "c")]);
        let b = record(&[("date_pst", "a"), ("creator_id", "bc")]);
        assert_ne!(
            record_key(&a, COL_CREATOR_ID, COL_ASSIGNMENT_ORDER),
            record_key(&b, COL_CREATOR_ID, COL_ASSIGNMENT_ORDER)
        );
    }
}
