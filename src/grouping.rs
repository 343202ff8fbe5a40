use std::cmp::Ordering;

use crate::models::Record;

/// Group key for rows with a blank account name.
pub const UNGROUPED: &str = "Unknown";

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub key: String,
    /// Members' positions in the filtered sequence, in display order.
    pub indices: Vec<usize>,
}

/// Account display order: keys that both parse entirely as integers
/// compare numerically; everything else compares case-insensitively,
/// with the raw strings as the tiebreak.
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a
            .to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b)),
    }
}

/// Partition rows by a grouping column, preserving within-group relative
/// order, then order the groups for display.
pub fn partition(rows: &[Record], key_col: &str) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    for (i, row) in rows.iter().enumerate() {
        let raw = row.get(key_col).trim();
        let key = if raw.is_empty() { UNGROUPED } else { raw };
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.indices.push(i),
            None => groups.push(Group {
                key: key.to_string(),
                indices: vec![i],
            }),
        }
    }
    groups.sort_by(|a, b| compare_keys(&a.key, &b.key));
    groups
}

/// Stable within-group reorder by a numeric order column. Rows without a
/// parseable value sort after rows with one; ties keep original order.
pub fn order_by_posting(rows: &[Record], groups: &mut [Group], order_col: &str) {
    for group in groups.iter_mut() {
        group
            .indices
            .sort_by_key(|&i| rows[i].get(order_col).trim().parse::<i64>().unwrap_or(i64::MAX));
    }
}

/// Dense cross-group numbering (1, 2, 3, ...) in display order: the VA
/// posts videos in the order the board lists them, not per account.
pub fn video_numbers(groups: &[Group]) -> Vec<Vec<u32>> {
    let mut counter = 0u32;
    groups
        .iter()
        .map(|group| {
            group
                .indices
                .iter()
                .map(|_| {
                    counter += 1;
                    counter
                })
                .collect()
        })
        .collect()
}
