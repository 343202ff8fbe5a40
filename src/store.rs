use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::filters::normalize_subject;

/// Marks older than this many days are swept.
pub const RETENTION_DAYS: i64 = 7;

const KEY_SEP: char = ':';

/// The one-shot "all uploads done" record for a (subject, date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Completion {
    pub completed_at: String,
    pub confirmed_by: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct MarkFile {
    #[serde(default)]
    flags: BTreeMap<String, bool>,
    #[serde(default)]
    completions: BTreeMap<String, Completion>,
}

// ---------------------------------------------------------------------------
// Key constructors
// ---------------------------------------------------------------------------

fn subject_segment(subject: Option<&str>) -> String {
    let normalized = subject.map(normalize_subject).unwrap_or_default();
    if normalized.is_empty() {
        "unknown".to_string()
    } else {
        normalized
    }
}

pub fn filmed_key(subject: Option<&str>, date: &str, record_key: &str) -> String {
    format!("filmed:{}:{date}:{record_key}", subject_segment(subject))
}

pub fn posted_key(subject: Option<&str>, date: &str, record_key: &str) -> String {
    format!("posted:{}:{date}:{record_key}", subject_segment(subject))
}

pub fn complete_key(subject: Option<&str>, date: &str) -> String {
    format!("complete:{}:{date}", subject_segment(subject))
}

/// Read marks are keyed by the update's identity, not a civil date, so
/// the sweep leaves them alone.
pub fn read_key(subject: Option<&str>, title: &str, date_posted: &str) -> String {
    let slug: String = title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .take(30)
        .collect();
    let date = if date_posted.is_empty() { "nodate" } else { date_posted };
    format!("read:{}:{slug}:{date}", subject_segment(subject))
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Per-device mark storage: one JSON file of deterministic string keys.
/// Storage failures degrade to "nothing marked" so the board always
/// renders; a full disk loses marks, not the day's assignments.
pub struct MarkStore {
    path: PathBuf,
    file: MarkFile,
}

impl MarkStore {
    pub fn open(path: &Path) -> Self {
        let file = match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "marks file unreadable, starting empty");
                MarkFile::default()
            }),
            Err(_) => MarkFile::default(),
        };
        Self {
            path: path.to_path_buf(),
            file,
        }
    }

    pub fn is_set(&self, key: &str) -> bool {
        self.file.flags.get(key).copied().unwrap_or(false)
    }

    /// Last write wins per key; clearing removes the entry entirely.
    pub fn set(&mut self, key: &str, on: bool) {
        if on {
            self.file.flags.insert(key.to_string(), true);
        } else {
            self.file.flags.remove(key);
        }
    }

    pub fn completion(&self, key: &str) -> Option<&Completion> {
        self.file.completions.get(key)
    }

    pub fn set_completion(&mut self, key: &str, completion: Completion) {
        self.file.completions.insert(key.to_string(), completion);
    }

    pub fn flag_count(&self) -> usize {
        self.file.flags.len()
    }

    pub fn completion_count(&self) -> usize {
        self.file.completions.len()
    }

    /// Drop filmed/posted/complete marks dated before `cutoff`. The civil
    /// date rides inside each key, so this is a string comparison on the
    /// encoded segment; read marks carry no date and are kept.
    pub fn sweep(&mut self, cutoff: &str) -> usize {
        fn stale(key: &str, cutoff: &str) -> bool {
            let mut parts = key.split(KEY_SEP);
            match parts.next() {
                Some("filmed") | Some("posted") | Some("complete") => {
                    parts.nth(1).is_some_and(|date| date < cutoff)
                }
                _ => false,
            }
        }
        let before = self.file.flags.len() + self.file.completions.len();
        self.file.flags.retain(|key, _| !stale(key, cutoff));
        self.file.completions.retain(|key, _| !stale(key, cutoff));
        let swept = before - (self.file.flags.len() + self.file.completions.len());
        if swept > 0 {
            tracing::debug!(swept, cutoff, "swept expired marks");
        }
        swept
    }

    /// Best effort: write failures are logged and swallowed.
    pub fn save(&self) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!(path = %self.path.display(), error = %e, "could not create marks dir");
                return;
            }
        }
        match serde_json::to_string_pretty(&self.file) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&self.path, format!("{json}\n")) {
                    tracing::warn!(path = %self.path.display(), error = %e, "could not write marks file");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not serialize marks");
            }
        }
    }
}
