//! Bundled reference lists backing the form dropdowns.

use std::{fs, path::PathBuf};

pub const FLATS_FILE: &str = "flats.json";
pub const EXPENSES_FILE: &str = "standardExpenses.json";

const FLATS_FALLBACK: &[&str] = &["101", "102", "Error Loading"];
const EXPENSES_FALLBACK: &[&str] = &["Maintenance", "Other"];

/// Reads the static flat-number and expense-category lists.
///
/// Any read or parse failure degrades to a fixed fallback so dropdowns are
/// never empty; the failure is logged, never surfaced.
#[derive(Clone)]
pub struct ReferenceData {
    dir: PathBuf,
}

impl ReferenceData {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn flats(&self) -> Vec<String> {
        self.read_list(FLATS_FILE)
            .unwrap_or_else(|| fallback(FLATS_FALLBACK))
    }

    pub fn standard_expenses(&self) -> Vec<String> {
        self.read_list(EXPENSES_FILE)
            .unwrap_or_else(|| fallback(EXPENSES_FALLBACK))
    }

    fn read_list(&self, file: &str) -> Option<Vec<String>> {
        let path = self.dir.join(file);
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!("unreadable reference list {}: {err}", path.display());
                return None;
            }
        };
        match serde_json::from_str(&data) {
            Ok(list) => Some(list),
            Err(err) => {
                tracing::warn!("unparseable reference list {}: {err}", path.display());
                None
            }
        }
    }
}

fn fallback(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|entry| entry.to_string()).collect()
}
