//! The persisted aggregate of all maintenance records.

use serde::{Deserialize, Serialize};

use crate::domain::record::Record;

pub const SCHEMA_VERSION: u32 = 1;
pub const APP_ID: &str = "community-maintenance";
pub const DEFAULT_CURRENCY: &str = "INR";

/// Full persisted collection of records plus metadata.
///
/// `records` keeps insertion order; no index or sort is persisted. The whole
/// aggregate is rewritten on every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Database {
    pub schema_version: u32,
    pub app: String,
    pub currency: String,
    #[serde(default)]
    pub records: Vec<Record>,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            app: APP_ID.into(),
            currency: DEFAULT_CURRENCY.into(),
            records: Vec::new(),
        }
    }
}

impl Database {
    /// Appends a record, preserving insertion order.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Replaces the first record with a matching id, keeping its position.
    /// Returns whether a match was found.
    pub fn replace(&mut self, record: Record) -> bool {
        match self.records.iter_mut().find(|entry| entry.id == record.id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Removes the first record with a matching id, returning it if present.
    /// At most one record is removed even when ids are duplicated.
    pub fn remove(&mut self, id: &str) -> Option<Record> {
        let index = self.records.iter().position(|entry| entry.id == id)?;
        Some(self.records.remove(index))
    }
}

/// Totals shown on the dashboard. Pending income is excluded from the
/// balance; it is not yet realized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    pub pending_income: f64,
}
