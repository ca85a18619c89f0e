//! Domain model for income and expense records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Income status label counted toward the realized balance.
pub const STATUS_PAID: &str = "paid";
/// Income status label for amounts not yet collected.
pub const STATUS_PENDING: &str = "pending";

/// One income or expense entry.
///
/// The `date` field is a `YYYY-MM-DD` string matched by prefix only; a
/// malformed value is never rejected, it simply matches no filter. The
/// `status` field stays a free string so that legacy capitalization in
/// existing files still matches the case-insensitive helpers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub date: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flat_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expense_name: Option<String>,
    #[serde(default)]
    pub photo_files: Vec<String>,
}

impl Record {
    /// Creates an income record for the given flat.
    pub fn income(
        id: impl Into<String>,
        date: impl Into<String>,
        amount: f64,
        flat_no: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: RecordKind::Income,
            date: date.into(),
            amount,
            flat_no: Some(flat_no.into()),
            status: Some(status.into()),
            expense_name: None,
            photo_files: Vec::new(),
        }
    }

    /// Creates an expense record with an optional receipt photo list.
    pub fn expense(
        id: impl Into<String>,
        date: impl Into<String>,
        amount: f64,
        expense_name: impl Into<String>,
        photo_files: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: RecordKind::Expense,
            date: date.into(),
            amount,
            flat_no: None,
            status: None,
            expense_name: Some(expense_name.into()),
            photo_files,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == RecordKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == RecordKind::Expense
    }

    /// True for income whose status equals "paid", ignoring case.
    pub fn is_paid(&self) -> bool {
        self.is_income() && self.status_is(STATUS_PAID)
    }

    /// True for income whose status equals "pending", ignoring case.
    pub fn is_pending(&self) -> bool {
        self.is_income() && self.status_is(STATUS_PENDING)
    }

    fn status_is(&self, label: &str) -> bool {
        self.status
            .as_deref()
            .is_some_and(|status| status.eq_ignore_ascii_case(label))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Distinguishes money coming in from money going out.
pub enum RecordKind {
    Income,
    Expense,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecordKind::Income => "income",
            RecordKind::Expense => "expense",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_under_the_type_key() {
        let record = Record::income("INC-1", "2025-01-05", 500.0, "101", "paid");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "income");
        assert_eq!(json["flat_no"], "101");
        assert!(json.get("expense_name").is_none());
        assert_eq!(json["photo_files"], serde_json::json!([]));
    }

    #[test]
    fn status_comparison_ignores_case() {
        let mut record = Record::income("INC-1", "2025-01-05", 500.0, "101", "Paid");
        assert!(record.is_paid());
        assert!(!record.is_pending());
        record.status = Some("PENDING".into());
        assert!(record.is_pending());
    }

    #[test]
    fn expense_never_counts_as_paid_or_pending() {
        let mut record = Record::expense("EXP-1", "2025-01-06", 150.0, "Cleaning", Vec::new());
        record.status = Some("paid".into());
        assert!(!record.is_paid());
        assert!(!record.is_pending());
    }
}
