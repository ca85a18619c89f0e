//! Yearly CSV report assembly and export.

use std::path::PathBuf;

use chrono::Month;

use crate::{
    domain::{Database, Record},
    storage::{RecordStore, Result},
};

// Dashes, not `=`: spreadsheet importers read a leading `=` as a formula.
const DIVIDER: &str = "------------------------------";

pub struct ReportService;

impl ReportService {
    /// Builds the multi-section yearly CSV text: a yearly summary block
    /// followed by one section per calendar month that has records. Months
    /// without records are omitted entirely.
    pub fn yearly_report(db: &Database, year: &str) -> String {
        let mut out = String::new();

        let year_records: Vec<&Record> = db
            .records
            .iter()
            .filter(|record| record.date.starts_with(year))
            .collect();
        let (paid, expense, pending) = totals(&year_records);

        out.push_str(&format!("YEARLY SUMMARY REPORT - {year}\n"));
        out.push_str("Total Income (Paid),Total Expense,Total Pending,Final Balance\n");
        out.push_str(&format!(
            "{},{},{},{}\n",
            format_amount(paid),
            format_amount(expense),
            format_amount(pending),
            format_amount(paid - expense)
        ));

        for month in 1..=12u8 {
            let prefix = format!("{year}-{month:02}");
            let month_records: Vec<&Record> = db
                .records
                .iter()
                .filter(|record| record.date.starts_with(&prefix))
                .collect();
            if month_records.is_empty() {
                continue;
            }
            push_month_section(&mut out, &month_records, month, year);
        }

        out
    }

    /// Loads the database, generates the report for `year`, and writes it to
    /// `Maintenance_Report_<year>.csv` in the store directory, replacing any
    /// prior file. Returns the path for the caller to share.
    pub fn export_yearly(store: &RecordStore, year: &str) -> Result<PathBuf> {
        let db = store.load();
        let report = Self::yearly_report(&db, year);
        store.write_report(year, &report)
    }
}

fn push_month_section(out: &mut String, records: &[&Record], month: u8, year: &str) {
    let (paid, expense, pending) = totals(records);

    out.push('\n');
    out.push_str(DIVIDER);
    out.push('\n');
    out.push_str(&format!("MONTHLY REPORT: {} {}\n", month_name(month), year));
    out.push_str(DIVIDER);
    out.push('\n');
    out.push('\n');

    out.push_str("PENDING INCOME\n");
    out.push_str("Flat,Amount\n");
    let mut any = false;
    for record in records.iter().filter(|record| record.is_pending()) {
        out.push_str(&format!(
            "{},{}\n",
            record.flat_no.as_deref().unwrap_or("-"),
            format_amount(record.amount)
        ));
        any = true;
    }
    if !any {
        out.push_str("None,0\n");
    }
    out.push('\n');

    out.push_str("MONTHLY EXPENSES\n");
    out.push_str("Category,Amount\n");
    let mut any = false;
    for record in records.iter().filter(|record| record.is_expense()) {
        out.push_str(&format!(
            "{},{}\n",
            record.expense_name.as_deref().unwrap_or("-"),
            format_amount(record.amount)
        ));
        any = true;
    }
    if !any {
        out.push_str("None,0\n");
    }
    out.push('\n');

    out.push_str("MONTH SUMMARY\n");
    out.push_str("Total Income (Paid),Total Expense,Total Pending\n");
    out.push_str(&format!(
        "{},{},{}\n",
        format_amount(paid),
        format_amount(expense),
        format_amount(pending)
    ));
}

fn totals(records: &[&Record]) -> (f64, f64, f64) {
    let paid = records
        .iter()
        .filter(|record| record.is_paid())
        .map(|record| record.amount)
        .sum();
    let expense = records
        .iter()
        .filter(|record| record.is_expense())
        .map(|record| record.amount)
        .sum();
    let pending = records
        .iter()
        .filter(|record| record.is_pending())
        .map(|record| record.amount)
        .sum();
    (paid, expense, pending)
}

fn month_name(month: u8) -> &'static str {
    Month::try_from(month)
        .map(|month| month.name())
        .unwrap_or("Unknown")
}

fn format_amount(value: f64) -> String {
    // An empty f64 sum yields -0.0, which must not render as "-0".
    if value == 0.0 {
        "0".into()
    } else if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Record;

    fn sample_database() -> Database {
        let mut db = Database::default();
        db.push(Record::income("A", "2025-03-05", 500.0, "101", "paid"));
        db.push(Record::income("B", "2025-03-10", 200.0, "102", "pending"));
        db.push(Record::expense("C", "2025-03-12", 150.0, "Cleaning", Vec::new()));
        db
    }

    #[test]
    fn yearly_header_carries_the_four_totals() {
        let report = ReportService::yearly_report(&sample_database(), "2025");
        let mut lines = report.lines();
        assert_eq!(lines.next(), Some("YEARLY SUMMARY REPORT - 2025"));
        assert_eq!(
            lines.next(),
            Some("Total Income (Paid),Total Expense,Total Pending,Final Balance")
        );
        assert_eq!(lines.next(), Some("500,150,200,350"));
    }

    #[test]
    fn march_section_matches_worked_example() {
        let report = ReportService::yearly_report(&sample_database(), "2025");
        assert!(report.contains("MONTHLY REPORT: March 2025"));
        assert!(report.contains("PENDING INCOME\nFlat,Amount\n102,200\n"));
        assert!(report.contains("MONTHLY EXPENSES\nCategory,Amount\nCleaning,150\n"));
        assert!(report.contains(
            "MONTH SUMMARY\nTotal Income (Paid),Total Expense,Total Pending\n500,150,200\n"
        ));
    }

    #[test]
    fn empty_tables_emit_a_none_row() {
        let mut db = Database::default();
        db.push(Record::income("A", "2025-06-01", 400.0, "101", "paid"));
        let report = ReportService::yearly_report(&db, "2025");
        assert!(report.contains("PENDING INCOME\nFlat,Amount\nNone,0\n"));
        assert!(report.contains("MONTHLY EXPENSES\nCategory,Amount\nNone,0\n"));
    }

    #[test]
    fn months_without_records_are_omitted() {
        let report = ReportService::yearly_report(&sample_database(), "2025");
        assert!(!report.contains("MONTHLY REPORT: February"));
        assert!(!report.contains("MONTHLY REPORT: April"));
    }

    #[test]
    fn records_from_other_years_do_not_leak_in() {
        let mut db = sample_database();
        db.push(Record::income("D", "2024-03-01", 900.0, "103", "paid"));
        let report = ReportService::yearly_report(&db, "2025");
        assert!(report.starts_with("YEARLY SUMMARY REPORT - 2025\n"));
        assert!(report.contains("500,150,200,350"));
        assert!(!report.contains("900"));
    }

    #[test]
    fn dividers_use_dashes_not_equals() {
        let report = ReportService::yearly_report(&sample_database(), "2025");
        assert!(report.contains(DIVIDER));
        assert!(!report.contains("==="));
    }

    #[test]
    fn zero_sums_render_without_a_sign() {
        let mut db = Database::default();
        db.push(Record::income("A", "2025-07-01", 300.0, "103", "paid"));
        db.push(Record::expense("B", "2025-07-15", 80.0, "Gardening", Vec::new()));
        let report = ReportService::yearly_report(&db, "2025");
        assert!(!report.contains("-0"), "unexpected signed zero: {report}");
        assert!(report.contains(
            "MONTH SUMMARY\nTotal Income (Paid),Total Expense,Total Pending\n300,80,0\n"
        ));

        let empty = ReportService::yearly_report(&Database::default(), "2031");
        assert!(empty.ends_with("0,0,0,0\n"), "unexpected totals: {empty}");
    }

    #[test]
    fn fractional_amounts_keep_their_decimals() {
        let mut db = Database::default();
        db.push(Record::expense("E", "2025-02-02", 99.5, "Repairs", Vec::new()));
        let report = ReportService::yearly_report(&db, "2025");
        assert!(report.contains("Repairs,99.5\n"));
    }
}
