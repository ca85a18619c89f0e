//! Dashboard totals over the full record set.

use crate::domain::{DashboardSummary, Database};

pub struct SummaryService;

impl SummaryService {
    /// Computes the dashboard totals. Only paid income counts toward the
    /// balance; pending income is reported separately.
    pub fn summarize(db: &Database) -> DashboardSummary {
        let total_income: f64 = db
            .records
            .iter()
            .filter(|record| record.is_paid())
            .map(|record| record.amount)
            .sum();
        let pending_income: f64 = db
            .records
            .iter()
            .filter(|record| record.is_pending())
            .map(|record| record.amount)
            .sum();
        let total_expense: f64 = db
            .records
            .iter()
            .filter(|record| record.is_expense())
            .map(|record| record.amount)
            .sum();

        DashboardSummary {
            total_income,
            total_expense,
            balance: total_income - total_expense,
            pending_income,
        }
    }
}
