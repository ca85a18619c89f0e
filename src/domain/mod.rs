pub mod database;
pub mod record;

pub use database::{DashboardSummary, Database, APP_ID, DEFAULT_CURRENCY, SCHEMA_VERSION};
pub use record::{Record, RecordKind};
