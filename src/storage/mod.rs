pub mod json_store;
pub mod reference;

use crate::errors::StoreError;

pub type Result<T> = std::result::Result<T, StoreError>;

pub use json_store::{FileMeta, RecordStore, DB_FILE};
pub use reference::{ReferenceData, EXPENSES_FILE, FLATS_FILE};
