use maintenance_core::domain::Record;
use maintenance_core::storage::RecordStore;
use tempfile::TempDir;

pub fn temp_store() -> (RecordStore, TempDir) {
    let temp = TempDir::new().expect("temp dir");
    let store = RecordStore::new(temp.path().to_path_buf()).expect("record store");
    (store, temp)
}

pub fn income(id: &str, date: &str, amount: f64, flat: &str, status: &str) -> Record {
    Record::income(id, date, amount, flat, status)
}

pub fn expense(id: &str, date: &str, amount: f64, name: &str) -> Record {
    Record::expense(id, date, amount, name, Vec::new())
}
