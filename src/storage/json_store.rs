//! Filesystem-backed JSON persistence for maintenance records.

use chrono::{DateTime, Utc};
use std::{
    cmp::Reverse,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    core::utils::app_data_dir,
    domain::{Database, Record},
    storage::reference::ReferenceData,
};

use super::Result;

pub const DB_FILE: &str = "maintenance.json";
const TMP_SUFFIX: &str = "tmp";
const REPORT_PREFIX: &str = "Maintenance_Report_";

/// Persistence service for the record database and report files.
///
/// One instance per process/session, rooted at an injected directory so tests
/// can run against an isolated temp dir. Every mutation is a full
/// load-modify-persist of the database file; interleaved writers can still
/// lose updates, which is accepted for a single-device tool.
#[derive(Clone)]
pub struct RecordStore {
    root: PathBuf,
}

impl RecordStore {
    pub fn new(root: PathBuf) -> Result<Self> {
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(app_data_dir())
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn db_path(&self) -> PathBuf {
        self.root.join(DB_FILE)
    }

    pub fn report_path(&self, year: &str) -> PathBuf {
        self.root.join(format!("{}{}.csv", REPORT_PREFIX, year))
    }

    /// Returns the reference-data loader rooted at this store's directory.
    pub fn reference_data(&self) -> ReferenceData {
        ReferenceData::new(self.root.clone())
    }

    /// Loads the database. A missing, unreadable, or unparseable file yields
    /// a fresh empty database; the failure is logged, never surfaced.
    pub fn load(&self) -> Database {
        let path = self.db_path();
        if !path.exists() {
            return Database::default();
        }
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!("unreadable database {}: {err}", path.display());
                return Database::default();
            }
        };
        match serde_json::from_str(&data) {
            Ok(db) => db,
            Err(err) => {
                tracing::warn!("unparseable database {}: {err}", path.display());
                Database::default()
            }
        }
    }

    /// Appends a record and persists the whole database.
    pub fn save(&self, record: Record) -> Result<()> {
        let mut db = self.load();
        db.push(record);
        self.persist(&db)
    }

    /// Replaces the record with a matching id in place. Persists only when a
    /// match was found; an unknown id is a silent no-op.
    pub fn update(&self, record: Record) -> Result<()> {
        let mut db = self.load();
        if db.replace(record) {
            self.persist(&db)?;
        }
        Ok(())
    }

    /// Removes at most one record by id and persists. The file is rewritten
    /// even when nothing matched.
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut db = self.load();
        db.remove(id);
        self.persist(&db)
    }

    /// Lists every file under the store root, newest modification first.
    /// An unreadable directory yields an empty list.
    pub fn list_files(&self) -> Vec<FileMeta> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!("unreadable store dir {}: {err}", self.root.display());
                return Vec::new();
            }
        };
        let mut rows = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let name = match path.file_name().and_then(|name| name.to_str()) {
                Some(name) => name.to_string(),
                None => continue,
            };
            let meta = fs::metadata(&path).ok();
            rows.push(FileMeta {
                name,
                size_bytes: meta.as_ref().map(|meta| meta.len()).unwrap_or(0),
                modified: meta
                    .and_then(|meta| meta.modified().ok())
                    .map(DateTime::<Utc>::from),
            });
        }
        rows.sort_by_key(|meta| Reverse(meta.modified));
        rows
    }

    /// Writes a generated yearly report, replacing any prior file for the
    /// same year, and returns the path for the caller to share.
    pub fn write_report(&self, year: &str, contents: &str) -> Result<PathBuf> {
        let path = self.report_path(year);
        write_atomic(&path, contents)?;
        Ok(path)
    }

    fn persist(&self, db: &Database) -> Result<()> {
        let json = serde_json::to_string_pretty(db)?;
        let path = self.db_path();
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// Directory entry metadata for the raw-file browsing view.
#[derive(Debug, Clone)]
pub struct FileMeta {
    pub name: String,
    pub size_bytes: u64,
    pub modified: Option<DateTime<Utc>>,
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
