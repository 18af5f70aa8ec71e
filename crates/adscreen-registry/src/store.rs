//! Registry storage backends
//!
//! [`RegistryStore`] abstracts the persistence strategy so the
//! rewrite-on-append CSV backend can later swap to streaming appends or an
//! embedded store without touching callers.

use crate::entry::RegistryEntry;
use crate::error::RegistryResult;
use crate::export;
use crate::schema;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info};

/// Append-only storage for screening evaluations
///
/// # Contract
///
/// - `ensure` is idempotent and never overwrites an existing store
/// - `load_all` sees a fresh store as an empty table, not a missing-file
///   error
/// - `append` either persists the row or returns the I/O error; it never
///   reports success on a failed write
pub trait RegistryStore {
    /// Create the backing store with the header-only schema iff absent
    fn ensure(&self) -> RegistryResult<()>;

    /// Load every persisted row, oldest first
    fn load_all(&self) -> RegistryResult<Vec<RegistryEntry>>;

    /// Persist one evaluation
    fn append(&self, entry: &RegistryEntry) -> RegistryResult<()>;
}

/// CSV-file backed registry
///
/// UTF-8 with signature, comma-delimited, fixed header. Appending reads the
/// full table and rewrites the file; acceptable for the expected record
/// volumes, and the trait boundary leaves room for a streaming backend.
/// Assumes a single active writer.
pub struct CsvRegistry {
    /// Registry file location
    path: PathBuf,
}

impl CsvRegistry {
    /// Create a registry over the given file path.
    /// The file itself is created lazily on first access.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Backing file location
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RegistryStore for CsvRegistry {
    fn ensure(&self) -> RegistryResult<()> {
        if self.path.exists() {
            return Ok(());
        }
        debug!(path = %self.path.display(), "creating registry with header-only schema");
        fs::write(&self.path, export::write_csv(&[])?)?;
        Ok(())
    }

    fn load_all(&self) -> RegistryResult<Vec<RegistryEntry>> {
        self.ensure()?;
        let raw = fs::read(&self.path)?;
        let body = raw.strip_prefix(schema::UTF8_BOM).unwrap_or(&raw);
        let mut reader = csv::Reader::from_reader(body);
        let mut rows = Vec::new();
        for entry in reader.deserialize() {
            rows.push(entry?);
        }
        debug!(path = %self.path.display(), rows = rows.len(), "loaded registry");
        Ok(rows)
    }

    fn append(&self, entry: &RegistryEntry) -> RegistryResult<()> {
        let mut rows = self.load_all()?;
        rows.push(entry.clone());
        fs::write(&self.path, export::write_csv(&rows)?)?;
        info!(
            path = %self.path.display(),
            patient_id = %entry.patient_id,
            rows = rows.len(),
            "appended evaluation to registry"
        );
        Ok(())
    }
}

/// In-memory registry for tests and embedding
#[derive(Default)]
pub struct MemoryRegistry {
    rows: Mutex<Vec<RegistryEntry>>,
}

impl MemoryRegistry {
    /// Create an empty in-memory registry
    pub fn new() -> Self {
        Self::default()
    }
}

impl RegistryStore for MemoryRegistry {
    fn ensure(&self) -> RegistryResult<()> {
        Ok(())
    }

    fn load_all(&self) -> RegistryResult<Vec<RegistryEntry>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    fn append(&self, entry: &RegistryEntry) -> RegistryResult<()> {
        self.rows.lock().unwrap().push(entry.clone());
        Ok(())
    }
}
