//! Data sources that load airport records into a `RecordSet`.
//!
//! Ownership model:
//! - `DataSource` is the explorer-facing interface; it produces the full
//!   record batch exactly once, at startup.
//! - `CsvSource` reads the tabular dataset the tool ships with.
//! - `InMemorySource` backs tests and fixtures.

use std::fs::File;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::debug;

use crate::data::{AirportRecord, RecordSet, SizeClass};
use crate::errors::ExplorerError;
use crate::types::{RecordId, RegionCode, SourceId};

/// Explorer-facing data source interface.
///
/// Loading happens once per process; a failure is fatal and the explorer
/// never retries mid-session, so no partial dataset is ever served.
pub trait DataSource {
    /// Stable source identifier used in load diagnostics.
    fn id(&self) -> &str;

    /// Load every record the source holds, in source order.
    fn load(&self) -> Result<Vec<AirportRecord>, ExplorerError>;

    /// Load and validate the full record set.
    fn load_record_set(&self) -> Result<RecordSet, ExplorerError> {
        let records = self.load()?;
        debug!(
            source = self.id(),
            records = records.len(),
            "loaded airport records"
        );
        RecordSet::from_records(self.id(), records)
    }
}

/// Tabular row as it appears in the source dataset.
///
/// Column names match the upstream airport CSV export; the `type` column
/// deserializes straight into the fixed size-class enumeration, so an
/// unlisted label fails the row.
#[derive(Debug, Deserialize)]
struct CsvRow {
    id: RecordId,
    iso_region: RegionCode,
    #[serde(rename = "type")]
    class: SizeClass,
    name: String,
    latitude_deg: f64,
    longitude_deg: f64,
}

impl From<CsvRow> for AirportRecord {
    fn from(row: CsvRow) -> Self {
        AirportRecord {
            id: row.id,
            region: row.iso_region,
            class: row.class,
            name: row.name,
            latitude: row.latitude_deg,
            longitude: row.longitude_deg,
        }
    }
}

/// CSV-backed data source keyed by the dataset's `id` column.
pub struct CsvSource {
    id: SourceId,
    path: PathBuf,
}

impl CsvSource {
    /// Create a CSV source for `path`; the file stem becomes the source id.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let id = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "csv".to_string());
        Self { id, path }
    }

    fn load_error(&self, reason: String) -> ExplorerError {
        ExplorerError::DataLoad {
            source_id: self.id.clone(),
            reason,
        }
    }
}

impl DataSource for CsvSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn load(&self) -> Result<Vec<AirportRecord>, ExplorerError> {
        let file = File::open(&self.path)
            .map_err(|err| self.load_error(format!("cannot open {}: {err}", self.path.display())))?;
        let mut reader = csv::Reader::from_reader(file);
        let mut records = Vec::new();
        for row in reader.deserialize() {
            let row: CsvRow = row.map_err(|err| self.load_error(format!("malformed row: {err}")))?;
            records.push(row.into());
        }
        Ok(records)
    }
}

/// In-memory data source for tests and small fixtures.
pub struct InMemorySource {
    id: SourceId,
    records: Vec<AirportRecord>,
}

impl InMemorySource {
    /// Create an in-memory source from prebuilt records.
    pub fn new(id: impl Into<SourceId>, records: Vec<AirportRecord>) -> Self {
        Self {
            id: id.into(),
            records,
        }
    }
}

impl DataSource for InMemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn load(&self) -> Result<Vec<AirportRecord>, ExplorerError> {
        Ok(self.records.clone())
    }
}
