use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::classes::{LABEL_LARGE, LABEL_MEDIUM, LABEL_SMALL};
use crate::errors::ExplorerError;

pub use crate::types::{RecordId, RegionCode};

/// Fixed three-value airport size classification.
///
/// The label spelling follows the source dataset; anything outside these
/// three values is rejected at the parsing boundary.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SizeClass {
    /// Small airfields (the bulk of most regional datasets).
    #[serde(rename = "small_airport")]
    Small,
    /// Mid-size regional airports.
    #[serde(rename = "medium_airport")]
    Medium,
    /// Major commercial airports.
    #[serde(rename = "large_airport")]
    Large,
}

impl SizeClass {
    /// All classes, smallest first (the order selection controls present them in).
    pub const ALL: [SizeClass; 3] = [SizeClass::Small, SizeClass::Medium, SizeClass::Large];

    /// Canonical dataset label for this class.
    pub fn as_label(&self) -> &'static str {
        match self {
            SizeClass::Small => LABEL_SMALL,
            SizeClass::Medium => LABEL_MEDIUM,
            SizeClass::Large => LABEL_LARGE,
        }
    }

    /// Parse a canonical dataset label.
    ///
    /// The region domain is open-ended but size classes are not: an unknown
    /// label is a caller error, not an empty match.
    pub fn from_label(label: &str) -> Result<Self, ExplorerError> {
        match label {
            LABEL_SMALL => Ok(SizeClass::Small),
            LABEL_MEDIUM => Ok(SizeClass::Medium),
            LABEL_LARGE => Ok(SizeClass::Large),
            other => Err(ExplorerError::UnknownSizeClass(other.to_string())),
        }
    }
}

impl Default for SizeClass {
    fn default() -> Self {
        // Selection controls start on the smallest class.
        SizeClass::Small
    }
}

impl FromStr for SizeClass {
    type Err = ExplorerError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Self::from_label(label)
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Canonical record for one airport row in the source dataset.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AirportRecord {
    /// Stable record identifier (dataset primary key).
    pub id: RecordId,
    /// Administrative region the airport belongs to.
    pub region: RegionCode,
    /// Size classification.
    pub class: SizeClass,
    /// Display name used for markers and tooltips.
    pub name: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// Ordered, immutable collection of airport records.
///
/// Built exactly once at startup and held read-only for the process
/// lifetime; every filtered view borrows from it and no component mutates it
/// after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordSet {
    records: Vec<AirportRecord>,
}

impl RecordSet {
    /// Validate and seal a batch of loaded records.
    ///
    /// Fails with `DataLoad` on a duplicate id, an empty region, or a
    /// non-finite coordinate. Validation is all-or-nothing: the first
    /// violation aborts the load and no partial set is produced.
    pub fn from_records(
        source_id: &str,
        records: Vec<AirportRecord>,
    ) -> Result<Self, ExplorerError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(ExplorerError::DataLoad {
                    source_id: source_id.to_string(),
                    reason: format!("duplicate record id {}", record.id),
                });
            }
            if record.region.is_empty() {
                return Err(ExplorerError::DataLoad {
                    source_id: source_id.to_string(),
                    reason: format!("record {} has an empty region", record.id),
                });
            }
            if !record.latitude.is_finite() || !record.longitude.is_finite() {
                return Err(ExplorerError::DataLoad {
                    source_id: source_id.to_string(),
                    reason: format!("record {} has a non-finite coordinate", record.id),
                });
            }
        }
        Ok(Self { records })
    }

    /// All records, in load order.
    pub fn records(&self) -> &[AirportRecord] {
        &self.records
    }

    /// Number of records in the set.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the set has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id.
    pub fn get(&self, id: RecordId) -> Option<&AirportRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Every region in first-occurrence order, each exactly once.
    ///
    /// Deterministic and stable across repeated calls on the same set; used
    /// to populate region selection controls.
    pub fn regions(&self) -> Vec<RegionCode> {
        let mut seen = HashSet::new();
        let mut regions = Vec::new();
        for record in &self.records {
            if seen.insert(record.region.as_str()) {
                regions.push(record.region.clone());
            }
        }
        regions
    }
}
