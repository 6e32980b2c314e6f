#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Aggregation operations over filtered views.
pub mod aggregate;
/// Centralized constants for dataset labels and view defaults.
pub mod constants;
/// Record model and validated record sets.
pub mod data;
/// Pipeline facade tying filtering, aggregation, and formatting together.
pub mod explorer;
/// Selection predicates and filter passes.
pub mod filter;
/// Data sources that load airport records.
pub mod source;
/// Shared type aliases.
pub mod types;
/// View-formatter output contracts.
pub mod view;

mod errors;

pub use aggregate::{count_by_region, group_classes_by_region, ClassGrouping};
pub use data::{AirportRecord, RecordSet, SizeClass};
pub use errors::ExplorerError;
pub use explorer::Explorer;
pub use filter::{apply, FilteredView, Selection};
pub use source::{CsvSource, DataSource, InMemorySource};
pub use types::{ClassLabel, RecordId, RegionCode, SourceId};
pub use view::{CountSeries, GeoPoint, GeoView, ProportionSeries};
