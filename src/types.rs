/// Unique record identifier (primary key of the source dataset).
/// Example: `6523`
pub type RecordId = u64;
/// Identifier for the source that produced a record set.
/// Examples: `new_england_airports`, `fixture`
pub type SourceId = String;
/// Administrative region code attached to each record.
/// Examples: `US-MA`, `US-VT`, `US-NH`
pub type RegionCode = String;
/// Canonical size-class label as it appears in the source dataset.
/// Examples: `large_airport`, `medium_airport`, `small_airport`
pub type ClassLabel = String;
