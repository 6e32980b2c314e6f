use thiserror::Error;

use crate::types::{ClassLabel, SourceId};

/// Error type for dataset loading, selection parsing, and view formatting.
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// The source dataset could not be loaded whole. Fatal at startup; no
    /// partial record set is ever served.
    #[error("data source '{source_id}' failed to load: {reason}")]
    DataLoad {
        /// Identifier of the failing source.
        source_id: SourceId,
        /// Human-readable load failure description.
        reason: String,
    },
    /// A selection referenced a size-class label outside the fixed enumeration.
    #[error("unknown size class label '{0}'")]
    UnknownSizeClass(ClassLabel),
    /// Positional pairing of value and label sequences with incompatible shapes.
    #[error("series shape mismatch: {values} values vs {labels} labels")]
    ShapeMismatch {
        /// Length of the value sequence.
        values: usize,
        /// Length of the label sequence.
        labels: usize,
    },
    /// A coordinate mean was requested over a view with no records.
    #[error("filtered view contains no records")]
    EmptyView,
}
