//! Selection predicates and the filter pass that produces borrowed views.

use tracing::debug;

use crate::data::{AirportRecord, RecordSet, SizeClass};
use crate::errors::ExplorerError;
use crate::types::RegionCode;

/// Conjunction of region and size-class membership predicates.
///
/// An empty region list means "any region" and an empty class list means
/// "any class"; non-empty lists are membership tests combined with AND.
/// Unknown regions are legal and simply match nothing (the region domain is
/// open-ended), while class labels must parse into the fixed enumeration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    /// Regions whose records pass; empty disables the region constraint.
    pub regions: Vec<RegionCode>,
    /// Size classes whose records pass; empty disables the class constraint.
    pub classes: Vec<SizeClass>,
}

impl Selection {
    /// Typed constructor for already parsed predicates.
    pub fn new(regions: Vec<RegionCode>, classes: Vec<SizeClass>) -> Self {
        Self { regions, classes }
    }

    /// Shell-facing constructor: a multi-choice region list plus exactly one
    /// size class, coerced into a one-element class set.
    ///
    /// The pipeline filters on class sets internally, so a future
    /// multi-select class control needs no API change.
    pub fn single_class(regions: Vec<RegionCode>, class: SizeClass) -> Self {
        Self {
            regions,
            classes: vec![class],
        }
    }

    /// Parse raw selection strings coming off a control surface.
    ///
    /// Fails with `UnknownSizeClass` when a class label falls outside the
    /// fixed enumeration.
    pub fn parse<S: AsRef<str>>(
        regions: Vec<RegionCode>,
        class_labels: &[S],
    ) -> Result<Self, ExplorerError> {
        let classes = class_labels
            .iter()
            .map(|label| SizeClass::from_label(label.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { regions, classes })
    }

    /// Returns `true` when `record` passes both predicates.
    pub fn matches(&self, record: &AirportRecord) -> bool {
        let region_ok =
            self.regions.is_empty() || self.regions.iter().any(|region| region == &record.region);
        let class_ok = self.classes.is_empty() || self.classes.contains(&record.class);
        region_ok && class_ok
    }
}

/// Borrowed subsequence of a `RecordSet` satisfying a `Selection`.
///
/// Created fresh on every filter pass, owned by the caller, and discarded
/// after use; the underlying set is never mutated.
#[derive(Clone, Debug)]
pub struct FilteredView<'a> {
    records: Vec<&'a AirportRecord>,
}

impl<'a> FilteredView<'a> {
    /// Records in the view, preserving record-set order.
    pub fn records(&self) -> &[&'a AirportRecord] {
        &self.records
    }

    /// Iterate over the records in view order.
    pub fn iter(&self) -> impl Iterator<Item = &'a AirportRecord> + '_ {
        self.records.iter().copied()
    }

    /// Number of records in the view.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when nothing passed the predicates.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Re-apply predicates to an already filtered view.
    ///
    /// Re-applying the selection that produced the view is a no-op.
    pub fn refilter(&self, selection: &Selection) -> FilteredView<'a> {
        FilteredView {
            records: self
                .records
                .iter()
                .copied()
                .filter(|record| selection.matches(record))
                .collect(),
        }
    }
}

/// Apply `selection` to `set`, preserving relative record order.
///
/// Pure: same set and selection always yield the same view.
pub fn apply<'a>(set: &'a RecordSet, selection: &Selection) -> FilteredView<'a> {
    let records: Vec<&AirportRecord> = set
        .records()
        .iter()
        .filter(|record| selection.matches(record))
        .collect();
    debug!(total = set.len(), kept = records.len(), "filter pass");
    FilteredView { records }
}
