//! Pipeline facade: load the dataset once, then derive views per
//! interaction.
//!
//! Ownership model:
//! - `Explorer` holds the one-time-loaded `RecordSet` as an immutable
//!   handle; nothing re-reads the source after startup.
//! - Every interaction runs one synchronous filter/aggregate/format pass
//!   and returns values owned by the caller, so no state is shared between
//!   calls.

use crate::aggregate::{count_by_region, group_classes_by_region};
use crate::data::RecordSet;
use crate::errors::ExplorerError;
use crate::filter::{self, FilteredView, Selection};
use crate::source::DataSource;
use crate::types::RegionCode;
use crate::view::{CountSeries, GeoView, ProportionSeries};

/// Loaded dataset plus the operations one user interaction runs.
pub struct Explorer {
    records: RecordSet,
}

impl Explorer {
    /// Load the dataset from `source`.
    ///
    /// A load failure is fatal: no explorer is constructed over a partial
    /// set.
    pub fn load(source: &dyn DataSource) -> Result<Self, ExplorerError> {
        let records = source.load_record_set()?;
        Ok(Self { records })
    }

    /// Wrap an already validated record set.
    pub fn new(records: RecordSet) -> Self {
        Self { records }
    }

    /// The underlying record set.
    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    /// Regions available to selection controls, in first-occurrence order.
    pub fn regions(&self) -> Vec<RegionCode> {
        self.records.regions()
    }

    /// Run one filter pass over the dataset.
    pub fn view(&self, selection: &Selection) -> FilteredView<'_> {
        filter::apply(&self.records, selection)
    }

    /// Proportion-chart input for `selection`.
    ///
    /// Counts follow the selection's region order so slice labels and slice
    /// values stay aligned; with no regions selected they fall back to the
    /// data set's first-occurrence region order.
    pub fn proportion_chart(
        &self,
        selection: &Selection,
    ) -> Result<ProportionSeries, ExplorerError> {
        let view = self.view(selection);
        let regions = self.chart_regions(selection);
        let counts = count_by_region(&view, &regions);
        ProportionSeries::new(counts, regions)
    }

    /// Count-chart input for `selection`.
    pub fn count_chart(&self, selection: &Selection) -> CountSeries {
        let grouping = group_classes_by_region(&self.view(selection));
        CountSeries::from_sums(grouping.sums())
    }

    /// Map-view input for `selection`.
    pub fn map_view(&self, selection: &Selection) -> Result<GeoView, ExplorerError> {
        GeoView::from_view(&self.view(selection))
    }

    fn chart_regions(&self, selection: &Selection) -> Vec<RegionCode> {
        if selection.regions.is_empty() {
            self.records.regions()
        } else {
            selection.regions.clone()
        }
    }
}
