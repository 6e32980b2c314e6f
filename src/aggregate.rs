//! Pure aggregates computed from a filtered view.

use indexmap::IndexMap;

use crate::data::SizeClass;
use crate::filter::FilteredView;
use crate::types::RegionCode;

/// Count view records per region, in the caller-supplied region order.
///
/// The order is load-bearing: proportion-chart labels are paired with these
/// counts positionally, so both must come from the same region sequence. A
/// region absent from the view counts 0.
pub fn count_by_region(view: &FilteredView<'_>, regions: &[RegionCode]) -> Vec<usize> {
    regions
        .iter()
        .map(|region| {
            view.iter()
                .filter(|record| &record.region == region)
                .count()
        })
        .collect()
}

/// Size classes observed per region, keyed in first-occurrence order.
///
/// Entries are created the first time a region is seen, so accumulating into
/// a region that was never pre-registered cannot fault.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassGrouping {
    groups: IndexMap<RegionCode, Vec<SizeClass>>,
}

impl ClassGrouping {
    fn push(&mut self, region: &RegionCode, class: SizeClass) {
        self.groups.entry(region.clone()).or_default().push(class);
    }

    /// Regions in first-occurrence order.
    pub fn regions(&self) -> impl Iterator<Item = &RegionCode> {
        self.groups.keys()
    }

    /// Classes observed for `region`, in view order.
    pub fn classes(&self, region: &str) -> Option<&[SizeClass]> {
        self.groups.get(region).map(Vec::as_slice)
    }

    /// Number of distinct regions in the grouping.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` when no region has been grouped.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Per-region totals, preserving key order.
    ///
    /// Agrees exactly with `count_by_region` computed over the same view and
    /// the same region sequence.
    pub fn sums(&self) -> IndexMap<RegionCode, usize> {
        self.groups
            .iter()
            .map(|(region, classes)| (region.clone(), classes.len()))
            .collect()
    }
}

/// Partition `view` by region, accumulating observed size classes in order.
pub fn group_classes_by_region(view: &FilteredView<'_>) -> ClassGrouping {
    let mut grouping = ClassGrouping::default();
    for record in view.iter() {
        grouping.push(&record.region, record.class);
    }
    grouping
}
