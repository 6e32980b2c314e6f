//! Output contracts handed to the presentation shell.
//!
//! Each structure is the minimal input one renderer needs: markers plus a
//! centering state for the map layer, positionally paired values/labels for
//! the proportion chart, ordered label/value pairs for the count chart. All
//! of them serialize, since they cross the boundary to the shell.

use indexmap::IndexMap;
use serde::Serialize;

use crate::constants::map::DEFAULT_ZOOM;
use crate::errors::ExplorerError;
use crate::filter::FilteredView;
use crate::types::RegionCode;

/// Proportion-chart input: paired values and labels plus the slice to
/// visually emphasize.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ProportionSeries {
    /// Per-label values, same length and order as `labels`.
    pub values: Vec<usize>,
    /// Per-value labels.
    pub labels: Vec<RegionCode>,
    /// Index of the first maximum value; the shell renders this slice apart
    /// from the rest.
    pub emphasis: usize,
}

impl ProportionSeries {
    /// Pair `values` with `labels` positionally and locate the emphasis
    /// slice.
    ///
    /// Fails with `ShapeMismatch` when the lengths differ or `values` is
    /// empty (an emphasis index would be undefined).
    pub fn new(values: Vec<usize>, labels: Vec<RegionCode>) -> Result<Self, ExplorerError> {
        if values.is_empty() || values.len() != labels.len() {
            return Err(ExplorerError::ShapeMismatch {
                values: values.len(),
                labels: labels.len(),
            });
        }
        let mut emphasis = 0;
        for (idx, value) in values.iter().enumerate() {
            if *value > values[emphasis] {
                emphasis = idx;
            }
        }
        Ok(Self {
            values,
            labels,
            emphasis,
        })
    }

    /// Chart title listing the labelled regions.
    pub fn title(&self) -> String {
        format!(
            "Distribution of selected size airports by region: {}",
            self.labels.join(", ")
        )
    }
}

/// Count-chart input: label/value pairs in aggregate key order.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct CountSeries {
    /// Ordered label/value pairs.
    pub entries: Vec<(RegionCode, usize)>,
}

impl CountSeries {
    /// Build a series from per-region sums, preserving iteration order.
    pub fn from_sums(sums: IndexMap<RegionCode, usize>) -> Self {
        Self {
            entries: sums.into_iter().collect(),
        }
    }

    /// Chart title listing the counted regions.
    pub fn title(&self) -> String {
        let labels: Vec<&str> = self
            .entries
            .iter()
            .map(|(region, _)| region.as_str())
            .collect();
        format!(
            "Number of selected size airports by region: {}",
            labels.join(", ")
        )
    }
}

/// One map marker.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct GeoPoint {
    /// Marker label (the airport display name).
    pub label: String,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
}

/// Map-view input: one marker per record plus the centering state.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct GeoView {
    /// Markers in view order.
    pub points: Vec<GeoPoint>,
    /// Mean latitude of all markers; centers the map.
    pub center_lat: f64,
    /// Mean longitude of all markers; centers the map.
    pub center_lon: f64,
    /// Initial zoom level; shells may override it.
    pub zoom: u8,
}

impl GeoView {
    /// Project `view` into map markers centered on the coordinate mean.
    ///
    /// Fails with `EmptyView` for a view with no records (the mean is
    /// undefined); the shell is expected to skip the map rather than crash.
    pub fn from_view(view: &FilteredView<'_>) -> Result<Self, ExplorerError> {
        if view.is_empty() {
            return Err(ExplorerError::EmptyView);
        }
        let points: Vec<GeoPoint> = view
            .iter()
            .map(|record| GeoPoint {
                label: record.name.clone(),
                lat: record.latitude,
                lon: record.longitude,
            })
            .collect();
        let total = points.len() as f64;
        let center_lat = points.iter().map(|point| point.lat).sum::<f64>() / total;
        let center_lon = points.iter().map(|point| point.lon).sum::<f64>() / total;
        Ok(Self {
            points,
            center_lat,
            center_lon,
            zoom: DEFAULT_ZOOM,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{AirportRecord, RecordSet, SizeClass};
    use crate::filter::{apply, Selection};

    #[test]
    fn emphasis_points_at_the_first_maximum() {
        let series = ProportionSeries::new(
            vec![2, 5, 5, 1],
            vec!["A".into(), "B".into(), "C".into(), "D".into()],
        )
        .unwrap();
        assert_eq!(series.emphasis, 1);

        let tied = ProportionSeries::new(vec![3, 3], vec!["A".into(), "B".into()]).unwrap();
        assert_eq!(tied.emphasis, 0);
    }

    #[test]
    fn mismatched_or_empty_series_are_rejected() {
        assert!(matches!(
            ProportionSeries::new(vec![1, 2], vec!["A".into()]),
            Err(ExplorerError::ShapeMismatch { values: 2, labels: 1 })
        ));
        assert!(matches!(
            ProportionSeries::new(Vec::new(), Vec::new()),
            Err(ExplorerError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn count_series_preserves_sum_order() {
        let mut sums = IndexMap::new();
        sums.insert("US-VT".to_string(), 3);
        sums.insert("US-MA".to_string(), 1);
        let series = CountSeries::from_sums(sums);
        assert_eq!(
            series.entries,
            vec![("US-VT".to_string(), 3), ("US-MA".to_string(), 1)]
        );
        assert_eq!(
            series.title(),
            "Number of selected size airports by region: US-VT, US-MA"
        );
    }

    #[test]
    fn geo_view_centers_on_the_coordinate_mean() {
        let records = vec![
            AirportRecord {
                id: 1,
                region: "US-MA".to_string(),
                class: SizeClass::Small,
                name: "A".to_string(),
                latitude: 10.0,
                longitude: 20.0,
            },
            AirportRecord {
                id: 2,
                region: "US-MA".to_string(),
                class: SizeClass::Small,
                name: "B".to_string(),
                latitude: 12.0,
                longitude: 22.0,
            },
        ];
        let set = RecordSet::from_records("fixture", records).unwrap();
        let geo = GeoView::from_view(&apply(&set, &Selection::default())).unwrap();
        assert_eq!(geo.points.len(), 2);
        assert!((geo.center_lat - 11.0).abs() < 1e-9);
        assert!((geo.center_lon - 21.0).abs() < 1e-9);
        assert_eq!(geo.zoom, DEFAULT_ZOOM);
    }

    #[test]
    fn empty_views_cannot_produce_a_map() {
        let set = RecordSet::from_records("fixture", Vec::new()).unwrap();
        assert!(matches!(
            GeoView::from_view(&apply(&set, &Selection::default())),
            Err(ExplorerError::EmptyView)
        ));
    }
}
