/// Constants used by size-class labeling.
pub mod classes {
    /// Canonical dataset label for the small size class.
    pub const LABEL_SMALL: &str = "small_airport";
    /// Canonical dataset label for the medium size class.
    pub const LABEL_MEDIUM: &str = "medium_airport";
    /// Canonical dataset label for the large size class.
    pub const LABEL_LARGE: &str = "large_airport";
}

/// Constants used by the map view contract.
pub mod map {
    /// Initial zoom level for a freshly centered map view.
    pub const DEFAULT_ZOOM: u8 = 6;
}
