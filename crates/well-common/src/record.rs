//! The canonical well record produced by normalization and persisted by storage.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One well's regulatory snapshot, as scraped from its detail page.
///
/// Every field except `api` is optional: `None` means "not observed on the
/// source page", which is distinct from a known false/zero value. Latitude,
/// longitude and CRS are parsed from a single source token and travel as a
/// unit (see [`crate::spatial`] for how they are consumed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellRecord {
    /// External well number. Required, and the sole lookup key.
    /// Not enforced unique: re-ingestion appends duplicate rows.
    pub api: String,

    pub operator: Option<String>,
    pub status: Option<String>,
    pub well_type: Option<String>,
    pub work_type: Option<String>,
    pub directional_status: Option<String>,
    pub mineral_owner: Option<String>,
    pub surface_owner: Option<String>,
    pub completion_type: Option<String>,
    pub surface_location: Option<String>,

    pub multi_lateral: Option<bool>,
    pub potash_waiver: Option<bool>,

    /// Elevations and depth in source units, unconverted.
    pub gl_elevation: Option<f64>,
    pub kb_elevation: Option<f64>,
    pub df_elevation: Option<f64>,
    pub tvd: Option<f64>,

    pub spud_date: Option<NaiveDate>,
    pub last_inspection: Option<NaiveDate>,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub crs: Option<String>,
}

impl WellRecord {
    /// Create an empty record carrying only the identifier.
    pub fn new(api: impl Into<String>) -> Self {
        Self {
            api: api.into(),
            operator: None,
            status: None,
            well_type: None,
            work_type: None,
            directional_status: None,
            mineral_owner: None,
            surface_owner: None,
            completion_type: None,
            surface_location: None,
            multi_lateral: None,
            potash_waiver: None,
            gl_elevation: None,
            kb_elevation: None,
            df_elevation: None,
            tvd: None,
            spud_date: None,
            last_inspection: None,
            latitude: None,
            longitude: None,
            crs: None,
        }
    }

    /// Whether the record carries a usable coordinate pair.
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

/// Projection of one stored row onto the columns the spatial engine needs.
///
/// Rows with null coordinates are included; the engine skips them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateRow {
    pub api: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
