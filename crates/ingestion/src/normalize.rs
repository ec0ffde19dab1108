//! Field-by-field normalization of a source document into a well record.

use tracing::debug;

use well_common::{WellError, WellRecord, WellResult};

use crate::document::SourceDocument;
use crate::fields::{
    coerce_bool, coerce_date, coerce_float, coerce_text, parse_coordinates, CoordinatePolicy,
};

// Per-field span keys on the well-detail page.
const KEY_OPERATOR: &str = "lblOperator";
const KEY_STATUS: &str = "lblStatus";
const KEY_WELL_TYPE: &str = "lblWellType";
const KEY_WORK_TYPE: &str = "lblWorkType";
const KEY_DIRECTIONAL_STATUS: &str = "lblDirectionalStatus";
const KEY_MULTI_LATERAL: &str = "lblMultiLateral";
const KEY_MINERAL_OWNER: &str = "lblMineralOwner";
const KEY_SURFACE_OWNER: &str = "lblSurfaceOwner";
const KEY_GL_ELEVATION: &str = "lblGLElevation";
const KEY_KB_ELEVATION: &str = "lblKBElevation";
const KEY_DF_ELEVATION: &str = "lblDFElevation";
const KEY_COMPLETIONS: &str = "lblCompletions";
const KEY_POTASH_WAIVER: &str = "lblPotashWaiver";
const KEY_SPUD_DATE: &str = "lblSpudDate";
const KEY_LAST_INSPECTION: &str = "lblLastInspectionDate";
const KEY_TVD: &str = "lblTrueVerticalDepth";
const KEY_LOCATION: &str = "Location_lblLocation";
const KEY_LOT: &str = "Location_lblLot";
const KEY_FOOTAGE_NS: &str = "Location_lblFootageNSH";
const KEY_FOOTAGE_EW: &str = "Location_lblFootageEW";
const KEY_COORDINATES: &str = "Location_lblCoordinates";

/// Turns one source document into a [`WellRecord`].
///
/// Each field is extracted independently: a field that is missing from the
/// page or fails to parse becomes `None` for that field only, and the rest
/// of the record is unaffected. A record with one bad field and the rest
/// populated is a success, not a failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    policy: CoordinatePolicy,
}

impl Normalizer {
    pub fn new(policy: CoordinatePolicy) -> Self {
        Self { policy }
    }

    /// Build a record for `api` from the given document.
    ///
    /// The only hard requirement is a non-blank identifier; everything else
    /// degrades to `None`.
    pub fn normalize(&self, api: &str, doc: &dyn SourceDocument) -> WellResult<WellRecord> {
        let api = api.trim();
        if api.is_empty() {
            return Err(WellError::InvalidRecord("blank API identifier".to_string()));
        }

        let text = |key: &str| coerce_text(doc.field_text(key).as_deref());
        let boolean = |key: &str| coerce_bool(doc.field_text(key).as_deref());
        let float = |key: &str| coerce_float(doc.field_text(key).as_deref());
        let date = |key: &str| coerce_date(doc.field_text(key).as_deref());

        let mut record = WellRecord::new(api);
        record.operator = text(KEY_OPERATOR);
        record.status = text(KEY_STATUS);
        record.well_type = text(KEY_WELL_TYPE);
        record.work_type = text(KEY_WORK_TYPE);
        record.directional_status = text(KEY_DIRECTIONAL_STATUS);
        record.mineral_owner = text(KEY_MINERAL_OWNER);
        record.surface_owner = text(KEY_SURFACE_OWNER);
        record.completion_type = text(KEY_COMPLETIONS);
        record.surface_location = self.surface_location(doc);

        record.multi_lateral = boolean(KEY_MULTI_LATERAL);
        record.potash_waiver = boolean(KEY_POTASH_WAIVER);

        record.gl_elevation = float(KEY_GL_ELEVATION);
        record.kb_elevation = float(KEY_KB_ELEVATION);
        record.df_elevation = float(KEY_DF_ELEVATION);
        record.tvd = float(KEY_TVD);

        record.spud_date = date(KEY_SPUD_DATE);
        record.last_inspection = date(KEY_LAST_INSPECTION);

        if let Some(raw) = doc.field_text(KEY_COORDINATES) {
            if let Some(coords) = parse_coordinates(&raw, self.policy) {
                record.latitude = Some(coords.latitude);
                record.longitude = Some(coords.longitude);
                record.crs = coords.crs;
            } else {
                debug!(api = %api, "Coordinate token present but unusable");
            }
        }

        Ok(record)
    }

    /// Derived surface location: up to four sub-fields joined by single
    /// spaces, absent parts simply omitted.
    fn surface_location(&self, doc: &dyn SourceDocument) -> Option<String> {
        let parts: Vec<String> = [KEY_LOCATION, KEY_LOT, KEY_FOOTAGE_NS, KEY_FOOTAGE_EW]
            .iter()
            .filter_map(|key| coerce_text(doc.field_text(key).as_deref()))
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    /// Document backed by a plain map, standing in for a parsed page.
    struct MapDocument(HashMap<&'static str, &'static str>);

    impl MapDocument {
        fn new(fields: &[(&'static str, &'static str)]) -> Self {
            Self(fields.iter().copied().collect())
        }
    }

    impl SourceDocument for MapDocument {
        fn field_text(&self, key: &str) -> Option<String> {
            self.0.get(key).map(|s| s.to_string())
        }
    }

    fn full_document() -> MapDocument {
        MapDocument::new(&[
            ("lblOperator", "EXAMPLE ENERGY LLC"),
            ("lblStatus", "Active"),
            ("lblWellType", "Oil"),
            ("lblWorkType", "New"),
            ("lblDirectionalStatus", "Vertical"),
            ("lblMultiLateral", "No"),
            ("lblMineralOwner", "Federal"),
            ("lblSurfaceOwner", "Private"),
            ("lblGLElevation", "3214"),
            ("lblKBElevation", "3226"),
            ("lblDFElevation", "3225"),
            ("lblCompletions", "Single"),
            ("lblPotashWaiver", "Yes"),
            ("lblSpudDate", "03/14/2021"),
            ("lblLastInspectionDate", "11/02/2023"),
            ("lblTrueVerticalDepth", "9850.5"),
            ("Location_lblLocation", "E-23-19S-28E"),
            ("Location_lblLot", "4"),
            ("Location_lblFootageNSH", "660 FSL"),
            ("Location_lblFootageEW", "1980 FWL"),
            ("Location_lblCoordinates", "32.1234,-104.5678 NAD83"),
        ])
    }

    #[test]
    fn test_full_document_populates_every_field() {
        let record = Normalizer::default()
            .normalize("30-015-12345", &full_document())
            .unwrap();

        assert_eq!(record.api, "30-015-12345");
        assert_eq!(record.operator.as_deref(), Some("EXAMPLE ENERGY LLC"));
        assert_eq!(record.status.as_deref(), Some("Active"));
        assert_eq!(record.well_type.as_deref(), Some("Oil"));
        assert_eq!(record.work_type.as_deref(), Some("New"));
        assert_eq!(record.directional_status.as_deref(), Some("Vertical"));
        assert_eq!(record.multi_lateral, Some(false));
        assert_eq!(record.mineral_owner.as_deref(), Some("Federal"));
        assert_eq!(record.surface_owner.as_deref(), Some("Private"));
        assert_eq!(record.completion_type.as_deref(), Some("Single"));
        assert_eq!(record.gl_elevation, Some(3214.0));
        assert_eq!(record.kb_elevation, Some(3226.0));
        assert_eq!(record.df_elevation, Some(3225.0));
        assert_eq!(record.tvd, Some(9850.5));
        assert_eq!(record.potash_waiver, Some(true));
        assert_eq!(record.spud_date, NaiveDate::from_ymd_opt(2021, 3, 14));
        assert_eq!(record.last_inspection, NaiveDate::from_ymd_opt(2023, 11, 2));
        assert_eq!(
            record.surface_location.as_deref(),
            Some("E-23-19S-28E 4 660 FSL 1980 FWL")
        );
        assert_eq!(record.latitude, Some(32.1234));
        assert_eq!(record.longitude, Some(-104.5678));
        assert_eq!(record.crs.as_deref(), Some("NAD83"));
    }

    #[test]
    fn test_partial_document_nulls_only_missing_fields() {
        // 5 of the fields gone; the other 13 still populate.
        let doc = MapDocument::new(&[
            ("lblOperator", "EXAMPLE ENERGY LLC"),
            ("lblStatus", "Active"),
            ("lblWellType", "Oil"),
            ("lblWorkType", "New"),
            ("lblDirectionalStatus", "Vertical"),
            ("lblMultiLateral", "No"),
            ("lblMineralOwner", "Federal"),
            ("lblSurfaceOwner", "Private"),
            ("lblCompletions", "Single"),
            ("lblPotashWaiver", "Yes"),
            ("lblTrueVerticalDepth", "9850.5"),
            ("Location_lblLocation", "E-23-19S-28E"),
            ("Location_lblCoordinates", "32.1234,-104.5678 NAD83"),
        ]);

        let record = Normalizer::default().normalize("30-015-12345", &doc).unwrap();

        // missing
        assert_eq!(record.gl_elevation, None);
        assert_eq!(record.kb_elevation, None);
        assert_eq!(record.df_elevation, None);
        assert_eq!(record.spud_date, None);
        assert_eq!(record.last_inspection, None);

        // still there
        assert_eq!(record.operator.as_deref(), Some("EXAMPLE ENERGY LLC"));
        assert_eq!(record.tvd, Some(9850.5));
        assert_eq!(record.potash_waiver, Some(true));
        assert_eq!(record.latitude, Some(32.1234));
        assert_eq!(record.surface_location.as_deref(), Some("E-23-19S-28E"));
    }

    #[test]
    fn test_malformed_date_does_not_abort_record() {
        let doc = MapDocument::new(&[
            ("lblOperator", "EXAMPLE ENERGY LLC"),
            ("lblSpudDate", "14/03/2021"),
            ("lblTrueVerticalDepth", "9850.5"),
        ]);

        let record = Normalizer::default().normalize("30-015-12345", &doc).unwrap();
        assert_eq!(record.spud_date, None);
        assert_eq!(record.operator.as_deref(), Some("EXAMPLE ENERGY LLC"));
        assert_eq!(record.tvd, Some(9850.5));
    }

    #[test]
    fn test_absent_coordinate_token_nulls_all_three() {
        let doc = MapDocument::new(&[("lblOperator", "EXAMPLE ENERGY LLC")]);
        let record = Normalizer::default().normalize("30-015-12345", &doc).unwrap();

        assert_eq!(record.latitude, None);
        assert_eq!(record.longitude, None);
        assert_eq!(record.crs, None);
    }

    #[test]
    fn test_crs_less_token_under_both_policies() {
        let doc = MapDocument::new(&[("Location_lblCoordinates", "32.1234,-104.5678")]);

        let preserved = Normalizer::new(CoordinatePolicy::Preserve)
            .normalize("30-015-12345", &doc)
            .unwrap();
        assert_eq!(preserved.latitude, Some(32.1234));
        assert_eq!(preserved.longitude, Some(-104.5678));
        assert_eq!(preserved.crs, None);

        let strict = Normalizer::new(CoordinatePolicy::Strict)
            .normalize("30-015-12345", &doc)
            .unwrap();
        assert_eq!(strict.latitude, None);
        assert_eq!(strict.longitude, None);
        assert_eq!(strict.crs, None);
    }

    #[test]
    fn test_coordinate_unit_invariant_holds() {
        let doc = full_document();
        let record = Normalizer::default().normalize("30-015-12345", &doc).unwrap();
        assert_eq!(
            record.latitude.is_some(),
            record.longitude.is_some(),
            "latitude and longitude travel together"
        );
        assert!(record.crs.is_some());
    }

    #[test]
    fn test_surface_location_skips_absent_parts() {
        let doc = MapDocument::new(&[
            ("Location_lblLocation", " E-23-19S-28E "),
            ("Location_lblFootageEW", "1980 FWL"),
        ]);
        let record = Normalizer::default().normalize("30-015-12345", &doc).unwrap();
        assert_eq!(
            record.surface_location.as_deref(),
            Some("E-23-19S-28E 1980 FWL")
        );
    }

    #[test]
    fn test_blank_api_is_rejected() {
        let doc = full_document();
        assert!(Normalizer::default().normalize("   ", &doc).is_err());
    }

    #[test]
    fn test_api_is_trimmed() {
        let doc = full_document();
        let record = Normalizer::default()
            .normalize(" 30-015-12345\n", &doc)
            .unwrap();
        assert_eq!(record.api, "30-015-12345");
    }
}
