//! Typed per-field coercers.
//!
//! One explicit function per field kind, replacing runtime type dispatch.
//! Every coercer treats an absent or blank raw value as `None`, and a
//! present-but-unparsable value as a field-level failure resolved to `None`.
//! Nothing in this module returns an error: one bad field must never take
//! down the rest of the record.

use chrono::NaiveDate;
use tracing::debug;

/// Boolean coercion.
///
/// Absent/blank → unknown (`None`, not false). A present value is `true`
/// iff it equals "yes" or "true" case-insensitively; any other present
/// value is `false`.
pub fn coerce_bool(raw: Option<&str>) -> Option<bool> {
    let value = non_blank(raw)?;
    Some(matches!(value.to_lowercase().as_str(), "yes" | "true"))
}

/// Floating-point coercion. Unparsable present values resolve to `None`.
pub fn coerce_float(raw: Option<&str>) -> Option<f64> {
    let value = non_blank(raw)?;
    match value.parse::<f64>() {
        Ok(v) => Some(v),
        Err(_) => {
            debug!(value = %value, "Unparsable numeric field, treating as absent");
            None
        }
    }
}

/// Date coercion from the source's month/day/year form.
///
/// Stored dates are ISO year-month-day; a malformed date is absorbed here
/// rather than allowed to abort extraction of the remaining fields.
pub fn coerce_date(raw: Option<&str>) -> Option<NaiveDate> {
    let value = non_blank(raw)?;
    match NaiveDate::parse_from_str(&value, "%m/%d/%Y") {
        Ok(date) => Some(date),
        Err(_) => {
            debug!(value = %value, "Unparsable date field, treating as absent");
            None
        }
    }
}

/// Text passthrough: trimmed, blank → `None`.
pub fn coerce_text(raw: Option<&str>) -> Option<String> {
    non_blank(raw)
}

fn non_blank(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// How to resolve a coordinate token that carries latitude/longitude but no
/// CRS label. The source page allows that shape, which breaks the
/// "all three or none" unit the rest of the record model assumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordinatePolicy {
    /// Keep latitude/longitude populated with a null CRS, exactly as the
    /// source presents it.
    #[default]
    Preserve,
    /// Null out all three unless the CRS segment is present too.
    Strict,
}

/// A fully parsed coordinate token.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCoordinates {
    pub latitude: f64,
    pub longitude: f64,
    pub crs: Option<String>,
}

/// Parse a raw coordinate token of the form `"<lat>,<lon> <crs>"`.
///
/// The CRS segment after the first space may be absent. Both numeric parts
/// must parse; a token that is present but malformed is a field-level
/// failure (`None`), so latitude, longitude and CRS stay null together.
pub fn parse_coordinates(raw: &str, policy: CoordinatePolicy) -> Option<ParsedCoordinates> {
    let token = raw.trim();
    if token.is_empty() {
        return None;
    }

    let (pair, crs) = match token.split_once(' ') {
        Some((pair, rest)) => (pair, coerce_text(Some(rest))),
        None => (token, None),
    };

    let Some((lat_str, lon_str)) = pair.split_once(',') else {
        debug!(value = %token, "Coordinate token missing comma, treating as absent");
        return None;
    };

    let (Ok(latitude), Ok(longitude)) = (lat_str.trim().parse::<f64>(), lon_str.trim().parse::<f64>())
    else {
        debug!(value = %token, "Unparsable coordinate pair, treating as absent");
        return None;
    };

    if policy == CoordinatePolicy::Strict && crs.is_none() {
        debug!(value = %token, "Coordinate token without CRS dropped under strict policy");
        return None;
    }

    Some(ParsedCoordinates {
        latitude,
        longitude,
        crs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_bool_absent_is_unknown() {
        assert_eq!(coerce_bool(None), None);
        assert_eq!(coerce_bool(Some("")), None);
        assert_eq!(coerce_bool(Some("   ")), None);
    }

    #[test]
    fn test_coerce_bool_affirmative_values() {
        assert_eq!(coerce_bool(Some("Yes")), Some(true));
        assert_eq!(coerce_bool(Some("yes")), Some(true));
        assert_eq!(coerce_bool(Some("TRUE")), Some(true));
        assert_eq!(coerce_bool(Some("true")), Some(true));
    }

    #[test]
    fn test_coerce_bool_other_present_values_are_false() {
        assert_eq!(coerce_bool(Some("No")), Some(false));
        assert_eq!(coerce_bool(Some("maybe")), Some(false));
        assert_eq!(coerce_bool(Some("1")), Some(false));
    }

    #[test]
    fn test_coerce_float() {
        assert_eq!(coerce_float(None), None);
        assert_eq!(coerce_float(Some("")), None);
        assert_eq!(coerce_float(Some("3214.5")), Some(3214.5));
        assert_eq!(coerce_float(Some(" -104.1234 ")), Some(-104.1234));
        assert_eq!(coerce_float(Some("n/a")), None);
    }

    #[test]
    fn test_coerce_date_normalizes_to_iso() {
        let date = coerce_date(Some("03/14/2021")).expect("parsed");
        assert_eq!(date.to_string(), "2021-03-14");
    }

    #[test]
    fn test_coerce_date_malformed_is_absent() {
        assert_eq!(coerce_date(None), None);
        assert_eq!(coerce_date(Some("")), None);
        // day/month order is not accepted
        assert_eq!(coerce_date(Some("14/03/2021")), None);
        assert_eq!(coerce_date(Some("2021-03-14")), None);
        assert_eq!(coerce_date(Some("not a date")), None);
    }

    #[test]
    fn test_coerce_text_trims_and_blanks() {
        assert_eq!(coerce_text(Some("  Active ")), Some("Active".to_string()));
        assert_eq!(coerce_text(Some("   ")), None);
        assert_eq!(coerce_text(None), None);
    }

    #[test]
    fn test_parse_coordinates_with_crs() {
        let parsed =
            parse_coordinates("35.1234,-104.1234 NAD83", CoordinatePolicy::Preserve).unwrap();
        assert_eq!(parsed.latitude, 35.1234);
        assert_eq!(parsed.longitude, -104.1234);
        assert_eq!(parsed.crs.as_deref(), Some("NAD83"));
    }

    #[test]
    fn test_parse_coordinates_without_crs_preserved() {
        let parsed = parse_coordinates("35.1234,-104.1234", CoordinatePolicy::Preserve).unwrap();
        assert_eq!(parsed.latitude, 35.1234);
        assert_eq!(parsed.longitude, -104.1234);
        assert_eq!(parsed.crs, None);
    }

    #[test]
    fn test_parse_coordinates_without_crs_strict() {
        assert_eq!(
            parse_coordinates("35.1234,-104.1234", CoordinatePolicy::Strict),
            None
        );
        // with a CRS the strict policy is satisfied
        assert!(parse_coordinates("35.1234,-104.1234 NAD83", CoordinatePolicy::Strict).is_some());
    }

    #[test]
    fn test_parse_coordinates_malformed_is_absent() {
        assert_eq!(parse_coordinates("", CoordinatePolicy::Preserve), None);
        assert_eq!(parse_coordinates("35.1234", CoordinatePolicy::Preserve), None);
        assert_eq!(
            parse_coordinates("abc,def NAD83", CoordinatePolicy::Preserve),
            None
        );
    }
}
