//! Point-in-polygon containment over stored well coordinates.
//!
//! The query is a full scan: every coordinate row is tested against the
//! polygon on every call, O(rows × vertices) worst case. At the current
//! dataset scale (low hundreds of wells) this is fine; a bounding-box
//! prefilter in front of the exact test is where an index would go.

use crate::error::{WellError, WellResult};
use crate::record::CoordinateRow;

/// An ordered ring of (x, y) vertex pairs. The ring may be explicitly
/// closed (last vertex repeating the first) or left open; both are handled.
pub type Polygon = [(f64, f64)];

/// Reject structurally unusable polygon rings.
///
/// A ring needs at least 3 distinct vertices; a duplicated closing vertex
/// does not count toward the minimum. Non-finite coordinates are rejected
/// outright.
pub fn validate_polygon(polygon: &Polygon) -> WellResult<()> {
    let mut n = polygon.len();
    if n >= 2 && polygon[0] == polygon[n - 1] {
        n -= 1;
    }
    if n < 3 {
        return Err(WellError::MalformedPolygon(format!(
            "polygon must have at least 3 vertices, got {}",
            n
        )));
    }
    for &(x, y) in polygon {
        if !x.is_finite() || !y.is_finite() {
            return Err(WellError::MalformedPolygon(format!(
                "non-finite vertex ({}, {})",
                x, y
            )));
        }
    }
    Ok(())
}

/// Return the ids of all wells whose point lies strictly inside `polygon`.
///
/// Each row's point is built with **latitude as the first axis and longitude
/// as the second**, matching the axis order of the polygon vertices as
/// supplied by the caller. No axis swap happens anywhere on this path;
/// changing that pairing silently changes which wells match.
///
/// Containment is boundary-exclusive ("within", not "covers"): a point
/// sitting exactly on a polygon edge or vertex is not a match. Rows with a
/// null coordinate are skipped, and duplicate ids collapse to one entry in
/// first-seen order.
pub fn wells_within(polygon: &Polygon, rows: &[CoordinateRow]) -> Vec<String> {
    let mut matched: Vec<String> = Vec::new();

    for row in rows {
        let (Some(lat), Some(lon)) = (row.latitude, row.longitude) else {
            continue;
        };

        // (latitude, longitude) axis order, same as the stored point
        if contains_point(polygon, (lat, lon)) && !matched.iter().any(|m| *m == row.api) {
            matched.push(row.api.clone());
        }
    }

    matched
}

/// Strict-interior point-in-polygon test.
///
/// Even-odd ray casting decides interior vs exterior; points lying exactly
/// on an edge are ambiguous under ray casting alone, so they are rejected
/// by an explicit on-segment pass first.
pub fn contains_point(polygon: &Polygon, point: (f64, f64)) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    if on_boundary(polygon, point) {
        return false;
    }

    let (px, py) = point;
    let mut inside = false;
    let mut j = n - 1;

    for i in 0..n {
        let (xi, yi) = polygon[i];
        let (xj, yj) = polygon[j];

        if ((yi > py) != (yj > py)) && (px < (xj - xi) * (py - yi) / (yj - yi) + xi) {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Whether `point` lies exactly on one of the ring's edges.
fn on_boundary(polygon: &Polygon, point: (f64, f64)) -> bool {
    let n = polygon.len();
    let mut j = n - 1;

    for i in 0..n {
        if on_segment(polygon[j], polygon[i], point) {
            return true;
        }
        j = i;
    }

    false
}

/// Whether `p` lies on the closed segment from `a` to `b`.
fn on_segment(a: (f64, f64), b: (f64, f64), p: (f64, f64)) -> bool {
    let cross = (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0);
    if cross != 0.0 {
        return false;
    }

    // Collinear; check p falls within the segment's extent.
    p.0 >= a.0.min(b.0) && p.0 <= a.0.max(b.0) && p.1 >= a.1.min(b.1) && p.1 <= a.1.max(b.1)
}
