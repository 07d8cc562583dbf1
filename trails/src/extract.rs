//! Field extraction over location points.
//!
//! Every function walks the input once and keeps index alignment with it: a
//! point missing a field contributes `None` at its position rather than being
//! skipped.

use crate::records::LocationPoint;

/// Latitudes and longitudes as two parallel sequences.
pub fn lat_longs(points: &[LocationPoint]) -> (Vec<Option<f64>>, Vec<Option<f64>>) {
    points.iter().map(|p| (p.latitude, p.longitude)).unzip()
}

/// `(latitude, longitude)` pairs in input order.
pub fn coordinates(points: &[LocationPoint]) -> Vec<(Option<f64>, Option<f64>)> {
    points.iter().map(|p| (p.latitude, p.longitude)).collect()
}

/// Elevation of each point in input order.
pub fn elevations(points: &[LocationPoint]) -> Vec<Option<f64>> {
    points.iter().map(|p| p.elevation).collect()
}

/// Every `commentId` in input order, including the `"NC"` sentinel.
///
/// Also logs `Total number of comments in trail: {count}`, where the count
/// excludes `"NC"` entries. Use [`comment_count`] to get that number directly.
pub fn comment_ids(points: &[LocationPoint]) -> Vec<Option<String>> {
    let ids: Vec<Option<String>> = points.iter().map(|p| p.comment_id.clone()).collect();
    tracing::info!("Total number of comments in trail: {}", comment_count(points));
    ids
}

/// Number of points whose `commentId` is not `"NC"`.
pub fn comment_count(points: &[LocationPoint]) -> usize {
    points.iter().filter(|p| p.has_comment()).count()
}

/// The `trailName` of the first point, if any.
pub fn trail_name(points: &[LocationPoint]) -> Option<&str> {
    points.first().and_then(|p| p.trail_name.as_deref())
}
