use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use trails::{extract, LocationPoint};

use super::client;

#[derive(Serialize)]
struct PointRow<'a> {
    latitude: Option<f64>,
    longitude: Option<f64>,
    elevation: Option<f64>,
    #[serde(rename = "commentId")]
    comment_id: Option<&'a str>,
    #[serde(rename = "trailName")]
    trail_name: Option<&'a str>,
}

pub fn run(url: &str, trail: &str, output: Option<PathBuf>) -> Result<()> {
    let points = client(url)?
        .get_trail_points(trail)
        .with_context(|| format!("Failed to get points of trail '{}'", trail))?;

    let out: Box<dyn Write> = match &output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).context("Failed to create output file")?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    write_csv(&points, out)?;

    if let Some(path) = output {
        eprintln!("Exported {} points to {}", points.len(), path.display());
    }

    Ok(())
}

/// Write the extracted columns of `points` as CSV, one row per point.
fn write_csv<W: Write>(points: &[LocationPoint], out: W) -> Result<()> {
    let (lats, lons) = extract::lat_longs(points);
    let elevations = extract::elevations(points);

    let mut writer = csv::Writer::from_writer(out);
    for (i, point) in points.iter().enumerate() {
        writer.serialize(PointRow {
            latitude: lats[i],
            longitude: lons[i],
            elevation: elevations[i],
            comment_id: point.comment_id.as_deref(),
            trail_name: point.trail_name.as_deref(),
        })?;
    }
    writer.flush()?;

    Ok(())
}
