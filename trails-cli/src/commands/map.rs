use anyhow::{Context, Result};
use std::path::PathBuf;

use super::{client, default_output};

pub fn run(url: &str, trail: &str, output: Option<PathBuf>, geojson: bool) -> Result<()> {
    let points = client(url)?
        .get_trail_points(trail)
        .with_context(|| format!("Failed to get points of trail '{}'", trail))?;

    let map = trails::create_map(&points)
        .with_context(|| format!("Failed to build map of trail '{}'", trail))?;

    let extension = if geojson { "geojson" } else { "html" };
    let output_path = output.unwrap_or_else(|| default_output(trail, extension));

    if geojson {
        let collection: geojson::FeatureCollection = map.to_geojson();
        std::fs::write(&output_path, serde_json::to_string(&collection)?)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
    } else {
        map.save_html(&output_path)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
    }

    println!("{}", map);
    println!("Map written to {}", output_path.display());

    Ok(())
}
