use anyhow::{Context, Result};
use std::path::PathBuf;

use super::{client, default_output};

pub fn run(url: &str, trail: &str, output: Option<PathBuf>) -> Result<()> {
    let points = client(url)?
        .get_trail_points(trail)
        .with_context(|| format!("Failed to get points of trail '{}'", trail))?;

    let plot = trails::plot_trail(&points)
        .with_context(|| format!("Failed to plot trail '{}'", trail))?;

    let output_path = output.unwrap_or_else(|| default_output(trail, "svg"));
    plot.save(&output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    if let Some((min, max)) = plot.elevation_range() {
        println!("Elevation: {:.1}m - {:.1}m", min, max);
    }
    println!("Plotted {} points to {}", plot.len(), output_path.display());

    Ok(())
}
