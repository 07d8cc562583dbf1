use anyhow::{Context, Result};
use std::path::Path;
use trails::extract;

use super::{client, default_output};

pub const CADOVER: &str = "Cadover Bridge to Shaugh Bridge Circular";
pub const ADA: &str = "Ada Lovelace";

pub fn run(url: &str, output_dir: &Path) -> Result<()> {
    let client = client(url)?;
    println!("{}", client);

    let users = client.get_users().context("Failed to get users")?;
    let trails = client.get_trails().context("Failed to get trails")?;
    let all_points = client
        .get_location_points()
        .context("Failed to get location points")?;
    tracing::info!(
        users = users.len(),
        trails = trails.len(),
        points = all_points.len(),
        "Fetched collections"
    );

    let cadover_points = client
        .get_trail_points(CADOVER)
        .with_context(|| format!("Failed to get points of trail '{}'", CADOVER))?;

    let comments = extract::comment_ids(&cadover_points);
    println!(
        "{}: {} points, {} comments",
        CADOVER,
        comments.len(),
        extract::comment_count(&cadover_points)
    );

    let ada = client
        .get_user_by_name(ADA)
        .with_context(|| format!("Failed to get user '{}'", ADA))?;
    println!("{}", serde_json::to_string_pretty(&ada)?);

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let plot = trails::plot_trail(&cadover_points).context("Failed to plot trail")?;
    let plot_path = output_dir.join(default_output(CADOVER, "svg"));
    plot.save(&plot_path)
        .with_context(|| format!("Failed to write {}", plot_path.display()))?;
    println!("Plot written to {}", plot_path.display());

    let map = trails::create_map(&cadover_points).context("Failed to build map")?;
    let map_path = output_dir.join(default_output(CADOVER, "html"));
    map.save_html(&map_path)
        .with_context(|| format!("Failed to write {}", map_path.display()))?;
    println!("{}", map);
    println!("Map written to {}", map_path.display());

    Ok(())
}
