use anyhow::{Context, Result};
use trails::{LocationPoint, TrailRecord, UserRecord};

use super::client;

pub fn list_users(url: &str, json: bool) -> Result<()> {
    let users = client(url)?.get_users().context("Failed to get users")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&users)?);
        return Ok(());
    }

    println!("{:<8} {:<28} {}", "ID", "USERNAME", "EMAIL");
    println!("{}", "-".repeat(64));
    for user in &users {
        print_user_row(user);
    }
    println!();
    println!("Total: {} users", users.len());

    Ok(())
}

pub fn show_user(url: &str, name: &str) -> Result<()> {
    let user = client(url)?
        .get_user_by_name(name)
        .with_context(|| format!("Failed to get user '{}'", name))?;
    println!("{}", serde_json::to_string_pretty(&user)?);
    Ok(())
}

pub fn list_trails(url: &str, json: bool) -> Result<()> {
    let trails = client(url)?.get_trails().context("Failed to get trails")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&trails)?);
        return Ok(());
    }

    for trail in &trails {
        print_trail_row(trail);
    }
    println!();
    println!("Total: {} trails", trails.len());

    Ok(())
}

pub fn list_points(url: &str, trail: Option<&str>, json: bool) -> Result<()> {
    let client = client(url)?;
    let points = match trail {
        Some(name) => client
            .get_trail_points(name)
            .with_context(|| format!("Failed to get points of trail '{}'", name))?,
        None => client
            .get_location_points()
            .context("Failed to get location points")?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }

    println!(
        "{:>10} {:>10} {:>9} {:>8}  {}",
        "LATITUDE", "LONGITUDE", "ELEVATION", "COMMENT", "TRAIL"
    );
    println!("{}", "-".repeat(72));
    for point in &points {
        print_point_row(point);
    }
    println!();
    println!("Total: {} points", points.len());

    Ok(())
}

fn print_user_row(user: &UserRecord) {
    let id = user
        .user_id
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string());
    println!(
        "{:<8} {:<28} {}",
        id,
        user.username.as_deref().unwrap_or("-"),
        user.email.as_deref().unwrap_or("-")
    );
}

fn print_trail_row(trail: &TrailRecord) {
    match &trail.description {
        Some(description) => println!(
            "{}  ({})",
            trail.trail_name.as_deref().unwrap_or("-"),
            description
        ),
        None => println!("{}", trail.trail_name.as_deref().unwrap_or("-")),
    }
}

fn print_point_row(point: &LocationPoint) {
    println!(
        "{:>10} {:>10} {:>9} {:>8}  {}",
        format_opt(point.latitude, 5),
        format_opt(point.longitude, 5),
        format_opt(point.elevation, 1),
        point.comment_id.as_deref().unwrap_or("-"),
        point.trail_name.as_deref().unwrap_or("-")
    );
}

fn format_opt(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", precision, v),
        None => "-".to_string(),
    }
}
