use anyhow::{Context, Result};
use trails::extract;

use super::client;

pub fn run(url: &str, trail: &str) -> Result<()> {
    let points = client(url)?
        .get_trail_points(trail)
        .with_context(|| format!("Failed to get points of trail '{}'", trail))?;

    let ids = extract::comment_ids(&points);
    for id in &ids {
        println!("{}", id.as_deref().unwrap_or("-"));
    }

    println!();
    println!(
        "{} points, {} comments",
        ids.len(),
        extract::comment_count(&points)
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::demo::CADOVER;
    use crate::commands::testing::spawn_trail_service;

    #[test]
    fn test_comments_of_trail() {
        let url = spawn_trail_service();
        assert!(run(&url, CADOVER).is_ok());
    }

    #[test]
    fn test_comments_bad_url() {
        let err = run("not a url", CADOVER).unwrap_err();
        assert!(err.to_string().contains("Invalid TrailService URL"));
    }
}
