use anyhow::{bail, Context, Result};

use super::client;

pub fn run(url: &str, trail: &str) -> Result<()> {
    let statuses = client(url)?
        .check_responses(trail)
        .context("Failed to reach TrailService")?;

    for (endpoint, status) in statuses.iter() {
        println!("{:<30} {}", endpoint, status);
    }

    if !statuses.all_ok() {
        bail!("Not every endpoint answered 200 OK");
    }

    Ok(())
}
