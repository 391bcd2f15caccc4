use anyhow::{Context, Result};

use crate::resolver::Resolution;

pub fn print_resolution(resolution: &Resolution) -> Result<()> {
    let json = serde_json::to_string_pretty(resolution).context("Failed to serialize to JSON")?;
    println!("{json}");
    Ok(())
}
