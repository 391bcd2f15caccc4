//! Open a URL in the default browser.

use std::process::Command;

use anyhow::{bail, Context, Result};

#[cfg(target_os = "macos")]
fn opener(url: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(target_os = "windows")]
fn opener(url: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "", url]);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}

pub fn open_url(url: &str) -> Result<()> {
    let mut cmd = opener(url);
    let program = cmd.get_program().to_string_lossy().to_string();
    log::debug!("Opening \"{}\" with {}", url, program);

    let status = cmd
        .status()
        .with_context(|| format!("Failed to launch {program}"))?;
    if !status.success() {
        bail!("{program} exited with {status} while opening {url}");
    }
    Ok(())
}
