//! JSON output.

use anyhow::{Context, Result};
use serde::Serialize;

/// Print any result as pretty JSON on stdout
pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Error serializing results")?;
    println!("{json}");
    Ok(())
}
