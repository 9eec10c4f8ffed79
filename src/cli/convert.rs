//! Convert command implementation

use anyhow::{Context, Result};

use galaxycode::convert::{convert, format_decimal};

/// Convert `value` from base `from` to base `to`
pub async fn convert_command(value: &str, from: u32, to: u32) -> Result<()> {
    let converted = convert(value, from, to)
        .with_context(|| format!("Cannot convert '{}' from base {} to base {}", value, from, to))?;

    if to == 10 {
        if let Ok(n) = converted.parse::<i128>() {
            println!("{}", format_decimal(n));
            return Ok(());
        }
    }

    println!("{}", converted);
    Ok(())
}
