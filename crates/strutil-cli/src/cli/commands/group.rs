//! Group command: thousands grouping of a digit string.

use anyhow::Result;
use strutil_core::thousands;

fn grouped(digits: &str, strict: bool, separator: char) -> Result<String> {
    if strict {
        // Validation only; grouping below honors the chosen separator.
        thousands::format_checked(digits)?;
    }
    Ok(thousands::format_with(digits, separator))
}

pub fn run_group(digits: &str, strict: bool, separator: char) -> Result<()> {
    tracing::info!("group len={} strict={} separator={:?}", digits.len(), strict, separator);
    println!("{}", grouped(digits, strict, separator)?);
    Ok(())
}
