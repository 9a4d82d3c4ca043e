//! Phone formatting command handler.

use directory_core::AppConfig;
use directory_format::{format_phone, infer_region_code_or, system_region, PhoneFormat};

/// Formats `number` in the region `country` resolves to.
///
/// Without `--country` the configured default region applies, then the
/// process locale.
pub(crate) fn format_number(
    config: &AppConfig,
    number: &str,
    country: Option<&str>,
    dial: bool,
) -> String {
    let default_region = config
        .default_region
        .clone()
        .unwrap_or_else(system_region);
    let region = infer_region_code_or(country, &default_region);
    let format = if dial {
        PhoneFormat::Dial
    } else {
        PhoneFormat::Display
    };
    format_phone(Some(number), &region, format)
}

/// Print `number` formatted for display or dialing.
pub(crate) fn run_phone(config: &AppConfig, number: &str, country: Option<&str>, dial: bool) {
    println!("{}", format_number(config, number, country, dial));
}
