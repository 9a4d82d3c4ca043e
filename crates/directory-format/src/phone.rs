//! Phone number normalization and formatting.
//!
//! Parsing and validation are delegated to `phonenumber` (a port of
//! libphonenumber). Every entry point is infallible: anything that does not
//! parse to a valid number for the resolved region comes back as the
//! cleaned input.

use phonenumber::{country, Mode};

use crate::countries;
use crate::region::infer_region_code;

/// Output mode for [`format_phone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneFormat {
    /// National format, no leading country code.
    Display,
    /// E.164 (`+<country code><number>`), for dial actions.
    Dial,
}

/// Formats a provider phone string for display in the POI's country.
#[must_use]
pub fn format_phone_for_display(raw_phone: Option<&str>, country: Option<&str>) -> String {
    format_phone(raw_phone, &infer_region_code(country), PhoneFormat::Display)
}

/// Formats a provider phone string as a dialable E.164 number.
#[must_use]
pub fn format_phone_for_dial(raw_phone: Option<&str>, country: Option<&str>) -> String {
    format_phone(raw_phone, &infer_region_code(country), PhoneFormat::Dial)
}

/// Formats `raw_phone` against an already-resolved alpha-2 `region`.
///
/// Returns `""` for blank input and the cleaned input when the number does
/// not parse or is not valid for `region`.
#[must_use]
pub fn format_phone(raw_phone: Option<&str>, region: &str, format: PhoneFormat) -> String {
    let phone = strip_tel_scheme(raw_phone.unwrap_or_default());
    if phone.is_empty() {
        return String::new();
    }

    let to_parse = normalize_for_region(phone, region);
    let region_id = region.parse::<country::Id>().ok();

    let number = match phonenumber::parse(region_id, &to_parse) {
        Ok(number) if phonenumber::is_valid(&number) => number,
        Ok(_) => {
            tracing::debug!(phone, region, "phone number not valid for region");
            return phone.to_string();
        }
        Err(err) => {
            tracing::debug!(phone, region, error = %err, "phone number did not parse");
            return phone.to_string();
        }
    };

    let mode = match format {
        PhoneFormat::Display => Mode::National,
        PhoneFormat::Dial => Mode::E164,
    };
    number.format().mode(mode).to_string()
}

/// Trims and drops a leading `tel:` scheme (any case).
fn strip_tel_scheme(raw: &str) -> &str {
    let trimmed = raw.trim();
    match trimmed.get(..4) {
        Some(scheme) if scheme.eq_ignore_ascii_case("tel:") => trimmed[4..].trim(),
        _ => trimmed,
    }
}

/// Adds the missing `+` to numbers that already start with the region's
/// calling code (`4930...` in `DE` becomes `+4930...`).
///
/// Numbers shorter than 8 digits are left for the parser to interpret as
/// local numbers.
fn normalize_for_region(phone: &str, region: &str) -> String {
    if phone.starts_with('+') || phone.starts_with("00") {
        return phone.to_string();
    }

    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < 8 {
        return phone.to_string();
    }

    match countries::calling_code(region) {
        Some(code) if digits.starts_with(&code.to_string()) => format!("+{digits}"),
        _ => phone.to_string(),
    }
}
