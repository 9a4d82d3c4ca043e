//! Best-effort mapping from free-text or coded country strings to ISO
//! 3166-1 alpha-2 region codes.
//!
//! This is a heuristic, not geocoding: the first stage that matches wins.

use crate::countries;

const FALLBACK_REGION: &str = "US";

/// Common names and abbreviations checked before the full name table.
const COMMON_NAMES: &[(&str, &str)] = &[
    ("united states", "US"),
    ("usa", "US"),
    ("us", "US"),
    ("canada", "CA"),
    ("united kingdom", "GB"),
    ("uk", "GB"),
    ("germany", "DE"),
    ("deutschland", "DE"),
];

/// Infers an alpha-2 region code, using the process locale for blank input.
///
/// Resolution order:
/// 1. blank or absent: [`system_region`]
/// 2. two ASCII letters: upper-cased as-is
/// 3. three ASCII letters: alpha-3 lookup
/// 4. a short table of common names, then exact (case-insensitive)
///    display-name match
/// 5. `"US"`
#[must_use]
pub fn infer_region_code(country: Option<&str>) -> String {
    infer_region_code_or(country, &system_region())
}

/// Like [`infer_region_code`], but blank input resolves to `default_region`.
#[must_use]
pub fn infer_region_code_or(country: Option<&str>, default_region: &str) -> String {
    let Some(trimmed) = country.map(str::trim).filter(|c| !c.is_empty()) else {
        let default_region = default_region.trim();
        return if default_region.is_empty() {
            FALLBACK_REGION.to_string()
        } else {
            default_region.to_ascii_uppercase()
        };
    };

    let all_letters = trimmed.chars().all(|c| c.is_ascii_alphabetic());

    if all_letters && trimmed.len() == 2 {
        return trimmed.to_ascii_uppercase();
    }

    if all_letters && trimmed.len() == 3 {
        if let Some(country) = countries::by_alpha3(trimmed) {
            return country.alpha2.to_string();
        }
    }

    let normalized = trimmed.to_lowercase();
    if let Some((_, code)) = COMMON_NAMES.iter().find(|(name, _)| *name == normalized) {
        return (*code).to_string();
    }

    countries::by_name(&normalized)
        .map_or(FALLBACK_REGION, |country| country.alpha2)
        .to_string()
}

/// The region of the process locale (`LC_ALL`, `LC_MESSAGES`, then `LANG`),
/// falling back to `"US"`.
#[must_use]
pub fn system_region() -> String {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|locale| region_from_locale(&locale))
        .unwrap_or_else(|| FALLBACK_REGION.to_string())
}

/// Extracts the territory from a POSIX or BCP 47 locale tag
/// (`de_DE.UTF-8` and `de-AT` both carry one; `C` does not).
fn region_from_locale(locale: &str) -> Option<String> {
    let tag = locale.split(['.', '@']).next()?;
    let territory = tag.split(['_', '-']).nth(1)?;
    (territory.len() == 2 && territory.chars().all(|c| c.is_ascii_alphabetic()))
        .then(|| territory.to_ascii_uppercase())
}

#[cfg(test)]
#[path = "region_test.rs"]
mod tests;
