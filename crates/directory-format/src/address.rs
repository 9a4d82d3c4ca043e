//! Street normalization and multi-line address layout.

use directory_core::Address;

/// Moves a trailing house number to the front of a street segment.
///
/// `"Main St 123"` becomes `"123 Main St"`. Streets whose last token is not
/// purely numeric, or that are a single token, are returned unchanged.
#[must_use]
pub fn normalize_street(street: &str) -> String {
    let tokens: Vec<&str> = street.split_whitespace().collect();
    match tokens.split_last() {
        Some((last, rest))
            if !rest.is_empty() && last.chars().all(|c| c.is_ascii_digit()) =>
        {
            format!("{last} {}", rest.join(" "))
        }
        _ => street.to_string(),
    }
}

/// Applies [`normalize_street`] to the first comma-separated segment of a
/// full address and rejoins the segments with `", "`.
#[must_use]
pub fn normalize_street_in_address(address: &str) -> String {
    let mut segments = address.split(',').map(str::trim);
    let Some(street) = segments.next() else {
        return address.to_string();
    };

    std::iter::once(normalize_street(street))
        .chain(segments.map(str::to_string))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Reflows a `", "`-separated address onto multiple lines.
///
/// Four segments become `street / city, state / last`; three become
/// `street / city, state`. Any other count is returned unchanged.
#[must_use]
pub fn format_address(address: &str) -> String {
    let parts: Vec<&str> = address.split(", ").collect();
    match parts.as_slice() {
        [street, city, state, last] => format!("{street}\n{city}, {state}\n{last}"),
        [street, city, state] => format!("{street}\n{city}, {state}"),
        _ => address.to_string(),
    }
}

/// Composes the one-line form `"street, city, state zip, country"`,
/// skipping blank parts.
#[must_use]
pub fn compose_address(address: &Address) -> String {
    let state_zip = [address.state.trim(), address.zip.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    [
        address.street.trim(),
        address.city.trim(),
        state_zip.as_str(),
        address.country.trim(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(", ")
}
