//! Combined-address decomposition.

/// The four pieces a combined address string decomposes into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressParts {
    pub street: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
}

/// Split a combined address into street / city / province / postal code.
///
/// Two strategies, in order: a comma-or-newline split assigned
/// positionally when it yields at least three parts, otherwise a
/// whitespace split assigned from the tail inward (postal code, province,
/// city, remainder as street). This is a heuristic, not an address parser:
/// no country awareness, no postal-code shape validation.
pub fn decompose_address(raw: &str) -> AddressParts {
    let delimited: Vec<&str> = raw
        .split([',', '\n'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    if delimited.len() >= 3 {
        return AddressParts {
            street: delimited[0].to_string(),
            city: delimited[1].to_string(),
            province: delimited[2].to_string(),
            postal_code: delimited.get(3).map(|part| (*part).to_string()).unwrap_or_default(),
        };
    }

    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let mut parts = AddressParts::default();
    let mut remaining = tokens.as_slice();
    if let Some((last, rest)) = remaining.split_last() {
        parts.postal_code = (*last).to_string();
        remaining = rest;
    }
    if let Some((last, rest)) = remaining.split_last() {
        parts.province = (*last).to_string();
        remaining = rest;
    }
    if let Some((last, rest)) = remaining.split_last() {
        parts.city = (*last).to_string();
        remaining = rest;
    }
    parts.street = remaining.join(" ");
    parts
}
