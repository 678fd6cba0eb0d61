const AIRLINE_LOGO_BASE: &str = "https://www.gstatic.com/flights/airline_logos/70px";

/// Extracts the IATA code from inputs like `"London Heathrow (LHR)"`.
/// Inputs without a well-formed `(XXX)` annotation come back trimmed.
pub fn normalize_airport_code(input: &str) -> String {
    let trimmed = input.trim();
    if !trimmed.contains('(') {
        return trimmed.to_string();
    }

    let mut rest = trimmed;
    while let Some(open) = rest.find('(') {
        let after = &rest[open + 1..];
        let bytes = after.as_bytes();
        // Byte-wise so multi-byte text inside the parentheses never splits a char
        if bytes.len() >= 4 && bytes[3] == b')' && bytes[..3].iter().all(u8::is_ascii_uppercase) {
            return after[..3].to_string();
        }
        rest = after;
    }

    trimmed.to_string()
}

/// Three uppercase ASCII letters.
pub fn is_iata_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}

/// Text placed in a location input when a suggestion is picked.
pub fn suggestion_label(name: &str, code: &str) -> String {
    format!("{} ({})", name, code)
}

pub fn airline_logo_url(code: &str) -> String {
    format!("{}/{}.png", AIRLINE_LOGO_BASE, code)
}
