/// Validates the `local@domain.tld` shape accepted by the waitlist.
///
/// Rules (applied to the raw input, nothing is trimmed):
/// - no whitespace anywhere, byte-order mark included
/// - exactly one `@`, with a non-empty local part
/// - the domain contains a `.` with non-empty text on both sides of it
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(is_space) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Any dot works as long as something precedes and follows it.
    domain
        .match_indices('.')
        .any(|(idx, _)| idx > 0 && idx + 1 < domain.len())
}

// `char::is_whitespace` misses U+FEFF.
fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Key used for duplicate detection. Comparison is case-insensitive and
/// ignores surrounding whitespace on stored values.
pub fn email_key(email: &str) -> String {
    email.trim().to_lowercase()
}
