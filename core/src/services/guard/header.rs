//! Authorization header parsing

/// HTTP Basic scheme name
pub const BASIC_SCHEME: &str = "Basic";

/// HTTP Bearer scheme name
pub const BEARER_SCHEME: &str = "Bearer";

/// Splits an `Authorization` value into scheme and credentials
///
/// The credentials part is trimmed and may be empty. Returns `None` only for a
/// blank header.
pub fn parse_authorization(value: &str) -> Option<(&str, &str)> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    match value.split_once(char::is_whitespace) {
        Some((scheme, rest)) => Some((scheme, rest.trim())),
        None => Some((value, "")),
    }
}

/// Checks whether `scheme` names `expected`, ignoring ASCII case
pub(crate) fn scheme_matches(scheme: &str, expected: &str) -> bool {
    scheme.eq_ignore_ascii_case(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_authorization() {
        assert_eq!(parse_authorization("Bearer abc"), Some(("Bearer", "abc")));
        assert_eq!(parse_authorization("  basic   dXNlcjpwdw==  "), Some(("basic", "dXNlcjpwdw==")));
        assert_eq!(parse_authorization("Bearer"), Some(("Bearer", "")));
        assert_eq!(parse_authorization("   "), None);
    }

    #[test]
    fn test_scheme_matches() {
        assert!(scheme_matches("bearer", BEARER_SCHEME));
        assert!(scheme_matches("BASIC", BASIC_SCHEME));
        assert!(!scheme_matches("Token", BEARER_SCHEME));
    }
}
