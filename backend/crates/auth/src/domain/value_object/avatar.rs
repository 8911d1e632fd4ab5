//! Avatar URL generation
//!
//! Authors who register without an avatar (and federated accounts whose
//! provider sends none) get a generated initials-placeholder URL.

/// Base URL of the initials-avatar service
const AVATAR_BASE_URL: &str = "https://ui-avatars.com/api/";

/// Build the default avatar URL for a display name
///
/// The name goes into the query string with spaces as `+`; anything
/// outside ASCII alphanumerics is dropped rather than percent-encoded.
pub fn default_avatar_url(name: &str) -> String {
    let mut encoded = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            encoded.push(ch);
        } else if ch == ' ' && !encoded.ends_with('+') && !encoded.is_empty() {
            encoded.push('+');
        }
    }
    let encoded = encoded.trim_end_matches('+');

    if encoded.is_empty() {
        format!("{}?name=Author", AVATAR_BASE_URL)
    } else {
        format!("{}?name={}", AVATAR_BASE_URL, encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_avatar_url() {
        assert_eq!(
            default_avatar_url("John Doe"),
            "https://ui-avatars.com/api/?name=John+Doe"
        );
    }

    #[test]
    fn test_default_avatar_url_strips_specials() {
        assert_eq!(
            default_avatar_url("A. O'Brien"),
            "https://ui-avatars.com/api/?name=A+OBrien"
        );
    }

    #[test]
    fn test_default_avatar_url_empty_name() {
        assert_eq!(
            default_avatar_url(""),
            "https://ui-avatars.com/api/?name=Author"
        );
        assert_eq!(
            default_avatar_url("!!!"),
            "https://ui-avatars.com/api/?name=Author"
        );
    }
}
