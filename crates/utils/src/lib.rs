// utils crate

use url::{form_urlencoded, Url};

/// Query parameter used to pre-fill the address field
pub const PREFILL_PARAM: &str = "test";

/// Extract the `test` query parameter from a URL or query string.
///
/// Accepts a full URL (`https://host/page?test=...`) or a bare query
/// (`?test=...` or `a=1&test=...`). Only the first `test` pair counts;
/// an empty value yields `None`.
pub fn test_param(input: &str) -> Option<String> {
    query_param(input, PREFILL_PARAM)
}

/// Extract the first value of `key` from a URL or query string, with
/// `application/x-www-form-urlencoded` decoding
pub fn query_param(input: &str, key: &str) -> Option<String> {
    let input = input.trim();

    let value = match Url::parse(input) {
        Ok(url) => first_value(url.query_pairs(), key),
        Err(_) => {
            let query = bare_query(input)?;
            first_value(form_urlencoded::parse(query.as_bytes()), key)
        }
    };

    value.filter(|v| !v.is_empty())
}

fn first_value(pairs: form_urlencoded::Parse<'_>, key: &str) -> Option<String> {
    pairs
        .into_iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.into_owned())
}

// Query part of a relative reference such as `/page?a=b#frag`, `?a=b` or `a=b`
fn bare_query(input: &str) -> Option<&str> {
    let before_fragment = input.split('#').next().unwrap_or_default();
    match before_fragment.split_once('?') {
        Some((_, query)) => Some(query),
        None if before_fragment.contains('=') => Some(before_fragment),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_url() {
        assert_eq!(
            test_param("https://example.com/index.html?test=9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM"),
            Some("9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM".to_string())
        );
    }

    #[test]
    fn test_bare_query_strings() {
        assert_eq!(test_param("?test=abc"), Some("abc".to_string()));
        assert_eq!(test_param("mode=dark&test=abc"), Some("abc".to_string()));
    }

    #[test]
    fn test_value_is_decoded_verbatim() {
        assert_eq!(
            test_param("https://x/?test=invalid%2Daddress+%20x"),
            Some("invalid-address  x".to_string())
        );
    }

    #[test]
    fn test_fragment_is_ignored() {
        assert_eq!(test_param("/page?test=abc#result"), Some("abc".to_string()));
        assert_eq!(test_param("https://x/page#frag?test=abc"), None);
        assert_eq!(test_param("/page#frag?test=abc"), None);
    }

    #[test]
    fn test_first_value_wins() {
        assert_eq!(test_param("?test=one&test=two"), Some("one".to_string()));
        assert_eq!(test_param("?test=&test=abc"), None);
        assert_eq!(test_param("?test&test=second"), None);
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        assert_eq!(test_param("?test=%FF"), Some("\u{FFFD}".to_string()));
        assert_eq!(
            test_param("https://x/?test=a%FFb"),
            Some("a\u{FFFD}b".to_string())
        );
    }

    #[test]
    fn test_missing_or_empty_param() {
        assert_eq!(test_param("https://example.com/"), None);
        assert_eq!(test_param("https://example.com/?other=1"), None);
        assert_eq!(test_param("?test="), None);
        assert_eq!(test_param(""), None);
    }

    #[test]
    fn test_other_keys() {
        assert_eq!(query_param("?a=1&b=2", "b"), Some("2".to_string()));
        assert_eq!(query_param("?testing=1", "test"), None);
    }
}
