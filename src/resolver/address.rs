//! @acp:module "Address Override"
//! @acp:summary "Extract the explicit variant request from a page address"
//! @acp:domain cli
//! @acp:layer parse

use url::Url;

/// Default query parameter carrying an explicit variant request
pub const DEFAULT_QUERY_PARAM: &str = "variant";

/// Explicit variant request taken from the page address.
///
/// Holds the raw candidate; whether it names a registered variant is decided
/// by the resolver. Malformed addresses simply produce no candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOverride {
    candidate: Option<String>,
}

impl RequestOverride {
    /// No override present
    pub fn none() -> Self {
        Self::default()
    }

    /// Override with a raw candidate value
    pub fn new(candidate: impl Into<String>) -> Self {
        let candidate = candidate.into();
        if candidate.trim().is_empty() {
            return Self::none();
        }
        Self {
            candidate: Some(candidate),
        }
    }

    /// Read `param` from a full URL or a bare query string (`?a=b` or `a=b`)
    pub fn from_address(address: &str, param: &str) -> Self {
        let address = address.trim();
        if address.is_empty() {
            return Self::none();
        }

        let query = match Url::parse(address) {
            Ok(url) => url.query().map(str::to_string),
            Err(_) => Some(match address.split_once('?') {
                Some((_, query)) => query.to_string(),
                None => address.to_string(),
            }),
        };

        let Some(query) = query else {
            return Self::none();
        };
        // Fragments are not part of the query
        let query = query.split('#').next().unwrap_or_default();

        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == param)
            .map(|(_, value)| Self::new(value.into_owned()))
            .unwrap_or_default()
    }

    pub fn candidate(&self) -> Option<&str> {
        self.candidate.as_deref()
    }

    pub fn is_present(&self) -> bool {
        self.candidate.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(address: &str) -> Option<String> {
        RequestOverride::from_address(address, DEFAULT_QUERY_PARAM)
            .candidate()
            .map(str::to_string)
    }

    #[test]
    fn test_full_url() {
        assert_eq!(read("https://example.com/?variant=c").as_deref(), Some("c"));
        assert_eq!(read("https://example.com/page?x=1&variant=B#top").as_deref(), Some("B"));
    }

    #[test]
    fn test_bare_query() {
        assert_eq!(read("?variant=a").as_deref(), Some("a"));
        assert_eq!(read("variant=D").as_deref(), Some("D"));
        assert_eq!(read("/index.html?variant=b").as_deref(), Some("b"));
        assert_eq!(read("?variant=b#links").as_deref(), Some("b"));
    }

    #[test]
    fn test_percent_decoding() {
        assert_eq!(read("?variant=%43").as_deref(), Some("C"));
    }

    #[test]
    fn test_first_occurrence_wins() {
        assert_eq!(read("?variant=a&variant=b").as_deref(), Some("a"));
    }

    #[test]
    fn test_absent_values() {
        assert!(read("").is_none());
        assert!(read("https://example.com/").is_none());
        assert!(read("?variant=").is_none());
        assert!(read("?other=A").is_none());
        assert!(read("?variant=%20%20").is_none());
    }

    #[test]
    fn test_custom_param() {
        let request = RequestOverride::from_address("?look=b", "look");
        assert_eq!(request.candidate(), Some("b"));
    }
}
