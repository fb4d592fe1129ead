//! HTTP response type returned by a transport.

use std::collections::HashMap;

/// A response as reported by a [`Transport`](crate::clients::Transport).
///
/// The body is kept as the exact string the server sent. Token responses are
/// verified against this raw form, and error values carry it unmodified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase header name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Returns the first value of the given header (case-insensitive name).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the Salesforce API usage header (`Sforce-Limit-Info`), if present.
    ///
    /// The value looks like `api-usage=18/5000`.
    #[must_use]
    pub fn limit_info(&self) -> Option<&str> {
        self.header("sforce-limit-info")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with_header(name: &str, value: &str) -> HttpResponse {
        let mut headers = HashMap::new();
        headers.insert(name.to_string(), vec![value.to_string()]);
        HttpResponse::new(200, headers, "{}".to_string())
    }

    #[test]
    fn test_is_ok_for_2xx_only() {
        assert!(HttpResponse::new(200, HashMap::new(), String::new()).is_ok());
        assert!(HttpResponse::new(204, HashMap::new(), String::new()).is_ok());
        assert!(!HttpResponse::new(302, HashMap::new(), String::new()).is_ok());
        assert!(!HttpResponse::new(400, HashMap::new(), String::new()).is_ok());
        assert!(!HttpResponse::new(500, HashMap::new(), String::new()).is_ok());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = response_with_header("content-type", "application/json");
        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(response.header("x-missing"), None);
    }

    #[test]
    fn test_limit_info() {
        let response = response_with_header("sforce-limit-info", "api-usage=18/5000");
        assert_eq!(response.limit_info(), Some("api-usage=18/5000"));
    }
}
