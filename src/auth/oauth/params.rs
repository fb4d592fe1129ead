//! Per-flow request parameters.

/// An ordered list of key/value parameters passed to an OAuth2 flow.
///
/// Order is preserved exactly: the authorization URL and the password and
/// refresh flows append caller fields to the query string in the order they
/// were added.
///
/// # Example
///
/// ```rust
/// use salesforce_api::auth::oauth::FlowParams;
///
/// let params = FlowParams::new()
///     .with("scope", "api refresh_token")
///     .with("state", "xyz");
///
/// assert_eq!(params.get("scope"), Some("api refresh_token"));
/// assert_eq!(params.iter().map(|(k, _)| k).collect::<Vec<_>>(), ["scope", "state"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlowParams {
    pairs: Vec<(String, String)>,
}

impl FlowParams {
    /// Creates an empty parameter list.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Parameters for the authorization-code flow.
    #[must_use]
    pub fn code(code: impl Into<String>) -> Self {
        Self::new().with("code", code)
    }

    /// Parameters for the password flow.
    #[must_use]
    pub fn password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::new()
            .with("username", username)
            .with("password", password)
    }

    /// Parameters for the refresh-token flow.
    #[must_use]
    pub fn refresh_token(refresh_token: impl Into<String>) -> Self {
        Self::new().with("refresh_token", refresh_token)
    }

    /// Parameters for the revoke flow.
    #[must_use]
    pub fn token(token: impl Into<String>) -> Self {
        Self::new().with("token", token)
    }

    /// Appends a parameter and returns the list.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    /// Appends a parameter.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Returns the value of the first parameter named `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the value of `key` unless it is absent or empty.
    pub(crate) fn required(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Iterates over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns `true` if no parameters were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FlowParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Builds a query string, percent-encoding every key and value.
pub(crate) fn encode_query<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
