//! Salesforce REST API version definitions.
//!
//! This module provides the [`ApiVersion`] type used to build Data REST API
//! URLs (`/services/data/{version}/...`).

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Salesforce REST API version.
///
/// Salesforce releases three API versions a year, numbered `vNN.0`. Values in
/// that shape parse into [`ApiVersion::Release`]; any other non-empty label is
/// kept verbatim as [`ApiVersion::Custom`] so sandboxes and pilot orgs with
/// unusual version paths still work.
///
/// # Example
///
/// ```rust
/// use salesforce_api::ApiVersion;
///
/// let version: ApiVersion = "v62.0".parse().unwrap();
/// assert_eq!(version, ApiVersion::release(62));
/// assert_eq!(version.to_string(), "v62.0");
///
/// // The leading `v` is optional
/// let version: ApiVersion = "61.0".parse().unwrap();
/// assert_eq!(version.to_string(), "v61.0");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// A numbered release such as `v62.0`.
    Release {
        /// Major version number.
        major: u16,
        /// Minor version number (always 0 for published releases).
        minor: u16,
    },
    /// Any other version label, used as-is in URLs.
    Custom(String),
}

impl ApiVersion {
    /// Returns a numbered release version `v{major}.0`.
    #[must_use]
    pub const fn release(major: u16) -> Self {
        Self::Release { major, minor: 0 }
    }

    /// Returns the latest release this crate was tested against (Winter '25).
    #[must_use]
    pub const fn latest() -> Self {
        Self::release(62)
    }

    /// Parses `vNN.N` or `NN.N` into a release, but only if the label prints
    /// back unchanged (apart from the optional `v`).
    fn parse_release(s: &str) -> Option<Self> {
        let numeric = s.strip_prefix('v').unwrap_or(s);
        let (major, minor) = numeric.split_once('.')?;
        let major: u16 = major.parse().ok()?;
        let minor: u16 = minor.parse().ok()?;

        (format!("{major}.{minor}") == numeric).then_some(Self::Release { major, minor })
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Release { major, minor } => write!(f, "v{major}.{minor}"),
            Self::Custom(s) => f.write_str(s),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.is_empty() || s.contains(['/', '?', '#', ' ']) {
            return Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            });
        }

        Ok(Self::parse_release(s).unwrap_or_else(|| Self::Custom(s.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_version_parses_releases() {
        assert_eq!("v62.0".parse::<ApiVersion>().unwrap(), ApiVersion::release(62));
        assert_eq!("58.0".parse::<ApiVersion>().unwrap(), ApiVersion::release(58));
        assert_eq!(
            " v59.0 ".parse::<ApiVersion>().unwrap(),
            ApiVersion::release(59)
        );
    }

    #[test]
    fn test_api_version_display() {
        assert_eq!(format!("{}", ApiVersion::release(62)), "v62.0");
        assert_eq!(
            format!("{}", ApiVersion::Custom("testApiVersion".to_string())),
            "testApiVersion"
        );
    }

    #[test]
    fn test_api_version_keeps_custom_labels() {
        let version: ApiVersion = "testApiVersion".parse().unwrap();
        assert_eq!(version, ApiVersion::Custom("testApiVersion".to_string()));
    }

    #[test]
    fn test_api_version_rejects_invalid() {
        assert!("".parse::<ApiVersion>().is_err());
        assert!("   ".parse::<ApiVersion>().is_err());
        assert!("v62.0/sobjects".parse::<ApiVersion>().is_err());
        assert!("v62 0".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn test_non_canonical_numbers_are_kept_verbatim() {
        for label in ["v062.0", "62.00", "v62.", "v.0", "+62.0"] {
            let version: ApiVersion = label.parse().unwrap();
            assert_eq!(version, ApiVersion::Custom(label.to_string()));
            assert_eq!(version.to_string(), label);
        }
    }

    #[test]
    fn test_bare_release_number_gains_prefix() {
        let version: ApiVersion = "61.0".parse().unwrap();
        assert_eq!(version, ApiVersion::release(61));
        assert_eq!(version.to_string(), "v61.0");
    }
}
