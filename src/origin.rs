// SPDX-License-Identifier: MPL-2.0
//! Resolution of the distribution server origin.
//!
//! The generated shell commands download the installer script from the
//! server they were displayed for, so only the scheme and host portion of
//! the configured server URL is meaningful. Everything after the host
//! (path, query, fragment) is discarded.

use std::fmt;

/// Scheme used when the configured server URL carries none.
const DEFAULT_SCHEME: &str = "https";

/// Scheme-plus-host base URL of the distribution server.
///
/// Resolution is pure string composition: no network access, no failure
/// modes. Any input produces an origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    base: String,
}

impl Origin {
    /// Derives the origin from a server URL.
    ///
    /// A URL without an explicit `scheme://` prefix is assumed to be
    /// `https`. The host keeps an explicit port when one is present.
    pub fn resolve(server_url: &str) -> Self {
        let trimmed = server_url.trim();
        let (scheme, remainder) = match trimmed.split_once("://") {
            Some((scheme, remainder)) => (scheme, remainder),
            None => (DEFAULT_SCHEME, trimmed),
        };
        let host = remainder
            .split(['/', '?', '#'])
            .next()
            .unwrap_or(remainder);

        Self {
            base: format!("{scheme}://{host}"),
        }
    }

    /// Returns the origin as a `scheme://host` string.
    pub fn base_url(&self) -> &str {
        &self.base
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_strips_path_and_query() {
        let origin = Origin::resolve("https://install.example.com/release/latest?x=1");
        assert_eq!(origin.base_url(), "https://install.example.com");
    }

    #[test]
    fn resolve_keeps_explicit_port() {
        let origin = Origin::resolve("http://10.0.0.5:8443/panel");
        assert_eq!(origin.base_url(), "http://10.0.0.5:8443");
    }

    #[test]
    fn resolve_defaults_to_https_without_scheme() {
        let origin = Origin::resolve("install.example.com/some/path");
        assert_eq!(origin.base_url(), "https://install.example.com");
    }

    #[test]
    fn resolve_strips_fragment() {
        let origin = Origin::resolve("https://install.example.com#anchor");
        assert_eq!(origin.base_url(), "https://install.example.com");
    }

    #[test]
    fn resolve_trims_surrounding_whitespace() {
        let origin = Origin::resolve("  https://install.example.com  ");
        assert_eq!(origin.base_url(), "https://install.example.com");
    }

    #[test]
    fn display_matches_base_url() {
        let origin = Origin::resolve("https://install.example.com");
        assert_eq!(format!("{}", origin), "https://install.example.com");
    }
}
