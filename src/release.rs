// SPDX-License-Identifier: MPL-2.0
//! Latest-release metadata published by the distribution server.
//!
//! The server exposes a small JSON document describing the most recent
//! agent build. The panel fetches it once at startup; when the fetch
//! fails for any reason the version block simply stays hidden and the
//! failure is logged, so the rest of the panel keeps working.

use crate::error::{Error, Result};
use crate::origin::Origin;
use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

/// Relative path of the metadata document on the distribution server.
pub const METADATA_PATH: &str = "/release/latest/metadata.json";

/// Latest-release descriptor. Unknown fields in the document are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseInfo {
    /// Release tag, e.g. `v1.4.2`.
    pub tag: String,
    /// Release date as published, expected ISO-8601.
    pub date: String,
}

impl ReleaseInfo {
    /// Returns the release date formatted as a calendar date.
    ///
    /// Accepts both full RFC 3339 timestamps and bare `YYYY-MM-DD`
    /// dates; anything else is shown verbatim.
    pub fn display_date(&self) -> String {
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(&self.date) {
            return timestamp.format("%Y-%m-%d").to_string();
        }
        if let Ok(date) = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d") {
            return date.format("%Y-%m-%d").to_string();
        }
        self.date.clone()
    }
}

/// Fetches the latest-release metadata from the distribution origin.
///
/// Single attempt, no retries: the caller treats any error as "no
/// version info available".
pub async fn fetch(origin: Origin) -> Result<ReleaseInfo> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("AdmInstaller/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let url = format!("{}{}", origin.base_url(), METADATA_PATH);
    let response = client.get(&url).send().await?;

    if !response.status().is_success() {
        return Err(Error::Fetch(format!("HTTP status: {}", response.status())));
    }

    Ok(response.json::<ReleaseInfo>().await?)
}
