// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::release::ReleaseInfo;
use crate::ui::install_page;
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Page(install_page::Message),
    /// Result of the one-shot release metadata fetch.
    MetadataLoaded(Result<ReleaseInfo, Error>),
    Notification(notifications::NotificationMessage),
    Tick(Instant), // Periodic tick for toast auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `zh-CN`).
    pub lang: Option<String>,
    /// Optional distribution server URL override.
    /// Takes precedence over the `server_url` config key.
    pub server: Option<String>,
}
