// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent
//! localization system. The panel ships two embedded locales, English
//! (the default) and Chinese, and picks one at startup from the CLI
//! override, the config file, or the system locale.

pub mod fluent;
