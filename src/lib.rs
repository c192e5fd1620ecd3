// SPDX-License-Identifier: MPL-2.0
//! `adm-installer` is a small desktop panel that displays localized
//! installation and uninstallation commands for the Adm Agent.
//!
//! It shows the latest published release, lets the user name their
//! shared node, and copies the generated shell commands to the
//! clipboard. Built with the Iced GUI framework and Fluent
//! localization.

#![doc(html_root_url = "https://docs.rs/adm-installer/0.1.0")]

pub mod app;
pub mod command;
pub mod config;
pub mod error;
pub mod i18n;
pub mod origin;
pub mod release;
pub mod ui;
