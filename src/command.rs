// SPDX-License-Identifier: MPL-2.0
//! Shell command composition for agent deployment.
//!
//! The panel displays two one-line commands that pipe the installer
//! script served by the distribution origin through bash. Both are pure
//! functions of the origin (and, for installation, the optional share
//! name) and are recomputed whenever either input changes.

use crate::origin::Origin;

/// Maximum length of the user-supplied share name, in characters.
///
/// Enforced at the input boundary; the composer splices whatever it is
/// given verbatim.
pub const MAX_SHARE_NAME_LEN: usize = 10;

/// Builds the installation command for shared-node deployment.
///
/// With an empty share name the command ends after the `-share yes`
/// flag; a non-empty name appends ` --sharename <name>`.
pub fn install_command(origin: &Origin, share_name: &str) -> String {
    let base = format!("bash <(curl -fsSL {}) -share yes", origin.base_url());
    if share_name.is_empty() {
        base
    } else {
        format!("{base} --sharename {share_name}")
    }
}

/// Builds the uninstall command. Independent of the share name.
pub fn uninstall_command(origin: &Origin) -> String {
    format!("bash <(curl -fsSL {}) uninstall", origin.base_url())
}

/// Caps a share name at [`MAX_SHARE_NAME_LEN`] characters.
///
/// Truncation happens on a character boundary so multi-byte input cannot
/// split a code point.
pub fn clamp_share_name(name: &str) -> String {
    name.chars().take(MAX_SHARE_NAME_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Origin {
        Origin::resolve("https://install.example.com")
    }

    #[test]
    fn install_command_without_share_name_has_no_trailing_flag() {
        let command = install_command(&origin(), "");
        assert_eq!(
            command,
            "bash <(curl -fsSL https://install.example.com) -share yes"
        );
    }

    #[test]
    fn install_command_appends_share_name() {
        let command = install_command(&origin(), "node1");
        assert_eq!(
            command,
            "bash <(curl -fsSL https://install.example.com) -share yes --sharename node1"
        );
    }

    #[test]
    fn uninstall_command_ignores_share_name() {
        let with_name = uninstall_command(&origin());
        assert_eq!(
            with_name,
            "bash <(curl -fsSL https://install.example.com) uninstall"
        );
    }

    #[test]
    fn uninstall_command_varies_with_origin() {
        let other = Origin::resolve("http://10.0.0.5:8443");
        assert_eq!(
            uninstall_command(&other),
            "bash <(curl -fsSL http://10.0.0.5:8443) uninstall"
        );
    }

    #[test]
    fn clamp_share_name_keeps_short_names() {
        assert_eq!(clamp_share_name("node1"), "node1");
    }

    #[test]
    fn clamp_share_name_truncates_to_limit() {
        assert_eq!(clamp_share_name("abcdefghijkl"), "abcdefghij");
        assert_eq!(clamp_share_name("abcdefghij").chars().count(), 10);
    }

    #[test]
    fn clamp_share_name_respects_char_boundaries() {
        let name = "节点一二三四五六七八九";
        let clamped = clamp_share_name(name);
        assert_eq!(clamped.chars().count(), MAX_SHARE_NAME_LEN);
        assert!(name.starts_with(&clamped));
    }
}
