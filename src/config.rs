//! Menu configuration: parse/write `alias_menu.conf`.
//!
//! The file uses `<key> = <value>` lines. Comments (`#`) and blank lines are
//! ignored. Currently the only key is `sort_alias`, holding a [`SortMode`] in
//! its textual form (`alias`, `address`, `unsorted`, optionally prefixed with
//! `reverse-`).

use std::path::Path;

use tracing::warn;

use crate::error::{MenuError, Result};
use crate::menu::SortMode;

pub const DEFAULT_CONFIG_FILE: &str = "alias_menu.conf";

/// Settings read by the alias menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuConfig {
    /// Ordering applied by [`AliasMenuData::sort`](crate::menu::AliasMenuData::sort).
    pub sort_alias: SortMode,
}

impl MenuConfig {
    /// Load settings from a file, or create defaults if the file doesn't exist.
    ///
    /// This is the main entry point for loading the menu settings. A missing
    /// file is created with the defaults for future customization; a file
    /// that exists but cannot be read yields the defaults.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the menu configuration file.
    pub fn load_or_init(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if path.exists() {
            return Self::from_file(path).unwrap_or_else(|err| {
                warn!(%err, "falling back to default menu config");
                Self::default()
            });
        }
        let cfg = Self::default();
        if let Err(err) = cfg.write_file(path) {
            warn!(%err, "could not write default menu config");
        }
        cfg
    }

    /// Load settings from a configuration file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the menu configuration file.
    ///
    /// # Errors
    ///
    /// [`MenuError::Io`] if the file cannot be read.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| MenuError::io(path, e))?;
        Ok(Self::parse(&contents))
    }

    /// Parse configuration text in `<key> = <value>` form.
    ///
    /// Unknown keys, empty values and unrecognized sort modes are skipped
    /// with a warning; the last valid `sort_alias` line wins.
    ///
    /// # Arguments
    ///
    /// * `contents` - The full text of a configuration file.
    pub fn parse(contents: &str) -> Self {
        let mut cfg = Self::default();
        for (lineno, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut parts = line.splitn(2, '=');
            let lhs = parts.next().map(|s| s.trim()).unwrap_or("");
            let rhs = parts.next().map(|s| s.trim()).unwrap_or("");
            if lhs.is_empty() {
                continue;
            }
            if rhs.is_empty() {
                warn!(line = lineno + 1, key = lhs, "ignoring key with empty value");
                continue;
            }

            match lhs {
                "sort_alias" => match rhs.parse::<SortMode>() {
                    Ok(mode) => cfg.sort_alias = mode,
                    Err(err) => warn!(line = lineno + 1, %err, "ignoring sort_alias"),
                },
                _ => warn!(line = lineno + 1, key = lhs, "unknown config key"),
            }
        }
        cfg
    }

    /// Write the current settings to a configuration file.
    ///
    /// # Arguments
    ///
    /// * `path` - The path where the configuration will be written.
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut buf = String::new();
        buf.push_str("# alias-menu configuration\n");
        buf.push_str("# sort_alias: alias|address|unsorted, optionally prefixed with reverse-\n");
        buf.push_str(&format!("sort_alias = {}\n", self.sort_alias));
        std::fs::write(path, buf).map_err(|e| MenuError::io(path, e))
    }
}
