use std::path::PathBuf;

use dirs_next::{config_dir, home_dir};

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    let p = path.trim();
    if p == "~" {
        return home_dir().unwrap_or_else(|| PathBuf::from("~"));
    }
    if let Some(rest) = p.strip_prefix("~/") {
        return home_dir().unwrap_or_else(|| PathBuf::from("~")).join(rest);
    }
    if let Some(rest) = p.strip_prefix("~\\") {
        // Windows-style
        return home_dir().unwrap_or_else(|| PathBuf::from("~")).join(rest);
    }
    PathBuf::from(p)
}

/// Directory holding Swatch's config and log files (`~/.config/swatch` on most platforms).
pub fn config_root() -> PathBuf {
    config_dir().unwrap_or_else(|| PathBuf::from(".")).join("swatch")
}
