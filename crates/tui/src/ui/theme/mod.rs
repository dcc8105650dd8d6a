//! Theme styling for the TUI.
//!
//! A Nord palette (with a high-contrast variant) mapped onto semantic roles,
//! plus helpers that turn those roles and the user's creative colors into
//! Ratatui styles. Prefer these helpers over hard-coding colors.

use std::env;

use swatch_util::is_truthy;
use tracing::debug;

pub mod nord;
pub mod roles;
pub mod theme_helpers;

pub use nord::{NordTheme, NordThemeHighContrast};
pub use roles::Theme;

/// Environment variable that selects the high-contrast variant.
pub const HIGH_CONTRAST_ENV: &str = "SWATCH_HIGH_CONTRAST";

/// Select the theme, honoring `SWATCH_HIGH_CONTRAST`.
pub fn load_from_env() -> Box<dyn Theme> {
    let high_contrast = env::var(HIGH_CONTRAST_ENV).map(|value| is_truthy(&value)).unwrap_or(false);
    if high_contrast {
        debug!("using high-contrast theme");
        Box::new(NordThemeHighContrast::new())
    } else {
        Box::new(NordTheme::new())
    }
}
