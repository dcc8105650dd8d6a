pub mod config;
mod path_processing;
mod text_processing;

pub use config::{ConfigError, ConfigOverrides, SwatchConfig};
pub use path_processing::{config_root, expand_tilde};
pub use text_processing::{is_truthy, truncate_to_width};
