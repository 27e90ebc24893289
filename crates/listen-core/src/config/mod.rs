//! Project configuration stored in `listen-agent.toml`.

pub mod parser;
pub mod schema;

use std::path::{Path, PathBuf};

pub use parser::{load_project_config, parse_config, parse_config_str, to_toml};
pub use schema::ProjectConfig;

/// File name of the project configuration, relative to the project root.
pub const CONFIG_FILE: &str = "listen-agent.toml";

pub fn config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE)
}
