//! Endpoint configuration loading
//!
//! Base URLs for the two upstream services, each resolved through the
//! priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default graph-query service base URL
pub const DEFAULT_GRAPH_URL: &str = "http://localhost:9000";
/// Default catalog service base URL
pub const DEFAULT_CATALOG_URL: &str = "http://localhost:8888";

const GRAPH_ENV_VAR: &str = "CHARTVIEW_GRAPH_URL";
const CATALOG_ENV_VAR: &str = "CHARTVIEW_CATALOG_URL";

/// Base URLs of the two upstream services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Graph-query service, e.g. `http://localhost:9000`
    pub graph_base: String,
    /// REST catalog service, e.g. `http://localhost:8888`
    pub catalog_base: String,
}

/// Shape of the optional config file (`~/.config/chartview/config.toml`).
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    graph_url: Option<String>,
    catalog_url: Option<String>,
}

impl Endpoints {
    /// Resolve both base URLs through the priority chain.
    ///
    /// A missing config file is not an error; an unreadable or malformed
    /// one is.
    pub fn resolve(cli_graph: Option<&str>, cli_catalog: Option<&str>) -> Result<Self> {
        let file = match config_file_path() {
            Some(path) if path.exists() => load_config_file(&path)?,
            _ => FileConfig::default(),
        };

        Ok(Self {
            graph_base: resolve_value(
                cli_graph,
                GRAPH_ENV_VAR,
                file.graph_url.as_deref(),
                DEFAULT_GRAPH_URL,
            ),
            catalog_base: resolve_value(
                cli_catalog,
                CATALOG_ENV_VAR,
                file.catalog_url.as_deref(),
                DEFAULT_CATALOG_URL,
            ),
        })
    }
}

/// Resolve one value through the priority chain.
fn resolve_value(
    cli_arg: Option<&str>,
    env_var_name: &str,
    file_value: Option<&str>,
    default: &str,
) -> String {
    // Priority 1: Command-line argument
    if let Some(value) = cli_arg {
        return value.to_string();
    }

    // Priority 2: Environment variable (blank counts as unset)
    if let Ok(value) = std::env::var(env_var_name) {
        if !value.trim().is_empty() {
            return value;
        }
    }

    // Priority 3: Config file
    if let Some(value) = file_value {
        return value.to_string();
    }

    // Priority 4: Compiled default
    default.to_string()
}

/// Per-user config file location for the platform.
fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("chartview").join("config.toml"))
}

fn load_config_file(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::new(format!("Read config failed: {}", e)))?;
    toml::from_str(&content).map_err(|e| Error::new(format!("Parse config failed: {}", e)))
}
