//! Settings layered from defaults, a TOML file, the environment and flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use storefront_products::{DEFAULT_CONTAINER_ID, FetchOptions};

use crate::cli::products::ProductsArg;

const DEFAULT_FILE_NAME: &str = ".storefront.toml";

/// Contents of the config file. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub endpoint: Option<String>,
    pub token: Option<String>,
    pub container_id: Option<String>,
}

pub fn default_path() -> Option<PathBuf> {
    home::home_dir().map(|h| h.join(DEFAULT_FILE_NAME))
}

/// Load `explicit`, or the default file when it exists.
///
/// An explicit path must be readable; a missing default file is skipped.
pub fn load(explicit: Option<&Path>) -> Result<FileConfig> {
    match explicit {
        Some(path) => read(path),
        None => match default_path() {
            Some(path) if path.is_file() => read(&path),
            _ => Ok(FileConfig::default()),
        },
    }
}

fn read(path: &Path) -> Result<FileConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Failed to parse config {}", path.display()))
}

/// Resolved settings for the products command.
#[derive(Debug, Clone)]
pub struct Settings {
    pub options: FetchOptions,
    pub container_id: String,
}

impl Settings {
    /// Flags and environment (already merged by clap) win over the file.
    pub fn resolve(file: FileConfig, arg: &ProductsArg) -> Result<Self> {
        let mut options = FetchOptions::default();

        if let Some(endpoint) = arg.endpoint.as_ref().or(file.endpoint.as_ref()) {
            options = options.endpoint(FetchOptions::parse_endpoint(endpoint)?);
        }
        if let Some(token) = arg.token.clone().or(file.token) {
            options = options.token(token);
        }

        let container_id = arg
            .container_id
            .clone()
            .or(file.container_id)
            .unwrap_or_else(|| DEFAULT_CONTAINER_ID.to_string());

        Ok(Self {
            options,
            container_id,
        })
    }
}
