use std::{env, fs, path::PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Environment variable checked for the API key.
pub const API_KEY_ENV: &str = "NUMBEO_API_KEY";

/// Config file looked up in the working directory first.
const CONFIG_FILE_NAME: &str = "numbeo.toml";

/// Keys shipped in example configs that were never filled in.
const PLACEHOLDER_KEY: &str = "YOUR_API_KEY_HERE";

/// `[api]` table of the config file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    pub key: Option<String>,
}

/// On-disk configuration.
///
/// Example TOML:
/// ```toml
/// [api]
/// key = "..."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    pub api: Option<ApiConfig>,
}

impl FileConfig {
    /// Loads the first config file that exists: `./numbeo.toml`, then the
    /// platform config directory. Returns an empty default when neither
    /// is present; a file that exists but cannot be read or parsed is an
    /// error rather than a silent fallback.
    pub fn load() -> Result<Self, ConfigError> {
        for path in Self::candidate_paths() {
            if path.exists() {
                debug!("loading config from {}", path.display());
                return Self::load_from(path);
            }
        }
        Ok(Self::default())
    }

    pub fn load_from(path: PathBuf) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Some(dirs) = ProjectDirs::from("dev", "numbeo", "numbeo-cli") {
            paths.push(dirs.config_dir().join("config.toml"));
        }
        paths
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api.as_ref().and_then(|api| api.key.as_deref())
    }
}

/// Resolves the API key, highest priority first: explicit override,
/// `NUMBEO_API_KEY`, config file. Fails with [`ConfigError::MissingApiKey`]
/// when no source yields a usable key, or when the winning key is the
/// unfilled placeholder.
pub fn resolve_api_key(
    override_key: Option<&str>,
    file: &FileConfig,
) -> Result<String, ConfigError> {
    let env_key = env::var(API_KEY_ENV).ok();

    pick_api_key(override_key, env_key.as_deref(), file.api_key())
        .ok_or(ConfigError::MissingApiKey)
}

/// First non-empty source wins; the winner is then checked against the
/// placeholder. A placeholder found early does not fall through to
/// later sources.
fn pick_api_key(
    override_key: Option<&str>,
    env_key: Option<&str>,
    file_key: Option<&str>,
) -> Option<String> {
    let key = [override_key, env_key, file_key]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|key| !key.is_empty())?;

    if key == PLACEHOLDER_KEY {
        return None;
    }

    Some(key.to_string())
}
