//! Guide configuration.
//!
//! Configuration is a TOML file resolved in this order:
//!
//! 1. An explicit path (`--config` / `CREATEX_CONFIG`)
//! 2. `./createx.toml`
//! 3. `<platform config dir>/createx/config.toml`
//! 4. Built-in defaults
//!
//! ```toml
//! content_dir = "content"
//! output_dir = "dist"
//! default_language = "en"
//! languages = ["en", "zh"]
//!
//! [render]
//! sanitize = false
//!
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//!
//! [build]
//! timeout_secs = 120
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "createx.toml";

/// Project name used for the platform config directory.
pub const PROJECT_NAME: &str = "createx";

/// Top-level configuration for the content pipeline, builder, and server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideConfig {
    /// Root of the content tree (holds `modules/` and `translations/`).
    pub content_dir: PathBuf,
    /// Root of the generated static site.
    pub output_dir: PathBuf,
    /// Language the module files are authored in.
    pub default_language: String,
    /// Languages the site is published in.
    pub languages: Vec<String>,
    /// Markdown rendering settings.
    pub render: RenderConfig,
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Static build settings.
    pub build: BuildConfig,
}

/// Markdown rendering settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Escape raw HTML embedded in Markdown instead of passing it through.
    pub sanitize: bool,
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Static build settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Wall-clock limit for one build, in seconds.
    pub timeout_secs: Option<u64>,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            output_dir: PathBuf::from("dist"),
            default_language: "en".to_string(),
            languages: vec!["en".to_string(), "zh".to_string()],
            render: RenderConfig::default(),
            server: ServerConfig::default(),
            build: BuildConfig::default(),
        }
    }
}

impl GuideConfig {
    /// Load configuration, falling back to defaults when no file exists.
    ///
    /// An explicit path that does not exist is an error; the implicit
    /// locations are optional.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        if let Some(path) = explicit {
            let path = PathBuf::from(path);
            if !path.exists() {
                return Err(Error::config(format!(
                    "Config file does not exist at {}",
                    path.display()
                )));
            }
            return Self::from_file(&path);
        }

        match Self::discover() {
            Some(path) => Self::from_file(&path),
            None => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config: Self = toml::from_str(&raw)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        log::info!("Loaded configuration from {}", path.display());
        config.validate()?;
        Ok(config)
    }

    /// Find the first implicit config file that exists.
    pub fn discover() -> Option<PathBuf> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Some(local);
        }
        Self::default_config_path().filter(|p| p.exists())
    }

    /// The platform config path (`~/.config/createx/config.toml` on Linux).
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(PROJECT_NAME).join("config.toml"))
    }

    /// Reject values the pipeline cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.default_language.trim().is_empty() {
            return Err(Error::config("default_language must not be empty"));
        }
        if self.server.port == 0 {
            return Err(Error::config("server.port must be non-zero"));
        }
        if self.build.timeout_secs == Some(0) {
            return Err(Error::config("build.timeout_secs must be positive"));
        }
        Ok(())
    }

    /// Directory holding `{NN}-{slug}.md` module files.
    pub fn modules_dir(&self) -> PathBuf {
        self.content_dir.join("modules")
    }

    /// Directory holding `{lang}/{moduleId}.json` translation records.
    pub fn translations_dir(&self) -> PathBuf {
        self.content_dir.join("translations")
    }

    /// Serialize to pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}
