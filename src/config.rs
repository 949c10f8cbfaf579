//! Check-runner configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`PSM_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NumericsConfig {
    /// Property-check configuration
    #[serde(default)]
    pub check: CheckConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl NumericsConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`PSM_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // PSM_CHECK__TOLERANCE=0.01 -> check.tolerance = 0.01
        figment = figment.merge(Env::prefixed("PSM_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Property-check configuration: tolerance and sample inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Absolute tolerance for approximate comparisons, scaled by operand magnitude
    pub tolerance: f32,
    /// Sample vectors [x, y, z]
    pub vectors: Vec<[f32; 3]>,
    /// Sample quaternions [x, y, z, w]
    pub quaternions: Vec<[f32; 4]>,
    /// Sample matrices, 16 components in row-major order
    pub matrices: Vec<[f32; 16]>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            tolerance: 1.0e-4,
            vectors: vec![
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [1.0, 2.0, 3.0],
                [-4.0, 0.5, 2.0],
                [0.0, 0.0, 0.0],
            ],
            quaternions: vec![
                [0.0, 0.0, 0.0, 1.0],
                [0.0, 0.382_683_43, 0.0, 0.923_879_5],
                [1.0, 2.0, 3.0, 4.0],
                [0.3, -0.4, 0.5, 2.0],
            ],
            matrices: vec![
                [
                    4.0, 7.0, 2.0, 3.0,
                    0.5, 6.0, 1.0, 2.0,
                    3.0, 1.0, 8.0, 1.5,
                    2.0, 2.5, 1.0, 9.0,
                ],
                [
                    1.0, 0.0, 0.0, 0.0,
                    0.0, 1.0, 0.0, 0.0,
                    0.0, 0.0, 1.0, 0.0,
                    5.0, -3.0, 2.0, 1.0,
                ],
                [
                    1.0, 2.0, 3.0, 4.0,
                    1.0, 2.0, 3.0, 4.0,
                    0.0, 1.0, 0.0, 0.0,
                    0.0, 0.0, 0.0, 1.0,
                ],
            ],
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
