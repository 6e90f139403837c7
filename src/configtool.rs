//  ____                    __  __        _
// |  _ \   __ _  ___  ___ |  \/  |  ___ | |_   ___  _ __
// | |_) | / _` |/ __|/ __|| |\/| | / _ \| __| / _ \| '__|
// |  __/ | (_| |\__ \\__ \| |  | ||  __/| |_ |  __/| |
// |_|     \__,_||___/|___/|_|  |_| \___| \__| \___||_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-19
// Version : 0.1.0
// License : Mulan PSL v2
//
// Config Tools

use serde::{Serialize, Deserialize};
use std::{env, fmt, fs, io};
use std::path::{Path, PathBuf};
use dirs::config_dir;

use crate::charset::CharacterClassSet;
use crate::passgen::{DEFAULT_LENGTH, GenerationRequest};

pub const CONFIG_DIR_ENV: &str = "PASSMETER_CONFIG_DIR";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug)]
pub enum ConfigError {
    IoError(io::Error),
    JsonError(serde_json::Error),
    ConfigDirError(String),
    InvalidLength { length: usize, min: usize, max: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::JsonError(e) => write!(f, "JSON error: {}", e),
            ConfigError::ConfigDirError(msg) => write!(f, "Config directory error: {}", msg),
            ConfigError::InvalidLength { length, min, max } => {
                write!(f, "Password length {} is out of range, choose between {} and {}", length, min, max)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError(e) => Some(e),
            ConfigError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::JsonError(e)
    }
}

/// Generator defaults and the bounds the CLI puts on `length`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub default_length: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub default_classes: CharacterClassSet,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_length: DEFAULT_LENGTH,
            min_length: 8,
            max_length: 32,
            default_classes: CharacterClassSet::all(),
        }
    }
}

impl Settings {
    /// 读取配置文件，不存在时使用默认值
    pub fn load_from(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            log::debug!("no settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let file = fs::File::open(&path)?;
        let settings: Self = serde_json::from_reader(file)?;
        settings.check_bounds()?;
        log::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn save_to(&self, dir: &Path) -> Result<(), ConfigError> {
        self.check_bounds()?;
        fs::create_dir_all(dir)?;
        let file = fs::File::create(dir.join(CONFIG_FILE_NAME))?;
        serde_json::to_writer_pretty(file, self)?;
        log::info!("settings saved to {}", dir.display());
        Ok(())
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&get_config_dir()?)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&get_config_dir()?)
    }

    pub fn validate_length(&self, length: usize) -> Result<usize, ConfigError> {
        if length < self.min_length || length > self.max_length {
            return Err(ConfigError::InvalidLength {
                length,
                min: self.min_length,
                max: self.max_length,
            });
        }
        Ok(length)
    }

    /// Builds a request from an optional length and the enabled classes,
    /// falling back to the configured default length.
    pub fn request(&self, length: Option<usize>, classes: CharacterClassSet) -> Result<GenerationRequest, ConfigError> {
        let length = self.validate_length(length.unwrap_or(self.default_length))?;
        Ok(GenerationRequest::new(length, classes))
    }

    fn check_bounds(&self) -> Result<(), ConfigError> {
        if self.min_length == 0 || self.min_length > self.max_length {
            return Err(ConfigError::InvalidLength {
                length: self.min_length,
                min: 1,
                max: self.max_length,
            });
        }
        self.validate_length(self.default_length).map(|_| ())
    }
}

/// 获取配置目录
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    match config_dir() {
        Some(path) => Ok(path.join("passmeter")),
        None => Err(ConfigError::ConfigDirError("Could not determine configuration directory".to_string())),
    }
}
