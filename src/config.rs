use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;

use crate::error::OrdkeyError;
use crate::generators::Alphabet;

/// Environment variable naming a YAML settings file.
pub const CONFIG_ENV: &str = "ORDKEY_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Base10,
    Base95,
}

/// Digit alphabet as written in a settings file: a preset name or an explicit
/// code range.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AlphabetConfig {
    Preset(Preset),
    Range {
        digit_range_start: u8,
        digit_range_end_exclusive: u8,
    },
}

impl Default for AlphabetConfig {
    fn default() -> Self {
        Self::Preset(Preset::Base95)
    }
}

impl AlphabetConfig {
    pub fn to_alphabet(&self) -> Result<Alphabet, OrdkeyError> {
        match self {
            Self::Preset(Preset::Base10) => Ok(Alphabet::BASE10),
            Self::Preset(Preset::Base95) => Ok(Alphabet::BASE95),
            Self::Range {
                digit_range_start,
                digit_range_end_exclusive,
            } => Alphabet::new(*digit_range_start, *digit_range_end_exclusive),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub alphabet: AlphabetConfig,
}

impl Settings {
    pub fn from_yaml(yaml: &str) -> Result<Self, OrdkeyError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| OrdkeyError::ConfigParse(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self, OrdkeyError> {
        let yaml = fs::read_to_string(path)
            .map_err(|e| OrdkeyError::ConfigRead(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&yaml)
    }

    /// Loads settings from `path`, falling back to `$ORDKEY_CONFIG`, then to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, OrdkeyError> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));
        match path {
            Some(path) => {
                info!("Loading settings from {}", path.display());
                Self::from_file(&path)
            }
            None => {
                debug!("No settings file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn alphabet(&self) -> Result<Alphabet, OrdkeyError> {
        self.alphabet.to_alphabet()
    }

    /// Alphabet to use: `cli` when given, otherwise the one from these settings.
    pub fn resolve_alphabet(&self, cli: Option<Alphabet>) -> Result<Alphabet, OrdkeyError> {
        match cli {
            Some(alphabet) => Ok(alphabet),
            None => self.alphabet(),
        }
    }
}
