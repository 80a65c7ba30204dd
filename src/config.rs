use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{MaskError, MaskResult};
use crate::mask::{DEFAULT_PLACEHOLDER, MaskPattern, SentinelMap};

/// Named custom patterns, usually read from a YAML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskConfig {
    #[serde(default)]
    pub patterns: IndexMap<String, PatternConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternConfig {
    pub pattern: String,
    #[serde(default)]
    pub always_show_placeholder: bool,
    #[serde(default = "default_placeholder")]
    pub placeholder_char: char,
    /// Replaces the default `9`/`a`/`*` sentinels when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentinels: Option<IndexMap<String, String>>,
}

fn default_placeholder() -> char {
    DEFAULT_PLACEHOLDER
}

impl PatternConfig {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            always_show_placeholder: false,
            placeholder_char: DEFAULT_PLACEHOLDER,
            sentinels: None,
        }
    }

    pub fn compile(&self) -> MaskResult<MaskPattern> {
        let pattern = match &self.sentinels {
            Some(entries) => {
                let mut map = SentinelMap::empty();
                for (key, regex) in entries {
                    let mut chars = key.chars();
                    let (Some(sentinel), None) = (chars.next(), chars.next()) else {
                        return Err(MaskError::InvalidSentinelKey(key.clone()));
                    };
                    map.insert_regex(sentinel, regex.as_str())?;
                }
                MaskPattern::with_sentinels(self.pattern.as_str(), &map)
            }
            None => MaskPattern::new(self.pattern.as_str()),
        };

        Ok(pattern
            .always_show_placeholder(self.always_show_placeholder)
            .placeholder_char(self.placeholder_char))
    }
}

impl MaskConfig {
    pub fn from_yaml_str(source: &str) -> MaskResult<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> MaskResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> MaskResult<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_str(source.as_str()),
            Some("json") => Self::from_json_str(source.as_str()),
            _ => Err(MaskError::UnsupportedConfig(path.to_path_buf())),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys().map(String::as_str)
    }

    pub fn pattern(&self, name: &str) -> MaskResult<MaskPattern> {
        self.patterns
            .get(name)
            .ok_or_else(|| MaskError::UnknownPattern(name.to_string()))?
            .compile()
    }
}
