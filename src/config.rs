use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{content::Language, error::Result};

pub const DEFAULT_BASE_URL: &str = "https://influencelab.uz";

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(default)]
pub struct Config {
    /// Canonical URL prefix, without a trailing slash.
    pub base_url: String,
    /// Place name used in LED descriptions when a screen has no location.
    pub default_location: DefaultLocations,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(default)]
pub struct DefaultLocations {
    pub ru: String,
    pub uz: String,
    pub en: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            default_location: DefaultLocations::default(),
        }
    }
}

impl Default for DefaultLocations {
    fn default() -> Self {
        Self {
            ru: "Ташкенте".into(),
            uz: "Toshkentda".into(),
            en: "Tashkent".into(),
        }
    }
}

impl Config {
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(source)?;
        Ok(config.normalized())
    }

    pub fn load(path: &Path) -> Result<Self> {
        log::debug!("Loading config from {:?}", path);
        Self::from_yaml_str(&std::fs::read_to_string(path)?)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_owned();
        self.normalized()
    }

    pub fn default_location_for(&self, lang: Language) -> &str {
        match lang {
            Language::Ru => &self.default_location.ru,
            Language::Uz => &self.default_location.uz,
            Language::En => &self.default_location.en,
        }
    }

    pub(crate) fn normalized(mut self) -> Self {
        let trimmed = self.base_url.trim_end_matches('/').len();
        self.base_url.truncate(trimmed);
        self
    }
}
