use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The kinds of pages the site publishes.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Blog,
    Project,
    Led,
}

impl ContentType {
    pub const ALL: [ContentType; 3] = [Self::Blog, Self::Project, Self::Led];

    /// Name used in URLs (`/blog/42`) and in the template table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Project => "project",
            Self::Led => "led",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blog" => Ok(Self::Blog),
            "project" => Ok(Self::Project),
            "led" => Ok(Self::Led),
            _ => Err(Error::InvalidContentType(s.to_owned())),
        }
    }
}

/// Site languages. Russian is the primary one.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ru,
    Uz,
    En,
}

impl Language {
    pub const ALL: [Language; 3] = [Self::Ru, Self::Uz, Self::En];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::Uz => "uz",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ru" => Ok(Self::Ru),
            "uz" => Ok(Self::Uz),
            "en" => Ok(Self::En),
            _ => Err(Error::UnsupportedLanguage(s.to_owned())),
        }
    }
}

/// Record identifiers come out of the API as integers, but hand-written
/// records often quote them. Numbers keep their full `u64`/`i64` range.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(untagged)]
pub enum ContentId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{}", id),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for ContentId {
    fn from(id: i64) -> Self {
        Self::Number(id.into())
    }
}

impl From<u64> for ContentId {
    fn from(id: u64) -> Self {
        Self::Number(id.into())
    }
}

impl From<&str> for ContentId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_owned())
    }
}

/// A blog post, project or LED screen as handed over by the caller.
///
/// Every field is optional; empty strings count as missing.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
pub struct ContentRecord {
    pub id: Option<ContentId>,
    pub title: Option<String>,
    pub title_ru: Option<String>,
    pub description: Option<String>,
    pub description_ru: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
    /// Primary image as stored by the content API.
    pub img: Option<String>,
    pub images: Option<Vec<String>>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

impl ContentRecord {
    /// `title`, then `title_ru`, then `""`.
    pub fn resolved_title(&self) -> &str {
        non_empty(&self.title)
            .or_else(|| non_empty(&self.title_ru))
            .unwrap_or("")
    }

    /// `description`, then `description_ru`, then `""`.
    pub fn resolved_description(&self) -> &str {
        non_empty(&self.description)
            .or_else(|| non_empty(&self.description_ru))
            .unwrap_or("")
    }

    pub fn resolved_location(&self) -> Option<&str> {
        non_empty(&self.location)
    }

    /// `image`, then `img`, then the first entry of `images`.
    pub fn resolved_image(&self) -> Option<&str> {
        non_empty(&self.image)
            .or_else(|| non_empty(&self.img))
            .or_else(|| {
                self.images
                    .as_ref()?
                    .first()
                    .map(String::as_str)
                    .filter(|image| !image.is_empty())
            })
    }
}
