// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod metadata;
pub mod structured;
pub mod template;

pub use config::Config;
pub use content::{ContentId, ContentRecord, ContentType, Language};
pub use error::{Error, Result};
pub use generator::{generate_seo_meta, generate_structured_data, Generator};
pub use metadata::SeoMeta;
pub use structured::StructuredData;
pub use template::SEO_TEMPLATES;
