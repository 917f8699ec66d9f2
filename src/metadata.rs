// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use crate::{content::Language, template::TemplateGroup};

/// The six head tags generated for a page.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    pub og_title: String,
    pub og_description: String,
    pub twitter_title: String,
    pub twitter_description: String,
}

impl SeoMeta {
    /// Run every formatter of `group` for `lang`.
    ///
    /// `location` is only read by LED descriptions.
    pub fn render(
        group: &TemplateGroup,
        lang: Language,
        title: &str,
        description: &str,
        location: &str,
    ) -> Self {
        Self {
            title: group.title.get(lang)(title),
            description: group.description.get(lang)(description, title, location),
            og_title: group.og_title.get(lang)(title),
            og_description: group.og_description.get(lang)(description),
            twitter_title: group.twitter_title.get(lang)(title),
            twitter_description: group.twitter_description.get(lang)(description),
        }
    }
}
