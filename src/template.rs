// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use lazy_static::lazy_static;

use crate::content::{ContentType, Language};

/// Character budgets for the excerpt embedded in each description field.
pub const DESCRIPTION_BUDGET: usize = 120;
pub const OG_DESCRIPTION_BUDGET: usize = 150;
pub const TWITTER_DESCRIPTION_BUDGET: usize = 100;

/// Appended after every excerpt, whether or not anything was cut.
pub const ELLIPSIS: &str = "...";

pub type TitleFn = fn(&str) -> String;
/// `(description, title, location)`. An empty location selects the
/// template's own default place name.
pub type DescriptionFn = fn(&str, &str, &str) -> String;
pub type TextFn = fn(&str) -> String;

/// One value per site language.
#[derive(Clone, Copy)]
pub struct Localized<F> {
    pub ru: F,
    pub uz: F,
    pub en: F,
}

impl<F: Copy> Localized<F> {
    pub fn uniform(value: F) -> Self {
        Self {
            ru: value,
            uz: value,
            en: value,
        }
    }

    pub fn get(&self, lang: Language) -> F {
        match lang {
            Language::Ru => self.ru,
            Language::Uz => self.uz,
            Language::En => self.en,
        }
    }
}

/// Formatters for the six meta fields of a single content type.
#[derive(Clone, Copy)]
pub struct TemplateGroup {
    pub title: Localized<TitleFn>,
    pub description: Localized<DescriptionFn>,
    pub og_title: Localized<TitleFn>,
    pub og_description: Localized<TextFn>,
    pub twitter_title: Localized<TitleFn>,
    pub twitter_description: Localized<TextFn>,
}

#[derive(Clone, Copy)]
pub struct SeoTemplates {
    pub blog: TemplateGroup,
    pub project: TemplateGroup,
    pub led: TemplateGroup,
}

impl SeoTemplates {
    pub fn group(&self, content_type: ContentType) -> &TemplateGroup {
        match content_type {
            ContentType::Blog => &self.blog,
            ContentType::Project => &self.project,
            ContentType::Led => &self.led,
        }
    }

    /// Lookup by raw type name. Unknown names have no templates.
    pub fn lookup(&self, name: &str) -> Option<&TemplateGroup> {
        name.parse::<ContentType>()
            .ok()
            .map(|content_type| self.group(content_type))
    }
}

/// Cut `text` to at most `budget` characters. Not word-aware.
pub fn clip(text: &str, budget: usize) -> &str {
    match text.char_indices().nth(budget) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// [`clip`] followed by [`ELLIPSIS`].
pub fn excerpt(text: &str, budget: usize) -> String {
    format!("{}{}", clip(text, budget), ELLIPSIS)
}

fn or_default<'a>(location: &'a str, default: &'a str) -> &'a str {
    if location.is_empty() {
        default
    } else {
        location
    }
}

fn og_description(description: &str) -> String {
    excerpt(description, OG_DESCRIPTION_BUDGET)
}

fn twitter_title(title: &str) -> String {
    format!("{} - Influence Lab", title)
}

fn twitter_description(description: &str) -> String {
    excerpt(description, TWITTER_DESCRIPTION_BUDGET)
}

lazy_static! {
    pub static ref SEO_TEMPLATES: SeoTemplates = SeoTemplates {
        blog: TemplateGroup {
            title: Localized {
                ru: |title| format!("{} - Блог Influence Lab | Инфлюенсер-маркетинг в Узбекистане", title),
                uz: |title| format!("{} - Influence Lab Blogi | O'zbekistonda influencer marketing", title),
                en: |title| format!("{} - Influence Lab Blog | Influencer Marketing in Uzbekistan", title),
            },
            description: Localized {
                ru: |description, title, _| format!(
                    "{} Читайте больше о {} в блоге Influence Lab - ведущего агентства инфлюенсер-маркетинга в Узбекистане.",
                    excerpt(description, DESCRIPTION_BUDGET),
                    title.to_lowercase()
                ),
                uz: |description, title, _| format!(
                    "{} {} haqida ko'proq o'qing Influence Lab blogida - O'zbekistondagi yetakchi influencer marketing agentligi.",
                    excerpt(description, DESCRIPTION_BUDGET),
                    title.to_lowercase()
                ),
                en: |description, title, _| format!(
                    "{} Read more about {} on Influence Lab blog - leading influencer marketing agency in Uzbekistan.",
                    excerpt(description, DESCRIPTION_BUDGET),
                    title.to_lowercase()
                ),
            },
            og_title: Localized {
                ru: |title| format!("{} | Influence Lab Blog", title),
                uz: |title| format!("{} | Influence Lab Blogi", title),
                en: |title| format!("{} | Influence Lab Blog", title),
            },
            og_description: Localized::uniform(og_description as TextFn),
            twitter_title: Localized::uniform(twitter_title as TitleFn),
            twitter_description: Localized::uniform(twitter_description as TextFn),
        },
        project: TemplateGroup {
            title: Localized {
                ru: |title| format!("{} - Проект Influence Lab | Кейсы инфлюенсер-маркетинга", title),
                uz: |title| format!("{} - Influence Lab Loyihasi | Influencer marketing keyslari", title),
                en: |title| format!("{} - Influence Lab Project | Influencer Marketing Cases", title),
            },
            description: Localized {
                ru: |description, title, _| format!(
                    "{} Смотрите кейс проекта \"{}\" от Influence Lab - успешные примеры инфлюенсер-маркетинга в Узбекистане.",
                    excerpt(description, DESCRIPTION_BUDGET),
                    title
                ),
                uz: |description, title, _| format!(
                    "{} \"{}\" loyihasi keysini ko'ring Influence Lab'dan - O'zbekistonda muvaffaqiyatli influencer marketing misollari.",
                    excerpt(description, DESCRIPTION_BUDGET),
                    title
                ),
                en: |description, title, _| format!(
                    "{} See case study of \"{}\" project by Influence Lab - successful influencer marketing examples in Uzbekistan.",
                    excerpt(description, DESCRIPTION_BUDGET),
                    title
                ),
            },
            og_title: Localized {
                ru: |title| format!("{} | Influence Lab Project", title),
                uz: |title| format!("{} | Influence Lab Loyihasi", title),
                en: |title| format!("{} | Influence Lab Project", title),
            },
            og_description: Localized::uniform(og_description as TextFn),
            twitter_title: Localized::uniform(twitter_title as TitleFn),
            twitter_description: Localized::uniform(twitter_description as TextFn),
        },
        led: TemplateGroup {
            title: Localized {
                ru: |title| format!("{} - LED экран в Ташкенте | Influence Lab", title),
                uz: |title| format!("{} - Toshkentda LED ekran | Influence Lab", title),
                en: |title| format!("{} - LED Screen in Tashkent | Influence Lab", title),
            },
            description: Localized {
                ru: |description, title, location| format!(
                    "{} LED экран \"{}\" в {} от Influence Lab. Быстрое размещение рекламы на LED экранах.",
                    excerpt(description, DESCRIPTION_BUDGET),
                    title,
                    or_default(location, "Ташкенте")
                ),
                uz: |description, title, location| format!(
                    "{} \"{}\" LED ekrani {} Influence Lab'dan. LED ekranlarda tez reklama joylashtirish.",
                    excerpt(description, DESCRIPTION_BUDGET),
                    title,
                    or_default(location, "Toshkentda")
                ),
                en: |description, title, location| format!(
                    "{} LED screen \"{}\" in {} by Influence Lab. Fast LED screen advertising placement.",
                    excerpt(description, DESCRIPTION_BUDGET),
                    title,
                    or_default(location, "Tashkent")
                ),
            },
            og_title: Localized {
                ru: |title| format!("{} | LED экран Influence Lab", title),
                uz: |title| format!("{} | Influence Lab LED ekran", title),
                en: |title| format!("{} | Influence Lab LED Screen", title),
            },
            og_description: Localized::uniform(og_description as TextFn),
            twitter_title: Localized::uniform(twitter_title as TitleFn),
            twitter_description: Localized::uniform(twitter_description as TextFn),
        },
    };
}
