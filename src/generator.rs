use chrono::{DateTime, Utc};
use lazy_static::lazy_static;

use crate::{
    config::Config,
    content::{ContentRecord, ContentType, Language},
    metadata::SeoMeta,
    structured::{absolute_url, ImageObject, SchemaType, StructuredData},
    template::SEO_TEMPLATES,
};

lazy_static! {
    static ref DEFAULT_GENERATOR: Generator = Generator::default();
}

/// Generates page metadata against a [`Config`].
#[derive(Clone, Debug, Default)]
pub struct Generator {
    config: Config,
}

impl Generator {
    /// Strips any trailing `/` from `config.base_url`.
    pub fn new(config: Config) -> Self {
        Self {
            config: config.normalized(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn seo_meta(&self, content: &ContentRecord, content_type: ContentType, lang: Language) -> SeoMeta {
        let title = content.resolved_title();
        let description = content.resolved_description();
        let location = content
            .resolved_location()
            .unwrap_or_else(|| self.config.default_location_for(lang));

        log::debug!("Generating {} meta tags for {} {:?}", lang, content_type, title);
        if title.is_empty() {
            log::warn!("{} record {:?} has no title", content_type, content.id);
        }

        SeoMeta::render(
            SEO_TEMPLATES.group(content_type),
            lang,
            title,
            description,
            location,
        )
    }

    pub fn structured_data(&self, content: &ContentRecord, content_type: ContentType, lang: Language) -> StructuredData {
        self.structured_data_at(content, content_type, lang, Utc::now())
    }

    /// [`Generator::structured_data`] with both dates set to `now`.
    pub fn structured_data_at(
        &self,
        content: &ContentRecord,
        content_type: ContentType,
        lang: Language,
        now: DateTime<Utc>,
    ) -> StructuredData {
        let base_url = self.config.base_url.as_str();
        let id = content.id.as_ref().map(ToString::to_string).unwrap_or_default();

        log::debug!("Generating {} structured data for {} {:?}", lang, content_type, id);

        let mut data = StructuredData::base(
            base_url,
            SchemaType::for_content(content_type),
            content.resolved_title(),
            content.resolved_description(),
            format!("{}/{}/{}", base_url, content_type, id),
            now,
        );

        if let Some(image) = content.resolved_image() {
            let url = absolute_url(base_url, image);
            log::debug!("Resolved image {:?} to {:?}", image, url);
            data.image = Some(ImageObject::new(url));
        }

        if content_type == ContentType::Led && content.resolved_location().is_some() {
            data = data.with_offer();
        }

        data
    }
}

/// Meta tags with the built-in configuration.
pub fn generate_seo_meta(content: &ContentRecord, content_type: ContentType, lang: Language) -> SeoMeta {
    DEFAULT_GENERATOR.seo_meta(content, content_type, lang)
}

/// JSON-LD object with the built-in configuration, dated now.
pub fn generate_structured_data(
    content: &ContentRecord,
    content_type: ContentType,
    lang: Language,
) -> StructuredData {
    DEFAULT_GENERATOR.structured_data(content, content_type, lang)
}

#[cfg(test)]
mod test {
    use chrono::{TimeZone, Utc};

    use crate::config::{Config, DefaultLocations};
    use crate::content::{ContentId, ContentRecord, ContentType, Language};
    use crate::generator::{generate_seo_meta, generate_structured_data, Generator};
    use crate::structured::SchemaType;
    use crate::template::{DESCRIPTION_BUDGET, OG_DESCRIPTION_BUDGET, TWITTER_DESCRIPTION_BUDGET};

    fn record(title: &str, description: &str) -> ContentRecord {
        ContentRecord {
            title: Some(title.into()),
            description: Some(description.into()),
            ..Default::default()
        }
    }

    #[test]
    fn blog_english() {
        let meta = generate_seo_meta(&record("5 Tips", &"A".repeat(200)), ContentType::Blog, Language::En);

        assert_eq!(meta.title, "5 Tips - Influence Lab Blog | Influencer Marketing in Uzbekistan");
        assert_eq!(
            meta.description,
            format!(
                "{}... Read more about 5 tips on Influence Lab blog - leading influencer marketing agency in Uzbekistan.",
                "A".repeat(120)
            )
        );
        assert_eq!(meta.og_title, "5 Tips | Influence Lab Blog");
        assert_eq!(meta.og_description, format!("{}...", "A".repeat(150)));
        assert_eq!(meta.twitter_title, "5 Tips - Influence Lab");
        assert_eq!(meta.twitter_description, format!("{}...", "A".repeat(100)));
    }

    #[test]
    fn default_language_is_russian() {
        let meta = generate_seo_meta(&record("Кейс", "Описание"), ContentType::Project, Language::default());

        assert_eq!(meta.title, "Кейс - Проект Influence Lab | Кейсы инфлюенсер-маркетинга");
        assert_eq!(
            meta.description,
            "Описание... Смотрите кейс проекта \"Кейс\" от Influence Lab - успешные примеры инфлюенсер-маркетинга в Узбекистане."
        );
    }

    #[test]
    fn truncation_budgets() {
        for len in [0, 1, 99, 100, 101, 120, 150, 151, 300] {
            let description = "é".repeat(len);
            let expected = |budget: usize| format!("{}...", "é".repeat(len.min(budget)));

            for content_type in ContentType::ALL {
                for lang in Language::ALL {
                    let meta = generate_seo_meta(&record("T", &description), content_type, lang);

                    assert!(meta.description.starts_with(&expected(DESCRIPTION_BUDGET)));
                    assert!(!meta.description[expected(DESCRIPTION_BUDGET).len()..].starts_with('é'));
                    assert_eq!(meta.og_description, expected(OG_DESCRIPTION_BUDGET));
                    assert_eq!(meta.twitter_description, expected(TWITTER_DESCRIPTION_BUDGET));
                }
            }
        }
    }

    #[test]
    fn fallbacks() {
        let content = ContentRecord {
            title_ru: Some("Экран".into()),
            description_ru: Some("Описание".into()),
            ..Default::default()
        };
        let meta = generate_seo_meta(&content, ContentType::Led, Language::Ru);

        assert_eq!(meta.title, "Экран - LED экран в Ташкенте | Influence Lab");
        assert!(meta.description.starts_with("Описание... LED экран \"Экран\" в Ташкенте"));

        for content_type in ContentType::ALL {
            for lang in Language::ALL {
                let meta = generate_seo_meta(&ContentRecord::default(), content_type, lang);
                assert!(meta.title.starts_with(" - "));
                assert_eq!(meta.og_description, "...");
            }
        }
    }

    #[test]
    fn led_location() {
        let defaults = Config::default();

        for lang in Language::ALL {
            let mut content = record("Screen", "Big screen");

            let meta = generate_seo_meta(&content, ContentType::Led, lang);
            assert!(meta.description.contains(&format!(" {} ", defaults.default_location_for(lang))));

            content.location = Some("Yunusabad".into());
            let meta = generate_seo_meta(&content, ContentType::Led, lang);
            assert!(meta.description.contains(" Yunusabad "));
            assert!(!meta.description.contains(defaults.default_location_for(lang)));
        }

        let meta = generate_seo_meta(&record("Screen", ""), ContentType::Led, Language::En);
        assert!(meta.description.contains("LED screen \"Screen\" in Tashkent by Influence Lab."));
    }

    #[test]
    fn configured_default_location() {
        let generator = Generator::new(Config {
            default_location: DefaultLocations {
                en: "Samarkand".into(),
                ..Default::default()
            },
            ..Default::default()
        });

        let meta = generator.seo_meta(&record("Screen", ""), ContentType::Led, Language::En);
        assert!(meta.description.contains(" in Samarkand "));
    }

    #[test]
    fn project_structured_data() {
        let content = ContentRecord {
            id: Some("42".into()),
            title: Some("Case X".into()),
            ..Default::default()
        };
        let data = generate_structured_data(&content, ContentType::Project, Language::Ru);

        assert_eq!(data.schema_type, SchemaType::CreativeWork);
        assert_eq!(data.url, "https://influencelab.uz/project/42");
        assert_eq!(data.date_published, data.date_modified);

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["@type"], "CreativeWork");
        assert!(value.get("image").is_none());
        assert!(value.get("offers").is_none());
    }

    #[test]
    fn led_structured_data() {
        let now = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let content = ContentRecord {
            id: Some(ContentId::from(7_i64)),
            title: Some("Chilonzor".into()),
            location: Some("Chilonzor".into()),
            images: Some(vec!["/uploads/led.jpg".into()]),
            ..Default::default()
        };
        let generator = Generator::new(Config::default().with_base_url("https://staging.influencelab.uz/"));
        let value = serde_json::to_value(generator.structured_data_at(&content, ContentType::Led, Language::En, now)).unwrap();

        assert_eq!(value["@type"], "Product");
        assert_eq!(value["url"], "https://staging.influencelab.uz/led/7");
        assert_eq!(value["datePublished"], "2025-01-02T03:04:05.000Z");
        assert_eq!(value["image"]["url"], "https://staging.influencelab.uz/uploads/led.jpg");
        assert_eq!(value["brand"]["name"], "Influence Lab");
        assert_eq!(value["offers"]["priceCurrency"], "UZS");
    }

    #[test]
    fn led_without_location_has_no_offer() {
        let content = ContentRecord {
            id: Some(ContentId::from(8_i64)),
            title: Some("Sergeli".into()),
            ..Default::default()
        };
        let data = generate_structured_data(&content, ContentType::Led, Language::En);

        assert_eq!(data.schema_type, SchemaType::Product);
        assert!(data.offers.is_none());
        assert!(data.brand.is_none());
    }

    #[test]
    fn absolute_image_kept() {
        let content = ContentRecord {
            id: Some(ContentId::from(1_i64)),
            image: Some("https://cdn.example.com/cover.png".into()),
            ..Default::default()
        };
        let data = generate_structured_data(&content, ContentType::Blog, Language::Uz);

        assert_eq!(data.schema_type, SchemaType::BlogPosting);
        assert_eq!(data.image.unwrap().url, "https://cdn.example.com/cover.png");
    }

    #[test]
    fn missing_id() {
        let data = generate_structured_data(&ContentRecord::default(), ContentType::Blog, Language::Ru);
        assert_eq!(data.url, "https://influencelab.uz/blog/");
    }

    #[test]
    fn trailing_slash_in_literal_config() {
        let generator = Generator::new(Config {
            base_url: "https://x.uz/".into(),
            ..Default::default()
        });
        let content = ContentRecord {
            id: Some(ContentId::from(1_i64)),
            image: Some("/cover.png".into()),
            ..Default::default()
        };
        let data = generator.structured_data(&content, ContentType::Blog, Language::Ru);

        assert_eq!(generator.config().base_url, "https://x.uz");
        assert_eq!(data.url, "https://x.uz/blog/1");
        assert_eq!(data.author.url, "https://x.uz");
        assert_eq!(data.publisher.logo.url, "https://x.uz/img/logo.png");
        assert_eq!(data.image.unwrap().url, "https://x.uz/cover.png");
    }
}
