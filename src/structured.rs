//! schema.org objects embedded in pages as JSON-LD.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

use crate::{content::ContentType, error::Result};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";
pub const ORGANIZATION_NAME: &str = "Influence Lab";
pub const LOGO_PATH: &str = "/img/logo.png";
pub const OFFER_CURRENCY: &str = "UZS";
pub const IN_STOCK: &str = "https://schema.org/InStock";

#[derive(Serialize, PartialEq, Eq, Debug, Clone, Copy)]
pub enum SchemaType {
    BlogPosting,
    CreativeWork,
    Product,
}

impl SchemaType {
    pub fn for_content(content_type: ContentType) -> Self {
        match content_type {
            ContentType::Blog => Self::BlogPosting,
            ContentType::Project => Self::CreativeWork,
            ContentType::Led => Self::Product,
        }
    }

    /// Unrecognized names describe a product.
    pub fn from_type_name(name: &str) -> Self {
        name.parse()
            .map(Self::for_content)
            .unwrap_or(Self::Product)
    }
}

#[derive(Serialize, PartialEq, Eq, Debug, Clone)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub url: String,
}

impl ImageObject {
    pub fn new(url: String) -> Self {
        Self {
            kind: "ImageObject",
            url,
        }
    }
}

#[derive(Serialize, PartialEq, Eq, Debug, Clone)]
pub struct Organization {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub url: String,
}

#[derive(Serialize, PartialEq, Eq, Debug, Clone)]
pub struct Publisher {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub logo: ImageObject,
}

#[derive(Serialize, PartialEq, Eq, Debug, Clone)]
pub struct Brand {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
}

#[derive(Serialize, PartialEq, Eq, Debug, Clone)]
pub struct Offer {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub availability: &'static str,
    #[serde(rename = "priceCurrency")]
    pub price_currency: &'static str,
}

#[derive(Serialize, PartialEq, Debug, Clone)]
pub struct StructuredData {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: SchemaType,
    pub headline: String,
    pub description: String,
    pub url: String,
    #[serde(rename = "datePublished", serialize_with = "iso_timestamp")]
    pub date_published: DateTime<Utc>,
    #[serde(rename = "dateModified", serialize_with = "iso_timestamp")]
    pub date_modified: DateTime<Utc>,
    pub author: Organization,
    pub publisher: Publisher,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<Brand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offers: Option<Offer>,
}

impl StructuredData {
    /// The parts every page shares. Both dates are `now`.
    pub fn base(
        base_url: &str,
        schema_type: SchemaType,
        headline: &str,
        description: &str,
        url: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            context: SCHEMA_CONTEXT,
            schema_type,
            headline: headline.to_owned(),
            description: description.to_owned(),
            url,
            date_published: now,
            date_modified: now,
            author: Organization {
                kind: "Organization",
                name: ORGANIZATION_NAME,
                url: base_url.to_owned(),
            },
            publisher: Publisher {
                kind: "Organization",
                name: ORGANIZATION_NAME,
                logo: ImageObject::new(format!("{}{}", base_url, LOGO_PATH)),
            },
            image: None,
            brand: None,
            offers: None,
        }
    }

    /// Marks the object as an in-stock product sold by the agency.
    pub fn with_offer(mut self) -> Self {
        self.schema_type = SchemaType::Product;
        self.brand = Some(Brand {
            kind: "Brand",
            name: ORGANIZATION_NAME,
        });
        self.offers = Some(Offer {
            kind: "Offer",
            availability: IN_STOCK,
            price_currency: OFFER_CURRENCY,
        });
        self
    }

    pub fn to_json_ld(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_ld_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Leaves `http(s)` URLs alone; anything else is a path under `base_url`.
pub fn absolute_url(base_url: &str, image: &str) -> String {
    if image.starts_with("http") {
        image.to_owned()
    } else if image.starts_with('/') {
        format!("{}{}", base_url, image)
    } else {
        format!("{}/{}", base_url, image)
    }
}

/// Same shape as `Date.prototype.toISOString`: millisecond precision, `Z`.
fn iso_timestamp<S: Serializer>(
    value: &DateTime<Utc>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}
