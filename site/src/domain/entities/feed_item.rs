//! Feed item domain entity
//!
//! Items as they appear in the live and archive feed documents. Every field
//! except `id` is optional on the wire and degrades to a default.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::section::Section;

/// Fallback type label
pub const DEFAULT_TYPE: &str = "REAL";

/// Fallback category label
pub const DEFAULT_CATEGORY: &str = "GENERAL";

/// Type label used by the meme desk
pub const MEME_TYPE: &str = "MEME";

/// Deserialize an optional string leniently: null or a non-string value becomes `None`
fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Like [`deserialize_lenient_string`] but defaults to the empty string
fn deserialize_lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_lenient_string(deserializer)?.unwrap_or_default())
}

/// Deserialize a timestamp leniently: missing, null, non-string or unparseable all become `None`
fn deserialize_lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = deserialize_lenient_string(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

/// Parse an ISO-8601 timestamp, accepting a missing offset as UTC
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

/// A single story in a feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub title: String,
    /// Subtitle
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub dek: String,
    /// "REAL" or "MEME"
    #[serde(
        rename = "type",
        default,
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub section_label: Option<String>,
    /// Section code, e.g. "LATEST"
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub section: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_credit: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub author: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub body: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub published_at: Option<DateTime<Utc>>,
}

impl FeedItem {
    /// Create an item with only an id and title; everything else defaulted
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            dek: String::new(),
            kind: None,
            category: None,
            section_label: None,
            section: None,
            image: None,
            image_credit: None,
            author: None,
            source_url: None,
            body: None,
            published_at: None,
        }
    }

    /// Whether the item belongs to the given section (exact code match)
    pub fn in_section(&self, section: Section) -> bool {
        self.section.as_deref() == Some(section.as_str())
    }

    /// Type label with the REAL fallback
    pub fn type_label(&self) -> &str {
        self.kind.as_deref().unwrap_or(DEFAULT_TYPE)
    }

    pub fn is_meme(&self) -> bool {
        self.type_label() == MEME_TYPE
    }

    /// Relative link to the article page
    pub fn article_href(&self) -> String {
        format!("article.html?id={}", urlencoding::encode(&self.id))
    }
}

/// A feed document: `{ "items": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedDocument {
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub generated_at: Option<String>,
    pub items: Vec<FeedItem>,
}
