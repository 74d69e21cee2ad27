//! The persisted page record.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use manara_types::BilingualText;

use crate::list::PageBlockList;

/// A page as stored by the page-storage collaborator.
///
/// Carries both language tracks plus the legacy unified `blocks` field; any
/// combination of the three may be present in historical data. Plain-text
/// bilingual fields back the empty-block-list fallback view.
///
/// Deserialization is the fail-soft entry point for persisted data:
/// unparseable block entries are skipped with a warning (see
/// [`PageBlockList::from_value_lenient`]) instead of poisoning the record.
/// Legacy flattened text fields (`titleAr`/`titleEn`) are normalized into
/// bilingual pairs here and nowhere else.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    pub slug: String,
    /// Flags the site homepage; slug lookups for it must redirect to the
    /// language root instead of rendering in place.
    pub is_home: bool,
    pub title: BilingualText,
    pub description: BilingualText,
    pub content: BilingualText,
    /// Arabic language track.
    pub blocks_ar: PageBlockList,
    /// English language track.
    pub blocks_en: PageBlockList,
    /// Legacy unified list; bilingual fields inside it are resolved
    /// per-field at render time.
    pub blocks: PageBlockList,
}

impl PageRecord {
    /// A new empty page with the given slug.
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            ..Self::default()
        }
    }

    /// Build from raw persisted JSON, normalizing legacy shapes and
    /// skipping unparseable block entries.
    pub fn from_value(raw: &Value) -> Self {
        let text_pair = |field: &str| -> BilingualText {
            if let Some(pair) = raw.get(field) {
                if let Ok(t) = serde_json::from_value::<BilingualText>(pair.clone()) {
                    return t;
                }
            }
            // Legacy flattened legs: "titleAr" / "titleEn".
            let leg = |suffix: &str| {
                raw.get(format!("{field}{suffix}"))
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string()
            };
            BilingualText::new(leg("Ar"), leg("En"))
        };

        let block_list = |field: &str| -> PageBlockList {
            match raw.get(field) {
                Some(value) => {
                    let (list, errors) = PageBlockList::from_value_lenient(value);
                    if !errors.is_empty() {
                        tracing::warn!(
                            field,
                            skipped = errors.len(),
                            "dropped unparseable blocks from page record"
                        );
                    }
                    list
                }
                None => PageBlockList::new(),
            }
        };

        Self {
            slug: raw
                .get("slug")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            is_home: raw.get("isHome").and_then(Value::as_bool).unwrap_or(false),
            title: text_pair("title"),
            description: text_pair("description"),
            content: text_pair("content"),
            blocks_ar: block_list("blocksAr"),
            blocks_en: block_list("blocksEn"),
            blocks: block_list("blocks"),
        }
    }
}

impl<'de> Deserialize<'de> for PageRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&raw))
    }
}
