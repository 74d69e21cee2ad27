//! A block placed on a page.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use manara_types::{
    fresh_id, normalize_legacy_fields, parse_block, Block, BlockAnimations, BlockStyles, BlockTag,
};

/// One block instance on a page: identity, position, payload, overlays.
///
/// `id` is unique within its list (enforced at insert). `order` defines the
/// render sequence; gaps and duplicates are permitted, ties break by
/// insertion order. Overlays are owned by the instance and die with it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageBlockInstance {
    pub id: String,
    pub order: i64,
    pub content: Block,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_styles: Option<BlockStyles>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_animations: Option<BlockAnimations>,
}

impl PageBlockInstance {
    /// Wrap a block with a freshly minted id.
    pub fn new(content: Block, order: i64) -> Self {
        Self {
            id: fresh_id(),
            order,
            content,
            block_styles: None,
            block_animations: None,
        }
    }

    /// The content's variant tag.
    pub fn tag(&self) -> BlockTag {
        self.content.tag()
    }

    /// Style overlay, or `None` when the overlay is absent or a no-op.
    pub fn effective_styles(&self) -> Option<&BlockStyles> {
        self.block_styles.as_ref().filter(|s| !s.is_empty())
    }

    /// Animation overlay, or `None` when absent or a no-op.
    pub fn effective_animations(&self) -> Option<&BlockAnimations> {
        self.block_animations.as_ref().filter(|a| !a.is_empty())
    }
}

// Deserialization routes `content` through the parse boundary so legacy
// `kind` tags inside persisted instances are normalized exactly once.
impl<'de> Deserialize<'de> for PageBlockInstance {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Raw {
            id: String,
            order: i64,
            content: Value,
            #[serde(default)]
            block_styles: Option<BlockStyles>,
            #[serde(default)]
            block_animations: Option<Value>,
        }

        let raw = Raw::deserialize(deserializer)?;
        let content = parse_block(&raw.content).map_err(D::Error::custom)?;
        // Animation overlays carry the same historical field shapes as
        // payloads (unsuffixed `delay`/`stagger` on element animations).
        let block_animations = raw
            .block_animations
            .map(|v| serde_json::from_value::<BlockAnimations>(normalize_legacy_fields(&v)))
            .transpose()
            .map_err(D::Error::custom)?;
        Ok(Self {
            id: raw.id,
            order: raw.order,
            content,
            block_styles: raw.block_styles,
            block_animations,
        })
    }
}
