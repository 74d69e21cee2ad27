//! Per-block presentation overlay.
//!
//! Every field is optional: an unset field means "inherit the variant's
//! default presentation". The overlay is owned 1:1 by its block instance
//! and carries no lifecycle of its own.

use serde::{Deserialize, Serialize};

/// Horizontal text alignment override.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Style overlay attached to a block instance.
///
/// Values are CSS-level strings (lengths, colors, shadow presets) passed
/// through opaquely — the schema validates presence and shape, not CSS
/// grammar. Hover fields describe the hover-state variant of their base
/// property.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockStyles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    /// Extra class names appended to the block wrapper.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Explicit DOM id for anchor links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    // Hover-state variants
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_shadow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_scale: Option<String>,
}

impl BlockStyles {
    /// True when no field is set (the overlay is a no-op).
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
