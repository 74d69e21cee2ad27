//! Per-block animation overlay.
//!
//! Animation vocabularies are closed sets parsed into enums at the schema
//! boundary; the renderer never matches free strings. Same ownership rule
//! as [`BlockStyles`](crate::BlockStyles): the overlay dies with its block.

use serde::{Deserialize, Serialize};

/// Entrance animation played when a block mounts (or first scrolls into
/// view, when `scroll_animation` is set).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EntranceAnimation {
    #[default]
    None,
    FadeIn,
    FadeInUp,
    ScaleIn,
    SlideInLeft,
    SlideInRight,
    BounceIn,
}

impl EntranceAnimation {
    /// CSS class driving this animation, or `None` for no animation.
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            EntranceAnimation::None => None,
            EntranceAnimation::FadeIn => Some("animate-fade-in"),
            EntranceAnimation::FadeInUp => Some("animate-fade-in-up"),
            EntranceAnimation::ScaleIn => Some("animate-scale-in"),
            EntranceAnimation::SlideInLeft => Some("animate-slide-in-left"),
            EntranceAnimation::SlideInRight => Some("animate-slide-in-right"),
            EntranceAnimation::BounceIn => Some("animate-bounce-in"),
        }
    }
}

/// Hover animation applied while the pointer is over the block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum HoverAnimation {
    #[default]
    None,
    Lift,
    Scale,
    Glow,
    Shadow,
}

impl HoverAnimation {
    /// CSS class driving this animation, or `None` for no animation.
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            HoverAnimation::None => None,
            HoverAnimation::Lift => Some("hover-lift"),
            HoverAnimation::Scale => Some("hover-scale"),
            HoverAnimation::Glow => Some("hover-glow"),
            HoverAnimation::Shadow => Some("hover-shadow"),
        }
    }
}

/// Animation targeting one element *inside* a block, addressed by selector.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementAnimation {
    /// CSS selector within the block (e.g. `"h2"`, `".card"`).
    pub selector: String,
    pub animation: EntranceAnimation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u32>,
    /// Extra delay between successive matches of the selector.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stagger_ms: Option<u32>,
}

/// Animation overlay attached to a block instance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockAnimations {
    /// Entrance animation; fires once per mount.
    pub entrance: EntranceAnimation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entrance_duration_ms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entrance_delay_ms: Option<u32>,
    pub hover: HoverAnimation,
    /// Defer the entrance animation until the block first intersects the
    /// viewport. The effect applies exactly once; later intersections are
    /// no-ops.
    pub scroll_animation: bool,
    /// Viewport margin for the intersection check (e.g. `"-100px"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_offset: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub element_animations: Vec<ElementAnimation>,
}

impl BlockAnimations {
    /// True when the overlay requests nothing at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
