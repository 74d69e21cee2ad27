//! Block schema for the Manara page model.
//!
//! Pages are composed of a closed set of typed content blocks. Each block is
//! a tagged variant (`"type"` discriminator on the wire) with a payload
//! specific to its tag, plus optional style/animation overlays. Both the
//! public renderer and the dashboard editor consume this schema, so the
//! variant set is deliberately closed: an unrecognized tag is rejected at
//! the parse boundary, never discovered downstream.
//!
//! # Bilingual content
//!
//! The site serves Arabic and English from one content store. Every
//! human-readable field is a [`BilingualText`] pair; one leg is selected at
//! render time by the active [`Language`]. Reading direction follows the
//! language ([`Dir`]).
//!
//! # Legacy normalization
//!
//! Historical data tagged blocks with `kind` instead of `type`. That alias
//! is absorbed once, in [`parse_block`]; nothing past the parse boundary
//! ever sees the legacy shape.

mod animation;
mod block;
mod error;
mod icon;
mod parse;
mod style;
mod text;

pub use animation::{BlockAnimations, ElementAnimation, EntranceAnimation, HoverAnimation};
pub use block::{
    About, Block, BlockTag, ContactSection, Department, Departments, Feature, GalleryImage,
    GallerySection, HeroSlider, Jobs, JobService, Slide, Stat, Testimonial,
    TestimonialsSection,
};
pub use error::SchemaError;
pub use icon::Icon;
pub use parse::{normalize_legacy_fields, parse_block, parse_block_str, serialize_block};
pub use style::{BlockStyles, TextAlign};
pub use text::{BilingualText, Dir, Language};

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Mint a fresh block/slide identifier (UUID v4).
///
/// Ids arriving in persisted data are opaque strings and preserved as-is;
/// this is only for editor-created entries.
pub fn fresh_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
