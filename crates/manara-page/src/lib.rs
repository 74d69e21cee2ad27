//! Page-level block lists and localized content resolution.
//!
//! A page record carries up to three block lists — `blocksAr`, `blocksEn`,
//! and a legacy unified `blocks` — plus bilingual plain-text fallbacks.
//! [`resolve`] collapses that into one homogeneous [`LocalizedPage`] for a
//! requested [`Language`](manara_types::Language).
//!
//! # Track priority
//!
//! 1. the non-empty language-specific list for the requested language
//! 2. else the non-empty legacy unified list (bilingual fields are then
//!    resolved per-field at render time)
//! 3. else an empty list; the view falls back to plain-text fields
//!
//! When a language-specific list and the legacy list disagree, the
//! language-specific one wins outright; the two are never merged.

mod instance;
mod list;
mod record;
mod resolve;

pub use instance::PageBlockInstance;
pub use list::{IntegrityError, ListError, PageBlockList, ORDER_STEP};
pub use record::PageRecord;
pub use resolve::{parse_language, resolve, resolve_slug, LocalizedPage, PageError, SlugResolution};
