//! Localized content resolution.
//!
//! Collapses a [`PageRecord`]'s mixed language tracks into one homogeneous
//! view for a requested language, per the track priority documented on the
//! crate root.

use serde::Serialize;
use thiserror::Error;

use manara_types::{Dir, Language};

use crate::list::PageBlockList;
use crate::record::PageRecord;

/// Errors surfaced to the routing boundary.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PageError {
    /// No page record exists for the slug. Callers render a localized
    /// not-found view, not an exception page.
    #[error("page not found: {0:?}")]
    PageNotFound(String),

    /// Requested language is outside the supported set. Surfaced as a
    /// 404-equivalent before the resolver runs.
    #[error("unsupported language: {0:?}")]
    UnsupportedLanguage(String),
}

/// Parse a routing path segment into a supported [`Language`].
pub fn parse_language(segment: &str) -> Result<Language, PageError> {
    Language::from_str(segment).ok_or_else(|| PageError::UnsupportedLanguage(segment.to_string()))
}

/// A page resolved for one display language.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LocalizedPage {
    pub lang: Language,
    pub dir: Dir,
    /// Homogeneous block list for this language (possibly empty).
    pub blocks: PageBlockList,
    /// Plain-text fallbacks used when `blocks` is empty.
    pub title: String,
    pub description: String,
    pub content: String,
}

impl LocalizedPage {
    /// Whether the view should use the plain-text fallback layout.
    pub fn uses_fallback(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Outcome of a slug-based page lookup.
#[derive(Clone, Debug, PartialEq)]
pub enum SlugResolution {
    /// The slug is the homepage: redirect to the language root instead of
    /// rendering the page at its own slug.
    Redirect { location: String },
    Page(LocalizedPage),
}

/// Resolve a page record for a display language.
///
/// Track priority, first match wins:
/// 1. non-empty language-specific track for `lang`
/// 2. non-empty legacy unified `blocks`
/// 3. empty list (plain-text fallback view)
///
/// A language-specific track that is non-empty always wins outright, even
/// when the legacy list disagrees; the two are never merged.
pub fn resolve(record: &PageRecord, lang: Language) -> LocalizedPage {
    let track = match lang {
        Language::Ar => &record.blocks_ar,
        Language::En => &record.blocks_en,
    };
    let blocks = if !track.is_empty() {
        tracing::debug!(slug = %record.slug, %lang, "using language-specific track");
        track.clone()
    } else if !record.blocks.is_empty() {
        tracing::debug!(slug = %record.slug, %lang, "falling back to legacy unified blocks");
        record.blocks.clone()
    } else {
        tracing::debug!(slug = %record.slug, %lang, "no blocks; plain-text fallback");
        PageBlockList::new()
    };

    LocalizedPage {
        lang,
        dir: lang.dir(),
        blocks,
        title: record.title.get(lang).to_string(),
        description: record.description.get(lang).to_string(),
        content: record.content.get(lang).to_string(),
    }
}

/// Resolve a slug lookup result, enforcing the homepage-redirect policy.
///
/// `record` is the storage collaborator's answer for `slug`; `None` becomes
/// [`PageError::PageNotFound`]. A record flagged `is_home` redirects to the
/// language root regardless of requested language.
pub fn resolve_slug(
    record: Option<&PageRecord>,
    slug: &str,
    lang: Language,
) -> Result<SlugResolution, PageError> {
    let record = record.ok_or_else(|| PageError::PageNotFound(slug.to_string()))?;
    if record.is_home {
        return Ok(SlugResolution::Redirect {
            location: format!("/{lang}"),
        });
    }
    Ok(SlugResolution::Page(resolve(record, lang)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use manara_types::{BilingualText, Block, BlockTag};

    fn record_with_tracks(ar: usize, en: usize, legacy: usize) -> PageRecord {
        let mut record = PageRecord::new("about");
        record.title = BilingualText::new("من نحن", "About us");
        record.description = BilingualText::new("وصف", "description");
        record.content = BilingualText::new("نص", "body text");
        for _ in 0..ar {
            record.blocks_ar.push(Block::empty(BlockTag::About));
        }
        for _ in 0..en {
            record.blocks_en.push(Block::empty(BlockTag::About));
        }
        for _ in 0..legacy {
            record.blocks.push(Block::empty(BlockTag::Jobs));
        }
        record
    }

    #[test]
    fn test_language_track_wins() {
        let record = record_with_tracks(2, 1, 3);
        let page = resolve(&record, Language::Ar);
        assert_eq!(page.blocks.len(), 2);
        assert_eq!(page.dir, Dir::Rtl);
        assert_eq!(page.title, "من نحن");
    }

    #[test]
    fn test_legacy_blocks_when_track_empty() {
        let record = record_with_tracks(2, 0, 3);
        let page = resolve(&record, Language::En);
        assert_eq!(page.blocks.len(), 3);
        assert_eq!(page.dir, Dir::Ltr);
    }

    #[test]
    fn test_empty_everything_falls_back_to_plain_text() {
        // blocksAr non-empty, blocksEn empty, legacy empty: English gets
        // the plain-text fallback, never the Arabic track.
        let record = record_with_tracks(2, 0, 0);
        let page = resolve(&record, Language::En);
        assert!(page.uses_fallback());
        assert_eq!(page.title, "About us");
        assert_eq!(page.content, "body text");
    }

    #[test]
    fn test_tracks_never_merge() {
        let record = record_with_tracks(1, 0, 4);
        let page = resolve(&record, Language::Ar);
        // Language track wins outright; legacy list is ignored entirely.
        assert_eq!(page.blocks.len(), 1);
        assert_eq!(page.blocks.iter().next().unwrap().tag(), BlockTag::About);
    }

    #[test]
    fn test_missing_record_is_page_not_found() {
        let err = resolve_slug(None, "ghost", Language::Ar).unwrap_err();
        assert_eq!(err, PageError::PageNotFound("ghost".into()));
    }

    #[test]
    fn test_homepage_slug_redirects_for_any_language() {
        let mut record = PageRecord::new("home");
        record.is_home = true;
        for lang in [Language::Ar, Language::En] {
            let outcome = resolve_slug(Some(&record), "home", lang).unwrap();
            assert_eq!(
                outcome,
                SlugResolution::Redirect {
                    location: format!("/{lang}")
                }
            );
        }
    }

    #[test]
    fn test_unsupported_language_rejected_at_boundary() {
        assert_eq!(parse_language("ar"), Ok(Language::Ar));
        assert_eq!(
            parse_language("fr"),
            Err(PageError::UnsupportedLanguage("fr".into()))
        );
    }
}
