//! Live preview: re-resolve on change notification.
//!
//! The preview consumes the store's change events at-least-once: events
//! carry only the changed slug, so a stale, duplicate, or out-of-order
//! event just triggers another idempotent re-resolution. A lagged
//! subscriber re-resolves immediately rather than caring what it missed.

use std::sync::Arc;

use tokio::sync::broadcast;

use manara_page::{resolve, LocalizedPage};
use manara_store::{ChangeBus, ChangeEvent, PageStore};
use manara_types::Language;

/// What a preview subscriber learned from the next relevant change.
#[derive(Clone, Debug, PartialEq)]
pub enum PreviewUpdate {
    /// The page changed; here is its freshly resolved view.
    Updated(LocalizedPage),
    /// The page was deleted out from under the preview.
    Removed,
    /// The change channel closed; no more updates will come.
    Closed,
}

/// A live preview of one page in one language, driven by change events.
pub struct LivePreview<S: PageStore> {
    store: Arc<S>,
    rx: broadcast::Receiver<ChangeEvent>,
    slug: String,
    lang: Language,
}

impl<S: PageStore> LivePreview<S> {
    pub fn new(store: Arc<S>, bus: &ChangeBus, slug: impl Into<String>, lang: Language) -> Self {
        Self {
            store,
            rx: bus.subscribe(),
            slug: slug.into(),
            lang,
        }
    }

    /// Wait for the next change affecting this page and re-resolve.
    ///
    /// Events for other pages are ignored. Lag is handled by re-resolving
    /// unconditionally — the preview can only ever be too fresh, never
    /// wrong.
    pub async fn next_update(&mut self) -> PreviewUpdate {
        loop {
            match self.rx.recv().await {
                Ok(ChangeEvent::PageSaved { slug }) | Ok(ChangeEvent::PageDeleted { slug })
                    if slug == self.slug =>
                {
                    match self.re_resolve().await {
                        Some(page) => return PreviewUpdate::Updated(page),
                        None => return PreviewUpdate::Removed,
                    }
                }
                Ok(_) => continue,
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    tracing::debug!(missed, slug = %self.slug, "preview lagged; re-resolving");
                    if let Some(page) = self.re_resolve().await {
                        return PreviewUpdate::Updated(page);
                    }
                    return PreviewUpdate::Removed;
                }
                Err(broadcast::error::RecvError::Closed) => return PreviewUpdate::Closed,
            }
        }
    }

    async fn re_resolve(&self) -> Option<LocalizedPage> {
        match self.store.get_page_by_slug(&self.slug).await {
            Ok(Some(record)) => Some(resolve(&record, self.lang)),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(slug = %self.slug, error = %e, "preview re-resolve failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use manara_page::PageRecord;
    use manara_store::MemoryPageStore;
    use manara_types::{Block, BlockTag};

    #[tokio::test]
    async fn test_preview_sees_saved_page() {
        let store = Arc::new(MemoryPageStore::new());
        let mut preview =
            LivePreview::new(store.clone(), store.bus(), "home", Language::Ar);

        let mut record = PageRecord::new("home");
        record.blocks_ar.push(Block::empty(BlockTag::HeroSlider));
        store.save_page(&record).await.unwrap();

        let PreviewUpdate::Updated(page) = preview.next_update().await else {
            panic!("expected update");
        };
        assert_eq!(page.blocks.len(), 1);
        assert_eq!(page.lang, Language::Ar);
    }

    #[tokio::test]
    async fn test_preview_ignores_other_pages() {
        let store = Arc::new(MemoryPageStore::new());
        let mut preview =
            LivePreview::new(store.clone(), store.bus(), "home", Language::En);

        store.save_page(&PageRecord::new("contact")).await.unwrap();
        store.save_page(&PageRecord::new("home")).await.unwrap();

        // The "contact" event is skipped; the first update is for "home".
        let PreviewUpdate::Updated(page) = preview.next_update().await else {
            panic!("expected update");
        };
        assert!(page.uses_fallback());
    }

    #[tokio::test]
    async fn test_preview_reports_deletion() {
        let store = Arc::new(MemoryPageStore::new());
        store.save_page(&PageRecord::new("temp")).await.unwrap();
        let mut preview =
            LivePreview::new(store.clone(), store.bus(), "temp", Language::En);

        store.delete_page("temp").await.unwrap();
        assert_eq!(preview.next_update().await, PreviewUpdate::Removed);
    }
}
