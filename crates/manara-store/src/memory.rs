//! In-memory store implementations.
//!
//! Back tests and local development; the production deployment swaps in a
//! hosted backend behind the same traits.

use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::RwLock;

use manara_page::PageRecord;

use crate::event::{ChangeBus, ChangeEvent};
use crate::submissions::{submission_id, ContactMessage, EmploymentApplication};
use crate::{PageStore, Result, SubmissionStore};

/// Concurrent in-memory page store keyed by slug.
#[derive(Default)]
pub struct MemoryPageStore {
    pages: DashMap<String, PageRecord>,
    bus: ChangeBus,
}

impl MemoryPageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The store's change bus, for live-preview subscribers.
    pub fn bus(&self) -> &ChangeBus {
        &self.bus
    }
}

#[async_trait]
impl PageStore for MemoryPageStore {
    async fn get_page_by_slug(&self, slug: &str) -> Result<Option<PageRecord>> {
        Ok(self.pages.get(slug).map(|r| r.value().clone()))
    }

    async fn get_home_page(&self) -> Result<Option<PageRecord>> {
        Ok(self
            .pages
            .iter()
            .find(|entry| entry.is_home)
            .map(|entry| entry.value().clone()))
    }

    async fn save_page(&self, record: &PageRecord) -> Result<()> {
        self.pages.insert(record.slug.clone(), record.clone());
        tracing::debug!(slug = %record.slug, "page saved");
        self.bus.publish(ChangeEvent::PageSaved {
            slug: record.slug.clone(),
        });
        Ok(())
    }

    async fn delete_page(&self, slug: &str) -> Result<()> {
        if self.pages.remove(slug).is_some() {
            self.bus.publish(ChangeEvent::PageDeleted {
                slug: slug.to_string(),
            });
        }
        Ok(())
    }

    async fn list_pages(&self) -> Result<Vec<PageRecord>> {
        let mut pages: Vec<PageRecord> =
            self.pages.iter().map(|entry| entry.value().clone()).collect();
        pages.sort_by(|a, b| a.slug.cmp(&b.slug));
        Ok(pages)
    }
}

/// In-memory submission store.
#[derive(Default)]
pub struct MemorySubmissionStore {
    applications: RwLock<Vec<EmploymentApplication>>,
    messages: RwLock<Vec<ContactMessage>>,
    bus: ChangeBus,
}

impl MemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bus(&self) -> &ChangeBus {
        &self.bus
    }
}

#[async_trait]
impl SubmissionStore for MemorySubmissionStore {
    async fn save_application(&self, application: &EmploymentApplication) -> Result<()> {
        let mut stored = application.clone();
        if stored.id.is_empty() {
            stored.id = submission_id();
        }
        let id = stored.id.clone();
        self.applications.write().push(stored);
        self.bus.publish(ChangeEvent::SubmissionAdded { id });
        Ok(())
    }

    async fn list_applications(&self) -> Result<Vec<EmploymentApplication>> {
        Ok(self.applications.read().clone())
    }

    async fn delete_application(&self, id: &str) -> Result<()> {
        self.applications.write().retain(|a| a.id != id);
        Ok(())
    }

    async fn save_contact_message(&self, message: &ContactMessage) -> Result<()> {
        let mut stored = message.clone();
        if stored.id.is_empty() {
            stored.id = submission_id();
        }
        let id = stored.id.clone();
        self.messages.write().push(stored);
        self.bus.publish(ChangeEvent::SubmissionAdded { id });
        Ok(())
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>> {
        Ok(self.messages.read().clone())
    }

    async fn delete_contact_message(&self, id: &str) -> Result<()> {
        self.messages.write().retain(|m| m.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use manara_types::{Block, BlockTag};

    #[tokio::test]
    async fn test_save_and_get_by_slug() {
        let store = MemoryPageStore::new();
        let mut record = PageRecord::new("about");
        record.blocks_ar.push(Block::empty(BlockTag::About));
        store.save_page(&record).await.unwrap();

        let loaded = store.get_page_by_slug("about").await.unwrap().unwrap();
        assert_eq!(loaded, record);
        assert!(store.get_page_by_slug("ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_home_page_lookup() {
        let store = MemoryPageStore::new();
        store.save_page(&PageRecord::new("about")).await.unwrap();
        assert!(store.get_home_page().await.unwrap().is_none());

        let mut home = PageRecord::new("home");
        home.is_home = true;
        store.save_page(&home).await.unwrap();
        let found = store.get_home_page().await.unwrap().unwrap();
        assert_eq!(found.slug, "home");
    }

    #[tokio::test]
    async fn test_save_publishes_change_event() {
        let store = MemoryPageStore::new();
        let mut rx = store.bus().subscribe();
        store.save_page(&PageRecord::new("news")).await.unwrap();
        assert_eq!(
            rx.recv().await.unwrap(),
            ChangeEvent::PageSaved { slug: "news".into() }
        );
    }

    #[tokio::test]
    async fn test_submission_lifecycle() {
        let store = MemorySubmissionStore::new();
        let app = EmploymentApplication {
            position: "Math teacher".into(),
            full_name: "Sara".into(),
            ..EmploymentApplication::default()
        };
        store.save_application(&app).await.unwrap();
        let listed = store.list_applications().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert!(!listed[0].id.is_empty());

        store.delete_application(&listed[0].id).await.unwrap();
        assert!(store.list_applications().await.unwrap().is_empty());
    }
}
