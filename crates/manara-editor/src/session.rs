//! The editing session: working copy, actions, persist-then-commit.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use manara_page::{IntegrityError, ListError, PageBlockList, PageRecord};
use manara_store::{PageStore, StoreError};
use manara_types::{Block, BlockAnimations, BlockStyles, BlockTag, Language};

use crate::context::EditorContext;

/// Errors surfaced to the operator. Every one is actionable; none is
/// silently dropped.
#[derive(Error, Debug)]
pub enum EditorError {
    /// The page being edited does not exist (or was deleted under us).
    #[error("page not found: {0:?}")]
    PageNotFound(String),

    /// A list operation was rejected (unknown id, duplicate id, schema
    /// violation in a patch).
    #[error(transparent)]
    List(#[from] ListError),

    /// The save did not stick; the working copy has been rolled back.
    #[error(transparent)]
    Persist(#[from] StoreError),
}

/// A mutating editor action, each mapping to one block-list operation.
#[derive(Clone, Debug)]
pub enum EditorAction {
    /// Add an empty block of the given tag; `at_order: None` appends.
    AddBlock {
        tag: BlockTag,
        at_order: Option<i64>,
    },
    RemoveBlock {
        id: String,
    },
    Reorder {
        id: String,
        new_order: i64,
    },
    /// Shallow-merge a partial payload into a block's content.
    UpdateContent {
        id: String,
        patch: Value,
    },
    SetStyles {
        id: String,
        styles: Option<BlockStyles>,
    },
    SetAnimations {
        id: String,
        animations: Option<BlockAnimations>,
    },
}

/// An editing session over one page's working copy.
///
/// Every successful [`apply`](Self::apply) has been persisted; the working
/// copy never gets ahead of storage.
pub struct EditorSession<S: PageStore> {
    store: Arc<S>,
    ctx: EditorContext,
    record: PageRecord,
}

impl<S: PageStore> EditorSession<S> {
    /// Open a session on an existing page.
    pub async fn open(store: Arc<S>, ctx: EditorContext, slug: &str) -> Result<Self, EditorError> {
        let record = store
            .get_page_by_slug(slug)
            .await?
            .ok_or_else(|| EditorError::PageNotFound(slug.to_string()))?;
        tracing::debug!(
            slug,
            operator = %ctx.operator.name,
            track = %ctx.track,
            "editor session opened"
        );
        Ok(Self { store, ctx, record })
    }

    /// Create the page if absent, then open a session on it.
    pub async fn open_or_create(
        store: Arc<S>,
        ctx: EditorContext,
        slug: &str,
    ) -> Result<Self, EditorError> {
        if store.get_page_by_slug(slug).await?.is_none() {
            store.save_page(&PageRecord::new(slug)).await?;
        }
        Self::open(store, ctx, slug).await
    }

    /// The session's current view of the page.
    pub fn record(&self) -> &PageRecord {
        &self.record
    }

    /// The language track this session edits.
    pub fn track(&self) -> Language {
        self.ctx.track
    }

    /// The block list being edited.
    pub fn blocks(&self) -> &PageBlockList {
        match self.ctx.track {
            Language::Ar => &self.record.blocks_ar,
            Language::En => &self.record.blocks_en,
        }
    }

    /// Integrity findings on the working copy, surfaced as dashboard
    /// warnings. Corruption is reported, never auto-repaired.
    pub fn integrity_warnings(&self) -> Vec<IntegrityError> {
        self.blocks().validate()
    }

    /// Apply one action: mutate the working copy, persist, and only then
    /// treat the mutation as authoritative. On persist failure the working
    /// copy is restored to its pre-action state.
    pub async fn apply(&mut self, action: EditorAction) -> Result<(), EditorError> {
        let before = self.blocks().clone();

        if let Err(e) = self.apply_to_list(&action) {
            return Err(e.into());
        }

        if let Err(e) = self.store.save_page(&self.record).await {
            *self.blocks_mut() = before;
            tracing::warn!(
                slug = %self.record.slug,
                error = %e,
                "persist failed; rolled back working copy"
            );
            return Err(e.into());
        }
        Ok(())
    }

    /// Update a plain-text field pair (fallback content).
    pub async fn set_title(&mut self, ar: &str, en: &str) -> Result<(), EditorError> {
        let before = self.record.title.clone();
        self.record.title = manara_types::BilingualText::new(ar, en);
        if let Err(e) = self.store.save_page(&self.record).await {
            self.record.title = before;
            return Err(e.into());
        }
        Ok(())
    }

    fn apply_to_list(&mut self, action: &EditorAction) -> Result<(), ListError> {
        let list = self.blocks_mut();
        match action {
            EditorAction::AddBlock { tag, at_order } => {
                let order = at_order.unwrap_or_else(|| list.next_order());
                list.insert(Block::empty(*tag), order);
                Ok(())
            }
            EditorAction::RemoveBlock { id } => list.remove(id).map(|_| ()),
            EditorAction::Reorder { id, new_order } => list.reorder(id, *new_order),
            EditorAction::UpdateContent { id, patch } => list.update(id, patch),
            EditorAction::SetStyles { id, styles } => list.set_styles(id, styles.clone()),
            EditorAction::SetAnimations { id, animations } => {
                list.set_animations(id, animations.clone())
            }
        }
    }

    fn blocks_mut(&mut self) -> &mut PageBlockList {
        match self.ctx.track {
            Language::Ar => &mut self.record.blocks_ar,
            Language::En => &mut self.record.blocks_en,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Operator;
    use async_trait::async_trait;
    use manara_store::MemoryPageStore;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn ctx(track: Language) -> EditorContext {
        EditorContext::new(
            Operator {
                id: "op-1".into(),
                name: "Admin".into(),
                is_admin: true,
            },
            track,
        )
    }

    /// Store that can be told to fail its next save.
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryPageStore,
        fail_next_save: AtomicBool,
    }

    #[async_trait]
    impl PageStore for FlakyStore {
        async fn get_page_by_slug(
            &self,
            slug: &str,
        ) -> manara_store::Result<Option<PageRecord>> {
            self.inner.get_page_by_slug(slug).await
        }

        async fn get_home_page(&self) -> manara_store::Result<Option<PageRecord>> {
            self.inner.get_home_page().await
        }

        async fn save_page(&self, record: &PageRecord) -> manara_store::Result<()> {
            if self.fail_next_save.swap(false, Ordering::SeqCst) {
                return Err(StoreError::PersistFailure("backend offline".into()));
            }
            self.inner.save_page(record).await
        }

        async fn delete_page(&self, slug: &str) -> manara_store::Result<()> {
            self.inner.delete_page(slug).await
        }

        async fn list_pages(&self) -> manara_store::Result<Vec<PageRecord>> {
            self.inner.list_pages().await
        }
    }

    #[tokio::test]
    async fn test_open_missing_page_fails() {
        let store = Arc::new(MemoryPageStore::new());
        let result = EditorSession::open(store, ctx(Language::Ar), "ghost").await;
        assert!(matches!(result, Err(EditorError::PageNotFound(_))));
    }

    #[tokio::test]
    async fn test_add_block_persists() {
        let store = Arc::new(MemoryPageStore::new());
        let mut session = EditorSession::open_or_create(store.clone(), ctx(Language::Ar), "home")
            .await
            .unwrap();
        session
            .apply(EditorAction::AddBlock {
                tag: BlockTag::HeroSlider,
                at_order: None,
            })
            .await
            .unwrap();

        let persisted = store.get_page_by_slug("home").await.unwrap().unwrap();
        assert_eq!(persisted.blocks_ar.len(), 1);
        assert!(persisted.blocks_en.is_empty());
    }

    #[tokio::test]
    async fn test_persist_failure_rolls_back() {
        let store = Arc::new(FlakyStore::default());
        let mut session =
            EditorSession::open_or_create(store.clone(), ctx(Language::En), "home")
                .await
                .unwrap();
        session
            .apply(EditorAction::AddBlock {
                tag: BlockTag::About,
                at_order: None,
            })
            .await
            .unwrap();

        store.fail_next_save.store(true, Ordering::SeqCst);
        let err = session
            .apply(EditorAction::AddBlock {
                tag: BlockTag::Jobs,
                at_order: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, EditorError::Persist(_)));

        // Working copy rolled back; storage untouched by the failed save.
        assert_eq!(session.blocks().len(), 1);
        let persisted = store.get_page_by_slug("home").await.unwrap().unwrap();
        assert_eq!(persisted.blocks_en.len(), 1);
    }

    #[tokio::test]
    async fn test_rejected_list_op_does_not_persist() {
        let store = Arc::new(MemoryPageStore::new());
        let mut session = EditorSession::open_or_create(store.clone(), ctx(Language::Ar), "p")
            .await
            .unwrap();
        let err = session
            .apply(EditorAction::RemoveBlock { id: "nope".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, EditorError::List(ListError::NotFound(_))));
        assert!(session.blocks().is_empty());
    }

    #[tokio::test]
    async fn test_set_title_persists_and_rolls_back() {
        let store = Arc::new(FlakyStore::default());
        let mut session = EditorSession::open_or_create(store.clone(), ctx(Language::Ar), "t")
            .await
            .unwrap();
        session.set_title("عنوان", "Title").await.unwrap();
        assert_eq!(session.record().title.en, "Title");

        store.fail_next_save.store(true, Ordering::SeqCst);
        assert!(session.set_title("آخر", "Other").await.is_err());
        assert_eq!(session.record().title.en, "Title");
    }

    #[tokio::test]
    async fn test_update_content_patch() {
        let store = Arc::new(MemoryPageStore::new());
        let mut session = EditorSession::open_or_create(store.clone(), ctx(Language::En), "c")
            .await
            .unwrap();
        session
            .apply(EditorAction::AddBlock {
                tag: BlockTag::ContactSection,
                at_order: None,
            })
            .await
            .unwrap();
        let id = session.blocks().iter().next().unwrap().id.clone();
        session
            .apply(EditorAction::UpdateContent {
                id: id.clone(),
                patch: serde_json::json!({"email": "info@manara.edu"}),
            })
            .await
            .unwrap();

        let persisted = store.get_page_by_slug("c").await.unwrap().unwrap();
        let Block::ContactSection(contact) = &persisted.blocks_en.get(&id).unwrap().content
        else {
            panic!("wrong variant");
        };
        assert_eq!(contact.email, "info@manara.edu");
    }
}
