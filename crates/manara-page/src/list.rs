//! Ordered block storage for one page/language track.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use manara_types::{parse_block, Block, BlockAnimations, BlockStyles, SchemaError};

use crate::instance::PageBlockInstance;

/// Gap left between consecutive order values so blocks can be placed
/// between neighbours without renumbering.
pub const ORDER_STEP: i64 = 10;

/// Errors from block-list mutations. Local to the editing path; the render
/// path never mutates.
#[derive(Error, Debug)]
pub enum ListError {
    /// Caller supplied an explicit id already present in the list.
    #[error("duplicate block id: {0:?}")]
    DuplicateId(String),

    /// No block with this id in the list.
    #[error("block not found: {0:?}")]
    NotFound(String),

    /// A merged patch produced a payload the schema rejects.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Non-fatal integrity findings from [`PageBlockList::validate`].
///
/// Corruption introduced by external data (duplicate ids, most commonly) is
/// detected and surfaced to the editor as a warning; it is never
/// auto-repaired and never blocks rendering.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum IntegrityError {
    /// An id appears more than once.
    #[error("block id {id:?} appears {count} times")]
    DuplicateId { id: String, count: usize },
}

/// An ordered sequence of block instances, scoped to one (page, language
/// track) pair.
///
/// Iteration order of the backing storage is insertion order; the render
/// sequence is a stable sort by `order` ascending, so order ties resolve to
/// insertion order. Gaps in order values are normal and preserved.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageBlockList {
    items: Vec<PageBlockInstance>,
}

impl PageBlockList {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a block by id.
    pub fn get(&self, id: &str) -> Option<&PageBlockInstance> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PageBlockInstance> {
        self.items.iter()
    }

    /// An order value that sorts after every existing block.
    pub fn next_order(&self) -> i64 {
        self.items
            .iter()
            .map(|i| i.order)
            .max()
            .map_or(0, |max| max + ORDER_STEP)
    }

    /// Insert a new block with a freshly minted id at the given order.
    ///
    /// Cannot collide: fresh ids are UUIDs. Returns the created instance.
    pub fn insert(&mut self, content: Block, at_order: i64) -> &PageBlockInstance {
        self.items.push(PageBlockInstance::new(content, at_order));
        self.items.last().expect("just pushed")
    }

    /// Append a new block after the current maximum order.
    pub fn push(&mut self, content: Block) -> &PageBlockInstance {
        let order = self.next_order();
        self.insert(content, order)
    }

    /// Insert an instance whose id the caller controls.
    ///
    /// Fails with [`ListError::DuplicateId`] if the id is already present;
    /// the list is left unchanged.
    pub fn insert_instance(&mut self, instance: PageBlockInstance) -> Result<(), ListError> {
        if self.get(&instance.id).is_some() {
            return Err(ListError::DuplicateId(instance.id));
        }
        self.items.push(instance);
        Ok(())
    }

    /// Remove a block, returning it. Remaining `order` values are left
    /// untouched; gaps are permitted.
    pub fn remove(&mut self, id: &str) -> Result<PageBlockInstance, ListError> {
        let pos = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| ListError::NotFound(id.to_string()))?;
        Ok(self.items.remove(pos))
    }

    /// Update one block's `order` in place. Siblings are not renumbered.
    pub fn reorder(&mut self, id: &str, new_order: i64) -> Result<(), ListError> {
        let item = self.get_mut(id)?;
        item.order = new_order;
        Ok(())
    }

    /// Merge a partial payload into a block's content.
    ///
    /// Patch keys overwrite, absent keys are preserved. The merged result
    /// must pass schema validation; on failure the block is left unchanged
    /// and the error reports why.
    pub fn update(&mut self, id: &str, patch: &Value) -> Result<(), ListError> {
        let item = self.get_mut(id)?;
        let mut merged = serde_json::to_value(&item.content)
            .unwrap_or(Value::Null);
        if let (Value::Object(base), Value::Object(patch)) = (&mut merged, patch) {
            for (k, v) in patch {
                base.insert(k.clone(), v.clone());
            }
        }
        let content = parse_block(&merged)?;
        item.content = content;
        Ok(())
    }

    /// Replace a block's style overlay.
    pub fn set_styles(&mut self, id: &str, styles: Option<BlockStyles>) -> Result<(), ListError> {
        self.get_mut(id)?.block_styles = styles;
        Ok(())
    }

    /// Replace a block's animation overlay.
    pub fn set_animations(
        &mut self,
        id: &str,
        animations: Option<BlockAnimations>,
    ) -> Result<(), ListError> {
        self.get_mut(id)?.block_animations = animations;
        Ok(())
    }

    /// Blocks in render order: stable sort by `order` ascending.
    pub fn render_sequence(&self) -> Vec<&PageBlockInstance> {
        let mut seq: Vec<&PageBlockInstance> = self.items.iter().collect();
        seq.sort_by_key(|i| i.order);
        seq
    }

    /// Detect corruption introduced by external data.
    ///
    /// Id uniqueness is only enforced at insert time, so a list loaded from
    /// a corrupted record can carry duplicates. Findings are warnings for
    /// the editor surface, not render blockers.
    pub fn validate(&self) -> Vec<IntegrityError> {
        let mut errors = Vec::new();
        let mut seen: Vec<&str> = Vec::new();
        for item in &self.items {
            if seen.contains(&item.id.as_str()) {
                continue;
            }
            seen.push(&item.id);
            let count = self.items.iter().filter(|i| i.id == item.id).count();
            if count > 1 {
                errors.push(IntegrityError::DuplicateId {
                    id: item.id.clone(),
                    count,
                });
            }
        }
        errors
    }

    /// Parse a raw JSON array leniently: entries that fail the schema are
    /// skipped (and returned as errors for logging) rather than failing the
    /// whole list. This is the fail-soft path the public renderer loads
    /// through.
    pub fn from_value_lenient(raw: &Value) -> (Self, Vec<SchemaError>) {
        let mut list = Self::new();
        let mut errors = Vec::new();
        let Some(entries) = raw.as_array() else {
            return (list, errors);
        };
        for entry in entries {
            match serde_json::from_value::<PageBlockInstance>(entry.clone()) {
                Ok(instance) => {
                    // Corrupted duplicate ids are kept (validate() reports
                    // them); only unparseable entries are dropped.
                    list.items.push(instance);
                }
                Err(e) => {
                    let content = entry.get("content").unwrap_or(entry);
                    let tag = content
                        .get("type")
                        .or_else(|| content.get("kind"))
                        .and_then(Value::as_str)
                        .unwrap_or("<unknown>")
                        .to_string();
                    tracing::warn!(%tag, error = %e, "skipping unparseable block");
                    errors.push(SchemaError::MalformedPayload {
                        tag,
                        reason: e.to_string(),
                    });
                }
            }
        }
        (list, errors)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut PageBlockInstance, ListError> {
        self.items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| ListError::NotFound(id.to_string()))
    }
}

impl<'a> IntoIterator for &'a PageBlockList {
    type Item = &'a PageBlockInstance;
    type IntoIter = std::slice::Iter<'a, PageBlockInstance>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
