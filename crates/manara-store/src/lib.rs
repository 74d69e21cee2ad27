//! Storage and notification ports.
//!
//! The page-block core never touches persistence directly: pages, media,
//! and outbound notifications are external collaborators reached through
//! the traits here, awaited only at the editor-surface boundary. The
//! in-memory implementations back tests and local development.
//!
//! # Change notification
//!
//! Saves publish a [`ChangeEvent`] on a broadcast channel. Delivery is
//! at-least-once and unordered under lag; consumers re-resolve from the
//! store rather than trusting event payloads, so a stale or duplicate
//! event is harmless.

mod event;
mod memory;
mod submissions;

use async_trait::async_trait;
use thiserror::Error;

use manara_page::PageRecord;

pub use event::{ChangeBus, ChangeEvent};
pub use memory::{MemoryPageStore, MemorySubmissionStore};
pub use submissions::{
    ContactMessage, EmploymentApplication, ServiceRequest, SubmissionPayload,
};

/// Errors from storage collaborators.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The write did not reach durable storage. The editor surface rolls
    /// back its optimistic mutation when it sees this.
    #[error("persist failed: {0}")]
    PersistFailure(String),

    /// Backend-specific read failure.
    #[error("storage read failed: {0}")]
    ReadFailure(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Page storage collaborator.
///
/// Writes are last-write-wins at page-record granularity; there is no
/// server-side locking across editing sessions.
#[async_trait]
pub trait PageStore: Send + Sync {
    /// Fetch a page by slug, `None` when absent.
    async fn get_page_by_slug(&self, slug: &str) -> Result<Option<PageRecord>>;

    /// Fetch the page flagged as the site homepage, if any.
    async fn get_home_page(&self) -> Result<Option<PageRecord>>;

    /// Persist a whole page record, replacing any previous version.
    async fn save_page(&self, record: &PageRecord) -> Result<()>;

    /// Delete a page by slug. Deleting an absent slug is a no-op.
    async fn delete_page(&self, slug: &str) -> Result<()>;

    /// All stored pages, in slug order.
    async fn list_pages(&self) -> Result<Vec<PageRecord>>;
}

/// Form-submission storage collaborator (employment applications, contact
/// messages, service requests).
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn save_application(&self, application: &EmploymentApplication) -> Result<()>;
    async fn list_applications(&self) -> Result<Vec<EmploymentApplication>>;
    async fn delete_application(&self, id: &str) -> Result<()>;

    async fn save_contact_message(&self, message: &ContactMessage) -> Result<()>;
    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>>;
    async fn delete_contact_message(&self, id: &str) -> Result<()>;
}

/// Outbound notification collaborator. Delivery mechanics (email,
/// WhatsApp) live entirely behind this trait.
#[async_trait]
pub trait NotificationDispatch: Send + Sync {
    /// Hand off a structured submission for delivery.
    async fn dispatch(&self, payload: &SubmissionPayload) -> Result<()>;
}
