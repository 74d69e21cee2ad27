//! Operator-facing editing surface over page block lists.
//!
//! An [`EditorSession`] owns an in-memory working copy of one page record
//! and translates editor actions into block-list operations, persisting
//! after every mutation. Persistence is the commit point: if the save
//! fails, the working copy is rolled back and the failure surfaced — no
//! silent data loss, no optimistic state the renderer could observe.
//!
//! Sessions are single-writer: two sessions editing the same page race at
//! page-record granularity and the last successful save wins. That is an
//! accepted limitation of the storage model, not a guarantee to build on.
//!
//! Admin gating is the router's job; the session records *who* is editing
//! (an explicit [`EditorContext`], never ambient state) for attribution
//! and logging.

mod context;
mod preview;
mod session;

pub use context::{EditorContext, Operator};
pub use preview::{LivePreview, PreviewUpdate};
pub use session::{EditorAction, EditorError, EditorSession};
