//! Schema-level error types.

use thiserror::Error;

/// Errors raised at the block parse boundary.
///
/// Both are recoverable by policy: the renderer skips the offending block
/// and logs, the editor rejects the specific edit and reports.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// `type`/`kind` tag is not in the recognized set.
    #[error("unknown block type: {0:?}")]
    UnknownBlockType(String),

    /// Required fields for the tag are missing or of the wrong shape
    /// (non-integer `order`, bilingual pair missing a leg, unknown icon).
    #[error("malformed {tag} payload: {reason}")]
    MalformedPayload { tag: String, reason: String },

    /// The raw value is not a JSON object at all.
    #[error("block is not an object")]
    NotAnObject,
}
