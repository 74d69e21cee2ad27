//! Explicit editing context.
//!
//! Nothing in the editor reads ambient session state; whoever opens a
//! session hands over the operator identity and the language track being
//! edited.

use manara_types::Language;

/// The person behind the dashboard session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operator {
    pub id: String,
    pub name: String,
    /// Router-enforced; carried here for attribution and logging only.
    pub is_admin: bool,
}

/// Context an editing session runs under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorContext {
    pub operator: Operator,
    /// Which language track the session mutates.
    pub track: Language,
}

impl EditorContext {
    pub fn new(operator: Operator, track: Language) -> Self {
        Self { operator, track }
    }
}
