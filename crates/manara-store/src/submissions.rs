//! Typed form-submission records.
//!
//! These are the payloads the public site's form surfaces hand to the
//! notification collaborator and the submission store. The core treats
//! them as data; delivery mechanics are out of scope.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An employment application from the jobs section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmploymentApplication {
    pub id: String,
    pub position: String,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub national_id: String,
    pub gender: String,
    pub experience: String,
    pub expected_salary: String,
    pub cover_letter: String,
    /// RFC 3339 submission timestamp, set by the accepting surface.
    pub submitted_at: String,
}

/// A contact-form message with an optional satisfaction rating.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Star rating, 1..=5; 0 when not given.
    pub rating: u8,
    pub message: String,
    pub submitted_at: String,
}

/// A service request (transport, uniforms, ...).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceRequest {
    pub id: String,
    pub service: String,
    pub name: String,
    pub phone: String,
    pub details: String,
    pub submitted_at: String,
}

/// A structured submission handed to [`NotificationDispatch`].
///
/// [`NotificationDispatch`]: crate::NotificationDispatch
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SubmissionPayload {
    Employment(EmploymentApplication),
    Contact(ContactMessage),
    ServiceRequest(ServiceRequest),
}

impl SubmissionPayload {
    /// The submission's id.
    pub fn id(&self) -> &str {
        match self {
            SubmissionPayload::Employment(a) => &a.id,
            SubmissionPayload::Contact(m) => &m.id,
            SubmissionPayload::ServiceRequest(r) => &r.id,
        }
    }
}

/// Mint a submission id.
pub(crate) fn submission_id() -> String {
    Uuid::new_v4().to_string()
}
