//! Typed schemas for the backend endpoints.
//!
//! Responses are parsed at the API boundary; a 2xx body that does not
//! match these shapes surfaces as a decode error instead of a type
//! surprise deeper in rendering. `status` and `lead_type` are open
//! strings: the backend owns the enums, unrecognized values pass through.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Discriminator tag for visitor-submitted leads.
pub const CLIENT_REQUEST: &str = "client_request";

/// Lead statuses known to this client, in triage order. The admin status
/// selector offers these; the backend may still return values outside the
/// set and the client tolerates them.
pub const LEAD_STATUSES: [&str; 4] = ["new", "in_progress", "done", "rejected"];

/// One FAQ entry from `GET /api/content/faq`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// One downloadable document from `GET /api/content/documents`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct DocumentItem {
    pub title: String,
    pub url: String,
}

/// One portfolio project from `GET /api/content/projects`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ProjectItem {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// A lead as returned by the admin listing.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Lead {
    pub id: i64,
    pub lead_type: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub work_type: Option<String>,
    pub budget: Option<String>,
    pub description: Option<String>,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub attachment_count: i64,
}

/// Outgoing lead submission payload for `POST /api/leads`.
///
/// Absent optional fields serialize as explicit `null`, never as `""`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NewLead {
    pub lead_type: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub work_type: Option<String>,
    pub budget: Option<String>,
    pub description: Option<String>,
}

impl NewLead {
    /// Build a submission payload from raw form input, mapping every empty
    /// string to an absent value. The discriminator is always present and
    /// constant.
    pub fn from_form(
        name: &str,
        phone: &str,
        city: &str,
        work_type: &str,
        budget: &str,
        description: &str,
    ) -> Self {
        Self {
            lead_type: CLIENT_REQUEST.to_owned(),
            name: blank_to_none(name),
            phone: blank_to_none(phone),
            city: blank_to_none(city),
            work_type: blank_to_none(work_type),
            budget: blank_to_none(budget),
            description: blank_to_none(description),
        }
    }
}

/// The slice of the lead-creation response shown in the confirmation card.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CreatedLead {
    pub id: i64,
    pub status: String,
}

/// Display label for a lead status.
///
/// Total over the known statuses; any other value is shown as-is so new
/// backend statuses render without a client update.
pub fn status_badge(status: &str) -> &str {
    match status {
        "new" => "NEW",
        "in_progress" => "IN PROGRESS",
        "done" => "DONE",
        "rejected" => "REJECTED",
        other => other,
    }
}

fn blank_to_none(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}
