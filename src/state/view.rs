//! Tab router state machine for the single visible pane.
//!
//! DESIGN
//! ======
//! Exactly one tab is active at a time and the pane belongs to it.
//! Switching tabs discards the previous pane unconditionally; in-flight
//! fetches are never cancelled, so every activation is stamped with a
//! monotonically increasing generation and a resolution carrying a stale
//! generation is rejected. Exactly one render wins per activation.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::net::types::{DocumentItem, FaqItem, ProjectItem};

/// Top-level tabs the user can select.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Faq,
    Docs,
    Projects,
    Lead,
    Admin,
}

impl Tab {
    /// All tabs, in display order.
    pub const ALL: [Self; 5] = [Self::Faq, Self::Docs, Self::Projects, Self::Lead, Self::Admin];

    /// Label shown on the tab control.
    pub fn label(self) -> &'static str {
        match self {
            Self::Faq => "FAQ",
            Self::Docs => "Documents",
            Self::Projects => "Projects",
            Self::Lead => "Request",
            Self::Admin => "Admin",
        }
    }
}

/// Content of the single visible pane.
#[derive(Clone, Debug, PartialEq)]
pub enum Pane {
    /// Placeholder while a content fetch is pending.
    Loading,
    Faq(Vec<FaqItem>),
    Documents(Vec<DocumentItem>),
    Projects(Vec<ProjectItem>),
    /// The lead form owns its own submission state; nothing is fetched.
    LeadForm,
    /// The admin panel runs its own fetch/render/mutate cycle.
    Admin,
    Error(String),
}

/// View controller state: active tab, pane content, activation generation.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub active: Tab,
    pub pane: Pane,
    generation: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active: Tab::default(),
            pane: Pane::Loading,
            generation: 0,
        }
    }
}

impl ViewState {
    /// Activate a tab: mark it active, discard the previous pane, and
    /// return the new activation generation.
    ///
    /// Content tabs start in `Pane::Loading`; the lead and admin tabs
    /// resolve immediately since the controller fetches nothing for them.
    pub fn activate(&mut self, tab: Tab) -> u64 {
        self.active = tab;
        self.generation += 1;
        self.pane = match tab {
            Tab::Faq | Tab::Docs | Tab::Projects => Pane::Loading,
            Tab::Lead => Pane::LeadForm,
            Tab::Admin => Pane::Admin,
        };
        self.generation
    }

    /// Apply the outcome of an activation's fetch.
    ///
    /// Returns `false` without touching the pane when `generation` is no
    /// longer current, i.e. the user has switched tabs since the fetch
    /// started and this response lost the race.
    pub fn resolve(&mut self, generation: u64, pane: Pane) -> bool {
        if generation != self.generation {
            return false;
        }
        self.pane = pane;
        true
    }
}
