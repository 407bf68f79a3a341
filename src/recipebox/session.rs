//! Per-session UI state that is not part of the recipe collection itself.
//!
//! A [`Session`] is an owned value: every `RecipeboxApi` holds its own, so
//! two sessions (or two tests) never see each other's search or draft.

use crate::model::{ActiveDraft, StatusFilter};

/// The search term and status filter the current view is narrowed by.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub search: String,
    pub filter: StatusFilter,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub view: ViewState,
    /// At most one draft is open at a time. Opening another replaces it.
    pub draft: Option<ActiveDraft>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }
}
