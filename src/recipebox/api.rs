//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the single
//! entry point for all recipebox operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the session**: the store plus the [`Session`] (view filters, open draft)
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g., converting display indexes to UUIDs)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or file formatting
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over RecipeStore
//!
//! `RecipeboxApi<S: RecipeStore>` is generic over the storage backend. Every
//! instance owns its own store and session, so tests can run side by side.

use crate::commands;
use crate::error::{RecipeboxError, Result};
use crate::index::RecipeSelector;
use crate::model::{DraftList, StatusFilter, StatusFlag};
use crate::session::{Session, ViewState};
use crate::store::RecipeStore;
use std::str::FromStr;
use tracing::debug;
use uuid::Uuid;

/// The main API facade for recipebox operations.
pub struct RecipeboxApi<S: RecipeStore> {
    store: S,
    session: Session,
}

impl<S: RecipeStore> RecipeboxApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            session: Session::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn list_recipes(&self, search: &str, filter: StatusFilter) -> Result<commands::CmdResult> {
        debug!(search, %filter, "list");
        commands::list::run(&self.store, search, filter)
    }

    /// Lists with the session's stored search term and filter.
    pub fn current_view(&self) -> Result<commands::CmdResult> {
        let ViewState { search, filter } = &self.session.view;
        self.list_recipes(search, *filter)
    }

    pub fn set_search(&mut self, search: impl Into<String>) -> Result<commands::CmdResult> {
        self.session.view.search = search.into();
        self.current_view()
    }

    pub fn set_filter(&mut self, filter: StatusFilter) -> Result<commands::CmdResult> {
        self.session.view.filter = filter;
        self.current_view()
    }

    pub fn view_recipes<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let ids = self.resolve(selectors)?;
        let recipes = ids
            .iter()
            .map(|id| self.store.get_recipe(id))
            .collect::<Result<Vec<_>>>()?;
        Ok(commands::CmdResult::default().with_affected_recipes(recipes))
    }

    pub fn begin_create(&mut self) -> Result<commands::CmdResult> {
        debug!("begin create");
        commands::draft::begin_create(&mut self.session.draft)
    }

    pub fn begin_edit(&mut self, selector: &str) -> Result<commands::CmdResult> {
        let id = self.resolve_one(selector)?;
        debug!(%id, "begin edit");
        commands::draft::begin_edit(&self.store, &mut self.session.draft, &id)
    }

    pub fn update_draft(&mut self, update: commands::DraftUpdate) -> Result<commands::CmdResult> {
        debug!(?update, "update draft");
        commands::draft::update(&mut self.session.draft, update)
    }

    pub fn add_draft_item(&mut self, list: DraftList) -> Result<commands::CmdResult> {
        commands::draft::add_item(&mut self.session.draft, list)
    }

    pub fn remove_draft_item(
        &mut self,
        list: DraftList,
        index: usize,
    ) -> Result<commands::CmdResult> {
        commands::draft::remove_item(&mut self.session.draft, list, index)
    }

    pub fn show_draft(&self) -> Result<commands::CmdResult> {
        commands::draft::show(&self.session.draft)
    }

    pub fn commit_draft(&mut self) -> Result<commands::CmdResult> {
        let result = commands::commit::run(&mut self.store, &mut self.session.draft)?;
        debug!(ids = ?result.affected_recipes.iter().map(|r| r.id).collect::<Vec<_>>(), "committed");
        Ok(result)
    }

    pub fn discard_draft(&mut self) -> Result<commands::CmdResult> {
        debug!("discard draft");
        commands::draft::discard(&mut self.session.draft)
    }

    pub fn delete_recipes<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let ids = self.resolve(selectors)?;
        let mut result = commands::CmdResult::default();
        for id in ids {
            debug!(%id, "delete");
            let deleted = commands::delete::run(&mut self.store, &id)?;
            result.affected_recipes.extend(deleted.affected_recipes);
            result.messages.extend(deleted.messages);
        }
        Ok(result)
    }

    pub fn toggle_status(&mut self, selector: &str, flag: StatusFlag) -> Result<commands::CmdResult> {
        let id = self.resolve_one(selector)?;
        debug!(%id, %flag, "toggle status");
        commands::status::toggle(&mut self.store, &id, flag)
    }

    pub fn export_recipes<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let ids = self.resolve(selectors)?;
        commands::export::run(&self.store, &ids)
    }

    fn resolve<I: AsRef<str>>(&self, inputs: &[I]) -> Result<Vec<Uuid>> {
        let selectors = parse_selectors(inputs)?;
        commands::helpers::resolve_selectors(&self.store, &selectors)
    }

    fn resolve_one(&self, input: &str) -> Result<Uuid> {
        self.resolve(&[input])?
            .pop()
            .ok_or_else(|| RecipeboxError::Api("No recipe selected".to_string()))
    }
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<RecipeSelector>> {
    inputs
        .iter()
        .map(|s| RecipeSelector::from_str(s.as_ref()).map_err(RecipeboxError::Api))
        .collect()
}

pub use commands::{CmdMessage, CmdResult, DraftUpdate, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DraftMode;
    use crate::store::memory::InMemoryStore;

    fn api() -> RecipeboxApi<InMemoryStore> {
        RecipeboxApi::new(InMemoryStore::seeded())
    }

    #[test]
    fn stored_view_applies_search_and_filter() {
        let mut api = api();
        assert_eq!(api.set_search("PANCETTA").unwrap().listed_recipes.len(), 1);
        assert_eq!(api.set_filter(StatusFilter::ToTry).unwrap().listed_recipes.len(), 0);
        assert_eq!(api.set_filter(StatusFilter::Made).unwrap().listed_recipes.len(), 1);
        assert_eq!(api.set_search("sushi").unwrap().listed_recipes.len(), 0);
    }

    #[test]
    fn create_flow_through_the_facade() {
        let mut api = api();
        api.begin_create().unwrap();
        api.update_draft(DraftUpdate::Name("Shakshuka".into())).unwrap();
        api.add_draft_item(DraftList::Ingredients).unwrap();
        api.update_draft(DraftUpdate::Ingredient(1, "eggs".into())).unwrap();

        let result = api.commit_draft().unwrap();
        assert_eq!(result.affected_recipes[0].ingredients, vec!["eggs"]);
        assert!(api.session().draft.is_none());
        assert_eq!(api.current_view().unwrap().listed_recipes.len(), 2);
    }

    #[test]
    fn blank_name_keeps_the_collection() {
        let mut api = api();
        api.begin_create().unwrap();
        api.update_draft(DraftUpdate::Name("".into())).unwrap();
        assert!(matches!(
            api.commit_draft(),
            Err(RecipeboxError::Validation(_))
        ));
        assert_eq!(api.current_view().unwrap().listed_recipes.len(), 1);
        assert!(api.session().draft.is_some());
    }

    #[test]
    fn edit_by_index() {
        let mut api = api();
        let result = api.begin_edit("1").unwrap();
        let id = api.store().list_recipes().unwrap()[0].id;
        assert_eq!(result.draft.unwrap().mode, DraftMode::Editing(id));
    }

    #[test]
    fn delete_of_unknown_uuid_is_quiet() {
        let mut api = api();
        let missing = Uuid::new_v4().to_string();
        let result = api.delete_recipes(&[missing]).unwrap();
        assert!(result.affected_recipes.is_empty());
        assert_eq!(api.current_view().unwrap().listed_recipes.len(), 1);
    }

    #[test]
    fn garbage_selector_is_an_api_error() {
        let mut api = api();
        assert!(matches!(
            api.toggle_status("carbonara", StatusFlag::Favorite),
            Err(RecipeboxError::Api(_))
        ));
    }

    #[test]
    fn sessions_are_independent() {
        let mut a = api();
        let b = api();
        a.begin_create().unwrap();
        a.set_search("pasta").unwrap();
        assert!(b.session().draft.is_none());
        assert_eq!(b.session().view, ViewState::default());
    }
}
