//! Draft commands.
//!
//! A draft is the working copy behind the add/edit form. These commands open,
//! edit and close it; none of them touches committed recipes. Saving lives in
//! [`super::commit`].
//!
//! The open draft is passed in as `&mut Option<ActiveDraft>`. Opening a draft
//! while another is open silently replaces it.

use crate::commands::{CmdMessage, CmdResult, DraftUpdate};
use crate::error::{RecipeboxError, Result};
use crate::model::{ActiveDraft, Draft, DraftList, DraftMode};
use crate::store::RecipeStore;
use uuid::Uuid;

/// Opens an empty draft for a new recipe.
pub fn begin_create(slot: &mut Option<ActiveDraft>) -> Result<CmdResult> {
    let active = ActiveDraft {
        draft: Draft::empty(),
        mode: DraftMode::Creating,
    };
    replace(slot, active.clone());

    let mut result = CmdResult::default().with_draft(active);
    result.add_message(CmdMessage::info("Started a new recipe"));
    Ok(result)
}

/// Opens a draft pre-filled with a copy of an existing recipe.
pub fn begin_edit<S: RecipeStore>(
    store: &S,
    slot: &mut Option<ActiveDraft>,
    id: &Uuid,
) -> Result<CmdResult> {
    let recipe = store.get_recipe(id)?;
    let active = ActiveDraft {
        draft: Draft::from_recipe(&recipe),
        mode: DraftMode::Editing(recipe.id),
    };
    replace(slot, active.clone());

    let mut result = CmdResult::default().with_draft(active);
    result.add_message(CmdMessage::info(format!("Editing: {}", recipe.name)));
    Ok(result)
}

pub fn update(slot: &mut Option<ActiveDraft>, update: DraftUpdate) -> Result<CmdResult> {
    let active = slot.as_mut().ok_or(RecipeboxError::NoActiveDraft)?;
    let draft = &mut active.draft;

    match update {
        DraftUpdate::Name(name) => draft.name = name,
        DraftUpdate::PrepTime(prep) => draft.metadata.prep_time = prep,
        DraftUpdate::CookTime(cook) => draft.metadata.cook_time = cook,
        DraftUpdate::Servings(0) => {
            return Err(RecipeboxError::Validation(
                "Servings must be at least 1".to_string(),
            ))
        }
        DraftUpdate::Servings(n) => draft.metadata.servings = n,
        DraftUpdate::Difficulty(d) => draft.metadata.difficulty = d,
        DraftUpdate::Cuisine(cuisine) => draft.metadata.cuisine = cuisine,
        DraftUpdate::Status(flag, value) => draft.status.set(flag, value),
        DraftUpdate::Ingredient(index, text) => {
            set_row(draft, DraftList::Ingredients, index, text)?
        }
        DraftUpdate::Instruction(index, text) => {
            set_row(draft, DraftList::Instructions, index, text)?
        }
    }

    Ok(CmdResult::default().with_draft(active.clone()))
}

/// Appends a blank row to one of the draft's lists.
pub fn add_item(slot: &mut Option<ActiveDraft>, list: DraftList) -> Result<CmdResult> {
    let active = slot.as_mut().ok_or(RecipeboxError::NoActiveDraft)?;
    active.draft.list_mut(list).push(String::new());
    Ok(CmdResult::default().with_draft(active.clone()))
}

/// Removes a row from one of the draft's lists.
///
/// The form must always keep one editable row, so removing the last one is
/// rejected with a warning instead of an error. So is an index past the end.
pub fn remove_item(
    slot: &mut Option<ActiveDraft>,
    list: DraftList,
    index: usize,
) -> Result<CmdResult> {
    let active = slot.as_mut().ok_or(RecipeboxError::NoActiveDraft)?;
    let rows = active.draft.list_mut(list);
    let mut result = CmdResult::default();

    if rows.len() <= 1 {
        result.add_message(CmdMessage::warning(format!(
            "Cannot remove the only {} row",
            list
        )));
    } else if index >= rows.len() {
        result.add_message(CmdMessage::warning(format!(
            "There is no {} #{} to remove",
            list,
            index + 1
        )));
    } else {
        rows.remove(index);
    }

    Ok(result.with_draft(active.clone()))
}

/// Closes the draft without saving. Closing when nothing is open is fine.
pub fn discard(slot: &mut Option<ActiveDraft>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if slot.take().is_some() {
        result.add_message(CmdMessage::info("Discarded changes"));
    }
    Ok(result)
}

pub fn show(slot: &Option<ActiveDraft>) -> Result<CmdResult> {
    let active = slot.as_ref().ok_or(RecipeboxError::NoActiveDraft)?;
    Ok(CmdResult::default().with_draft(active.clone()))
}

fn replace(slot: &mut Option<ActiveDraft>, active: ActiveDraft) {
    if let Some(previous) = slot.replace(active) {
        // TODO: ask before throwing away a draft that has unsaved edits
        tracing::warn!(
            mode = ?previous.mode,
            name = %previous.draft.name,
            "replacing an open draft"
        );
    }
}

fn set_row(draft: &mut Draft, list: DraftList, index: usize, text: String) -> Result<()> {
    let rows = draft.list_mut(list);
    let len = rows.len();
    let row = rows.get_mut(index).ok_or_else(|| {
        RecipeboxError::Validation(format!(
            "There is no {} #{} (the draft has {})",
            list,
            index + 1,
            len
        ))
    })?;
    *row = text;
    Ok(())
}
