use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::StatusFlag;
use crate::store::RecipeStore;
use uuid::Uuid;

/// Flips one status flag on a committed recipe. Nothing else changes.
pub fn toggle<S: RecipeStore>(store: &mut S, id: &Uuid, flag: StatusFlag) -> Result<CmdResult> {
    let mut recipe = store.get_recipe(id)?;
    let now_set = recipe.status.toggle(flag);
    store.update_recipe(&recipe)?;

    let mut result = CmdResult::default();
    let verb = if now_set { "Marked" } else { "Unmarked" };
    result.add_message(CmdMessage::success(format!(
        "{} {}: {}",
        verb, flag, recipe.name
    )));
    result.affected_recipes.push(recipe);
    Ok(result)
}
