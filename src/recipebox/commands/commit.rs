use crate::commands::{CmdMessage, CmdResult};
use crate::error::{RecipeboxError, Result};
use crate::model::{ActiveDraft, DraftMode, Recipe};
use crate::store::RecipeStore;

/// Saves the open draft.
///
/// A blank name is rejected and the draft stays open, untouched, so it can be
/// fixed. Blank ingredient and instruction rows are dropped. A new recipe gets
/// a fresh id and goes to the end of the collection; an edited one keeps its
/// id, `created_at` and position. The draft is closed only once the store has
/// accepted the recipe.
pub fn run<S: RecipeStore>(store: &mut S, slot: &mut Option<ActiveDraft>) -> Result<CmdResult> {
    let active = slot.as_ref().ok_or(RecipeboxError::NoActiveDraft)?;
    if !active.draft.has_valid_name() {
        return Err(RecipeboxError::Validation(
            "Recipe name cannot be empty".to_string(),
        ));
    }

    let draft = active.draft.clone();
    let (recipe, verb) = match active.mode {
        DraftMode::Creating => {
            let recipe = Recipe::from_draft(draft);
            store.insert_recipe(recipe.clone())?;
            (recipe, "added")
        }
        DraftMode::Editing(id) => {
            let mut recipe = store.get_recipe(&id)?;
            recipe.apply_draft(draft);
            store.update_recipe(&recipe)?;
            (recipe, "updated")
        }
    };
    *slot = None;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Recipe {}: {}",
        verb, recipe.name
    )));
    Ok(result.with_affected_recipes(vec![recipe]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{delete, draft, DraftUpdate};
    use crate::model::DraftList;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn blank_name_is_rejected_and_draft_kept() {
        let mut fixture = StoreFixture::seeded();
        let mut slot = None;
        draft::begin_create(&mut slot).unwrap();
        draft::update(&mut slot, DraftUpdate::Name("".into())).unwrap();
        draft::update(&mut slot, DraftUpdate::Cuisine("Greek".into())).unwrap();

        let err = run(&mut fixture.store, &mut slot).unwrap_err();
        assert!(matches!(err, RecipeboxError::Validation(_)));
        assert_eq!(fixture.store.len(), 1);
        assert_eq!(slot.unwrap().draft.metadata.cuisine, "Greek");
    }

    #[test]
    fn whitespace_name_is_rejected() {
        let mut fixture = StoreFixture::new();
        let mut slot = None;
        draft::begin_create(&mut slot).unwrap();
        draft::update(&mut slot, DraftUpdate::Name("   \t".into())).unwrap();

        assert!(run(&mut fixture.store, &mut slot).is_err());
        assert!(fixture.store.is_empty());
    }

    #[test]
    fn commit_without_draft_fails() {
        let mut fixture = StoreFixture::new();
        let mut slot = None;
        assert!(matches!(
            run(&mut fixture.store, &mut slot),
            Err(RecipeboxError::NoActiveDraft)
        ));
    }

    #[test]
    fn create_appends_exactly_one_recipe_with_a_fresh_id() {
        let mut fixture = StoreFixture::seeded().with_recipe("Pho", "Vietnamese", &["broth"]);
        let before = fixture.ids();
        let mut slot = None;
        draft::begin_create(&mut slot).unwrap();
        draft::update(&mut slot, DraftUpdate::Name("Falafel".into())).unwrap();
        draft::update(&mut slot, DraftUpdate::Ingredient(0, "chickpeas".into())).unwrap();
        draft::add_item(&mut slot, DraftList::Ingredients).unwrap();

        let result = run(&mut fixture.store, &mut slot).unwrap();
        let created = &result.affected_recipes[0];

        let after = fixture.ids();
        assert_eq!(after.len(), before.len() + 1);
        assert!(!before.contains(&created.id));
        assert_eq!(after.last(), Some(&created.id));
        assert_eq!(created.ingredients, vec!["chickpeas"]);
        assert!(created.instructions.is_empty());
        assert!(slot.is_none());
    }

    #[test]
    fn edit_keeps_id_created_at_and_position() {
        let mut fixture = StoreFixture::seeded().with_recipe("Pho", "Vietnamese", &["broth"]);
        let original = fixture.store.list_recipes().unwrap()[0].clone();
        let mut slot = None;
        draft::begin_edit(&fixture.store, &mut slot, &original.id).unwrap();
        draft::update(&mut slot, DraftUpdate::Name("Carbonara".into())).unwrap();
        draft::update(&mut slot, DraftUpdate::Ingredient(5, " ".into())).unwrap();

        run(&mut fixture.store, &mut slot).unwrap();

        let recipes = fixture.store.list_recipes().unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].id, original.id);
        assert_eq!(recipes[0].created_at, original.created_at);
        assert_eq!(recipes[0].name, "Carbonara");
        assert_eq!(recipes[0].ingredients.len(), 5);
        assert!(slot.is_none());
    }

    #[test]
    fn editing_a_deleted_recipe_keeps_the_draft() {
        let mut fixture = StoreFixture::seeded();
        let id = fixture.ids()[0];
        let mut slot = None;
        draft::begin_edit(&fixture.store, &mut slot, &id).unwrap();
        delete::run(&mut fixture.store, &id).unwrap();

        let err = run(&mut fixture.store, &mut slot).unwrap_err();
        assert!(matches!(err, RecipeboxError::NotFound(_)));
        assert!(slot.is_some());
        assert!(fixture.store.is_empty());
    }
}
