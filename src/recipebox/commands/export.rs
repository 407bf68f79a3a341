use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Recipe;
use crate::store::RecipeStore;
use uuid::Uuid;

/// Serializes recipes to pretty JSON. No ids means the whole collection.
pub fn run<S: RecipeStore>(store: &S, ids: &[Uuid]) -> Result<CmdResult> {
    let recipes: Vec<Recipe> = if ids.is_empty() {
        store.list_recipes()?
    } else {
        ids.iter()
            .map(|id| store.get_recipe(id))
            .collect::<Result<_>>()?
    };

    let json = serde_json::to_string_pretty(&recipes)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Exported {} recipe(s)",
        recipes.len()
    )));
    Ok(result.with_affected_recipes(recipes).with_exported(json))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecipeboxError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn exports_everything_by_default() {
        let fixture = StoreFixture::seeded().with_recipe("Pho", "Vietnamese", &["broth"]);
        let result = run(&fixture.store, &[]).unwrap();

        let parsed: Vec<Recipe> = serde_json::from_str(result.exported.as_ref().unwrap()).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].name, "Spaghetti Carbonara");
        assert_eq!(parsed[1].ingredients, vec!["broth"]);
    }

    #[test]
    fn exports_selected_recipes() {
        let fixture = StoreFixture::seeded().with_recipe("Pho", "Vietnamese", &[]);
        let ids = fixture.ids();
        let result = run(&fixture.store, &ids[1..]).unwrap();
        assert_eq!(result.affected_recipes.len(), 1);
        assert_eq!(result.affected_recipes[0].name, "Pho");
    }

    #[test]
    fn unknown_id_fails() {
        let fixture = StoreFixture::seeded();
        assert!(matches!(
            run(&fixture.store, &[Uuid::new_v4()]),
            Err(RecipeboxError::NotFound(_))
        ));
    }
}
