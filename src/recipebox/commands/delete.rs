use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecipeStore;
use uuid::Uuid;

/// Removes a recipe. Deleting something that is not there is not an error.
pub fn run<S: RecipeStore>(store: &mut S, id: &Uuid) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.remove_recipe(id)? {
        Some(recipe) => {
            result.add_message(CmdMessage::success(format!(
                "Recipe deleted: {}",
                recipe.name
            )));
            result.affected_recipes.push(recipe);
        }
        None => result.add_message(CmdMessage::info(format!("No recipe with id {}", id))),
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_the_recipe() {
        let mut fixture = StoreFixture::seeded().with_recipe("Pho", "Vietnamese", &[]);
        let ids = fixture.ids();

        let result = run(&mut fixture.store, &ids[0]).unwrap();

        assert_eq!(result.affected_recipes[0].name, "Spaghetti Carbonara");
        assert_eq!(fixture.ids(), vec![ids[1]]);
    }

    #[test]
    fn missing_id_is_a_no_op() {
        let mut fixture = StoreFixture::seeded();
        let before = fixture.ids();

        let result = run(&mut fixture.store, &Uuid::new_v4()).unwrap();

        assert!(result.affected_recipes.is_empty());
        assert_eq!(fixture.ids(), before);
    }
}
