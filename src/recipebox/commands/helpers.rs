use crate::error::{RecipeboxError, Result};
use crate::index::{index_recipes, DisplayIndex, DisplayRecipe, RecipeSelector};
use crate::store::RecipeStore;
use uuid::Uuid;

pub fn indexed_recipes<S: RecipeStore>(store: &S) -> Result<Vec<DisplayRecipe>> {
    let recipes = store.list_recipes()?;
    Ok(index_recipes(recipes))
}

/// Turns selectors into UUIDs.
///
/// Display indexes must exist in the current collection. UUIDs are passed
/// through untouched so each command decides what a missing recipe means.
pub fn resolve_selectors<S: RecipeStore>(
    store: &S,
    selectors: &[RecipeSelector],
) -> Result<Vec<Uuid>> {
    let indexed = indexed_recipes(store)?;

    selectors
        .iter()
        .map(|selector| match selector {
            RecipeSelector::Id(id) => Ok(*id),
            RecipeSelector::Index(idx) => find_by_index(&indexed, *idx),
        })
        .collect()
}

fn find_by_index(indexed: &[DisplayRecipe], idx: DisplayIndex) -> Result<Uuid> {
    indexed
        .iter()
        .find(|dr| dr.index == idx)
        .map(|dr| dr.recipe.id)
        .ok_or_else(|| RecipeboxError::NotFound(format!("no recipe at index {}", idx)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn resolves_indexes_in_collection_order() {
        let fixture = StoreFixture::new()
            .with_recipe("A", "", &[])
            .with_recipe("B", "", &[]);
        let ids = fixture.ids();

        let resolved =
            resolve_selectors(&fixture.store, &[RecipeSelector::Index(DisplayIndex(2))]).unwrap();
        assert_eq!(resolved, vec![ids[1]]);
    }

    #[test]
    fn unknown_index_is_not_found() {
        let fixture = StoreFixture::seeded();
        let err = resolve_selectors(&fixture.store, &[RecipeSelector::Index(DisplayIndex(9))])
            .unwrap_err();
        assert!(matches!(err, RecipeboxError::NotFound(_)));
    }

    #[test]
    fn ids_pass_through_unchecked() {
        let fixture = StoreFixture::new();
        let id = Uuid::new_v4();
        let resolved = resolve_selectors(&fixture.store, &[RecipeSelector::Id(id)]).unwrap();
        assert_eq!(resolved, vec![id]);
    }
}
