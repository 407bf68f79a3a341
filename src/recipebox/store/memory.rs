use super::RecipeStore;
use crate::error::{RecipeboxError, Result};
use crate::model::{Difficulty, Recipe, RecipeMetadata, RecipeStatus};
use chrono::{TimeZone, Utc};
use uuid::Uuid;

/// Session storage. Keeps recipes in a `Vec` so insertion order is preserved.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    recipes: Vec<Recipe>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the sample collection every new session starts with.
    pub fn seeded() -> Self {
        Self {
            recipes: seed_recipes(),
        }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    fn position(&self, id: &Uuid) -> Option<usize> {
        self.recipes.iter().position(|r| &r.id == id)
    }
}

impl RecipeStore for InMemoryStore {
    fn list_recipes(&self) -> Result<Vec<Recipe>> {
        Ok(self.recipes.clone())
    }

    fn get_recipe(&self, id: &Uuid) -> Result<Recipe> {
        self.recipes
            .iter()
            .find(|r| &r.id == id)
            .cloned()
            .ok_or_else(|| RecipeboxError::NotFound(id.to_string()))
    }

    fn insert_recipe(&mut self, recipe: Recipe) -> Result<()> {
        if self.position(&recipe.id).is_some() {
            return Err(RecipeboxError::Api(format!(
                "Recipe {} already exists",
                recipe.id
            )));
        }
        self.recipes.push(recipe);
        Ok(())
    }

    fn update_recipe(&mut self, recipe: &Recipe) -> Result<()> {
        let pos = self
            .position(&recipe.id)
            .ok_or_else(|| RecipeboxError::NotFound(recipe.id.to_string()))?;
        self.recipes[pos] = recipe.clone();
        Ok(())
    }

    fn remove_recipe(&mut self, id: &Uuid) -> Result<Option<Recipe>> {
        Ok(self.position(id).map(|pos| self.recipes.remove(pos)))
    }
}

/// The sample collection: one well-loved carbonara.
pub fn seed_recipes() -> Vec<Recipe> {
    let created_at = Utc
        .with_ymd_and_hms(2024, 1, 15, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);

    vec![Recipe {
        id: Uuid::new_v4(),
        name: "Spaghetti Carbonara".to_string(),
        ingredients: [
            "400g spaghetti",
            "200g pancetta",
            "4 eggs",
            "100g parmesan",
            "Black pepper",
            "Salt",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        instructions: [
            "Boil pasta",
            "Cook pancetta",
            "Mix eggs and cheese",
            "Combine everything",
            "Serve hot",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        metadata: RecipeMetadata {
            prep_time: "15 min".to_string(),
            cook_time: "20 min".to_string(),
            servings: 4,
            difficulty: Difficulty::Medium,
            cuisine: "Italian".to_string(),
        },
        status: RecipeStatus {
            is_favorite: true,
            want_to_try: false,
            have_made: true,
        },
        created_at,
    }]
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Draft, StatusFlag};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn seeded() -> Self {
            Self {
                store: InMemoryStore::seeded(),
            }
        }

        pub fn with_recipe(self, name: &str, cuisine: &str, ingredients: &[&str]) -> Self {
            self.with_flagged_recipe(name, cuisine, ingredients, &[])
        }

        pub fn with_flagged_recipe(
            mut self,
            name: &str,
            cuisine: &str,
            ingredients: &[&str],
            flags: &[StatusFlag],
        ) -> Self {
            let mut draft = Draft::empty();
            draft.name = name.to_string();
            draft.metadata.cuisine = cuisine.to_string();
            draft.ingredients = ingredients.iter().map(|s| s.to_string()).collect();
            draft.instructions = vec!["Cook it".to_string()];
            for flag in flags {
                draft.status.set(*flag, true);
            }
            self.store.insert_recipe(Recipe::from_draft(draft)).unwrap();
            self
        }

        pub fn ids(&self) -> Vec<Uuid> {
            self.store
                .list_recipes()
                .unwrap()
                .into_iter()
                .map(|r| r.id)
                .collect()
        }
    }
}
