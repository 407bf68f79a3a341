//! # Storage Layer
//!
//! The [`RecipeStore`] trait is the seam between the command layer and wherever
//! recipes actually live. Commands only ever talk to the trait.
//!
//! ## Ordering
//!
//! A store is an **ordered** collection: insertion order is the canonical
//! display order. `insert_recipe` appends, `update_recipe` replaces in place,
//! and `list_recipes` returns recipes in that order. Display indexes (see
//! [`crate::index`]) are derived from this order, so a store must never
//! reshuffle existing entries.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the session store. Nothing outlives the process;
//!   every session starts from the seed collection (or empty).

use crate::error::Result;
use crate::model::Recipe;
use uuid::Uuid;

pub mod memory;

/// Abstract interface for recipe storage.
pub trait RecipeStore {
    /// All recipes, in insertion order
    fn list_recipes(&self) -> Result<Vec<Recipe>>;

    /// Get a recipe by ID
    fn get_recipe(&self, id: &Uuid) -> Result<Recipe>;

    /// Append a new recipe at the end of the collection
    fn insert_recipe(&mut self, recipe: Recipe) -> Result<()>;

    /// Replace the recipe with the same ID, keeping its position
    fn update_recipe(&mut self, recipe: &Recipe) -> Result<()>;

    /// Remove a recipe, returning it if it was present
    fn remove_recipe(&mut self, id: &Uuid) -> Result<Option<Recipe>>;
}
