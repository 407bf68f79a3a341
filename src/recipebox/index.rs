//! # Display Indexes
//!
//! Recipes are identified by UUIDs, which nobody wants to type. The shell
//! instead refers to recipes by a short 1-based number: `edit 2`, `toggle 1 fav`.
//!
//! The number is the recipe's position in the **whole** collection (insertion
//! order), not its position in the current filtered view. That way `3` still
//! means the same recipe after a search narrows the list down to two entries:
//!
//! ```text
//! list              list --search pasta
//!   1. Carbonara      1. Carbonara
//!   2. Pancakes       3. Aglio e Olio
//!   3. Aglio e Olio
//! ```
//!
//! Indexes shift when an earlier recipe is deleted, same as any numbered list.
//! UUIDs never do, and are accepted anywhere an index is.

use crate::model::Recipe;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A user-facing, 1-based position in the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(pub usize);

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<usize>() {
            Ok(0) => Err("Indexes start at 1".to_string()),
            Ok(n) => Ok(DisplayIndex(n)),
            Err(_) => Err(format!("Invalid index format: {}", s)),
        }
    }
}

/// A user input selecting a recipe, either by display index or by UUID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeSelector {
    Index(DisplayIndex),
    Id(Uuid),
}

impl fmt::Display for RecipeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeSelector::Index(idx) => write!(f, "{}", idx),
            RecipeSelector::Id(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for RecipeSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(idx) = DisplayIndex::from_str(s) {
            return Ok(RecipeSelector::Index(idx));
        }
        Uuid::parse_str(s)
            .map(RecipeSelector::Id)
            .map_err(|_| format!("Not a recipe index or id: {}", s))
    }
}

#[derive(Debug, Clone)]
pub struct DisplayRecipe {
    pub recipe: Recipe,
    pub index: DisplayIndex,
}

/// Assigns display indexes in collection order.
pub fn index_recipes(recipes: Vec<Recipe>) -> Vec<DisplayRecipe> {
    recipes
        .into_iter()
        .enumerate()
        .map(|(i, recipe)| DisplayRecipe {
            recipe,
            index: DisplayIndex(i + 1),
        })
        .collect()
}
