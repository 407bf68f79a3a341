use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "Unknown difficulty '{}' (expected easy, medium or hard)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeMetadata {
    pub prep_time: String,
    pub cook_time: String,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub cuisine: String,
}

impl Default for RecipeMetadata {
    fn default() -> Self {
        Self {
            prep_time: String::new(),
            cook_time: String::new(),
            servings: 1,
            difficulty: Difficulty::Easy,
            cuisine: String::new(),
        }
    }
}

/// The three user-status flags. They are independent of one another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeStatus {
    pub is_favorite: bool,
    pub want_to_try: bool,
    pub have_made: bool,
}

impl RecipeStatus {
    pub fn get(&self, flag: StatusFlag) -> bool {
        match flag {
            StatusFlag::Favorite => self.is_favorite,
            StatusFlag::WantToTry => self.want_to_try,
            StatusFlag::HaveMade => self.have_made,
        }
    }

    pub fn set(&mut self, flag: StatusFlag, value: bool) {
        match flag {
            StatusFlag::Favorite => self.is_favorite = value,
            StatusFlag::WantToTry => self.want_to_try = value,
            StatusFlag::HaveMade => self.have_made = value,
        }
    }

    pub fn toggle(&mut self, flag: StatusFlag) -> bool {
        let value = !self.get(flag);
        self.set(flag, value);
        value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusFlag {
    Favorite,
    WantToTry,
    HaveMade,
}

impl fmt::Display for StatusFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFlag::Favorite => write!(f, "favorite"),
            StatusFlag::WantToTry => write!(f, "want to try"),
            StatusFlag::HaveMade => write!(f, "made"),
        }
    }
}

impl FromStr for StatusFlag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "favorite" | "fav" => Ok(StatusFlag::Favorite),
            "try" | "want-to-try" => Ok(StatusFlag::WantToTry),
            "made" | "have-made" => Ok(StatusFlag::HaveMade),
            other => Err(format!(
                "Unknown status flag '{}' (expected favorite, try or made)",
                other
            )),
        }
    }
}

/// Which status flag, if any, a listing is narrowed to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Favorites,
    ToTry,
    Made,
}

impl StatusFilter {
    pub fn flag(&self) -> Option<StatusFlag> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Favorites => Some(StatusFlag::Favorite),
            StatusFilter::ToTry => Some(StatusFlag::WantToTry),
            StatusFilter::Made => Some(StatusFlag::HaveMade),
        }
    }

    pub fn accepts(&self, status: &RecipeStatus) -> bool {
        self.flag().map_or(true, |flag| status.get(flag))
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => write!(f, "all"),
            StatusFilter::Favorites => write!(f, "favorites"),
            StatusFilter::ToTry => write!(f, "to-try"),
            StatusFilter::Made => write!(f, "made"),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "favorites" | "favorite" | "fav" => Ok(StatusFilter::Favorites),
            "totry" | "to-try" | "try" => Ok(StatusFilter::ToTry),
            "made" => Ok(StatusFilter::Made),
            other => Err(format!(
                "Unknown filter '{}' (expected all, favorites, to-try or made)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub metadata: RecipeMetadata,
    pub status: RecipeStatus,
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    /// Builds a brand new recipe out of a draft: fresh id, `created_at` is now.
    pub fn from_draft(draft: Draft) -> Self {
        let draft = draft.cleaned();
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
            metadata: draft.metadata,
            status: draft.status,
            created_at: Utc::now(),
        }
    }

    /// Overwrites every editable field with the draft's. `id` and `created_at` are kept.
    pub fn apply_draft(&mut self, draft: Draft) {
        let draft = draft.cleaned();
        self.name = draft.name;
        self.ingredients = draft.ingredients;
        self.instructions = draft.instructions;
        self.metadata = draft.metadata;
        self.status = draft.status;
    }

    /// Case-insensitive substring match against the name, every ingredient and the cuisine.
    ///
    /// `term_lower` must already be lowercased.
    pub fn matches(&self, term_lower: &str) -> bool {
        self.name.to_lowercase().contains(term_lower)
            || self
                .ingredients
                .iter()
                .any(|i| i.to_lowercase().contains(term_lower))
            || self.metadata.cuisine.to_lowercase().contains(term_lower)
    }
}

/// The two row lists a draft form edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftList {
    Ingredients,
    Instructions,
}

impl fmt::Display for DraftList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftList::Ingredients => write!(f, "ingredient"),
            DraftList::Instructions => write!(f, "step"),
        }
    }
}

impl FromStr for DraftList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ingredient" | "ingredients" => Ok(DraftList::Ingredients),
            "step" | "steps" | "instruction" | "instructions" => Ok(DraftList::Instructions),
            other => Err(format!(
                "Unknown list '{}' (expected ingredient or step)",
                other
            )),
        }
    }
}

/// An uncommitted working copy of a recipe's editable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub metadata: RecipeMetadata,
    pub status: RecipeStatus,
}

impl Draft {
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            ingredients: vec![String::new()],
            instructions: vec![String::new()],
            metadata: RecipeMetadata::default(),
            status: RecipeStatus::default(),
        }
    }

    pub fn from_recipe(recipe: &Recipe) -> Self {
        let mut draft = Self {
            name: recipe.name.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            metadata: recipe.metadata.clone(),
            status: recipe.status,
        };
        // A form always needs at least one editable row
        if draft.ingredients.is_empty() {
            draft.ingredients.push(String::new());
        }
        if draft.instructions.is_empty() {
            draft.instructions.push(String::new());
        }
        draft
    }

    pub fn list(&self, list: DraftList) -> &Vec<String> {
        match list {
            DraftList::Ingredients => &self.ingredients,
            DraftList::Instructions => &self.instructions,
        }
    }

    pub fn list_mut(&mut self, list: DraftList) -> &mut Vec<String> {
        match list {
            DraftList::Ingredients => &mut self.ingredients,
            DraftList::Instructions => &mut self.instructions,
        }
    }

    pub fn has_valid_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    fn cleaned(mut self) -> Self {
        self.ingredients.retain(|i| !i.trim().is_empty());
        self.instructions.retain(|i| !i.trim().is_empty());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftMode {
    Creating,
    Editing(Uuid),
}

/// The one draft a session may have open, and what saving it will do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDraft {
    pub draft: Draft,
    pub mode: DraftMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_has_one_row_per_list() {
        let draft = Draft::empty();
        assert_eq!(draft.ingredients, vec![String::new()]);
        assert_eq!(draft.instructions, vec![String::new()]);
        assert_eq!(draft.metadata.servings, 1);
        assert_eq!(draft.metadata.difficulty, Difficulty::Easy);
        assert_eq!(draft.status, RecipeStatus::default());
    }

    #[test]
    fn from_draft_strips_blank_rows() {
        let mut draft = Draft::empty();
        draft.name = "Toast".into();
        draft.ingredients = vec!["bread".into(), "   ".into(), "butter".into()];
        draft.instructions = vec!["".into(), "toast it".into()];

        let recipe = Recipe::from_draft(draft);
        assert_eq!(recipe.ingredients, vec!["bread", "butter"]);
        assert_eq!(recipe.instructions, vec!["toast it"]);
    }

    #[test]
    fn apply_draft_keeps_identity() {
        let mut draft = Draft::empty();
        draft.name = "Toast".into();
        let mut recipe = Recipe::from_draft(draft);
        let (id, created_at) = (recipe.id, recipe.created_at);

        let mut edit = Draft::from_recipe(&recipe);
        edit.name = "French Toast".into();
        recipe.apply_draft(edit);

        assert_eq!(recipe.name, "French Toast");
        assert_eq!(recipe.id, id);
        assert_eq!(recipe.created_at, created_at);
    }

    #[test]
    fn draft_from_recipe_without_rows_gets_a_blank_row() {
        let mut draft = Draft::empty();
        draft.name = "Water".into();
        let recipe = Recipe::from_draft(draft);
        assert!(recipe.ingredients.is_empty());

        let edit = Draft::from_recipe(&recipe);
        assert_eq!(edit.ingredients.len(), 1);
        assert_eq!(edit.instructions.len(), 1);
    }

    #[test]
    fn toggle_flips_only_one_flag() {
        let mut status = RecipeStatus::default();
        assert!(status.toggle(StatusFlag::WantToTry));
        assert!(status.want_to_try);
        assert!(!status.is_favorite);
        assert!(!status.have_made);
    }

    #[test]
    fn parses_filters_and_flags() {
        assert_eq!("toTry".parse::<StatusFilter>(), Ok(StatusFilter::ToTry));
        assert_eq!("Favorites".parse::<StatusFilter>(), Ok(StatusFilter::Favorites));
        assert_eq!("fav".parse::<StatusFlag>(), Ok(StatusFlag::Favorite));
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("spicy".parse::<StatusFilter>().is_err());
    }
}
