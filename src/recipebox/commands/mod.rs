use crate::index::DisplayRecipe;
use crate::model::{ActiveDraft, Difficulty, Recipe, StatusFlag};

pub mod commit;
pub mod delete;
pub mod draft;
pub mod export;
pub mod helpers;
pub mod list;
pub mod status;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_recipes: Vec<Recipe>,
    pub listed_recipes: Vec<DisplayRecipe>,
    pub draft: Option<ActiveDraft>,
    pub exported: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.affected_recipes = recipes;
        self
    }

    pub fn with_listed_recipes(mut self, recipes: Vec<DisplayRecipe>) -> Self {
        self.listed_recipes = recipes;
        self
    }

    pub fn with_draft(mut self, draft: ActiveDraft) -> Self {
        self.draft = Some(draft);
        self
    }

    pub fn with_exported(mut self, exported: String) -> Self {
        self.exported = Some(exported);
        self
    }
}

/// One field-level edit to the open draft.
///
/// Row indexes are 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftUpdate {
    Name(String),
    PrepTime(String),
    CookTime(String),
    Servings(u32),
    Difficulty(Difficulty),
    Cuisine(String),
    Status(StatusFlag, bool),
    Ingredient(usize, String),
    Instruction(usize, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_constructors_set_their_level() {
        let levels: Vec<_> = [
            CmdMessage::info("a"),
            CmdMessage::success("b"),
            CmdMessage::warning("c"),
        ]
        .into_iter()
        .map(|m| m.level)
        .collect();
        assert_eq!(
            levels,
            vec![MessageLevel::Info, MessageLevel::Success, MessageLevel::Warning]
        );
    }
}
