use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeboxError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Recipe not found: {0}")]
    NotFound(String),

    #[error("No recipe is being edited. Start one with 'new' or 'edit <index>'")]
    NoActiveDraft,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RecipeboxError>;
