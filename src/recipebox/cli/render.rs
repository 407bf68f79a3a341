//! Terminal output for the session shell.
//!
//! Every function here takes plain data from the API and turns it into text.
//! The `render_*` functions return strings so they can be tested; the
//! `print_*` helpers write them out.

use chrono::{DateTime, Utc};
use colored::*;
use recipebox::api::{CmdMessage, MessageLevel};
use recipebox::chat::{ChatMessage, Sender};
use recipebox::index::DisplayRecipe;
use recipebox::model::{ActiveDraft, DraftMode, Recipe, RecipeStatus};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const FAVORITE_MARKER: &str = "♥";
const TRY_MARKER: &str = "✎";
const MADE_MARKER: &str = "✓";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub fn print_error(err: &dyn std::fmt::Display) {
    eprintln!("{}", format!("Error: {}", err).red());
}

/// The list view: one summary line per recipe plus an ingredient preview.
pub fn render_recipe_list(recipes: &[DisplayRecipe], preview: usize) -> String {
    if recipes.is_empty() {
        return format!(
            "No recipes found matching your criteria.\n{}\n",
            "Try adjusting your search or filter settings.".dimmed()
        );
    }

    let mut out = String::new();
    for dr in recipes {
        let recipe = &dr.recipe;
        let idx_str = format!("{:>3}. ", dr.index.0);
        let markers = status_markers(&recipe.status);
        let time_ago = format_time_ago(recipe.created_at);

        let summary = format!(
            "{}  {} · {} · {}",
            recipe.name,
            or_dash(&recipe.metadata.cuisine),
            recipe.metadata.difficulty,
            servings(recipe.metadata.servings)
        );
        let fixed_width = idx_str.width() + markers.width() + 1 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let summary = truncate_to_width(&summary, available);
        let padding = available.saturating_sub(summary.width());

        out.push_str(&format!(
            "{}{}{} {}{}\n",
            idx_str.yellow(),
            summary,
            " ".repeat(padding),
            markers.red(),
            time_ago.dimmed()
        ));

        let preview_line = ingredient_preview(&recipe.ingredients, preview);
        if !preview_line.is_empty() {
            out.push_str(&format!("       {}\n", preview_line.dimmed()));
        }
    }
    out
}

/// A single recipe, everything included.
pub fn render_full_recipe(recipe: &Recipe) -> String {
    let meta = &recipe.metadata;
    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        recipe.name.bold(),
        status_markers(&recipe.status).red()
    ));
    out.push_str("--------------------------------\n");
    out.push_str(&format!("Cuisine:    {}\n", or_dash(&meta.cuisine)));
    out.push_str(&format!(
        "Time:       {} prep, {} cook\n",
        or_dash(&meta.prep_time),
        or_dash(&meta.cook_time)
    ));
    out.push_str(&format!(
        "Servings:   {} | Difficulty: {}\n",
        meta.servings, meta.difficulty
    ));
    out.push_str(&format!("Status:     {}\n", status_words(&recipe.status)));
    out.push_str(&format!(
        "Added:      {}\n",
        recipe.created_at.format("%Y-%m-%d")
    ));

    out.push_str("\nIngredients:\n");
    for ingredient in &recipe.ingredients {
        out.push_str(&format!("  • {}\n", ingredient));
    }
    out.push_str("\nInstructions:\n");
    for (i, step) in recipe.instructions.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, step));
    }
    out
}

pub fn render_full_recipes(recipes: &[Recipe]) -> String {
    recipes
        .iter()
        .map(render_full_recipe)
        .collect::<Vec<_>>()
        .join("\n================================\n\n")
}

/// The add/edit form. Rows are numbered the way the shell addresses them.
pub fn render_draft(active: &ActiveDraft) -> String {
    let draft = &active.draft;
    let meta = &draft.metadata;
    let heading = match active.mode {
        DraftMode::Creating => "Add New Recipe",
        DraftMode::Editing(_) => "Edit Recipe",
    };

    let mut out = String::new();
    out.push_str(&format!("{}\n", heading.bold()));
    out.push_str(&format!("  name        {}\n", placeholder(&draft.name)));
    out.push_str(&format!("  cuisine     {}\n", placeholder(&meta.cuisine)));
    out.push_str(&format!("  prep        {}\n", placeholder(&meta.prep_time)));
    out.push_str(&format!("  cook        {}\n", placeholder(&meta.cook_time)));
    out.push_str(&format!("  servings    {}\n", meta.servings));
    out.push_str(&format!("  difficulty  {}\n", meta.difficulty));
    out.push_str(&format!("  status      {}\n", status_words(&draft.status)));

    out.push_str("  ingredients\n");
    for (i, row) in draft.ingredients.iter().enumerate() {
        out.push_str(&format!("    {}. {}\n", i + 1, placeholder(row)));
    }
    out.push_str("  steps\n");
    for (i, row) in draft.instructions.iter().enumerate() {
        out.push_str(&format!("    {}. {}\n", i + 1, placeholder(row)));
    }
    out
}

pub fn render_chat_message(message: &ChatMessage) -> String {
    let who = match message.sender {
        Sender::Bot => "assistant".cyan().bold(),
        Sender::User => "you".green().bold(),
    };
    format!(
        "{} {} {}",
        message.timestamp.format("%H:%M").to_string().dimmed(),
        who,
        message.text
    )
}

fn status_markers(status: &RecipeStatus) -> String {
    let mut markers = String::new();
    for (on, marker) in [
        (status.is_favorite, FAVORITE_MARKER),
        (status.want_to_try, TRY_MARKER),
        (status.have_made, MADE_MARKER),
    ] {
        markers.push_str(if on { marker } else { " " });
    }
    markers
}

fn status_words(status: &RecipeStatus) -> String {
    let mut words = Vec::new();
    if status.is_favorite {
        words.push("favorite");
    }
    if status.want_to_try {
        words.push("want to try");
    }
    if status.have_made {
        words.push("made");
    }
    if words.is_empty() {
        "-".to_string()
    } else {
        words.join(", ")
    }
}

fn ingredient_preview(ingredients: &[String], preview: usize) -> String {
    let shown: Vec<&str> = ingredients.iter().take(preview).map(String::as_str).collect();
    let mut line = shown.join(", ");
    if ingredients.len() > preview {
        line.push_str(&format!(" ...and {} more", ingredients.len() - preview));
    }
    line
}

fn servings(n: u32) -> String {
    if n == 1 {
        "1 serving".to_string()
    } else {
        format!("{} servings", n)
    }
}

fn or_dash(s: &str) -> &str {
    if s.trim().is_empty() {
        "-"
    } else {
        s
    }
}

fn placeholder(s: &str) -> ColoredString {
    if s.is_empty() {
        "(empty)".dimmed()
    } else {
        s.normal()
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipebox::index::index_recipes;
    use recipebox::model::Draft;
    use recipebox::store::memory::seed_recipes;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn list_shows_preview_and_remainder() {
        plain();
        let out = render_recipe_list(&index_recipes(seed_recipes()), 3);
        assert!(out.contains("1. Spaghetti Carbonara"));
        assert!(out.contains("Italian · Medium · 4 servings"));
        assert!(out.contains("400g spaghetti, 200g pancetta, 4 eggs ...and 3 more"));
    }

    #[test]
    fn empty_list_explains_itself() {
        plain();
        let out = render_recipe_list(&[], 3);
        assert!(out.contains("No recipes found matching your criteria."));
    }

    #[test]
    fn full_recipe_numbers_steps() {
        plain();
        let out = render_full_recipe(&seed_recipes()[0]);
        assert!(out.contains("Status:     favorite, made"));
        assert!(out.contains("  5. Serve hot"));
        assert!(out.contains("Added:      2024-01-15"));
    }

    #[test]
    fn draft_form_shows_mode_and_rows() {
        plain();
        let active = ActiveDraft {
            draft: Draft::empty(),
            mode: DraftMode::Creating,
        };
        let out = render_draft(&active);
        assert!(out.starts_with("Add New Recipe"));
        assert!(out.contains("    1. (empty)"));
        assert!(out.contains("servings    1"));
    }

    #[test]
    fn truncates_long_text() {
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
        assert_eq!(truncate_to_width("abc", 10), "abc");
    }
}
