//! # CLI Layer
//!
//! This module is **one possible UI client** for recipebox, not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Uses `std::process::exit` (via `main.rs`)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## The Session Shell
//!
//! Recipes live only as long as the process, so the client is a line-based
//! shell: every line read from stdin is one user action, parsed with clap and
//! run to completion before the next line is read. Errors are printed and the
//! shell carries on; nothing a user types ends the session except `quit` or
//! end of input.
//!
//! ## Structure
//!
//! - `run()`: Top-level dispatch (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API, chat and configuration
//! - `run_shell()`: The read/dispatch loop
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::render::{
    print_error, print_messages, render_chat_message, render_draft, render_full_recipes,
    render_recipe_list,
};
use super::setup::{get_grouped_help, Cli, Commands, DraftField, ShellCommand, ShellLine};
use clap::Parser;
use directories::ProjectDirs;
use recipebox::api::{CmdResult, DraftUpdate, RecipeboxApi};
use recipebox::chat::{ChatSession, KeywordReplies, Latency};
use recipebox::config::RecipeboxConfig;
use recipebox::error::{RecipeboxError, Result};
use recipebox::model::{DraftList, StatusFilter, StatusFlag};
use recipebox::store::memory::InMemoryStore;
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: RecipeboxApi<InMemoryStore>,
    chat: ChatSession<KeywordReplies>,
    config: RecipeboxConfig,
}

/// What the loop should do after a line has been handled.
enum Flow {
    Continue,
    Quit,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let config = load_config(&cli)?;

    match cli.command {
        Some(Commands::Init) => handle_init(&cli, &config),
        Some(Commands::Shell) | None => {
            let mut ctx = init_context(&cli, config);
            run_shell(&mut ctx)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "recipebox", "recipebox").map(|dirs| dirs.config_dir().to_path_buf())
}

fn load_config(cli: &Cli) -> Result<RecipeboxConfig> {
    let config = match (&cli.config, config_dir()) {
        (Some(path), _) => RecipeboxConfig::load_file(path)?,
        (None, Some(dir)) => RecipeboxConfig::load(dir)?,
        (None, None) => RecipeboxConfig::default(),
    };
    debug!(?config, "loaded configuration");
    Ok(config)
}

fn init_context(cli: &Cli, config: RecipeboxConfig) -> AppContext {
    let store = if config.seed && !cli.no_seed {
        InMemoryStore::seeded()
    } else {
        InMemoryStore::new()
    };
    info!(recipes = store.len(), "starting session");

    let (min, max) = config.chat_latency();
    let chat = ChatSession::new(
        KeywordReplies,
        Latency::between(min, max),
        &config.chat_welcome,
    );

    AppContext {
        api: RecipeboxApi::new(store),
        chat,
        config,
    }
}

fn handle_init(cli: &Cli, config: &RecipeboxConfig) -> Result<()> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => config_dir()
            .ok_or_else(|| RecipeboxError::Api("Could not determine config dir".to_string()))?
            .join(recipebox::config::CONFIG_FILENAME),
    };
    config.save_file(&path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn run_shell(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();

    if interactive {
        println!("recipebox: type 'help' for commands, 'quit' to leave.");
    }
    handle_list(ctx, None, None)?;

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("> ");
            std::io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = match line {
            Ok(line) => line,
            // the bad line is consumed, so reading can go on
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                print_error(&RecipeboxError::Io(e));
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let parsed = match ShellLine::try_parse_from(trimmed.split_whitespace()) {
            Ok(parsed) => parsed,
            Err(e) => {
                // help goes to stdout, usage errors to stderr
                e.print()?;
                continue;
            }
        };

        match dispatch(ctx, parsed.command) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => print_error(&e),
        }
    }
    Ok(())
}

fn dispatch(ctx: &mut AppContext, command: ShellCommand) -> Result<Flow> {
    match command {
        ShellCommand::List { search, filter } => {
            handle_list(ctx, search.map(|words| words.join(" ")), filter)?
        }
        ShellCommand::Search { words } => {
            let result = ctx.api.set_search(words.join(" "))?;
            print_listing(ctx, &result);
        }
        ShellCommand::Filter { filter } => {
            let result = ctx.api.set_filter(filter)?;
            print_listing(ctx, &result);
        }
        ShellCommand::Show { selectors } => {
            let result = ctx.api.view_recipes(&selectors)?;
            print!("{}", render_full_recipes(&result.affected_recipes));
        }
        ShellCommand::New => {
            let result = ctx.api.begin_create()?;
            print_draft_result(&result);
        }
        ShellCommand::Edit { selector } => {
            let result = ctx.api.begin_edit(&selector)?;
            print_draft_result(&result);
        }
        ShellCommand::Set { field, value } => handle_set(ctx, field, value.join(" "))?,
        ShellCommand::Mark { flag, state } => {
            ctx.api.update_draft(DraftUpdate::Status(flag, state.is_on()))?;
        }
        ShellCommand::Ingredient { number, text } => {
            let index = row_index(number)?;
            ctx.api
                .update_draft(DraftUpdate::Ingredient(index, text.join(" ")))?;
        }
        ShellCommand::Step { number, text } => {
            let index = row_index(number)?;
            ctx.api
                .update_draft(DraftUpdate::Instruction(index, text.join(" ")))?;
        }
        ShellCommand::Add { list } => {
            let result = ctx.api.add_draft_item(list)?;
            print_added_row(&result, list);
        }
        ShellCommand::Remove { list, number } => {
            let result = ctx.api.remove_draft_item(list, row_index(number)?)?;
            print_draft_result(&result);
        }
        ShellCommand::Draft => {
            let result = ctx.api.show_draft()?;
            print_draft_result(&result);
        }
        ShellCommand::Save => {
            let result = ctx.api.commit_draft()?;
            print_messages(&result.messages);
        }
        ShellCommand::Cancel => {
            let result = ctx.api.discard_draft()?;
            print_messages(&result.messages);
        }
        ShellCommand::Delete { selectors } => {
            let result = ctx.api.delete_recipes(&selectors)?;
            print_messages(&result.messages);
        }
        ShellCommand::Toggle { selector, flag } => handle_toggle(ctx, &selector, flag)?,
        ShellCommand::Export { selectors } => {
            let result = ctx.api.export_recipes(&selectors)?;
            if let Some(json) = &result.exported {
                println!("{}", json);
            }
        }
        ShellCommand::Chat { words } => handle_chat(ctx, &words.join(" ")),
        ShellCommand::Help => print!("{}", get_grouped_help()),
        ShellCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn handle_list(
    ctx: &mut AppContext,
    search: Option<String>,
    filter: Option<StatusFilter>,
) -> Result<()> {
    let result = if search.is_none() && filter.is_none() {
        ctx.api.current_view()?
    } else {
        let view = &ctx.api.session().view;
        let search = search.unwrap_or_else(|| view.search.clone());
        let filter = filter.unwrap_or(view.filter);
        ctx.api.list_recipes(&search, filter)?
    };
    print_listing(ctx, &result);
    Ok(())
}

fn handle_set(ctx: &mut AppContext, field: DraftField, value: String) -> Result<()> {
    let update = match field {
        DraftField::Name => DraftUpdate::Name(value),
        DraftField::Prep => DraftUpdate::PrepTime(value),
        DraftField::Cook => DraftUpdate::CookTime(value),
        DraftField::Cuisine => DraftUpdate::Cuisine(value),
        DraftField::Servings => {
            let servings = value.trim().parse::<u32>().map_err(|_| {
                RecipeboxError::Validation(format!("Servings must be a number, got '{}'", value))
            })?;
            DraftUpdate::Servings(servings)
        }
        DraftField::Difficulty => {
            DraftUpdate::Difficulty(value.trim().parse().map_err(RecipeboxError::Validation)?)
        }
    };
    ctx.api.update_draft(update)?;
    Ok(())
}

fn handle_toggle(ctx: &mut AppContext, selector: &str, flag: StatusFlag) -> Result<()> {
    let result = ctx.api.toggle_status(selector, flag)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_chat(ctx: &mut AppContext, text: &str) {
    // first exchange: show the welcome message too
    if let [welcome] = ctx.chat.messages() {
        println!("{}", render_chat_message(welcome));
    }
    if let Some(reply) = ctx.chat.send(text) {
        println!("{}", render_chat_message(reply));
    }
}

fn print_listing(ctx: &AppContext, result: &CmdResult) {
    print!(
        "{}",
        render_recipe_list(&result.listed_recipes, ctx.config.list_ingredient_preview)
    );
    print_messages(&result.messages);
}

fn print_draft_result(result: &CmdResult) {
    print_messages(&result.messages);
    if let Some(active) = &result.draft {
        print!("{}", render_draft(active));
    }
}

fn print_added_row(result: &CmdResult, list: DraftList) {
    if let Some(active) = &result.draft {
        println!("Added {} #{}", list, active.draft.list(list).len());
    }
}

/// Shell rows are numbered from 1.
fn row_index(number: usize) -> Result<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| RecipeboxError::Validation("Rows are numbered from 1".to_string()))
}
