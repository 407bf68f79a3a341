use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use recipebox::model::{DraftList, StatusFilter, StatusFlag};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "recipebox", bin_name = "recipebox", version = get_version())]
#[command(about = "A recipe box for one session at the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Start with an empty recipe box instead of the sample recipes
    #[arg(long, global = true)]
    pub no_seed: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive session (the default)
    Shell,

    /// Write the current configuration to the --config file, or the config directory
    Init,
}

/// One line typed into the session shell.
#[derive(Parser, Debug)]
#[command(
    name = "recipebox",
    no_binary_name = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DraftField {
    Name,
    Prep,
    Cook,
    Servings,
    Difficulty,
    Cuisine,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    /// List recipes (uses the session's search and filter unless given)
    #[command(alias = "ls")]
    List {
        /// Search names, ingredients and cuisine
        #[arg(short, long, num_args = 1..)]
        search: Option<Vec<String>>,

        /// all, favorites, to-try or made
        #[arg(short, long)]
        filter: Option<StatusFilter>,
    },

    /// Set the session search term (no words clears it)
    Search {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Set the session status filter
    Filter { filter: StatusFilter },

    /// Show one or more recipes in full
    #[command(alias = "v")]
    Show {
        /// Indexes or ids of the recipes (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Start a new recipe
    #[command(alias = "n")]
    New,

    /// Start editing a recipe
    #[command(alias = "e")]
    Edit { selector: String },

    /// Set a field of the open draft
    Set {
        field: DraftField,

        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },

    /// Set a status flag on the open draft
    Mark { flag: StatusFlag, state: Switch },

    /// Write ingredient row N of the open draft
    Ingredient {
        number: usize,

        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Write instruction step N of the open draft
    Step {
        number: usize,

        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Append a blank ingredient row or step to the open draft
    Add { list: DraftList },

    /// Remove ingredient row or step N from the open draft
    Remove { list: DraftList, number: usize },

    /// Print the open draft
    Draft,

    /// Save the open draft
    Save,

    /// Throw away the open draft
    Cancel,

    /// Delete one or more recipes
    #[command(alias = "rm")]
    Delete {
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Flip a status flag (favorite, try, made) on a recipe
    #[command(alias = "t")]
    Toggle { selector: String, flag: StatusFlag },

    /// Print recipes as JSON (all of them when none are given)
    Export { selectors: Vec<String> },

    /// Ask the cooking assistant something
    Chat {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Print this help
    Help,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

impl Switch {
    pub fn is_on(&self) -> bool {
        matches!(self, Switch::On)
    }
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Browse,
    Recipe,
    Draft,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Browse => "Browsing:",
            CommandGroup::Recipe => "Per-Recipe Commands:",
            CommandGroup::Draft => "Add / Edit Form:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    /// Returns the group for a given command name
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "list" | "search" | "filter" => Some(CommandGroup::Browse),
            "show" | "delete" | "toggle" | "export" => Some(CommandGroup::Recipe),
            "new" | "edit" | "set" | "mark" | "ingredient" | "step" | "add" | "remove"
            | "draft" | "save" | "cancel" => Some(CommandGroup::Draft),
            "chat" | "help" | "quit" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Browse,
            CommandGroup::Recipe,
            CommandGroup::Draft,
            CommandGroup::Misc,
        ]
    }
}

/// Returns the grouped help for the session shell
pub fn get_grouped_help() -> String {
    let cmd = ShellLine::command();
    let mut output = String::new();
    output.push_str(&format!("recipebox {}\n", get_version()));
    output.push_str("Commands are typed one per line. Recipes are referred to by their list number.\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Add --help after any command for its arguments.\n");
    output
}
