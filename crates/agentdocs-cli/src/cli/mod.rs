//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum, error::ErrorKind};

pub mod global;
pub use global::GlobalArgs;

const OVERWRITE_WARNING: &str = "WARNING: existing files with the same names are \
                                 overwritten without confirmation.";

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// With no subcommand, generates the documentation set (see [`GenerateArgs`]).
#[derive(Debug, Parser)]
#[command(
    name     = "agentdocs",
    bin_name = "agentdocs",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold AI-assistant documentation for a project",
    long_about = "agentdocs writes a ready-made set of AI context documents \
                  (context priming, architecture overview, implementation \
                  patterns, README, usage guide and a setup script).\n\n\
                  WARNING: existing files with the same names are overwritten \
                  without confirmation.",
    after_help = "EXAMPLES:\n\
        \x20 agentdocs                      # ./universal-ai-docs/\n\
        \x20 agentdocs ~/work/app           # ~/work/app/universal-ai-docs/\n\
        \x20 agentdocs ~/work/app --direct  # straight into ~/work/app/\n\
        \x20 agentdocs new \"My Cool Project\" --output ~/work\n\
        \x20 agentdocs list --format json",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Arguments for the default generate action.
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Subcommand to execute; generates when absent.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Reject default-action arguments given alongside a subcommand.
    ///
    /// `agentdocs --dry-run new x` would otherwise drop `--dry-run` and write.
    /// Global flags stay valid on either side of the subcommand.
    pub fn check_conflicts(&self) -> Result<(), clap::Error> {
        let Some(command) = &self.command else {
            return Ok(());
        };

        let given: Vec<&str> = [
            (self.generate.dir.is_some(), "[DIR]"),
            (self.generate.direct, "--direct"),
            (self.generate.dry_run, "--dry-run"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect();

        if given.is_empty() {
            return Ok(());
        }
        Err(Self::command().error(
            ErrorKind::ArgumentConflict,
            format!(
                "{} cannot be used with the '{}' subcommand",
                given.join(", "),
                command.name()
            ),
        ))
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a personalised documentation set for a new project.
    #[command(
        visible_alias = "n",
        about = "Create a personalised documentation set",
        after_help = "Creates <OUTPUT>/<project-name> (lowercased, spaces become hyphens).\n\
            Prompts for any answer not given as a flag unless --no-input is set.\n\n\
            WARNING: existing files with the same names are overwritten without confirmation.\n\n\
            EXAMPLES:\n\
            \x20 agentdocs new \"My Cool Project\"\n\
            \x20 agentdocs new atlas --backend Rust --database SQLite --no-input"
    )]
    New(NewArgs),

    /// List the built-in templates.
    #[command(
        visible_alias = "ls",
        about = "List built-in templates",
        after_help = "EXAMPLES:\n\
            \x20 agentdocs list\n\
            \x20 agentdocs list --format csv"
    )]
    List(ListArgs),

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 agentdocs init\n\
            \x20 agentdocs init --force\n\
            \x20 agentdocs --config ./agentdocs.toml init"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 agentdocs completions bash > ~/.local/share/bash-completion/completions/agentdocs\n\
            \x20 agentdocs completions zsh  > ~/.zfunc/_agentdocs\n\
            \x20 agentdocs completions fish > ~/.config/fish/completions/agentdocs.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 agentdocs config get generate.subdirectory\n\
            \x20 agentdocs config list\n\
            \x20 agentdocs config path"
    )]
    Config(ConfigCommands),
}

impl Commands {
    /// Subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::New(_) => "new",
            Self::List(_) => "list",
            Self::Init(_) => "init",
            Self::Completions(_) => "completions",
            Self::Config(_) => "config",
        }
    }
}

// ── generate (default) ────────────────────────────────────────────────────────

/// Arguments for the default action: write the documentation set.
#[derive(Debug, Default, Args)]
pub struct GenerateArgs {
    /// Output directory (default: current directory).
    #[arg(value_name = "DIR", help = "Output directory (default: current directory)")]
    pub dir: Option<PathBuf>,

    /// Write directly into DIR instead of DIR/universal-ai-docs.
    #[arg(
        short = 'd',
        long = "direct",
        visible_alias = "here",
        help = "Write directly into DIR instead of a subdirectory",
        long_help = OVERWRITE_WARNING,
    )]
    pub direct: bool,

    /// Show what would be written without touching the filesystem.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `agentdocs new`.
#[derive(Debug, Default, Args)]
pub struct NewArgs {
    /// Project name; prompted for when absent.
    #[arg(value_name = "PROJECT_NAME", help = "Project name")]
    pub name: Option<String>,

    /// Base directory the project directory is created in.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Base directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    #[arg(long, value_name = "TEXT", help = "Brief description")]
    pub description: Option<String>,

    #[arg(long, value_name = "TEXT", help = "Target users or market")]
    pub audience: Option<String>,

    #[arg(long, value_name = "TEXT", help = "Main business objective")]
    pub goal: Option<String>,

    #[arg(long, value_name = "TECH", help = "Frontend technology")]
    pub frontend: Option<String>,

    #[arg(long, value_name = "TECH", help = "Backend technology")]
    pub backend: Option<String>,

    #[arg(long, value_name = "TECH", help = "Database technology")]
    pub database: Option<String>,

    #[arg(long, value_name = "PATTERN", help = "Architecture pattern")]
    pub architecture: Option<String>,

    #[arg(long, value_name = "TEXT", help = "Domain focus")]
    pub domain: Option<String>,

    #[arg(long, value_name = "TEXT", help = "Project timeline or deadline")]
    pub timeline: Option<String>,

    /// Never prompt; unanswered fields are left blank.
    #[arg(long = "no-input", help = "Do not prompt for missing answers")]
    pub no_input: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `agentdocs list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `agentdocs init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `agentdocs completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `agentdocs config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generate.direct`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
