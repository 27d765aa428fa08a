//! Strongbox command-line interface.

pub mod commands;
pub mod menu;
pub mod prompt;
pub mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use strongbox_core::config::Config;
use strongbox_core::env::{self, vars};
use strongbox_vault::{Category, Session, Vault};

use crate::prompt::Prompter;

/// Strongbox - password-protected local secret vault
#[derive(Parser)]
#[command(name = "strongbox")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file
    #[arg(short, long, env = "STRONGBOX_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Vault root directory (overrides vault.root from the config file)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Add a new entry
    Add(commands::entries::AddArgs),

    /// List entry names in a category
    List {
        /// accounts, seeds, private-keys, or others
        category: Category,
    },

    /// Decrypt and print one entry, or every entry with --all
    Show {
        category: Category,

        /// 1-based index from `list` (prompts if omitted)
        index: Option<usize>,

        /// Print every entry in the category
        #[arg(long, conflicts_with = "index")]
        all: bool,
    },

    /// Delete an entry
    Delete {
        category: Category,

        /// 1-based index from `list` (prompts if omitted)
        index: Option<usize>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Interactive menu
    Menu,

    /// Configuration management
    Config(commands::config::ConfigArgs),

    /// Show version information
    Version,
}

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let mut prompter = Prompter::stdin();

    match &cli.command {
        Commands::Config(args) => commands::config::run(args, cli.config.as_deref()),
        Commands::Version => {
            println!("strongbox {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Add(args) => commands::entries::add(
            &open_vault(&cli)?,
            &mut prompter,
            args.category,
            args.label.as_deref(),
            args.data.as_deref(),
        ),
        Commands::List { category } => commands::entries::list(&open_vault(&cli)?, *category),
        Commands::Show {
            category,
            index,
            all,
        } => commands::entries::show(&open_vault(&cli)?, &mut prompter, *category, *index, *all),
        Commands::Delete {
            category,
            index,
            yes,
        } => commands::entries::delete(&open_vault(&cli)?, &mut prompter, *category, *index, *yes),
        Commands::Menu => menu::run(&mut open_vault(&cli)?),
    }
}

/// Load config, resolve the vault root, and obtain the master password.
fn open_vault(cli: &Cli) -> anyhow::Result<Vault> {
    let mut config = Config::load_or_default(cli.config.as_deref())?;
    if let Some(root) = &cli.root {
        config.vault.root = Some(root.clone());
    }
    config.validate()?;

    let password = match env::get_var(vars::STRONGBOX_PASSWORD) {
        Some(password) => password,
        None => prompt::password("Enter your password: ")?,
    };

    let session = Session::from_config(&config, password)?;
    tracing::debug!(root = %session.root().display(), "opening vault");
    Ok(Vault::open(session))
}
