//! svn-prefs - SVN integration preferences from the terminal
//!
//! Usage:
//!   svn-prefs show                         # Show user and project preferences
//!   svn-prefs set lock-checking-enabled on # Change one field and save
//!   svn-prefs exclude add Assets/Temp      # Manage excluded paths
//!   svn-prefs paths                        # Show where preferences live

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use svn_prefs_core::commands;
use svn_prefs_core::prelude::*;

#[derive(Parser)]
#[command(name = "svn-prefs")]
#[command(about = "SVN integration preferences", long_about = None)]
struct Cli {
    /// Project root (defaults to the current directory)
    #[arg(long, short, global = true)]
    project: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show user and project preferences
    Show {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Set a single preference field and save
    Set {
        /// Field name, e.g. lock-checking-enabled or cliExecutablePath
        field: String,
        /// New value
        value: String,
    },

    /// Manage project paths ignored by the integration
    Exclude(ExcludeArgs),

    /// Restore default preferences
    ///
    /// Without flags both scopes are reset.
    Reset {
        /// Reset the user scope only
        #[arg(long)]
        user_scope: bool,
        /// Reset the project scope only
        #[arg(long)]
        project_scope: bool,
    },

    /// Show where the preferences are stored
    Paths,
}

#[derive(Args)]
struct ExcludeArgs {
    #[command(subcommand)]
    command: ExcludeSubcommand,
}

#[derive(Subcommand)]
enum ExcludeSubcommand {
    /// Exclude a project-relative path
    Add { path: String },
    /// Stop excluding a path
    #[command(alias = "rm")]
    Remove { path: String },
    /// List excluded paths
    List,
}

#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Machine-readable JSON
    Json,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "svn_prefs_core=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let context = match cli.project {
        Some(root) => PreferencesContext::for_project(root)?,
        None => PreferencesContext::from_env()?,
    };
    tracing::debug!("Using project root {}", context.project_root().display());
    PreferencesStore::install_context(context);
    let store = PreferencesStore::instance()?;

    run_cli(&store, cli.command)
}

fn run_cli(store: &PreferencesStore, command: Commands) -> Result<()> {
    match command {
        Commands::Show { format } => run_show(store, format)?,
        Commands::Set { field, value } => run_set(store, &field, &value)?,
        Commands::Exclude(args) => run_exclude(store, args.command)?,
        Commands::Reset {
            user_scope,
            project_scope,
        } => run_reset(store, user_scope, project_scope)?,
        Commands::Paths => run_paths(store),
    }
    Ok(())
}

fn run_show(store: &PreferencesStore, format: OutputFormat) -> Result<()> {
    let user = store.user_preferences();
    let project = store.project_preferences();

    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "user": user,
                "project": project,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Table => {
            println!("User preferences:");
            for field in PreferenceField::ALL.iter().filter(|f| !f.is_project_scoped()) {
                println!("  {:<28} {}", field.name(), field.get(&user, &project));
            }
            match user.auto_refresh_interval() {
                Some(interval) => {
                    println!("  {:<28} every {}s", "(auto refresh)", interval.as_secs())
                }
                None => println!("  {:<28} disabled", "(auto refresh)"),
            }

            println!("\nProject preferences:");
            for field in PreferenceField::ALL.iter().filter(|f| f.is_project_scoped()) {
                println!("  {:<28} {}", field.name(), field.get(&user, &project));
            }
            println!("  {:<28} {}", "(executable)", project.cli_executable());
            print_excluded(&project);
        }
    }
    Ok(())
}

fn run_set(store: &PreferencesStore, field: &str, value: &str) -> Result<()> {
    let field = commands::set_field(store, field, value)?;
    println!("Set {} = {}", field.name(), value.trim());
    Ok(())
}

fn run_exclude(store: &PreferencesStore, command: ExcludeSubcommand) -> Result<()> {
    match command {
        ExcludeSubcommand::Add { path } => {
            if commands::exclude_add(store, &path)? {
                println!("Excluded: {path}");
            } else {
                println!("Already excluded: {path}");
            }
        }
        ExcludeSubcommand::Remove { path } => {
            if commands::exclude_remove(store, &path)? {
                println!("No longer excluded: {path}");
            } else {
                println!("Not excluded: {path}");
            }
        }
        ExcludeSubcommand::List => print_excluded(&store.project_preferences()),
    }
    Ok(())
}

fn run_reset(store: &PreferencesStore, user_only: bool, project_only: bool) -> Result<()> {
    commands::reset(store, ResetScope::from_flags(user_only, project_only))?;
    println!("Preferences reset to defaults");
    Ok(())
}

fn run_paths(store: &PreferencesStore) {
    let context = store.context();
    println!("User store:    {}", context.user_store().location());
    println!(
        "Project file:  {}",
        context.project_preferences_path().display()
    );
}

fn print_excluded(project: &ProjectPreferences) {
    if project.excluded_paths.is_empty() {
        println!("  (no excluded paths)");
        return;
    }
    for path in &project.excluded_paths {
        println!("  - {path}");
    }
}
