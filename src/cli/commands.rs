use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::config;
use crate::host::EditorHost;
use crate::mru::MruTracker;
use crate::storage::JsonFileStore;
use crate::switcher::{self, NO_WORKSPACE_MESSAGE, SwitchOutcome};
use crate::tui;
use crate::utils::format_path_with_tilde;

#[derive(Parser)]
#[command(name = "project-switcher")]
#[command(version = "0.1.0")]
#[command(about = "Switch between sibling project directories", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // Bare invocation behaves like `switch`
    #[command(flatten)]
    pub switch_args: SwitchArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pick a project and open it in the editor (the default)
    Switch(SwitchArgs),
    /// Print the recently used projects, most recent first
    Recent,
}

#[derive(Args, Default)]
pub struct SwitchArgs {
    /// Directory containing the candidate projects (defaults to the parent
    /// of the current directory)
    #[arg(long)]
    pub directory: Option<String>,

    /// Reuse the current editor window instead of opening a new one
    #[arg(long)]
    pub same_window: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Switch(args)) => run_switch(&args),
        Some(Commands::Recent) => show_recent(),
        None => run_switch(&cli.switch_args),
    }
}

fn run_switch(args: &SwitchArgs) -> Result<()> {
    let settings = config::load_settings()?;
    let host = EditorHost::new(settings.editor_command());
    let store = JsonFileStore::open_default()?;

    let outcome = switcher::run_switch(
        &host,
        store,
        &settings,
        args.directory.as_deref(),
        tui::run_picker,
        !args.same_window,
    )?;

    match outcome {
        SwitchOutcome::NoWorkspace => {
            eprintln!("{NO_WORKSPACE_MESSAGE}");
        }
        SwitchOutcome::Dismissed => {}
        SwitchOutcome::Opened(entry) => {
            println!("Opened {} ({})", entry.id, format_path_with_tilde(&entry.path));
        }
    }

    Ok(())
}

fn show_recent() -> Result<()> {
    let store = JsonFileStore::open_default()?;
    let tracker = MruTracker::new(store);

    let recent = tracker.list();
    if recent.is_empty() {
        println!("No recently used projects yet");
        return Ok(());
    }

    let focused = tracker.focused();
    for project in &recent {
        if focused.as_deref() == Some(project.as_str()) {
            println!("* {project}");
        } else {
            println!("  {project}");
        }
    }

    Ok(())
}
