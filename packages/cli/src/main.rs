mod commands;
mod config;
mod preview;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    add, compile, export, init, list, remove, settings, toggle_layout, toggle_theme, watch,
    AddArgs, CompileArgs, ExportArgs, InitArgs, RemoveArgs, SettingsArgs, WatchArgs,
};
use tracing_subscriber::EnvFilter;

/// WebPlay CLI - HTML/CSS/JS playground with live preview
#[derive(Parser, Debug)]
#[command(name = "webplay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new WebPlay project
    Init(InitArgs),

    /// Show editors and settings
    List,

    /// Open a new editor
    Add(AddArgs),

    /// Close an editor
    Remove(RemoveArgs),

    /// Compile the editors into a single HTML document
    Compile(CompileArgs),

    /// Write webplay-project.html
    Export(ExportArgs),

    /// Show or change editor settings
    Settings(SettingsArgs),

    /// Switch between dark and light theme
    Theme,

    /// Switch between horizontal and vertical layout
    Layout,

    /// Watch the fragment files and keep a live preview up to date
    Watch(WatchArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::List => list(&cwd),
        Command::Add(args) => add(args, &cwd),
        Command::Remove(args) => remove(args, &cwd),
        Command::Compile(args) => compile(args, &cwd),
        Command::Export(args) => export(args, &cwd),
        Command::Settings(args) => settings(args, &cwd),
        Command::Theme => toggle_theme(&cwd),
        Command::Layout => toggle_layout(&cwd),
        Command::Watch(args) => watch(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
