use crate::commands::open_playground;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use webplay_editor::Language;
use webplay_workspace::{wall_clock_millis, NullSandbox};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Language of the new editor (html, css, js)
    pub language: Language,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Id of the editor to close
    pub id: String,
}

pub fn add(args: AddArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut playground = open_playground(&config, cwd, NullSandbox)?;

    let id = playground.add_editor(args.language, wall_clock_millis())?;
    playground.close();

    println!("  {} Added {} editor {}", "✓".green(), args.language, id.bright_white());
    Ok(())
}

pub fn remove(args: RemoveArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut playground = open_playground(&config, cwd, NullSandbox)?;

    let removed = playground.remove_editor(&args.id, wall_clock_millis())?;
    playground.close();

    if removed {
        println!("  {} Removed editor {}", "✓".green(), args.id.bright_white());
    } else {
        println!("  {} No editor with id {}", "⚠️".yellow(), args.id.bright_white());
    }
    Ok(())
}
