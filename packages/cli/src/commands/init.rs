use crate::commands::open_playground;
use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use webplay_editor::Language;
use webplay_workspace::NullSandbox;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory for the fragment files
    #[arg(short, long, default_value = ".")]
    pub src_dir: String,

    /// Force overwrite existing config and fragment files
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing WebPlay project...".bright_blue().bold());

    let config = Config {
        src_dir: args.src_dir.clone(),
        ..Config::default()
    };

    // Create source directory if it doesn't exist
    let src_dir = config.get_src_dir(cwd);
    if !src_dir.exists() {
        fs::create_dir_all(&src_dir)?;
        println!("  {} Created {}/", "✓".green(), args.src_dir);
    }

    // Write one file per default fragment
    for language in Language::ALL {
        let spec = language.spec();
        let path = src_dir.join(spec.file_name);
        if path.exists() && !args.force {
            println!("  {} {} (kept)", "•".dimmed(), spec.file_name);
            continue;
        }
        fs::write(&path, spec.default_code)?;
        println!("  {} Created {}", "✓".green(), spec.file_name);
    }

    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    // Seed the store so list/compile work right away
    let playground = open_playground(&config, cwd, NullSandbox)?;
    playground.close();
    println!("  {} Initialized store in {}/", "✓".green(), config.store_dir);

    println!();
    println!("{}", "✨ Project initialized!".green().bold());
    println!("Next steps:");
    println!("  • Edit {}, {} and {}", "index.html".cyan(), "style.css".cyan(), "script.js".cyan());
    println!("  • Run {} to preview live", "webplay watch".bright_white());

    Ok(())
}
