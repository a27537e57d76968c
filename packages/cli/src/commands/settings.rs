use crate::commands::open_playground;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use webplay_workspace::{wall_clock_millis, NullSandbox};

#[derive(Debug, Args)]
pub struct SettingsArgs {
    /// Editor font size in pixels (8-24)
    #[arg(long)]
    pub font_size: Option<u32>,

    /// Recompile automatically after edits
    #[arg(long)]
    pub auto_run: Option<bool>,

    /// Quiet period before an automatic recompile, in ms (200-2000)
    #[arg(long)]
    pub delay: Option<u64>,
}

/// Update the stored settings. With no flags, prints the current ones.
pub fn settings(args: SettingsArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut playground = open_playground(&config, cwd, NullSandbox)?;

    let mut settings = playground.settings();
    if let Some(font_size) = args.font_size {
        settings.font_size = font_size;
    }
    if let Some(auto_run) = args.auto_run {
        settings.auto_run = auto_run;
    }
    if let Some(delay) = args.delay {
        settings.auto_run_delay = delay;
    }

    let applied = playground.update_settings(settings, wall_clock_millis());
    playground.close();

    if applied != settings {
        println!("  {} Values were clamped to the allowed range", "⚠️".yellow());
    }
    println!("  font size       {}", applied.font_size.to_string().bright_white());
    println!("  auto-run        {}", applied.auto_run.to_string().bright_white());
    println!("  auto-run delay  {} ms", applied.auto_run_delay.to_string().bright_white());
    Ok(())
}

pub fn toggle_theme(cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut playground = open_playground(&config, cwd, NullSandbox)?;
    let theme = playground.toggle_theme();
    playground.close();

    println!("  {} Theme is now {}", "✓".green(), theme.as_str().bright_white());
    Ok(())
}

pub fn toggle_layout(cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut playground = open_playground(&config, cwd, NullSandbox)?;
    let layout = playground.toggle_layout();
    playground.close();

    println!("  {} Layout is now {}", "✓".green(), layout.as_str().bright_white());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use webplay_workspace::{FileStore, Playground, Theme};

    fn reopen(cwd: &str) -> Playground<FileStore, NullSandbox> {
        let config = Config::load(cwd).unwrap();
        open_playground(&config, cwd, NullSandbox).unwrap()
    }

    #[test]
    fn test_settings_are_clamped_and_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();

        settings(
            SettingsArgs {
                font_size: Some(40),
                auto_run: Some(false),
                delay: None,
            },
            cwd,
        )
        .unwrap();

        let settings = reopen(cwd).settings();
        assert_eq!(settings.font_size, 24);
        assert!(!settings.auto_run);
        assert_eq!(settings.auto_run_delay, 500);
    }

    #[test]
    fn test_toggle_theme_persists() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();

        toggle_theme(cwd).unwrap();
        assert_eq!(reopen(cwd).config().theme, Theme::Light);

        toggle_theme(cwd).unwrap();
        assert_eq!(reopen(cwd).config().theme, Theme::Dark);
    }
}
