use crate::commands::open_playground;
use crate::config::Config;
use anyhow::Result;
use colored::Colorize;
use webplay_workspace::NullSandbox;

pub fn list(cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let playground = open_playground(&config, cwd, NullSandbox)?;

    println!("{}", "Editors".bright_blue().bold());
    for fragment in playground.editors() {
        println!(
            "  {:<20} {:<6} {:>7} bytes  {}",
            fragment.id.bright_white(),
            fragment.language.to_string().cyan(),
            fragment.code.len(),
            fragment.title.dimmed()
        );
    }

    let app = playground.config();
    println!();
    println!("{}", "Settings".bright_blue().bold());
    println!("  font size       {}", app.settings.font_size);
    println!("  auto-run        {}", app.settings.auto_run);
    println!("  auto-run delay  {} ms", app.settings.auto_run_delay);
    println!("  theme           {}", app.theme.as_str());
    println!("  layout          {}", app.layout.as_str());

    Ok(())
}
