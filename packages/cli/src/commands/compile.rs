use crate::commands::open_playground;
use crate::commands::sources::sync_dir;
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use webplay_workspace::{wall_clock_millis, NullSandbox};

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Read index.html / style.css / script.js from the source directory first
    #[arg(long)]
    pub sync: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,
}

pub fn compile(args: CompileArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut playground = open_playground(&config, cwd, NullSandbox)?;

    if args.sync {
        let src_dir = config.get_src_dir(cwd);
        if !src_dir.exists() {
            return Err(anyhow!("Source directory does not exist: {:?}", src_dir));
        }
        let changed = sync_dir(&mut playground, &src_dir, wall_clock_millis())?;
        if !args.stdout {
            println!("  {} Synced {} fragment file(s)", "✓".green(), changed);
        }
    }

    playground.run();

    if args.stdout {
        print!("{}", playground.export().body);
        playground.close();
        return Ok(());
    }

    let out_dir = out_dir_for(&config, cwd, args.out_dir);
    std::fs::create_dir_all(&out_dir)?;
    let path = playground.export().write_to(&out_dir)?;
    playground.close();

    println!("  {} Compiled → {}", "✓".green(), path.display());
    Ok(())
}

/// Compile the stored editors and write `webplay-project.html`
pub fn export(args: ExportArgs, cwd: &str) -> Result<()> {
    compile(
        CompileArgs {
            stdout: false,
            sync: false,
            out_dir: args.out_dir,
        },
        cwd,
    )
}

fn out_dir_for(config: &Config, cwd: &str, override_dir: Option<String>) -> PathBuf {
    match override_dir {
        Some(dir) => PathBuf::from(cwd).join(dir),
        None => config.get_out_dir(cwd),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_writes_export_file() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();
        std::fs::write(dir.path().join("index.html"), "<p>from disk</p>").unwrap();

        compile(
            CompileArgs {
                stdout: false,
                sync: true,
                out_dir: Some("dist".to_string()),
            },
            cwd,
        )
        .unwrap();

        let html = std::fs::read_to_string(dir.path().join("dist/webplay-project.html")).unwrap();
        assert!(html.contains("<p>from disk</p>"));
    }

    #[test]
    fn test_export_uses_stored_editors() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();

        export(ExportArgs { out_dir: None }, cwd).unwrap();

        let html = std::fs::read_to_string(dir.path().join("webplay-project.html")).unwrap();
        assert!(html.contains("Welcome to WebPlay Studio"));
    }
}
