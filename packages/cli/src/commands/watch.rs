//! Live preview: watch the fragment files and recompile after a quiet period.
//!
//! The playground owns the debounce deadline. This loop only sleeps until
//! that deadline and feeds file events in, so timing behaves the same here
//! as it does in the browser build.

use crate::commands::open_playground;
use crate::commands::sources::{sync_dir, sync_file};
use crate::config::Config;
use crate::preview::{PreviewFile, PREVIEW_FILE_NAME};
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use notify::event::ModifyKind;
use notify::{EventKind, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use webplay_workspace::{wall_clock_millis, FileStore, Millis, Playground};

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Where to write the preview document (default: <outDir>/webplay-preview.html)
    #[arg(short, long)]
    pub preview: Option<String>,
}

pub fn watch(args: WatchArgs, cwd: &str) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(args, cwd))
}

async fn run(args: WatchArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let src_dir = config.get_src_dir(cwd);
    if !src_dir.exists() {
        return Err(anyhow!("Source directory does not exist: {:?}", src_dir));
    }

    let preview_path = match args.preview {
        Some(path) => PathBuf::from(cwd).join(path),
        None => config.get_out_dir(cwd).join(PREVIEW_FILE_NAME),
    };
    if let Some(parent) = preview_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut playground = open_playground(&config, cwd, PreviewFile::new(preview_path.clone()))?;
    sync_dir(&mut playground, &src_dir, wall_clock_millis())?;
    playground.run();

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut watcher = notify::recommended_watcher(move |res| {
        let _ = tx.send(res);
    })?;
    watcher.watch(&src_dir, RecursiveMode::NonRecursive)?;

    println!("{}", "👀 Watching for changes...".bright_blue().bold());
    println!("  source   {}", src_dir.display());
    println!("  preview  {}", preview_path.display());
    println!("  Press {} to stop", "Ctrl-C".bright_white());

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        let wait = playground
            .next_deadline()
            .map(|deadline| deadline.saturating_sub(wall_clock_millis()));

        tokio::select! {
            Some(result) = rx.recv() => match result {
                Ok(event) if is_content_change(&event.kind) => {
                    for path in &event.paths {
                        apply_change(&mut playground, path, wall_clock_millis());
                    }
                }
                Ok(event) => debug!(kind = ?event.kind, "ignored watch event"),
                Err(e) => warn!(error = %e, "watch error"),
            },
            _ = sleep_for(wait) => {
                if playground.tick(wall_clock_millis()) {
                    println!("  {} Recompiled ({} bytes)", "✓".green(), playground.export().body.len());
                }
            }
            _ = &mut shutdown => {
                info!("shutting down watcher");
                break;
            }
        }
    }

    playground.close();
    println!();
    println!("{}", "Stopped watching".dimmed());
    Ok(())
}

fn apply_change(playground: &mut Playground<FileStore, PreviewFile>, path: &Path, now: Millis) {
    if !path.is_file() {
        return;
    }
    match sync_file(playground, path, now) {
        Ok(true) => debug!(path = %path.display(), "fragment updated"),
        Ok(false) => {}
        Err(e) => warn!(path = %path.display(), error = %e, "failed to sync fragment"),
    }
}

/// File content or name changes. Metadata-only events (touch, chmod) don't
/// count.
fn is_content_change(kind: &EventKind) -> bool {
    match kind {
        EventKind::Create(_) => true,
        EventKind::Modify(ModifyKind::Metadata(_)) => false,
        EventKind::Modify(_) => true,
        _ => false,
    }
}

async fn sleep_for(wait: Option<Millis>) {
    match wait {
        Some(ms) => tokio::time::sleep(Duration::from_millis(ms)).await,
        None => std::future::pending().await,
    }
}
