pub mod compile;
pub mod edit;
pub mod init;
pub mod list;
pub mod settings;
pub mod sources;
pub mod watch;

pub use compile::{compile, export, CompileArgs, ExportArgs};
pub use edit::{add, remove, AddArgs, RemoveArgs};
pub use init::{init, InitArgs};
pub use list::list;
pub use settings::{settings, toggle_layout, toggle_theme, SettingsArgs};
pub use watch::{watch, WatchArgs};

use crate::config::Config;
use anyhow::Result;
use webplay_workspace::{wall_clock_millis, FileStore, Playground, RenderSandbox};

/// Open the playground persisted under the project's store directory
pub(crate) fn open_playground<R: RenderSandbox>(
    config: &Config,
    cwd: &str,
    sandbox: R,
) -> Result<Playground<FileStore, R>> {
    let store = FileStore::open(config.get_store_dir(cwd))?;
    Ok(Playground::open(store, sandbox, wall_clock_millis())
        .with_compile_options(config.compiler_options.clone()))
}
