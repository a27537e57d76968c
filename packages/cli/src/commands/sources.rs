//! Syncing fragment files on disk into the playground

use anyhow::Result;
use std::path::Path;
use webplay_editor::Language;
use webplay_workspace::{KeyValueStore, Millis, Playground, RenderSandbox};

/// Load `path` into the fragment for its language.
///
/// Files that are not one of the conventional fragment names are ignored.
/// A language with no open editor gets one. Returns whether the editor set
/// changed.
pub fn sync_file<S, R>(playground: &mut Playground<S, R>, path: &Path, now: Millis) -> Result<bool>
where
    S: KeyValueStore,
    R: RenderSandbox,
{
    let Some(language) = path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(Language::from_file_name)
    else {
        return Ok(false);
    };

    let code = std::fs::read_to_string(path)?;

    let existing = playground
        .editors()
        .by_language(language)
        .map(|fragment| fragment.id.clone());
    let id = match existing {
        Some(id) => id,
        None => playground.add_editor(language, now)?,
    };

    Ok(playground.update_code(&id, code, now))
}

/// Sync every conventional fragment file present in `dir`
pub fn sync_dir<S, R>(playground: &mut Playground<S, R>, dir: &Path, now: Millis) -> Result<usize>
where
    S: KeyValueStore,
    R: RenderSandbox,
{
    let mut changed = 0;
    for language in Language::ALL {
        let path = dir.join(language.spec().file_name);
        if path.is_file() && sync_file(playground, &path, now)? {
            changed += 1;
        }
    }
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use webplay_workspace::{MemoryStore, NullSandbox};

    #[test]
    fn test_sync_updates_matching_fragment() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("style.css"), "p { color: red }").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let mut playground = Playground::open(MemoryStore::new(), NullSandbox, 0);
        let changed = sync_dir(&mut playground, dir.path(), 10).unwrap();

        assert_eq!(changed, 1);
        assert_eq!(playground.editors().code_for(Language::Css), "p { color: red }");
        assert!(!sync_file(&mut playground, &dir.path().join("notes.txt"), 20).unwrap());
    }

    #[test]
    fn test_sync_adds_missing_editor() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.js");
        std::fs::write(&path, "console.log(1)").unwrap();

        let mut playground = Playground::open(MemoryStore::new(), NullSandbox, 0);
        playground.remove_editor("js", 1).unwrap();

        assert!(sync_file(&mut playground, &path, 5).unwrap());
        let js = playground.editors().by_language(Language::Js).unwrap();
        assert_eq!(js.code, "console.log(1)");
        assert_eq!(js.id, "js-5");
    }
}
