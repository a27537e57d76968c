//! Integration tests for editor crate

use webplay_editor::{CoalescePolicy, EditSession, EditorError, EditorSet, Fragment, Language};

#[test]
fn test_session_lifecycle() {
    let mut session = EditSession::with_policy(EditorSet::defaults(), CoalescePolicy::per_keystroke());

    // Initial state
    assert_eq!(session.current().len(), 3);
    assert!(!session.can_undo());

    // Edit, remove, add
    assert!(session.update_code("html", "<p>hi</p>", 0));
    assert!(session.remove_editor("css").unwrap());
    let css = session.add_editor(Language::Css, 100).unwrap();

    assert_eq!(session.history().len(), 4);
    assert_eq!(session.current().ids().collect::<Vec<_>>(), vec!["html", "js", css.as_str()]);

    // Walk all the way back
    while session.undo() {}
    assert_eq!(*session.current(), EditorSet::defaults());

    // And forward again
    while session.redo() {}
    assert_eq!(session.current().get(&css).unwrap().code, "/* New CSS code here */");
}

#[test]
fn test_conflicts_are_reported_without_state_change() -> anyhow::Result<()> {
    let single = EditorSet::from_fragments(vec![Fragment::scaffold(Language::Html)])?;
    let mut session = EditSession::new(single.clone());

    let err = session.add_editor(Language::Html, 1).unwrap_err();
    assert!(matches!(err, EditorError::LanguageExists(Language::Html)));

    let err = session.remove_editor("html").unwrap_err();
    assert!(matches!(err, EditorError::LastEditor));

    assert_eq!(*session.current(), single);
    assert_eq!(session.history().len(), 1);
    Ok(())
}

#[test]
fn test_snapshot_serialization() -> anyhow::Result<()> {
    let mut session = EditSession::default();
    session.update_code("js", "console.log(1)", 0);

    let json = session.current().to_json()?;
    let restored = EditorSet::from_json(&json)?;

    assert_eq!(&restored, session.current());
    Ok(())
}
