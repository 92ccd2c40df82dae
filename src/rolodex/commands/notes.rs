use crate::commands::{CmdMessage, CmdResult, MIN_NOTE_LEN};
use crate::error::{Result, RolodexError};
use crate::notebook::Notebook;
use crate::store::DataStore;
use log::info;

/// Saves the edited copy, and only then makes it the live notebook.
fn commit<S: DataStore>(notebook: &mut Notebook, edited: Notebook, store: &mut S) -> Result<()> {
    edited.save(store)?;
    *notebook = edited;
    Ok(())
}

fn check_note_text(text: &str) -> Result<&str> {
    if text.trim().is_empty() || text.chars().count() < MIN_NOTE_LEN {
        return Err(RolodexError::Validation(format!(
            "Note cannot be empty and must be at least {} characters long",
            MIN_NOTE_LEN
        )));
    }
    Ok(text)
}

pub fn add<S: DataStore>(notebook: &mut Notebook, store: &mut S, text: &str) -> Result<CmdResult> {
    let text = check_note_text(text)?;
    let mut edited = notebook.clone();
    let (position, _) = edited.add_note(text);
    commit(notebook, edited, store)?;
    info!("Created note {}", position);
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Note with id {} created successfully",
        position
    ))))
}

pub fn update<S: DataStore>(
    notebook: &mut Notebook,
    store: &mut S,
    position: usize,
    text: &str,
) -> Result<CmdResult> {
    let mut edited = notebook.clone();
    edited.update_note(position, text)?;
    commit(notebook, edited, store)?;
    info!("Appended to note {}", position);
    Ok(CmdResult::default().with_message(CmdMessage::success("Note successfully updated")))
}

pub fn replace<S: DataStore>(
    notebook: &mut Notebook,
    store: &mut S,
    position: usize,
    text: &str,
) -> Result<CmdResult> {
    let text = check_note_text(text)?;
    let mut edited = notebook.clone();
    edited.replace_note(position, text)?;
    commit(notebook, edited, store)?;
    info!("Replaced note {}", position);
    Ok(CmdResult::default().with_message(CmdMessage::success("Note successfully replaced")))
}

pub fn remove<S: DataStore>(
    notebook: &mut Notebook,
    store: &mut S,
    position: usize,
) -> Result<CmdResult> {
    let mut edited = notebook.clone();
    edited.remove_note(position)?;
    commit(notebook, edited, store)?;
    info!("Removed note {}", position);
    Ok(CmdResult::default().with_message(CmdMessage::success("Note successfully removed")))
}

pub fn by_index(notebook: &Notebook, position: usize) -> Result<CmdResult> {
    let view = notebook.find_note_by_index(position)?;
    Ok(CmdResult::default().with_listed_notes(vec![view]))
}

pub fn by_text(notebook: &Notebook, text: &str) -> Result<CmdResult> {
    if text.trim().chars().count() < MIN_NOTE_LEN {
        return Err(RolodexError::Validation(format!(
            "Search text must be at least {} characters long",
            MIN_NOTE_LEN
        )));
    }

    let hits = notebook.find_note_by_subtext(text);
    if hits.is_empty() {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::info(format!("No matches found for: '{}'", text))));
    }
    Ok(CmdResult::default().with_listed_notes(hits))
}

pub fn by_tag(notebook: &Notebook, tag: &str) -> Result<CmdResult> {
    let hits = notebook.find_notes_by_tag(tag);
    if hits.is_empty() {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::info(format!("No notes tagged '{}'", tag))));
    }
    Ok(CmdResult::default().with_listed_notes(hits))
}

pub fn show_all(notebook: &Notebook) -> Result<CmdResult> {
    if notebook.is_empty() {
        return Ok(
            CmdResult::default().with_message(CmdMessage::info("No notes have been added yet"))
        );
    }
    Ok(CmdResult::default().with_listed_notes(notebook.show_notes()))
}

pub fn add_tag<S: DataStore>(
    notebook: &mut Notebook,
    store: &mut S,
    position: usize,
    tag: &str,
) -> Result<CmdResult> {
    if tag.trim().is_empty() {
        return Err(RolodexError::Validation("Tag cannot be empty".to_string()));
    }
    let mut edited = notebook.clone();
    edited.add_tag(position, tag)?;
    commit(notebook, edited, store)?;
    info!("Tagged note {} with {}", position, tag);
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Tag '{}' added to note {}",
        tag, position
    ))))
}

pub fn remove_tag<S: DataStore>(
    notebook: &mut Notebook,
    store: &mut S,
    position: usize,
    tag: &str,
) -> Result<CmdResult> {
    let mut edited = notebook.clone();
    edited.remove_tag(position, tag)?;
    commit(notebook, edited, store)?;
    info!("Removed tag {} from note {}", tag, position);
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Tag '{}' removed from note {}",
        tag, position
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn setup() -> (Notebook, InMemoryStore) {
        let mut notebook = Notebook::new();
        let mut store = InMemoryStore::new();
        add(&mut notebook, &mut store, "My first note").unwrap();
        add(&mut notebook, &mut store, "My second note").unwrap();
        (notebook, store)
    }

    fn stored(store: &InMemoryStore) -> Notebook {
        let mut notebook = Notebook::new();
        notebook.load(store).unwrap();
        notebook
    }

    #[test]
    fn add_reports_position_and_saves() {
        let (mut notebook, mut store) = setup();
        let result = add(&mut notebook, &mut store, "third").unwrap();
        assert_eq!(
            result.messages[0].content,
            "Note with id 3 created successfully"
        );
        assert_eq!(stored(&store).len(), 3);
    }

    #[test]
    fn add_rejects_short_or_blank_text() {
        let mut notebook = Notebook::new();
        let mut store = InMemoryStore::new();
        for text in ["", "ab", "     "] {
            assert!(matches!(
                add(&mut notebook, &mut store, text),
                Err(RolodexError::Validation(_))
            ));
        }
        assert!(notebook.is_empty());
    }

    #[test]
    fn update_and_replace_persist() {
        let (mut notebook, mut store) = setup();
        update(&mut notebook, &mut store, 1, "extra").unwrap();
        replace(&mut notebook, &mut store, 2, "brand new").unwrap();
        let saved = stored(&store);
        assert_eq!(saved.notes()[0].text, "My first note; extra");
        assert_eq!(saved.notes()[1].text, "brand new");
    }

    #[test]
    fn remove_out_of_range() {
        let (mut notebook, mut store) = setup();
        assert!(matches!(
            remove(&mut notebook, &mut store, 3),
            Err(RolodexError::OutOfRange {
                position: 3,
                len: 2
            })
        ));
        remove(&mut notebook, &mut store, 1).unwrap();
        assert_eq!(
            by_index(&notebook, 1).unwrap().listed_notes[0].text,
            "My second note"
        );
    }

    #[test]
    fn text_search_needs_three_characters() {
        let (notebook, _) = setup();
        assert!(matches!(
            by_text(&notebook, "my"),
            Err(RolodexError::Validation(_))
        ));
        assert_eq!(by_text(&notebook, "SECOND").unwrap().listed_notes.len(), 1);
        let none = by_text(&notebook, "xyz").unwrap();
        assert!(none.listed_notes.is_empty());
        assert_eq!(none.messages.len(), 1);
    }

    #[test]
    fn tagging_round_trip() {
        let (mut notebook, mut store) = setup();
        add_tag(&mut notebook, &mut store, 2, "work").unwrap();
        assert_eq!(by_tag(&notebook, "WORK").unwrap().listed_notes[0].position, 2);

        assert!(matches!(
            remove_tag(&mut notebook, &mut store, 2, "home"),
            Err(RolodexError::NotFound(_))
        ));
        remove_tag(&mut notebook, &mut store, 2, "work").unwrap();
        assert!(stored(&store).notes()[1].tags.is_empty());
        assert!(by_tag(&notebook, "work").unwrap().listed_notes.is_empty());

        assert!(matches!(
            add_tag(&mut notebook, &mut store, 1, " "),
            Err(RolodexError::Validation(_))
        ));
    }

    #[test]
    fn show_all_lists_everything() {
        let (notebook, _) = setup();
        let result = show_all(&notebook).unwrap();
        let positions: Vec<usize> = result.listed_notes.iter().map(|n| n.position).collect();
        assert_eq!(positions, vec![1, 2]);

        let empty = show_all(&Notebook::new()).unwrap();
        assert_eq!(empty.messages[0].content, "No notes have been added yet");
    }

    #[test]
    fn failed_saves_leave_the_notebook_untouched() {
        let (mut notebook, _) = setup();
        add_tag(&mut notebook, &mut InMemoryStore::new(), 1, "work").unwrap();
        let before = notebook.clone();
        let mut store = InMemoryStore::new().read_only();

        assert!(matches!(
            add(&mut notebook, &mut store, "third note"),
            Err(RolodexError::Io(_))
        ));
        assert!(update(&mut notebook, &mut store, 1, "extra").is_err());
        assert!(replace(&mut notebook, &mut store, 1, "brand new").is_err());
        assert!(remove(&mut notebook, &mut store, 1).is_err());
        assert!(add_tag(&mut notebook, &mut store, 2, "home").is_err());
        assert!(remove_tag(&mut notebook, &mut store, 1, "work").is_err());

        assert_eq!(notebook, before);
        assert_eq!(show_all(&notebook).unwrap().listed_notes.len(), 2);
    }
}
