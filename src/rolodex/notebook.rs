//! # Notebook
//!
//! An ordered list of [`Note`]s addressed by **1-based positions**. Positions are not
//! stable ids: removing the note at position `k` moves every later note down by one.
//! Every operation that takes a position, and every [`NoteView`] handed back, uses the
//! same 1-based numbering.
//!
//! Stored as a JSON array of `{"note": ..., "tags": [...]}` objects in position order.

use crate::error::{Result, RolodexError};
use crate::note::{Note, NoteView, Tag};
use crate::store::{Collection, DataStore};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notebook {
    notes: Vec<Note>,
}

impl Notebook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Appends a note, returning its position and the stored note.
    pub fn add_note(&mut self, text: impl Into<String>) -> (usize, &Note) {
        self.notes.push(Note::new(text));
        let position = self.notes.len();
        (position, &self.notes[position - 1])
    }

    pub fn remove_note(&mut self, position: usize) -> Result<Note> {
        let slot = self.slot(position)?;
        Ok(self.notes.remove(slot))
    }

    /// Overwrites the text at `position`, keeping its tags.
    pub fn change_note(&mut self, position: usize, text: impl Into<String>) -> Result<()> {
        let slot = self.slot(position)?;
        self.notes[slot].text = text.into();
        Ok(())
    }

    pub fn replace_note(&mut self, position: usize, text: impl Into<String>) -> Result<()> {
        self.change_note(position, text)
    }

    /// Appends `"; " + extra` to the text at `position`.
    pub fn update_note(&mut self, position: usize, extra: &str) -> Result<()> {
        let slot = self.slot(position)?;
        let note = &mut self.notes[slot];
        note.text.push_str("; ");
        note.text.push_str(extra);
        Ok(())
    }

    pub fn find_note_by_index(&self, position: usize) -> Result<NoteView> {
        let slot = self.slot(position)?;
        Ok(NoteView::new(position, &self.notes[slot]))
    }

    pub fn find_note_by_subtext(&self, sub: &str) -> Vec<NoteView> {
        let sub = sub.to_lowercase();
        self.views()
            .filter(|(note, _)| note.text.to_lowercase().contains(&sub))
            .map(|(_, view)| view)
            .collect()
    }

    pub fn find_notes_by_tag(&self, tag: &str) -> Vec<NoteView> {
        self.views()
            .filter(|(note, _)| note.has_tag_ignore_case(tag))
            .map(|(_, view)| view)
            .collect()
    }

    pub fn show_notes(&self) -> Vec<NoteView> {
        self.views().map(|(_, view)| view).collect()
    }

    pub fn add_tag(&mut self, position: usize, tag: impl Into<String>) -> Result<()> {
        let slot = self.slot(position)?;
        self.notes[slot].tags.push(Tag::new(tag));
        Ok(())
    }

    /// Removes the first tag exactly equal to `tag` (case-sensitive).
    pub fn remove_tag(&mut self, position: usize, tag: &str) -> Result<()> {
        let slot = self.slot(position)?;
        let tags = &mut self.notes[slot].tags;
        let found = tags.iter().position(|t| t.as_str() == tag).ok_or_else(|| {
            RolodexError::NotFound(format!("Tag '{}' not found on note {}", tag, position))
        })?;
        tags.remove(found);
        Ok(())
    }

    pub fn from_data(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    pub fn to_data(&self) -> &[Note] {
        &self.notes
    }

    pub fn load<S: DataStore>(&mut self, store: &S) -> Result<()> {
        let raw = store.load(Collection::Notes)?;
        let notes: Vec<Note> = serde_json::from_value(raw)?;
        *self = Self::from_data(notes);
        Ok(())
    }

    pub fn save<S: DataStore>(&self, store: &mut S) -> Result<()> {
        let data: Value = serde_json::to_value(self.to_data())?;
        store.save(Collection::Notes, &data)
    }

    fn views(&self) -> impl Iterator<Item = (&Note, NoteView)> + '_ {
        self.notes
            .iter()
            .enumerate()
            .map(|(i, note)| (note, NoteView::new(i + 1, note)))
    }

    fn slot(&self, position: usize) -> Result<usize> {
        if position == 0 || position > self.notes.len() {
            return Err(RolodexError::OutOfRange {
                position,
                len: self.notes.len(),
            });
        }
        Ok(position - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use serde_json::json;

    fn three_notes() -> Notebook {
        let mut book = Notebook::new();
        book.add_note("My first note");
        book.add_note("My second note");
        book.add_note("My third note");
        book
    }

    fn texts(views: &[NoteView]) -> Vec<&str> {
        views.iter().map(|v| v.text.as_str()).collect()
    }

    #[test]
    fn add_note_returns_one_based_position() {
        let mut book = Notebook::new();
        let (pos, note) = book.add_note("hello");
        assert_eq!(pos, 1);
        assert_eq!(note.text, "hello");
        let (pos, _) = book.add_note("again");
        assert_eq!(pos, 2);
    }

    #[test]
    fn update_note_appends_and_keeps_tags() {
        let mut book = Notebook::new();
        book.add_note("My first note");
        book.add_tag(1, "TTT").unwrap();
        book.update_note(1, "extra").unwrap();

        let view = book.find_note_by_index(1).unwrap();
        assert_eq!(book.notes()[0].text, "My first note; extra");
        assert_eq!(view.tags, vec!["TTT"]);
    }

    #[test]
    fn remove_note_shifts_later_positions() {
        let mut book = three_notes();
        let removed = book.remove_note(2).unwrap();
        assert_eq!(removed.text, "My second note");
        assert_eq!(book.len(), 2);
        assert_eq!(book.find_note_by_index(2).unwrap().text, "My third note");
    }

    #[test]
    fn positions_outside_range_fail() {
        let mut book = three_notes();
        for pos in [0, 4, 100] {
            assert!(matches!(
                book.remove_note(pos),
                Err(RolodexError::OutOfRange { position, len: 3 }) if position == pos
            ));
        }
        assert!(matches!(
            book.change_note(0, "x"),
            Err(RolodexError::OutOfRange { .. })
        ));
        assert!(matches!(
            book.update_note(4, "x"),
            Err(RolodexError::OutOfRange { .. })
        ));
        assert!(matches!(
            book.add_tag(4, "x"),
            Err(RolodexError::OutOfRange { .. })
        ));
        assert!(matches!(
            book.remove_tag(4, "x"),
            Err(RolodexError::OutOfRange { .. })
        ));
        assert!(matches!(
            book.find_note_by_index(0),
            Err(RolodexError::OutOfRange { .. })
        ));
        assert_eq!(book.len(), 3);
    }

    #[test]
    fn replace_note_keeps_position_and_tags() {
        let mut book = three_notes();
        book.add_tag(2, "keep").unwrap();
        book.replace_note(2, "Replaced note").unwrap();
        let view = book.find_note_by_index(2).unwrap();
        assert_eq!(view.text, "Replaced note");
        assert_eq!(view.tags, vec!["keep"]);
    }

    #[test]
    fn views_are_capitalized() {
        let mut book = Notebook::new();
        book.add_note("shopping: MILK and Eggs");
        assert_eq!(
            book.find_note_by_index(1).unwrap().text,
            "Shopping: milk and eggs"
        );
    }

    #[test]
    fn subtext_search_ignores_case() {
        let book = three_notes();
        let hits = book.find_note_by_subtext("THIRD");
        assert_eq!(texts(&hits), vec!["My third note"]);
        assert_eq!(hits[0].position, 3);
        assert_eq!(book.find_note_by_subtext("note").len(), 3);
        assert!(book.find_note_by_subtext("fourth").is_empty());
    }

    #[test]
    fn tag_search_ignores_case_and_matches_whole_tags() {
        let mut book = three_notes();
        book.add_tag(1, "BBB").unwrap();
        book.add_tag(2, "bbb").unwrap();
        book.add_tag(3, "BBBB").unwrap();

        let hits = book.find_notes_by_tag("Bbb");
        assert_eq!(texts(&hits), vec!["My first note", "My second note"]);
        assert_eq!(hits[1].tags, vec!["bbb"]);
    }

    #[test]
    fn show_notes_uses_one_based_positions() {
        let book = three_notes();
        let positions: Vec<usize> = book.show_notes().iter().map(|v| v.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }

    #[test]
    fn tags_allow_duplicates_and_remove_first_exact_match() {
        let mut book = three_notes();
        book.add_tag(1, "TTT").unwrap();
        book.add_tag(1, "AAA").unwrap();
        book.add_tag(1, "TTT").unwrap();

        book.remove_tag(1, "TTT").unwrap();
        assert_eq!(book.find_note_by_index(1).unwrap().tags, vec!["AAA", "TTT"]);

        assert!(matches!(
            book.remove_tag(1, "aaa"),
            Err(RolodexError::NotFound(_))
        ));
        assert!(matches!(
            book.remove_tag(2, "AAA"),
            Err(RolodexError::NotFound(_))
        ));
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut book = three_notes();
        book.add_tag(1, "x").unwrap();
        book.add_tag(3, "y").unwrap();
        let mut store = InMemoryStore::new();
        book.save(&mut store).unwrap();

        assert_eq!(
            store.document(Collection::Notes).unwrap(),
            &json!([
                {"note": "My first note", "tags": ["x"]},
                {"note": "My second note", "tags": []},
                {"note": "My third note", "tags": ["y"]}
            ])
        );

        let mut loaded = Notebook::new();
        loaded.load(&store).unwrap();
        assert_eq!(loaded, book);
    }

    #[test]
    fn load_rejects_wrong_shape() {
        let store =
            InMemoryStore::new().with_document(Collection::Notes, json!({"notes": []}));
        let mut book = Notebook::new();
        assert!(matches!(
            book.load(&store),
            Err(RolodexError::Serialization(_))
        ));
    }
}
