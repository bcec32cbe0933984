//! Create-Note Multipart Payload
//!
//! Target-independent list of form parts. The browser layer turns it into
//! a `FormData` body.

use crate::draft::{DraftField, ImageAttachment, NoteDraft};
use crate::todo::TodoList;

/// Multipart field carrying the note's owner
pub const USER_FIELD: &str = "user";
pub const PINNED_FIELD: &str = "isPinned";
pub const IMAGE_FIELD: &str = "image";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadValue {
    Text(String),
    File(ImageAttachment),
}

/// Ordered multipart parts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartPayload {
    parts: Vec<(String, PayloadValue)>,
}

impl MultipartPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.parts.push((name.into(), PayloadValue::Text(value.into())));
    }

    pub fn push_file(&mut self, name: impl Into<String>, file: ImageAttachment) {
        self.parts.push((name.into(), PayloadValue::File(file)));
    }

    pub fn parts(&self) -> &[(String, PayloadValue)] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// First text value stored under `name`
    pub fn text(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|(n, v)| match v {
            PayloadValue::Text(t) if n == name => Some(t.as_str()),
            _ => None,
        })
    }

    pub fn file(&self, name: &str) -> Option<&ImageAttachment> {
        self.parts.iter().find_map(|(n, v)| match v {
            PayloadValue::File(f) if n == name => Some(f),
            _ => None,
        })
    }

    pub fn names(&self) -> Vec<&str> {
        self.parts.iter().map(|(n, _)| n.as_str()).collect()
    }
}

pub fn todo_field_name(index: usize, field: &str) -> String {
    format!("todoList[{}][{}]", index, field)
}

/// Flatten a draft into the fields `POST /notes/create` expects.
///
/// Todos are numbered by their current position, not by their id.
pub fn build_create_note_payload(draft: &NoteDraft, todos: &TodoList, user_id: &str) -> MultipartPayload {
    let mut payload = MultipartPayload::new();
    for field in DraftField::ALL {
        payload.push_text(field.name(), draft.get(field));
    }
    payload.push_text(USER_FIELD, user_id);
    payload.push_text(PINNED_FIELD, false.to_string());
    if let Some(image) = &draft.image {
        payload.push_file(IMAGE_FIELD, image.clone());
    }
    for (index, (_, todo)) in todos.iter().enumerate() {
        payload.push_text(todo_field_name(index, "title"), todo.title.as_str());
        payload.push_text(todo_field_name(index, "isComplete"), todo.is_complete.to_string());
    }
    payload
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::TodoDraftItem;

    #[test]
    fn test_todos_numbered_by_position_after_removal() {
        let mut todos = TodoList::empty();
        let first = todos.push(TodoDraftItem::new("drop me", false));
        todos.push(TodoDraftItem::new("keep", true));
        todos.remove(first);

        let payload = build_create_note_payload(&NoteDraft::default(), &todos, "u1");
        assert_eq!(payload.text("todoList[0][title]"), Some("keep"));
        assert_eq!(payload.text("todoList[0][isComplete]"), Some("true"));
        assert_eq!(payload.text("todoList[1][title]"), None);
    }

    #[test]
    fn test_image_part_only_when_selected() {
        let todos = TodoList::empty();
        let mut draft = NoteDraft::default();
        let without = build_create_note_payload(&draft, &todos, "u1");
        assert!(without.file(IMAGE_FIELD).is_none());
        assert!(!without.names().contains(&IMAGE_FIELD));

        draft.image = Some(ImageAttachment::new("a.jpg", "image/jpeg", vec![0xff]));
        let with = build_create_note_payload(&draft, &todos, "u1");
        assert_eq!(with.file(IMAGE_FIELD).map(|f| f.file_name.as_str()), Some("a.jpg"));
    }

    #[test]
    fn test_empty_todo_list_emits_no_todo_fields() {
        let payload = build_create_note_payload(&NoteDraft::default(), &TodoList::empty(), "u1");
        assert!(payload.names().iter().all(|n| !n.starts_with("todoList")));
        assert_eq!(payload.len(), 5);
    }
}
