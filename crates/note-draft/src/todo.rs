//! Todo Draft List
//!
//! Ordered todo entries keyed by a stable id, so edits and removals never
//! target a neighbour after the list shifts.

use serde::{Deserialize, Serialize};

/// Stable handle of a todo entry within one list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TodoId(u32);

/// A single todo sub-entry of a note draft
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoDraftItem {
    pub title: String,
    pub is_complete: bool,
}

impl TodoDraftItem {
    pub fn new(title: impl Into<String>, is_complete: bool) -> Self {
        Self {
            title: title.into(),
            is_complete,
        }
    }

    /// Copy of this item carrying the new field value
    pub fn with(&self, field: TodoField) -> Self {
        let mut next = self.clone();
        match field {
            TodoField::Title(title) => next.title = title,
            TodoField::IsComplete(done) => next.is_complete = done,
        }
        next
    }
}

/// Editable field of a todo entry, with its new value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoField {
    Title(String),
    IsComplete(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TodoEntry {
    id: TodoId,
    item: TodoDraftItem,
}

/// Ordered todo entries. Ids are handed out from a counter and never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    entries: Vec<TodoEntry>,
    next_id: u32,
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoList {
    /// Initial state: exactly one blank entry
    pub fn new() -> Self {
        let mut list = Self::empty();
        list.push_blank();
        list
    }

    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Back to a single blank entry. The id counter keeps running.
    pub fn reset_to_blank(&mut self) {
        self.entries.clear();
        self.push_blank();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a blank `{ title: "", is_complete: false }` entry
    pub fn push_blank(&mut self) -> TodoId {
        self.push(TodoDraftItem::default())
    }

    pub fn push(&mut self, item: TodoDraftItem) -> TodoId {
        let id = TodoId(self.next_id);
        self.next_id += 1;
        self.entries.push(TodoEntry { id, item });
        id
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoDraftItem> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.item)
    }

    pub fn position(&self, id: TodoId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn id_at(&self, index: usize) -> Option<TodoId> {
        self.entries.get(index).map(|e| e.id)
    }

    /// Replace the entry with a copy carrying `field`. Returns false for unknown ids.
    pub fn update(&mut self, id: TodoId, field: TodoField) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.item = entry.item.with(field);
                true
            }
            None => false,
        }
    }

    /// Positional update; out-of-range indices are a silent no-op
    pub fn update_at(&mut self, index: usize, field: TodoField) -> bool {
        match self.id_at(index) {
            Some(id) => self.update(id, field),
            None => false,
        }
    }

    pub fn remove(&mut self, id: TodoId) -> Option<TodoDraftItem> {
        let index = self.position(id)?;
        Some(self.entries.remove(index).item)
    }

    /// Positional removal; later entries shift down by one
    pub fn remove_at(&mut self, index: usize) -> Option<TodoDraftItem> {
        if index < self.entries.len() {
            Some(self.entries.remove(index).item)
        } else {
            None
        }
    }

    /// Entries in order, paired with their ids
    pub fn iter(&self) -> impl Iterator<Item = (TodoId, &TodoDraftItem)> {
        self.entries.iter().map(|e| (e.id, &e.item))
    }

    pub fn ids(&self) -> Vec<TodoId> {
        self.entries.iter().map(|e| e.id).collect()
    }

    pub fn items(&self) -> Vec<TodoDraftItem> {
        self.entries.iter().map(|e| e.item.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(list: &TodoList) -> Vec<String> {
        list.iter().map(|(_, item)| item.title.clone()).collect()
    }

    #[test]
    fn test_new_list_has_one_blank_entry() {
        let list = TodoList::new();
        assert_eq!(list.len(), 1);
        assert_eq!(list.items(), vec![TodoDraftItem::default()]);
    }

    #[test]
    fn test_ids_are_not_reused_after_removal() {
        let mut list = TodoList::new();
        let first = list.id_at(0).unwrap();
        list.remove(first);
        let next = list.push_blank();
        assert_ne!(first, next);
        assert!(next > first);
    }

    #[test]
    fn test_reset_to_blank_keeps_counter() {
        let mut list = TodoList::new();
        let old = list.push(TodoDraftItem::new("a", true));
        list.reset_to_blank();

        assert_eq!(list.items(), vec![TodoDraftItem::default()]);
        let fresh = list.id_at(0).unwrap();
        assert!(fresh > old);
        assert!(list.get(old).is_none());
    }

    #[test]
    fn test_update_by_id_survives_shift() {
        let mut list = TodoList::empty();
        let a = list.push(TodoDraftItem::new("a", false));
        let b = list.push(TodoDraftItem::new("b", false));
        list.remove(a);

        assert!(list.update(b, TodoField::IsComplete(true)));
        assert_eq!(list.get(b), Some(&TodoDraftItem::new("b", true)));
        assert_eq!(list.position(b), Some(0));
    }

    #[test]
    fn test_update_at_out_of_range_is_noop() {
        let mut list = TodoList::new();
        let before = list.clone();
        assert!(!list.update_at(3, TodoField::Title("x".into())));
        assert_eq!(list, before);
    }

    #[test]
    fn test_remove_at_shifts_later_entries() {
        let mut list = TodoList::empty();
        for t in ["one", "two", "three"] {
            list.push(TodoDraftItem::new(t, false));
        }
        assert_eq!(list.remove_at(1), Some(TodoDraftItem::new("two", false)));
        assert_eq!(titles(&list), vec!["one", "three"]);
        assert_eq!(list.remove_at(5), None);
    }

    #[test]
    fn test_removing_last_entry_leaves_empty_list() {
        let mut list = TodoList::new();
        list.remove_at(0);
        assert!(list.is_empty());
    }
}
