//! Note Draft
//!
//! Unsaved note fields held by the composer while the form is open.

use std::fmt;

/// Text field of a draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Description,
    Body,
}

impl DraftField {
    pub const ALL: [DraftField; 3] = [DraftField::Title, DraftField::Description, DraftField::Body];

    /// Multipart field name
    pub fn name(self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::Description => "description",
            DraftField::Body => "body",
        }
    }
}

/// Selected image, already read into memory
#[derive(Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageAttachment {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

// Keep raw bytes out of debug logs
impl fmt::Debug for ImageAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageAttachment")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub description: String,
    pub body: String,
    pub image: Option<ImageAttachment>,
}

impl NoteDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Description => &self.description,
            DraftField::Body => &self.body,
        }
    }

    /// Plain assignment, no validation
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Title => self.title = value,
            DraftField::Description => self.description = value,
            DraftField::Body => self.body = value,
        }
    }

    /// Required text fields that are still blank
    pub fn missing_fields(&self) -> Vec<DraftField> {
        DraftField::ALL
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_touches_only_named_field() {
        let mut draft = NoteDraft::default();
        draft.set(DraftField::Description, "Weekly list".into());
        assert_eq!(draft.title, "");
        assert_eq!(draft.description, "Weekly list");
        assert_eq!(draft.body, "");
    }

    #[test]
    fn test_missing_fields_ignores_whitespace_only_values() {
        let mut draft = NoteDraft::default();
        draft.set(DraftField::Title, "Groceries".into());
        draft.set(DraftField::Body, "   ".into());
        assert_eq!(draft.missing_fields(), vec![DraftField::Description, DraftField::Body]);
    }

    #[test]
    fn test_attachment_debug_hides_bytes() {
        let image = ImageAttachment::new("cat.png", "image/png", vec![1, 2, 3]);
        let shown = format!("{:?}", image);
        assert!(shown.contains("size: 3"));
        assert!(!shown.contains("[1, 2, 3]"));
    }
}
