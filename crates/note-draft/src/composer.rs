//! Note Composer
//!
//! State behind the "Add New Note" form and the create-note submission flow.
//!
//! Submission is split in two synchronous halves around the network call:
//! [`NoteComposer::begin_submit`] checks the session, raises `submitting` and
//! builds the payload; [`NoteComposer::finish_submit`] lowers `submitting` and
//! resets the draft only on success. [`submit_note`] drives both halves with
//! the gateway and UI effects supplied by the caller.

use std::cell::RefCell;

use async_trait::async_trait;
use thiserror::Error;

use crate::draft::{DraftField, ImageAttachment, NoteDraft};
use crate::error::ApiError;
use crate::payload::{build_create_note_payload, MultipartPayload};
use crate::session::Session;
use crate::todo::{TodoDraftItem, TodoField, TodoId, TodoList};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("you must be logged in to add notes")]
    NotAuthenticated,
    #[error("a submission is already in progress")]
    AlreadySubmitting,
    #[error("required field is empty: {0}")]
    MissingField(String),
    /// The form was unmounted before the flow could touch it
    #[error("the note form is no longer open")]
    FormClosed,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCreated {
    pub user_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeStatus {
    Success,
    Error,
    Info,
}

/// Transient user-visible message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub status: NoticeStatus,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>, status: NoticeStatus) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status,
        }
    }

    pub fn note_added() -> Self {
        Self::new(
            "Note added",
            "Your new note has been successfully added.",
            NoticeStatus::Success,
        )
    }
}

/// Remote "create note" endpoint
#[async_trait(?Send)]
pub trait NoteGateway {
    async fn create_note(&self, payload: MultipartPayload) -> Result<(), ApiError>;
}

/// Shared mutable home of a composer (a signal in the UI, a `RefCell` in tests).
///
/// Returns `None` when the composer no longer exists.
pub trait ComposerCell {
    fn with_composer<R>(&self, f: impl FnOnce(&mut NoteComposer) -> R) -> Option<R>;
}

impl ComposerCell for RefCell<NoteComposer> {
    fn with_composer<R>(&self, f: impl FnOnce(&mut NoteComposer) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Side effects the form performs around a submission
pub trait FormEffects {
    fn notify(&self, notice: Notice);
    /// Leave the form for the user's notes listing
    fn show_notes(&self, user_id: &str);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteComposer {
    draft: NoteDraft,
    todos: TodoList,
    submitting: bool,
}

impl NoteComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &NoteDraft {
        &self.draft
    }

    pub fn todos(&self) -> &TodoList {
        &self.todos
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn update_field(&mut self, field: DraftField, value: String) {
        self.draft.set(field, value);
    }

    pub fn add_todo(&mut self) -> TodoId {
        self.todos.push_blank()
    }

    pub fn update_todo(&mut self, id: TodoId, field: TodoField) -> bool {
        self.todos.update(id, field)
    }

    /// Positional edit; out-of-range is a no-op returning false
    pub fn update_todo_at(&mut self, index: usize, field: TodoField) -> bool {
        self.todos.update_at(index, field)
    }

    pub fn remove_todo(&mut self, id: TodoId) -> Option<TodoDraftItem> {
        self.todos.remove(id)
    }

    pub fn remove_todo_at(&mut self, index: usize) -> Option<TodoDraftItem> {
        self.todos.remove_at(index)
    }

    /// Replaces any previous selection; `None` clears it
    pub fn select_image(&mut self, image: Option<ImageAttachment>) {
        self.draft.image = image;
    }

    /// Back to the mount state: blank fields, one blank todo, no image
    pub fn reset(&mut self) {
        self.draft = NoteDraft::default();
        self.todos.reset_to_blank();
    }

    /// Validate, raise `submitting` and build the request body.
    ///
    /// Nothing changes when this returns an error.
    pub fn begin_submit(&mut self, session: &Session) -> Result<(MultipartPayload, String), SubmitError> {
        let user = session.user().ok_or(SubmitError::NotAuthenticated)?;
        if self.submitting {
            return Err(SubmitError::AlreadySubmitting);
        }
        if let Some(field) = self.draft.missing_fields().first() {
            return Err(SubmitError::MissingField(field.name().to_string()));
        }
        if let Some(index) = self.todos.iter().position(|(_, t)| t.title.trim().is_empty()) {
            return Err(SubmitError::MissingField(format!("todoList[{}][title]", index)));
        }

        let payload = build_create_note_payload(&self.draft, &self.todos, &user.user_id);
        self.submitting = true;
        Ok((payload, user.user_id.clone()))
    }

    /// Lower `submitting`; reset the draft only if the call succeeded
    pub fn finish_submit(&mut self, result: &Result<(), ApiError>) {
        self.submitting = false;
        if result.is_ok() {
            self.reset();
        }
    }
}

/// Run one create-note submission end to end.
///
/// At most one gateway call is made. On success the draft is reset, one
/// success notice is emitted and the notes listing is requested. On failure
/// the draft is kept and an error notice describes what went wrong.
pub async fn submit_note<C, G, E>(
    cell: &C,
    session: &Session,
    gateway: &G,
    effects: &E,
) -> Result<NoteCreated, SubmitError>
where
    C: ComposerCell + ?Sized,
    G: NoteGateway + ?Sized,
    E: FormEffects + ?Sized,
{
    let begun = cell
        .with_composer(|c| c.begin_submit(session))
        .unwrap_or(Err(SubmitError::FormClosed));
    let (payload, user_id) = match begun {
        Ok(ready) => ready,
        Err(SubmitError::FormClosed) => return Err(SubmitError::FormClosed),
        Err(SubmitError::AlreadySubmitting) => {
            log::debug!("[NOTE_FORM] Ignoring submit while another is in flight");
            return Err(SubmitError::AlreadySubmitting);
        }
        Err(err) => {
            log::warn!("[NOTE_FORM] Submit refused: {}", err);
            effects.notify(Notice::new("Cannot add note", err.to_string(), NoticeStatus::Error));
            return Err(err);
        }
    };

    log::debug!("[NOTE_FORM] Sending note with {} parts", payload.len());
    let result = gateway.create_note(payload).await;
    if cell.with_composer(|c| c.finish_submit(&result)).is_none() {
        log::debug!("[NOTE_FORM] Form closed before the reply arrived");
    }

    match result {
        Ok(()) => {
            log::info!("[NOTE_FORM] Note created for user {}", user_id);
            effects.notify(Notice::note_added());
            effects.show_notes(&user_id);
            Ok(NoteCreated { user_id })
        }
        Err(err) => {
            log::error!("[NOTE_FORM] Error creating note: {}", err);
            let title = if err.is_retryable() { "Note not saved" } else { "Note rejected" };
            effects.notify(Notice::new(title, err.user_message(), NoticeStatus::Error));
            Err(SubmitError::Api(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::User;

    fn filled() -> NoteComposer {
        let mut composer = NoteComposer::new();
        composer.update_field(DraftField::Title, "t".into());
        composer.update_field(DraftField::Description, "d".into());
        composer.update_field(DraftField::Body, "b".into());
        composer.update_todo_at(0, TodoField::Title("x".into()));
        composer
    }

    fn signed_in() -> Session {
        Session::Authenticated(User::new("u1", "baba"))
    }

    #[test]
    fn test_begin_submit_requires_user() {
        let mut composer = filled();
        assert_eq!(composer.begin_submit(&Session::Anonymous), Err(SubmitError::NotAuthenticated));
        assert_eq!(composer.begin_submit(&Session::Resolving), Err(SubmitError::NotAuthenticated));
        assert!(!composer.is_submitting());
    }

    #[test]
    fn test_begin_submit_rejects_reentry() {
        let mut composer = filled();
        assert!(composer.begin_submit(&signed_in()).is_ok());
        assert!(composer.is_submitting());
        assert_eq!(composer.begin_submit(&signed_in()), Err(SubmitError::AlreadySubmitting));
    }

    #[test]
    fn test_begin_submit_reports_first_blank_field() {
        let mut composer = filled();
        composer.update_field(DraftField::Description, String::new());
        assert_eq!(
            composer.begin_submit(&signed_in()),
            Err(SubmitError::MissingField("description".into()))
        );

        let mut composer = filled();
        composer.add_todo();
        assert_eq!(
            composer.begin_submit(&signed_in()),
            Err(SubmitError::MissingField("todoList[1][title]".into()))
        );
    }

    #[test]
    fn test_finish_submit_failure_keeps_draft() {
        let mut composer = filled();
        composer.begin_submit(&signed_in()).unwrap();
        let before = composer.draft().clone();

        composer.finish_submit(&Err(ApiError::Transport("offline".into())));
        assert!(!composer.is_submitting());
        assert_eq!(composer.draft(), &before);
        assert_eq!(composer.todos().len(), 1);
    }

    #[test]
    fn test_finish_submit_success_resets() {
        let mut composer = filled();
        composer.select_image(Some(ImageAttachment::new("a.png", "image/png", vec![1])));
        composer.begin_submit(&signed_in()).unwrap();

        composer.finish_submit(&Ok(()));
        assert_eq!(composer.draft(), &NoteDraft::default());
        assert_eq!(composer.todos().items(), vec![TodoDraftItem::default()]);
        assert!(!composer.is_submitting());
    }

    #[test]
    fn test_reset_does_not_reuse_todo_ids() {
        let mut composer = filled();
        let before = composer.todos().id_at(0).unwrap();
        composer.begin_submit(&signed_in()).unwrap();

        composer.finish_submit(&Ok(()));
        let after = composer.todos().id_at(0).unwrap();
        assert_ne!(before, after);
        assert!(composer.todos().get(before).is_none());
    }

    #[test]
    fn test_select_image_replaces_previous() {
        let mut composer = NoteComposer::new();
        composer.select_image(Some(ImageAttachment::new("a.png", "image/png", vec![1])));
        composer.select_image(Some(ImageAttachment::new("b.png", "image/png", vec![2])));
        assert_eq!(composer.draft().image.as_ref().map(|i| i.file_name.as_str()), Some("b.png"));
    }
}
