//! Note Draft
//!
//! Target-independent model of the note composition form: draft fields,
//! the todo sub-list, the create-note multipart payload and the submission
//! flow. The Leptos UI holds a [`NoteComposer`] in a signal and supplies the
//! browser-side [`NoteGateway`] and [`FormEffects`].

pub mod composer;
pub mod draft;
pub mod error;
pub mod payload;
pub mod session;
pub mod todo;

pub use composer::{
    submit_note, ComposerCell, FormEffects, NoteComposer, NoteCreated, NoteGateway, Notice, NoticeStatus,
    SubmitError,
};
pub use draft::{DraftField, ImageAttachment, NoteDraft};
pub use error::ApiError;
pub use payload::{build_create_note_payload, MultipartPayload, PayloadValue};
pub use session::{Session, User};
pub use todo::{TodoDraftItem, TodoField, TodoId, TodoList};
