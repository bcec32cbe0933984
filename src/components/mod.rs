//! UI Components
//!
//! Layouts, pages and the note form.

mod add_note_form;
mod auth_pages;
mod header;
mod layouts;
mod mode_toggle;
mod pages;
mod toaster;
mod todo_list_editor;
mod user_menu;

pub use add_note_form::AddNoteForm;
pub use auth_pages::{LoginPage, RegisterPage};
pub use header::Header;
pub use layouts::{AuthLayout, MainLayout};
pub use mode_toggle::ModeToggle;
pub use pages::{NotesPage, ProfilePage, StaticPage};
pub use toaster::Toaster;
pub use todo_list_editor::TodoListEditor;
pub use user_menu::UserMenu;
