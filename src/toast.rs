//! Toast Queue
//!
//! Transient notifications shown by the `Toaster`.

use note_draft::{Notice, NoticeStatus};

use crate::config::MAX_VISIBLE_TOASTS;

pub type ToastId = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub notice: Notice,
}

impl Toast {
    pub fn class(&self) -> &'static str {
        match self.notice.status {
            NoticeStatus::Success => "toast success",
            NoticeStatus::Error => "toast error",
            NoticeStatus::Info => "toast info",
        }
    }
}

/// Bounded list of visible toasts, oldest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: ToastId,
    limit: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::with_limit(MAX_VISIBLE_TOASTS)
    }
}

impl ToastQueue {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 1,
            limit: limit.max(1),
        }
    }

    /// Show a notice, dropping the oldest toast when full
    pub fn push(&mut self, notice: Notice) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, notice });
        if self.toasts.len() > self.limit {
            let overflow = self.toasts.len() - self.limit;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}
