//! Host collaborator contracts.
//!
//! The host editor (its text buffer, file storage, metadata model, timers,
//! settings persistence and notification UI) is a black box behind the
//! [`Host`] and [`EditorBuffer`] traits. A host adapter implements them;
//! tests drive the session with in-memory fakes.

use crate::error::Result;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// The currently active document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    /// Path relative to the vault root.
    pub path: PathBuf,
}

/// Handle to a just-created binary file, kept only for rollback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentHandle {
    /// Path the binary was created at.
    pub path: PathBuf,
}

/// A position in the editor buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Line number (0-indexed).
    pub line: usize,
    /// Character offset in the line (0-indexed).
    pub ch: usize,
}

/// Identity of a timer issued by [`Host::schedule`].
///
/// The host reports expiry by dispatching [`crate::Event::TimerFired`] with
/// the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// The host's text buffer and cursor.
pub trait EditorBuffer {
    /// Full buffer content.
    fn value(&self) -> String;

    /// Replace the full buffer content.
    fn set_value(&mut self, content: &str);

    /// Current cursor position.
    fn cursor(&self) -> Cursor;

    /// Move the cursor. The position is already clamped by the caller;
    /// hosts may clamp again but must not fail.
    fn set_cursor(&mut self, cursor: Cursor);
}

/// Services the host editor provides to the session.
pub trait Host {
    /// The currently active document, if any.
    fn active_document(&self) -> Option<DocumentRef>;

    /// The active text-editing view's buffer, if one exists.
    fn editor(&mut self) -> Option<&mut dyn EditorBuffer>;

    /// Resolve a collision-free storage path for an attachment named
    /// `suggested_name`, relative to the document at `relative_to`.
    fn available_path(&self, suggested_name: &str, relative_to: &Path) -> PathBuf;

    /// Persist `bytes` at `path`, returning a handle to the new file.
    fn create_binary(&mut self, path: &Path, bytes: &[u8]) -> Result<AttachmentHandle>;

    /// Move a previously created file to trash. Best-effort: the host
    /// swallows errors, the caller never learns of a failed trash.
    fn trash(&mut self, handle: &AttachmentHandle);

    /// Apply `mutator` to the document's live frontmatter mapping and commit
    /// the result. May fail if the document changed concurrently or its
    /// frontmatter is invalid; on failure nothing is committed.
    fn process_frontmatter(
        &mut self,
        doc: &DocumentRef,
        mutator: &mut dyn FnMut(&mut serde_yaml::Mapping),
    ) -> Result<()>;

    /// Whether a metadata property field currently holds focus.
    fn field_has_focus(&self) -> bool;

    /// Release focus from the metadata property field.
    ///
    /// Contract: returns only after the host has committed any in-progress
    /// field edit to its metadata model, so a frontmatter transform issued
    /// afterwards cannot race with the host's own commit.
    fn release_focus(&mut self);

    /// Show a fire-and-forget user-visible message.
    fn notify(&mut self, message: &str);

    /// Schedule a one-shot timer; expiry comes back as
    /// [`crate::Event::TimerFired`].
    fn schedule(&mut self, delay: Duration) -> TimerId;

    /// Cancel a scheduled timer. Cancelling an already-fired timer is a
    /// no-op.
    fn cancel_timer(&mut self, id: TimerId);

    /// Previously persisted settings blob, if any.
    fn load_settings(&mut self) -> Option<serde_json::Value>;

    /// Persist the settings blob.
    fn save_settings(&mut self, value: serde_json::Value);
}
