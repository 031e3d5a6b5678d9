//! Frontlink - frontmatter file-reference conversion for Obsidian-style editors.
//!
//! # Overview
//!
//! YAML frontmatter cannot hold an embed-style reference (`![[path]]`) as a
//! field value; the brackets parse as structure. Frontlink is the
//! editor-agnostic core of a plugin that fixes this up:
//!
//! - Rewrites every `![[path]]` inside the leading frontmatter block into a
//!   quoted wikilink with a derived display alias, `"[[path|name]]"`.
//!   Triggered debounced on buffer changes, after regular-editor pastes, and
//!   by a manual command. Idempotent: converted references never match again.
//! - Handles file and image pastes into frontmatter property fields: saves
//!   the bytes as a vault attachment, then assigns `[[path|name]]` to the
//!   target property. If the frontmatter write fails, the just-saved
//!   attachment is trashed so nothing is orphaned.
//!
//! The host editor (buffer, storage, metadata model, timers, notifications,
//! settings persistence) sits behind the [`Host`] and [`EditorBuffer`]
//! traits; host callbacks arrive as tagged [`Event`]s through
//! [`Session::dispatch`].
//!
//! # Example
//!
//! ```
//! use frontlink::rewrite_frontmatter_refs;
//!
//! let doc = "---\ncover: ![[images/cover.png]]\n---\nbody text";
//! let converted = rewrite_frontmatter_refs(doc, false).unwrap();
//! assert_eq!(
//!     converted,
//!     "---\ncover: \"[[images/cover.png|cover]]\"\n---\nbody text"
//! );
//!
//! // A second pass is a no-op.
//! assert_eq!(rewrite_frontmatter_refs(&converted, false), None);
//! ```

pub mod error;
pub mod host;
pub mod ingest;
pub mod paste;
pub mod rewrite;
pub mod session;
pub mod settings;
pub mod writer;

// Re-export main types at crate root
pub use error::{ConvertError, Result};
pub use host::{AttachmentHandle, Cursor, DocumentRef, EditorBuffer, Host, TimerId};
pub use ingest::{ingest, PendingAttachment};
pub use paste::{classify, ClipboardItem, ItemKind, PasteDisposition, PasteEvent};
pub use rewrite::{display_name, rewrite_frontmatter_refs};
pub use session::{Event, Session, DEBOUNCE_DELAY, PASTE_SETTLE_DELAY};
pub use settings::Settings;
pub use writer::write;
