//! The session: event routing, change debouncing and lifecycle.
//!
//! All host callbacks funnel into [`Session::dispatch`] as tagged [`Event`]s,
//! which keeps classification and triggering testable without a real UI. The
//! session is single-threaded and runs each dispatch to completion; the only
//! state carried across dispatches is the settings and the pending debounce
//! timer.

use crate::error::ConvertError;
use crate::host::{Cursor, Host, TimerId};
use crate::ingest::ingest;
use crate::paste::{classify, PasteDisposition, PasteEvent};
use crate::rewrite::rewrite_frontmatter_refs;
use crate::settings::Settings;
use crate::writer::write;
use chrono::Utc;
use std::time::Duration;

/// Quiet period after the last buffer change before a rewrite pass runs.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// Delay after a regular-editor paste before re-running the rewrite, long
/// enough for the host's asynchronous default paste insertion to land.
pub const PASTE_SETTLE_DELAY: Duration = Duration::from_millis(50);

/// A host callback, reified.
#[derive(Debug)]
pub enum Event {
    /// A clipboard paste, already shaped by the host adapter.
    Paste(PasteEvent),
    /// The editor buffer changed (typing, undo, ...).
    BufferChanged,
    /// The manual "Convert frontmatter file references" action.
    ConvertCommand,
    /// A timer issued by [`Host::schedule`] expired.
    TimerFired(TimerId),
}

/// Per-plugin-instance state and event router.
pub struct Session {
    settings: Settings,
    /// Single-slot debounce: at most one scheduled rewrite is pending;
    /// a new buffer change supersedes it.
    pending_debounce: Option<TimerId>,
}

impl Session {
    /// Construct a session, loading persisted settings merged over defaults.
    pub fn new(host: &mut dyn Host) -> Self {
        let settings = Settings::from_partial(host.load_settings());
        Self {
            settings,
            pending_debounce: None,
        }
    }

    /// Current configuration.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Update the extension toggle and persist the settings.
    pub fn set_include_file_extension(&mut self, value: bool, host: &mut dyn Host) {
        self.settings.include_file_extension = value;
        host.save_settings(self.settings.to_value());
    }

    /// Route one event. Never panics and never propagates a failure: pipeline
    /// errors become a user notice plus a diagnostic log entry.
    pub fn dispatch(&mut self, event: Event, host: &mut dyn Host) {
        match event {
            Event::BufferChanged => {
                if let Some(id) = self.pending_debounce.take() {
                    host.cancel_timer(id);
                }
                self.pending_debounce = Some(host.schedule(DEBOUNCE_DELAY));
            }
            Event::TimerFired(id) => {
                if self.pending_debounce == Some(id) {
                    self.pending_debounce = None;
                }
                // Both the debounce timer and the fire-and-forget paste
                // settle timers converge on a rewrite pass over the buffer
                // content as it is now. Overlapping settle timers are safe:
                // the rewrite is idempotent.
                self.run_rewrite(host);
            }
            Event::ConvertCommand => self.run_rewrite(host),
            Event::Paste(event) => self.handle_paste(event, host),
        }
    }

    /// Tear down: cancel the pending debounce timer, if any.
    pub fn shutdown(&mut self, host: &mut dyn Host) {
        if let Some(id) = self.pending_debounce.take() {
            host.cancel_timer(id);
        }
    }

    fn handle_paste(&mut self, event: PasteEvent, host: &mut dyn Host) {
        let has_active_view = host.editor().is_some();
        let now_millis = Utc::now().timestamp_millis();

        match classify(&event, has_active_view, now_millis) {
            PasteDisposition::SaveAttachment { bytes, file_name } => {
                let outcome = match ingest(
                    host,
                    &bytes,
                    &file_name,
                    event.property_label,
                    &self.settings,
                ) {
                    Ok(pending) => write(host, pending),
                    Err(err) => Err(err),
                };

                if let Err(err) = outcome {
                    tracing::error!(error = %err, "frontmatter attachment paste failed");
                    match err {
                        ConvertError::NoActiveDocument => host.notify("No active file!"),
                        err => host.notify(&format!("Failed to update frontmatter!\n{}", err)),
                    }
                }
            }
            PasteDisposition::DeferredRewrite => {
                // Fire-and-forget, deliberately untracked: not cancellable,
                // not coalesced.
                host.schedule(PASTE_SETTLE_DELAY);
            }
            PasteDisposition::Ignore => {}
        }
    }

    fn run_rewrite(&mut self, host: &mut dyn Host) {
        let content = match host.editor() {
            Some(editor) => editor.value(),
            None => return,
        };

        let Some(new_content) =
            rewrite_frontmatter_refs(&content, self.settings.include_file_extension)
        else {
            return;
        };

        tracing::debug!("converted frontmatter file references");

        if let Some(editor) = host.editor() {
            let cursor = editor.cursor();
            editor.set_value(&new_content);
            editor.set_cursor(clamp_cursor(cursor, &new_content));
        }
    }
}

/// Clamp a cursor captured before a rewrite onto the rewritten text.
/// Best-effort restoration: a cursor past the new end of document lands on
/// the last line's end.
fn clamp_cursor(cursor: Cursor, content: &str) -> Cursor {
    let lines: Vec<&str> = content.split('\n').collect();
    let last = lines.len() - 1;

    if cursor.line > last {
        return Cursor {
            line: last,
            ch: lines[last].chars().count(),
        };
    }

    Cursor {
        line: cursor.line,
        ch: cursor.ch.min(lines[cursor.line].chars().count()),
    }
}
