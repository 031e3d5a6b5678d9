//! Attachment ingestion: persist pasted bytes and build the link to write.

use crate::error::{ConvertError, Result};
use crate::host::{AttachmentHandle, DocumentRef, Host};
use crate::rewrite::display_name;
use crate::settings::Settings;

/// Everything needed to finish (or roll back) one paste operation.
///
/// Created per paste and consumed by [`crate::writer::write`] within the same
/// dispatch; never held across operations.
#[derive(Debug)]
pub struct PendingAttachment {
    /// Handle of the just-created file, kept for rollback.
    pub handle: AttachmentHandle,
    /// The wikilink to assign, `[[path|display]]`. No enclosing quotes: the
    /// value is assigned as a structured frontmatter field, not embedded in
    /// block text.
    pub link_text: String,
    /// Accessible label of the target property, when it could be captured.
    pub property_name: Option<String>,
    /// The document whose frontmatter receives the link.
    pub document: DocumentRef,
}

/// Persist `bytes` as an attachment next to the active document and produce
/// the link to write into its frontmatter.
///
/// Fails with [`ConvertError::NoActiveDocument`] before anything is written
/// when no document is active. Does not touch frontmatter itself.
pub fn ingest(
    host: &mut dyn Host,
    bytes: &[u8],
    suggested_name: &str,
    property_label: Option<String>,
    settings: &Settings,
) -> Result<PendingAttachment> {
    let document = host
        .active_document()
        .ok_or(ConvertError::NoActiveDocument)?;

    let save_path = host.available_path(suggested_name, &document.path);
    let handle = host.create_binary(&save_path, bytes)?;

    let path_str = save_path.to_string_lossy();
    let display = display_name(&path_str, settings.include_file_extension);
    let link_text = format!("[[{}|{}]]", path_str, display);

    tracing::debug!(path = %path_str, "attachment saved");

    Ok(PendingAttachment {
        handle,
        link_text,
        property_name: property_label,
        document,
    })
}
