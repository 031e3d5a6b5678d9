//! Writing the generated link into the document's frontmatter, with rollback.

use crate::error::{ConvertError, Result};
use crate::host::Host;
use crate::ingest::PendingAttachment;

/// Assign the pending attachment's link to its target frontmatter property.
///
/// Precondition: the source field must be blurred with its in-progress edit
/// committed, or a transform issued here could race with (or be overwritten
/// by) the host's own commit. `write` enforces it by calling
/// [`Host::release_focus`] when the field still holds focus.
///
/// On a missing property label, or on any frontmatter-transform failure, the
/// just-created file is trashed (best-effort) so no orphaned attachment is
/// left behind, and the error is returned for the caller to report. On
/// success exactly one key is set: `frontmatter[property] = link_text`.
pub fn write(host: &mut dyn Host, pending: PendingAttachment) -> Result<()> {
    if host.field_has_focus() {
        host.release_focus();
    }

    let result = match &pending.property_name {
        None => Err(ConvertError::MissingPropertyLabel),
        Some(property) => {
            let key = serde_yaml::Value::String(property.clone());
            let value = serde_yaml::Value::String(pending.link_text.clone());
            host.process_frontmatter(&pending.document, &mut |frontmatter| {
                frontmatter.insert(key.clone(), value.clone());
            })
        }
    };

    if let Err(err) = result {
        tracing::error!(error = %err, path = %pending.handle.path.display(), "rolling back attachment");
        host.trash(&pending.handle);
        return Err(err);
    }

    Ok(())
}
