//! Paste-event classification.
//!
//! The host adapter turns a DOM clipboard event into a [`PasteEvent`] value:
//! whether the focused element is a metadata text field, the accessible label
//! of the enclosing property row (captured at event time, before a save can
//! shift focus), and the clipboard payload. [`classify`] then decides what to
//! do with it.

/// Kind a clipboard item reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// A file-backed item.
    File,
    /// Plain text or other non-file data.
    Text,
}

/// One entry of the clipboard's item list.
#[derive(Debug, Clone)]
pub struct ClipboardItem {
    /// Reported kind.
    pub kind: ItemKind,
    /// Reported MIME type (e.g. "image/png").
    pub mime: String,
    /// Raw bytes, for file-backed items the host could extract.
    pub bytes: Option<Vec<u8>>,
    /// Original file name, when the item carries one.
    pub file_name: Option<String>,
}

/// A paste event as seen by the session.
#[derive(Debug, Clone)]
pub struct PasteEvent {
    /// Whether the focused element matches the metadata text-field selector.
    pub in_metadata_field: bool,
    /// Accessible label of the enclosing property row, if found.
    pub property_label: Option<String>,
    /// The clipboard's declared type list, in order.
    pub types: Vec<String>,
    /// The clipboard's item list, in order.
    pub items: Vec<ClipboardItem>,
}

/// What to do with a paste event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteDisposition {
    /// Save the bytes as an attachment and link it from the focused
    /// property. Default paste is suppressed.
    SaveAttachment {
        bytes: Vec<u8>,
        file_name: String,
    },
    /// Regular-editor paste: let the default paste proceed, then re-run the
    /// rewrite once it has settled.
    DeferredRewrite,
    /// Nothing to do; default paste proceeds untouched.
    Ignore,
}

impl PasteDisposition {
    /// Whether the host must suppress the default paste action.
    pub fn suppresses_default(&self) -> bool {
        matches!(self, PasteDisposition::SaveAttachment { .. })
    }
}

/// Classify a paste event.
///
/// For a metadata-field paste the item list is scanned in order, first match
/// wins:
/// 1. a file item while the clipboard's first declared type is `"Files"` is a
///    direct file paste, saved under its original name;
/// 2. a file item with an `image/*` MIME type is inline image data, saved as
///    `Pasted image <now_millis>.<ext>` (`png` when the subtype is missing).
///
/// A metadata-field paste with no usable item, and any paste without an
/// active editing view, is ignored.
pub fn classify(event: &PasteEvent, has_active_view: bool, now_millis: i64) -> PasteDisposition {
    if event.in_metadata_field {
        let direct_file = event.types.first().is_some_and(|t| t == "Files");

        for item in &event.items {
            if item.kind != ItemKind::File {
                continue;
            }

            if direct_file {
                if let (Some(bytes), Some(name)) = (&item.bytes, &item.file_name) {
                    return PasteDisposition::SaveAttachment {
                        bytes: bytes.clone(),
                        file_name: name.clone(),
                    };
                }
            } else if item.mime.starts_with("image/") {
                if let Some(bytes) = &item.bytes {
                    let ext = item
                        .mime
                        .split('/')
                        .nth(1)
                        .filter(|s| !s.is_empty())
                        .unwrap_or("png");
                    return PasteDisposition::SaveAttachment {
                        bytes: bytes.clone(),
                        file_name: format!("Pasted image {}.{}", now_millis, ext),
                    };
                }
            }
        }

        return PasteDisposition::Ignore;
    }

    if has_active_view {
        PasteDisposition::DeferredRewrite
    } else {
        PasteDisposition::Ignore
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn file_item(mime: &str, bytes: &[u8], name: Option<&str>) -> ClipboardItem {
        ClipboardItem {
            kind: ItemKind::File,
            mime: mime.to_string(),
            bytes: Some(bytes.to_vec()),
            file_name: name.map(str::to_string),
        }
    }

    fn metadata_event(types: &[&str], items: Vec<ClipboardItem>) -> PasteEvent {
        PasteEvent {
            in_metadata_field: true,
            property_label: Some("cover".to_string()),
            types: types.iter().map(|s| s.to_string()).collect(),
            items,
        }
    }

    #[test]
    fn test_direct_file_paste() {
        let event = metadata_event(
            &["Files"],
            vec![file_item("application/pdf", b"pdf-bytes", Some("paper.pdf"))],
        );
        let disposition = classify(&event, true, 0);
        assert_eq!(
            disposition,
            PasteDisposition::SaveAttachment {
                bytes: b"pdf-bytes".to_vec(),
                file_name: "paper.pdf".to_string(),
            }
        );
        assert!(disposition.suppresses_default());
    }

    #[test]
    fn test_direct_file_wins_over_image_item() {
        // "Files" as first declared type routes to direct-file handling even
        // when an image-typed item is also present.
        let event = metadata_event(
            &["Files", "image/png"],
            vec![
                file_item("image/png", b"shot", Some("shot.png")),
                file_item("image/png", b"other", None),
            ],
        );
        assert_eq!(
            classify(&event, true, 0),
            PasteDisposition::SaveAttachment {
                bytes: b"shot".to_vec(),
                file_name: "shot.png".to_string(),
            }
        );
    }

    #[test]
    fn test_inline_image_gets_generated_name() {
        let event = metadata_event(&["image/jpeg"], vec![file_item("image/jpeg", b"jpg", None)]);
        assert_eq!(
            classify(&event, true, 1700000000123),
            PasteDisposition::SaveAttachment {
                bytes: b"jpg".to_vec(),
                file_name: "Pasted image 1700000000123.jpeg".to_string(),
            }
        );
    }

    #[test]
    fn test_image_without_subtype_defaults_to_png() {
        let event = metadata_event(&["image/"], vec![file_item("image/", b"img", None)]);
        match classify(&event, true, 42) {
            PasteDisposition::SaveAttachment { file_name, .. } => {
                assert_eq!(file_name, "Pasted image 42.png");
            }
            other => panic!("expected SaveAttachment, got {:?}", other),
        }
    }

    #[test]
    fn test_text_only_payload_is_ignored() {
        let event = metadata_event(
            &["text/plain"],
            vec![ClipboardItem {
                kind: ItemKind::Text,
                mime: "text/plain".to_string(),
                bytes: None,
                file_name: None,
            }],
        );
        let disposition = classify(&event, true, 0);
        assert_eq!(disposition, PasteDisposition::Ignore);
        assert!(!disposition.suppresses_default());
    }

    #[test]
    fn test_regular_editor_paste_defers_rewrite() {
        let event = PasteEvent {
            in_metadata_field: false,
            property_label: None,
            types: vec!["text/plain".to_string()],
            items: vec![],
        };
        assert_eq!(classify(&event, true, 0), PasteDisposition::DeferredRewrite);
        // Without an active view the event is ignored entirely.
        assert_eq!(classify(&event, false, 0), PasteDisposition::Ignore);
    }
}
