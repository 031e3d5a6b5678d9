//! Rewriting of embed-style references inside frontmatter.
//!
//! YAML cannot represent `![[path]]` as a scalar value: the brackets get
//! parsed as structure and the value is lost. The rewrite turns every embed
//! inside the frontmatter block into a quoted wikilink with a derived display
//! alias, `"[[path|name]]"`, which YAML reads as a plain string.

use regex::{Captures, Regex};
use std::sync::LazyLock;

// Frontmatter must start at the very beginning of the document: an opening
// --- line, the block content, and the first subsequent --- line (non-greedy).
static FRONTMATTER_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^---\n(.*?)\n---").unwrap());

// Embed pattern: ![[target]] where target is any run of non-] characters.
static EMBED_REF: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[\[([^\]]+)\]\]").unwrap());

/// Rewrite every `![[path]]` inside the leading frontmatter block into
/// `"[[path|display]]"`.
///
/// Returns `None` when the document has no leading frontmatter block, the
/// block contains no embeds, or the rewrite would change nothing. Converted
/// occurrences no longer carry the leading `!` and so never match again,
/// which makes the pass idempotent.
///
/// The remainder of the document (everything from the closing `---` onward)
/// is preserved byte-exact; embeds outside the block are never touched.
pub fn rewrite_frontmatter_refs(content: &str, include_extension: bool) -> Option<String> {
    let captures = FRONTMATTER_BLOCK.captures(content)?;
    let block = captures.get(0)?;
    let inner = captures.get(1)?.as_str();

    if !EMBED_REF.is_match(inner) {
        return None;
    }

    let rewritten = EMBED_REF.replace_all(inner, |caps: &Captures| {
        let path = &caps[1];
        format!("\"[[{}|{}]]\"", path, display_name(path, include_extension))
    });

    if rewritten == inner {
        return None;
    }

    Some(format!(
        "---\n{}\n---{}",
        rewritten,
        &content[block.end()..]
    ))
}

/// Derive the display alias for a linked file path.
///
/// Takes the last `/`-segment; unless `include_extension` is set, the final
/// `.<ext>` is stripped, but only when a non-empty extension is present
/// (`c.tar.gz` -> `c.tar`, `c.` -> `c.`, `.hidden` -> ``).
pub fn display_name(path: &str, include_extension: bool) -> String {
    let name = path.rsplit('/').next().unwrap_or(path);

    if include_extension {
        return name.to_string();
    }

    match name.rfind('.') {
        Some(idx) if idx + 1 < name.len() => name[..idx].to_string(),
        _ => name.to_string(),
    }
}
