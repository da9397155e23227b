use crate::dom::MarkupNode;
use regex::Regex;
use std::sync::LazyLock;

/// Bracketed footnote markers sharing a text node with other content,
/// e.g. the `[4]` in `Avatar[4]`. Hardcoded pattern, always compiles.
static INLINE_FOOTNOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\d+\]").expect("INLINE_FOOTNOTE: hardcoded regex is valid"));

/// Clean a table cell into its display string.
///
/// Steps:
/// 1. Skip `sup.reference` and `span.sortkey` subtrees
/// 2. Drop text segments starting with `[` (footnote markers)
/// 3. Concatenate the rest in document order
/// 4. Remove inline `[n]` markers, replace NBSP and newlines with spaces, trim
pub fn clean_cell<'doc, N: MarkupNode<'doc>>(cell: &N) -> String {
    let joined: String = cell
        .text_segments(&is_annotation::<N>)
        .into_iter()
        .filter(|segment| !segment.starts_with('['))
        .collect();
    clean_text(&joined)
}

/// String-level part of [`clean_cell`]. Idempotent.
pub fn clean_text(text: &str) -> String {
    strip_inline_footnotes(text)
        .replace(['\u{a0}', '\n'], " ")
        .trim()
        .to_string()
}

/// Remove `[n]` markers until none remain; dropping an inner marker can
/// close up an outer one, as in `[1[2]]`.
fn strip_inline_footnotes(text: &str) -> String {
    let mut current = text.to_string();
    while INLINE_FOOTNOTE.is_match(&current) {
        current = INLINE_FOOTNOTE.replace_all(&current, "").into_owned();
    }
    current
}

/// Concatenate a node's text, leaving out segments that begin with `[`.
pub fn strip_footnotes<'doc, N: MarkupNode<'doc>>(node: &N) -> String {
    node.text_segments(&|_| false)
        .into_iter()
        .filter(|segment| !segment.starts_with('['))
        .collect()
}

/// Reference superscripts and hidden sort keys never reach the output.
fn is_annotation<'doc, N: MarkupNode<'doc>>(node: &N) -> bool {
    (node.is_tag("sup") && node.has_class("reference"))
        || (node.is_tag("span") && node.has_class("sortkey"))
}
