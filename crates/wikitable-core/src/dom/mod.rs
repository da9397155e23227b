pub mod scraper_node;

pub use scraper_node::parse_document;

/// Read-only view of an element in a parsed markup tree.
///
/// Table extraction only navigates the tree through this trait, so any HTML
/// parser can back it. The `scraper` implementation lives in
/// [`scraper_node`]. Strings handed out borrow from the document (`'doc`),
/// not from the node handle, so they outlive any temporary handle.
pub trait MarkupNode<'doc>: Clone {
    /// Lowercase element name, e.g. `"td"`.
    fn tag_name(&self) -> &'doc str;

    fn attribute(&self, name: &str) -> Option<&'doc str>;

    fn has_class(&self, class: &str) -> bool;

    /// All descendant elements (excluding `self`) for which `predicate`
    /// holds, in document order.
    fn descendants_matching(&self, predicate: &dyn Fn(&Self) -> bool) -> Vec<Self>;

    /// Element siblings that come before `self`, nearest first.
    fn preceding_siblings(&self) -> Vec<Self>;

    /// Text nodes of the subtree in document order. Elements for which
    /// `prune` returns true are not descended into.
    fn text_segments(&self, prune: &dyn Fn(&Self) -> bool) -> Vec<&'doc str>;

    fn is_tag(&self, tag: &str) -> bool {
        self.tag_name().eq_ignore_ascii_case(tag)
    }

    /// Concatenated text of the whole subtree.
    fn text_content(&self) -> String {
        self.text_segments(&|_| false).concat()
    }
}
