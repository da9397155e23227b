use crate::dom::MarkupNode;
use crate::parsing::normalize::strip_footnotes;

/// Where to look for a section heading when a table has no caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingRule {
    pub heading_tag: String,
    pub headline_class: String,
}

impl Default for HeadingRule {
    fn default() -> Self {
        Self {
            heading_tag: "h2".into(),
            headline_class: "mw-headline".into(),
        }
    }
}

/// Derive a table's name from its first caption, falling back to the
/// headline of the nearest preceding heading sibling.
///
/// Only siblings at the table's own nesting level are searched, so a table
/// wrapped in a container without a heading sibling gets no name even if
/// an enclosing section has one. Returns `None` when neither source exists;
/// an empty caption or headline still counts as a name.
pub fn derive_name<'doc, N: MarkupNode<'doc>>(table: &N, rule: &HeadingRule) -> Option<String> {
    if let Some(caption) = table
        .descendants_matching(&|n| n.is_tag("caption"))
        .first()
    {
        return Some(strip_footnotes(caption).trim().to_string());
    }

    preceding_headline(table, rule).map(|headline| headline.trim().to_string())
}

fn preceding_headline<'doc, N: MarkupNode<'doc>>(
    table: &N,
    rule: &HeadingRule,
) -> Option<String> {
    table
        .preceding_siblings()
        .iter()
        .filter(|sibling| sibling.is_tag(&rule.heading_tag))
        .find_map(|heading| {
            heading
                .descendants_matching(&|n| n.has_class(&rule.headline_class))
                .first()
                .map(|headline| headline.text_content())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_document;

    fn name_of(html: &str) -> Option<String> {
        let doc = parse_document(html);
        let table = doc
            .root_element()
            .descendants_matching(&|n| n.is_tag("table"))
            .into_iter()
            .next()
            .unwrap();
        derive_name(&table, &HeadingRule::default())
    }

    #[test]
    fn test_caption_wins() {
        let html = "<h2><span class=\"mw-headline\">Section</span></h2>\
                    <table><caption>Highest-grossing films<sup>[7]</sup>\n</caption></table>";
        assert_eq!(name_of(html).as_deref(), Some("Highest-grossing films"));
    }

    #[test]
    fn test_first_caption_used() {
        let html = "<table><caption>Outer</caption><tr><td>\
                    <table><caption>Inner</caption></table></td></tr></table>";
        assert_eq!(name_of(html).as_deref(), Some("Outer"));
    }

    #[test]
    fn test_nearest_heading_fallback() {
        let html = "<h2><span class=\"mw-headline\">First</span></h2>\
                    <p>intro</p>\
                    <h2><span class=\"mw-headline\">8000 metres</span></h2>\
                    <p>text</p>\
                    <table></table>";
        assert_eq!(name_of(html).as_deref(), Some("8000 metres"));
    }

    #[test]
    fn test_heading_without_headline_skipped() {
        let html = "<h2><span class=\"mw-headline\">Older</span></h2>\
                    <h2>Bare heading</h2>\
                    <table></table>";
        assert_eq!(name_of(html).as_deref(), Some("Older"));
    }

    #[test]
    fn test_other_heading_levels_ignored() {
        let html = "<h3><span class=\"mw-headline\">Subsection</span></h3><table></table>";
        assert_eq!(name_of(html), None);
    }

    #[test]
    fn test_wrapped_table_does_not_see_outer_heading() {
        let html = "<h2><span class=\"mw-headline\">Section</span></h2>\
                    <div><table></table></div>";
        assert_eq!(name_of(html), None);
    }

    #[test]
    fn test_empty_caption_is_a_name() {
        assert_eq!(name_of("<table><caption> </caption></table>").as_deref(), Some(""));
    }

    #[test]
    fn test_custom_heading_rule() {
        let doc = parse_document(
            "<h3><span class=\"title\">Volcanoes</span></h3><table></table>",
        );
        let table = doc
            .root_element()
            .descendants_matching(&|n| n.is_tag("table"))
            .into_iter()
            .next()
            .unwrap();
        let rule = HeadingRule {
            heading_tag: "h3".into(),
            headline_class: "title".into(),
        };
        assert_eq!(derive_name(&table, &rule).as_deref(), Some("Volcanoes"));
    }
}
