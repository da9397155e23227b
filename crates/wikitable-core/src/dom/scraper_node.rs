use crate::dom::MarkupNode;
use scraper::node::Node;
use scraper::{ElementRef, Html};

/// Parse a full HTML document with html5ever via `scraper`.
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

impl<'a> MarkupNode<'a> for ElementRef<'a> {
    fn tag_name(&self) -> &'a str {
        self.value().name()
    }

    fn attribute(&self, name: &str) -> Option<&'a str> {
        self.value().attr(name)
    }

    fn has_class(&self, class: &str) -> bool {
        self.value().classes().any(|c| c == class)
    }

    fn descendants_matching(&self, predicate: &dyn Fn(&Self) -> bool) -> Vec<Self> {
        self.descendants()
            .skip(1) // the first descendant is the node itself
            .filter_map(ElementRef::wrap)
            .filter(|el| predicate(el))
            .collect()
    }

    fn preceding_siblings(&self) -> Vec<Self> {
        self.prev_siblings().filter_map(ElementRef::wrap).collect()
    }

    fn text_segments(&self, prune: &dyn Fn(&Self) -> bool) -> Vec<&'a str> {
        let mut segments = Vec::new();
        collect_text(*self, prune, &mut segments);
        segments
    }
}

fn collect_text<'a>(
    element: ElementRef<'a>,
    prune: &dyn Fn(&ElementRef<'a>) -> bool,
    out: &mut Vec<&'a str>,
) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push(&**text),
            Node::Element(_) => {
                if let Some(child_elem) = ElementRef::wrap(child) {
                    if !prune(&child_elem) {
                        collect_text(child_elem, prune, out);
                    }
                }
            }
            _ => {}
        }
    }
}
