//! HTML distillation into a `PageSnapshot`.

use once_cell::sync::Lazy;
use scraper::{Html, Node, Selector};
use serde::{Deserialize, Serialize};

/// Compiled once at startup
static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("title selector is hardcoded and valid"));

/// The distilled text of a fetched homepage.
///
/// Scripts and styles are removed, tags stripped and whitespace collapsed
/// to single spaces. `title` is empty when the page has no `<title>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnapshot {
    /// The page title text
    pub title: String,
    /// The visible page text
    pub body_text: String,
}

impl PageSnapshot {
    /// Create a snapshot from already-distilled text.
    #[must_use]
    pub fn new(title: impl Into<String>, body_text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body_text: body_text.into(),
        }
    }
}

/// Distill raw HTML into a [`PageSnapshot`].
#[must_use]
pub fn snapshot_from_html(html: &str) -> PageSnapshot {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| normalize_whitespace(&el.text().collect::<String>()))
        .unwrap_or_default();

    let mut body = String::new();
    collect_text(document.tree.root(), &mut body);

    PageSnapshot {
        title,
        body_text: normalize_whitespace(&body),
    }
}

/// Walk the DOM collecting text nodes, skipping `<script>` and `<style>`
/// subtrees entirely.
fn collect_text(node: ego_tree::NodeRef<'_, Node>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Element(element) => {
                let name = element.name();
                if name.eq_ignore_ascii_case("script") || name.eq_ignore_ascii_case("style") {
                    continue;
                }
                collect_text(child, out);
            }
            Node::Text(text) => {
                out.push_str(&text.text);
                out.push(' ');
            }
            _ => {}
        }
    }
}

/// Collapse all runs of whitespace to single spaces and trim the edges.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
