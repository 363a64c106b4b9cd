// src/core/html.rs
//! Node lookup over a parsed document.
//!
//! Markup on result pages drifts: the same field shows up under different
//! tags or class names from one deploy to the next. Callers describe a field
//! as an ordered list of [`NodeSpec`]s and [`find`] returns the first subtree
//! that matches any of them, trying the specs strictly in order.

use scraper::ElementRef;
use tracing::debug;

/// `<tag attr="... value ...">`, where `value` is one whitespace-separated
/// token of the attribute (so `class="company big"` matches `company`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeSpec {
    pub tag: &'static str,
    pub attr: &'static str,
    pub value: &'static str,
}

impl NodeSpec {
    pub const fn new(tag: &'static str, attr: &'static str, value: &'static str) -> Self {
        Self { tag, attr, value }
    }

    pub const fn class(tag: &'static str, value: &'static str) -> Self {
        Self::new(tag, "class", value)
    }

    pub fn matches(&self, el: &ElementRef<'_>) -> bool {
        let v = el.value();
        v.name().eq_ignore_ascii_case(self.tag)
            && v.attr(self.attr)
                .is_some_and(|a| a.split_ascii_whitespace().any(|t| t == self.value))
    }
}

/// Descendants of `root` in document order, `root` itself excluded.
fn descendants<'a>(root: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    root.descendants().skip(1).filter_map(ElementRef::wrap)
}

/// First subtree under `root` matching any of `specs`, tried in list order.
/// Not finding anything is a normal outcome, never an error.
pub fn find<'a>(root: ElementRef<'a>, specs: &[NodeSpec]) -> Option<ElementRef<'a>> {
    for spec in specs {
        debug!(tag = spec.tag, attr = spec.attr, value = spec.value, "Looking up node");
        if let Some(hit) = descendants(root).find(|el| spec.matches(el)) {
            return Some(hit);
        }
    }
    debug!(
        wanted = specs.first().map(|s| s.value).unwrap_or_default(),
        root_attrs = ?attrs_of(root),
        "NOT FOUND"
    );
    None
}

/// Every subtree under `root` matching `spec`, in document order.
pub fn find_all<'a>(
    root: ElementRef<'a>,
    spec: NodeSpec,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    descendants(root).filter(move |el| spec.matches(el))
}

/// Concatenated text of the subtree, trimmed.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// The subtree serialized back to markup, including its own tag.
pub fn outer_html(el: ElementRef<'_>) -> String {
    el.html()
}

pub fn attrs_of(el: ElementRef<'_>) -> Vec<(String, String)> {
    el.value()
        .attrs()
        .map(|(k, v)| (s!(k), s!(v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    const LOCATION: &[NodeSpec] = &[
        NodeSpec::class("span", "location"),
        NodeSpec::class("div", "location"),
    ];

    #[test]
    fn falls_back_to_later_spec() {
        let doc = Html::parse_fragment(
            r#"<div class="sjcl"><span class="company">Acme</span><div class="location">Toronto, ON</div></div>"#,
        );
        let hit = find(doc.root_element(), LOCATION).expect("div.location");
        assert_eq!(hit.value().name(), "div");
        assert_eq!(text_of(hit), "Toronto, ON");
    }

    #[test]
    fn earlier_spec_wins_over_document_order() {
        let doc = Html::parse_fragment(
            r#"<div class="location">first</div><span class="location">second</span>"#,
        );
        let hit = find(doc.root_element(), LOCATION).unwrap();
        assert_eq!(hit.value().name(), "span");
    }

    #[test]
    fn class_token_match_not_substring() {
        let doc = Html::parse_fragment(
            r#"<span class="companyName">no</span><span class="big company">yes</span>"#,
        );
        let hit = find(doc.root_element(), &[NodeSpec::class("span", "company")]).unwrap();
        assert_eq!(text_of(hit), "yes");
    }

    #[test]
    fn missing_is_none() {
        let doc = Html::parse_fragment(r#"<p class="location">nope</p>"#);
        assert!(find(doc.root_element(), LOCATION).is_none());
        assert!(find(doc.root_element(), &[]).is_none());
    }

    #[test]
    fn root_itself_is_not_a_candidate() {
        let doc = Html::parse_fragment(r#"<div class="sjcl"><b>x</b></div>"#);
        let outer = find(doc.root_element(), &[NodeSpec::class("div", "sjcl")]).unwrap();
        assert!(find(outer, &[NodeSpec::class("div", "sjcl")]).is_none());
    }

    #[test]
    fn find_all_keeps_document_order() {
        let doc = Html::parse_document(
            r#"<html><body>
                <div class="card">1</div><div class="other">x</div><div class="card">2</div>
            </body></html>"#,
        );
        let texts: Vec<String> = find_all(doc.root_element(), NodeSpec::class("div", "card"))
            .map(text_of)
            .collect();
        assert_eq!(texts, vec!["1", "2"]);
    }

    #[test]
    fn outer_html_includes_own_tag() {
        let doc = Html::parse_fragment(r#"<div id="d"><p>hi</p></div>"#);
        let d = find(doc.root_element(), &[NodeSpec::new("div", "id", "d")]).unwrap();
        assert_eq!(outer_html(d), r#"<div id="d"><p>hi</p></div>"#);
    }
}
