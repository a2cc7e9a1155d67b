// src/core/html.rs
// Thin helpers over `scraper` so the page specs read like selector tables.

use scraper::{ElementRef, Selector};

use crate::error::ParseError;
use super::sanitize::normalize_ws;

/// Compile a CSS selector; failures become `ParseError::Markup`.
pub fn selector(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|e| ParseError::Markup(format!("bad selector {css:?}: {e}")))
}

/// Visible text of an element, whitespace-collapsed and trimmed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Text of the first descendant matching `sel`, or "" when there is none.
pub fn first_text(scope: ElementRef<'_>, sel: &Selector) -> String {
    scope.select(sel).next().map(text_of).unwrap_or_default()
}

/// Attribute value exactly as written; `None` when absent or blank.
pub fn attr_non_empty<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value()
        .attr(name)
        .filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn text_is_normalized() {
        let doc = Html::parse_fragment("<div class=x>  a <b>b</b>\n c&nbsp;</div>");
        let sel = selector(".x").unwrap();
        let el = doc.select(&sel).next().unwrap();
        assert_eq!(text_of(el), "a b c");
    }

    #[test]
    fn missing_descendant_is_empty() {
        let doc = Html::parse_fragment("<div class=x><span class=y>hi</span></div>");
        let x = selector(".x").unwrap();
        let z = selector(".z").unwrap();
        let el = doc.select(&x).next().unwrap();
        assert_eq!(first_text(el, &z), "");
    }

    #[test]
    fn blank_attributes_are_absent() {
        let doc = Html::parse_fragment(r#"<p data-a=" 7 " data-b="  "></p>"#);
        let p = doc.select(&selector("p").unwrap()).next().unwrap();
        assert_eq!(attr_non_empty(p, "data-a"), Some(" 7 "));
        assert_eq!(attr_non_empty(p, "data-b"), None);
        assert_eq!(attr_non_empty(p, "data-c"), None);
    }

    #[test]
    fn broken_selector_is_a_parse_error() {
        assert!(matches!(selector("tr[[["), Err(ParseError::Markup(_))));
    }
}
