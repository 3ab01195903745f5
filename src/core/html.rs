// src/core/html.rs
//
// Tag-predicate filters over a parsed document.
// Predicates are plain functions `Fn(&ElementRef) -> bool`; combine them with `&&`.

use scraper::{ElementRef, Html};

/// Every element below (and including) `scope` that satisfies `pred`, in document order.
pub fn find_all<'a, P>(scope: ElementRef<'a>, pred: P) -> impl Iterator<Item = ElementRef<'a>>
where
    P: Fn(&ElementRef<'a>) -> bool,
{
    scope
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(move |el| pred(el))
}

pub fn find_first<'a, P>(scope: ElementRef<'a>, pred: P) -> Option<ElementRef<'a>>
where
    P: Fn(&ElementRef<'a>) -> bool,
{
    find_all(scope, pred).next()
}

/// Shorthand for searching a whole document.
pub fn find_all_in<'a, P>(doc: &'a Html, pred: P) -> impl Iterator<Item = ElementRef<'a>>
where
    P: Fn(&ElementRef<'a>) -> bool,
{
    find_all(doc.root_element(), pred)
}

pub fn attr<'a>(el: &ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

pub fn has_attr(el: &ElementRef<'_>, name: &str) -> bool {
    el.value().attr(name).is_some()
}

pub fn attr_starts_with(el: &ElementRef<'_>, name: &str, prefix: &str) -> bool {
    el.value().attr(name).is_some_and(|v| v.starts_with(prefix))
}

pub fn has_class(el: &ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

/// Tag names come out of the parser lowercased.
pub fn is_tag(el: &ElementRef<'_>, name: &str) -> bool {
    el.value().name() == name
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
        <div id="a" class="x y">
          <span id="s1" class="mw-headline"><img data-k="1"></span>
          <span id="s2"><IMG data-k="2" data-caption=""></span>
        </div>
    "#;

    #[test]
    fn find_all_keeps_document_order() {
        let doc = Html::parse_document(DOC);
        let ids: Vec<_> = find_all_in(&doc, |el| is_tag(el, "span"))
            .filter_map(|el| attr(&el, "id"))
            .collect();
        assert_eq!(ids, ["s1", "s2"]);
    }

    #[test]
    fn predicates_compose() {
        let doc = Html::parse_document(DOC);
        let captioned: Vec<_> = find_all_in(&doc, |el| is_tag(el, "img") && has_attr(el, "data-caption"))
            .filter_map(|el| attr(&el, "data-k"))
            .collect();
        assert_eq!(captioned, ["2"]);

        let div = find_first(doc.root_element(), |el| has_class(el, "y")).unwrap();
        assert!(attr_starts_with(&div, "id", "a"));
        assert!(!attr_starts_with(&div, "missing", ""));
    }

    #[test]
    fn find_first_is_scoped() {
        let doc = Html::parse_document(DOC);
        let s2 = find_first(doc.root_element(), |el| attr(el, "id") == Some("s2")).unwrap();
        let img = find_first(s2, |el| is_tag(el, "img")).unwrap();
        assert_eq!(attr(&img, "data-k"), Some("2"));
        assert!(find_first(s2, |el| has_class(el, "mw-headline")).is_none());
    }
}
