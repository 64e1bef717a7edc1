//! Small document queries on top of `scraper`.
use scraper::{ElementRef, Html, Selector};

pub(crate) fn select_one<'a>(doc: &'a Html, selector: &Selector) -> Option<ElementRef<'a>> {
    doc.select(selector).next()
}

/// Text of the first text node directly under `el`, nested elements are skipped.
pub(crate) fn first_text_node<'a>(el: ElementRef<'a>) -> Option<&'a str> {
    el.children().find_map(|node| node.value().as_text().map(|t| &**t))
}

pub(crate) fn next_sibling_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.next_siblings().find_map(ElementRef::wrap)
}

/// All text below `el`, trimmed.
pub(crate) fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_owned()
}
