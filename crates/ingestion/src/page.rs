//! Concrete well-detail page document.
//!
//! The OCD permitting site renders each field into a `<span>` whose id is a
//! fixed ASP.NET control prefix plus a per-field key. The scan below is
//! deliberately naive but tailored to that structure: find the span by id,
//! take its inner text, strip markup. It operates case-insensitively on
//! ASCII tag names and never panics on malformed input.

use crate::document::SourceDocument;

/// ASP.NET control-tree prefix shared by every field span on the page.
const SPAN_ID_PREFIX: &str = "ctl00_ctl00__main_main_ucGeneralWellInformation_";

/// One fetched well-detail page.
pub struct WellPage {
    html: String,
    // ASCII-lowercased shadow copy; byte offsets line up with `html`.
    html_lc: String,
}

impl WellPage {
    pub fn new(html: impl Into<String>) -> Self {
        let html = html.into();
        let html_lc = html.to_ascii_lowercase();
        Self { html, html_lc }
    }

    /// Inner text of the span with the given full id, or `None` when the
    /// span is missing or empty.
    fn span_text(&self, id: &str) -> Option<String> {
        let needle = format!("id=\"{}\"", id.to_ascii_lowercase());
        let attr_idx = self.html_lc.find(&needle)?;

        // Jump past the '>' of the opening tag
        let open_end = self.html[attr_idx..].find('>')? + attr_idx + 1;
        let close_rel = self.html_lc[open_end..].find("</span>")?;
        let inner = &self.html[open_end..open_end + close_rel];

        let text = normalize_ws(&strip_tags(&normalize_entities(inner)));
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl SourceDocument for WellPage {
    fn field_text(&self, key: &str) -> Option<String> {
        self.span_text(&format!("{}{}", SPAN_ID_PREFIX, key))
    }
}

/// Minimal HTML entity decoding: handle `&nbsp;` and `&amp;` only.
fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}

/// Remove all HTML tags `<...>` from the string.
fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Collapse runs of whitespace to single spaces and trim the ends.
fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
