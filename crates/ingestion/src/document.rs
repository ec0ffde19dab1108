//! Source document abstraction.

/// An opaque key→text view of one well's source page.
///
/// The normalizer is defined purely against this lookup: a key either
/// resolves to the field's raw text or it does not, and "not found" is a
/// normal value rather than a fault. All markup-specific parsing lives in
/// implementations (see [`crate::page::WellPage`]).
pub trait SourceDocument {
    /// Raw text for a field key, or `None` when the field is absent from
    /// the page. Implementations return `None` for empty text as well, so
    /// callers never see a present-but-blank value.
    fn field_text(&self, key: &str) -> Option<String>;
}
