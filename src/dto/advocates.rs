//! DTOs exposed by the advocate API endpoints.

/// Raw query parameters accepted by the advocate listing service.
///
/// Pagination values stay untyped strings here: malformed input is clamped
/// by the normalizer, never rejected at deserialization time.
#[derive(Debug, Default, Clone)]
pub struct AdvocatesQuery {
    /// Optional free-form search string applied to the directory.
    pub search: Option<String>,
    /// Optional 1-based page number, as received.
    pub page: Option<String>,
    /// Optional page size, as received.
    pub page_size: Option<String>,
}
