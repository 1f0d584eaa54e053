//! Shared search semantics for both record store backends.
//!
//! The six match conditions are declared once as [`SEARCH_FIELDS`]; each
//! backend compiles the same list into its native evaluation form: an
//! in-process closure for the static collection, a `LIKE` chain for SQLite.

use crate::domain::advocate::Advocate;

/// One searchable projection of an advocate record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    FirstName,
    LastName,
    City,
    Degree,
    /// Matched by decimal string representation, not numeric comparison.
    YearsOfExperience,
    /// Matched per tag in process; the persistent store can only match the
    /// serialized text of the whole list, which is deliberately looser.
    Specialties,
}

/// Every projection a search term is tested against, in evaluation order.
pub const SEARCH_FIELDS: [SearchField; 6] = [
    SearchField::FirstName,
    SearchField::LastName,
    SearchField::City,
    SearchField::Degree,
    SearchField::YearsOfExperience,
    SearchField::Specialties,
];

impl SearchField {
    /// In-process evaluation of this condition; `needle` must already be
    /// lowercased.
    fn matches(self, advocate: &Advocate, needle: &str) -> bool {
        let contains = |haystack: &str| haystack.to_lowercase().contains(needle);
        match self {
            SearchField::FirstName => contains(&advocate.first_name),
            SearchField::LastName => contains(&advocate.last_name),
            SearchField::City => contains(&advocate.city),
            SearchField::Degree => contains(&advocate.degree),
            SearchField::YearsOfExperience => {
                advocate.years_of_experience.to_string().contains(needle)
            }
            SearchField::Specialties => advocate.specialties.iter().any(|tag| contains(tag)),
        }
    }
}

/// A normalized free-text search term.
///
/// Construction trims surrounding whitespace; a term that trims to nothing
/// does not exist (`new` returns `None`), which is how "no filtering" is
/// represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    folded: String,
}

impl SearchTerm {
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            raw: trimmed.to_string(),
            folded: trimmed.to_lowercase(),
        })
    }

    /// The trimmed term as entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True when any of the six searchable projections contains the term,
    /// case-insensitively.
    pub fn matches(&self, advocate: &Advocate) -> bool {
        SEARCH_FIELDS
            .iter()
            .any(|field| field.matches(advocate, &self.folded))
    }

    /// `%term%` pattern for SQL `LIKE ... ESCAPE '\'`.
    ///
    /// Wildcard characters in the term are escaped so both backends agree on
    /// exact substring containment.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.raw.len() + 2);
        pattern.push('%');
        for ch in self.raw.chars() {
            if matches!(ch, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(ch);
        }
        pattern.push('%');
        pattern
    }
}
