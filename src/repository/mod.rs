use crate::db::DbPool;
use crate::domain::advocate::{Advocate, NewAdvocate};
use crate::pagination::PageParams;
use crate::repository::errors::RepositoryResult;
use crate::repository::search::SearchTerm;

pub mod advocate;
pub mod errors;
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod search;

/// Filter and window applied to an advocate listing.
#[derive(Debug, Clone, Default)]
pub struct AdvocateListQuery {
    pub search: Option<SearchTerm>,
    pub pagination: Option<PageParams>,
}

impl AdvocateListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: SearchTerm) -> Self {
        self.search = Some(term);
        self
    }

    pub fn paginate(mut self, params: PageParams) -> Self {
        self.pagination = Some(params);
        self
    }
}

pub trait AdvocateReader {
    /// Returns the total match count ignoring pagination, plus the requested
    /// window of matching records in stable order.
    fn list_advocates(&self, query: AdvocateListQuery) -> RepositoryResult<(usize, Vec<Advocate>)>;
}

pub trait AdvocateWriter {
    fn create_advocates(&self, new_advocates: &[NewAdvocate]) -> RepositoryResult<usize>;
}

/// The record store serving this process, selected once at startup.
///
/// Passed explicitly into the HTTP layer instead of being read from ambient
/// globals; handlers dispatch on it per request.
pub enum StorageBackend {
    /// Live SQLite store reached through the connection pool.
    Persistent(DbPool),
    /// Immutable in-process fallback used when no database is configured.
    Static(&'static [Advocate]),
}
