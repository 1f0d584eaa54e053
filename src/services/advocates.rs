use crate::domain::advocate::{Advocate, NewAdvocate};
use crate::dto::advocates::AdvocatesQuery;
use crate::pagination::{Page, PageParams};
use crate::repository::search::SearchTerm;
use crate::repository::{AdvocateListQuery, AdvocateReader, AdvocateWriter};
use crate::seed;
use crate::services::ServiceResult;

/// Returns one page of the directory matching the caller's search string.
///
/// Raw pagination input is normalized here; the search string is trimmed and
/// an empty string means no filtering.
pub fn list_advocates<R>(repo: &R, params: AdvocatesQuery) -> ServiceResult<Page<Advocate>>
where
    R: AdvocateReader + ?Sized,
{
    let window = PageParams::from_raw(params.page.as_deref(), params.page_size.as_deref());

    let mut query = AdvocateListQuery::new().paginate(window);
    if let Some(term) = params.search.as_deref().and_then(SearchTerm::new) {
        query = query.search(term);
    }

    let (total, advocates) = repo.list_advocates(query)?;

    Ok(Page::new(advocates, total, window))
}

/// Bulk-loads the built-in directory into the persistent store.
pub fn seed_advocates<R>(repo: &R) -> ServiceResult<usize>
where
    R: AdvocateWriter + ?Sized,
{
    let new_advocates: Vec<NewAdvocate> = seed::advocates().iter().map(Into::into).collect();
    let inserted = repo.create_advocates(&new_advocates)?;

    Ok(inserted)
}
