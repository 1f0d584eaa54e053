use crate::domain::advocate::Advocate;
use crate::repository::{AdvocateListQuery, AdvocateReader, errors::RepositoryResult};

/// In-process advocate store over an immutable, fully materialized list.
///
/// Serves as the offline fallback when no database is configured. Evaluation
/// is deterministic and side-effect free; records are returned in the
/// collection's fixed insertion order.
pub struct StaticAdvocateRepository<'a> {
    advocates: &'a [Advocate],
}

impl<'a> StaticAdvocateRepository<'a> {
    pub fn new(advocates: &'a [Advocate]) -> Self {
        Self { advocates }
    }
}

impl AdvocateReader for StaticAdvocateRepository<'_> {
    fn list_advocates(&self, query: AdvocateListQuery) -> RepositoryResult<(usize, Vec<Advocate>)> {
        let matches: Vec<&Advocate> = self
            .advocates
            .iter()
            .filter(|advocate| {
                query
                    .search
                    .as_ref()
                    .is_none_or(|term| term.matches(advocate))
            })
            .collect();

        let total = matches.len();

        let items: Vec<Advocate> = match &query.pagination {
            Some(pagination) => matches
                .into_iter()
                .skip(pagination.offset())
                .take(pagination.page_size)
                .cloned()
                .collect(),
            None => matches.into_iter().cloned().collect(),
        };

        Ok((total, items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::PageParams;
    use crate::repository::search::SearchTerm;

    fn dataset() -> Vec<Advocate> {
        ["Ann", "Bob", "Cid", "Dee", "Eva"]
            .iter()
            .enumerate()
            .map(|(i, name)| Advocate {
                id: None,
                first_name: name.to_string(),
                last_name: "Miller".to_string(),
                city: "Dallas".to_string(),
                degree: "PhD".to_string(),
                specialties: vec!["Life coaching".to_string()],
                years_of_experience: i as i32,
                phone_number: 5550000000 + i as i64,
            })
            .collect()
    }

    #[test]
    fn no_search_returns_everything_in_order() {
        let data = dataset();
        let repo = StaticAdvocateRepository::new(&data);
        let (total, items) = repo.list_advocates(AdvocateListQuery::new()).unwrap();
        assert_eq!(total, 5);
        let names: Vec<_> = items.iter().map(|a| a.first_name.as_str()).collect();
        assert_eq!(names, ["Ann", "Bob", "Cid", "Dee", "Eva"]);
    }

    #[test]
    fn window_slices_the_match_list() {
        let data = dataset();
        let repo = StaticAdvocateRepository::new(&data);
        let query = AdvocateListQuery::new().paginate(PageParams {
            page: 2,
            page_size: 2,
        });
        let (total, items) = repo.list_advocates(query).unwrap();
        assert_eq!(total, 5);
        let names: Vec<_> = items.iter().map(|a| a.first_name.as_str()).collect();
        assert_eq!(names, ["Cid", "Dee"]);
    }

    #[test]
    fn window_past_the_end_is_empty_with_full_total() {
        let data = dataset();
        let repo = StaticAdvocateRepository::new(&data);
        let query = AdvocateListQuery::new().paginate(PageParams {
            page: 9,
            page_size: 2,
        });
        let (total, items) = repo.list_advocates(query).unwrap();
        assert_eq!(total, 5);
        assert!(items.is_empty());
    }

    #[test]
    fn search_filters_before_windowing() {
        let data = dataset();
        let repo = StaticAdvocateRepository::new(&data);
        let query = AdvocateListQuery::new()
            .search(SearchTerm::new("bob").unwrap())
            .paginate(PageParams {
                page: 1,
                page_size: 10,
            });
        let (total, items) = repo.list_advocates(query).unwrap();
        assert_eq!(total, 1);
        assert_eq!(items[0].first_name, "Bob");
    }
}
