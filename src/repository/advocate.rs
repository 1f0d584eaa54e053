use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{Bool, Text};
use diesel::sqlite::Sqlite;

use crate::db::DbPool;
use crate::domain::advocate::{Advocate, NewAdvocate};
use crate::models::advocate::{Advocate as DbAdvocate, NewAdvocate as DbNewAdvocate};
use crate::repository::search::{SEARCH_FIELDS, SearchField, SearchTerm};
use crate::repository::{
    AdvocateListQuery, AdvocateReader, AdvocateWriter, errors::RepositoryResult,
};
use crate::schema::advocates;

type BoxedCondition = Box<dyn BoxableExpression<advocates::table, Sqlite, SqlType = Bool>>;

/// Compiles one search condition into its SQL form.
///
/// `years_of_experience` is matched against its decimal text rendering and
/// `specialties` against the serialized tag list, mirroring the in-process
/// evaluation in [`crate::repository::search`].
fn field_condition(field: SearchField, pattern: &str) -> BoxedCondition {
    match field {
        SearchField::FirstName => {
            Box::new(advocates::first_name.like(pattern.to_string()).escape('\\'))
        }
        SearchField::LastName => {
            Box::new(advocates::last_name.like(pattern.to_string()).escape('\\'))
        }
        SearchField::City => Box::new(advocates::city.like(pattern.to_string()).escape('\\')),
        SearchField::Degree => Box::new(advocates::degree.like(pattern.to_string()).escape('\\')),
        SearchField::YearsOfExperience => Box::new(
            sql::<Bool>("CAST(years_of_experience AS TEXT) LIKE ")
                .bind::<Text, _>(pattern.to_string())
                .sql(" ESCAPE '\\'"),
        ),
        SearchField::Specialties => {
            Box::new(advocates::specialties.like(pattern.to_string()).escape('\\'))
        }
    }
}

/// OR-chain over every searchable projection, built from the same field list
/// the static backend evaluates.
fn search_filter(term: &SearchTerm) -> BoxedCondition {
    let pattern = term.like_pattern();
    let mut filter = field_condition(SEARCH_FIELDS[0], &pattern);
    for field in &SEARCH_FIELDS[1..] {
        filter = Box::new(filter.or(field_condition(*field, &pattern)));
    }
    filter
}

/// Diesel implementation of the advocate store.
pub struct DieselAdvocateRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselAdvocateRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

impl AdvocateReader for DieselAdvocateRepository<'_> {
    fn list_advocates(&self, query: AdvocateListQuery) -> RepositoryResult<(usize, Vec<Advocate>)> {
        let mut conn = self.pool.get()?;

        // The count query and the page query must filter identically; both
        // are produced by the same builder.
        let query_builder = || {
            let mut items = advocates::table.into_boxed::<Sqlite>();
            if let Some(term) = &query.search {
                items = items.filter(search_filter(term));
            }
            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder().order(advocates::id.asc());
        if let Some(pagination) = &query.pagination {
            let offset = i64::try_from(pagination.offset()).unwrap_or(i64::MAX);
            let limit = pagination.page_size as i64;
            items = items.offset(offset).limit(limit);
        }

        let advocates = items
            .load::<DbAdvocate>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Advocate>>();

        Ok((total, advocates))
    }
}

impl AdvocateWriter for DieselAdvocateRepository<'_> {
    fn create_advocates(&self, new_advocates: &[NewAdvocate]) -> RepositoryResult<usize> {
        let mut conn = self.pool.get()?;
        let insertables: Vec<DbNewAdvocate> = new_advocates.iter().map(Into::into).collect();
        let affected = diesel::insert_into(advocates::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
