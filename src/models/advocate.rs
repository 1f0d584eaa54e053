use diesel::prelude::*;

use crate::domain::advocate::{Advocate as DomainAdvocate, NewAdvocate as DomainNewAdvocate};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::advocates)]
/// Diesel model for [`crate::domain::advocate::Advocate`].
pub struct Advocate {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    /// Tag list persisted as serialized JSON text.
    pub specialties: String,
    pub years_of_experience: i32,
    pub phone_number: i64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::advocates)]
/// Insertable form of [`Advocate`].
pub struct NewAdvocate<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub city: &'a str,
    pub degree: &'a str,
    pub specialties: String,
    pub years_of_experience: i32,
    pub phone_number: i64,
}

/// Encodes a tag list into the stored textual representation.
pub fn encode_specialties(specialties: &[String]) -> String {
    serde_json::to_string(specialties).unwrap_or_else(|_| "[]".to_string())
}

/// Decodes the stored textual representation back into a tag list.
///
/// Rows holding malformed text degrade to the empty list rather than failing
/// the whole query.
pub fn decode_specialties(stored: &str) -> Vec<String> {
    serde_json::from_str(stored).unwrap_or_default()
}

impl From<Advocate> for DomainAdvocate {
    fn from(advocate: Advocate) -> Self {
        Self {
            id: Some(advocate.id),
            specialties: decode_specialties(&advocate.specialties),
            first_name: advocate.first_name,
            last_name: advocate.last_name,
            city: advocate.city,
            degree: advocate.degree,
            years_of_experience: advocate.years_of_experience,
            phone_number: advocate.phone_number,
        }
    }
}

impl<'a> From<&'a DomainNewAdvocate> for NewAdvocate<'a> {
    fn from(advocate: &'a DomainNewAdvocate) -> Self {
        Self {
            first_name: advocate.first_name.as_str(),
            last_name: advocate.last_name.as_str(),
            city: advocate.city.as_str(),
            degree: advocate.degree.as_str(),
            specialties: encode_specialties(&advocate.specialties),
            years_of_experience: advocate.years_of_experience,
            phone_number: advocate.phone_number,
        }
    }
}
