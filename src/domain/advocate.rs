use serde::{Deserialize, Serialize};

/// A person listed in the advocate directory.
///
/// Records are immutable once constructed; search and pagination never mutate
/// them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
    /// Present only for persisted records; the static fallback has no ids.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    /// Ordered tags; absence is the empty list, never a null.
    #[serde(default)]
    pub specialties: Vec<String>,
    pub years_of_experience: i32,
    /// Displayed only, excluded from search matching.
    pub phone_number: i64,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewAdvocate {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub specialties: Vec<String>,
    pub years_of_experience: i32,
    pub phone_number: i64,
}

impl NewAdvocate {
    #[must_use]
    pub fn new(
        first_name: String,
        last_name: String,
        city: String,
        degree: String,
        specialties: Vec<String>,
        years_of_experience: i32,
        phone_number: i64,
    ) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            city: city.trim().to_string(),
            degree: degree.trim().to_string(),
            specialties: specialties
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            years_of_experience: years_of_experience.max(0),
            phone_number,
        }
    }
}

impl From<&Advocate> for NewAdvocate {
    fn from(advocate: &Advocate) -> Self {
        Self {
            first_name: advocate.first_name.clone(),
            last_name: advocate.last_name.clone(),
            city: advocate.city.clone(),
            degree: advocate.degree.clone(),
            specialties: advocate.specialties.clone(),
            years_of_experience: advocate.years_of_experience,
            phone_number: advocate.phone_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_text_fields_and_drops_empty_tags() {
        let advocate = NewAdvocate::new(
            " Ann ".to_string(),
            "Lee".to_string(),
            " Austin".to_string(),
            "MD ".to_string(),
            vec!["  Trauma & PTSD ".to_string(), "   ".to_string()],
            7,
            5551234567,
        );
        assert_eq!(advocate.first_name, "Ann");
        assert_eq!(advocate.city, "Austin");
        assert_eq!(advocate.degree, "MD");
        assert_eq!(advocate.specialties, vec!["Trauma & PTSD".to_string()]);
    }

    #[test]
    fn new_clamps_negative_experience() {
        let advocate = NewAdvocate::new(
            "Ann".to_string(),
            "Lee".to_string(),
            "Austin".to_string(),
            "MD".to_string(),
            vec![],
            -3,
            5551234567,
        );
        assert_eq!(advocate.years_of_experience, 0);
    }

    #[test]
    fn id_is_omitted_from_json_when_absent() {
        let advocate = Advocate {
            first_name: "Ann".to_string(),
            ..Advocate::default()
        };
        let json = serde_json::to_value(&advocate).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["firstName"], "Ann");
        assert_eq!(json["specialties"], serde_json::json!([]));
    }
}
