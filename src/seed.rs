//! Built-in advocate directory.
//!
//! Serves two purposes: it is the static fallback collection when no
//! database is configured, and the payload bulk-loaded into the persistent
//! store by the seed endpoint.

use std::sync::LazyLock;

use crate::domain::advocate::Advocate;

fn advocate(
    first_name: &str,
    last_name: &str,
    city: &str,
    degree: &str,
    specialties: &[&str],
    years_of_experience: i32,
    phone_number: i64,
) -> Advocate {
    Advocate {
        id: None,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        city: city.to_string(),
        degree: degree.to_string(),
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
        years_of_experience,
        phone_number,
    }
}

static ADVOCATES: LazyLock<Vec<Advocate>> = LazyLock::new(|| {
    vec![
        advocate(
            "John",
            "Doe",
            "New York",
            "MD",
            &["Bipolar", "LGBTQ", "Medication/Prescribing"],
            10,
            5551234567,
        ),
        advocate(
            "Jane",
            "Smith",
            "Los Angeles",
            "PhD",
            &["Trauma & PTSD", "Personality disorders"],
            8,
            5559876543,
        ),
        advocate(
            "Alice",
            "Johnson",
            "Chicago",
            "MSW",
            &["General Mental Health", "Personal growth"],
            5,
            5554567890,
        ),
        advocate(
            "Michael",
            "Brown",
            "Houston",
            "MD",
            &["Substance use/abuse", "Men's issues"],
            12,
            5556543210,
        ),
        advocate(
            "Emily",
            "Davis",
            "Phoenix",
            "PhD",
            &["Eating disorders", "Women's issues"],
            7,
            5553210987,
        ),
        advocate(
            "Chris",
            "Martinez",
            "Philadelphia",
            "MSW",
            &["Domestic abuse", "Trauma & PTSD"],
            9,
            5557890123,
        ),
        advocate(
            "Jessica",
            "Taylor",
            "San Antonio",
            "MD",
            &["Pediatrics", "Attention and Hyperactivity (ADHD)"],
            11,
            5554561234,
        ),
        advocate(
            "David",
            "Harris",
            "San Diego",
            "PhD",
            &["Obsessive-compulsive disorders", "Sleep issues"],
            6,
            5557896543,
        ),
        advocate(
            "Laura",
            "Clark",
            "Dallas",
            "MSW",
            &["Grief", "Life coaching"],
            4,
            5550123456,
        ),
        advocate(
            "Daniel",
            "Lewis",
            "San Jose",
            "MD",
            &["Schizophrenia and psychotic disorders", "Medication/Prescribing"],
            13,
            5553217654,
        ),
        advocate(
            "Sarah",
            "Lee",
            "Austin",
            "PhD",
            &["Neuropsychological evaluations & testing", "Learning disorders"],
            10,
            5551238765,
        ),
        advocate(
            "James",
            "King",
            "Jacksonville",
            "MSW",
            &["Suicide History/Attempts", "General Mental Health"],
            5,
            5556540987,
        ),
        advocate(
            "Megan",
            "Green",
            "San Francisco",
            "MD",
            &["Chronic pain", "Weight loss & nutrition"],
            14,
            5559870123,
        ),
        advocate(
            "Joshua",
            "Walker",
            "Columbus",
            "PhD",
            &["Coaching (leadership, career, academic and wellness)"],
            9,
            5556781234,
        ),
        advocate(
            "Amanda",
            "Hall",
            "Fort Worth",
            "MSW",
            &["Diabetic Diet and nutrition", "Women's issues"],
            3,
            5559872345,
        ),
    ]
});

/// The built-in directory, shared by reference for the process lifetime.
pub fn advocates() -> &'static [Advocate] {
    &ADVOCATES
}
