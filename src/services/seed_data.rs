//! Fixed demo dataset and the value pools the bulk generator draws from.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::NewAdvocate;

pub const SPECIALTIES: [&str; 26] = [
    "Bipolar",
    "LGBTQ",
    "Medication/Prescribing",
    "Suicide History/Attempts",
    "General Mental Health (anxiety, depression, stress, grief, life transitions)",
    "Men's issues",
    "Relationship Issues (family, friends, couple, etc)",
    "Trauma & PTSD",
    "Personality disorders",
    "Personal growth",
    "Substance use/abuse",
    "Pediatrics",
    "Women's issues (post-partum, infertility, family planning)",
    "Chronic pain",
    "Weight loss & nutrition",
    "Eating disorders",
    "Diabetic Diet and nutrition",
    "Coaching (leadership, career, academic and wellness)",
    "Life coaching",
    "Obsessive-compulsive disorders",
    "Neuropsychological evaluations & testing (ADHD testing)",
    "Attention and Hyperactivity (ADHD)",
    "Sleep issues",
    "Schizophrenia and psychotic disorders",
    "Learning disorders",
    "Domestic abuse",
];

const FIRST_NAMES: [&str; 48] = [
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda", "William",
    "Barbara", "David", "Elizabeth", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Christopher", "Nancy", "Daniel", "Lisa", "Matthew", "Betty", "Anthony",
    "Margaret", "Mark", "Sandra", "Donald", "Ashley", "Steven", "Kimberly", "Paul", "Emily",
    "Andrew", "Donna", "Joshua", "Michelle", "Kevin", "Laura", "Ryan", "Amanda", "Brian",
    "Megan", "Jacob", "Olivia",
];

const LAST_NAMES: [&str; 48] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores", "Green", "Adams", "Nelson", "Baker", "Hall",
    "Rivera", "Campbell", "Mitchell",
];

const CITIES: [&str; 30] = [
    "New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia", "San Antonio",
    "San Diego", "Dallas", "San Jose", "Austin", "Jacksonville", "Fort Worth", "Columbus",
    "San Francisco", "Charlotte", "Indianapolis", "Seattle", "Denver", "Washington", "Boston",
    "El Paso", "Detroit", "Nashville", "Portland", "Memphis", "Oklahoma City", "Las Vegas",
    "Louisville", "Baltimore",
];

const DEGREES: [&str; 8] = ["MD", "PhD", "PsyD", "MSW", "LCSW", "LMFT", "LPC", "NP"];

fn advocate(
    first_name: &str,
    last_name: &str,
    city: &str,
    degree: &str,
    specialties: &[&str],
    years_of_experience: i64,
    phone_number: &str,
) -> NewAdvocate {
    NewAdvocate {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        city: city.to_string(),
        degree: degree.to_string(),
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
        years_of_experience,
        phone_number: phone_number.to_string(),
    }
}

/// The small curated dataset used by `POST /api/seed`.
pub fn fixed_advocates() -> Vec<NewAdvocate> {
    let s = &SPECIALTIES;
    vec![
        advocate("John", "Doe", "New York", "MD", &[s[0], s[1]], 10, "5551234567"),
        advocate("Jane", "Smith", "Los Angeles", "PhD", &[s[2], s[3]], 8, "5559876543"),
        advocate("Alice", "Johnson", "Chicago", "MSW", &[s[4]], 5, "5554567890"),
        advocate("Michael", "Brown", "Houston", "MD", &[s[5], s[6]], 12, "5556543210"),
        advocate("Emily", "Davis", "Phoenix", "PhD", &[s[7]], 7, "5553210987"),
        advocate("Chris", "Martinez", "Philadelphia", "MSW", &[s[8], s[9]], 9, "5557890123"),
        advocate("Jessica", "Taylor", "San Antonio", "MD", &[s[10], s[11], s[12]], 11, "5554561234"),
        advocate("David", "Harris", "San Diego", "PhD", &[s[13]], 6, "5557896543"),
        advocate("Laura", "Clark", "Dallas", "MSW", &[s[14], s[15]], 4, "5550123456"),
        advocate("Daniel", "Lewis", "San Jose", "MD", &[s[16], s[17]], 13, "5553217654"),
        advocate("Sarah", "Lee", "Austin", "PhD", &[s[18]], 10, "5551238765"),
        advocate("James", "King", "Jacksonville", "MSW", &[s[19], s[20]], 5, "5556540987"),
        advocate("Megan", "Green", "San Francisco", "MD", &[s[21], s[22]], 14, "5558901234"),
        advocate("Joshua", "Walker", "Columbus", "PhD", &[s[23]], 9, "5554563210"),
        advocate("Amanda", "Hall", "Fort Worth", "MSW", &[s[24], s[25], s[0]], 3, "5559870123"),
    ]
}

/// One to five distinct specialties, in draw order.
fn random_specialties<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    let count = rng.gen_range(1..=5);
    SPECIALTIES
        .choose_multiple(rng, count)
        .map(|s| s.to_string())
        .collect()
}

/// Ten digits: area 200-999, prefix 200-999, line 1000-9999.
fn random_phone_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}{}{}",
        rng.gen_range(200..=999),
        rng.gen_range(200..=999),
        rng.gen_range(1000..=9999)
    )
}

fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &[&str]) -> String {
    pool.choose(rng).copied().unwrap_or_default().to_string()
}

pub fn generate_advocates<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<NewAdvocate> {
    (0..count)
        .map(|_| NewAdvocate {
            first_name: pick(rng, &FIRST_NAMES),
            last_name: pick(rng, &LAST_NAMES),
            city: pick(rng, &CITIES),
            degree: pick(rng, &DEGREES),
            specialties: random_specialties(rng),
            years_of_experience: rng.gen_range(1..=40),
            phone_number: random_phone_number(rng),
        })
        .collect()
}
