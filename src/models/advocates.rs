#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AdvocateRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    /// JSON array text, element order as inserted.
    pub specialties: String,
    pub years_of_experience: i64,
    pub phone_number: String,
    pub created_at: String,
}
