//! Rows generated for seeding, and the knobs that size them.

/// Seed data for creating a user.
pub struct UserSeed {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub password_hash: String,
}

/// Seed data for creating a course.
pub struct CourseSeed {
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub user_id: i64,
}

/// How much data [`super::seed_all`] generates.
#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub users: usize,
    pub courses_per_user: usize,
    /// Password every seeded user signs in with.
    pub password: String,
    pub bcrypt_cost: u32,
}

impl SeedConfig {
    pub fn new(users: usize) -> Self {
        Self {
            users,
            courses_per_user: 3,
            password: "password".to_string(),
            bcrypt_cost: bcrypt_default_cost(),
        }
    }

    pub fn with_courses_per_user(mut self, courses_per_user: usize) -> Self {
        self.courses_per_user = courses_per_user;
        self
    }

    pub fn with_bcrypt_cost(mut self, bcrypt_cost: u32) -> Self {
        self.bcrypt_cost = bcrypt_cost;
        self
    }
}

fn bcrypt_default_cost() -> u32 {
    coursebook_config::AuthConfig::default().bcrypt_cost
}
