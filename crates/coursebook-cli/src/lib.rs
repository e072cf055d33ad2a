//! # Coursebook CLI
//!
//! Database seeding and account utilities for Coursebook development.
//!
//! ## Usage
//!
//! ```ignore
//! use coursebook_cli::seeder::{seed_all, SeedConfig};
//!
//! let config = SeedConfig::new(10).with_courses_per_user(3);
//! seed_all(&pool, config).await?;
//! ```

pub mod seeder;
