pub mod courses;
pub mod home;
pub mod users;

pub use self::courses::router::init_courses_router;
pub use self::home::router::init_home_router;
pub use self::users::router::init_users_router;
