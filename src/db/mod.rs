pub mod advisors;
pub mod appointments;
pub mod users;
