pub mod advisor;
pub mod appointment;
pub mod user;

pub use advisor::Advisor;
pub use appointment::{Appointment, Booking};
pub use user::User;
