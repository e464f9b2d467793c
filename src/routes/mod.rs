pub mod admin;
pub mod advisors;
pub mod auth;
pub mod bookings;

use axum::Router;
use axum::routing::{get, post};

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/user/register", post(auth::register))
        .route("/user/login", post(auth::login))
        // Admin
        .route("/admin/advisor", post(admin::add_advisor))
        // Advisors & bookings
        .route("/user/{user_id}/advisor", get(advisors::list))
        .route("/user/{user_id}/advisor/{advisor_id}", post(bookings::book))
        .route("/user/{user_id}/advisor/booking", get(bookings::list))
}
