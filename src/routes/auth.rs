use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::jwt::{Claims, encode_token};
use crate::auth::password;
use crate::db;
use crate::error::AppError;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub id: i64,
    pub token: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub id: i64,
}

pub async fn register(
    State(state): State<SharedState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AppError> {
    // Compatibility quirk: the request is rejected only when every field is
    // empty, not when any one of them is.
    if req.name.is_empty() && req.email.is_empty() && req.password.is_empty() {
        return Err(AppError::BadRequest);
    }

    if db::users::find_by_email(&state.pool, &req.email)
        .await?
        .is_some()
    {
        return Err(AppError::AlreadyRegistered);
    }

    let password_hash = password::hash(&req.password).map_err(AppError::Internal)?;
    let public_id = Uuid::new_v4().to_string();

    let user = db::users::create(&state.pool, &public_id, &req.name, &req.email, &password_hash)
        .await
        .map_err(|e| match e {
            // Lost the insert race against a concurrent registration with
            // the same email.
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::AlreadyRegistered
            }
            _ => AppError::Database(e),
        })?;

    let token = encode_token(&Claims::new(user.public_id.clone()), &state.config.jwt_secret)
        .map_err(AppError::Internal)?;

    tracing::info!(user_id = user.id, "user registered");

    Ok(Json(RegisterResponse { id: user.id, token }))
}

pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(AppError::BadRequest);
    }

    let user = db::users::find_by_email(&state.pool, &req.email)
        .await?
        .ok_or(AppError::Authentication)?;

    let valid =
        password::verify(&req.password, &user.password_hash).map_err(AppError::Internal)?;
    if !valid {
        return Err(AppError::Authentication);
    }

    let token = encode_token(&Claims::new(user.public_id.clone()), &state.config.jwt_secret)
        .map_err(AppError::Internal)?;

    Ok(Json(LoginResponse { token, id: user.id }))
}
