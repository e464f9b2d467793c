use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Advisor {
    pub id: i64,
    pub name: String,
    pub photo_url: String,
}
