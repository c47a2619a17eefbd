use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Reference entity owned by an external system; read-only here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Team {
    pub id: i64,
    pub name: String,
}
