// src/models/category.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// Represents the 'categories' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,

    /// Display label (e.g. "Science"). No uniqueness constraint.
    /// Mapped from the database column 'type' since `type` is a reserved
    /// keyword in Rust.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub category_type: String,
}

/// DTO for creating a new category. A missing field deserializes to None
/// and is rejected as unprocessable.
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    #[serde(rename = "type")]
    pub category_type: Option<String>,
}
