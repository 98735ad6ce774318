// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The prompt text shown to the player.
    pub question: String,

    pub answer: String,

    /// Id of the category this question belongs to. References
    /// categories.id by convention only; nothing enforces it.
    pub category: i64,

    pub difficulty: i64,
}

/// DTO for creating a new question. Missing fields deserialize to None.
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

/// DTO for the search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}
