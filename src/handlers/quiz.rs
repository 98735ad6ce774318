// src/handlers/quiz.rs

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use rand::seq::IndexedRandom;
use serde::Deserialize;
use serde_json::json;
use sqlx::{QueryBuilder, Sqlite};

use crate::{error::AppError, models::question::Question, pagination::paginate, state::AppState};

/// Sentinel category type meaning "all categories".
const ALL_CATEGORIES: &str = "click";

/// Category descriptor sent by the quiz frontend.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: i64,
    #[serde(rename = "type")]
    pub category_type: String,
}

/// DTO for a quiz round. Both fields are required.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: Option<QuizCategory>,
    pub previous_questions: Option<Vec<i64>>,
}

/// Picks a random question the player has not seen yet.
///
/// Candidates are the questions of the requested category (or all of them
/// for the "click" sentinel) minus the previously played ids. Only the
/// first page of candidates is in play; once it is exhausted the round
/// ends with a null question rather than an error.
pub async fn play_quiz(
    State(state): State<AppState>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|_| AppError::BadRequest)?;
    let (Some(quiz_category), Some(previous_questions)) =
        (payload.quiz_category, payload.previous_questions)
    else {
        return Err(AppError::BadRequest);
    };

    let all_categories = quiz_category.category_type == ALL_CATEGORIES;

    // Dynamic WHERE clause: optional category filter plus NOT IN exclusion.
    let mut query_builder = QueryBuilder::<Sqlite>::new(
        "SELECT id, question, answer, category, difficulty FROM questions",
    );

    if !all_categories {
        query_builder.push(" WHERE category = ");
        query_builder.push_bind(quiz_category.id);
    }

    if !previous_questions.is_empty() {
        query_builder.push(if all_categories {
            " WHERE id NOT IN ("
        } else {
            " AND id NOT IN ("
        });

        let mut separated = query_builder.separated(", ");
        for id in &previous_questions {
            separated.push_bind(*id);
        }
        separated.push_unseparated(")");
    }

    query_builder.push(" ORDER BY id");

    let candidates: Vec<Question> = query_builder
        .build_query_as()
        .fetch_all(&state.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch quiz candidates: {:?}", e);
            AppError::Internal(e.to_string())
        })?;

    let candidates = paginate(1, candidates, state.config.questions_per_page);
    let question = candidates.choose(&mut rand::rng());

    Ok(Json(json!({
        "success": true,
        "question": question,
    })))
}
