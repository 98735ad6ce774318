// src/handlers/question.rs

use axum::{
    Json,
    extract::{Path, Query, State, rejection::{JsonRejection, QueryRejection}},
    response::IntoResponse,
};
use serde_json::json;
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::question::{CreateQuestionRequest, Question, SearchRequest},
    pagination::{PageParams, paginate},
    state::AppState,
};

/// Lists all questions ordered by id, paginated.
///
/// `total_questions` is the unpaginated count; a page with no results is
/// reported as not found.
pub async fn list_questions(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let questions = sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
    )
    .fetch_all(&state.pool)
    .await?;

    let total_questions = questions.len();
    let page = params.map(|Query(p)| p.page()).unwrap_or(1);
    let questions = paginate(page, questions, state.config.questions_per_page);

    if questions.is_empty() {
        return Err(AppError::NotFound);
    }

    let categories = super::category::category_map(&state.pool).await?;

    Ok(Json(json!({
        "success": true,
        "questions": questions,
        "total_questions": total_questions,
        "current_category": null,
        "categories": categories,
    })))
}

/// Creates a new question.
///
/// Every field the client left out surfaces as None and the record is
/// rejected as unprocessable before touching the store.
pub async fn create_question(
    State(state): State<AppState>,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|_| AppError::Unprocessable)?;
    let (Some(question), Some(answer), Some(category), Some(difficulty)) = (
        payload.question,
        payload.answer,
        payload.category,
        payload.difficulty,
    ) else {
        return Err(AppError::Unprocessable);
    };

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO questions (question, answer, category, difficulty) \
         VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(&question)
    .bind(&answer)
    .bind(category)
    .bind(difficulty)
    .fetch_one(&state.pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to create question: {:?}", e);
        AppError::Unprocessable
    })?;

    let created = Question {
        id,
        question,
        answer,
        category,
        difficulty,
    };
    let categories = super::category::category_map(&state.pool).await?;

    Ok(Json(json!({
        "success": true,
        "created": id,
        "question": created,
        "categories": categories,
    })))
}

/// Deletes a question by id, permanently.
///
/// Absence is detected before the store mutation is attempted, so a
/// nonexistent id is not found rather than unprocessable.
pub async fn delete_question(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    sqlx::query_scalar::<_, i64>("SELECT id FROM questions WHERE id = ?")
        .bind(id)
        .fetch_optional(&pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up question {}: {:?}", id, e);
            AppError::Unprocessable
        })?
        .ok_or(AppError::NotFound)?;

    sqlx::query("DELETE FROM questions WHERE id = ?")
        .bind(id)
        .execute(&pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete question {}: {:?}", id, e);
            AppError::Unprocessable
        })?;

    let total_questions = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
        .fetch_one(&pool)
        .await?;

    Ok(Json(json!({
        "success": true,
        "deleted": id,
        "total_questions": total_questions,
    })))
}

/// Searches questions whose text contains the term, case-insensitively.
///
/// The filter is delegated to the store as a LIKE pattern. An absent or
/// empty term matches every question, and an empty result page is a
/// normal response, not an error.
pub async fn search_questions(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|_| AppError::BadRequest)?;
    let term = payload.search_term.unwrap_or_default();
    let pattern = format!("%{}%", term);

    let matches = sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions \
         WHERE question LIKE ? ORDER BY id",
    )
    .bind(&pattern)
    .fetch_all(&state.pool)
    .await?;

    let total_questions = matches.len();
    let page = params.map(|Query(p)| p.page()).unwrap_or(1);
    let questions = paginate(page, matches, state.config.questions_per_page);

    Ok(Json(json!({
        "success": true,
        "questions": questions,
        "total_questions": total_questions,
        "current_category": null,
    })))
}
