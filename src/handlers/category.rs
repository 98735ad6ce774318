// src/handlers/category.rs

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::{JsonRejection, QueryRejection}},
    response::IntoResponse,
};
use serde_json::json;
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::{category::{Category, CreateCategoryRequest}, question::Question},
    pagination::{PageParams, paginate},
    state::AppState,
};

/// Fetches all categories as an id -> type map, ordered by type.
/// Shared by every endpoint that echoes the category list back.
pub async fn category_map(pool: &SqlitePool) -> Result<BTreeMap<i64, String>, AppError> {
    let categories =
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY type")
            .fetch_all(pool)
            .await?;

    Ok(categories
        .into_iter()
        .map(|c| (c.id, c.category_type))
        .collect())
}

/// Lists all categories as an id -> type map.
pub async fn list_categories(
    State(pool): State<SqlitePool>,
) -> Result<impl IntoResponse, AppError> {
    let categories = category_map(&pool).await?;

    Ok(Json(json!({
        "success": true,
        "categories": categories,
    })))
}

/// Creates a new category.
///
/// A missing body or missing `type` field is unprocessable, as is a
/// rejected insert.
pub async fn create_category(
    State(pool): State<SqlitePool>,
    payload: Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|_| AppError::Unprocessable)?;
    let Some(category_type) = payload.category_type else {
        return Err(AppError::Unprocessable);
    };

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO categories (type) VALUES (?) RETURNING id",
    )
    .bind(&category_type)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to create category: {:?}", e);
        AppError::Unprocessable
    })?;

    let category = Category { id, category_type };
    let categories = category_map(&pool).await?;

    Ok(Json(json!({
        "success": true,
        "created": id,
        "category": category,
        "categories": categories,
    })))
}

/// Lists the questions belonging to one category, paginated.
///
/// The category row itself must exist; its label is echoed back as
/// `current_category`. An empty page is not an error here.
pub async fn list_category_questions(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let category_type =
        sqlx::query_scalar::<_, String>("SELECT type FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(&state.pool)
            .await?
            .ok_or(AppError::NotFound)?;

    let questions = sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions \
         WHERE category = ? ORDER BY id",
    )
    .bind(id)
    .fetch_all(&state.pool)
    .await?;

    let total_questions = questions.len();
    let page = params.map(|Query(p)| p.page()).unwrap_or(1);
    let questions = paginate(page, questions, state.config.questions_per_page);

    Ok(Json(json!({
        "success": true,
        "questions": questions,
        "total_questions": total_questions,
        "current_category": category_type,
    })))
}
