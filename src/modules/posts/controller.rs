use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::ApiError;
use crate::modules::auth::AuthUser;
use crate::modules::posts::{
    model::Post,
    moderation::{clean_body, MAX_POST_CHARS},
    schema::{CreatePostRequest, ListPostsQuery, PostResponse, SortOrder},
};
use crate::AppState;

pub async fn create(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Json(req): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), ApiError> {
    if req.body.trim().is_empty() {
        return Err(ApiError::BadRequest("Post must not be empty".to_string()));
    }
    if req.body.chars().count() > MAX_POST_CHARS {
        return Err(ApiError::BadRequest("Post is too long".to_string()));
    }

    let now = Utc::now();
    let post = Post {
        id: Uuid::new_v4(),
        body: clean_body(&req.body),
        user_id,
        created_at: now,
        updated_at: now,
    };

    state.posts.create(&post).await?;

    Ok((StatusCode::CREATED, Json(post.into())))
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListPostsQuery>,
) -> Result<Json<Vec<PostResponse>>, ApiError> {
    let mut posts = state.posts.list(query.author_id).await?;
    if query.sort == SortOrder::Desc {
        posts.reverse();
    }

    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PostResponse>, ApiError> {
    let id = parse_id(&id)?;
    let post = state.posts.find_by_id(id).await?.ok_or(ApiError::NotFound)?;

    Ok(Json(post.into()))
}

/// Only the author may delete a post.
pub async fn delete(
    State(state): State<Arc<AppState>>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    let post = state.posts.find_by_id(id).await?.ok_or(ApiError::NotFound)?;

    if post.user_id != user_id {
        tracing::warn!(post_id = %id, user_id = %user_id, "delete refused for non-owner");
        return Err(ApiError::Forbidden);
    }

    state.posts.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// Unparseable ids are reported as missing posts.
fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::NotFound)
}
