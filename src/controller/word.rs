use axum::{
    extract::{ConnectInfo, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::net::SocketAddr;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, ANY_ACTOR},
    model::{
        api::{ErrorDto, MessageDto},
        word::{CreateWordParams, SearchResults, UpdateWordParams, Word},
    },
    service::word::WordService,
    state::AppState,
};

/// Tag for grouping word endpoints in OpenAPI documentation
pub static WORD_TAG: &str = "words";

#[derive(Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

/// Resolves the caller's address, preferring the forwarding proxy header.
fn client_ip(headers: &HeaderMap, addr: &SocketAddr) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string())
        .unwrap_or_else(|| addr.ip().to_string())
}

/// List the catalog, one entry per term with the newest winning.
#[utoipa::path(
    get,
    path = "/words",
    tag = WORD_TAG,
    responses(
        (status = 200, description = "Successfully retrieved words", body = Vec<Word>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_words(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let words = WordService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(words)))
}

/// Get a single catalog entry by ID.
#[utoipa::path(
    get,
    path = "/words/{id}",
    tag = WORD_TAG,
    params(("id" = i32, Path, description = "Word ID")),
    responses(
        (status = 200, description = "Successfully retrieved word", body = Word),
        (status = 404, description = "Word not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_word_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let word = WordService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(word)))
}

/// Add a new catalog entry.
///
/// New entries default to `Pending` status with a zero search counter.
/// `term` uniqueness is not enforced; duplicates are disambiguated at read
/// time by recency.
///
/// # Access Control
/// - `Admin` / `Superadmin` - Any authenticated staff member
///
/// # Returns
/// - `201 Created` - Created catalog entry
/// - `400 Bad Request` - Missing term
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/words",
    tag = WORD_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateWordParams,
    responses(
        (status = 201, description = "Successfully created word", body = Word),
        (status = 400, description = "Invalid word data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_word(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateWordParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(ANY_ACTOR)
        .await?;

    let word = WordService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(word)))
}

/// Update a catalog entry; absent fields are left untouched.
#[utoipa::path(
    put,
    path = "/words/{id}",
    tag = WORD_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Word ID")),
    request_body = UpdateWordParams,
    responses(
        (status = 200, description = "Successfully updated word", body = Word),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Word not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_word(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateWordParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(ANY_ACTOR)
        .await?;

    let word = WordService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(word)))
}

/// Delete a catalog entry.
#[utoipa::path(
    delete,
    path = "/words/{id}",
    tag = WORD_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Word ID")),
    responses(
        (status = 200, description = "Successfully deleted word", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Word not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_word(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(ANY_ACTOR)
        .await?;

    WordService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Word deleted".to_string(),
        }),
    ))
}

/// Search the dictionary.
///
/// Case-insensitive substring match against catalog terms. Every matching
/// catalog row has its search counter incremented as an observable side
/// effect of the hit. When the catalog has no match, pending submissions
/// are consulted before reporting not-found. Each search is appended to
/// the lookups log with the caller's address.
///
/// # Returns
/// - `200 OK` - Matching catalog entries, or pending submissions
/// - `400 Bad Request` - Missing query parameter
/// - `404 Not Found` - No match in catalog or ledger
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/words/search",
    tag = WORD_TAG,
    params(("query" = String, Query, description = "Substring to search for")),
    responses(
        (status = 200, description = "Matching entries", body = SearchResults),
        (status = 400, description = "Missing query parameter", body = ErrorDto),
        (status = 404, description = "No words found matching the query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_words(
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let Some(query) = params.query.filter(|query| !query.is_empty()) else {
        return Err(AppError::BadRequest(
            "Query parameter is required".to_string(),
        ));
    };

    let ip_address = client_ip(&headers, &addr);
    let results = WordService::new(&state.db)
        .search(&query, &ip_address)
        .await?;

    Ok((StatusCode::OK, Json(results)))
}

/// Get the three most recently added entries.
#[utoipa::path(
    get,
    path = "/api/words/recent",
    tag = WORD_TAG,
    responses(
        (status = 200, description = "Recently added words", body = Vec<Word>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recently_added(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let words = WordService::new(&state.db).recent().await?;

    Ok((StatusCode::OK, Json(words)))
}

/// Get the cached word of the day.
///
/// The cache is refreshed by a daily job; before the first refresh fires
/// the cache is empty and this endpoint reports not-found.
#[utoipa::path(
    get,
    path = "/api/words/word-of-the-day",
    tag = WORD_TAG,
    responses(
        (status = 200, description = "Word of the day", body = Word),
        (status = 404, description = "Word of the day not yet selected", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_word_of_the_day(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let cached = state.word_of_day.read().await.clone();

    match cached {
        Some(word) => Ok((StatusCode::OK, Json(word))),
        None => Err(AppError::NotFound(
            "Word of the day not found".to_string(),
        )),
    }
}

/// Get the three most searched-for entries.
#[utoipa::path(
    get,
    path = "/api/words/top-lookups",
    tag = WORD_TAG,
    responses(
        (status = 200, description = "Most searched words", body = Vec<Word>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_top_lookups(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let words = WordService::new(&state.db).top_lookups().await?;

    Ok((StatusCode::OK, Json(words)))
}
