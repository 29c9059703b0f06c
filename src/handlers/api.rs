use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use validator::Validate;

use super::run_blocking;
use crate::{
    data::models::{
        AddSynonymsRequest, ApiResponse, AppendDefinitionRequest, CreateWordRequest,
        DictionaryError, SearchParams, SearchResult, WordView,
    },
    features::dictionary::Dictionary,
};

pub async fn get_word(
    State(dictionary): State<Arc<Dictionary>>,
    Path(token): Path<String>,
) -> Result<Json<WordView>, DictionaryError> {
    let token = token.trim();
    let (word, entry) = dictionary
        .lookup(token)
        .ok_or_else(|| DictionaryError::NotFound(token.to_string()))?;
    Ok(Json(WordView::new(word, entry)))
}

pub async fn search(
    State(dictionary): State<Arc<Dictionary>>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResult> {
    let results = dictionary.search_contains(params.q.trim());
    Json(SearchResult {
        query: params.q,
        results,
    })
}

pub async fn create_word(
    State(dictionary): State<Arc<Dictionary>>,
    Json(payload): Json<CreateWordRequest>,
) -> Result<(StatusCode, Json<ApiResponse>), DictionaryError> {
    payload.validate()?;
    let word = run_blocking(&dictionary, move |d| {
        d.create_word(&payload.word, &payload.definition)
    })
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            success: true,
            message: format!("Word '{}' added successfully.", word),
            word,
        }),
    ))
}

pub async fn append_definition(
    State(dictionary): State<Arc<Dictionary>>,
    Path(token): Path<String>,
    Json(payload): Json<AppendDefinitionRequest>,
) -> Result<Json<ApiResponse>, DictionaryError> {
    payload.validate()?;
    let word = run_blocking(&dictionary, move |d| {
        d.append_definition(&token, &payload.definition)
    })
    .await?;

    Ok(Json(ApiResponse {
        success: true,
        message: format!("New definition added for '{}'.", word),
        word,
    }))
}

pub async fn add_synonyms(
    State(dictionary): State<Arc<Dictionary>>,
    Path(token): Path<String>,
    Json(payload): Json<AddSynonymsRequest>,
) -> Result<Json<ApiResponse>, DictionaryError> {
    payload.validate()?;
    let word = run_blocking(&dictionary, move |d| {
        d.add_synonyms(&token, &payload.synonyms)
    })
    .await?;

    Ok(Json(ApiResponse {
        success: true,
        message: format!("Synonyms added for '{}'.", word),
        word,
    }))
}
