use super::{AppState, errors::ServerError};
use crate::commands;
use crate::commands::helpers::require_reference;
use crate::model::{Lookup, Note};
use crate::store::StorageBackend;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};
use serde::{Deserialize, Serialize};

pub async fn root() -> impl IntoResponse {
    Html(include_str!("./index.html"))
}

#[derive(Deserialize)]
pub struct LookupQuery {
    #[serde(default)]
    reference: String,
}

/// JSON shape of a lookup, as consumed by the static page.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LookupPayload {
    pub reference: String,
    pub verse: String,
    /// Passage text, or the fetch error in its place
    pub verse_text: String,
    pub footnotes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Empty when there is no note
    pub interpretation: String,
}

impl From<Lookup> for LookupPayload {
    fn from(lookup: Lookup) -> Self {
        Self {
            verse: lookup.reference.clone(),
            verse_text: lookup.verse.display_text(),
            footnotes: lookup.verse.footnotes().to_vec(),
            source: lookup.verse.source().map(str::to_string),
            interpretation: lookup.note.map(|n| n.text).unwrap_or_default(),
            reference: lookup.reference,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusPayload {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusPayload {
    fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: None,
        }
    }
}

pub async fn lookup<B>(
    State(state): State<AppState<B>>,
    Query(LookupQuery { reference }): Query<LookupQuery>,
) -> Result<Json<LookupPayload>, ServerError>
where
    B: StorageBackend + Send + 'static,
{
    let reference = require_reference(&reference)?.to_string();
    // Fetch without holding the store lock
    let verse = state.source.fetch(&reference).await;
    let lookup = state.with_notes(|store| Ok(commands::lookup::assemble(store, &reference, verse)))?;
    Ok(Json(lookup.into()))
}

#[derive(Deserialize)]
pub struct SaveRequest {
    #[serde(default)]
    reference: String,
    #[serde(default)]
    interpretation: String,
}

pub async fn save_interpretation<B>(
    State(state): State<AppState<B>>,
    Json(SaveRequest {
        reference,
        interpretation,
    }): Json<SaveRequest>,
) -> Result<Json<StatusPayload>, ServerError>
where
    B: StorageBackend + Send + 'static,
{
    state.with_notes(|store| commands::save::run(store, &reference, &interpretation))?;
    Ok(Json(StatusPayload::ok()))
}

#[derive(Deserialize)]
pub struct DeleteRequest {
    #[serde(default)]
    reference: String,
}

pub async fn delete_interpretation<B>(
    State(state): State<AppState<B>>,
    Json(DeleteRequest { reference }): Json<DeleteRequest>,
) -> Result<(StatusCode, Json<StatusPayload>), ServerError>
where
    B: StorageBackend + Send + 'static,
{
    let result = state.with_notes(|store| commands::delete::run(store, &reference))?;
    if result.affected_notes.is_empty() {
        let message = result.messages.first().map(|m| m.content.clone());
        return Ok((
            StatusCode::NOT_FOUND,
            Json(StatusPayload {
                status: "not_found".to_string(),
                message,
            }),
        ));
    }
    Ok((StatusCode::OK, Json(StatusPayload::ok())))
}

pub async fn list_interpretations<B>(
    State(state): State<AppState<B>>,
) -> Result<Json<Vec<Note>>, ServerError>
where
    B: StorageBackend + Send + 'static,
{
    let result = state.with_notes(|store| commands::list::run(store))?;
    Ok(Json(result.listed_notes))
}
