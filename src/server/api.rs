//! JSON API over the fixtures

use super::ServerState;
use crate::provider::FamilyProvider;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error};

#[derive(Debug, Deserialize)]
pub(super) struct FamiliesQuery {
    page: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct DetailsQuery {
    id: Option<String>,
}

fn api_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

/// `GET /api/families?page=n`
pub(super) async fn list_families(
    State(state): State<ServerState>,
    Query(query): Query<FamiliesQuery>,
) -> Response {
    let page = match query.page.as_deref() {
        None => 1,
        Some(raw) => match raw.trim().parse::<u32>() {
            Ok(page) if page >= 1 => page,
            _ => {
                debug!("Rejecting families request with page {:?}", raw);
                return api_error(StatusCode::BAD_REQUEST, format!("invalid page: {raw}"));
            }
        },
    };

    match state.api.list_families(page).await {
        Ok(response) => Json(response).into_response(),
        Err(e) => {
            error!("Failed to list families: {}", e);
            api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// `GET /api/familyDetails[?id=...]`
pub(super) async fn family_details(
    State(state): State<ServerState>,
    Query(query): Query<DetailsQuery>,
) -> Response {
    let response = state.api.lookup(query.id.as_deref());
    if response.family.is_none() {
        debug!("No family for id {:?}", query.id);
    }
    Json(response).into_response()
}
