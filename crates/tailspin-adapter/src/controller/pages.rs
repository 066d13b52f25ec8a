//! HTML page handlers

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};
use tracing::debug;

use super::{parse_id, AppState};
use crate::view::pages;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(pages::index_page(&state.catalog.list()))
}

/// `?id=` is read as raw pairs so repeated keys or undecodable values
/// still end in a redirect. The first `id` wins.
pub async fn campaign_by_query(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            debug!(error = %rejection, "Unreadable query string, redirecting to index");
            return Redirect::to("/").into_response();
        }
    };
    let raw_id = first_id(&pairs).unwrap_or_default();
    show_campaign(&state, raw_id)
}

fn first_id(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case("id"))
        .map(|(_, value)| value.as_str())
}

pub async fn campaign_by_path(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    show_campaign(&state, &raw_id)
}

/// Unknown or malformed ids go back to the list
fn show_campaign(state: &AppState, raw_id: &str) -> Response {
    match parse_id(raw_id).and_then(|id| state.catalog.get(id)) {
        Some(campaign) => Html(pages::detail_page(&campaign)).into_response(),
        None => {
            debug!(id = raw_id, "No such campaign, redirecting to index");
            Redirect::to("/").into_response()
        }
    }
}

pub async fn not_found(uri: Uri) -> Response {
    (StatusCode::NOT_FOUND, Html(pages::not_found_page(uri.path()))).into_response()
}
