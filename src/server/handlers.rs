use crate::core::{concepts, destination, dilemma, params, problem};
use crate::domain::model::{Match, Problem};
use crate::server::state::AppState;
use crate::utils::error::{AdvisorError, Result};
use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use axum::http::{header::CONTENT_TYPE, HeaderMap};
use axum::response::Html;
use axum::Json;
use serde_json::{json, Map, Value};

pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    let html = state.views.render("index", &Value::Object(Map::new()))?;
    Ok(Html(html))
}

pub async fn label_search(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<Match>>> {
    let caller = params::parse_query(query.as_deref());
    let matches = concepts::label_search(state.concepts.as_ref(), &state.corpus, &caller).await?;
    Ok(Json(matches))
}

pub async fn conceptual_search(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Value>> {
    let caller = params::parse_query(query.as_deref());
    let results =
        concepts::conceptual_search(state.concepts.as_ref(), &state.corpus, &caller).await?;
    Ok(Json(results))
}

pub async fn dilemmas(State(state): State<AppState>, body: Bytes) -> Result<Json<Value>> {
    // 空白內容視為空物件
    let problem: Value = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Object(Map::new())
    } else {
        serde_json::from_slice(&body).map_err(|e| {
            AdvisorError::malformed(format!("request body is not valid JSON: {}", e))
        })?
    };
    let response = dilemma::forward_dilemma(state.tradeoff.as_ref(), &problem).await?;
    Ok(Json(response))
}

pub async fn get_problem(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Json<Problem> {
    let caller = params::parse_query(query.as_deref());
    let locations = params::string_list(caller.get("locations"));
    Json(problem::build_problem(&state.datasets, &locations))
}

pub async fn destination(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Html<String>> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    let place = place_field(content_type, &body)?;
    let html = destination::render_destination(state.views.as_ref(), place.as_deref())?;
    Ok(Html(html))
}

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "places": state.datasets.places.len(),
    }))
}

/// 從 JSON 或表單內容取出 `place` 欄位的原始字串
fn place_field(content_type: Option<&str>, body: &[u8]) -> Result<Option<String>> {
    let is_json = content_type
        .map(|ct| ct.trim_start().starts_with("application/json"))
        .unwrap_or(false);

    if !is_json {
        return Ok(url::form_urlencoded::parse(body)
            .find(|(key, _)| key == "place")
            .map(|(_, value)| value.into_owned()));
    }

    if body.is_empty() {
        return Ok(None);
    }
    let payload: Value = serde_json::from_slice(body)
        .map_err(|e| AdvisorError::malformed(format!("request body is not valid JSON: {}", e)))?;
    Ok(match payload.get("place") {
        None | Some(Value::Null) => None,
        Some(Value::String(raw)) => Some(raw.clone()),
        Some(other) => Some(other.to_string()),
    })
}
