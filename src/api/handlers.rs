use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use super::{AppState, Board, UpdateFeatureRequest};
use crate::engine::{rank_and_score, render_prd};
use crate::models::*;

// ============================================================
// Error Handling
// ============================================================

/// An edit the calling layer should never have sent. Exposed to the client
/// as-is, since it names the offending field.
fn bad_request(e: InvalidFieldError) -> (StatusCode, String) {
    let msg = e.to_string();
    tracing::warn!("Validation error: {}", msg);
    (StatusCode::BAD_REQUEST, msg)
}

fn feature_not_found() -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, "Feature not found".to_string())
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Features
// ============================================================

pub async fn get_board(State(state): State<AppState>) -> Json<Board> {
    let snapshot = state.store().snapshot();
    Json(Board::from_features(&snapshot))
}

/// Add a feature from a JSON object of field values.
///
/// Values are checked like single-field edits and clamped into their slider
/// ranges; omitted fields take the store defaults.
pub async fn create_feature(
    State(state): State<AppState>,
    Json(input): Json<Value>,
) -> Result<(StatusCode, Json<Feature>), (StatusCode, String)> {
    let input = NewFeature::from_fields(&input)
        .map_err(bad_request)?
        .clamped();
    let feature = state.store().add_feature(input);
    Ok((StatusCode::CREATED, Json(feature)))
}

/// Apply one field edit, then return the freshly ranked board.
///
/// Numeric values are clamped into their slider ranges. An unknown id leaves
/// the board unchanged.
pub async fn update_feature(
    State(state): State<AppState>,
    Path(id): Path<FeatureId>,
    Json(input): Json<UpdateFeatureRequest>,
) -> Result<Json<Board>, (StatusCode, String)> {
    let edit = FeatureEdit::from_field(&input.field, &input.value)
        .map_err(bad_request)?
        .clamped();
    let updated = state.store().set_field(id, edit);
    Ok(Json(Board::from_features(&updated)))
}

pub async fn delete_feature(
    State(state): State<AppState>,
    Path(id): Path<FeatureId>,
) -> Result<StatusCode, (StatusCode, String)> {
    if state.store().remove_feature(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(feature_not_found())
    }
}

// ============================================================
// PRD
// ============================================================

pub async fn generate_prd(
    State(state): State<AppState>,
    Path(id): Path<FeatureId>,
) -> Result<Json<PrdDocument>, (StatusCode, String)> {
    let feature = state.store().get(id).ok_or_else(feature_not_found)?;
    Ok(show_prd(&state, &feature))
}

pub async fn generate_top_prd(
    State(state): State<AppState>,
) -> Result<Json<PrdDocument>, (StatusCode, String)> {
    let snapshot = state.store().snapshot();
    let ranking = rank_and_score(&snapshot);
    let top = ranking
        .top()
        .ok_or((StatusCode::NOT_FOUND, "No features to prioritize".to_string()))?;
    Ok(show_prd(&state, &top.feature))
}

pub async fn get_prd(State(state): State<AppState>) -> Json<PrdPanel> {
    Json(state.panel().clone())
}

pub async fn dismiss_prd(State(state): State<AppState>) -> StatusCode {
    state.panel().dismiss();
    StatusCode::NO_CONTENT
}

fn show_prd(state: &AppState, feature: &Feature) -> Json<PrdDocument> {
    let doc = render_prd(feature);
    *state.panel() = PrdPanel::Shown(doc.clone());
    tracing::info!(feature_id = %feature.id, "Showing PRD for {}", feature.name);
    Json(doc)
}
