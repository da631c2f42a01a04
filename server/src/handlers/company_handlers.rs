use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
    Extension,
};
use review_client::{ApplicationId, Decision};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::models::company::Company;
use crate::state::{AppState, ChangeStatusError};

#[derive(Debug, Deserialize)]
pub struct ChangeStatusPayload {
    pub id: String,
    pub status: String,
}

/// POST /company/view-applications
pub async fn view_applications(
    State(state): State<AppState>,
    Extension(company): Extension<Company>,
) -> (StatusCode, Json<Value>) {
    let applications = state.applications_for(&company.id);
    tracing::info!(company = %company.id, count = applications.len(), "Listing applications");

    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "viewApplicationData": applications
        })),
    )
}

/// POST /company/change-status
pub async fn change_status(
    State(state): State<AppState>,
    Extension(company): Extension<Company>,
    payload: Result<Json<ChangeStatusPayload>, JsonRejection>,
) -> (StatusCode, Json<Value>) {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::debug!(
                company = %company.id,
                error = %rejection,
                "Malformed change-status body"
            );
            return failure(StatusCode::BAD_REQUEST, &rejection.body_text());
        }
    };
    let decision = match payload.status.parse::<Decision>() {
        Ok(d) => d,
        Err(msg) => return failure(StatusCode::BAD_REQUEST, &msg),
    };
    let id = ApplicationId::new(payload.id);

    match state.change_status(&company.id, &id, decision) {
        Ok(()) => {
            tracing::info!(company = %company.id, id = %id, status = %decision, "Application reviewed");
            (
                StatusCode::OK,
                Json(json!({
                    "success": true,
                    "message": format!("Application {}", decision.to_string().to_lowercase())
                })),
            )
        }
        Err(ChangeStatusError::NotFound) => failure(StatusCode::NOT_FOUND, "Application not found"),
        Err(ChangeStatusError::AlreadyReviewed(current)) => {
            tracing::warn!(company = %company.id, id = %id, current = %current, "Application already reviewed");
            failure(StatusCode::CONFLICT, "Application has already been reviewed")
        }
    }
}

fn failure(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "success": false, "message": message })))
}
