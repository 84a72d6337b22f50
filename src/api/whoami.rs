//! Caller identification endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WhoAmIResponse {
    pub student_number: String,
}

/// Report the configured student number
#[utoipa::path(
    get,
    path = "/whoami",
    tag = "identity",
    responses(
        (status = 200, description = "Fixed identifier", body = WhoAmIResponse)
    )
)]
pub async fn whoami(State(state): State<AppState>) -> Json<WhoAmIResponse> {
    Json(WhoAmIResponse {
        student_number: state.services.identity.student_number.clone(),
    })
}
