use axum::{Json, extract::{Path, State}, http::{StatusCode, header}, response::{IntoResponse, Response}};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    models::{GenerateRequest, InputSet, ProductParameters, View},
    options::{self, InspireTarget},
    validation::ValidationErrors,
    workflow::{RunError, Workflow, WorkflowSnapshot},
};

#[derive(Clone)]
pub struct AppState {
    pub workflow: Arc<Workflow>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerateStatus {
    Completed,
    DemoModeEngaged,
    Failed,
    Invalid,
    Busy,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub status: GenerateStatus,
    pub view: View,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
    pub workflow: WorkflowSnapshot,
}

pub async fn generate(State(state): State<AppState>, Json(body): Json<GenerateRequest>) -> Response {
    let view = body.view;
    let inputs = InputSet::from(body.inputs);
    tracing::info!("🎯 Generate requested for {} view", view);

    let result = state.workflow.run(&inputs, &body.parameters, view).await;
    let run_id = result.as_ref().ok().map(|report| report.run_id);
    let (code, status, image_url, notice, errors) = match result {
        Ok(report) => (StatusCode::OK, GenerateStatus::Completed, Some(report.image.to_data_url()), None, None),
        Err(RunError::QuotaExceeded) => (StatusCode::OK, GenerateStatus::DemoModeEngaged, None, None, None),
        Err(RunError::Validation(errors)) => (StatusCode::UNPROCESSABLE_ENTITY, GenerateStatus::Invalid, None, None, Some(errors)),
        Err(e @ RunError::Busy) => (StatusCode::CONFLICT, GenerateStatus::Busy, None, e.user_notice(), None),
        Err(e @ RunError::Generation(_)) => (StatusCode::BAD_GATEWAY, GenerateStatus::Failed, None, e.user_notice(), None),
    };

    let response = GenerateResponse {
        status,
        view,
        run_id,
        image_url,
        notice,
        errors,
        workflow: state.workflow.snapshot(),
    };
    (code, Json(response)).into_response()
}

pub async fn get_workflow(State(state): State<AppState>) -> Json<WorkflowSnapshot> {
    Json(state.workflow.snapshot())
}

pub async fn list_images(State(state): State<AppState>) -> Response {
    Json(json!({ "images": state.workflow.stored_images() })).into_response()
}

pub async fn get_image(Path(view): Path<View>, State(state): State<AppState>) -> Response {
    match state.workflow.image(view) {
        Some(image) => ([(header::CONTENT_TYPE, image.mime_type)], image.data).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub async fn download_image(Path(view): Path<View>, State(state): State<AppState>) -> Response {
    let Some(image) = state.workflow.image(view) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    tracing::info!("⬇️ Download requested for {} view", view);
    let disposition = format!("attachment; filename=\"{}\"", view.download_file_name());
    (
        [(header::CONTENT_TYPE, image.mime_type), (header::CONTENT_DISPOSITION, disposition)],
        image.data,
    )
        .into_response()
}

pub async fn clear_demo_mode(State(state): State<AppState>) -> Json<WorkflowSnapshot> {
    state.workflow.fallback().clear();
    Json(state.workflow.snapshot())
}

pub async fn get_options() -> Json<options::OptionCatalog> {
    Json(options::catalog())
}

pub async fn inspire(Path(target): Path<String>) -> Response {
    match InspireTarget::parse(&target) {
        Some(t) => Json(json!({ "value": options::inspire(t) })).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({ "error": format!("unknown prompt field '{target}'") }))).into_response(),
    }
}

pub async fn default_parameters() -> Json<ProductParameters> {
    Json(ProductParameters::default())
}
