//! Onboarding form session handlers
//!
//! POST /api/onboarding opens a form; the remaining routes drive its step
//! machine. Every successful call returns the current form snapshot.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use artistly_common::onboarding::{
    options::STEP_TITLES, ApplicationDraft, DraftUpdate, FieldErrors, FormOptions, FormStatus,
    ListField, OnboardingForm, SubmissionReceipt, TOTAL_STEPS,
};

use crate::{error::ApiResult, AppState};

/// Current form state as rendered by a client
#[derive(Debug, Serialize)]
pub struct FormSnapshot {
    pub session_id: Uuid,
    pub step: u8,
    pub total_steps: u8,
    pub step_title: &'static str,
    pub progress_percent: f32,
    pub status: FormStatus,
    pub values: ApplicationDraft,
    pub errors: FieldErrors,
}

impl FormSnapshot {
    fn new(session_id: Uuid, form: &OnboardingForm) -> Self {
        Self {
            session_id,
            step: form.step(),
            total_steps: TOTAL_STEPS,
            step_title: STEP_TITLES[usize::from(form.step() - 1)],
            progress_percent: form.progress_percent(),
            status: form.status(),
            values: form.draft().clone(),
            errors: form.errors().clone(),
        }
    }
}

/// POST /api/onboarding/:id/toggle request
#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub field: ListField,
    pub value: String,
    pub checked: bool,
}

/// POST /api/onboarding/:id/submit response
///
/// `form` is absent when the session was discarded while the application
/// was in flight; the receipt is still valid.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<FormSnapshot>,
    pub receipt: SubmissionReceipt,
}

async fn snapshot(state: &AppState, session_id: Uuid) -> ApiResult<Json<FormSnapshot>> {
    let form = state.sessions.get(session_id).await?;
    Ok(Json(FormSnapshot::new(session_id, &form)))
}

/// POST /api/onboarding
pub async fn start_onboarding(
    State(state): State<AppState>,
) -> (StatusCode, Json<FormSnapshot>) {
    let (session_id, form) = state.sessions.create().await;
    tracing::info!(session_id = %session_id, "Onboarding session opened");
    (StatusCode::CREATED, Json(FormSnapshot::new(session_id, &form)))
}

/// GET /api/onboarding/options
pub async fn form_options() -> Json<FormOptions> {
    Json(FormOptions::get())
}

/// GET /api/onboarding/:id
pub async fn get_form(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<Json<FormSnapshot>> {
    snapshot(&state, session_id).await
}

/// PATCH /api/onboarding/:id
pub async fn update_form(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(update): Json<DraftUpdate>,
) -> ApiResult<Json<FormSnapshot>> {
    state
        .sessions
        .update(session_id, |form| form.update(update))
        .await?;
    snapshot(&state, session_id).await
}

/// DELETE /api/onboarding/:id
pub async fn discard_form(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.sessions.remove(session_id).await?;
    tracing::info!(session_id = %session_id, "Onboarding session discarded");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/onboarding/:id/toggle
pub async fn toggle_option(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<ToggleRequest>,
) -> ApiResult<Json<FormSnapshot>> {
    state
        .sessions
        .update(session_id, |form| {
            form.toggle(request.field, &request.value, request.checked)
        })
        .await?;
    snapshot(&state, session_id).await
}

/// POST /api/onboarding/:id/advance
///
/// 400 with per-field messages when the current step is invalid.
pub async fn advance(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<Json<FormSnapshot>> {
    let step = state
        .sessions
        .update(session_id, |form| form.advance())
        .await?;
    tracing::debug!(session_id = %session_id, step, "Onboarding step advanced");
    snapshot(&state, session_id).await
}

/// POST /api/onboarding/:id/retreat
pub async fn retreat(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<Json<FormSnapshot>> {
    state
        .sessions
        .update(session_id, |form| form.retreat())
        .await?;
    snapshot(&state, session_id).await
}

/// POST /api/onboarding/:id/submit
///
/// Validates the whole application, then hands it to the application sink.
/// The session lock is not held while the sink runs; the form sits in the
/// `submitting` state, which rejects edits and duplicate submissions.
pub async fn submit(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<Json<SubmitResponse>> {
    let application = state
        .sessions
        .update(session_id, |form| form.begin_submit())
        .await?;

    tracing::info!(session_id = %session_id, "Submitting onboarding application");

    match state.application_sink.submit(&application).await {
        Ok(receipt) => {
            let completed = state
                .sessions
                .update(session_id, |form| {
                    form.complete_submit();
                    Ok(FormSnapshot::new(session_id, form))
                })
                .await;
            let form = match completed {
                Ok(form) => {
                    tracing::info!(
                        session_id = %session_id,
                        reference = %receipt.reference,
                        "Onboarding application submitted"
                    );
                    Some(form)
                }
                Err(e) => {
                    tracing::warn!(
                        session_id = %session_id,
                        reference = %receipt.reference,
                        error = %e,
                        "Application accepted but its session is gone"
                    );
                    None
                }
            };
            Ok(Json(SubmitResponse { form, receipt }))
        }
        Err(e) => {
            tracing::warn!(session_id = %session_id, error = %e, "Application sink rejected submission");
            // The session may have been discarded meanwhile; the sink error is what matters
            let _ = state
                .sessions
                .update(session_id, |form| {
                    form.abort_submit();
                    Ok(())
                })
                .await;
            Err(e.into())
        }
    }
}

/// Build onboarding routes
pub fn onboarding_routes() -> Router<AppState> {
    Router::new()
        .route("/api/onboarding", post(start_onboarding))
        .route("/api/onboarding/options", get(form_options))
        .route(
            "/api/onboarding/:id",
            get(get_form).patch(update_form).delete(discard_form),
        )
        .route("/api/onboarding/:id/toggle", post(toggle_option))
        .route("/api/onboarding/:id/advance", post(advance))
        .route("/api/onboarding/:id/retreat", post(retreat))
        .route("/api/onboarding/:id/submit", post(submit))
}
