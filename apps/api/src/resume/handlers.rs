//! Axum route handlers for the résumé form.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;

use crate::errors::AppError;
use crate::resume::session::ResumeAction;
use crate::resume::submit::{generate_pdf, submission_snapshot};
use crate::resume::view::ResumeView;
use crate::state::AppState;

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeView> {
    let session = state.session.lock().await;
    Json(ResumeView::from_session(&session))
}

/// POST /api/v1/resume/actions
///
/// Applies one form action and returns the revalidated document.
pub async fn handle_apply_action(
    State(state): State<AppState>,
    Json(action): Json<ResumeAction>,
) -> Result<Json<ResumeView>, AppError> {
    let mut session = state.session.lock().await;
    let outcome = session.apply(action)?;
    Ok(Json(ResumeView::from_session(&session).with_hint(outcome.hint)))
}

/// POST /api/v1/resume/reset
pub async fn handle_reset(State(state): State<AppState>) -> Json<ResumeView> {
    let mut session = state.session.lock().await;
    session.reset();
    tracing::info!("Started a new résumé session");
    Json(ResumeView::from_session(&session))
}

/// POST /api/v1/resume/submit
///
/// Renders the résumé through the PDF service and returns it as a download.
/// The session lock is released before the PDF call.
pub async fn handle_submit(State(state): State<AppState>) -> Result<Response, AppError> {
    let resume = {
        let session = state.session.lock().await;
        submission_snapshot(&session)?
    };

    let pdf = generate_pdf(&resume, state.pdf.as_ref()).await?;

    let disposition = format!(
        "attachment; filename=\"resume-{}.pdf\"",
        Utc::now().timestamp_millis()
    );
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        pdf,
    )
        .into_response())
}
