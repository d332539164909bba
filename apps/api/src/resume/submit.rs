//! Submission: hands a valid résumé to the PDF renderer.
//!
//! Submission never mutates the session, whether it succeeds or fails.

use bytes::Bytes;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::resume::Resume;
use crate::pdf_client::{PdfError, PdfRenderer};
use crate::resume::session::ResumeSession;
use crate::resume::validation::ErrorMap;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("resume has {} validation error(s)", .0.len())]
    Invalid(ErrorMap),

    #[error(transparent)]
    Pdf(#[from] PdfError),
}

/// Copies the document out of the session if, and only if, it is valid.
pub fn submission_snapshot(session: &ResumeSession) -> Result<Resume, SubmitError> {
    if !session.is_valid() {
        return Err(SubmitError::Invalid(session.report().errors.clone()));
    }
    Ok(session.resume().clone())
}

pub async fn generate_pdf(resume: &Resume, renderer: &dyn PdfRenderer) -> Result<Bytes, SubmitError> {
    match renderer.render(resume).await {
        Ok(document) => {
            info!("Generated PDF for résumé ({} bytes)", document.len());
            Ok(document)
        }
        Err(err) => {
            warn!("PDF generation failed: {err}");
            Err(err.into())
        }
    }
}
