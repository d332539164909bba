use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::pdf_client::PdfRenderer;
use crate::resume::session::ResumeSession;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one résumé being edited. Mutations are applied one at a time.
    pub session: Arc<Mutex<ResumeSession>>,
    /// Pluggable PDF backend. Default: HttpPdfRenderer pointed at PDF_SERVICE_URL.
    pub pdf: Arc<dyn PdfRenderer>,
    pub config: Config,
}

impl AppState {
    pub fn new(session: ResumeSession, pdf: Arc<dyn PdfRenderer>, config: Config) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            pdf,
            config,
        }
    }
}
