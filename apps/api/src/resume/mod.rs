// Résumé form engine: document state, validation, duration derivation, and
// submission to the PDF service. Handlers are thin wrappers over `session`.

pub mod dates;
pub mod duration;
pub mod handlers;
pub mod session;
pub mod submit;
pub mod validation;
pub mod view;

pub use session::ResumeSession;
