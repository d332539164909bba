//! Read-only projection handed to the form renderer.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::resume::{Resume, ScalarField, Section};
use crate::resume::session::{AttentionHint, FocusTarget, ResumeSession};
use crate::resume::validation::ErrorMap;

/// Which inputs the renderer should leave enabled under the current focus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditableMap {
    pub fields: BTreeMap<&'static str, bool>,
    pub work_history: Vec<bool>,
    pub education: Vec<bool>,
}

impl EditableMap {
    /// With no focus everything is editable; otherwise only the focused
    /// field or entry is.
    pub fn project(resume: &Resume, focus: Option<FocusTarget>) -> Self {
        let fields = ScalarField::ALL
            .into_iter()
            .map(|field| {
                let editable = match focus {
                    None => true,
                    Some(FocusTarget::Field { field: focused }) => focused == field,
                    Some(FocusTarget::Entry { .. }) => false,
                };
                (field.key(), editable)
            })
            .collect();

        let entries = |section: Section| -> Vec<bool> {
            (0..resume.entry_count(section))
                .map(|index| match focus {
                    None => true,
                    Some(FocusTarget::Entry {
                        section: focused,
                        index: focused_index,
                    }) => focused == section && focused_index == index,
                    Some(FocusTarget::Field { .. }) => false,
                })
                .collect()
        };

        Self {
            fields,
            work_history: entries(Section::WorkHistory),
            education: entries(Section::Education),
        }
    }
}

/// Text-area contents for a work entry's list fields, as the form shows them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntryText {
    pub description: String,
    pub technologies: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeView {
    pub resume: Resume,
    pub errors: ErrorMap,
    pub is_valid: bool,
    pub focus: Option<FocusTarget>,
    pub editable: EditableMap,
    pub work_history_text: Vec<WorkEntryText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<AttentionHint>,
}

impl ResumeView {
    pub fn from_session(session: &ResumeSession) -> Self {
        let report = session.report();
        Self {
            resume: session.resume().clone(),
            errors: report.errors.clone(),
            is_valid: report.is_valid,
            focus: session.focus(),
            editable: EditableMap::project(session.resume(), session.focus()),
            work_history_text: session
                .resume()
                .work_history
                .iter()
                .map(|job| WorkEntryText {
                    description: job.description_text(),
                    technologies: job.technologies_text(),
                })
                .collect(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: Option<AttentionHint>) -> Self {
        self.hint = hint;
        self
    }
}
