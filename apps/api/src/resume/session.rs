//! The editing session: the document, the editing focus, and the validation
//! report that is recomputed at the end of every mutation.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::resume::{
    split_lines, EducationEntry, EducationField, Resume, ScalarField, Section, WorkEntry,
    WorkField,
};
use crate::resume::dates::Clock;
use crate::resume::duration::derive_duration;
use crate::resume::validation::{validate, ValidationReport};

/// Programming-contract failures. These never end up in the error map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("{section} index {index} is out of bounds (len {len})")]
    IndexOutOfBounds {
        section: Section,
        index: usize,
        len: usize,
    },

    #[error("cannot focus {section} entry {index}: it does not exist")]
    InvalidFocus { section: Section, index: usize },
}

/// The single field or entry that is currently editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FocusTarget {
    Field { field: ScalarField },
    Entry { section: Section, index: usize },
}

/// Every mutation the form can request, dispatched through [`ResumeSession::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResumeAction {
    EditScalar {
        field: ScalarField,
        value: String,
    },
    EditWorkField {
        index: usize,
        field: WorkField,
        value: String,
    },
    EditEducationField {
        index: usize,
        field: EducationField,
        value: String,
    },
    AddWork,
    AddEducation,
    RemoveWork {
        index: usize,
    },
    RemoveEducation {
        index: usize,
    },
    SetFocus {
        target: Option<FocusTarget>,
    },
}

/// Side-channel hint for the form; not part of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttentionHint {
    /// Scroll toward the education list (sent after a work entry is added).
    Education,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionOutcome {
    pub hint: Option<AttentionHint>,
}

#[derive(Debug, Clone)]
pub struct ResumeSession {
    resume: Resume,
    focus: Option<FocusTarget>,
    report: ValidationReport,
    clock: Clock,
}

impl ResumeSession {
    pub fn new() -> Self {
        Self::with_clock(Clock::System)
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self::from_resume(Resume::new(), clock)
    }

    pub fn from_resume(resume: Resume, clock: Clock) -> Self {
        let report = validate(&resume, clock.today());
        Self {
            resume,
            focus: None,
            report,
            clock,
        }
    }

    pub fn resume(&self) -> &Resume {
        &self.resume
    }

    pub fn focus(&self) -> Option<FocusTarget> {
        self.focus
    }

    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    pub fn is_valid(&self) -> bool {
        self.report.is_valid
    }

    /// Discards the document and starts over with a freshly seeded one.
    pub fn reset(&mut self) {
        self.resume = Resume::new();
        self.focus = None;
        self.revalidate();
    }

    /// Single entry point for form mutations.
    pub fn apply(&mut self, action: ResumeAction) -> Result<ActionOutcome, SessionError> {
        debug!(?action, "applying resume action");
        match action {
            ResumeAction::EditScalar { field, value } => self.set_scalar_field(field, value),
            ResumeAction::EditWorkField {
                index,
                field,
                value,
            } => self.set_work_field(index, field, &value)?,
            ResumeAction::EditEducationField {
                index,
                field,
                value,
            } => self.set_education_field(index, field, value)?,
            ResumeAction::AddWork => return Ok(self.add_entry(Section::WorkHistory)),
            ResumeAction::AddEducation => return Ok(self.add_entry(Section::Education)),
            ResumeAction::RemoveWork { index } => self.remove_entry(Section::WorkHistory, index)?,
            ResumeAction::RemoveEducation { index } => {
                self.remove_entry(Section::Education, index)?
            }
            ResumeAction::SetFocus { target } => self.set_focus(target)?,
        }
        Ok(ActionOutcome::default())
    }

    pub fn set_scalar_field(&mut self, field: ScalarField, value: String) {
        *self.resume.scalar_mut(field) = value;
        self.revalidate();
    }

    pub fn set_work_field(
        &mut self,
        index: usize,
        field: WorkField,
        value: &str,
    ) -> Result<(), SessionError> {
        self.check_index(Section::WorkHistory, index)?;
        let job = &mut self.resume.work_history[index];

        match field {
            WorkField::Title => job.title = value.to_string(),
            WorkField::Company => job.company = value.to_string(),
            WorkField::StartDate => job.start_date = value.to_string(),
            WorkField::EndDate => job.end_date = value.to_string(),
            WorkField::Description => job.description = split_lines(value),
            WorkField::Technologies => job.technologies = split_lines(value),
        }

        if field.is_date() {
            refresh_duration(job);
        }

        self.revalidate();
        Ok(())
    }

    pub fn set_education_field(
        &mut self,
        index: usize,
        field: EducationField,
        value: String,
    ) -> Result<(), SessionError> {
        self.check_index(Section::Education, index)?;
        let edu = &mut self.resume.education[index];

        match field {
            EducationField::Degree => edu.degree = value,
            EducationField::Institution => edu.institution = value,
            EducationField::StartDate => edu.start_date = value,
            EducationField::EndDate => edu.end_date = value,
        }

        self.revalidate();
        Ok(())
    }

    /// Appends an empty entry to `section`.
    pub fn add_entry(&mut self, section: Section) -> ActionOutcome {
        let hint = match section {
            Section::WorkHistory => {
                self.resume.work_history.push(WorkEntry::empty());
                Some(AttentionHint::Education)
            }
            Section::Education => {
                self.resume.education.push(EducationEntry::empty());
                None
            }
        };

        self.revalidate();
        ActionOutcome { hint }
    }

    /// Removes the entry at `index`, shifting later entries down by one.
    pub fn remove_entry(&mut self, section: Section, index: usize) -> Result<(), SessionError> {
        self.check_index(section, index)?;
        match section {
            Section::WorkHistory => {
                self.resume.work_history.remove(index);
            }
            Section::Education => {
                self.resume.education.remove(index);
            }
        }

        if let Some(FocusTarget::Entry {
            section: focused,
            index: focused_index,
        }) = self.focus
        {
            if focused == section {
                self.focus = match focused_index {
                    i if i == index => None,
                    i if i > index => Some(FocusTarget::Entry {
                        section,
                        index: i - 1,
                    }),
                    _ => self.focus,
                };
            }
        }

        self.revalidate();
        Ok(())
    }

    /// Sets or clears the editing focus. An entry target must exist.
    pub fn set_focus(&mut self, target: Option<FocusTarget>) -> Result<(), SessionError> {
        if let Some(FocusTarget::Entry { section, index }) = target {
            if index >= self.resume.entry_count(section) {
                return Err(SessionError::InvalidFocus { section, index });
            }
        }

        self.focus = target;
        self.revalidate();
        Ok(())
    }

    fn check_index(&self, section: Section, index: usize) -> Result<(), SessionError> {
        let len = self.resume.entry_count(section);
        if index >= len {
            return Err(SessionError::IndexOutOfBounds {
                section,
                index,
                len,
            });
        }
        Ok(())
    }

    fn revalidate(&mut self) {
        self.report = validate(&self.resume, self.clock.today());
    }
}

impl Default for ResumeSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Recomputes `duration` once both dates are present and well-formed.
/// Otherwise the previous value is left in place.
fn refresh_duration(job: &mut WorkEntry) {
    if job.start_date.trim().is_empty() || job.end_date.trim().is_empty() {
        return;
    }
    match derive_duration(&job.start_date, &job.end_date) {
        Ok(duration) => job.duration = duration,
        Err(err) => debug!(%err, "dates not yet well-formed; keeping previous duration"),
    }
}
