//! Whole-document validation.
//!
//! Every pass rebuilds the error map from scratch; nothing is merged from a
//! previous pass. Within one pass a key holds one message and later rules
//! overwrite earlier ones (the ordering rule beats the future-date rule).

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::resume::{
    EducationEntry, EducationField, Resume, ScalarField, Section, WorkEntry, WorkField,
};
use crate::resume::dates::MonthYear;

/// Field key → message. Sorted so repeated passes serialize identically.
pub type ErrorMap = BTreeMap<String, String>;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

pub const MSG_REQUIRED: &str = "Este campo é obrigatório";
pub const MSG_INVALID_EMAIL: &str = "Email inválido";
pub const MSG_DATE_FORMAT: &str = "Data deve estar no formato MM/AAAA";
pub const MSG_START_REQUIRED: &str = "Data de Início é obrigatória";
pub const MSG_END_REQUIRED: &str = "Data de Término é obrigatória";
pub const MSG_START_FUTURE: &str = "Data de Início não pode estar no futuro";
pub const MSG_END_FUTURE: &str = "Data de Término não pode estar no futuro";
pub const MSG_START_AFTER_END: &str = "Data de Início não pode ser depois da Data de Término";
pub const MSG_END_BEFORE_START: &str = "Data de Término não pode ser antes da Data de Início";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub errors: ErrorMap,
    pub is_valid: bool,
}

impl ValidationReport {
    fn from_errors(errors: ErrorMap) -> Self {
        let is_valid = errors.is_empty();
        Self { errors, is_valid }
    }
}

/// Builds the error-map key for a field inside a list entry.
pub fn entry_key(section: Section, field: &str, index: usize) -> String {
    format!("{}-{}-{}", section.key(), field, index)
}

/// Validates the full document against `today`'s month.
pub fn validate(resume: &Resume, today: MonthYear) -> ValidationReport {
    let mut errors = ErrorMap::new();

    for field in ScalarField::ALL {
        if is_blank(resume.scalar(field)) {
            errors.insert(field.key().to_string(), MSG_REQUIRED.to_string());
        }
    }

    if !is_blank(&resume.email) && !EMAIL_RE.is_match(&resume.email) {
        errors.insert(
            ScalarField::Email.key().to_string(),
            MSG_INVALID_EMAIL.to_string(),
        );
    }

    for (index, job) in resume.work_history.iter().enumerate() {
        validate_work_entry(&mut errors, index, job, today);
    }
    for (index, edu) in resume.education.iter().enumerate() {
        validate_education_entry(&mut errors, index, edu, today);
    }

    ValidationReport::from_errors(errors)
}

fn validate_work_entry(errors: &mut ErrorMap, index: usize, job: &WorkEntry, today: MonthYear) {
    let key = |field: WorkField| entry_key(Section::WorkHistory, field.key(), index);

    if is_blank(&job.title) {
        errors.insert(key(WorkField::Title), "Título é obrigatório".to_string());
    }
    if is_blank(&job.company) {
        errors.insert(key(WorkField::Company), "Empresa é obrigatória".to_string());
    }

    check_date_pair(
        errors,
        (job.start_date.as_str(), key(WorkField::StartDate)),
        (job.end_date.as_str(), key(WorkField::EndDate)),
        today,
    );

    // Length, not content: [""] passes.
    if job.description.is_empty() {
        errors.insert(key(WorkField::Description), "Descrição é obrigatória".to_string());
    }
    if job.technologies.is_empty() {
        errors.insert(
            key(WorkField::Technologies),
            "Tecnologias são obrigatórias".to_string(),
        );
    }
}

fn validate_education_entry(
    errors: &mut ErrorMap,
    index: usize,
    edu: &EducationEntry,
    today: MonthYear,
) {
    let key = |field: EducationField| entry_key(Section::Education, field.key(), index);

    if is_blank(&edu.degree) {
        errors.insert(key(EducationField::Degree), "Grau é obrigatório".to_string());
    }
    if is_blank(&edu.institution) {
        errors.insert(
            key(EducationField::Institution),
            "Instituição é obrigatória".to_string(),
        );
    }

    check_date_pair(
        errors,
        (edu.start_date.as_str(), key(EducationField::StartDate)),
        (edu.end_date.as_str(), key(EducationField::EndDate)),
        today,
    );
}

/// Applies, in order: required, format, future (each date on its own), then
/// start-after-end on both keys.
fn check_date_pair(
    errors: &mut ErrorMap,
    (start_raw, start_key): (&str, String),
    (end_raw, end_key): (&str, String),
    today: MonthYear,
) {
    let start = check_date(
        errors,
        start_raw,
        &start_key,
        (MSG_START_REQUIRED, MSG_START_FUTURE),
        today,
    );
    let end = check_date(errors, end_raw, &end_key, (MSG_END_REQUIRED, MSG_END_FUTURE), today);

    if let (Some(start), Some(end)) = (start, end) {
        if start.is_after(&end) {
            errors.insert(start_key, MSG_START_AFTER_END.to_string());
            errors.insert(end_key, MSG_END_BEFORE_START.to_string());
        }
    }
}

fn check_date(
    errors: &mut ErrorMap,
    raw: &str,
    key: &str,
    (required_msg, future_msg): (&str, &str),
    today: MonthYear,
) -> Option<MonthYear> {
    if is_blank(raw) {
        errors.insert(key.to_string(), required_msg.to_string());
        return None;
    }

    let Ok(date) = MonthYear::parse(raw) else {
        errors.insert(key.to_string(), MSG_DATE_FORMAT.to_string());
        return None;
    };

    if date.is_after(&today) {
        errors.insert(key.to_string(), future_msg.to_string());
    }
    Some(date)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> MonthYear {
        MonthYear::new(2024, 6).unwrap()
    }

    fn complete_resume() -> Resume {
        let mut resume = Resume::new();
        resume.name = "Ana Souza".to_string();
        resume.telephone = "+55 (47) 99999-0000".to_string();
        resume.location = "Navegantes, Santa Catarina".to_string();
        resume.email = "ana@example.com".to_string();
        resume.linkedin = "https://www.linkedin.com/in/ana".to_string();
        resume.summary = "Backend engineer".to_string();

        let job = &mut resume.work_history[0];
        job.title = "Software Engineer".to_string();
        job.company = "Acme".to_string();
        job.start_date = "01/2020".to_string();
        job.end_date = "01/2022".to_string();
        job.description = vec!["Built services".to_string()];
        job.technologies = vec!["Rust, Postgres".to_string()];

        let edu = &mut resume.education[0];
        edu.degree = "BSc Computer Science".to_string();
        edu.institution = "UFSC".to_string();
        edu.start_date = "02/2014".to_string();
        edu.end_date = "12/2018".to_string();
        resume
    }

    #[test]
    fn test_complete_resume_is_valid() {
        let report = validate(&complete_resume(), today());
        assert!(report.is_valid, "unexpected errors: {:?}", report.errors);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_each_missing_scalar_is_reported() {
        for field in ScalarField::ALL {
            let mut resume = complete_resume();
            resume.scalar_mut(field).clear();
            let report = validate(&resume, today());
            assert!(!report.is_valid);
            assert_eq!(report.errors.get(field.key()).map(String::as_str), Some(MSG_REQUIRED));
            assert_eq!(report.errors.len(), 1);
        }
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let mut resume = complete_resume();
        resume.summary = "   \n".to_string();
        let report = validate(&resume, today());
        assert!(report.errors.contains_key("summary"));
    }

    #[test]
    fn test_email_shape() {
        let mut resume = complete_resume();
        resume.email = "not-an-email".to_string();
        let report = validate(&resume, today());
        assert_eq!(report.errors.get("email").map(String::as_str), Some(MSG_INVALID_EMAIL));

        resume.email = "a@b.co".to_string();
        assert!(!validate(&resume, today()).errors.contains_key("email"));

        for bad in ["a@b", "a b@c.d", "@b.co", "a@@b.co", " a@b.co ", "a@b.co\n"] {
            resume.email = bad.to_string();
            assert!(validate(&resume, today()).errors.contains_key("email"), "{bad}");
        }
    }

    #[test]
    fn test_future_start_date() {
        let mut resume = complete_resume();
        resume.work_history[0].start_date = "01/2030".to_string();
        resume.work_history[0].end_date = "02/2031".to_string();
        let report = validate(&resume, today());
        assert_eq!(
            report.errors.get("workHistory-startDate-0").map(String::as_str),
            Some(MSG_START_FUTURE)
        );
        assert_eq!(
            report.errors.get("workHistory-endDate-0").map(String::as_str),
            Some(MSG_END_FUTURE)
        );
    }

    #[test]
    fn test_current_month_is_not_future() {
        let mut resume = complete_resume();
        resume.education[0].end_date = "06/2024".to_string();
        assert!(validate(&resume, today()).is_valid);

        resume.education[0].end_date = "07/2024".to_string();
        let report = validate(&resume, today());
        assert_eq!(
            report.errors.get("education-endDate-0").map(String::as_str),
            Some(MSG_END_FUTURE)
        );
    }

    #[test]
    fn test_start_after_end_flags_both_keys() {
        let mut resume = complete_resume();
        resume.work_history[0].start_date = "06/2022".to_string();
        resume.work_history[0].end_date = "01/2022".to_string();
        let report = validate(&resume, today());
        assert_eq!(
            report.errors.get("workHistory-startDate-0").map(String::as_str),
            Some(MSG_START_AFTER_END)
        );
        assert_eq!(
            report.errors.get("workHistory-endDate-0").map(String::as_str),
            Some(MSG_END_BEFORE_START)
        );
    }

    #[test]
    fn test_ordering_error_overwrites_future_error() {
        let mut resume = complete_resume();
        resume.education[0].start_date = "03/2030".to_string();
        resume.education[0].end_date = "01/2020".to_string();
        let report = validate(&resume, today());
        assert_eq!(
            report.errors.get("education-startDate-0").map(String::as_str),
            Some(MSG_START_AFTER_END)
        );
        assert_eq!(
            report.errors.get("education-endDate-0").map(String::as_str),
            Some(MSG_END_BEFORE_START)
        );
    }

    #[test]
    fn test_missing_and_malformed_dates() {
        let mut resume = complete_resume();
        resume.work_history[0].start_date.clear();
        resume.work_history[0].end_date = "13/2020".to_string();
        let report = validate(&resume, today());
        assert_eq!(
            report.errors.get("workHistory-startDate-0").map(String::as_str),
            Some(MSG_START_REQUIRED)
        );
        assert_eq!(
            report.errors.get("workHistory-endDate-0").map(String::as_str),
            Some(MSG_DATE_FORMAT)
        );
    }

    #[test]
    fn test_padded_dates_are_malformed() {
        let mut resume = complete_resume();
        resume.work_history[0].start_date = " 01/2020".to_string();
        resume.education[0].end_date = "12/2018 ".to_string();
        let report = validate(&resume, today());
        assert_eq!(
            report.errors.get("workHistory-startDate-0").map(String::as_str),
            Some(MSG_DATE_FORMAT)
        );
        assert_eq!(
            report.errors.get("education-endDate-0").map(String::as_str),
            Some(MSG_DATE_FORMAT)
        );
    }

    #[test]
    fn test_description_and_technologies_require_length_not_content() {
        let mut resume = complete_resume();
        resume.work_history[0].description = vec![String::new()];
        resume.work_history[0].technologies = vec![String::new()];
        assert!(validate(&resume, today()).is_valid);

        resume.work_history[0].description.clear();
        resume.work_history[0].technologies.clear();
        let report = validate(&resume, today());
        assert!(report.errors.contains_key("workHistory-description-0"));
        assert!(report.errors.contains_key("workHistory-technologies-0"));
    }

    #[test]
    fn test_entries_are_keyed_by_index() {
        let mut resume = complete_resume();
        resume.education.push(EducationEntry::empty());
        let report = validate(&resume, today());
        assert!(report.errors.contains_key("education-degree-1"));
        assert!(report.errors.contains_key("education-institution-1"));
        assert!(!report.errors.contains_key("education-degree-0"));
    }

    #[test]
    fn test_empty_lists_are_not_errors_by_themselves() {
        let mut resume = complete_resume();
        resume.work_history.clear();
        resume.education.clear();
        assert!(validate(&resume, today()).is_valid);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let mut resume = complete_resume();
        resume.email = "broken".to_string();
        resume.work_history[0].start_date = "09/2029".to_string();
        let first = validate(&resume, today());
        let second = validate(&resume, today());
        assert_eq!(first, second);
    }
}
