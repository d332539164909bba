use serde::{Deserialize, Serialize};

/// The résumé document. One instance lives for the whole editing session.
///
/// Serialized with camelCase keys; this is also the exact JSON shape the PDF
/// service expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub name: String,
    pub telephone: String,
    pub location: String,
    pub email: String,
    pub linkedin: String,
    pub summary: String,
    pub work_history: Vec<WorkEntry>,
    pub education: Vec<EducationEntry>,
}

impl Resume {
    /// A blank document seeded with one empty entry per list.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            telephone: String::new(),
            location: String::new(),
            email: String::new(),
            linkedin: String::new(),
            summary: String::new(),
            work_history: vec![WorkEntry::empty()],
            education: vec![EducationEntry::empty()],
        }
    }

    pub fn scalar(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::Name => &self.name,
            ScalarField::Telephone => &self.telephone,
            ScalarField::Location => &self.location,
            ScalarField::Email => &self.email,
            ScalarField::Linkedin => &self.linkedin,
            ScalarField::Summary => &self.summary,
        }
    }

    pub fn scalar_mut(&mut self, field: ScalarField) -> &mut String {
        match field {
            ScalarField::Name => &mut self.name,
            ScalarField::Telephone => &mut self.telephone,
            ScalarField::Location => &mut self.location,
            ScalarField::Email => &mut self.email,
            ScalarField::Linkedin => &mut self.linkedin,
            ScalarField::Summary => &mut self.summary,
        }
    }

    pub fn entry_count(&self, section: Section) -> usize {
        match section {
            Section::WorkHistory => self.work_history.len(),
            Section::Education => self.education.len(),
        }
    }
}

impl Default for Resume {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntry {
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    /// Derived from the two dates; never edited directly.
    pub duration: String,
    pub description: Vec<String>,
    pub technologies: Vec<String>,
}

impl WorkEntry {
    pub fn empty() -> Self {
        Self {
            title: String::new(),
            company: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            duration: String::new(),
            description: vec![String::new()],
            technologies: vec![String::new()],
        }
    }

    pub fn description_text(&self) -> String {
        self.description.join("\n")
    }

    pub fn technologies_text(&self) -> String {
        self.technologies.join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub start_date: String,
    pub end_date: String,
}

impl EducationEntry {
    pub fn empty() -> Self {
        Self {
            degree: String::new(),
            institution: String::new(),
            start_date: String::new(),
            end_date: String::new(),
        }
    }
}

/// Top-level free-text fields, all required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScalarField {
    Name,
    Telephone,
    Location,
    Email,
    Linkedin,
    Summary,
}

impl ScalarField {
    pub const ALL: [ScalarField; 6] = [
        ScalarField::Name,
        ScalarField::Telephone,
        ScalarField::Location,
        ScalarField::Email,
        ScalarField::Linkedin,
        ScalarField::Summary,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ScalarField::Name => "name",
            ScalarField::Telephone => "telephone",
            ScalarField::Location => "location",
            ScalarField::Email => "email",
            ScalarField::Linkedin => "linkedin",
            ScalarField::Summary => "summary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    WorkHistory,
    Education,
}

impl Section {
    pub fn key(self) -> &'static str {
        match self {
            Section::WorkHistory => "workHistory",
            Section::Education => "education",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// User-editable WorkEntry fields. `duration` is derived and deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WorkField {
    Title,
    Company,
    StartDate,
    EndDate,
    Description,
    Technologies,
}

impl WorkField {
    pub fn key(self) -> &'static str {
        match self {
            WorkField::Title => "title",
            WorkField::Company => "company",
            WorkField::StartDate => "startDate",
            WorkField::EndDate => "endDate",
            WorkField::Description => "description",
            WorkField::Technologies => "technologies",
        }
    }

    pub fn is_date(self) -> bool {
        matches!(self, WorkField::StartDate | WorkField::EndDate)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationField {
    Degree,
    Institution,
    StartDate,
    EndDate,
}

impl EducationField {
    pub fn key(self) -> &'static str {
        match self {
            EducationField::Degree => "degree",
            EducationField::Institution => "institution",
            EducationField::StartDate => "startDate",
            EducationField::EndDate => "endDate",
        }
    }
}

/// Splits multi-line text input into lines, keeping blank lines.
pub fn split_lines(value: &str) -> Vec<String> {
    value
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_resume_seeds_one_entry_per_list() {
        let resume = Resume::new();
        assert_eq!(resume.work_history, vec![WorkEntry::empty()]);
        assert_eq!(resume.education, vec![EducationEntry::empty()]);
        assert_eq!(resume.work_history[0].description, vec![String::new()]);
        assert_eq!(resume.work_history[0].technologies, vec![String::new()]);
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(Resume::new()).unwrap();
        assert!(json.get("workHistory").is_some());
        assert!(json["workHistory"][0].get("startDate").is_some());
        assert!(json["workHistory"][0].get("duration").is_some());
        assert!(json["education"][0].get("endDate").is_some());
    }

    #[test]
    fn test_split_lines_keeps_blank_lines() {
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(split_lines(""), vec![""]);
        assert_eq!(split_lines("a\r\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_single_line_technologies_round_trip() {
        let mut entry = WorkEntry::empty();
        entry.technologies = split_lines("Rust, Tokio,Axum");
        assert_eq!(entry.technologies_text(), "Rust, Tokio,Axum");
    }

    #[test]
    fn test_description_text_joins_lines() {
        let mut entry = WorkEntry::empty();
        entry.description = split_lines("Led migration\nMentored two engineers");
        assert_eq!(entry.description_text(), "Led migration\nMentored two engineers");
    }
}
