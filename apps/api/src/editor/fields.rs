//! Field addressing for the editor: which scalar fields exist, which array sections
//! exist, and how a single item field is overwritten.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::resume::{
    CertificationItem, EducationItem, ExperienceItem, LanguageItem, Proficiency, ProjectItem,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    #[error("{section} has no item at index {index} (length {len})")]
    IndexOutOfRange {
        section: Section,
        index: usize,
        len: usize,
    },

    #[error("unknown field '{field}' for {scope}")]
    UnknownField { scope: String, field: String },

    #[error("field '{field}' expects a {expected} value")]
    TypeMismatch {
        field: String,
        expected: &'static str,
    },

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

// ────────────────────────────────────────────────────────────────────────────
// Scalar fields
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    Name,
    Email,
    Phone,
    Location,
    Linkedin,
    Portfolio,
    Summary,
}

/// A top-level field or a nested `personalInfo` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    Title,
    Template,
    PersonalInfo(PersonalField),
}

impl FromStr for ScalarField {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let personal = match s {
            "title" => return Ok(ScalarField::Title),
            "template" => return Ok(ScalarField::Template),
            "personalInfo.name" => PersonalField::Name,
            "personalInfo.email" => PersonalField::Email,
            "personalInfo.phone" => PersonalField::Phone,
            "personalInfo.location" => PersonalField::Location,
            "personalInfo.linkedin" => PersonalField::Linkedin,
            "personalInfo.portfolio" => PersonalField::Portfolio,
            "personalInfo.summary" => PersonalField::Summary,
            other => {
                return Err(EditError::UnknownField {
                    scope: "resume".to_string(),
                    field: other.to_string(),
                })
            }
        };
        Ok(ScalarField::PersonalInfo(personal))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Array sections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Education,
    Experience,
    Projects,
    Languages,
    Certifications,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Section::Education => "education",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Languages => "languages",
            Section::Certifications => "certifications",
        })
    }
}

/// A value typed into a form control: text inputs and the `current` checkbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

fn text(field: &str, value: FieldValue) -> Result<String, EditError> {
    match value {
        FieldValue::Text(s) => Ok(s),
        FieldValue::Flag(_) => Err(EditError::TypeMismatch {
            field: field.to_string(),
            expected: "text",
        }),
    }
}

fn flag(field: &str, value: FieldValue) -> Result<bool, EditError> {
    match value {
        FieldValue::Flag(b) => Ok(b),
        FieldValue::Text(_) => Err(EditError::TypeMismatch {
            field: field.to_string(),
            expected: "boolean",
        }),
    }
}

fn unknown(section: Section, field: &str) -> EditError {
    EditError::UnknownField {
        scope: section.to_string(),
        field: field.to_string(),
    }
}

/// An item of an array section. `Default` is the empty-but-complete item appended by
/// "add"; `set_field` merges one field and leaves the others untouched.
pub trait SectionEntry: Default {
    const SECTION: Section;

    fn set_field(&mut self, field: &str, value: FieldValue) -> Result<(), EditError>;
}

impl SectionEntry for EducationItem {
    const SECTION: Section = Section::Education;

    fn set_field(&mut self, field: &str, value: FieldValue) -> Result<(), EditError> {
        let slot = match field {
            "degree" => &mut self.degree,
            "institution" => &mut self.institution,
            "year" => &mut self.year,
            "gpa" => &mut self.gpa,
            _ => return Err(unknown(Self::SECTION, field)),
        };
        *slot = text(field, value)?;
        Ok(())
    }
}

impl SectionEntry for ExperienceItem {
    const SECTION: Section = Section::Experience;

    fn set_field(&mut self, field: &str, value: FieldValue) -> Result<(), EditError> {
        let slot = match field {
            "title" => &mut self.title,
            "company" => &mut self.company,
            "location" => &mut self.location,
            "startDate" => &mut self.start_date,
            "endDate" => &mut self.end_date,
            "description" => &mut self.description,
            "current" => {
                self.current = flag(field, value)?;
                return Ok(());
            }
            _ => return Err(unknown(Self::SECTION, field)),
        };
        *slot = text(field, value)?;
        Ok(())
    }
}

impl SectionEntry for ProjectItem {
    const SECTION: Section = Section::Projects;

    fn set_field(&mut self, field: &str, value: FieldValue) -> Result<(), EditError> {
        let slot = match field {
            "name" => &mut self.name,
            "description" => &mut self.description,
            "technologies" => &mut self.technologies,
            "link" => &mut self.link,
            _ => return Err(unknown(Self::SECTION, field)),
        };
        *slot = text(field, value)?;
        Ok(())
    }
}

impl SectionEntry for LanguageItem {
    const SECTION: Section = Section::Languages;

    fn set_field(&mut self, field: &str, value: FieldValue) -> Result<(), EditError> {
        match field {
            "name" => self.name = text(field, value)?,
            "proficiency" => {
                let raw = text(field, value)?;
                self.proficiency =
                    Proficiency::parse_optional(&raw).map_err(|reason| EditError::InvalidValue {
                        field: field.to_string(),
                        reason,
                    })?;
            }
            _ => return Err(unknown(Self::SECTION, field)),
        }
        Ok(())
    }
}

impl SectionEntry for CertificationItem {
    const SECTION: Section = Section::Certifications;

    fn set_field(&mut self, field: &str, value: FieldValue) -> Result<(), EditError> {
        let slot = match field {
            "name" => &mut self.name,
            "issuer" => &mut self.issuer,
            "date" => &mut self.date,
            "credentialId" => &mut self.credential_id,
            _ => return Err(unknown(Self::SECTION, field)),
        };
        *slot = text(field, value)?;
        Ok(())
    }
}

/// Splits comma-separated skills input, trimming each entry and dropping empties.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
