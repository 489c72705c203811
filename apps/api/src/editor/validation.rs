//! Advisory checks on a resume record before it is persisted.
//!
//! The editor itself never rejects a draft; callers decide whether a failed report
//! blocks the save. The HTTP layer does.

use serde::{Deserialize, Serialize};
use validator::{ValidateEmail, ValidateUrl};

use crate::models::resume::ResumeRecord;
use crate::render::format::parse_year_month;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldIssue {
    /// Document path, e.g. `experience[0].startDate`.
    pub field: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub passed: bool,
    pub issues: Vec<FieldIssue>,
}

impl ValidationReport {
    pub fn summary(&self) -> String {
        self.issues
            .iter()
            .map(|i| format!("{}: {}", i.field, i.reason))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Default)]
struct Issues(Vec<FieldIssue>);

impl Issues {
    fn push(&mut self, field: impl Into<String>, reason: &str) {
        self.0.push(FieldIssue {
            field: field.into(),
            reason: reason.to_string(),
        });
    }

    fn required(&mut self, field: impl Into<String>, value: &str) {
        if value.trim().is_empty() {
            self.push(field, "is required");
        }
    }

    fn url(&mut self, field: impl Into<String>, value: &str) {
        if !value.is_empty() && !value.validate_url() {
            self.push(field, "must be a valid URL");
        }
    }

    fn year_month(&mut self, field: impl Into<String>, value: &str) {
        if !value.is_empty() && parse_year_month(value).is_none() {
            self.push(field, "must be a YYYY-MM month");
        }
    }
}

pub fn validate_record(record: &ResumeRecord) -> ValidationReport {
    let mut issues = Issues::default();
    let info = &record.personal_info;

    issues.required("title", &record.title);
    issues.required("personalInfo.name", &info.name);
    issues.required("personalInfo.email", &info.email);
    if !info.email.is_empty() && !info.email.validate_email() {
        issues.push("personalInfo.email", "must be a valid email address");
    }
    issues.required("personalInfo.phone", &info.phone);
    issues.required("personalInfo.summary", &info.summary);
    issues.url("personalInfo.linkedin", &info.linkedin);
    issues.url("personalInfo.portfolio", &info.portfolio);

    for (i, edu) in record.education.iter().enumerate() {
        issues.required(format!("education[{i}].degree"), &edu.degree);
        issues.required(format!("education[{i}].institution"), &edu.institution);
    }

    for (i, exp) in record.experience.iter().enumerate() {
        issues.required(format!("experience[{i}].title"), &exp.title);
        issues.required(format!("experience[{i}].company"), &exp.company);
        issues.required(format!("experience[{i}].startDate"), &exp.start_date);
        issues.year_month(format!("experience[{i}].startDate"), &exp.start_date);
        if exp.current {
            continue;
        }
        issues.year_month(format!("experience[{i}].endDate"), &exp.end_date);
        if let (Some(start), Some(end)) = (
            parse_year_month(&exp.start_date),
            parse_year_month(&exp.end_date),
        ) {
            if end < start {
                issues.push(
                    format!("experience[{i}].endDate"),
                    "must not be earlier than startDate",
                );
            }
        }
    }

    for (i, project) in record.projects.iter().enumerate() {
        issues.url(format!("projects[{i}].link"), &project.link);
    }

    for (i, cert) in record.certifications.iter().enumerate() {
        issues.year_month(format!("certifications[{i}].date"), &cert.date);
    }

    ValidationReport {
        passed: issues.0.is_empty(),
        issues: issues.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{
        CertificationItem, EducationItem, ExperienceItem, PersonalInfo, ProjectItem,
    };

    fn valid_record() -> ResumeRecord {
        ResumeRecord {
            title: "Dev Resume".to_string(),
            personal_info: PersonalInfo {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                phone: "555-0100".to_string(),
                summary: "Engineer".to_string(),
                linkedin: "https://linkedin.com/in/ada".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn fields(report: &ValidationReport) -> Vec<&str> {
        report.issues.iter().map(|i| i.field.as_str()).collect()
    }

    #[test]
    fn test_valid_record_passes() {
        let report = validate_record(&valid_record());
        assert!(report.passed, "{}", report.summary());
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_empty_record_lists_required_fields() {
        let report = validate_record(&ResumeRecord::default());
        assert!(!report.passed);
        assert_eq!(
            fields(&report),
            vec![
                "title",
                "personalInfo.name",
                "personalInfo.email",
                "personalInfo.phone",
                "personalInfo.summary",
            ]
        );
    }

    #[test]
    fn test_whitespace_title_is_missing() {
        let mut record = valid_record();
        record.title = "   ".to_string();
        assert_eq!(fields(&validate_record(&record)), vec!["title"]);
    }

    #[test]
    fn test_malformed_email_and_urls() {
        let mut record = valid_record();
        record.personal_info.email = "not-an-email".to_string();
        record.personal_info.portfolio = "my site".to_string();
        record.projects.push(ProjectItem {
            name: "x".to_string(),
            link: "nope".to_string(),
            ..Default::default()
        });
        let report = validate_record(&record);
        assert_eq!(
            fields(&report),
            vec!["personalInfo.email", "personalInfo.portfolio", "projects[0].link"]
        );
    }

    #[test]
    fn test_array_item_required_fields() {
        let mut record = valid_record();
        record.education.push(EducationItem::default());
        record.experience.push(ExperienceItem::default());
        let report = validate_record(&record);
        assert_eq!(
            fields(&report),
            vec![
                "education[0].degree",
                "education[0].institution",
                "experience[0].title",
                "experience[0].company",
                "experience[0].startDate",
            ]
        );
    }

    #[test]
    fn test_end_before_start_flagged_unless_current() {
        let mut record = valid_record();
        record.experience.push(ExperienceItem {
            title: "Eng".to_string(),
            company: "Acme".to_string(),
            start_date: "2022-05".to_string(),
            end_date: "2021-01".to_string(),
            ..Default::default()
        });
        assert_eq!(
            fields(&validate_record(&record)),
            vec!["experience[0].endDate"]
        );

        record.experience[0].current = true;
        assert!(validate_record(&record).passed);
    }

    #[test]
    fn test_malformed_month_values() {
        let mut record = valid_record();
        record.certifications.push(CertificationItem {
            name: "CKA".to_string(),
            date: "Nov 2023".to_string(),
            ..Default::default()
        });
        let report = validate_record(&record);
        assert_eq!(fields(&report), vec!["certifications[0].date"]);
        assert!(report.summary().contains("YYYY-MM"));
    }
}
