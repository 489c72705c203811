// Template Renderer
// Maps a ResumeRecord onto one of three layouts. Pure: no I/O, never fails.
// Sections with no backing data are omitted; items keep their stored order.

pub mod classic;
pub mod creative;
pub mod document;
pub mod format;
pub mod html;
pub mod modern;

pub use document::{RenderedDocument, SectionKind};

use crate::models::resume::{ResumeRecord, Template};
use crate::render::document::{Entry, Section, SectionBody};

/// Renders a resume with the layout named by its `template`.
pub fn render(resume: &ResumeRecord) -> RenderedDocument {
    render_with(resume, resume.template)
}

/// Renders a resume with an explicit layout, ignoring the stored selection.
pub fn render_with(resume: &ResumeRecord, template: Template) -> RenderedDocument {
    match template {
        Template::Modern => modern::render_modern(resume),
        Template::Classic => classic::render_classic(resume),
        Template::Creative => creative::render_creative(resume),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Section builders shared by the layouts
// ────────────────────────────────────────────────────────────────────────────

fn paragraph_section(kind: SectionKind, title: &str, text: &str) -> Option<Section> {
    (!text.is_empty()).then(|| Section::new(kind, title, SectionBody::Paragraph(text.to_string())))
}

fn tags_section(kind: SectionKind, title: &str, tags: &[String]) -> Option<Section> {
    (!tags.is_empty()).then(|| Section::new(kind, title, SectionBody::Tags(tags.to_vec())))
}

fn entries_section<T>(
    kind: SectionKind,
    title: &str,
    items: &[T],
    to_entry: impl Fn(&T) -> Entry,
) -> Option<Section> {
    (!items.is_empty())
        .then(|| Section::new(kind, title, SectionBody::Entries(items.iter().map(to_entry).collect())))
}

fn lines_section<T>(
    kind: SectionKind,
    title: &str,
    items: &[T],
    to_line: impl Fn(&T) -> String,
) -> Option<Section> {
    (!items.is_empty())
        .then(|| Section::new(kind, title, SectionBody::Lines(items.iter().map(to_line).collect())))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::resume::*;

    /// A record with every section populated.
    pub fn full_record(template: Template) -> ResumeRecord {
        ResumeRecord {
            title: "Dev Resume".to_string(),
            template,
            personal_info: PersonalInfo {
                name: "Ada Obi".to_string(),
                email: "ada@example.com".to_string(),
                phone: "+234 800 000 0000".to_string(),
                location: "Lagos, Nigeria".to_string(),
                linkedin: "https://linkedin.com/in/adaobi".to_string(),
                portfolio: "https://ada.dev".to_string(),
                summary: "Backend engineer.".to_string(),
            },
            education: vec![EducationItem {
                degree: "BSc Computer Science".to_string(),
                institution: "UNILAG".to_string(),
                year: "2016-2020".to_string(),
                gpa: "4.5".to_string(),
            }],
            experience: vec![
                ExperienceItem {
                    title: "Senior Engineer".to_string(),
                    company: "Acme".to_string(),
                    location: "Remote".to_string(),
                    start_date: "2022-01".to_string(),
                    end_date: "2020-01".to_string(),
                    current: true,
                    description: "Owns the billing service.".to_string(),
                },
                ExperienceItem {
                    title: "Engineer".to_string(),
                    company: "Initech".to_string(),
                    location: String::new(),
                    start_date: "2020-06".to_string(),
                    end_date: "2021-12".to_string(),
                    current: false,
                    description: String::new(),
                },
            ],
            skills: vec!["Rust".to_string(), "React".to_string(), "SQL".to_string()],
            projects: vec![ProjectItem {
                name: "Ledger".to_string(),
                description: "Double-entry bookkeeping.".to_string(),
                technologies: "Rust, Postgres".to_string(),
                link: "https://github.com/ada/ledger".to_string(),
            }],
            languages: vec![
                LanguageItem {
                    name: "English".to_string(),
                    proficiency: Some(Proficiency::Native),
                },
                LanguageItem {
                    name: "French".to_string(),
                    proficiency: None,
                },
            ],
            certifications: vec![CertificationItem {
                name: "CKA".to_string(),
                issuer: "CNCF".to_string(),
                date: "2023-11".to_string(),
                credential_id: "CKA-123".to_string(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::full_record;
    use super::*;
    use crate::models::resume::{ExperienceItem, ResumeRecord};

    const CONTENT_SECTIONS: [SectionKind; 7] = [
        SectionKind::Summary,
        SectionKind::Skills,
        SectionKind::Education,
        SectionKind::Experience,
        SectionKind::Projects,
        SectionKind::Certifications,
        SectionKind::Languages,
    ];

    #[test]
    fn test_dispatch_follows_record_template() {
        for template in Template::ALL {
            assert_eq!(render(&full_record(template)).template, template);
        }
    }

    #[test]
    fn test_full_record_renders_every_section_in_every_template() {
        for template in Template::ALL {
            let doc = render(&full_record(template));
            for kind in CONTENT_SECTIONS {
                assert!(doc.has_section(kind), "{template}: missing {kind:?}");
            }
        }
    }

    #[test]
    fn test_empty_record_renders_no_sections() {
        for template in Template::ALL {
            let doc = render_with(&ResumeRecord::default(), template);
            assert_eq!(doc.sections().count(), 0, "{template}");
            assert_eq!(doc.header.name, "Your Name");
        }
    }

    #[test]
    fn test_each_section_omitted_when_its_field_is_empty() {
        for template in Template::ALL {
            let mut r = full_record(template);
            r.personal_info.summary.clear();
            r.skills.clear();
            let doc = render(&r);
            assert!(!doc.has_section(SectionKind::Summary));
            assert!(!doc.has_section(SectionKind::Skills));
            assert!(doc.has_section(SectionKind::Experience));

            let mut r = full_record(template);
            r.education.clear();
            r.experience.clear();
            r.projects.clear();
            r.certifications.clear();
            r.languages.clear();
            let doc = render(&r);
            assert!(doc.has_section(SectionKind::Summary));
            assert!(doc.has_section(SectionKind::Skills));
            for kind in [
                SectionKind::Education,
                SectionKind::Experience,
                SectionKind::Projects,
                SectionKind::Certifications,
                SectionKind::Languages,
            ] {
                assert!(!doc.has_section(kind), "{template}: {kind:?} should be omitted");
            }
        }
    }

    #[test]
    fn test_items_keep_stored_order() {
        for template in Template::ALL {
            let doc = render(&full_record(template));
            let Some(section) = doc.section(SectionKind::Experience) else {
                panic!("experience missing");
            };
            let SectionBody::Entries(entries) = &section.body else {
                panic!("experience is not an entry list");
            };
            let titles: Vec<_> = entries.iter().map(|e| e.title.as_str()).collect();
            assert_eq!(titles, vec!["Senior Engineer", "Engineer"]);
        }
    }

    #[test]
    fn test_item_with_only_empty_fields_does_not_panic() {
        let mut r = ResumeRecord::default();
        r.experience.push(ExperienceItem::default());
        for template in Template::ALL {
            let doc = render_with(&r, template);
            assert!(doc.has_section(SectionKind::Experience));
        }
    }
}
