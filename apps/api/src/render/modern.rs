//! Modern layout: single column, tag-style skills, summary and skills up front.

use crate::models::resume::ResumeRecord;
use crate::models::resume::Template;
use crate::render::document::{Entry, Header, RenderedDocument, SectionKind};
use crate::render::format::{date_range, format_month_year, join_present, present};
use crate::render::{entries_section, lines_section, paragraph_section, tags_section};

pub fn render_modern(r: &ResumeRecord) -> RenderedDocument {
    let info = &r.personal_info;

    let main = [
        paragraph_section(SectionKind::Summary, "Professional Summary", &info.summary),
        tags_section(SectionKind::Skills, "Skills", &r.skills),
        entries_section(SectionKind::Experience, "Work Experience", &r.experience, |exp| {
            Entry {
                title: exp.title.clone(),
                subtitle: present(&exp.company),
                meta: date_range(exp).into_iter().chain(present(&exp.location)).collect(),
                details: present(&exp.description).into_iter().collect(),
                link: None,
            }
        }),
        entries_section(SectionKind::Projects, "Projects", &r.projects, |project| Entry {
            title: project.name.clone(),
            subtitle: None,
            meta: Vec::new(),
            details: present(&project.description)
                .into_iter()
                .chain(
                    present(&project.technologies).map(|t| format!("Technologies: {t}")),
                )
                .collect(),
            link: present(&project.link),
        }),
        entries_section(SectionKind::Education, "Education", &r.education, |edu| Entry {
            title: edu.degree.clone(),
            subtitle: present(&edu.institution),
            meta: present(&edu.year)
                .into_iter()
                .chain(present(&edu.gpa).map(|g| format!("GPA: {g}")))
                .collect(),
            details: Vec::new(),
            link: None,
        }),
        entries_section(
            SectionKind::Certifications,
            "Certifications",
            &r.certifications,
            |cert| Entry {
                title: cert.name.clone(),
                subtitle: present(&join_present(
                    &[cert.issuer.as_str(), format_month_year(&cert.date).as_str()],
                    " | ",
                )),
                meta: Vec::new(),
                details: present(&cert.credential_id)
                    .map(|id| format!("Credential ID: {id}"))
                    .into_iter()
                    .collect(),
                link: None,
            },
        ),
        lines_section(SectionKind::Languages, "Languages", &r.languages, |lang| {
            match lang.proficiency {
                Some(p) => format!("{} - {}", lang.name, p),
                None => lang.name.clone(),
            }
        }),
    ]
    .into_iter()
    .flatten()
    .collect();

    RenderedDocument {
        template: Template::Modern,
        header: Header::with_contact(info),
        sidebar: Vec::new(),
        main,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::document::{ContactKind, SectionBody};
    use crate::render::fixtures::full_record;

    fn entries(doc: &RenderedDocument, kind: SectionKind) -> Vec<Entry> {
        match doc.section(kind).map(|s| &s.body) {
            Some(SectionBody::Entries(e)) => e.clone(),
            other => panic!("expected entries for {kind:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_modern_section_order() {
        let doc = render_modern(&full_record(Template::Modern));
        assert_eq!(
            doc.section_order(),
            vec![
                SectionKind::Summary,
                SectionKind::Skills,
                SectionKind::Experience,
                SectionKind::Projects,
                SectionKind::Education,
                SectionKind::Certifications,
                SectionKind::Languages,
            ]
        );
        assert!(doc.sidebar.is_empty());
    }

    #[test]
    fn test_modern_header_splits_contact_and_links() {
        let doc = render_modern(&full_record(Template::Modern));
        let kinds: Vec<_> = doc.header.contact.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![ContactKind::Email, ContactKind::Phone, ContactKind::Location]
        );
        let labels: Vec<_> = doc.header.links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["LinkedIn", "Portfolio"]);
    }

    #[test]
    fn test_modern_experience_meta() {
        let doc = render_modern(&full_record(Template::Modern));
        let exp = entries(&doc, SectionKind::Experience);
        assert_eq!(exp[0].subtitle.as_deref(), Some("Acme"));
        assert_eq!(exp[0].meta, vec!["Jan 2022 - Present", "Remote"]);
        assert_eq!(exp[1].meta, vec!["Jun 2020 - Dec 2021"]);
        assert!(exp[1].details.is_empty());
    }

    #[test]
    fn test_modern_skills_are_tags() {
        let doc = render_modern(&full_record(Template::Modern));
        assert_eq!(
            doc.section(SectionKind::Skills).map(|s| &s.body),
            Some(&SectionBody::Tags(vec![
                "Rust".to_string(),
                "React".to_string(),
                "SQL".to_string()
            ]))
        );
    }

    #[test]
    fn test_modern_certification_and_languages() {
        let doc = render_modern(&full_record(Template::Modern));
        let certs = entries(&doc, SectionKind::Certifications);
        assert_eq!(certs[0].subtitle.as_deref(), Some("CNCF | Nov 2023"));
        assert_eq!(certs[0].details, vec!["Credential ID: CKA-123"]);
        assert_eq!(
            doc.section(SectionKind::Languages).map(|s| &s.body),
            Some(&SectionBody::Lines(vec![
                "English - Native".to_string(),
                "French".to_string()
            ]))
        );
    }

    #[test]
    fn test_modern_project_link_and_technologies() {
        let doc = render_modern(&full_record(Template::Modern));
        let projects = entries(&doc, SectionKind::Projects);
        assert_eq!(
            projects[0].link.as_deref(),
            Some("https://github.com/ada/ledger")
        );
        assert_eq!(projects[0].details[1], "Technologies: Rust, Postgres");
    }
}
