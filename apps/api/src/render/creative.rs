//! Creative layout: two columns. Contact, skills and languages sit in the sidebar;
//! profile, experience, projects, education and certifications fill the main column.

use crate::models::resume::{ResumeRecord, Template};
use crate::render::document::{
    contact_items, Entry, Header, RenderedDocument, Section, SectionBody, SectionKind,
};
use crate::render::format::{date_range, format_month_year, join_present, present};
use crate::render::{entries_section, paragraph_section, tags_section};

const DOT: &str = " • ";

pub fn render_creative(r: &ResumeRecord) -> RenderedDocument {
    let info = &r.personal_info;

    let contact_section = info.has_contact().then(|| {
        Section::new(
            SectionKind::Contact,
            "CONTACT",
            SectionBody::Contact(contact_items(info)),
        )
    });

    let sidebar = [
        contact_section,
        tags_section(SectionKind::Skills, "SKILLS", &r.skills),
        entries_section(SectionKind::Languages, "LANGUAGES", &r.languages, |lang| Entry {
            title: lang.name.clone(),
            subtitle: lang.proficiency.map(|p| p.to_string()),
            ..Default::default()
        }),
    ]
    .into_iter()
    .flatten()
    .collect();

    let main = [
        paragraph_section(SectionKind::Summary, "PROFILE", &info.summary),
        entries_section(SectionKind::Experience, "EXPERIENCE", &r.experience, |exp| Entry {
            title: exp.title.clone(),
            subtitle: present(&join_present(
                &[exp.company.as_str(), exp.location.as_str()],
                DOT,
            )),
            meta: date_range(exp).into_iter().collect(),
            details: present(&exp.description).into_iter().collect(),
            link: None,
        }),
        entries_section(SectionKind::Projects, "PROJECTS", &r.projects, |project| Entry {
            title: project.name.clone(),
            subtitle: None,
            meta: Vec::new(),
            details: present(&project.description)
                .into_iter()
                .chain(present(&project.technologies).map(|t| format!("Tech: {t}")))
                .collect(),
            link: present(&project.link),
        }),
        entries_section(SectionKind::Education, "EDUCATION", &r.education, |edu| Entry {
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
            "CERTIFICATIONS",
            &r.certifications,
            |cert| Entry {
                title: cert.name.clone(),
                subtitle: present(&join_present(
                    &[cert.issuer.as_str(), format_month_year(&cert.date).as_str()],
                    DOT,
                )),
                meta: Vec::new(),
                details: present(&cert.credential_id)
                    .map(|id| format!("ID: {id}"))
                    .into_iter()
                    .collect(),
                link: None,
            },
        ),
    ]
    .into_iter()
    .flatten()
    .collect();

    RenderedDocument {
        template: Template::Creative,
        header: Header::name_only(info),
        sidebar,
        main,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{ExperienceItem, PersonalInfo};
    use crate::render::render;
    use crate::render::fixtures::full_record;

    fn kinds(sections: &[Section]) -> Vec<SectionKind> {
        sections.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_creative_groups_sidebar_and_main() {
        let doc = render_creative(&full_record(Template::Creative));
        assert_eq!(
            kinds(&doc.sidebar),
            vec![SectionKind::Contact, SectionKind::Skills, SectionKind::Languages]
        );
        assert_eq!(
            kinds(&doc.main),
            vec![
                SectionKind::Summary,
                SectionKind::Experience,
                SectionKind::Projects,
                SectionKind::Education,
                SectionKind::Certifications,
            ]
        );
        assert!(doc.header.contact.is_empty());
        assert!(doc.header.links.is_empty());
    }

    #[test]
    fn test_creative_current_role_scenario() {
        let record = ResumeRecord {
            title: "Design Resume".to_string(),
            template: Template::Creative,
            personal_info: PersonalInfo {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                ..Default::default()
            },
            experience: vec![ExperienceItem {
                title: "Designer".to_string(),
                company: "Studio".to_string(),
                start_date: "2022-01".to_string(),
                current: true,
                ..Default::default()
            }],
            skills: vec!["Figma".to_string()],
            ..Default::default()
        };

        let doc = render(&record);
        assert_eq!(doc.template, Template::Creative);

        let experience = doc
            .main
            .iter()
            .find(|s| s.kind == SectionKind::Experience)
            .map(|s| &s.body);
        let Some(SectionBody::Entries(entries)) = experience else {
            panic!("experience not in main column");
        };
        assert_eq!(entries[0].meta, vec!["Jan 2022 - Present"]);

        assert!(doc.sidebar.iter().any(|s| s.kind == SectionKind::Skills));
        assert!(doc.sidebar.iter().any(|s| s.kind == SectionKind::Contact));
        assert!(!doc.main.iter().any(|s| s.kind == SectionKind::Skills));
        assert!(!doc.main.iter().any(|s| s.kind == SectionKind::Contact));
    }

    #[test]
    fn test_creative_contact_omitted_without_contact_fields() {
        let mut record = full_record(Template::Creative);
        record.personal_info = PersonalInfo {
            name: "Ada".to_string(),
            summary: "Hi".to_string(),
            ..Default::default()
        };
        let doc = render_creative(&record);
        assert!(!doc.has_section(SectionKind::Contact));
        assert_eq!(doc.header.name, "Ada");
    }

    #[test]
    fn test_creative_languages_show_proficiency_as_subtitle() {
        let doc = render_creative(&full_record(Template::Creative));
        let Some(SectionBody::Entries(langs)) =
            doc.section(SectionKind::Languages).map(|s| &s.body)
        else {
            panic!("languages missing");
        };
        assert_eq!(langs[0].subtitle.as_deref(), Some("Native"));
        assert_eq!(langs[1].subtitle, None);
    }

    #[test]
    fn test_creative_experience_subtitle_uses_dot() {
        let doc = render_creative(&full_record(Template::Creative));
        let Some(SectionBody::Entries(exp)) =
            doc.section(SectionKind::Experience).map(|s| &s.body)
        else {
            panic!("experience missing");
        };
        assert_eq!(exp[0].subtitle.as_deref(), Some("Acme • Remote"));
    }
}
