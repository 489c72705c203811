//! Classic layout: single column, uppercase headings, inline " | " separated facts.

use crate::models::resume::{ResumeRecord, Template};
use crate::render::document::{Entry, Header, RenderedDocument, Section, SectionBody, SectionKind};
use crate::render::format::{date_range, format_month_year, join_present, present};
use crate::render::{entries_section, paragraph_section};

const SEPARATOR: &str = " | ";
const BULLET: &str = " • ";

pub fn render_classic(r: &ResumeRecord) -> RenderedDocument {
    let info = &r.personal_info;

    let main = [
        paragraph_section(SectionKind::Summary, "PROFESSIONAL SUMMARY", &info.summary),
        entries_section(
            SectionKind::Experience,
            "PROFESSIONAL EXPERIENCE",
            &r.experience,
            |exp| Entry {
                title: exp.title.clone(),
                subtitle: present(&join_present(
                    &[exp.company.as_str(), exp.location.as_str()],
                    SEPARATOR,
                )),
                meta: date_range(exp).into_iter().collect(),
                details: present(&exp.description).into_iter().collect(),
                link: None,
            },
        ),
        entries_section(SectionKind::Education, "EDUCATION", &r.education, |edu| {
            let gpa = present(&edu.gpa).map(|g| format!("GPA: {g}")).unwrap_or_default();
            Entry {
                title: edu.degree.clone(),
                subtitle: present(&join_present(
                    &[edu.institution.as_str(), gpa.as_str()],
                    SEPARATOR,
                )),
                meta: present(&edu.year).into_iter().collect(),
                details: Vec::new(),
                link: None,
            }
        }),
        paragraph_section(SectionKind::Skills, "SKILLS", &r.skills.join(BULLET)),
        entries_section(SectionKind::Projects, "PROJECTS", &r.projects, |project| Entry {
            // Classic prints the link as text next to the name.
            title: join_present(&[project.name.as_str(), project.link.as_str()], SEPARATOR),
            subtitle: None,
            meta: Vec::new(),
            details: present(&project.description)
                .into_iter()
                .chain(present(&project.technologies).map(|t| format!("Technologies: {t}")))
                .collect(),
            link: None,
        }),
        entries_section(
            SectionKind::Certifications,
            "CERTIFICATIONS",
            &r.certifications,
            |cert| {
                let id = present(&cert.credential_id)
                    .map(|id| format!("ID: {id}"))
                    .unwrap_or_default();
                Entry {
                    title: cert.name.clone(),
                    subtitle: present(&join_present(
                        &[
                            cert.issuer.as_str(),
                            format_month_year(&cert.date).as_str(),
                            id.as_str(),
                        ],
                        SEPARATOR,
                    )),
                    meta: Vec::new(),
                    details: Vec::new(),
                    link: None,
                }
            },
        ),
        languages_paragraph(r),
    ]
    .into_iter()
    .flatten()
    .collect();

    RenderedDocument {
        template: Template::Classic,
        header: Header::with_contact(info),
        sidebar: Vec::new(),
        main,
    }
}

/// `English (Native) • French`
fn languages_paragraph(r: &ResumeRecord) -> Option<Section> {
    if r.languages.is_empty() {
        return None;
    }
    let text = r
        .languages
        .iter()
        .map(|lang| match lang.proficiency {
            Some(p) => format!("{} ({})", lang.name, p),
            None => lang.name.clone(),
        })
        .collect::<Vec<_>>()
        .join(BULLET);
    Some(Section::new(
        SectionKind::Languages,
        "LANGUAGES",
        SectionBody::Paragraph(text),
    ))
}
