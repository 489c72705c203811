//! Template-independent shape of a rendered resume.
//!
//! Templates decide which sections exist, in what order, under which titles and in
//! which grouping (`sidebar` vs `main`). The HTML writer only walks this structure.

use serde::Serialize;

use crate::models::resume::{PersonalInfo, Template};
use crate::render::format::present;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Contact,
    Summary,
    Skills,
    Experience,
    Projects,
    Education,
    Certifications,
    Languages,
}

impl SectionKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            SectionKind::Contact => "section-contact",
            SectionKind::Summary => "section-summary",
            SectionKind::Skills => "section-skills",
            SectionKind::Experience => "section-experience",
            SectionKind::Projects => "section-projects",
            SectionKind::Education => "section-education",
            SectionKind::Certifications => "section-certifications",
            SectionKind::Languages => "section-languages",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Email,
    Phone,
    Location,
    Linkedin,
    Portfolio,
}

impl ContactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactKind::Email => "email",
            ContactKind::Phone => "phone",
            ContactKind::Location => "location",
            ContactKind::Linkedin => "linkedin",
            ContactKind::Portfolio => "portfolio",
        }
    }

    /// Link label for URL-valued contact entries.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            ContactKind::Linkedin => Some("LinkedIn"),
            ContactKind::Portfolio => Some("Portfolio"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactItem {
    pub kind: ContactKind,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    pub name: String,
    pub contact: Vec<ContactItem>,
    pub links: Vec<Link>,
}

impl Header {
    pub const NAME_PLACEHOLDER: &'static str = "Your Name";

    /// Name only; used by layouts that move contact details into a section.
    pub fn name_only(info: &PersonalInfo) -> Self {
        Header {
            name: present(&info.name).unwrap_or_else(|| Self::NAME_PLACEHOLDER.to_string()),
            contact: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Name, inline contact line (email, phone, location) and profile links.
    pub fn with_contact(info: &PersonalInfo) -> Self {
        let mut header = Self::name_only(info);
        header.contact = contact_items(info)
            .into_iter()
            .filter(|c| c.kind.label().is_none())
            .collect();
        header.links = contact_items(info)
            .into_iter()
            .filter_map(|c| {
                c.kind.label().map(|label| Link {
                    label: label.to_string(),
                    href: c.value,
                })
            })
            .collect();
        header
    }
}

/// Every non-empty contact field, in display order.
pub fn contact_items(info: &PersonalInfo) -> Vec<ContactItem> {
    [
        (ContactKind::Email, &info.email),
        (ContactKind::Phone, &info.phone),
        (ContactKind::Location, &info.location),
        (ContactKind::Linkedin, &info.linkedin),
        (ContactKind::Portfolio, &info.portfolio),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(kind, value)| ContactItem {
        kind,
        value: value.clone(),
    })
    .collect()
}

/// One item inside an entry-list section (a job, a degree, a project, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Entry {
    pub title: String,
    pub subtitle: Option<String>,
    /// Right-aligned facts such as dates, location or GPA.
    pub meta: Vec<String>,
    pub details: Vec<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum SectionBody {
    Paragraph(String),
    Tags(Vec<String>),
    Lines(Vec<String>),
    Entries(Vec<Entry>),
    Contact(Vec<ContactItem>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub title: String,
    pub body: SectionBody,
}

impl Section {
    pub fn new(kind: SectionKind, title: &str, body: SectionBody) -> Self {
        Section {
            kind,
            title: title.to_string(),
            body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedDocument {
    pub template: Template,
    pub header: Header,
    pub sidebar: Vec<Section>,
    pub main: Vec<Section>,
}

#[cfg(test)]
impl RenderedDocument {
    /// All sections, sidebar first.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sidebar.iter().chain(self.main.iter())
    }

    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections().find(|s| s.kind == kind)
    }

    pub fn has_section(&self, kind: SectionKind) -> bool {
        self.section(kind).is_some()
    }

    pub fn section_order(&self) -> Vec<SectionKind> {
        self.sections().map(|s| s.kind).collect()
    }
}
