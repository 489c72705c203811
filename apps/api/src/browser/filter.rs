use std::str::FromStr;

use crate::models::resume::{StoredResume, Template, UnknownTemplate};

/// Template dropdown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateFilter {
    #[default]
    All,
    Only(Template),
}

impl TemplateFilter {
    pub fn matches(&self, template: Template) -> bool {
        match self {
            TemplateFilter::All => true,
            TemplateFilter::Only(t) => *t == template,
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, TemplateFilter::All)
    }
}

impl FromStr for TemplateFilter {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(TemplateFilter::All),
            other => other.parse::<Template>().map(TemplateFilter::Only),
        }
    }
}

/// Resumes matching both the search query and the template filter, in input order.
///
/// The query is a case-insensitive substring match against the title, the person's
/// name and every skill. An empty query matches everything.
pub fn filter(resumes: &[StoredResume], query: &str, template: TemplateFilter) -> Vec<StoredResume> {
    let needle = query.to_lowercase();
    resumes
        .iter()
        .filter(|r| template.matches(r.record.template))
        .filter(|r| needle.is_empty() || matches_query(r, &needle))
        .cloned()
        .collect()
}

fn matches_query(resume: &StoredResume, needle: &str) -> bool {
    let record = &resume.record;
    record.title.to_lowercase().contains(needle)
        || record.personal_info.name.to_lowercase().contains(needle)
        || record
            .skills
            .iter()
            .any(|s| s.to_lowercase().contains(needle))
}
