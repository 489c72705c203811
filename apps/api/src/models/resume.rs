use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use sqlx::FromRow;
use tracing::warn;
use uuid::Uuid;

// ────────────────────────────────────────────────────────────────────────────
// Template selector
// ────────────────────────────────────────────────────────────────────────────

/// The three visual layouts a resume can be rendered with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    #[default]
    Modern,
    Classic,
    Creative,
}

impl Template {
    /// Options offered by the template selector, in display order.
    pub const ALL: [Template; 3] = [Template::Modern, Template::Classic, Template::Creative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Template::Modern => "modern",
            Template::Classic => "classic",
            Template::Creative => "creative",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown template '{0}' (expected modern, classic or creative)")]
pub struct UnknownTemplate(pub String);

impl FromStr for Template {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "modern" => Ok(Template::Modern),
            "classic" => Ok(Template::Classic),
            "creative" => Ok(Template::Creative),
            other => Err(UnknownTemplate(other.to_string())),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Language proficiency
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proficiency {
    Native,
    Fluent,
    Advanced,
    Intermediate,
    Basic,
}

impl Proficiency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Proficiency::Native => "Native",
            Proficiency::Fluent => "Fluent",
            Proficiency::Advanced => "Advanced",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Basic => "Basic",
        }
    }

    /// Parses the select-box value; the empty string means "unset".
    pub fn parse_optional(s: &str) -> Result<Option<Self>, String> {
        match s {
            "" => Ok(None),
            "Native" => Ok(Some(Proficiency::Native)),
            "Fluent" => Ok(Some(Proficiency::Fluent)),
            "Advanced" => Ok(Some(Proficiency::Advanced)),
            "Intermediate" => Ok(Some(Proficiency::Intermediate)),
            "Basic" => Ok(Some(Proficiency::Basic)),
            other => Err(format!("unknown proficiency '{other}'")),
        }
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Documents store an unset proficiency as `""`, not `null`.
mod proficiency_text {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<Proficiency>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(value.map(|p| p.as_str()).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Proficiency>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        Proficiency::parse_optional(raw.as_deref().unwrap_or("")).map_err(serde::de::Error::custom)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resume record
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub portfolio: String,
    pub summary: String,
}

impl PersonalInfo {
    pub fn has_contact(&self) -> bool {
        [
            &self.email,
            &self.phone,
            &self.location,
            &self.linkedin,
            &self.portfolio,
        ]
        .iter()
        .any(|v| !v.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationItem {
    pub degree: String,
    pub institution: String,
    /// Free text, e.g. "2020-2024".
    pub year: String,
    pub gpa: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceItem {
    pub title: String,
    pub company: String,
    pub location: String,
    /// `YYYY-MM`
    pub start_date: String,
    /// `YYYY-MM`; ignored while `current` is set.
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectItem {
    pub name: String,
    pub description: String,
    pub technologies: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LanguageItem {
    pub name: String,
    #[serde(with = "proficiency_text")]
    pub proficiency: Option<Proficiency>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CertificationItem {
    pub name: String,
    pub issuer: String,
    /// `YYYY-MM`
    pub date: String,
    pub credential_id: String,
}

/// One user-authored resume, as edited, persisted and rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeRecord {
    pub title: String,
    pub template: Template,
    pub personal_info: PersonalInfo,
    pub education: Vec<EducationItem>,
    pub experience: Vec<ExperienceItem>,
    pub skills: Vec<String>,
    pub projects: Vec<ProjectItem>,
    pub languages: Vec<LanguageItem>,
    pub certifications: Vec<CertificationItem>,
}

impl ResumeRecord {
    /// Decodes a document read back from the store.
    ///
    /// Stored documents can be edited outside this service. `null` values read as
    /// their defaults, and an unrecognised `template` or language proficiency falls
    /// back to `modern` / unset instead of failing the whole load.
    pub fn from_stored(mut doc: Value) -> Result<Self, serde_json::Error> {
        drop_nulls(&mut doc);
        if let Some(obj) = doc.as_object_mut() {
            let known = match obj.get("template") {
                None => true,
                Some(Value::String(s)) => s.parse::<Template>().is_ok(),
                Some(_) => false,
            };
            if !known {
                warn!(
                    "Stored resume has unknown template {:?}; falling back to modern",
                    obj.get("template")
                );
                obj.insert(
                    "template".to_string(),
                    Value::String(Template::Modern.as_str().to_string()),
                );
            }

            if let Some(Value::Array(languages)) = obj.get_mut("languages") {
                languages
                    .iter_mut()
                    .filter_map(Value::as_object_mut)
                    .for_each(clear_unknown_proficiency);
            }
        }
        serde_json::from_value(doc)
    }
}

/// Removes `null` object members and array elements, recursively.
fn drop_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(drop_nulls);
        }
        Value::Array(items) => {
            items.retain(|v| !v.is_null());
            items.iter_mut().for_each(drop_nulls);
        }
        _ => {}
    }
}

fn clear_unknown_proficiency(language: &mut serde_json::Map<String, Value>) {
    let known = match language.get("proficiency") {
        None => true,
        Some(Value::String(s)) => Proficiency::parse_optional(s).is_ok(),
        Some(_) => false,
    };
    if !known {
        warn!(
            "Stored language has unknown proficiency {:?}; treating it as unset",
            language.get("proficiency")
        );
        language.remove("proficiency");
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Persisted envelope
// ────────────────────────────────────────────────────────────────────────────

/// A resume as held by the document store: the record plus store-assigned identity,
/// owner and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredResume {
    pub id: Uuid,
    pub user_id: String,
    #[serde(flatten)]
    pub record: ResumeRecord,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: String,
    pub data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ResumeRow> for StoredResume {
    type Error = serde_json::Error;

    fn try_from(row: ResumeRow) -> Result<Self, Self::Error> {
        Ok(StoredResume {
            id: row.id,
            user_id: row.user_id,
            record: ResumeRecord::from_stored(row.data)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
