//! Resume Editor session: an in-memory draft that is either handed to a save
//! callback as a complete record or discarded.

use serde::{Deserialize, Serialize};

use crate::editor::fields::{
    parse_skills, EditError, FieldValue, PersonalField, ScalarField, Section, SectionEntry,
};
use crate::models::resume::{ResumeRecord, Template};

/// One form interaction, as sent by a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum EditOp {
    SetField {
        field: String,
        value: String,
    },
    AddItem {
        section: Section,
    },
    RemoveItem {
        section: Section,
        index: usize,
    },
    UpdateItem {
        section: Section,
        index: usize,
        field: String,
        value: FieldValue,
    },
    SetSkills {
        raw: String,
    },
}

/// What the form shows for the current draft.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorView {
    pub heading: &'static str,
    pub editing: bool,
    pub templates: [Template; 3],
    pub skills_text: String,
    pub item_counts: ItemCounts,
    pub draft: ResumeRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemCounts {
    pub education: usize,
    pub experience: usize,
    pub projects: usize,
    pub languages: usize,
    pub certifications: usize,
}

#[derive(Debug, Clone)]
pub struct EditorSession {
    draft: ResumeRecord,
    editing: bool,
}

impl EditorSession {
    /// Starts from an existing record (edit) or from an empty one (create).
    pub fn new(initial: Option<ResumeRecord>) -> Self {
        EditorSession {
            editing: initial.is_some(),
            draft: initial.unwrap_or_default(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn heading(&self) -> &'static str {
        if self.editing {
            "Edit Resume"
        } else {
            "Create New Resume"
        }
    }

    pub fn draft(&self) -> &ResumeRecord {
        &self.draft
    }

    pub fn set_scalar_field(
        &mut self,
        field: ScalarField,
        value: impl Into<String>,
    ) -> Result<(), EditError> {
        let value = value.into();
        let info = &mut self.draft.personal_info;
        match field {
            ScalarField::Title => self.draft.title = value,
            ScalarField::Template => {
                self.draft.template = value.parse::<Template>().map_err(|e| {
                    EditError::InvalidValue {
                        field: "template".to_string(),
                        reason: e.to_string(),
                    }
                })?;
            }
            ScalarField::PersonalInfo(p) => {
                let slot = match p {
                    PersonalField::Name => &mut info.name,
                    PersonalField::Email => &mut info.email,
                    PersonalField::Phone => &mut info.phone,
                    PersonalField::Location => &mut info.location,
                    PersonalField::Linkedin => &mut info.linkedin,
                    PersonalField::Portfolio => &mut info.portfolio,
                    PersonalField::Summary => &mut info.summary,
                };
                *slot = value;
            }
        }
        Ok(())
    }

    /// Appends an empty item; every field is present so renderers never see a gap.
    pub fn add_item(&mut self, section: Section) {
        let r = &mut self.draft;
        match section {
            Section::Education => r.education.push(Default::default()),
            Section::Experience => r.experience.push(Default::default()),
            Section::Projects => r.projects.push(Default::default()),
            Section::Languages => r.languages.push(Default::default()),
            Section::Certifications => r.certifications.push(Default::default()),
        }
    }

    /// Removes the item at `index`; later items shift down by one.
    pub fn remove_item(&mut self, section: Section, index: usize) -> Result<(), EditError> {
        let r = &mut self.draft;
        match section {
            Section::Education => remove_at(&mut r.education, section, index),
            Section::Experience => remove_at(&mut r.experience, section, index),
            Section::Projects => remove_at(&mut r.projects, section, index),
            Section::Languages => remove_at(&mut r.languages, section, index),
            Section::Certifications => remove_at(&mut r.certifications, section, index),
        }
    }

    pub fn update_item(
        &mut self,
        section: Section,
        index: usize,
        field: &str,
        value: FieldValue,
    ) -> Result<(), EditError> {
        let r = &mut self.draft;
        match section {
            Section::Education => update_at(&mut r.education, index, field, value),
            Section::Experience => update_at(&mut r.experience, index, field, value),
            Section::Projects => update_at(&mut r.projects, index, field, value),
            Section::Languages => update_at(&mut r.languages, index, field, value),
            Section::Certifications => update_at(&mut r.certifications, index, field, value),
        }
    }

    pub fn item_count(&self, section: Section) -> usize {
        let r = &self.draft;
        match section {
            Section::Education => r.education.len(),
            Section::Experience => r.experience.len(),
            Section::Projects => r.projects.len(),
            Section::Languages => r.languages.len(),
            Section::Certifications => r.certifications.len(),
        }
    }

    pub fn set_skills(&mut self, raw: &str) {
        self.draft.skills = parse_skills(raw);
    }

    /// The skills input as shown back in the form.
    pub fn skills_text(&self) -> String {
        self.draft.skills.join(", ")
    }

    pub fn apply(&mut self, op: EditOp) -> Result<(), EditError> {
        match op {
            EditOp::SetField { field, value } => {
                self.set_scalar_field(field.parse::<ScalarField>()?, value)
            }
            EditOp::AddItem { section } => {
                self.add_item(section);
                Ok(())
            }
            EditOp::RemoveItem { section, index } => self.remove_item(section, index),
            EditOp::UpdateItem {
                section,
                index,
                field,
                value,
            } => self.update_item(section, index, &field, value),
            EditOp::SetSkills { raw } => {
                self.set_skills(&raw);
                Ok(())
            }
        }
    }

    /// Applies operations in order, stopping at the first failure.
    pub fn apply_all(&mut self, ops: impl IntoIterator<Item = EditOp>) -> Result<(), EditError> {
        ops.into_iter().try_for_each(|op| self.apply(op))
    }

    pub fn view(&self) -> EditorView {
        EditorView {
            heading: self.heading(),
            editing: self.is_editing(),
            templates: Template::ALL,
            skills_text: self.skills_text(),
            item_counts: ItemCounts {
                education: self.item_count(Section::Education),
                experience: self.item_count(Section::Experience),
                projects: self.item_count(Section::Projects),
                languages: self.item_count(Section::Languages),
                certifications: self.item_count(Section::Certifications),
            },
            draft: self.draft.clone(),
        }
    }

    /// Hands the complete draft to the caller's save callback.
    pub fn submit<R>(self, on_save: impl FnOnce(ResumeRecord) -> R) -> R {
        on_save(self.draft)
    }

    /// Discards the draft and signals the caller.
    #[allow(dead_code)]
    pub fn cancel(self, on_cancel: impl FnOnce()) {
        on_cancel()
    }
}

fn remove_at<T>(items: &mut Vec<T>, section: Section, index: usize) -> Result<(), EditError> {
    if index >= items.len() {
        return Err(EditError::IndexOutOfRange {
            section,
            index,
            len: items.len(),
        });
    }
    items.remove(index);
    Ok(())
}

fn update_at<T: SectionEntry>(
    items: &mut [T],
    index: usize,
    field: &str,
    value: FieldValue,
) -> Result<(), EditError> {
    let len = items.len();
    items
        .get_mut(index)
        .ok_or(EditError::IndexOutOfRange {
            section: T::SECTION,
            index,
            len,
        })?
        .set_field(field, value)
}
