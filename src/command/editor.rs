// src/command/editor.rs

use crate::catalog::Catalog;
use crate::quiz_id::derive_id;
use crate::types::{ExportFile, Metadata, Reconciliation, Validity, FALLBACK_EXPORT_STEM, JSON_MIME};

use serde_json::{Map as JsonMap, Value as JsonValue};

use super::json_ops::{field_text, parse_object, to_pretty_text};
use super::reconcile::reconcile_school;

pub const FIELD_ID: &str = "id";
pub const FIELD_TITLE: &str = "title";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_DEPARTMENT: &str = "department";
pub const FIELD_LEVEL: &str = "level";
pub const FIELD_SCHOOL: &str = "school";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    Invalid { reason: String },
    Valid,
    IdRepaired { id: String },
}

/// Open metadata form. Owned by the editor; at most one exists at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    meta: Metadata,
}

impl EditSession {
    pub fn meta(&self) -> &Metadata {
        &self.meta
    }

    pub fn set_id(&mut self, v: impl Into<String>) {
        self.meta.id = v.into();
    }

    pub fn set_title(&mut self, v: impl Into<String>) {
        self.meta.title = v.into();
    }

    pub fn set_description(&mut self, v: impl Into<String>) {
        self.meta.description = v.into();
    }

    pub fn set_department(&mut self, v: impl Into<String>) {
        self.meta.department = v.into();
    }

    pub fn set_level(&mut self, v: impl Into<String>) {
        self.meta.level = v.into();
    }

    /// The only setter that reconciles.
    pub fn set_school(&mut self, v: impl Into<String>, catalog: &Catalog) -> Reconciliation {
        self.meta.school = v.into();
        reconcile_school(&mut self.meta, catalog)
    }

    pub fn department_choices<'a>(&self, catalog: &'a Catalog) -> &'a [String] {
        catalog.departments(&self.meta.school)
    }

    pub fn level_choices<'a>(&self, catalog: &'a Catalog) -> &'a [String] {
        catalog.levels(&self.meta.school)
    }

    /// Id the document will carry once this session is saved.
    pub fn preview_id(&self) -> String {
        derive_id(
            &self.meta.title,
            &self.meta.department,
            &self.meta.level,
            &self.meta.school,
        )
    }
}

/// Raw document text plus its validity, and the optional open edit form.
#[derive(Debug, Clone)]
pub struct DocumentEditor {
    text: String,
    validity: Validity,
    session: Option<EditSession>,
}

impl Default for DocumentEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentEditor {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            validity: Validity::Unchecked,
            session: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }

    pub fn is_valid(&self) -> bool {
        self.validity == Validity::Valid
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut EditSession> {
        self.session.as_mut()
    }

    pub fn is_editing(&self) -> bool {
        self.session.is_some()
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // --------------------------------------------------
    // text
    // --------------------------------------------------

    pub fn edit_text(&mut self, new_text: impl Into<String>) {
        self.text = new_text.into();
        self.validity = Validity::Unchecked;
    }

    /// For text widgets that edit the buffer in place. Call
    /// [`DocumentEditor::mark_text_edited`] when the widget reports a change.
    pub fn text_buffer_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn mark_text_edited(&mut self) {
        self.validity = Validity::Unchecked;
    }

    // --------------------------------------------------
    // verify
    // --------------------------------------------------

    pub fn verify(&mut self) -> VerifyOutcome {
        let mut obj = match parse_object(&self.text) {
            Ok(obj) => obj,
            Err(e) => {
                self.validity = Validity::Invalid;
                return VerifyOutcome::Invalid {
                    reason: e.to_string(),
                };
            }
        };

        let new_id = canonical_id_of(&obj);
        let current = obj.get(FIELD_ID).and_then(JsonValue::as_str);

        if new_id.is_empty() || current == Some(new_id.as_str()) {
            self.validity = Validity::Valid;
            return VerifyOutcome::Valid;
        }

        obj.insert(FIELD_ID.to_string(), JsonValue::String(new_id.clone()));

        match to_pretty_text(&obj) {
            Ok(pretty) => {
                self.text = pretty;
                self.validity = Validity::Valid;
                VerifyOutcome::IdRepaired { id: new_id }
            }
            Err(e) => {
                self.validity = Validity::Invalid;
                VerifyOutcome::Invalid {
                    reason: e.to_string(),
                }
            }
        }
    }

    // --------------------------------------------------
    // edit session
    // --------------------------------------------------

    /// Opens the metadata form seeded from the current text. Silent no-op when
    /// the text does not parse or a session is already open. Returns whether a
    /// session is open afterwards.
    pub fn open_edit(&mut self, catalog: &Catalog) -> bool {
        if self.session.is_some() {
            return true;
        }

        let Ok(obj) = parse_object(&self.text) else {
            return false;
        };

        let school = match obj.get(FIELD_SCHOOL) {
            None | Some(JsonValue::Null) => catalog.first_school().unwrap_or_default().to_string(),
            Some(_) => field_text(&obj, FIELD_SCHOOL),
        };

        let mut meta = Metadata {
            id: field_text(&obj, FIELD_ID),
            title: field_text(&obj, FIELD_TITLE),
            description: field_text(&obj, FIELD_DESCRIPTION),
            department: field_text(&obj, FIELD_DEPARTMENT),
            level: field_text(&obj, FIELD_LEVEL),
            school,
        };

        // initial seed counts as a school assignment
        reconcile_school(&mut meta, catalog);

        self.session = Some(EditSession { meta });
        true
    }

    pub fn cancel_edit(&mut self) {
        self.session = None;
    }

    /// Merges the open form over the current document and closes it. Returns
    /// the id written, or `None` when no form was open.
    pub fn save_edit(&mut self) -> Option<String> {
        let session = self.session.take()?;
        let meta = session.meta;

        let mut obj = parse_object(&self.text).unwrap_or_default();

        let id = derive_id(&meta.title, &meta.department, &meta.level, &meta.school);

        for (key, value) in [
            (FIELD_ID, id.clone()),
            (FIELD_TITLE, meta.title),
            (FIELD_DESCRIPTION, meta.description),
            (FIELD_DEPARTMENT, meta.department),
            (FIELD_LEVEL, meta.level),
            (FIELD_SCHOOL, meta.school),
        ] {
            obj.insert(key.to_string(), JsonValue::String(value));
        }

        match to_pretty_text(&obj) {
            Ok(pretty) => {
                self.text = pretty;
                self.validity = Validity::Valid;
                Some(id)
            }
            Err(_) => {
                // keep the form open so nothing typed is lost
                self.session = Some(EditSession { meta: metadata_from(&obj) });
                None
            }
        }
    }

    // --------------------------------------------------
    // download
    // --------------------------------------------------

    /// Export payload for the current text, or `None` unless verified.
    pub fn download(&self) -> Option<ExportFile> {
        if self.validity != Validity::Valid {
            return None;
        }

        let obj = parse_object(&self.text).ok()?;

        Some(ExportFile {
            file_name: export_file_name(&obj),
            mime: JSON_MIME,
            contents: self.text.clone(),
        })
    }
}

fn canonical_id_of(obj: &JsonMap<String, JsonValue>) -> String {
    derive_id(
        &field_text(obj, FIELD_TITLE),
        &field_text(obj, FIELD_DEPARTMENT),
        &field_text(obj, FIELD_LEVEL),
        &field_text(obj, FIELD_SCHOOL),
    )
}

fn metadata_from(obj: &JsonMap<String, JsonValue>) -> Metadata {
    Metadata {
        id: field_text(obj, FIELD_ID),
        title: field_text(obj, FIELD_TITLE),
        description: field_text(obj, FIELD_DESCRIPTION),
        department: field_text(obj, FIELD_DEPARTMENT),
        level: field_text(obj, FIELD_LEVEL),
        school: field_text(obj, FIELD_SCHOOL),
    }
}

/// `<id>.json`, or `data.json` when the id is absent, not a scalar, empty or
/// unusable as a file name. Numeric and boolean ids are used as text.
pub fn export_file_name(obj: &JsonMap<String, JsonValue>) -> String {
    let stem = match obj.get(FIELD_ID) {
        Some(JsonValue::String(_) | JsonValue::Number(_) | JsonValue::Bool(_)) => {
            Some(field_text(obj, FIELD_ID))
        }
        _ => None,
    }
    .filter(|id| is_safe_file_stem(id))
    .unwrap_or_else(|| FALLBACK_EXPORT_STEM.to_string());

    format!("{stem}.json")
}

fn is_safe_file_stem(s: &str) -> bool {
    !s.trim().is_empty()
        && s != "."
        && s != ".."
        && !s.contains(['/', '\\'])
        && !s.chars().any(char::is_control)
}

// ======================================================
// Unit Tests
// ======================================================
