// src/catalog.rs

use crate::error::{AppError, AppResult};
use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};
use std::fs;
use std::path::Path;

const CATALOG_MAX_BYTES: u64 = 1024 * 1024;

/// Allowed vocabularies for one school.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SchoolInfo {
    pub departments: Vec<String>,
    pub levels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolEntry {
    pub name: String,
    pub info: SchoolInfo,
}

/// Read-only school catalog. Order is the order of the source document and
/// the first school is the default for documents that name none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    schools: Vec<SchoolEntry>,
}

impl Catalog {
    pub fn builtin() -> Self {
        fn entry(name: &str, departments: &[&str], levels: &[&str]) -> SchoolEntry {
            SchoolEntry {
                name: name.to_string(),
                info: SchoolInfo {
                    departments: departments.iter().map(|s| s.to_string()).collect(),
                    levels: levels.iter().map(|s| s.to_string()).collect(),
                },
            }
        }

        Self {
            schools: vec![
                entry("EM-LYON", &["BBA", "MSc", "MBA"], &["1A", "2A", "3A"]),
                entry(
                    "KEDGE",
                    &["BBA", "Programme Grande Ecole"],
                    &["L1", "L2", "M1", "M2"],
                ),
            ],
        }
    }

    pub fn from_entries(schools: Vec<SchoolEntry>) -> AppResult<Self> {
        if schools.is_empty() {
            return Err(AppError::CatalogEmpty);
        }

        for (i, s) in schools.iter().enumerate() {
            if s.name.trim().is_empty() {
                return Err(AppError::CatalogInvalid(format!("school #{i} has no name")));
            }
            if schools[..i].iter().any(|p| p.name == s.name) {
                return Err(AppError::CatalogInvalid(format!(
                    "duplicate school: {}",
                    s.name
                )));
            }
            if s.info.departments.is_empty() {
                return Err(AppError::CatalogInvalid(format!(
                    "school {} lists no departments",
                    s.name
                )));
            }
            if s.info.levels.is_empty() {
                return Err(AppError::CatalogInvalid(format!(
                    "school {} lists no levels",
                    s.name
                )));
            }
        }

        Ok(Self { schools })
    }

    /// Parses `{ "<school>": { departments: [..], levels: [..] }, .. }` (JSON5).
    pub fn load_from_str(text: &str) -> AppResult<Self> {
        let raw: Map<String, JsonValue> =
            json5::from_str(text).map_err(|e| AppError::CatalogInvalid(e.to_string()))?;

        let mut schools = Vec::with_capacity(raw.len());
        for (name, v) in raw {
            let info: SchoolInfo = serde_json::from_value(v)
                .map_err(|e| AppError::CatalogInvalid(format!("{name}: {e}")))?;
            schools.push(SchoolEntry { name, info });
        }

        Self::from_entries(schools)
    }

    pub fn load_from_path(path: &Path) -> AppResult<Self> {
        let meta = fs::metadata(path).map_err(|e| AppError::CatalogReadFailed(e.to_string()))?;

        let bytes = meta.len();
        if bytes > CATALOG_MAX_BYTES {
            return Err(AppError::CatalogTooLarge {
                bytes,
                max: CATALOG_MAX_BYTES,
            });
        }

        let text =
            fs::read_to_string(path).map_err(|e| AppError::CatalogReadFailed(e.to_string()))?;

        Self::load_from_str(&text)
    }

    pub fn get(&self, school: &str) -> Option<&SchoolInfo> {
        self.schools
            .iter()
            .find(|s| s.name == school)
            .map(|s| &s.info)
    }

    pub fn first_school(&self) -> Option<&str> {
        self.schools.first().map(|s| s.name.as_str())
    }

    pub fn school_names(&self) -> impl Iterator<Item = &str> {
        self.schools.iter().map(|s| s.name.as_str())
    }

    pub fn departments(&self, school: &str) -> &[String] {
        self.get(school)
            .map(|i| i.departments.as_slice())
            .unwrap_or(&[])
    }

    pub fn levels(&self, school: &str) -> &[String] {
        self.get(school).map(|i| i.levels.as_slice()).unwrap_or(&[])
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// ======================================================
// Unit Tests
// ======================================================
