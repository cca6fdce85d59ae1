// src/command/reconcile.rs

use crate::catalog::Catalog;
use crate::types::{Metadata, Reconciliation};

/// Pulls `department` and `level` back into the vocabulary of `meta.school`.
///
/// Unknown schools are left alone. Must only be called after `school` was
/// assigned (or seeded), never after free-text edits.
pub fn reconcile_school(meta: &mut Metadata, catalog: &Catalog) -> Reconciliation {
    let Some(info) = catalog.get(&meta.school) else {
        return Reconciliation::default();
    };

    let mut out = Reconciliation::default();

    if !info.departments.iter().any(|d| *d == meta.department) {
        if let Some(first) = info.departments.first() {
            meta.department = first.clone();
            out.department_corrected = true;
        }
    }

    if !info.levels.iter().any(|l| *l == meta.level) {
        if let Some(first) = info.levels.first() {
            meta.level = first.clone();
            out.level_corrected = true;
        }
    }

    out
}

// ======================================================
// Unit Tests
// ======================================================
