//! Bulk normalization of a materials collection.
//!
//! Callers load the collection, migrate it, and persist it back only when
//! [`Migration::changed_components`] is non-zero. Because normalization is
//! idempotent, running this on every load is safe and converges after the
//! first write.

use sored_core::Material;

use crate::diagnostics::{DiagnosticSink, NoopSink};
use crate::normalize::normalize_component_with;

/// Result of [`migrate_materials`].
#[derive(Debug, Clone, PartialEq)]
pub struct Migration {
    pub materials: Vec<Material>,
    /// Components whose record differs from what was loaded.
    pub changed_components: usize,
    pub total_components: usize,
}

impl Migration {
    /// Whether the collection needs to be written back.
    #[must_use]
    pub fn needs_write_back(&self) -> bool {
        self.changed_components > 0
    }
}

/// Normalizes every component of every material. Fields outside
/// `components` are left untouched.
#[must_use]
pub fn normalize_all(materials: &[Material]) -> Vec<Material> {
    materials
        .iter()
        .map(|material| normalize_material(material, &NoopSink))
        .collect()
}

/// Normalizes `materials` and counts the components that changed shape.
#[must_use]
pub fn migrate_materials(materials: Vec<Material>, sink: &dyn DiagnosticSink) -> Migration {
    let mut changed_components = 0;
    let mut total_components = 0;

    let migrated = materials
        .into_iter()
        .map(|material| {
            let normalized = normalize_material(&material, sink);
            for (before, after) in material.components().iter().zip(normalized.components()) {
                total_components += 1;
                if before != after {
                    changed_components += 1;
                }
            }
            normalized
        })
        .collect();

    tracing::debug!(
        total_components,
        changed_components,
        "materials normalization finished"
    );

    Migration {
        materials: migrated,
        changed_components,
        total_components,
    }
}

fn normalize_material(material: &Material, sink: &dyn DiagnosticSink) -> Material {
    Material {
        components: material.components.as_ref().map(|components| {
            components
                .iter()
                .map(|component| normalize_component_with(component, sink))
                .collect()
        }),
        fields: material.fields.clone(),
    }
}
