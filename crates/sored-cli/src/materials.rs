//! Materials-file commands: bulk normalization with write-back, and the
//! per-component size report.

use std::path::Path;

use serde_json::Value;
use sored_core::{load_materials, save_materials, Material, MaterialsError};
use sored_dimensions::{
    format_size_with, migrate_materials, normalize_component_with, DiagnosticSink,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NormalizeOutcome {
    pub(crate) total_components: usize,
    pub(crate) changed_components: usize,
    pub(crate) written: bool,
}

impl NormalizeOutcome {
    pub(crate) fn summary(&self, path: &Path) -> String {
        let action = if self.written {
            "written back"
        } else if self.changed_components > 0 {
            "not written (pass --write or set SORED_WRITE_BACK)"
        } else {
            "already canonical"
        };
        format!(
            "{}: {} of {} components changed, {action}",
            path.display(),
            self.changed_components,
            self.total_components
        )
    }
}

/// Loads, normalizes, and (when `write_back` is set and something changed)
/// persists the materials file at `path`.
pub(crate) fn normalize_file(
    path: &Path,
    write_back: bool,
    sink: &dyn DiagnosticSink,
) -> Result<NormalizeOutcome, MaterialsError> {
    let materials = load_materials(path)?;
    let migration = migrate_materials(materials, sink);

    let written = write_back && migration.needs_write_back();
    if written {
        save_materials(path, &migration.materials)?;
        tracing::info!(
            path = %path.display(),
            changed = migration.changed_components,
            "wrote normalized materials"
        );
    }

    Ok(NormalizeOutcome {
        total_components: migration.total_components,
        changed_components: migration.changed_components,
        written,
    })
}

/// One `<material> / <component>: <size>` line per component.
pub(crate) fn size_report(materials: &[Material], sink: &dyn DiagnosticSink) -> Vec<String> {
    let mut lines = Vec::new();
    for (material_idx, material) in materials.iter().enumerate() {
        let material_name = material
            .name()
            .map_or_else(|| format!("material #{}", material_idx + 1), str::to_string);

        for (component_idx, component) in material.components().iter().enumerate() {
            let normalized = normalize_component_with(component, sink);
            let component_name = normalized
                .get("name")
                .and_then(Value::as_str)
                .map_or_else(|| format!("component #{}", component_idx + 1), str::to_string);
            lines.push(format!(
                "{material_name} / {component_name}: {}",
                format_size_with(&normalized, sink)
            ));
        }
    }
    lines
}
