//! Catalog materials and the JSON file boundary they are loaded from.
//!
//! Materials are legacy documents written by several generations of the
//! quoting app, so only `components` is modelled. Every other field is kept
//! verbatim and round-trips unchanged.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::MaterialsError;

/// A catalog material with its component breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Component records in whatever shape they were stored. `None` when the
    /// document has no `components` key at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Value>>,
    /// All remaining fields (`id`, `name`, `unit`, `unitCost`, ...).
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Material {
    /// Returns the material's display name, if it has a string `name`.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    /// Returns the components, or an empty slice when there are none.
    #[must_use]
    pub fn components(&self) -> &[Value] {
        self.components.as_deref().unwrap_or_default()
    }
}

/// Load the materials collection from a JSON file holding an array of materials.
///
/// # Errors
///
/// Returns [`MaterialsError::Io`] if the file cannot be read and
/// [`MaterialsError::Parse`] if it is not a JSON array of objects.
pub fn load_materials(path: &Path) -> Result<Vec<Material>, MaterialsError> {
    let content = std::fs::read_to_string(path).map_err(|e| MaterialsError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| MaterialsError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Write the materials collection back to `path` as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`MaterialsError::Serialize`] if serialization fails and
/// [`MaterialsError::Io`] if the file cannot be written.
pub fn save_materials(path: &Path, materials: &[Material]) -> Result<(), MaterialsError> {
    let mut body =
        serde_json::to_string_pretty(materials).map_err(|e| MaterialsError::Serialize {
            path: path.display().to_string(),
            source: e,
        })?;
    body.push('\n');

    std::fs::write(path, body).map_err(|e| MaterialsError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
#[path = "materials_test.rs"]
mod tests;
