use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// JSON file holding the materials collection (an array of materials).
    pub materials_path: PathBuf,
    /// Persist the normalized collection when normalization changed its shape.
    pub write_back: bool,
    /// Explicit `SORED_SIZE_DIAGNOSTICS` override; `None` defers to `env`.
    pub size_diagnostics: Option<bool>,
}

impl AppConfig {
    /// Whether size-data diagnostics should be emitted.
    ///
    /// Unless overridden, diagnostics are on everywhere except production.
    #[must_use]
    pub fn size_diagnostics_enabled(&self) -> bool {
        self.size_diagnostics
            .unwrap_or(self.env != Environment::Production)
    }
}
