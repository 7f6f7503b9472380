//! Developer-facing diagnostics for size data that cannot be rendered.
//!
//! Sinks are fire-and-forget: they return nothing, so whatever they do can
//! never change what the normalizer or formatter returns.

use serde_json::Value;
use sored_core::AppConfig;

/// Which operation produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Normalize,
    Format,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Normalize => write!(f, "normalize"),
            Stage::Format => write!(f, "format"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A `sizeValue` string looked like JSON but did not parse.
    UnparseableJson,
    /// Size data was present but no helpful text could be produced from it.
    UnrenderableSize,
}

impl DiagnosticKind {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            DiagnosticKind::UnparseableJson => "sizeValue looks like JSON but failed to parse",
            DiagnosticKind::UnrenderableSize => "size data could not be rendered as text",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Diagnostic<'a> {
    pub stage: Stage,
    pub kind: DiagnosticKind,
    /// The offending value, exactly as received.
    pub raw: &'a Value,
}

pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: &Diagnostic<'_>);

    /// Whether reports reach anything. Callers may skip building context
    /// for a sink that discards everything.
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Discards every diagnostic. The production default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn report(&self, _diagnostic: &Diagnostic<'_>) {}

    fn is_enabled(&self) -> bool {
        false
    }
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic<'_>) {
        match diagnostic.kind {
            DiagnosticKind::UnparseableJson => tracing::debug!(
                stage = %diagnostic.stage,
                raw = %diagnostic.raw,
                "{}",
                diagnostic.kind.message()
            ),
            DiagnosticKind::UnrenderableSize => tracing::warn!(
                stage = %diagnostic.stage,
                raw = %diagnostic.raw,
                "{}",
                diagnostic.kind.message()
            ),
        }
    }
}

/// Picks the sink configured for this process.
#[must_use]
pub fn sink_for(config: &AppConfig) -> Box<dyn DiagnosticSink> {
    if config.size_diagnostics_enabled() {
        Box::new(TracingSink)
    } else {
        Box::new(NoopSink)
    }
}
