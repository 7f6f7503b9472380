//! Component dimension handling for quotes: parsing freeform dimension
//! input, normalizing legacy size shapes into the canonical component shape,
//! and rendering size strings for the quote table and PDF export.

pub mod diagnostics;
pub mod dimension;
pub mod format;
pub mod input;
pub mod migrate;
pub mod normalize;
pub mod numeric;
pub mod stringify;
pub mod value_parser;

pub use diagnostics::{
    sink_for, Diagnostic, DiagnosticKind, DiagnosticSink, NoopSink, Stage, TracingSink,
};
pub use dimension::{Dimension, DimensionSlot, NormalizedDimensions};
pub use format::{format_size, format_size_with};
pub use input::apply_dimension_input;
pub use migrate::{migrate_materials, normalize_all, Migration};
pub use normalize::{normalize_component, normalize_component_with, resolve_dimensions};
pub use stringify::{is_unhelpful, stringify_value};
pub use value_parser::parse_dimension_value;
