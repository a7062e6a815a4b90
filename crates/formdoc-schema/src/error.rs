//! Error types for template loading and validation

use thiserror::Error;

/// Result type for schema operations
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Structural problems that make a template unrenderable
///
/// `location` fields use a path-like notation such as `sections[2]` or
/// `variants[regional].sections[0].entries[1]`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A definition or variant without sections
    #[error("{location}: at least one section is required")]
    EmptySections { location: String },

    /// Checklist columns and widths differ in length
    #[error("{location}: {columns} columns but {widths} column widths")]
    ColumnCountMismatch {
        location: String,
        columns: usize,
        widths: usize,
    },

    /// A column width that is not a whole-number percentage
    #[error("{location}: column width {value:?} is not a whole-number percentage")]
    InvalidColumnWidth { location: String, value: String },

    /// Column widths that do not add up to exactly 100
    #[error("{location}: column widths sum to {sum}, expected exactly 100")]
    ColumnWidthSum { location: String, sum: u64 },

    /// A signatory row with nothing to fill in
    #[error("{location}: signature entry {label:?} has no fields")]
    EmptySignatureFields { location: String, label: String },

    /// A text area asking for more ruled lines than a form can hold
    #[error("{location}: text area has {lines} lines, at most {max} allowed")]
    TooManyLines { location: String, lines: u32, max: u32 },

    /// A section tagged with a kind this engine does not know
    #[error("{location}: unknown section kind {kind:?}")]
    UnknownSectionKind { location: String, kind: String },

    /// A section object without a `type` tag
    #[error("{location}: section is missing its \"type\" tag")]
    MissingSectionKind { location: String },

    /// Two variants sharing one name
    #[error("duplicate variant name {0:?}")]
    DuplicateVariant(String),

    /// Malformed JSON/TOML or a field of the wrong shape
    #[error("Template parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        SchemaError::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for SchemaError {
    fn from(err: toml::de::Error) -> Self {
        SchemaError::Parse(err.to_string())
    }
}
