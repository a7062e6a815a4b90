//! formdoc-schema - Template definitions
//!
//! This crate defines the declarative description of a paper form that
//! the formdoc compiler renders: a `TemplateDefinition` holding ordered
//! `TemplateSection`s and optional named variants. It also loads
//! definitions from JSON or TOML and validates their structure.
//!
//! # Example
//!
//! ```
//! use formdoc_schema::{TemplateDefinition, TemplateSection};
//!
//! let json = r#"{
//!     "version": "1.0",
//!     "type": "checklist",
//!     "title": "Daily Opening Checks",
//!     "sections": [{
//!         "type": "checklistTable",
//!         "columns": ["Item", "Done", "Notes"],
//!         "columnWidths": ["50", "15", "35"],
//!         "items": ["Alarm disarmed", "Fridge temperature recorded"]
//!     }]
//! }"#;
//!
//! let definition = TemplateDefinition::from_json_str(json)?;
//! definition.validate()?;
//! assert!(matches!(definition.sections[0], TemplateSection::ChecklistTable(_)));
//! # Ok::<(), formdoc_schema::SchemaError>(())
//! ```

pub mod context;
pub mod definition;
pub mod error;
pub mod load;
pub mod section;
pub mod validate;

pub use context::{RenderContext, PRACTICE_NAME};
pub use definition::{FormView, TemplateDefinition, TemplateKind, TemplateVariant};
pub use error::{Result, SchemaError};
pub use section::{
    parse_percentage, ChecklistTableSection, DescriptionSection, FieldWidth, HeaderField,
    HeaderFieldsSection, SignatureBlockSection, SignatureEntry, TemplateSection, TextAreaSection,
    MAX_TEXT_AREA_LINES, SECTION_KINDS,
};
pub use validate::validate_sections;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
