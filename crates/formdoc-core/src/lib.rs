//! formdoc-core - Compliance form layout compiler
//!
//! Compiles a `formdoc_schema::TemplateDefinition` into a
//! `formdoc_model::DocumentModel`: headings, labelled fill-in fields,
//! checklist tables, ruled writing areas and signature blocks, laid out
//! from data alone.
//!
//! # Example
//!
//! ```
//! use formdoc_core::{preview, render};
//! use formdoc_schema::{RenderContext, TemplateDefinition};
//!
//! let definition = TemplateDefinition::from_json_str(r#"{
//!     "version": "1.0",
//!     "type": "audit-form",
//!     "title": "Sharps Audit",
//!     "sections": [
//!         { "type": "description", "content": "Check every clinical room." },
//!         { "type": "signatureBlock", "entries": [
//!             { "label": "Auditor", "fields": ["Name", "Date"] }
//!         ]}
//!     ]
//! }"#)?;
//!
//! let document = render(&definition, &RenderContext::new())?;
//! assert_eq!(document.len(), 4);
//! assert!(preview(&document).contains("Sharps Audit"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod compiler;
pub mod error;
pub mod palette;
pub mod preview;
pub mod settings;

// Re-export main types and functions
pub use compiler::{render, Compiler};
pub use error::{RenderError, Result};
pub use palette::{Palette, BULLET_GLYPH};
pub use preview::{preview, PreviewConfig, PreviewRenderer};
pub use settings::{FooterSettings, LayoutSettings, RenderSettings};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
