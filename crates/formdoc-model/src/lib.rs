//! formdoc-model - Document object model
//!
//! This crate provides the node types the formdoc layout compiler emits:
//! paragraphs made of styled runs, and tables made of rows and cells.
//! The model is independent of any file format; an encoder turns it into
//! an office document.

pub mod block;
pub mod document;
pub mod inline;

pub use block::{
    Alignment, Border, BorderStyle, CellBorders, Indent, Node, Paragraph, Spacing, Table,
    TableCell, TableRow, VerticalAlign,
};
pub use document::{DocumentMeta, DocumentModel};
pub use inline::{Color, Run};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
