//! Document root and metadata definitions
//!
//! This module defines the top-level document model returned by the
//! compiler: document metadata plus the flat, ordered list of nodes.

use serde::{Deserialize, Serialize};

use crate::block::Node;

/// A complete compiled document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentModel {
    /// Document metadata (title, template kind, schema version)
    pub metadata: DocumentMeta,
    /// Document content nodes, in output order
    pub nodes: Vec<Node>,
}

/// Document metadata
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Document title
    pub title: String,
    /// Optional subtitle
    pub subtitle: Option<String>,
    /// Schema version of the template the document was compiled from
    pub version: Option<String>,
    /// Template kind (e.g. `audit-form`)
    pub kind: Option<String>,
}

impl DocumentModel {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document with the given metadata
    pub fn with_metadata(metadata: DocumentMeta) -> Self {
        Self {
            metadata,
            nodes: Vec::new(),
        }
    }

    /// Add a node to the document
    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Append several nodes in order
    pub fn extend(&mut self, nodes: impl IntoIterator<Item = Node>) {
        self.nodes.extend(nodes);
    }

    /// Check if the document is empty (no nodes)
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the number of top-level nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }
}

impl<'a> IntoIterator for &'a DocumentModel {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl DocumentMeta {
    /// Create metadata with just a title
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}
