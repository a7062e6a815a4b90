//! Plain-text preview
//!
//! This module renders a `DocumentModel` as readable text for review
//! screens and snapshot tests. It is not an encoder: geometry is reduced
//! to what a reader needs to recognise the form.
//!
//! # Example
//!
//! ```
//! use formdoc_core::preview;
//! use formdoc_model::{DocumentModel, Node, Paragraph, Run};
//!
//! let mut doc = DocumentModel::new();
//! doc.push(Node::Paragraph(Paragraph::new(vec![Run::bold("Audit")])));
//!
//! assert_eq!(preview(&doc), "**Audit**");
//! ```

use formdoc_model::{DocumentModel, Node, Paragraph, Run, Table, TableCell};

/// Preview configuration
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    /// Width of the underscore line printed for ruled paragraphs
    pub rule_width: usize,
    /// Whether to mark shaded table rows
    pub mark_shading: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            rule_width: 40,
            mark_shading: true,
        }
    }
}

/// Plain-text preview renderer
pub struct PreviewRenderer {
    config: PreviewConfig,
    output: String,
}

impl Default for PreviewRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewRenderer {
    /// Create a renderer with default configuration
    pub fn new() -> Self {
        Self::with_config(PreviewConfig::default())
    }

    /// Create a renderer with custom configuration
    pub fn with_config(config: PreviewConfig) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    /// Render the whole document
    pub fn render(&mut self, doc: &DocumentModel) -> String {
        self.output.clear();

        for (i, node) in doc.nodes.iter().enumerate() {
            if i > 0 {
                self.output.push('\n');
            }
            match node {
                Node::Paragraph(p) => self.render_paragraph(p),
                Node::Table(t) => self.render_table(t),
            }
        }

        self.output.trim_end().to_string()
    }

    fn render_paragraph(&mut self, para: &Paragraph) {
        if para.is_blank() {
            if para.bottom_border.is_some() {
                self.output.push_str(&"_".repeat(self.config.rule_width));
            }
            self.output.push('\n');
            return;
        }

        if para.indent.left > 0 {
            self.output.push_str("  ");
        }
        let line = inline_text(&para.runs);
        self.output.push_str(&line);
        self.output.push('\n');
    }

    fn render_table(&mut self, table: &Table) {
        for row in &table.rows {
            let cells: Vec<String> = row.cells.iter().map(cell_text).collect();
            self.output.push_str(&format!("| {} |", cells.join(" | ")));

            let shaded = !row.is_header && row.cells.iter().any(|c| c.shading.is_some());
            if shaded && self.config.mark_shading {
                self.output.push_str(" ~");
            }
            self.output.push('\n');

            if row.is_header {
                let rule: Vec<String> = row
                    .cells
                    .iter()
                    .map(|c| "-".repeat(cell_text(c).chars().count().max(3)))
                    .collect();
                self.output.push_str(&format!("|-{}-|\n", rule.join("-|-")));
            }
        }
    }
}

/// Render a document with the default configuration
pub fn preview(doc: &DocumentModel) -> String {
    PreviewRenderer::new().render(doc)
}

fn inline_text(runs: &[Run]) -> String {
    runs.iter()
        .map(|run| {
            let text = run.text.replace('\t', " ");
            if text.trim().is_empty() {
                text
            } else if run.bold {
                format!("**{}**", text)
            } else if run.italic {
                format!("_{}_", text)
            } else {
                text
            }
        })
        .collect()
}

fn cell_text(cell: &TableCell) -> String {
    cell.content
        .iter()
        .map(|p| inline_text(&p.runs))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" / ")
}
