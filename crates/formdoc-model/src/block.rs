//! Block-level elements for document structure
//!
//! This module defines the two top-level node kinds, paragraphs and
//! tables, together with the geometry attached to them: spacing, indents,
//! borders, cell widths and shading.
//!
//! Lengths are in twips (1/20 pt) unless stated otherwise, matching what
//! WordprocessingML encoders expect. Cell widths are percentages of the
//! table width.

use serde::{Deserialize, Serialize};

use crate::inline::{Color, Run};

/// Top-level document node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A paragraph of styled runs
    Paragraph(Paragraph),
    /// A table
    Table(Table),
}

impl Node {
    /// Borrow the paragraph, if this node is one
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Node::Paragraph(p) => Some(p),
            Node::Table(_) => None,
        }
    }

    /// Borrow the table, if this node is one
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Node::Table(t) => Some(t),
            Node::Paragraph(_) => None,
        }
    }

    /// Concatenated text of the node; table cells are joined with tabs
    /// and rows with newlines
    pub fn text(&self) -> String {
        match self {
            Node::Paragraph(p) => p.text(),
            Node::Table(t) => t
                .rows
                .iter()
                .map(|row| {
                    row.cells
                        .iter()
                        .map(TableCell::text)
                        .collect::<Vec<_>>()
                        .join("\t")
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Horizontal alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

/// Vertical alignment inside a table cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerticalAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Space before and after a paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Spacing {
    pub before: u32,
    pub after: u32,
}

impl Spacing {
    pub const fn new(before: u32, after: u32) -> Self {
        Self { before, after }
    }
}

/// Paragraph indentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Indent {
    /// Left indent
    pub left: u32,
    /// Hanging indent of the first line (used for bullet glyphs)
    pub hanging: u32,
}

/// Border line style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorderStyle {
    Single,
    /// An explicitly cleared edge
    None,
}

/// A single border edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Border {
    pub style: BorderStyle,
    /// Line width in eighths of a point
    pub size: u32,
    pub color: Color,
}

impl Border {
    pub const fn single(size: u32, color: Color) -> Self {
        Self {
            style: BorderStyle::Single,
            size,
            color,
        }
    }

    /// A cleared edge, overriding any table-level grid
    pub const fn none() -> Self {
        Self {
            style: BorderStyle::None,
            size: 0,
            color: Color::rgb(0xFF, 0xFF, 0xFF),
        }
    }
}

/// A paragraph block
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Styled runs, in order
    pub runs: Vec<Run>,
    pub alignment: Alignment,
    pub spacing: Spacing,
    pub indent: Indent,
    /// Rule drawn under the paragraph (fill-in and writing lines)
    pub bottom_border: Option<Border>,
}

impl Paragraph {
    /// Create a paragraph from runs
    pub fn new(runs: Vec<Run>) -> Self {
        Self {
            runs,
            ..Default::default()
        }
    }

    /// Create an empty paragraph
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_bottom_border(mut self, border: Border) -> Self {
        self.bottom_border = Some(border);
        self
    }

    /// Concatenated run text
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Whether the paragraph has no visible text
    pub fn is_blank(&self) -> bool {
        self.runs.iter().all(|r| r.text.is_empty())
    }

    /// Whether this paragraph is a list item: indented, with a leading
    /// run holding only the given bullet glyph
    pub fn is_bullet(&self, glyph: &str) -> bool {
        self.indent.left > 0
            && self
                .runs
                .first()
                .is_some_and(|r| r.text.trim_end() == glyph)
    }
}

/// A table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Table rows
    pub rows: Vec<TableRow>,
    /// Table width as a percentage of the text column
    pub width_pct: u32,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            width_pct: 100,
        }
    }
}

impl Table {
    pub fn new(rows: Vec<TableRow>) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    /// Rows after the leading header rows
    pub fn body_rows(&self) -> impl Iterator<Item = &TableRow> {
        self.rows.iter().skip_while(|r| r.is_header)
    }
}

/// A table row
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in this row
    pub cells: Vec<TableCell>,
    /// Whether this is a header row (repeated on page breaks)
    pub is_header: bool,
    /// Minimum row height
    pub min_height: Option<u32>,
}

impl TableRow {
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            ..Default::default()
        }
    }

    /// Sum of cell width percentages
    pub fn width_sum(&self) -> u32 {
        self.cells.iter().map(|c| c.width_pct).sum()
    }
}

/// Per-edge cell borders; `None` leaves the edge undrawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CellBorders {
    pub top: Option<Border>,
    pub bottom: Option<Border>,
    pub left: Option<Border>,
    pub right: Option<Border>,
}

impl CellBorders {
    /// The same border on all four edges
    pub fn all(border: Border) -> Self {
        Self {
            top: Some(border),
            bottom: Some(border),
            left: Some(border),
            right: Some(border),
        }
    }

    /// All four edges explicitly cleared
    pub fn none() -> Self {
        Self::all(Border::none())
    }

    /// Only a bottom rule
    pub fn bottom_only(border: Border) -> Self {
        Self {
            bottom: Some(border),
            ..Default::default()
        }
    }
}

/// A table cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// Paragraphs in this cell
    pub content: Vec<Paragraph>,
    /// Width as a percentage of the table
    pub width_pct: u32,
    /// Number of grid columns this cell spans
    pub colspan: u32,
    pub borders: CellBorders,
    /// Background fill
    pub shading: Option<Color>,
    pub v_align: VerticalAlign,
}

impl TableCell {
    /// A cell of the given width holding one paragraph
    pub fn new(width_pct: u32, paragraph: Paragraph) -> Self {
        Self {
            content: vec![paragraph],
            width_pct,
            colspan: 1,
            borders: CellBorders::default(),
            shading: None,
            v_align: VerticalAlign::default(),
        }
    }

    pub fn with_colspan(mut self, colspan: u32) -> Self {
        self.colspan = colspan;
        self
    }

    pub fn with_borders(mut self, borders: CellBorders) -> Self {
        self.borders = borders;
        self
    }

    pub fn with_shading(mut self, color: Color) -> Self {
        self.shading = Some(color);
        self
    }

    pub fn with_v_align(mut self, v_align: VerticalAlign) -> Self {
        self.v_align = v_align;
        self
    }

    /// Text of all paragraphs, joined by newlines
    pub fn text(&self) -> String {
        self.content
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Horizontal alignment of the first paragraph
    pub fn alignment(&self) -> Alignment {
        self.content
            .first()
            .map(|p| p.alignment)
            .unwrap_or_default()
    }
}
