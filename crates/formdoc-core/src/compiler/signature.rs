//! Signature blocks
//!
//! One table row per signatory. The label cell takes 40% of the row and
//! the field prompts share the remaining 60% evenly (`floor(60 / n)` each).
//! Rows have a fixed minimum height to leave room for a signature.

use formdoc_model::{CellBorders, Node, Paragraph, Table, TableCell, TableRow, VerticalAlign};
use formdoc_schema::{SignatureBlockSection, SignatureEntry};

use super::blocks::{label_run, sublabel_run};
use crate::palette::Palette;
use crate::settings::LayoutSettings;

pub(crate) const LABEL_WIDTH_PCT: u32 = 40;
pub(crate) const FIELDS_WIDTH_PCT: u32 = 60;

pub(crate) fn render(
    section: &SignatureBlockSection,
    palette: &Palette,
    layout: &LayoutSettings,
) -> Vec<Node> {
    if section.entries.is_empty() {
        return Vec::new();
    }

    let rows = section
        .entries
        .iter()
        .map(|entry| signature_row(entry, palette, layout))
        .collect();

    vec![Node::Table(Table::new(rows))]
}

fn signature_row(entry: &SignatureEntry, palette: &Palette, layout: &LayoutSettings) -> TableRow {
    let mut label = TableCell::new(
        LABEL_WIDTH_PCT,
        Paragraph::new(vec![label_run(&entry.label, palette)]),
    )
    .with_v_align(VerticalAlign::Bottom);
    if let Some(sublabel) = &entry.sublabel {
        label
            .content
            .push(Paragraph::new(vec![sublabel_run(sublabel, palette)]));
    }

    let mut cells = Vec::with_capacity(entry.fields.len() + 1);
    cells.push(label);

    // Validation guarantees at least one field.
    let field_width = FIELDS_WIDTH_PCT / entry.fields.len().max(1) as u32;
    for field in &entry.fields {
        cells.push(
            TableCell::new(
                field_width,
                Paragraph::new(vec![sublabel_run(&format!("{}:", field), palette)]),
            )
            .with_borders(CellBorders::bottom_only(palette.rule_border()))
            .with_v_align(VerticalAlign::Bottom),
        );
    }

    TableRow {
        cells,
        is_header: false,
        min_height: Some(layout.signature_row_height),
    }
}
