//! Header-field sections
//!
//! Fields are packed into rows of a two-column table. A full-width field
//! always starts a new row and spans both columns. Half-width fields are
//! paired in the order given; a half field left without a partner gets an
//! empty, borderless placeholder cell so every row adds up to the full
//! width.

use formdoc_model::{CellBorders, Node, Paragraph, Table, TableCell, TableRow, VerticalAlign};
use formdoc_schema::{FieldWidth, HeaderField, HeaderFieldsSection, RenderContext};

use super::blocks::{body_run, label_run};
use crate::palette::Palette;

const FULL_WIDTH_PCT: u32 = 100;
const HALF_WIDTH_PCT: u32 = 50;

/// One display row of header fields
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum PackedRow<'a> {
    /// A full-width field alone on its row
    Full(&'a HeaderField),
    /// Two half fields, or one half field and a placeholder
    Pair(&'a HeaderField, Option<&'a HeaderField>),
}

/// Greedy row packing in field order
pub(crate) fn pack_rows(fields: &[HeaderField]) -> Vec<PackedRow<'_>> {
    let mut rows = Vec::new();
    let mut pending: Option<&HeaderField> = None;

    for field in fields {
        match field.width {
            FieldWidth::Full => {
                if let Some(half) = pending.take() {
                    rows.push(PackedRow::Pair(half, None));
                }
                rows.push(PackedRow::Full(field));
            }
            FieldWidth::Half => match pending.take() {
                Some(first) => rows.push(PackedRow::Pair(first, Some(field))),
                None => pending = Some(field),
            },
        }
    }

    if let Some(half) = pending {
        rows.push(PackedRow::Pair(half, None));
    }

    rows
}

pub(crate) fn render(
    section: &HeaderFieldsSection,
    palette: &Palette,
    context: &RenderContext,
) -> Vec<Node> {
    if section.fields.is_empty() {
        return Vec::new();
    }

    let rows = pack_rows(&section.fields)
        .into_iter()
        .map(|packed| match packed {
            PackedRow::Full(field) => TableRow::new(vec![field_cell(
                field,
                FULL_WIDTH_PCT,
                palette,
                context,
            )
            .with_colspan(2)]),
            PackedRow::Pair(first, second) => {
                let second = match second {
                    Some(field) => field_cell(field, HALF_WIDTH_PCT, palette, context),
                    None => TableCell::new(HALF_WIDTH_PCT, Paragraph::empty())
                        .with_borders(CellBorders::none()),
                };
                TableRow::new(vec![
                    field_cell(first, HALF_WIDTH_PCT, palette, context),
                    second,
                ])
            }
        })
        .collect();

    vec![Node::Table(Table::new(rows))]
}

/// `label: value` with a bottom rule as the fill-in line
fn field_cell(
    field: &HeaderField,
    width_pct: u32,
    palette: &Palette,
    context: &RenderContext,
) -> TableCell {
    let value = field
        .autofill
        .as_deref()
        .map(|key| context.resolve(key))
        .unwrap_or("");

    let paragraph = Paragraph::new(vec![
        label_run(&format!("{}: ", field.label), palette),
        body_run(value, palette),
    ]);

    TableCell::new(width_pct, paragraph)
        .with_borders(CellBorders::bottom_only(palette.rule_border()))
        .with_v_align(VerticalAlign::Bottom)
}
