//! Checklist tables
//!
//! One header row (bold white text on the dark fill) followed by one row
//! per item. The item label fills column 0; every other cell is left
//! blank for the assessor. Body rows at odd indices get the stripe fill.

use formdoc_model::{Node, Paragraph, Table, TableCell, TableRow, VerticalAlign};
use formdoc_schema::ChecklistTableSection;

use super::blocks::{body_run, column_alignment, heading};
use crate::palette::Palette;

pub(crate) fn render(section: &ChecklistTableSection, palette: &Palette) -> Vec<Node> {
    let mut nodes = Vec::new();
    if let Some(text) = &section.heading {
        nodes.push(heading(text, palette));
    }

    let count = section.columns.len();
    let widths: Vec<u32> = (0..count)
        .map(|i| section.column_width(i).unwrap_or(0))
        .collect();

    let mut rows = Vec::with_capacity(section.items.len() + 1);
    rows.push(header_row(section, &widths, palette));

    for (index, item) in section.items.iter().enumerate() {
        let shading = (index % 2 == 1).then_some(palette.stripe_fill);
        let cells = widths
            .iter()
            .enumerate()
            .map(|(column, &width)| {
                let paragraph = if column == 0 {
                    Paragraph::new(vec![body_run(item, palette)])
                } else {
                    Paragraph::empty()
                };
                let cell = TableCell::new(
                    width,
                    paragraph.with_alignment(column_alignment(column, count)),
                )
                .with_borders(palette.grid_borders())
                .with_v_align(VerticalAlign::Center);
                match shading {
                    Some(fill) => cell.with_shading(fill),
                    None => cell,
                }
            })
            .collect();
        rows.push(TableRow::new(cells));
    }

    nodes.push(Node::Table(Table::new(rows)));
    nodes
}

fn header_row(section: &ChecklistTableSection, widths: &[u32], palette: &Palette) -> TableRow {
    let count = section.columns.len();
    let cells = section
        .columns
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(column, (label, &width))| {
            let run = body_run(label, palette)
                .with_bold()
                .with_color(palette.header_text);
            TableCell::new(
                width,
                Paragraph::new(vec![run]).with_alignment(column_alignment(column, count)),
            )
            .with_borders(palette.grid_borders())
            .with_shading(palette.header_fill)
            .with_v_align(VerticalAlign::Center)
        })
        .collect();

    TableRow {
        cells,
        is_header: true,
        min_height: None,
    }
}
