//! Ruled writing areas

use formdoc_model::{Node, Paragraph, Spacing};
use formdoc_schema::TextAreaSection;

use super::blocks::{label_run, sublabel_run};
use crate::palette::Palette;
use crate::settings::LayoutSettings;

pub(crate) fn render(
    section: &TextAreaSection,
    palette: &Palette,
    layout: &LayoutSettings,
) -> Vec<Node> {
    let mut nodes = Vec::new();

    nodes.push(Node::Paragraph(
        Paragraph::new(vec![label_run(&section.label, palette)]).with_spacing(Spacing::new(
            240,
            if section.sublabel.is_some() { 0 } else { 60 },
        )),
    ));

    if let Some(sublabel) = &section.sublabel {
        nodes.push(Node::Paragraph(
            Paragraph::new(vec![sublabel_run(sublabel, palette)])
                .with_spacing(Spacing::new(0, 60)),
        ));
    }

    for _ in 0..section.lines {
        nodes.push(Node::Paragraph(
            Paragraph::empty()
                .with_spacing(Spacing::new(layout.writing_line_spacing, 0))
                .with_bottom_border(palette.rule_border()),
        ));
    }

    nodes
}
