//! Shared paragraph and run builders
//!
//! Section renderers build their text through these helpers so that
//! sizes and colours stay consistent across the document.

use formdoc_model::{Alignment, Node, Paragraph, Run, Spacing};

use crate::palette::{sizes, Palette};

/// Section heading paragraph
pub(crate) fn heading(text: &str, palette: &Palette) -> Node {
    Node::Paragraph(
        Paragraph::new(vec![Run::bold(text)
            .with_size(sizes::HEADING)
            .with_color(palette.primary)])
        .with_spacing(Spacing::new(240, 120)),
    )
}

/// Regular body text
pub(crate) fn body_run(text: &str, palette: &Palette) -> Run {
    Run::new(text)
        .with_size(sizes::BODY)
        .with_color(palette.text)
}

/// Bold label text
pub(crate) fn label_run(text: &str, palette: &Palette) -> Run {
    body_run(text, palette).with_bold()
}

/// Small, italic, muted text for sublabels and prompts
pub(crate) fn sublabel_run(text: &str, palette: &Palette) -> Run {
    Run::new(text)
        .with_italic()
        .with_size(sizes::SMALL)
        .with_color(palette.muted)
}

/// Alignment of checklist column `index` in a table of `count` columns:
/// the item and comment columns are left-aligned, decision columns
/// between them are centred
pub(crate) fn column_alignment(index: usize, count: usize) -> Alignment {
    if index == 0 || index + 1 == count {
        Alignment::Left
    } else {
        Alignment::Center
    }
}
