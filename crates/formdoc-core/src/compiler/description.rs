//! Description sections
//!
//! Content is split on `\n` and every line becomes one paragraph. Lines
//! starting with `- ` or `* ` are bullets: the marker is replaced by a
//! bullet glyph run and the paragraph is indented. Interior lines get a
//! small gap after them and the last line a larger one, which is what
//! separates consecutive description blocks.

use formdoc_model::{Indent, Node, Paragraph, Spacing};
use formdoc_schema::DescriptionSection;

use super::blocks::{body_run, heading};
use crate::palette::{Palette, BULLET_GLYPH};
use crate::settings::LayoutSettings;

pub(crate) fn render(
    section: &DescriptionSection,
    palette: &Palette,
    layout: &LayoutSettings,
) -> Vec<Node> {
    let mut nodes = Vec::new();
    if let Some(text) = &section.heading {
        nodes.push(heading(text, palette));
    }

    let lines: Vec<&str> = section.content.split('\n').collect();
    let last = lines.len() - 1;

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let after = if index == last {
            layout.description_block_gap
        } else {
            layout.description_line_gap
        };

        let paragraph = match bullet_text(line) {
            Some(text) => Paragraph::new(vec![
                body_run(&format!("{}\t", BULLET_GLYPH), palette),
                body_run(text, palette),
            ])
            .with_indent(Indent {
                left: layout.bullet_indent,
                hanging: layout.bullet_indent,
            }),
            None => Paragraph::new(vec![body_run(line, palette)]),
        };

        nodes.push(Node::Paragraph(paragraph.with_spacing(Spacing::new(0, after))));
    }

    nodes
}

/// Text of a bullet line without its marker
fn bullet_text(line: &str) -> Option<&str> {
    line.strip_prefix("- ").or_else(|| line.strip_prefix("* "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(content: &str) -> DescriptionSection {
        DescriptionSection {
            heading: None,
            content: content.to_string(),
        }
    }

    fn paragraphs(nodes: &[Node]) -> Vec<&Paragraph> {
        nodes.iter().filter_map(Node::as_paragraph).collect()
    }

    #[test]
    fn test_bullet_lines() {
        let layout = LayoutSettings::default();
        let nodes = render(
            &section("Intro line\n- point one\n- point two\nClosing line"),
            &Palette::STANDARD,
            &layout,
        );
        let paras = paragraphs(&nodes);

        assert_eq!(paras.len(), 4);
        let bullets: Vec<bool> = paras.iter().map(|p| p.is_bullet(BULLET_GLYPH)).collect();
        assert_eq!(bullets, vec![false, true, true, false]);

        assert_eq!(paras[1].text(), format!("{}\tpoint one", BULLET_GLYPH));
        assert_eq!(paras[1].indent.left, layout.bullet_indent);
        assert_eq!(paras[0].indent.left, 0);
        assert_eq!(paras[3].text(), "Closing line");
    }

    #[test]
    fn test_star_marker_and_no_space() {
        let nodes = render(
            &section("* starred\n-dash without space"),
            &Palette::STANDARD,
            &LayoutSettings::default(),
        );
        let paras = paragraphs(&nodes);
        assert!(paras[0].is_bullet(BULLET_GLYPH));
        assert!(!paras[1].is_bullet(BULLET_GLYPH));
        assert_eq!(paras[1].text(), "-dash without space");
    }

    #[test]
    fn test_last_line_spacing() {
        let layout = LayoutSettings::default();
        let nodes = render(&section("one\ntwo\nthree"), &Palette::STANDARD, &layout);
        let gaps: Vec<u32> = paragraphs(&nodes).iter().map(|p| p.spacing.after).collect();
        assert_eq!(
            gaps,
            vec![
                layout.description_line_gap,
                layout.description_line_gap,
                layout.description_block_gap
            ]
        );
    }

    #[test]
    fn test_single_line_gets_block_gap() {
        let layout = LayoutSettings::default();
        let nodes = render(&section("only"), &Palette::STANDARD, &layout);
        assert_eq!(nodes.len(), 1);
        assert_eq!(
            nodes[0].as_paragraph().unwrap().spacing.after,
            layout.description_block_gap
        );
    }

    #[test]
    fn test_heading_precedes_content() {
        let mut s = section("Body");
        s.heading = Some("Purpose".to_string());
        let nodes = render(&s, &Palette::STANDARD, &LayoutSettings::default());
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].text(), "Purpose");
        assert_eq!(nodes[1].text(), "Body");
    }

    #[test]
    fn test_crlf_lines() {
        let nodes = render(
            &section("first\r\n- second"),
            &Palette::STANDARD,
            &LayoutSettings::default(),
        );
        assert_eq!(nodes[0].text(), "first");
        assert!(nodes[1].as_paragraph().unwrap().is_bullet(BULLET_GLYPH));
    }
}
