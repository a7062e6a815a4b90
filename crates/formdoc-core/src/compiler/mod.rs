//! Layout compiler
//!
//! This module turns a template form into a `formdoc_model::DocumentModel`.
//! The output is a title block, the nodes of every section in order, and
//! a footer disclaimer. Rendering is pure: the same definition and
//! context always produce the same document.
//!
//! # Example
//!
//! ```
//! use formdoc_core::Compiler;
//! use formdoc_schema::{
//!     HeaderField, HeaderFieldsSection, RenderContext, TemplateDefinition, TemplateKind,
//!     TemplateSection, PRACTICE_NAME,
//! };
//!
//! let definition = TemplateDefinition::new(TemplateKind::Log, "Cleaning Log").with_section(
//!     TemplateSection::HeaderFields(HeaderFieldsSection {
//!         fields: vec![HeaderField::full("Practice").with_autofill(PRACTICE_NAME)],
//!     }),
//! );
//!
//! let document = Compiler::default()
//!     .render(&definition, &RenderContext::for_practice("Hill Surgery"))?;
//! assert_eq!(document.len(), 3);
//! # Ok::<(), formdoc_core::RenderError>(())
//! ```

mod blocks;
mod checklist;
mod description;
mod header_fields;
mod signature;
mod text_area;

use formdoc_model::{Alignment, DocumentMeta, DocumentModel, Node, Paragraph, Run, Spacing};
use formdoc_schema::{FormView, RenderContext, TemplateDefinition, TemplateSection};
use tracing::debug;

use crate::error::{RenderError, Result};
use crate::palette::{sizes, Palette};
use crate::settings::RenderSettings;

/// Compiles template forms into document models
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    palette: Palette,
    settings: RenderSettings,
}

impl Compiler {
    /// Create a compiler with an explicit palette and settings
    pub fn new(palette: Palette, settings: RenderSettings) -> Self {
        Self { palette, settings }
    }

    /// Create a compiler with the standard palette and custom settings
    pub fn with_settings(settings: RenderSettings) -> Self {
        Self::new(Palette::STANDARD, settings)
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Validate the definition, then render its base form
    pub fn render(
        &self,
        definition: &TemplateDefinition,
        context: &RenderContext,
    ) -> Result<DocumentModel> {
        definition.validate()?;
        let mut document = self.render_form(definition.form(), context);
        annotate(&mut document.metadata, definition);
        Ok(document)
    }

    /// Validate the definition, then render the named variant
    pub fn render_variant(
        &self,
        definition: &TemplateDefinition,
        name: &str,
        context: &RenderContext,
    ) -> Result<DocumentModel> {
        definition.validate()?;
        let form = definition
            .variant(name)
            .ok_or_else(|| RenderError::UnknownVariant(name.to_string()))?;
        let mut document = self.render_form(form, context);
        annotate(&mut document.metadata, definition);
        Ok(document)
    }

    /// Render a form whose definition has already been validated
    pub fn render_form(&self, form: FormView<'_>, context: &RenderContext) -> DocumentModel {
        debug!(
            title = form.title,
            sections = form.sections.len(),
            "compiling form"
        );

        let mut document = DocumentModel::with_metadata(DocumentMeta {
            title: form.title.to_string(),
            subtitle: form.subtitle.map(str::to_string),
            ..Default::default()
        });

        document.extend(self.title_block(&form));
        for (index, section) in form.sections.iter().enumerate() {
            let nodes = self.render_section(section, context);
            debug!(index, kind = section.kind(), nodes = nodes.len(), "rendered section");
            document.extend(nodes);
        }
        document.push(self.footer());

        document
    }

    fn render_section(&self, section: &TemplateSection, context: &RenderContext) -> Vec<Node> {
        let palette = &self.palette;
        let layout = &self.settings.layout;
        match section {
            TemplateSection::Description(s) => description::render(s, palette, layout),
            TemplateSection::HeaderFields(s) => header_fields::render(s, palette, context),
            TemplateSection::ChecklistTable(s) => checklist::render(s, palette),
            TemplateSection::TextArea(s) => text_area::render(s, palette, layout),
            TemplateSection::SignatureBlock(s) => signature::render(s, palette, layout),
        }
    }

    fn title_block(&self, form: &FormView<'_>) -> Vec<Node> {
        let mut nodes = vec![Node::Paragraph(
            Paragraph::new(vec![Run::bold(form.title)
                .with_size(sizes::TITLE)
                .with_color(self.palette.primary)])
            .with_alignment(Alignment::Center)
            .with_spacing(Spacing::new(0, if form.subtitle.is_some() { 60 } else { 240 })),
        )];

        if let Some(subtitle) = form.subtitle {
            nodes.push(Node::Paragraph(
                Paragraph::new(vec![Run::new(subtitle)
                    .with_italic()
                    .with_size(sizes::SUBTITLE)
                    .with_color(self.palette.muted)])
                .with_alignment(Alignment::Center)
                .with_spacing(Spacing::new(0, 240)),
            ));
        }

        nodes
    }

    fn footer(&self) -> Node {
        Node::Paragraph(
            Paragraph::new(vec![Run::new(self.settings.footer.disclaimer.as_str())
                .with_italic()
                .with_size(sizes::SMALL)
                .with_color(self.palette.muted)])
            .with_alignment(Alignment::Center)
            .with_spacing(Spacing::new(360, 0)),
        )
    }
}

fn annotate(metadata: &mut DocumentMeta, definition: &TemplateDefinition) {
    metadata.version = Some(definition.version.clone());
    metadata.kind = Some(definition.kind.to_string());
}

/// Render a definition's base form with the standard palette and default
/// settings
pub fn render(definition: &TemplateDefinition, context: &RenderContext) -> Result<DocumentModel> {
    Compiler::default().render(definition, context)
}
