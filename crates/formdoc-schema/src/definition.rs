//! Template definition root
//!
//! A `TemplateDefinition` describes one printable form: its title, its
//! ordered sections and, optionally, named variants that swap in a whole
//! alternate title and section list (e.g. regional editions of the same
//! audit). Definitions are static configuration data; the compiler only
//! ever reads them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::section::TemplateSection;

/// Template category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    AuditForm,
    Checklist,
    Policy,
    Log,
}

impl TemplateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::AuditForm => "audit-form",
            TemplateKind::Checklist => "checklist",
            TemplateKind::Policy => "policy",
            TemplateKind::Log => "log",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete template definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateDefinition {
    /// Schema compatibility marker
    pub version: String,
    #[serde(rename = "type")]
    pub kind: TemplateKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub sections: Vec<TemplateSection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<TemplateVariant>,
}

/// A named alternate form sharing one definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateVariant {
    pub name: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub sections: Vec<TemplateSection>,
}

/// The renderable part of a definition or of one of its variants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormView<'a> {
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub sections: &'a [TemplateSection],
}

impl TemplateDefinition {
    /// Create a definition with no sections and no variants
    pub fn new(kind: TemplateKind, title: impl Into<String>) -> Self {
        Self {
            version: "1.0".to_string(),
            kind,
            title: title.into(),
            subtitle: None,
            sections: Vec::new(),
            variants: Vec::new(),
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_section(mut self, section: TemplateSection) -> Self {
        self.sections.push(section);
        self
    }

    pub fn with_variant(mut self, variant: TemplateVariant) -> Self {
        self.variants.push(variant);
        self
    }

    /// The base form
    pub fn form(&self) -> FormView<'_> {
        FormView {
            title: &self.title,
            subtitle: self.subtitle.as_deref(),
            sections: &self.sections,
        }
    }

    /// A named variant's form, if the variant exists
    pub fn variant(&self, name: &str) -> Option<FormView<'_>> {
        self.variants
            .iter()
            .find(|v| v.name == name)
            .map(TemplateVariant::form)
    }

    /// Variant names in declaration order
    pub fn variant_names(&self) -> Vec<&str> {
        self.variants.iter().map(|v| v.name.as_str()).collect()
    }
}

impl TemplateVariant {
    pub fn form(&self) -> FormView<'_> {
        FormView {
            title: &self.title,
            subtitle: self.subtitle.as_deref(),
            sections: &self.sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::TextAreaSection;

    fn notes() -> TemplateSection {
        TemplateSection::TextArea(TextAreaSection {
            label: "Notes".to_string(),
            sublabel: None,
            lines: 3,
        })
    }

    #[test]
    fn test_kind_strings() {
        assert_eq!(TemplateKind::AuditForm.to_string(), "audit-form");
        let kind: TemplateKind = serde_json::from_str("\"log\"").unwrap();
        assert_eq!(kind, TemplateKind::Log);
    }

    #[test]
    fn test_form_view_borrows_base() {
        let def = TemplateDefinition::new(TemplateKind::Policy, "Data Retention Policy")
            .with_subtitle("Reviewed annually")
            .with_section(notes());
        let form = def.form();
        assert_eq!(form.title, "Data Retention Policy");
        assert_eq!(form.subtitle, Some("Reviewed annually"));
        assert_eq!(form.sections.len(), 1);
    }

    #[test]
    fn test_variant_lookup() {
        let def = TemplateDefinition::new(TemplateKind::AuditForm, "Hand Hygiene Audit")
            .with_section(notes())
            .with_variant(TemplateVariant {
                name: "scotland".to_string(),
                title: "Hand Hygiene Audit (Scotland)".to_string(),
                subtitle: None,
                sections: vec![notes(), notes()],
            });

        assert_eq!(def.variant_names(), vec!["scotland"]);
        let form = def.variant("scotland").unwrap();
        assert_eq!(form.title, "Hand Hygiene Audit (Scotland)");
        assert_eq!(form.sections.len(), 2);
        assert!(def.variant("wales").is_none());
    }
}
