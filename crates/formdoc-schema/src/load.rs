//! Template loading from JSON and TOML
//!
//! Loading runs in two steps. The raw document is first scanned for the
//! `type` tag of every section (base and variants) so that a section of
//! an unknown kind is reported by name and position, instead of as a
//! generic decode failure. The checked value is then deserialized into
//! the typed definition.

use serde_json::Value;
use tracing::debug;

use crate::definition::TemplateDefinition;
use crate::error::{Result, SchemaError};
use crate::section::SECTION_KINDS;

impl TemplateDefinition {
    /// Parse a definition from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Parse a definition from TOML text
    ///
    /// Sections are an array of tables:
    ///
    /// ```toml
    /// version = "1.0"
    /// type = "log"
    /// title = "Fridge Temperature Log"
    ///
    /// [[sections]]
    /// type = "textArea"
    /// label = "Readings"
    /// lines = 10
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let value: toml::Value = toml::from_str(text)?;
        Self::from_value(serde_json::to_value(value)?)
    }

    /// Build a definition from an already-parsed JSON value
    pub fn from_value(value: Value) -> Result<Self> {
        check_section_kinds(&value)?;
        let definition: TemplateDefinition = serde_json::from_value(value)?;
        debug!(
            title = %definition.title,
            sections = definition.sections.len(),
            variants = definition.variants.len(),
            "loaded template definition"
        );
        Ok(definition)
    }
}

/// Location prefix for a variant's section list
pub(crate) fn variant_sections_location(name: &str) -> String {
    format!("variants[{}].sections", name)
}

fn check_section_kinds(root: &Value) -> Result<()> {
    if let Some(sections) = root.get("sections").and_then(Value::as_array) {
        check_section_list("sections", sections)?;
    }

    if let Some(variants) = root.get("variants").and_then(Value::as_array) {
        for (index, variant) in variants.iter().enumerate() {
            let name = variant
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| index.to_string());
            if let Some(sections) = variant.get("sections").and_then(Value::as_array) {
                check_section_list(&variant_sections_location(&name), sections)?;
            }
        }
    }

    Ok(())
}

fn check_section_list(prefix: &str, sections: &[Value]) -> Result<()> {
    for (index, section) in sections.iter().enumerate() {
        let location = format!("{}[{}]", prefix, index);
        match section.get("type") {
            Some(Value::String(kind)) if SECTION_KINDS.contains(&kind.as_str()) => {}
            Some(Value::String(kind)) => {
                return Err(SchemaError::UnknownSectionKind {
                    location,
                    kind: kind.clone(),
                });
            }
            Some(other) => {
                return Err(SchemaError::UnknownSectionKind {
                    location,
                    kind: other.to_string(),
                });
            }
            None => return Err(SchemaError::MissingSectionKind { location }),
        }
    }
    Ok(())
}
