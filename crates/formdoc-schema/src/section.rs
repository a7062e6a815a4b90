//! Template section variants
//!
//! A template is an ordered list of sections. Each section is one of five
//! kinds and carries only the fields that kind needs. In serialized form
//! the kind is the `type` tag:
//!
//! ```json
//! { "type": "textArea", "label": "Observations", "lines": 4 }
//! ```

use serde::{Deserialize, Serialize};

/// Serialized `type` tags of every section kind, in declaration order
pub const SECTION_KINDS: [&str; 5] = [
    "description",
    "headerFields",
    "checklistTable",
    "textArea",
    "signatureBlock",
];

/// One block of a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TemplateSection {
    /// Free text, optionally with bullet lines
    Description(DescriptionSection),
    /// Labelled fill-in fields at the top of a form
    HeaderFields(HeaderFieldsSection),
    /// A grid of items against decision columns
    ChecklistTable(ChecklistTableSection),
    /// A ruled area for handwriting
    TextArea(TextAreaSection),
    /// Signatory rows
    SignatureBlock(SignatureBlockSection),
}

impl TemplateSection {
    /// The serialized `type` tag of this section
    pub fn kind(&self) -> &'static str {
        match self {
            TemplateSection::Description(_) => SECTION_KINDS[0],
            TemplateSection::HeaderFields(_) => SECTION_KINDS[1],
            TemplateSection::ChecklistTable(_) => SECTION_KINDS[2],
            TemplateSection::TextArea(_) => SECTION_KINDS[3],
            TemplateSection::SignatureBlock(_) => SECTION_KINDS[4],
        }
    }
}

/// Free-text block
///
/// `content` is split on `\n`; lines starting with `- ` or `* ` are
/// bullet items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptionSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub content: String,
}

/// Fill-in fields packed into rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderFieldsSection {
    pub fields: Vec<HeaderField>,
}

/// A single labelled field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderField {
    pub label: String,
    pub width: FieldWidth,
    /// Context key whose value pre-fills the field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autofill: Option<String>,
}

impl HeaderField {
    pub fn full(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            width: FieldWidth::Full,
            autofill: None,
        }
    }

    pub fn half(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            width: FieldWidth::Half,
            autofill: None,
        }
    }

    pub fn with_autofill(mut self, key: impl Into<String>) -> Self {
        self.autofill = Some(key.into());
        self
    }
}

/// Header field width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldWidth {
    /// Occupies a whole row
    Full,
    /// Shares a row with one other half field
    Half,
}

/// Items listed against decision columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistTableSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub columns: Vec<String>,
    /// Percentages as strings, one per column
    pub column_widths: Vec<String>,
    #[serde(default)]
    pub items: Vec<String>,
}

impl ChecklistTableSection {
    /// Width of column `index` as a percentage, if it parses
    pub fn column_width(&self, index: usize) -> Option<u32> {
        self.column_widths
            .get(index)
            .and_then(|w| parse_percentage(w))
    }
}

/// Parse a whole-number percentage such as `"40"` or `"40%"`
pub fn parse_percentage(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    let digits = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Upper bound on the ruled lines of one text area
pub const MAX_TEXT_AREA_LINES: u32 = 200;

/// Ruled writing area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAreaSection {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sublabel: Option<String>,
    /// Number of blank ruled lines
    #[serde(default)]
    pub lines: u32,
}

/// Signatory rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignatureBlockSection {
    pub entries: Vec<SignatureEntry>,
}

/// One signatory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignatureEntry {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sublabel: Option<String>,
    /// Prompts such as `Name`, `Signature`, `Date`
    pub fields: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_percentage() {
        assert_eq!(parse_percentage("40"), Some(40));
        assert_eq!(parse_percentage(" 25 "), Some(25));
        assert_eq!(parse_percentage("15%"), Some(15));
        assert_eq!(parse_percentage("0"), Some(0));
        assert_eq!(parse_percentage("33.3"), None);
        assert_eq!(parse_percentage("-10"), None);
        assert_eq!(parse_percentage(""), None);
        assert_eq!(parse_percentage("%"), None);
        assert_eq!(parse_percentage("abc"), None);
    }

    #[test]
    fn test_kind_tags_match_serde() {
        let sections = vec![
            TemplateSection::Description(DescriptionSection {
                heading: None,
                content: "x".to_string(),
            }),
            TemplateSection::HeaderFields(HeaderFieldsSection { fields: vec![] }),
            TemplateSection::ChecklistTable(ChecklistTableSection {
                heading: None,
                columns: vec![],
                column_widths: vec![],
                items: vec![],
            }),
            TemplateSection::TextArea(TextAreaSection {
                label: "Notes".to_string(),
                sublabel: None,
                lines: 0,
            }),
            TemplateSection::SignatureBlock(SignatureBlockSection { entries: vec![] }),
        ];

        for (section, expected) in sections.iter().zip(SECTION_KINDS) {
            let value = serde_json::to_value(section).unwrap();
            assert_eq!(value["type"], expected);
            assert_eq!(section.kind(), expected);
        }
    }

    #[test]
    fn test_checklist_camel_case_fields() {
        let json = r#"{
            "type": "checklistTable",
            "columns": ["Item", "Yes", "No"],
            "columnWidths": ["50", "25", "25"],
            "items": ["Exit signs lit"]
        }"#;
        let section: TemplateSection = serde_json::from_str(json).unwrap();
        let TemplateSection::ChecklistTable(table) = section else {
            panic!("Expected checklist table");
        };
        assert_eq!(table.column_width(0), Some(50));
        assert_eq!(table.column_width(3), None);
        assert!(table.heading.is_none());
    }

    #[test]
    fn test_header_field_width_lowercase() {
        let field: HeaderField =
            serde_json::from_str(r#"{"label": "Date", "width": "half"}"#).unwrap();
        assert_eq!(field, HeaderField::half("Date"));

        let filled: HeaderField = serde_json::from_str(
            r#"{"label": "Practice", "width": "full", "autofill": "practiceName"}"#,
        )
        .unwrap();
        assert_eq!(filled.autofill.as_deref(), Some("practiceName"));
    }

    #[test]
    fn test_text_area_lines_default_zero() {
        let section: TextAreaSection = serde_json::from_str(r#"{"label": "Notes"}"#).unwrap();
        assert_eq!(section.lines, 0);
    }
}
