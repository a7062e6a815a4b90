//! Structural validation
//!
//! Validation is a pre-pass over the whole definition, base form and
//! every variant, and stops at the first violation. A definition that
//! passes can be compiled without any further checks.
//!
//! Rules:
//! - every section list is non-empty
//! - checklist `columns` and `columnWidths` have the same length
//! - checklist widths are whole-number percentages summing to exactly 100
//! - every signature entry has at least one field
//! - text areas stay within `MAX_TEXT_AREA_LINES`
//! - variant names are unique

use std::collections::HashSet;

use crate::definition::TemplateDefinition;
use crate::error::{Result, SchemaError};
use crate::load::variant_sections_location;
use crate::section::{
    parse_percentage, ChecklistTableSection, SignatureBlockSection, TemplateSection,
    TextAreaSection, MAX_TEXT_AREA_LINES,
};

impl TemplateDefinition {
    /// Check every structural invariant, returning the first violation
    pub fn validate(&self) -> Result<()> {
        validate_sections("sections", &self.sections)?;

        let mut seen = HashSet::new();
        for variant in &self.variants {
            if !seen.insert(variant.name.as_str()) {
                return Err(SchemaError::DuplicateVariant(variant.name.clone()));
            }
            validate_sections(&variant_sections_location(&variant.name), &variant.sections)?;
        }

        Ok(())
    }
}

/// Validate one ordered section list
pub fn validate_sections(location: &str, sections: &[TemplateSection]) -> Result<()> {
    if sections.is_empty() {
        return Err(SchemaError::EmptySections {
            location: location.to_string(),
        });
    }

    for (index, section) in sections.iter().enumerate() {
        let location = format!("{}[{}]", location, index);
        match section {
            TemplateSection::ChecklistTable(table) => validate_checklist(&location, table)?,
            TemplateSection::SignatureBlock(block) => validate_signatures(&location, block)?,
            TemplateSection::TextArea(area) => validate_text_area(&location, area)?,
            TemplateSection::Description(_) | TemplateSection::HeaderFields(_) => {}
        }
    }

    Ok(())
}

fn validate_checklist(location: &str, table: &ChecklistTableSection) -> Result<()> {
    if table.columns.len() != table.column_widths.len() {
        return Err(SchemaError::ColumnCountMismatch {
            location: location.to_string(),
            columns: table.columns.len(),
            widths: table.column_widths.len(),
        });
    }

    let mut sum: u64 = 0;
    for value in &table.column_widths {
        let width = parse_percentage(value).ok_or_else(|| SchemaError::InvalidColumnWidth {
            location: location.to_string(),
            value: value.clone(),
        })?;
        sum += u64::from(width);
    }

    // Exact match; no rounding tolerance.
    if sum != 100 {
        return Err(SchemaError::ColumnWidthSum {
            location: location.to_string(),
            sum,
        });
    }

    Ok(())
}

fn validate_text_area(location: &str, area: &TextAreaSection) -> Result<()> {
    if area.lines > MAX_TEXT_AREA_LINES {
        return Err(SchemaError::TooManyLines {
            location: location.to_string(),
            lines: area.lines,
            max: MAX_TEXT_AREA_LINES,
        });
    }
    Ok(())
}

fn validate_signatures(location: &str, block: &SignatureBlockSection) -> Result<()> {
    for (index, entry) in block.entries.iter().enumerate() {
        if entry.fields.is_empty() {
            return Err(SchemaError::EmptySignatureFields {
                location: format!("{}.entries[{}]", location, index),
                label: entry.label.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{TemplateKind, TemplateVariant};
    use crate::section::{DescriptionSection, SignatureEntry};

    fn checklist(columns: &[&str], widths: &[&str], items: &[&str]) -> TemplateSection {
        TemplateSection::ChecklistTable(ChecklistTableSection {
            heading: None,
            columns: columns.iter().map(|s| s.to_string()).collect(),
            column_widths: widths.iter().map(|s| s.to_string()).collect(),
            items: items.iter().map(|s| s.to_string()).collect(),
        })
    }

    fn description() -> TemplateSection {
        TemplateSection::Description(DescriptionSection {
            heading: None,
            content: "Intro".to_string(),
        })
    }

    fn signatures(fields: &[&str]) -> TemplateSection {
        TemplateSection::SignatureBlock(SignatureBlockSection {
            entries: vec![SignatureEntry {
                label: "Auditor".to_string(),
                sublabel: None,
                fields: fields.iter().map(|s| s.to_string()).collect(),
            }],
        })
    }

    fn definition(sections: Vec<TemplateSection>) -> TemplateDefinition {
        let mut def = TemplateDefinition::new(TemplateKind::AuditForm, "Audit");
        def.sections = sections;
        def
    }

    #[test]
    fn test_valid_definition() {
        let def = definition(vec![
            description(),
            checklist(&["Item", "Yes", "No", "Comments"], &["40", "20", "20", "20"], &["A"]),
            signatures(&["Name", "Date"]),
        ]);
        assert_eq!(def.validate(), Ok(()));
    }

    #[test]
    fn test_empty_sections_rejected() {
        let err = definition(vec![]).validate().unwrap_err();
        assert_eq!(
            err,
            SchemaError::EmptySections {
                location: "sections".to_string()
            }
        );
    }

    #[test]
    fn test_column_count_mismatch() {
        let def = definition(vec![checklist(
            &["Item", "Yes", "No", "Comments"],
            &["40", "30", "30"],
            &[],
        )]);
        let err = def.validate().unwrap_err();
        assert_eq!(
            err,
            SchemaError::ColumnCountMismatch {
                location: "sections[0]".to_string(),
                columns: 4,
                widths: 3,
            }
        );
    }

    #[test]
    fn test_width_sum_must_be_exact() {
        let def = definition(vec![checklist(&["A", "B", "C"], &["33", "33", "33"], &[])]);
        assert_eq!(
            def.validate().unwrap_err(),
            SchemaError::ColumnWidthSum {
                location: "sections[0]".to_string(),
                sum: 99,
            }
        );

        let ok = definition(vec![checklist(&["A", "B", "C"], &["33", "33", "34"], &[])]);
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_non_numeric_width() {
        let def = definition(vec![checklist(&["A", "B"], &["50", "fifty"], &[])]);
        assert!(matches!(
            def.validate().unwrap_err(),
            SchemaError::InvalidColumnWidth { ref value, .. } if value == "fifty"
        ));
    }

    #[test]
    fn test_zero_items_is_legal() {
        let def = definition(vec![checklist(&["Item", "Done"], &["80", "20"], &[])]);
        assert!(def.validate().is_ok());
    }

    #[test]
    fn test_signature_without_fields() {
        let def = definition(vec![description(), signatures(&[])]);
        assert_eq!(
            def.validate().unwrap_err(),
            SchemaError::EmptySignatureFields {
                location: "sections[1].entries[0]".to_string(),
                label: "Auditor".to_string(),
            }
        );
    }

    #[test]
    fn test_variant_sections_validated_independently() {
        let def = definition(vec![description()]).with_variant(TemplateVariant {
            name: "north".to_string(),
            title: "Audit (North)".to_string(),
            subtitle: None,
            sections: vec![],
        });
        assert_eq!(
            def.validate().unwrap_err(),
            SchemaError::EmptySections {
                location: "variants[north].sections".to_string()
            }
        );
    }

    #[test]
    fn test_text_area_line_bound() {
        let area = |lines| {
            TemplateSection::TextArea(TextAreaSection {
                label: "Notes".to_string(),
                sublabel: None,
                lines,
            })
        };

        assert!(definition(vec![area(MAX_TEXT_AREA_LINES)]).validate().is_ok());

        let def = definition(vec![description(), area(u32::MAX)]);
        assert_eq!(
            def.validate().unwrap_err(),
            SchemaError::TooManyLines {
                location: "sections[1]".to_string(),
                lines: u32::MAX,
                max: MAX_TEXT_AREA_LINES,
            }
        );
    }

    #[test]
    fn test_duplicate_variant_names() {
        let variant = TemplateVariant {
            name: "north".to_string(),
            title: "Audit (North)".to_string(),
            subtitle: None,
            sections: vec![description()],
        };
        let def = definition(vec![description()])
            .with_variant(variant.clone())
            .with_variant(variant);
        assert_eq!(
            def.validate().unwrap_err(),
            SchemaError::DuplicateVariant("north".to_string())
        );
    }
}
