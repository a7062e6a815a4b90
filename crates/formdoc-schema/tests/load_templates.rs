//! Loading and validating template files

use formdoc_schema::{
    FieldWidth, SchemaError, TemplateDefinition, TemplateKind, TemplateSection, PRACTICE_NAME,
};

const CLEANING_LOG: &str = include_str!("fixtures/cleaning_log.toml");

#[test]
fn test_load_toml_fixture() {
    let def = TemplateDefinition::from_toml_str(CLEANING_LOG).unwrap();

    assert_eq!(def.kind, TemplateKind::Log);
    assert_eq!(def.subtitle.as_deref(), Some("One sheet per room per month"));
    assert_eq!(def.sections.len(), 3);

    let TemplateSection::HeaderFields(header) = &def.sections[0] else {
        panic!("Expected header fields first");
    };
    assert_eq!(header.fields[0].autofill.as_deref(), Some(PRACTICE_NAME));
    assert_eq!(header.fields[1].width, FieldWidth::Half);

    let weekly = def.variant("weekly").unwrap();
    assert_eq!(weekly.sections.len(), 1);
    assert!(weekly.subtitle.is_none());

    assert!(def.validate().is_ok());
}

#[test]
fn test_json_and_toml_agree() {
    let from_toml = TemplateDefinition::from_toml_str(CLEANING_LOG).unwrap();
    let json = serde_json::to_string(&from_toml).unwrap();
    let from_json = TemplateDefinition::from_json_str(&json).unwrap();
    assert_eq!(from_json, from_toml);
}

#[test]
fn test_validation_reports_variant_location() {
    let toml = CLEANING_LOG.replace(
        "lines = 6",
        "lines = 6\n\n[[variants.sections]]\ntype = \"signatureBlock\"\nentries = [{ label = \"Cleaner\", fields = [] }]",
    );
    let def = TemplateDefinition::from_toml_str(&toml).unwrap();

    assert_eq!(
        def.validate().unwrap_err(),
        SchemaError::EmptySignatureFields {
            location: "variants[weekly].sections[1].entries[0]".to_string(),
            label: "Cleaner".to_string(),
        }
    );
}

#[test]
fn test_wrong_field_shape_is_parse_error() {
    let json = r#"{
        "version": "1.0",
        "type": "checklist",
        "title": "Checks",
        "sections": [{ "type": "textArea", "label": "Notes", "lines": "many" }]
    }"#;
    assert!(matches!(
        TemplateDefinition::from_json_str(json).unwrap_err(),
        SchemaError::Parse(_)
    ));
}

#[test]
fn test_unknown_template_kind_is_parse_error() {
    let json = r#"{
        "version": "1.0",
        "type": "newsletter",
        "title": "News",
        "sections": [{ "type": "description", "content": "Hello" }]
    }"#;
    assert!(matches!(
        TemplateDefinition::from_json_str(json).unwrap_err(),
        SchemaError::Parse(_)
    ));
}
