mod common;

use common::{build_errors, build_from_json, LIBRARY_DEFINITION};
use smo_descriptors::{Config, ErrorKind, ServiceObjectDefinition, SITE_URL_PARAMETER};

#[test]
fn test_library_definition_builds() {
    let (so, warnings) = build_from_json(LIBRARY_DEFINITION, &Config::default()).unwrap();

    assert!(warnings.is_empty(), "unexpected warnings: {}", warnings);
    assert_eq!(so.name, "DocumentLibrary");
    assert_eq!(so.metadata.description, "Files in a library");
    assert_eq!(so.properties.len(), 3);
    assert_eq!(so.methods.len(), 2);

    let checked_out = so.property("CheckedOut").unwrap();
    assert_eq!(checked_out.metadata.display_name, "Checked Out");
    assert_eq!(checked_out.host_type, "System.Boolean");

    let file_size = so.property("FileSize").unwrap();
    assert_eq!(file_size.metadata.display_name, "File Size");

    let check_out = so.method("CheckOut").unwrap();
    assert_eq!(check_out.metadata.display_name, "Check Out");
    assert_eq!(check_out.input_properties, vec!["FileName"]);
    assert_eq!(check_out.required_properties, vec!["FileName"]);
    assert!(check_out.parameter(SITE_URL_PARAMETER).is_none());
}

#[test]
fn test_site_url_flag_applies_to_every_method() {
    let config = Config {
        site_url_on_every_method: true,
        ..Config::default()
    };
    let (so, _) = build_from_json(LIBRARY_DEFINITION, &config).unwrap();

    for method in &so.methods {
        assert!(
            method.parameter(SITE_URL_PARAMETER).is_some(),
            "{} should take a site URL",
            method.name
        );
    }
}

#[test]
fn test_explicit_display_names_are_kept() {
    let source = r#"{
        "name": "Task",
        "displayName": "Work Item",
        "properties": [{ "name": "DueDate", "type": "date", "displayName": "Deadline" }]
    }"#;

    let (so, _) = build_from_json(source, &Config::default()).unwrap();
    assert_eq!(so.metadata.display_name, "Work Item");
    assert_eq!(so.property("DueDate").unwrap().metadata.display_name, "Deadline");
}

#[test]
fn test_parameters_default_to_required() {
    let source = r#"{
        "name": "Search",
        "methods": [{ "name": "Find", "type": "Execute", "parameters": [{ "name": "Term" }] }]
    }"#;

    let (so, _) = build_from_json(source, &Config::default()).unwrap();
    let find = so.method("Find").unwrap();
    assert!(find.parameter("Term").unwrap().is_required);
}

#[test]
fn test_every_problem_is_reported() {
    let source = r#"{
        "name": "Broken",
        "properties": [
            { "name": "Title", "type": "Text" },
            { "name": "Title", "type": "Text" },
            { "name": "Owner", "type": "Person" },
            { "name": "", "type": "Text" }
        ],
        "methods": [
            { "name": "Load", "type": "Fetch" },
            { "name": "Read", "type": "Read", "returns": ["Missing"] },
            { "name": "Read", "type": "Read" }
        ]
    }"#;

    let errors = build_errors(source, &Config::default());
    let kinds: Vec<ErrorKind> = errors.errors().iter().map(|e| e.kind).collect();

    assert_eq!(
        kinds,
        vec![
            ErrorKind::DuplicateName,
            ErrorKind::UnknownType,
            ErrorKind::EmptyName,
            ErrorKind::UnknownType,
            ErrorKind::UndeclaredProperty,
            ErrorKind::DuplicateName,
        ]
    );
}

#[test]
fn test_strict_names_turn_warnings_into_errors() {
    let source = r#"{
        "name": "Zone Settings",
        "properties": [{ "name": "Zone.Name", "type": "Text" }]
    }"#;

    let (_, warnings) = build_from_json(source, &Config::default()).unwrap();
    assert_eq!(warnings.warning_count(), 1);
    assert!(warnings.warnings()[0].message.contains("Zone.Name"));

    let strict = Config {
        strict_names: true,
        ..Config::default()
    };
    let errors = build_errors(source, &strict);
    assert_eq!(errors.errors()[0].kind, ErrorKind::InvalidName);
}

#[test]
fn test_malformed_json_reports_position() {
    let err = ServiceObjectDefinition::from_json("{\n  \"name\": \"A\",\n  \"methods\": [,]\n}")
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::ParseError);
    assert_eq!(err.context.span.unwrap().start.line, 3);
}

#[test]
fn test_missing_name_is_a_parse_error() {
    let err = ServiceObjectDefinition::from_json(r#"{ "description": "nameless" }"#).unwrap_err();
    assert_eq!(err.kind, ErrorKind::ParseError);
    assert!(err.message.contains("name"));
}

#[test]
fn test_explicit_site_url_parameter_twice_is_a_duplicate() {
    let source = r#"{
        "name": "Search",
        "methods": [{
            "name": "Find",
            "type": "Execute",
            "parameters": [
                { "name": "SiteURL" },
                { "name": "Site URL", "required": false },
                { "name": "Term" },
                { "name": "Term" }
            ]
        }]
    }"#;

    let errors = build_errors(source, &Config::default());
    let messages: Vec<&str> = errors.errors().iter().map(|e| e.message.as_str()).collect();

    assert_eq!(errors.error_count(), 2);
    assert!(errors.errors().iter().all(|e| e.kind == ErrorKind::DuplicateName));
    assert!(messages[0].contains("Find.SiteURL"));
    assert!(messages[1].contains("Find.Term"));
}

#[test]
fn test_site_url_flag_merges_explicit_entry() {
    let source = r#"{
        "name": "Search",
        "methods": [{
            "name": "Find",
            "type": "Execute",
            "siteUrl": true,
            "parameters": [{ "name": "SiteURL" }, { "name": "Term" }]
        }]
    }"#;

    let (so, warnings) = build_from_json(source, &Config::default()).unwrap();
    let find = so.method("Find").unwrap();

    assert!(warnings.is_empty());
    assert_eq!(find.method_parameters.len(), 2);
    assert!(find.parameter(SITE_URL_PARAMETER).unwrap().is_required);
}

#[test]
fn test_optional_site_url_entry_warns_when_merged() {
    let source = r#"{
        "name": "Search",
        "methods": [{
            "name": "Find",
            "type": "Execute",
            "parameters": [{ "name": "Site URL", "required": false }]
        }]
    }"#;
    let config = Config {
        site_url_on_every_method: true,
        ..Config::default()
    };

    let (so, warnings) = build_from_json(source, &config).unwrap();
    let find = so.method("Find").unwrap();

    assert_eq!(find.method_parameters.len(), 1);
    assert!(find.parameter(SITE_URL_PARAMETER).unwrap().is_required);
    assert_eq!(warnings.warning_count(), 1);
    assert!(warnings.warnings()[0].message.contains("always required"));
}

#[test]
fn test_repeated_property_references_are_duplicates() {
    let source = r#"{
        "name": "Item",
        "properties": [{ "name": "A", "type": "Text" }, { "name": "B", "type": "Text" }],
        "methods": [{
            "name": "Update",
            "type": "Update",
            "inputs": ["A", "A", "B"],
            "requiredInputs": ["A", "A"],
            "returns": ["A", "A"]
        }]
    }"#;

    let errors = build_errors(source, &Config::default());
    let messages: Vec<&str> = errors.errors().iter().map(|e| e.message.as_str()).collect();

    assert_eq!(errors.error_count(), 3);
    assert!(errors.errors().iter().all(|e| e.kind == ErrorKind::DuplicateName));
    assert!(messages[0].starts_with("input property 'Update.A'"));
    assert!(messages[1].starts_with("required input property 'Update.A'"));
    assert!(messages[2].starts_with("return property 'Update.A'"));
}

#[test]
fn test_required_input_may_repeat_an_input() {
    let source = r#"{
        "name": "Item",
        "properties": [{ "name": "A", "type": "Text" }],
        "methods": [{ "name": "Update", "type": "Update", "inputs": ["A"], "requiredInputs": ["A"] }]
    }"#;

    let (so, _) = build_from_json(source, &Config::default()).unwrap();
    let update = so.method("Update").unwrap();

    assert_eq!(update.input_properties, vec!["A"]);
    assert_eq!(update.required_properties, vec!["A"]);
}

#[test]
fn test_build_errors_name_the_entry_without_a_span() {
    let source = r#"{ "name": "Item", "properties": [{ "name": "Owner", "type": "Person" }] }"#;

    let errors = build_errors(source, &Config::default());
    let error = &errors.errors()[0];

    assert!(error.context.span.is_none());
    assert!(error.message.contains("'Owner'"));
}
