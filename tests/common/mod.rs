#![allow(dead_code)]

pub mod snapshot_utils;

use smo_descriptors::{
    build_service_object, Config, ErrorCollection, ServiceObject, ServiceObjectDefinition,
};

/// A definition exercising every section of the format
pub const LIBRARY_DEFINITION: &str = r#"{
  "name": "Document Library",
  "description": "Files in a library",
  "properties": [
    { "name": "File Name", "description": "Name of the file", "type": "Text" },
    { "name": "FileSize", "type": "Number" },
    { "name": "Checked Out", "type": "YesNo" }
  ],
  "methods": [
    {
      "name": "GetItems",
      "type": "List",
      "siteUrl": true,
      "parameters": [{ "name": "Folder Path", "required": false }],
      "returns": ["File Name", "FileSize"]
    },
    {
      "name": "CheckOut",
      "type": "Execute",
      "requiredInputs": ["File Name"],
      "returns": ["Checked Out"]
    }
  ]
}"#;

/// Parse and build a definition, flattening any failure into a printable message
pub fn build_from_json(
    source: &str,
    config: &Config,
) -> Result<(ServiceObject, ErrorCollection), String> {
    let definition = ServiceObjectDefinition::from_json(source).map_err(|e| e.to_string())?;
    build_service_object(&definition, config).map_err(|errors| errors.to_string())
}

/// Build a definition that is expected to fail and return its diagnostics
pub fn build_errors(source: &str, config: &Config) -> ErrorCollection {
    let definition =
        ServiceObjectDefinition::from_json(source).expect("definition should parse");
    match build_service_object(&definition, config) {
        Ok((so, _)) => panic!("expected build of '{}' to fail", so.name),
        Err(errors) => errors,
    }
}
