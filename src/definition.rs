//! Declarative service object definitions.
//!
//! A definition lists properties and methods by name and type name. Building
//! it runs every entry through the descriptor factories, sanitizing names on
//! the way, and reports every problem at once instead of stopping at the first.

use crate::config::Config;
use crate::descriptors::{
    add_site_url_parameter, add_string_parameter, create_method, create_property,
    create_service_object, Method, Property, ServiceObject, SITE_URL_PARAMETER,
};
use crate::error::{DescriptorError, ErrorCollection, ErrorKind, Result};
use crate::naming::{humanize, is_simple_alphanumeric, make_system_name};
use crate::types::{MethodType, SoType};
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceObjectDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub properties: Vec<PropertyDefinition>,
    #[serde(default)]
    pub methods: Vec<MethodDefinition>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Logical type name, e.g. "Text" or "YesNo"
    #[serde(rename = "type")]
    pub so_type: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub method_type: String,
    /// Prepend the site URL parameter
    #[serde(default)]
    pub site_url: bool,
    #[serde(default)]
    pub parameters: Vec<ParameterDefinition>,
    #[serde(default)]
    pub inputs: Vec<String>,
    #[serde(default)]
    pub required_inputs: Vec<String>,
    #[serde(default)]
    pub returns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDefinition {
    pub name: String,
    #[serde(default = "default_required")]
    pub required: bool,
}

fn default_required() -> bool {
    true
}

impl ServiceObjectDefinition {
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }
}

/// Builds a complete service object from `definition`.
///
/// All names become system names via [`make_system_name`]; default display
/// names are humanized from the name as written in the definition. On failure
/// the returned collection holds every error found. Warnings are returned
/// alongside a successful build.
///
/// Definitions are deserialized into plain strings, so build diagnostics carry
/// no [`Span`](crate::error::Span); they name the offending entry in their
/// message instead. Only JSON syntax errors from [`ServiceObjectDefinition::from_json`]
/// point at a line and column.
pub fn build_service_object(
    definition: &ServiceObjectDefinition,
    config: &Config,
) -> std::result::Result<(ServiceObject, ErrorCollection), ErrorCollection> {
    let mut builder = Builder {
        config,
        diagnostics: ErrorCollection::new(),
    };

    let service_object = builder.service_object(definition);
    if builder.diagnostics.has_errors() {
        return Err(builder.diagnostics);
    }

    match service_object {
        Some(service_object) => Ok((service_object, builder.diagnostics)),
        None => Err(builder.diagnostics),
    }
}

struct Builder<'a> {
    config: &'a Config,
    diagnostics: ErrorCollection,
}

impl Builder<'_> {
    fn service_object(&mut self, definition: &ServiceObjectDefinition) -> Option<ServiceObject> {
        let system_name = self.system_name(&definition.name, "service object");
        let display_name = display_name_for(&definition.name, definition.display_name.as_deref());

        let service_object = self.record(create_service_object(
            &system_name,
            &definition.description,
            Some(&display_name),
        ));

        let mut properties = Vec::with_capacity(definition.properties.len());
        let mut property_names = HashSet::new();
        for property_definition in &definition.properties {
            if let Some(property) = self.property(property_definition) {
                if !property_names.insert(property.name.clone()) {
                    self.diagnostics.add_error(duplicate("property", &property.name));
                    continue;
                }
                properties.push(property);
            }
        }

        let mut methods = Vec::with_capacity(definition.methods.len());
        let mut method_names = HashSet::new();
        for method_definition in &definition.methods {
            if let Some(method) = self.method(method_definition, &property_names) {
                if !method_names.insert(method.name.clone()) {
                    self.diagnostics.add_error(duplicate("method", &method.name));
                    continue;
                }
                methods.push(method);
            }
        }

        let mut service_object = service_object?;
        for property in properties {
            service_object.add_property(property);
        }
        for method in methods {
            service_object.add_method(method);
        }

        crate::debug_println!(
            "built {} with {} properties and {} methods",
            service_object.name,
            service_object.properties.len(),
            service_object.methods.len()
        );
        Some(service_object)
    }

    fn property(&mut self, definition: &PropertyDefinition) -> Option<Property> {
        let system_name = self.system_name(&definition.name, "property");
        let so_type = match SoType::from_name(&definition.so_type) {
            Some(so_type) => so_type,
            None => {
                self.diagnostics.add_error(
                    DescriptorError::new(
                        ErrorKind::UnknownType,
                        format!(
                            "property '{}' has unknown type '{}'",
                            definition.name, definition.so_type
                        ),
                    )
                    .with_note(format!(
                        "known types: {}",
                        SoType::ALL.map(|t| t.as_str()).join(", ")
                    )),
                );
                return None;
            }
        };

        let display_name = display_name_for(&definition.name, definition.display_name.as_deref());
        self.record(create_property(
            &system_name,
            &definition.description,
            so_type,
            Some(&display_name),
        ))
    }

    fn method(
        &mut self,
        definition: &MethodDefinition,
        declared: &HashSet<String>,
    ) -> Option<Method> {
        let system_name = self.system_name(&definition.name, "method");
        let Some(method_type) = MethodType::from_name(&definition.method_type) else {
            self.diagnostics.add_error(
                DescriptorError::new(
                    ErrorKind::UnknownType,
                    format!(
                        "method '{}' has unknown method type '{}'",
                        definition.name, definition.method_type
                    ),
                )
                .with_note(format!(
                    "known method types: {}",
                    MethodType::ALL.map(|t| t.as_str()).join(", ")
                )),
            );
            return None;
        };

        // Display name comes from the name as written, like every other descriptor
        let mut method = self.record(create_method(
            &system_name,
            &definition.description,
            method_type,
        ))?;
        method.metadata.display_name = humanize(&definition.name);

        let implicit_site_url = definition.site_url || self.config.site_url_on_every_method;
        if implicit_site_url {
            self.record(add_site_url_parameter(&mut method));
        }

        for parameter in &definition.parameters {
            let name = self.system_name(&parameter.name, "parameter");
            if implicit_site_url && name == SITE_URL_PARAMETER {
                // Already added; an explicit entry may only restate it
                if !parameter.required {
                    self.diagnostics.add_warning(DescriptorError::new(
                        ErrorKind::InvalidName,
                        format!(
                            "parameter '{}.{}' is always required; \"required\": false is ignored",
                            method.name, name
                        ),
                    ));
                }
                continue;
            }
            if method.parameter(&name).is_some() {
                self.diagnostics
                    .add_error(duplicate("parameter", &format!("{}.{}", method.name, name)));
                continue;
            }
            if self
                .record(add_string_parameter(&mut method, &name, parameter.required))
                .is_some()
            {
                if let Some(added) = method.method_parameters.last_mut() {
                    added.metadata.display_name = humanize(&parameter.name);
                }
            }
        }

        for name in self.property_refs(&method.name, "input", &definition.inputs, declared) {
            method.add_input_property(name);
        }
        for name in self.property_refs(
            &method.name,
            "required input",
            &definition.required_inputs,
            declared,
        ) {
            method.add_required_property(name);
        }
        for name in self.property_refs(&method.name, "return", &definition.returns, declared) {
            method.add_return_property(name);
        }

        Some(method)
    }

    /// Sanitizes `name` and flags characters the host will not accept.
    fn system_name(&mut self, name: &str, what: &str) -> String {
        let system_name = make_system_name(name);
        if !system_name.is_empty() && !is_simple_alphanumeric(&system_name) {
            let diagnostic = DescriptorError::new(
                ErrorKind::InvalidName,
                format!(
                    "{} name '{}' contains characters other than letters and digits",
                    what, system_name
                ),
            );
            if self.config.strict_names {
                self.diagnostics.add_error(diagnostic);
            } else {
                self.diagnostics.add_warning(diagnostic);
            }
        }
        system_name
    }

    /// Sanitizes one of a method's property lists, dropping undeclared and repeated names.
    fn property_refs(
        &mut self,
        method: &str,
        list: &str,
        names: &[String],
        declared: &HashSet<String>,
    ) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut refs = Vec::with_capacity(names.len());
        for name in names {
            let name = make_system_name(name);
            if !self.check_declared(method, &name, declared) {
                continue;
            }
            if !seen.insert(name.clone()) {
                self.diagnostics.add_error(duplicate(
                    &format!("{} property", list),
                    &format!("{}.{}", method, name),
                ));
                continue;
            }
            refs.push(name);
        }
        refs
    }

    fn check_declared(&mut self, method: &str, property: &str, declared: &HashSet<String>) -> bool {
        if declared.contains(property) {
            return true;
        }
        self.diagnostics.add_error(DescriptorError::new(
            ErrorKind::UndeclaredProperty,
            format!(
                "method '{}' refers to undeclared property '{}'",
                method, property
            ),
        ));
        false
    }

    fn record<T>(&mut self, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.diagnostics.add_error(error);
                None
            }
        }
    }
}

fn display_name_for(name: &str, explicit: Option<&str>) -> String {
    match explicit {
        Some(display_name) => display_name.to_string(),
        None => humanize(name),
    }
}

fn duplicate(what: &str, name: &str) -> DescriptorError {
    DescriptorError::new(
        ErrorKind::DuplicateName,
        format!("{} '{}' is defined more than once", what, name),
    )
}
