//! Service object descriptors and the factories that build them.
//!
//! Descriptors are plain records handed to the host platform. The factories
//! fill in display names with [`humanize`] and host types from [`SoType`], and
//! reject blank identifiers up front.

use crate::error::{DescriptorError, ErrorKind, Result};
use crate::naming::humanize;
use crate::types::{MethodType, SoType, TEXT_HOST_TYPE};
use serde::{Deserialize, Serialize};

/// System name of the parameter carrying the site a method operates on
pub const SITE_URL_PARAMETER: &str = "SiteURL";

/// Human-facing metadata attached to every descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaData {
    pub display_name: String,
    pub description: String,
}

impl MetaData {
    pub fn new(display_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub name: String,
    pub so_type: SoType,
    pub host_type: String,
    pub metadata: MetaData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodParameter {
    pub name: String,
    pub host_type: String,
    pub so_type: SoType,
    pub is_required: bool,
    pub metadata: MetaData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    pub name: String,
    pub method_type: MethodType,
    pub metadata: MetaData,
    /// Names of the properties the method accepts as input
    pub input_properties: Vec<String>,
    /// Subset of the input properties that must be supplied
    pub required_properties: Vec<String>,
    /// Names of the properties the method returns
    pub return_properties: Vec<String>,
    pub method_parameters: Vec<MethodParameter>,
}

impl Method {
    pub fn add_input_property(&mut self, name: impl Into<String>) {
        self.input_properties.push(name.into());
    }

    /// Marks a property as required input, adding it to the inputs if needed.
    pub fn add_required_property(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.input_properties.contains(&name) {
            self.input_properties.push(name.clone());
        }
        self.required_properties.push(name);
    }

    pub fn add_return_property(&mut self, name: impl Into<String>) {
        self.return_properties.push(name.into());
    }

    pub fn parameter(&self, name: &str) -> Option<&MethodParameter> {
        self.method_parameters.iter().find(|p| p.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceObject {
    pub name: String,
    pub metadata: MetaData,
    pub active: bool,
    pub properties: Vec<Property>,
    pub methods: Vec<Method>,
}

impl ServiceObject {
    pub fn add_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    pub fn add_method(&mut self, method: Method) {
        self.methods.push(method);
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }
}

fn require_name(name: &str, what: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(DescriptorError::empty_name(what));
    }
    Ok(())
}

/// Builds a property descriptor.
///
/// When `display_name` is `None` the display name is `humanize(name)`. The
/// host type always follows `so_type`. Property names may not contain spaces.
pub fn create_property(
    name: &str,
    description: &str,
    so_type: SoType,
    display_name: Option<&str>,
) -> Result<Property> {
    require_name(name, "property")?;
    if name.contains(' ') {
        return Err(DescriptorError::new(
            ErrorKind::InvalidName,
            format!("property name '{}' contains spaces", name),
        )
        .with_help("pass the name through make_system_name first"));
    }

    let display_name = display_name.map_or_else(|| humanize(name), str::to_string);
    crate::debug_println!("property {} ({}) as '{}'", name, so_type, display_name);

    Ok(Property {
        name: name.to_string(),
        so_type,
        host_type: so_type.host_type().to_string(),
        metadata: MetaData::new(display_name, description),
    })
}

/// Builds a method descriptor whose display name is `humanize(name)`.
pub fn create_method(name: &str, description: &str, method_type: MethodType) -> Result<Method> {
    require_name(name, "method")?;
    crate::debug_println!("method {} ({})", name, method_type);

    Ok(Method {
        name: name.to_string(),
        method_type,
        metadata: MetaData::new(humanize(name), description),
        input_properties: Vec::new(),
        required_properties: Vec::new(),
        return_properties: Vec::new(),
        method_parameters: Vec::new(),
    })
}

/// Builds an active service object descriptor with no properties or methods.
pub fn create_service_object(
    name: &str,
    description: &str,
    display_name: Option<&str>,
) -> Result<ServiceObject> {
    require_name(name, "service object")?;
    let display_name = display_name.map_or_else(|| humanize(name), str::to_string);
    crate::debug_println!("service object {} as '{}'", name, display_name);

    Ok(ServiceObject {
        name: name.to_string(),
        metadata: MetaData::new(display_name, description),
        active: true,
        properties: Vec::new(),
        methods: Vec::new(),
    })
}

/// Appends the required [`SITE_URL_PARAMETER`] text parameter to `method`.
pub fn add_site_url_parameter(method: &mut Method) -> Result<()> {
    add_string_parameter(method, SITE_URL_PARAMETER, true)
}

/// Appends one text parameter named `name` to `method`.
///
/// Existing parameters are left in place and in order; the new one goes last.
pub fn add_string_parameter(method: &mut Method, name: &str, is_required: bool) -> Result<()> {
    require_name(name, "parameter")?;
    crate::debug_println!(
        "parameter {}.{} (required: {})",
        method.name,
        name,
        is_required
    );

    method.method_parameters.push(MethodParameter {
        name: name.to_string(),
        host_type: TEXT_HOST_TYPE.to_string(),
        so_type: SoType::Text,
        is_required,
        metadata: MetaData::new(humanize(name), ""),
    });
    Ok(())
}

/// [`add_string_parameter`] with `is_required` set.
pub fn add_required_string_parameter(method: &mut Method, name: &str) -> Result<()> {
    add_string_parameter(method, name, true)
}
