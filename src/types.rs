/// Logical and host type definitions for service object metadata
///
/// A property's logical type (`SoType`) is what the host platform's designer
/// shows; the host type is the native type name the platform binds values to.
/// The mapping between the two lives here so descriptors never disagree with it.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Host type name used for every text-shaped value
pub const TEXT_HOST_TYPE: &str = "System.String";

/// Logical data types a service object property or parameter can have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoType {
    /// Auto-incrementing integer key
    Autonumber,
    /// Auto-generated GUID key
    AutoGuid,
    DateTime,
    Date,
    Time,
    Decimal,
    /// Untyped value, carried as text
    Default,
    File,
    Guid,
    HyperLink,
    Image,
    /// Long text
    Memo,
    /// Delimited list of values, carried as text
    MultiValue,
    Number,
    Text,
    Xml,
    /// Boolean
    YesNo,
}

impl SoType {
    pub const ALL: [SoType; 17] = [
        SoType::Autonumber,
        SoType::AutoGuid,
        SoType::DateTime,
        SoType::Date,
        SoType::Time,
        SoType::Decimal,
        SoType::Default,
        SoType::File,
        SoType::Guid,
        SoType::HyperLink,
        SoType::Image,
        SoType::Memo,
        SoType::MultiValue,
        SoType::Number,
        SoType::Text,
        SoType::Xml,
        SoType::YesNo,
    ];

    /// Host-native type name for this logical type
    pub fn host_type(&self) -> &'static str {
        match self {
            SoType::Autonumber | SoType::Number => "System.Int32",
            SoType::AutoGuid | SoType::Guid => "System.Guid",
            SoType::DateTime | SoType::Date | SoType::Time => "System.DateTime",
            SoType::Decimal => "System.Decimal",
            SoType::YesNo => "System.Boolean",
            SoType::Default
            | SoType::File
            | SoType::HyperLink
            | SoType::Image
            | SoType::Memo
            | SoType::MultiValue
            | SoType::Text
            | SoType::Xml => TEXT_HOST_TYPE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SoType::Autonumber => "Autonumber",
            SoType::AutoGuid => "AutoGuid",
            SoType::DateTime => "DateTime",
            SoType::Date => "Date",
            SoType::Time => "Time",
            SoType::Decimal => "Decimal",
            SoType::Default => "Default",
            SoType::File => "File",
            SoType::Guid => "Guid",
            SoType::HyperLink => "HyperLink",
            SoType::Image => "Image",
            SoType::Memo => "Memo",
            SoType::MultiValue => "MultiValue",
            SoType::Number => "Number",
            SoType::Text => "Text",
            SoType::Xml => "Xml",
            SoType::YesNo => "YesNo",
        }
    }

    /// Parse a logical type name, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<SoType> {
        Self::ALL
            .into_iter()
            .find(|so_type| so_type.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for SoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a service object method does when the host executes it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MethodType {
    Create,
    Read,
    Update,
    Delete,
    List,
    Execute,
}

impl MethodType {
    pub const ALL: [MethodType; 6] = [
        MethodType::Create,
        MethodType::Read,
        MethodType::Update,
        MethodType::Delete,
        MethodType::List,
        MethodType::Execute,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MethodType::Create => "Create",
            MethodType::Read => "Read",
            MethodType::Update => "Update",
            MethodType::Delete => "Delete",
            MethodType::List => "List",
            MethodType::Execute => "Execute",
        }
    }

    /// Parse a method type name, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<MethodType> {
        Self::ALL
            .into_iter()
            .find(|method_type| method_type.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for MethodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
