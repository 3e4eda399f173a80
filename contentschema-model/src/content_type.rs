use crate::field::Field;
use serde::{Deserialize, Serialize};

/// The `sys` envelope carried by every remote entity.
///
/// `version` is the optimistic-concurrency counter. It is `None` for a
/// content type that has never been created remotely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemProperties {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
}

impl SystemProperties {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: None,
        }
    }

    pub fn with_version(id: impl Into<String>, version: u64) -> Self {
        Self {
            id: id.into(),
            version: Some(version),
        }
    }
}

/// A remote content type: the schema of one kind of content entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentType {
    pub sys: SystemProperties,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_field: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl ContentType {
    /// Creates an unversioned content type with no fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            sys: SystemProperties::new(id),
            name: name.into(),
            description: None,
            display_field: None,
            fields: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the field used as the entry title in authoring tools.
    pub fn with_display_field(mut self, field_id: impl Into<String>) -> Self {
        self.display_field = Some(field_id.into());
        self
    }

    /// Appends a field. Field order is preserved remotely.
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_version(mut self, version: u64) -> Self {
        self.sys.version = Some(version);
        self
    }

    pub fn id(&self) -> &str {
        &self.sys.id
    }

    pub fn version(&self) -> Option<u64> {
        self.sys.version
    }

    /// Looks up a field by id.
    pub fn field(&self, field_id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == field_id)
    }

    /// Overwrites metadata and fields with the desired shape while keeping
    /// this entity's `sys` (id and current version).
    pub fn merge_from(&mut self, desired: &ContentType) {
        self.name = desired.name.clone();
        self.description = desired.description.clone();
        self.display_field = desired.display_field.clone();
        self.fields = desired.fields.clone();
    }
}
