use crate::content_type::SystemProperties;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Assigns an authoring widget to one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorInterfaceControl {
    pub field_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget_namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Map<String, Value>>,
}

impl EditorInterfaceControl {
    pub fn new(field_id: impl Into<String>, widget_id: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
            widget_id: Some(widget_id.into()),
            widget_namespace: None,
            settings: None,
        }
    }

    /// Adds one widget setting, e.g. `("helpText", "Shown under the input")`.
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.settings
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.widget_namespace = Some(namespace.into());
        self
    }

    /// Widget settings, with an absent map read as empty.
    pub fn settings_or_empty(&self) -> Map<String, Value> {
        self.settings.clone().unwrap_or_default()
    }
}

/// The editor interface of one content type.
///
/// Keys the remote API returns besides `sys` and `controls` (sidebar,
/// editor layout, ...) are kept in `extra` so an update sends them back as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorInterface {
    pub sys: SystemProperties,
    #[serde(default)]
    pub controls: Vec<EditorInterfaceControl>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EditorInterface {
    pub fn new(sys: SystemProperties, controls: Vec<EditorInterfaceControl>) -> Self {
        Self {
            sys,
            controls,
            extra: Map::new(),
        }
    }

    pub fn control(&self, field_id: &str) -> Option<&EditorInterfaceControl> {
        self.controls.iter().find(|c| c.field_id == field_id)
    }

    pub fn version(&self) -> Option<u64> {
        self.sys.version
    }
}
