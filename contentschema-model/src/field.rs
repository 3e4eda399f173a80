use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The data type of a content type field.
///
/// Types this crate has no variant for are kept verbatim in `Other`, so a
/// space holding newer field types still lists and round-trips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Symbol,
    Text,
    RichText,
    Integer,
    Number,
    Date,
    Location,
    Boolean,
    Link,
    ResourceLink,
    Array,
    Object,
    #[serde(untagged)]
    Other(String),
}

/// What a `Link` field (or `Link` array item) points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkType {
    Entry,
    Asset,
}

/// A single validation rule, kept as the JSON object the remote API uses,
/// e.g. `{"size": {"max": 256}}` or `{"linkContentType": ["author"]}`.
///
/// Two rules are the same when their JSON content is equal; key order inside
/// the object does not matter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Validation(pub Value);

impl Validation {
    pub fn new(rule: Value) -> Self {
        Self(rule)
    }

    fn single(key: &str, value: Value) -> Self {
        let mut rule = Map::new();
        rule.insert(key.to_string(), value);
        Self(Value::Object(rule))
    }

    /// Length (strings) or item count (arrays) bounds.
    pub fn size(min: Option<u64>, max: Option<u64>) -> Self {
        let mut bounds = Map::new();
        if let Some(min) = min {
            bounds.insert("min".into(), min.into());
        }
        if let Some(max) = max {
            bounds.insert("max".into(), max.into());
        }
        Self::single("size", Value::Object(bounds))
    }

    /// Restricts a value to a fixed set of options.
    pub fn one_of<S: Into<String>>(options: impl IntoIterator<Item = S>) -> Self {
        let options = options.into_iter().map(|o| Value::String(o.into())).collect();
        Self::single("in", Value::Array(options))
    }

    /// Restricts entry links to the given content type ids.
    pub fn link_content_type<S: Into<String>>(ids: impl IntoIterator<Item = S>) -> Self {
        let ids = ids.into_iter().map(|id| Value::String(id.into())).collect();
        Self::single("linkContentType", Value::Array(ids))
    }

    pub fn unique() -> Self {
        Self::single("unique", Value::Bool(true))
    }

    pub fn regexp(pattern: impl Into<String>) -> Self {
        let mut inner = Map::new();
        inner.insert("pattern".into(), Value::String(pattern.into()));
        Self::single("regexp", Value::Object(inner))
    }

    pub fn rule(&self) -> &Value {
        &self.0
    }
}

/// Item shape of an `Array` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldItems {
    #[serde(rename = "type")]
    pub item_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<LinkType>,
    #[serde(default)]
    pub validations: Vec<Validation>,
}

/// One field of a content type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<LinkType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<FieldItems>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub localized: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub omitted: bool,
    #[serde(default)]
    pub validations: Vec<Validation>,
}

impl Field {
    /// Creates an optional, non-localized field. The display name defaults to the id.
    pub fn new(id: impl Into<String>, field_type: FieldType) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            field_type,
            link_type: None,
            items: None,
            required: false,
            localized: false,
            disabled: false,
            omitted: false,
            validations: Vec::new(),
        }
    }

    /// Shorthand for a short text field (titles, slugs).
    pub fn symbol(id: impl Into<String>) -> Self {
        Self::new(id, FieldType::Symbol)
    }

    /// Shorthand for a long text field.
    pub fn text(id: impl Into<String>) -> Self {
        Self::new(id, FieldType::Text)
    }

    pub fn rich_text(id: impl Into<String>) -> Self {
        Self::new(id, FieldType::RichText)
    }

    pub fn integer(id: impl Into<String>) -> Self {
        Self::new(id, FieldType::Integer)
    }

    pub fn number(id: impl Into<String>) -> Self {
        Self::new(id, FieldType::Number)
    }

    pub fn date(id: impl Into<String>) -> Self {
        Self::new(id, FieldType::Date)
    }

    pub fn location(id: impl Into<String>) -> Self {
        Self::new(id, FieldType::Location)
    }

    pub fn boolean(id: impl Into<String>) -> Self {
        Self::new(id, FieldType::Boolean)
    }

    /// Shorthand for a free-form JSON field.
    pub fn object(id: impl Into<String>) -> Self {
        Self::new(id, FieldType::Object)
    }

    /// Shorthand for a link to another entry.
    pub fn link_entry(id: impl Into<String>) -> Self {
        let mut field = Self::new(id, FieldType::Link);
        field.link_type = Some(LinkType::Entry);
        field
    }

    /// Shorthand for a link to an asset.
    pub fn link_asset(id: impl Into<String>) -> Self {
        let mut field = Self::new(id, FieldType::Link);
        field.link_type = Some(LinkType::Asset);
        field
    }

    /// Shorthand for a list of short text values (tags).
    pub fn array_of_symbols(id: impl Into<String>) -> Self {
        Self::array(id, FieldType::Symbol, None)
    }

    /// Shorthand for a list of entry links.
    pub fn array_of_entries(id: impl Into<String>) -> Self {
        Self::array(id, FieldType::Link, Some(LinkType::Entry))
    }

    /// Shorthand for a list of asset links.
    pub fn array_of_assets(id: impl Into<String>) -> Self {
        Self::array(id, FieldType::Link, Some(LinkType::Asset))
    }

    fn array(id: impl Into<String>, item_type: FieldType, link_type: Option<LinkType>) -> Self {
        let mut field = Self::new(id, FieldType::Array);
        field.items = Some(FieldItems {
            item_type,
            link_type,
            validations: Vec::new(),
        });
        field
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn localized(mut self) -> Self {
        self.localized = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Hides the field from delivery API responses.
    pub fn omitted(mut self) -> Self {
        self.omitted = true;
        self
    }

    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validations.push(validation);
        self
    }

    /// Adds a validation applied to each item of an `Array` field.
    /// Has no effect on non-array fields.
    pub fn with_item_validation(mut self, validation: Validation) -> Self {
        if let Some(items) = self.items.as_mut() {
            items.validations.push(validation);
        }
        self
    }
}
