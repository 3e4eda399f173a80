use crate::content_type::ContentType;
use crate::editor::EditorInterfaceControl;
use serde::{Deserialize, Serialize};

/// The desired state of one content type: its shape and its editor controls.
///
/// Produced locally (from a [`ContentModel`] impl or a schema file) and read,
/// never modified, by the reconciliation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSchema {
    pub content_type: ContentType,
    #[serde(default)]
    pub controls: Vec<EditorInterfaceControl>,
}

impl ContentSchema {
    pub fn new(content_type: ContentType) -> Self {
        Self {
            content_type,
            controls: Vec::new(),
        }
    }

    /// Appends an editor control. Control order is preserved.
    pub fn with_control(mut self, control: EditorInterfaceControl) -> Self {
        self.controls.push(control);
        self
    }

    /// The stable content type id this schema reconciles.
    pub fn id(&self) -> &str {
        self.content_type.id()
    }
}

/// Implemented by application types that map onto a remote content type.
///
/// ```
/// use contentschema_model::{ContentModel, ContentSchema, ContentType, EditorInterfaceControl, Field};
///
/// struct BlogPost;
///
/// impl ContentModel for BlogPost {
///     fn content_schema() -> ContentSchema {
///         ContentSchema::new(
///             ContentType::new("blogPost", "Blog post")
///                 .with_display_field("title")
///                 .with_field(Field::symbol("title").required())
///                 .with_field(Field::rich_text("body")),
///         )
///         .with_control(EditorInterfaceControl::new("title", "singleLine"))
///     }
/// }
///
/// assert_eq!(BlogPost::content_schema().id(), "blogPost");
/// ```
pub trait ContentModel {
    fn content_schema() -> ContentSchema;
}
