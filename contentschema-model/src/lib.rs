//! Content model types for contentschema.
//!
//! Defines the types shared by the reconciliation engine and the management
//! API client:
//! - [`ContentType`]: a remote schema definition (fields, display field, version)
//! - [`Field`]: one field of a content type, with its flags and validations
//! - [`EditorInterface`]: per-content-type widget assignments
//! - [`ContentSchema`]: the desired shape of one content type plus its controls
//! - [`ContentModel`]: implemented by application types that declare a schema
//!
//! All types serialize to the Contentful Management API JSON shape, so the same
//! values flow through the HTTP client and through schema files on disk.

mod content_type;
mod editor;
mod field;
mod schema;

pub use content_type::{ContentType, SystemProperties};
pub use editor::{EditorInterface, EditorInterfaceControl};
pub use field::{Field, FieldItems, FieldType, LinkType, Validation};
pub use schema::{ContentModel, ContentSchema};
