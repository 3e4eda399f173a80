//! Content model reconciliation against a remote content-management backend.
//!
//! Given the desired content types of an application (see
//! [`contentschema_model::ContentSchema`]), [`SchemaManager`] issues the minimal
//! set of create, update and activate calls that make the remote schema match.
//!
//! # Architecture
//!
//! - **Comparers**: pure structural equality of fields, content types and
//!   editor controls
//! - **Updaters**: per-entity state machines, one for the content type body and
//!   one for its editor interface
//! - **Manager**: fetches the existing schema once, pairs it with the desired
//!   set by id and runs the updaters entry by entry
//! - **Client**: the [`ManagementClient`] seam, with a Contentful HTTP
//!   implementation
//!
//! ## Reconciliation run
//!
//! 1. **Fetch**: list every existing content type in one paginated read
//! 2. **Match**: pair each desired schema with zero or one existing type
//! 3. **Content type**: create, or update when it differs, then activate
//! 4. **Editor interface**: fetch, and update when the desired controls differ
//!
//! Entries run sequentially in caller order; the first failure aborts the run.
//!
//! # Example
//!
//! ```no_run
//! use contentschema_model::{ContentSchema, ContentType, Field};
//! use contentschema_sync::{ContentfulClient, ContentfulConfig, SchemaManager};
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ContentfulClient::new(ContentfulConfig {
//!     space_id: "my-space".to_string(),
//!     management_token: "CFPAT-...".to_string(),
//!     ..Default::default()
//! })?;
//!
//! let desired = vec![ContentSchema::new(
//!     ContentType::new("post", "Post").with_field(Field::symbol("title").required()),
//! )];
//!
//! let report = SchemaManager::new(Arc::new(client)).update_schema(&desired).await?;
//! println!("{} created", report.created());
//! # Ok(())
//! # }
//! ```

mod cancel;
pub mod client;
pub mod comparer;
mod content_type_updater;
mod editor_interface_updater;
mod error;
mod manager;
pub mod report;

pub use cancel::CancellationSignal;
pub use client::{ContentfulClient, ContentfulConfig, ManagementClient};
pub use comparer::{ContentTypeComparer, ContentTypeDifference, ControlComparer, FieldComparer};
pub use content_type_updater::ContentTypeUpdater;
pub use editor_interface_updater::EditorInterfaceUpdater;
pub use error::{ClientError, ClientResult, SchemaError, SchemaResult};
pub use manager::SchemaManager;
pub use report::{EntityReport, Outcome, SyncReport};
