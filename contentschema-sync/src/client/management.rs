//! Management client abstraction trait.
//!
//! Defines the remote operations the reconciliation engine relies on.

use crate::error::ClientResult;
use async_trait::async_trait;
use contentschema_model::{ContentType, EditorInterface};

/// Abstract content-management backend.
///
/// Every write takes the version the caller last observed; the backend rejects
/// stale versions with [`ClientError::VersionConflict`](crate::ClientError::VersionConflict).
#[async_trait]
pub trait ManagementClient: Send + Sync {
    /// Lists every content type in the configured space and environment.
    async fn content_types(&self) -> ClientResult<Vec<ContentType>>;

    /// Creates the content type when `version` is `None`, otherwise updates it.
    /// Returns the stored content type carrying its new version.
    async fn create_or_update_content_type(
        &self,
        content_type: &ContentType,
        version: Option<u64>,
    ) -> ClientResult<ContentType>;

    /// Activates (publishes) the content type at the given version.
    async fn activate_content_type(&self, content_type_id: &str, version: u64) -> ClientResult<()>;

    /// Fetches the editor interface of a content type.
    async fn editor_interface(&self, content_type_id: &str) -> ClientResult<EditorInterface>;

    /// Replaces the editor interface of a content type.
    async fn update_editor_interface(
        &self,
        editor_interface: &EditorInterface,
        content_type_id: &str,
        version: u64,
    ) -> ClientResult<()>;
}
