//! Create-or-update-and-activate of a single content type.

use crate::cancel::CancellationSignal;
use crate::client::ManagementClient;
use crate::comparer::ContentTypeComparer;
use crate::error::{ClientError, SchemaResult};
use crate::report::Outcome;
use contentschema_model::ContentType;
use std::sync::Arc;
use tracing::{debug, info};

/// Brings one remote content type in line with its desired shape.
pub struct ContentTypeUpdater {
    client: Arc<dyn ManagementClient>,
    comparer: ContentTypeComparer,
}

impl ContentTypeUpdater {
    pub fn new(client: Arc<dyn ManagementClient>, comparer: ContentTypeComparer) -> Self {
        Self { client, comparer }
    }

    /// Creates the content type when `existing` is `None`, otherwise updates it
    /// if it differs. Any write is followed by activation at the version the
    /// write returned. Returns the resulting remote content type.
    pub async fn sync_content_type(
        &self,
        desired: &ContentType,
        existing: Option<ContentType>,
        cancel: &CancellationSignal,
    ) -> SchemaResult<(ContentType, Outcome)> {
        match existing {
            None => {
                let mut draft = desired.clone();
                draft.sys.version = None;

                let created = self.submit_and_activate(&draft, None, cancel).await?;
                info!("Created content type {}", created.id());
                Ok((created, Outcome::Created))
            }
            Some(mut existing) => {
                let differences = self.comparer.differences(desired, &existing);
                if differences.is_empty() {
                    debug!("Content type {} is up to date", existing.id());
                    return Ok((existing, Outcome::Unchanged));
                }

                debug!(
                    "Content type {} differs: {}",
                    existing.id(),
                    differences
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ")
                );

                let version = existing.version();
                existing.merge_from(desired);

                let updated = self.submit_and_activate(&existing, version, cancel).await?;
                info!("Updated content type {}", updated.id());
                Ok((updated, Outcome::Updated))
            }
        }
    }

    /// Writes the content type, then activates it at the version the write returned.
    async fn submit_and_activate(
        &self,
        content_type: &ContentType,
        version: Option<u64>,
        cancel: &CancellationSignal,
    ) -> SchemaResult<ContentType> {
        cancel.check()?;
        let stored = self
            .client
            .create_or_update_content_type(content_type, version)
            .await?;

        let stored_version = stored.version().ok_or_else(|| {
            ClientError::Protocol(format!(
                "content type {} was stored without a version",
                content_type.id()
            ))
        })?;

        cancel.check()?;
        self.client
            .activate_content_type(stored.id(), stored_version)
            .await?;

        Ok(stored)
    }
}
