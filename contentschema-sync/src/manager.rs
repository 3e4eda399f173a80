//! Schema manager: matches desired schemas to remote content types and
//! drives the per-entity updaters in order.

use crate::cancel::CancellationSignal;
use crate::client::ManagementClient;
use crate::comparer::{ContentTypeComparer, ControlComparer, FieldComparer};
use crate::content_type_updater::ContentTypeUpdater;
use crate::editor_interface_updater::EditorInterfaceUpdater;
use crate::error::{SchemaError, SchemaResult};
use crate::report::{EntityReport, SyncReport};
use contentschema_model::{ContentSchema, ContentType};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// A desired schema paired with the remote content type of the same id, if any.
type MatchedSchema<'a> = (&'a ContentSchema, Option<ContentType>);

/// The reconciliation engine.
pub struct SchemaManager {
    client: Arc<dyn ManagementClient>,
    content_types: ContentTypeUpdater,
    editor_interfaces: EditorInterfaceUpdater,
}

impl SchemaManager {
    pub fn new(client: Arc<dyn ManagementClient>) -> Self {
        let content_types = ContentTypeUpdater::new(
            client.clone(),
            ContentTypeComparer::new(FieldComparer::new()),
        );
        let editor_interfaces = EditorInterfaceUpdater::new(client.clone(), ControlComparer::new());

        Self {
            client,
            content_types,
            editor_interfaces,
        }
    }

    /// Reconciles the remote schema with `desired`, entries in the given order.
    pub async fn update_schema(&self, desired: &[ContentSchema]) -> SchemaResult<SyncReport> {
        self.update_schema_with_cancel(desired, &CancellationSignal::new())
            .await
    }

    /// Like [`update_schema`](Self::update_schema), aborting before the next
    /// remote call once `cancel` is raised.
    ///
    /// Stops at the first failing entry and returns it wrapped in
    /// [`SchemaError::Entity`]; entries after it are not attempted.
    pub async fn update_schema_with_cancel(
        &self,
        desired: &[ContentSchema],
        cancel: &CancellationSignal,
    ) -> SchemaResult<SyncReport> {
        cancel.check()?;
        let existing = self.client.content_types().await?;
        let matched = match_content_types(desired, existing)?;

        let mut report = SyncReport::default();
        for (schema, existing) in matched {
            match self.sync_entry(schema, existing, cancel).await {
                Ok(entry) => report.push(entry),
                Err(e) => {
                    warn!("Failed to update content type {}: {}", schema.id(), e);
                    return Err(SchemaError::Entity {
                        id: schema.id().to_string(),
                        reconciled: report.entries.len(),
                        source: Box::new(e),
                    });
                }
            }
        }

        info!(
            "Schema reconciled: {} created, {} updated, {} editor interfaces updated",
            report.created(),
            report.updated(),
            report.editor_interfaces_updated()
        );
        Ok(report)
    }

    async fn sync_entry(
        &self,
        schema: &ContentSchema,
        existing: Option<ContentType>,
        cancel: &CancellationSignal,
    ) -> SchemaResult<EntityReport> {
        let (content_type, content_type_outcome) = self
            .content_types
            .sync_content_type(&schema.content_type, existing, cancel)
            .await?;

        let editor_interface_outcome = self
            .editor_interfaces
            .sync_editor_interface(content_type.id(), &schema.controls, cancel)
            .await?;

        Ok(EntityReport {
            id: schema.id().to_string(),
            content_type: content_type_outcome,
            editor_interface: editor_interface_outcome,
        })
    }
}

/// Pairs each desired schema with at most one existing content type by id.
///
/// Every pair is resolved before any write happens, so an ambiguous id fails
/// the run without touching the remote side.
fn match_content_types(
    desired: &[ContentSchema],
    existing: Vec<ContentType>,
) -> SchemaResult<Vec<MatchedSchema<'_>>> {
    let mut by_id: HashMap<String, Vec<ContentType>> = HashMap::new();
    for content_type in existing {
        by_id
            .entry(content_type.id().to_string())
            .or_default()
            .push(content_type);
    }

    desired
        .iter()
        .map(|schema| {
            let found = match by_id.get(schema.id()).map(Vec::as_slice) {
                None | Some([]) => None,
                Some([single]) => Some(single.clone()),
                Some(many) => {
                    return Err(SchemaError::AmbiguousMatch {
                        id: schema.id().to_string(),
                        count: many.len(),
                    });
                }
            };
            Ok((schema, found))
        })
        .collect()
}
