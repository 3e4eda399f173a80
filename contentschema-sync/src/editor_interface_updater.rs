//! Editor interface reconciliation for a content type that already exists remotely.

use crate::cancel::CancellationSignal;
use crate::client::ManagementClient;
use crate::comparer::ControlComparer;
use crate::error::{ClientError, SchemaResult};
use crate::report::Outcome;
use contentschema_model::{EditorInterface, EditorInterfaceControl};
use std::sync::Arc;
use tracing::{debug, info};

/// Brings one content type's editor controls in line with the desired list.
pub struct EditorInterfaceUpdater {
    client: Arc<dyn ManagementClient>,
    comparer: ControlComparer,
}

impl EditorInterfaceUpdater {
    pub fn new(client: Arc<dyn ManagementClient>, comparer: ControlComparer) -> Self {
        Self { client, comparer }
    }

    /// Fetches the editor interface of `content_type_id` and updates it only
    /// when the desired controls are not already in place.
    ///
    /// Must run after the content type was created or updated: controls bind
    /// to fields that have to exist remotely.
    pub async fn sync_editor_interface(
        &self,
        content_type_id: &str,
        desired: &[EditorInterfaceControl],
        cancel: &CancellationSignal,
    ) -> SchemaResult<Outcome> {
        cancel.check()?;
        let mut editor_interface = self.client.editor_interface(content_type_id).await?;

        if self.comparer.equivalent(desired, &editor_interface.controls) {
            debug!("Editor interface of {} is up to date", content_type_id);
            return Ok(Outcome::Unchanged);
        }

        let version = editor_interface.version().ok_or_else(|| {
            ClientError::Protocol(format!(
                "editor interface of {content_type_id} has no version"
            ))
        })?;
        apply_controls(&mut editor_interface, desired);

        cancel.check()?;
        self.client
            .update_editor_interface(&editor_interface, content_type_id, version)
            .await?;

        info!("Updated editor interface of {}", content_type_id);
        Ok(Outcome::Updated)
    }
}

/// Replaces controls by field id in place and appends the ones not yet present.
///
/// A desired control without a widget id or namespace keeps the remote one.
fn apply_controls(editor_interface: &mut EditorInterface, desired: &[EditorInterfaceControl]) {
    for control in desired {
        match editor_interface
            .controls
            .iter_mut()
            .find(|c| c.field_id == control.field_id)
        {
            Some(slot) => {
                let mut merged = control.clone();
                if merged.widget_id.is_none() {
                    merged.widget_id = slot.widget_id.take();
                }
                if merged.widget_namespace.is_none() {
                    merged.widget_namespace = slot.widget_namespace.take();
                }
                *slot = merged;
            }
            None => editor_interface.controls.push(control.clone()),
        }
    }
}
