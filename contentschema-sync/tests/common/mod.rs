//! Shared test helpers: an in-memory management backend that records calls.

#![allow(dead_code)]

use async_trait::async_trait;
use contentschema_model::{ContentType, EditorInterface, SystemProperties};
use contentschema_sync::{CancellationSignal, ClientError, ClientResult, ManagementClient};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// One recorded remote call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FetchContentTypes,
    CreateOrUpdate {
        id: String,
        version: Option<u64>,
        fields: Vec<String>,
    },
    Activate {
        id: String,
        version: u64,
    },
    FetchEditorInterface {
        id: String,
    },
    UpdateEditorInterface {
        id: String,
        version: u64,
    },
}

/// Which call kind an injected failure applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    CreateOrUpdate,
    Activate,
    FetchEditorInterface,
    UpdateEditorInterface,
}

#[derive(Default)]
struct State {
    /// Listing as returned by `content_types`, duplicates allowed.
    content_types: Vec<ContentType>,
    editor_interfaces: HashMap<String, EditorInterface>,
    calls: Vec<Call>,
    failures: Vec<(Op, String)>,
    cancel_after: Option<(Op, CancellationSignal)>,
}

/// In-memory backend with Contentful-like versioning: a write bumps the
/// version, activation bumps it again, and stale versions are rejected.
#[derive(Clone, Default)]
pub struct FakeClient {
    state: Arc<Mutex<State>>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds existing content types, each with an empty editor interface at version 1.
    pub fn with_content_types(content_types: Vec<ContentType>) -> Self {
        let client = Self::new();
        {
            let mut state = client.state.lock().unwrap();
            for ct in &content_types {
                state
                    .editor_interfaces
                    .insert(ct.id().to_string(), empty_editor_interface());
            }
            state.content_types = content_types;
        }
        client
    }

    pub fn set_editor_interface(&self, content_type_id: &str, editor_interface: EditorInterface) {
        self.state
            .lock()
            .unwrap()
            .editor_interfaces
            .insert(content_type_id.to_string(), editor_interface);
    }

    /// Makes the next matching call for `id` fail with an API error.
    pub fn fail_on(&self, op: Op, id: &str) {
        self.state.lock().unwrap().failures.push((op, id.to_string()));
    }

    /// Raises `signal` right after the first call of kind `op` completes.
    pub fn cancel_after(&self, op: Op, signal: CancellationSignal) {
        self.state.lock().unwrap().cancel_after = Some((op, signal));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    pub fn content_type(&self, id: &str) -> Option<ContentType> {
        let state = self.state.lock().unwrap();
        state.content_types.iter().find(|ct| ct.id() == id).cloned()
    }

    pub fn editor_interface_of(&self, id: &str) -> Option<EditorInterface> {
        self.state.lock().unwrap().editor_interfaces.get(id).cloned()
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|c| predicate(c)).count()
    }

    pub fn writes(&self) -> usize {
        self.count(|c| {
            matches!(
                c,
                Call::CreateOrUpdate { .. }
                    | Call::Activate { .. }
                    | Call::UpdateEditorInterface { .. }
            )
        })
    }

    fn take_failure(state: &mut State, op: Op, id: &str) -> ClientResult<()> {
        if let Some(pos) = state.failures.iter().position(|(o, i)| *o == op && i == id) {
            state.failures.remove(pos);
            return Err(ClientError::Api {
                status: 500,
                message: format!("injected failure for {id}"),
            });
        }
        Ok(())
    }

    fn after(state: &mut State, op: Op) {
        if let Some((trigger, signal)) = &state.cancel_after {
            if *trigger == op {
                signal.cancel();
            }
        }
    }
}

#[async_trait]
impl ManagementClient for FakeClient {
    async fn content_types(&self) -> ClientResult<Vec<ContentType>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::FetchContentTypes);
        Ok(state.content_types.clone())
    }

    async fn create_or_update_content_type(
        &self,
        content_type: &ContentType,
        version: Option<u64>,
    ) -> ClientResult<ContentType> {
        let mut state = self.state.lock().unwrap();
        let id = content_type.id().to_string();
        state.calls.push(Call::CreateOrUpdate {
            id: id.clone(),
            version,
            fields: content_type.fields.iter().map(|f| f.id.clone()).collect(),
        });
        Self::take_failure(&mut state, Op::CreateOrUpdate, &id)?;

        let position = state.content_types.iter().position(|ct| ct.id() == id);
        let current = position.and_then(|p| state.content_types[p].version());
        if current != version {
            return Err(ClientError::VersionConflict { id, version });
        }

        let mut stored = content_type.clone();
        stored.sys = SystemProperties::with_version(id.clone(), current.unwrap_or(0) + 1);
        match position {
            Some(p) => state.content_types[p] = stored.clone(),
            None => {
                state.content_types.push(stored.clone());
                state
                    .editor_interfaces
                    .entry(id.clone())
                    .or_insert_with(empty_editor_interface);
            }
        }

        Self::after(&mut state, Op::CreateOrUpdate);
        Ok(stored)
    }

    async fn activate_content_type(&self, content_type_id: &str, version: u64) -> ClientResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Activate {
            id: content_type_id.to_string(),
            version,
        });
        Self::take_failure(&mut state, Op::Activate, content_type_id)?;

        let stored = state
            .content_types
            .iter_mut()
            .find(|ct| ct.id() == content_type_id)
            .ok_or_else(|| ClientError::NotFound(content_type_id.to_string()))?;
        if stored.version() != Some(version) {
            return Err(ClientError::VersionConflict {
                id: content_type_id.to_string(),
                version: Some(version),
            });
        }
        stored.sys.version = Some(version + 1);

        Self::after(&mut state, Op::Activate);
        Ok(())
    }

    async fn editor_interface(&self, content_type_id: &str) -> ClientResult<EditorInterface> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::FetchEditorInterface {
            id: content_type_id.to_string(),
        });
        Self::take_failure(&mut state, Op::FetchEditorInterface, content_type_id)?;

        let found = state
            .editor_interfaces
            .get(content_type_id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(content_type_id.to_string()))?;

        Self::after(&mut state, Op::FetchEditorInterface);
        Ok(found)
    }

    async fn update_editor_interface(
        &self,
        editor_interface: &EditorInterface,
        content_type_id: &str,
        version: u64,
    ) -> ClientResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::UpdateEditorInterface {
            id: content_type_id.to_string(),
            version,
        });
        Self::take_failure(&mut state, Op::UpdateEditorInterface, content_type_id)?;

        let current = state
            .editor_interfaces
            .get(content_type_id)
            .and_then(|ei| ei.version());
        if current != Some(version) {
            return Err(ClientError::VersionConflict {
                id: content_type_id.to_string(),
                version: Some(version),
            });
        }

        let mut stored = editor_interface.clone();
        stored.sys.version = Some(version + 1);
        state
            .editor_interfaces
            .insert(content_type_id.to_string(), stored);

        Self::after(&mut state, Op::UpdateEditorInterface);
        Ok(())
    }
}

pub fn empty_editor_interface() -> EditorInterface {
    EditorInterface::new(SystemProperties::with_version("default", 1), Vec::new())
}

/// Installs a test subscriber once; `RUST_LOG` controls verbosity.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
