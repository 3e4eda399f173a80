//! Outcome reporting for reconciliation runs.

use serde::{Deserialize, Serialize};

/// What a reconciliation step did to one remote entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The entity did not exist and was created.
    Created,
    /// The entity differed and was rewritten.
    Updated,
    /// The entity already matched; no write was issued.
    Unchanged,
}

impl Outcome {
    pub fn is_write(self) -> bool {
        !matches!(self, Outcome::Unchanged)
    }
}

/// Result of reconciling one desired content schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityReport {
    /// Content type id.
    pub id: String,
    pub content_type: Outcome,
    pub editor_interface: Outcome,
}

/// Result of a full reconciliation run, in the order entries were supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    pub entries: Vec<EntityReport>,
}

impl SyncReport {
    pub fn push(&mut self, entry: EntityReport) {
        self.entries.push(entry);
    }

    /// Number of content types created.
    pub fn created(&self) -> usize {
        self.count(|e| e.content_type == Outcome::Created)
    }

    /// Number of content types rewritten.
    pub fn updated(&self) -> usize {
        self.count(|e| e.content_type == Outcome::Updated)
    }

    /// Number of editor interfaces rewritten.
    pub fn editor_interfaces_updated(&self) -> usize {
        self.count(|e| e.editor_interface.is_write())
    }

    /// True when the run issued no writes at all.
    pub fn is_noop(&self) -> bool {
        self.entries
            .iter()
            .all(|e| !e.content_type.is_write() && !e.editor_interface.is_write())
    }

    fn count(&self, predicate: impl Fn(&EntityReport) -> bool) -> usize {
        self.entries.iter().filter(|e| predicate(e)).count()
    }
}
