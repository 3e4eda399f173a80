//! Structural comparison of desired and existing schema entities.
//!
//! Comparers are pure: they never call the remote API and never mutate
//! their inputs.

use contentschema_model::{ContentType, EditorInterfaceControl, Field, FieldItems, Validation};
use std::fmt;

/// Compares one desired field against one existing field.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldComparer;

impl FieldComparer {
    pub fn new() -> Self {
        Self
    }

    /// Whether `existing` already satisfies `desired`.
    pub fn equivalent(&self, desired: &Field, existing: &Field) -> bool {
        desired.id == existing.id
            && desired.name == existing.name
            && desired.field_type == existing.field_type
            && desired.link_type == existing.link_type
            && desired.required == existing.required
            && desired.localized == existing.localized
            && desired.disabled == existing.disabled
            && desired.omitted == existing.omitted
            && same_rules(&desired.validations, &existing.validations)
            && same_items(desired.items.as_ref(), existing.items.as_ref())
    }
}

/// Set equality over rule content; order and duplicates are ignored.
fn same_rules(desired: &[Validation], existing: &[Validation]) -> bool {
    desired.iter().all(|rule| existing.contains(rule))
        && existing.iter().all(|rule| desired.contains(rule))
}

fn same_items(desired: Option<&FieldItems>, existing: Option<&FieldItems>) -> bool {
    match (desired, existing) {
        (None, None) => true,
        (Some(d), Some(e)) => {
            d.item_type == e.item_type
                && d.link_type == e.link_type
                && same_rules(&d.validations, &e.validations)
        }
        _ => false,
    }
}

/// One reason an existing content type does not satisfy the desired one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentTypeDifference {
    Name,
    Description,
    DisplayField,
    FieldCount { desired: usize, existing: usize },
    Field { position: usize, field_id: String },
}

impl fmt::Display for ContentTypeDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Description => write!(f, "description"),
            Self::DisplayField => write!(f, "display field"),
            Self::FieldCount { desired, existing } => {
                write!(f, "field count {existing} (want {desired})")
            }
            Self::Field { position, field_id } => write!(f, "field {field_id} at {position}"),
        }
    }
}

/// Compares a desired content type against an existing one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentTypeComparer {
    fields: FieldComparer,
}

impl ContentTypeComparer {
    pub fn new(fields: FieldComparer) -> Self {
        Self { fields }
    }

    /// Whether `existing` already satisfies `desired`.
    pub fn equivalent(&self, desired: &ContentType, existing: &ContentType) -> bool {
        self.differences(desired, existing).is_empty()
    }

    /// Lists every mismatch. Fields are compared position by position in
    /// desired order, so a reordering or an extra existing field is a mismatch.
    pub fn differences(
        &self,
        desired: &ContentType,
        existing: &ContentType,
    ) -> Vec<ContentTypeDifference> {
        let mut differences = Vec::new();

        if desired.name != existing.name {
            differences.push(ContentTypeDifference::Name);
        }
        if desired.description != existing.description {
            differences.push(ContentTypeDifference::Description);
        }
        if desired.display_field != existing.display_field {
            differences.push(ContentTypeDifference::DisplayField);
        }
        if desired.fields.len() != existing.fields.len() {
            differences.push(ContentTypeDifference::FieldCount {
                desired: desired.fields.len(),
                existing: existing.fields.len(),
            });
        }

        for (position, wanted) in desired.fields.iter().enumerate() {
            let matches = existing
                .fields
                .get(position)
                .is_some_and(|found| self.fields.equivalent(wanted, found));
            if !matches {
                differences.push(ContentTypeDifference::Field {
                    position,
                    field_id: wanted.id.clone(),
                });
            }
        }

        differences
    }
}

/// Compares desired editor controls against the controls fetched remotely.
///
/// Comparison is keyed by field id and ignores order. Only the field ids the
/// desired list names are checked: the remote side keeps a control for every
/// field, including ones the desired list leaves to the default widget.
/// Likewise a desired control without a widget id or namespace accepts
/// whatever the remote side filled in.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlComparer;

impl ControlComparer {
    pub fn new() -> Self {
        Self
    }

    pub fn equivalent(
        &self,
        desired: &[EditorInterfaceControl],
        existing: &[EditorInterfaceControl],
    ) -> bool {
        desired.iter().all(|wanted| {
            existing
                .iter()
                .find(|c| c.field_id == wanted.field_id)
                .is_some_and(|found| Self::same_control(wanted, found))
        })
    }

    fn same_control(desired: &EditorInterfaceControl, existing: &EditorInterfaceControl) -> bool {
        let same_widget = desired.widget_id.is_none() || desired.widget_id == existing.widget_id;
        let same_namespace = desired.widget_namespace.is_none()
            || desired.widget_namespace == existing.widget_namespace;

        same_widget
            && same_namespace
            && desired.settings_or_empty() == existing.settings_or_empty()
    }
}
