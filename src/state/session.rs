//! Form session state
//!
//! A `FormSession` is the mutable aggregate behind one form: the ordered
//! field list, the error markers, the set of fields armed for
//! revalidation-on-change, the submit-enabled flag and the result display
//! state. It is created by the caller, mutated on every validate/submit/poll
//! step and carries no persistence.

use crate::state::FormField;
use crate::validate::FieldKind;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Result of validating all fields of a session.
///
/// Produced fresh on each call; `error_fields` lists the names of failing
/// fields in field-declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error_fields: Vec<String>,
}

/// Result display state, read by whatever UI layer owns the session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error(String),
    /// Remaining whole seconds of an active progress countdown
    Countdown(u64),
}

/// Mutable state of a single form
#[derive(Debug, Clone)]
pub struct FormSession {
    id: Uuid,
    fields: Vec<FormField>,
    /// Fields armed to revalidate on their next change
    watched: HashSet<String>,
    /// Whether a manual submit is currently allowed
    pub submit_enabled: bool,
    /// Current result display state
    pub status: SubmitStatus,
}

impl FormSession {
    /// Create a session with the standard three fields
    pub fn new() -> Self {
        Self::with_fields(vec![
            FormField::text("name", "Full name"),
            FormField::text("email", "Email"),
            FormField::text("phone", "Phone"),
        ])
    }

    /// Create a session over an arbitrary field list.
    ///
    /// Field order is the declaration order used for error reporting. Fields
    /// whose names have no validation rule always pass.
    pub fn with_fields(fields: Vec<FormField>) -> Self {
        Self {
            id: Uuid::new_v4(),
            fields,
            watched: HashSet::new(),
            submit_enabled: true,
            status: SubmitStatus::Idle,
        }
    }

    /// Session id, used for tracing only
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// All fields in declaration order
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Validate every field, applying the matching rule where one exists.
    ///
    /// A field with no registered rule is always considered passing.
    pub fn validate(&self) -> ValidationResult {
        let error_fields: Vec<String> = self
            .fields
            .iter()
            .filter(|field| {
                FieldKind::from_field_name(&field.name)
                    .is_some_and(|kind| !kind.is_valid(&field.value))
            })
            .map(|field| field.name.clone())
            .collect();

        ValidationResult {
            is_valid: error_fields.is_empty(),
            error_fields,
        }
    }

    /// Snapshot of the current values of all named fields
    pub fn data(&self) -> HashMap<String, String> {
        self.fields
            .iter()
            .map(|field| (field.name.clone(), field.value.clone()))
            .collect()
    }

    /// Apply values for known field names; unknown keys are silently ignored
    pub fn set_data(&mut self, data: &HashMap<String, String>) {
        for (name, value) in data {
            if let Some(field) = self.field_mut(name) {
                field.set_value(value.clone());
            }
        }
    }

    /// Record a field edit from the UI layer.
    ///
    /// This is the state-transition function replacing per-field change
    /// listeners: it stores the new value and, when the field is armed for
    /// revalidation, re-runs its rule and updates the error marker in both
    /// directions. Edits to unknown field names are ignored.
    pub fn field_changed(&mut self, name: &str, value: &str) {
        let watched = self.watched.contains(name);
        let Some(field) = self.field_mut(name) else {
            tracing::debug!(field = name, "edit for unknown field ignored");
            return;
        };

        field.set_value(value.to_string());

        if watched {
            if let Some(kind) = FieldKind::from_field_name(name) {
                field.error = !kind.is_valid(&field.value);
            }
        }
    }

    /// Clear the error marker on every field
    pub fn clear_errors(&mut self) {
        for field in &mut self.fields {
            field.error = false;
        }
    }

    /// Set the error marker on exactly the listed fields
    pub fn mark_errors(&mut self, names: &[String]) {
        for name in names {
            if let Some(field) = self.field_mut(name) {
                field.error = true;
            }
        }
    }

    /// Arm the listed fields to revalidate on their next change
    pub fn watch(&mut self, names: &[String]) {
        for name in names {
            self.watched.insert(name.clone());
        }
    }

    /// Names of fields whose error marker is currently set, in declaration order
    pub fn error_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|field| field.error)
            .map(|field| field.name.as_str())
            .collect()
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}
