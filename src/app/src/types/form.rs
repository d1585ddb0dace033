use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lifecycle of a settings form
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FormState {
    /// Nothing loaded yet
    #[default]
    Idle,
    /// Loaded from the device and editable
    Editing,
    /// Save request in flight, edits are ignored
    Submitting,
}

/// Form record of one settings group
///
/// `original` is what the device last reported, `data` what the user is
/// editing, and `errors` maps field names to the message shown next to them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SettingsForm<T> {
    pub state: FormState,
    pub data: T,
    pub original: T,
    #[serde(default)]
    pub errors: HashMap<String, String>,
    pub dirty: bool,
}

impl<T: Clone + PartialEq> SettingsForm<T> {
    /// Start (or restart) editing from the settings the device reported
    pub fn start_editing(&mut self, loaded: T) {
        self.state = FormState::Editing;
        self.data = loaded.clone();
        self.original = loaded;
        self.errors.clear();
        self.dirty = false;
    }

    pub fn is_editing(&self) -> bool {
        self.state == FormState::Editing
    }

    /// Apply an edit to the form data. Returns `false` and leaves the form
    /// untouched unless it is being edited.
    pub fn edit(&mut self, apply: impl FnOnce(&mut T)) -> bool {
        if !self.is_editing() {
            return false;
        }
        apply(&mut self.data);
        self.dirty = self.data != self.original;
        true
    }

    /// Record the validation outcome of one field
    pub fn set_field_error(&mut self, field: &str, message: Option<String>) {
        match message {
            Some(message) => {
                self.errors.insert(field.to_string(), message);
            }
            None => {
                self.errors.remove(field);
            }
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Transition from Editing to Submitting
    pub fn to_submitting(&mut self) -> bool {
        if self.is_editing() {
            self.state = FormState::Submitting;
            true
        } else {
            false
        }
    }

    /// Transition from Submitting back to Editing, keeping the user's edits
    pub fn to_editing(&mut self) {
        if self.state == FormState::Submitting {
            self.state = FormState::Editing;
        }
    }
}
