use modelpanel_types::{FormValues, LocalizedText};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One selectable choice of a radio or select field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub key: String,
    pub label: LocalizedText,
}

impl FieldOption {
    pub fn new(key: &str, label: LocalizedText) -> Self {
        Self {
            key: key.to_string(),
            label,
        }
    }

    /// Option whose display label equals its key in every locale. Model
    /// names are shown verbatim.
    pub fn uniform(key: &str) -> Self {
        Self {
            key: key.to_string(),
            label: LocalizedText::uniform(key.to_string()),
        }
    }
}

/// Derivation rule for a select field whose option set depends on another
/// field's current value. Must be pure and total: any input map yields a
/// list, possibly empty.
pub type OptionsFn = fn(&FormValues) -> Vec<FieldOption>;

/// Option source of a select field.
#[derive(Clone)]
pub enum FieldOptions {
    Static(Vec<FieldOption>),
    Dynamic(OptionsFn),
}

impl FieldOptions {
    /// Evaluate against the current form state. Static lists ignore the
    /// state; dynamic rules must be re-evaluated by the host whenever a
    /// field they depend on changes.
    pub fn resolve(&self, values: &FormValues) -> Vec<FieldOption> {
        match self {
            FieldOptions::Static(options) => options.clone(),
            FieldOptions::Dynamic(f) => f(values),
        }
    }
}

impl fmt::Debug for FieldOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldOptions::Static(options) => f.debug_tuple("Static").field(options).finish(),
            FieldOptions::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Input control of a form field.
#[derive(Debug, Clone)]
pub enum FieldControl {
    /// Free-form string input.
    Text,
    /// Fixed choice rendered as radio buttons.
    Radio { options: Vec<FieldOption> },
    /// Dropdown; options are fixed or derived from other fields.
    Select { options: FieldOptions },
}

impl FieldControl {
    /// Discriminator the frontend switches on.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldControl::Text => "text",
            FieldControl::Radio { .. } => "radio",
            FieldControl::Select { .. } => "select",
        }
    }
}

/// One form input of a provider configuration modal.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Unique within the modal's field list.
    pub key: String,
    pub required: bool,
    pub label: LocalizedText,
    pub placeholder: Option<LocalizedText>,
    pub control: FieldControl,
}

impl FieldDescriptor {
    pub fn text(key: &str, required: bool, label: LocalizedText) -> Self {
        Self {
            key: key.to_string(),
            required,
            label,
            placeholder: None,
            control: FieldControl::Text,
        }
    }

    pub fn radio(key: &str, required: bool, label: LocalizedText, options: Vec<FieldOption>) -> Self {
        Self {
            key: key.to_string(),
            required,
            label,
            placeholder: None,
            control: FieldControl::Radio { options },
        }
    }

    pub fn select(key: &str, required: bool, label: LocalizedText, options: Vec<FieldOption>) -> Self {
        Self {
            key: key.to_string(),
            required,
            label,
            placeholder: None,
            control: FieldControl::Select {
                options: FieldOptions::Static(options),
            },
        }
    }

    pub fn select_dynamic(key: &str, required: bool, label: LocalizedText, options: OptionsFn) -> Self {
        Self {
            key: key.to_string(),
            required,
            label,
            placeholder: None,
            control: FieldControl::Select {
                options: FieldOptions::Dynamic(options),
            },
        }
    }

    pub fn with_placeholder(mut self, placeholder: LocalizedText) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Option set the field offers under the given form state. Empty for
    /// text fields.
    pub fn options(&self, values: &FormValues) -> Vec<FieldOption> {
        match &self.control {
            FieldControl::Text => Vec::new(),
            FieldControl::Radio { options } => options.clone(),
            FieldControl::Select { options } => options.resolve(values),
        }
    }
}
