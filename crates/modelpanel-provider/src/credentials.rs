//! Helpers for handing stored credentials back to the settings UI.

use modelpanel_schema::ProviderConfig;
use modelpanel_types::FormValues;

/// Form state for a provider that has never been configured: every field
/// present with an empty value, then the modal's defaults applied on top.
pub fn initial_values(config: &ProviderConfig) -> FormValues {
    let mut values = FormValues::new();
    for field in &config.modal.fields {
        values.insert(field.key.clone(), String::new());
    }
    for (key, value) in &config.modal.default_value {
        values.insert(key.clone(), value.clone());
    }
    values
}

fn is_secret_key(key: &str) -> bool {
    key.ends_with("_api_key") || key.ends_with("_secret")
}

fn mask(value: &str) -> String {
    // Keep the first 6 and last 2 characters, enough to recognize a stored
    // key without exposing it.
    if value.chars().count() <= 8 {
        return "*".repeat(value.chars().count());
    }
    let head: String = value.chars().take(6).collect();
    let tail: String = value.chars().skip(value.chars().count() - 2).collect();
    let hidden = value.chars().count() - 8;
    format!("{}{}{}", head, "*".repeat(hidden), tail)
}

/// Copy of `values` with secret fields masked, safe to send to a UI.
pub fn obfuscate(config: &ProviderConfig, values: &FormValues) -> FormValues {
    let mut out = values.clone();
    for field in &config.modal.fields {
        if !is_secret_key(&field.key) {
            continue;
        }
        if let Some(value) = out.get_mut(&field.key) {
            if !value.is_empty() {
                *value = mask(value);
            }
        }
    }
    out
}
