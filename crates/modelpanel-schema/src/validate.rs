use crate::field::FieldControl;
use crate::provider::ProviderConfig;
use modelpanel_types::{FormValues, ProviderId};
use std::collections::HashSet;
use tracing::warn;

/// Structural defect in a provider descriptor. These are authoring bugs, not
/// user input problems, and are meant to be caught at startup or in tests.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("provider {item} lists modal key {modal}, item and modal keys must match")]
    KeyMismatch { item: ProviderId, modal: ProviderId },

    #[error("provider {provider}: duplicate field key {key:?}")]
    DuplicateFieldKey { provider: ProviderId, key: String },

    #[error("provider {provider}: validate_keys entry {key:?} names no field")]
    UnknownValidateKey { provider: ProviderId, key: String },

    #[error("provider {provider}: default value for {key:?} names no field")]
    UnknownDefaultKey { provider: ProviderId, key: String },

    #[error(
        "provider {provider}: default {value:?} for {key:?} is not among the field's options"
    )]
    DefaultOutsideOptions {
        provider: ProviderId,
        key: String,
        value: String,
    },
}

/// Verify the internal consistency of a descriptor.
///
/// Checks: item/modal key identity, field-key uniqueness, every
/// `validate_keys` entry resolves to a field, and every default value names a
/// field and (for radio/select fields) one of the options that field offers
/// under the default state.
pub fn check_integrity(config: &ProviderConfig) -> Result<(), SchemaError> {
    let provider = config.item.key;

    if config.modal.key != provider {
        return Err(SchemaError::KeyMismatch {
            item: provider,
            modal: config.modal.key,
        });
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for field in &config.modal.fields {
        if !seen.insert(field.key.as_str()) {
            return Err(SchemaError::DuplicateFieldKey {
                provider,
                key: field.key.clone(),
            });
        }
    }

    for key in &config.modal.validate_keys {
        if !seen.contains(key.as_str()) {
            return Err(SchemaError::UnknownValidateKey {
                provider,
                key: key.clone(),
            });
        }
    }

    for (key, value) in &config.modal.default_value {
        let Some(field) = config.field(key) else {
            return Err(SchemaError::UnknownDefaultKey {
                provider,
                key: key.clone(),
            });
        };
        if matches!(
            field.control,
            FieldControl::Radio { .. } | FieldControl::Select { .. }
        ) {
            let options = field.options(&config.modal.default_value);
            if !options.iter().any(|o| &o.key == value) {
                return Err(SchemaError::DefaultOutsideOptions {
                    provider,
                    key: key.clone(),
                    value: value.clone(),
                });
            }
        }
    }

    Ok(())
}

/// User-facing rejection of a submitted configuration form.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("required field {key:?} is missing or empty")]
    MissingField { key: String },

    #[error("value {value:?} for field {key:?} is not a valid choice")]
    InvalidChoice { key: String, value: String },
}

/// Validate submitted field values against a descriptor.
///
/// Every `validate_keys` entry must hold a non-empty value, and values of
/// radio/select fields must be members of the option set those fields
/// resolve to under the submitted state. Dynamic option sets are evaluated
/// against `values` itself, so a choice drawn from a stale option list is
/// rejected here even if the host renderer failed to clear it.
pub fn validate_credentials(
    config: &ProviderConfig,
    values: &FormValues,
) -> Result<(), CredentialsError> {
    for key in &config.modal.validate_keys {
        match values.get(key) {
            None => {
                warn!(provider = %config.id(), field = %key, "required field missing");
                return Err(CredentialsError::MissingField { key: key.clone() });
            }
            Some(value) if value.trim().is_empty() => {
                warn!(provider = %config.id(), field = %key, "required field empty");
                return Err(CredentialsError::MissingField { key: key.clone() });
            }
            Some(_) => {}
        }
    }

    for field in &config.modal.fields {
        let Some(value) = values.get(&field.key) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        if matches!(
            field.control,
            FieldControl::Radio { .. } | FieldControl::Select { .. }
        ) {
            let options = field.options(values);
            if !options.iter().any(|o| &o.key == value) {
                warn!(
                    provider = %config.id(),
                    field = %field.key,
                    value = %value,
                    "submitted value outside the field's option set"
                );
                return Err(CredentialsError::InvalidChoice {
                    key: field.key.clone(),
                    value: value.clone(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldDescriptor, FieldOption};
    use crate::provider::{HelpLink, ItemEntry, ModalConfig, ProviderConfig, SelectorEntry};
    use modelpanel_types::{FormValues, IconHandle, Localized, LocalizedText, ProviderId};

    fn mode_options(values: &FormValues) -> Vec<FieldOption> {
        match values.get("mode").map(String::as_str) {
            Some("fast") => vec![FieldOption::uniform("small")],
            Some("smart") => vec![FieldOption::uniform("large")],
            _ => Vec::new(),
        }
    }

    fn test_config() -> ProviderConfig {
        let mut default_value = FormValues::new();
        default_value.insert("mode".to_string(), "fast".to_string());

        ProviderConfig {
            selector: SelectorEntry {
                name: LocalizedText::uniform("Test Provider".to_string()),
                icon: IconHandle::new("test"),
            },
            item: ItemEntry {
                key: ProviderId::Openai,
                title_icon: Localized::uniform(IconHandle::new("test-text")),
            },
            modal: ModalConfig {
                key: ProviderId::Openai,
                title: LocalizedText::uniform("Test Provider".to_string()),
                icon: IconHandle::new("test"),
                link: HelpLink {
                    href: "https://example.com/".to_string(),
                    label: LocalizedText::uniform("Docs".to_string()),
                },
                default_value,
                validate_keys: vec!["api_key".to_string(), "mode".to_string()],
                fields: vec![
                    FieldDescriptor::text(
                        "api_key",
                        true,
                        LocalizedText::uniform("API Key".to_string()),
                    ),
                    FieldDescriptor::radio(
                        "mode",
                        true,
                        LocalizedText::uniform("Mode".to_string()),
                        vec![FieldOption::uniform("fast"), FieldOption::uniform("smart")],
                    ),
                    FieldDescriptor::select_dynamic(
                        "model",
                        false,
                        LocalizedText::uniform("Model".to_string()),
                        mode_options,
                    ),
                ],
            },
        }
    }

    #[test]
    fn well_formed_config_passes_integrity() {
        check_integrity(&test_config()).unwrap();
    }

    #[test]
    fn mismatched_modal_key_is_rejected() {
        let mut config = test_config();
        config.modal.key = ProviderId::Anthropic;
        assert!(matches!(
            check_integrity(&config),
            Err(SchemaError::KeyMismatch { .. })
        ));
    }

    #[test]
    fn orphan_validate_key_is_rejected() {
        let mut config = test_config();
        config.modal.validate_keys.push("ghost".to_string());
        assert!(matches!(
            check_integrity(&config),
            Err(SchemaError::UnknownValidateKey { key, .. }) if key == "ghost"
        ));
    }

    #[test]
    fn duplicate_field_key_is_rejected() {
        let mut config = test_config();
        let dup = config.modal.fields[0].clone();
        config.modal.fields.push(dup);
        assert!(matches!(
            check_integrity(&config),
            Err(SchemaError::DuplicateFieldKey { .. })
        ));
    }

    #[test]
    fn default_outside_radio_options_is_rejected() {
        let mut config = test_config();
        config
            .modal
            .default_value
            .insert("mode".to_string(), "turbo".to_string());
        assert!(matches!(
            check_integrity(&config),
            Err(SchemaError::DefaultOutsideOptions { .. })
        ));
    }

    #[test]
    fn missing_required_field_fails_validation() {
        let config = test_config();
        let mut values = FormValues::new();
        values.insert("api_key".to_string(), "sk-test".to_string());
        assert_eq!(
            validate_credentials(&config, &values),
            Err(CredentialsError::MissingField {
                key: "mode".to_string()
            })
        );
    }

    #[test]
    fn blank_required_field_fails_validation() {
        let config = test_config();
        let mut values = FormValues::new();
        values.insert("api_key".to_string(), "   ".to_string());
        values.insert("mode".to_string(), "fast".to_string());
        assert_eq!(
            validate_credentials(&config, &values),
            Err(CredentialsError::MissingField {
                key: "api_key".to_string()
            })
        );
    }

    #[test]
    fn choice_outside_resolved_options_fails_validation() {
        let config = test_config();
        let mut values = FormValues::new();
        values.insert("api_key".to_string(), "sk-test".to_string());
        values.insert("mode".to_string(), "fast".to_string());
        // "large" is only offered when mode == "smart".
        values.insert("model".to_string(), "large".to_string());
        assert_eq!(
            validate_credentials(&config, &values),
            Err(CredentialsError::InvalidChoice {
                key: "model".to_string(),
                value: "large".to_string()
            })
        );
    }

    #[test]
    fn consistent_submission_passes_validation() {
        let config = test_config();
        let mut values = FormValues::new();
        values.insert("api_key".to_string(), "sk-test".to_string());
        values.insert("mode".to_string(), "fast".to_string());
        values.insert("model".to_string(), "small".to_string());
        validate_credentials(&config, &values).unwrap();
    }
}
