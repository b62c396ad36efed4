//! Serializable snapshots of a descriptor.
//!
//! Dynamic option rules are function pointers and cannot be serialized, so a
//! backend that ships form schemas to a frontend resolves them against the
//! current form state first. The view types are the result of that
//! resolution and carry no behavior.

use crate::field::{FieldControl, FieldDescriptor, FieldOption};
use crate::provider::{HelpLink, ProviderConfig};
use modelpanel_types::{FormValues, IconHandle, Localized, LocalizedText, ProviderId};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    #[serde(rename = "type")]
    pub type_name: &'static str,
    pub key: String,
    pub required: bool,
    pub label: LocalizedText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<LocalizedText>,
    /// Present for radio and select fields; select options are resolved
    /// against the form state the view was built from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HelpLinkView {
    pub href: String,
    pub label: LocalizedText,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModalView {
    pub key: ProviderId,
    pub title: LocalizedText,
    pub icon: IconHandle,
    pub link: HelpLinkView,
    pub default_value: FormValues,
    pub validate_keys: Vec<String>,
    pub fields: Vec<FieldView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectorView {
    pub name: LocalizedText,
    pub icon: IconHandle,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemView {
    pub key: ProviderId,
    pub title_icon: Localized<IconHandle>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProviderView {
    pub selector: SelectorView,
    pub item: ItemView,
    pub modal: ModalView,
}

fn field_view(field: &FieldDescriptor, values: &FormValues) -> FieldView {
    let options = match &field.control {
        FieldControl::Text => None,
        FieldControl::Radio { .. } | FieldControl::Select { .. } => {
            Some(field.options(values))
        }
    };
    FieldView {
        type_name: field.control.type_name(),
        key: field.key.clone(),
        required: field.required,
        label: field.label.clone(),
        placeholder: field.placeholder.clone(),
        options,
    }
}

fn link_view(link: &HelpLink) -> HelpLinkView {
    HelpLinkView {
        href: link.href.clone(),
        label: link.label.clone(),
    }
}

impl ProviderView {
    /// Snapshot a descriptor under the given form state, preserving field
    /// order.
    pub fn resolve(config: &ProviderConfig, values: &FormValues) -> Self {
        ProviderView {
            selector: SelectorView {
                name: config.selector.name.clone(),
                icon: config.selector.icon.clone(),
            },
            item: ItemView {
                key: config.item.key,
                title_icon: config.item.title_icon.clone(),
            },
            modal: ModalView {
                key: config.modal.key,
                title: config.modal.title.clone(),
                icon: config.modal.icon.clone(),
                link: link_view(&config.modal.link),
                default_value: config.modal.default_value.clone(),
                validate_keys: config.modal.validate_keys.clone(),
                fields: config
                    .modal
                    .fields
                    .iter()
                    .map(|f| field_view(f, values))
                    .collect(),
            },
        }
    }

    /// Snapshot under the modal's default values, the state a freshly
    /// opened form is in.
    pub fn initial(config: &ProviderConfig) -> Self {
        Self::resolve(config, &config.modal.default_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldDescriptor;
    use modelpanel_types::FormValues;

    #[test]
    fn text_field_view_omits_options() {
        let field = FieldDescriptor::text(
            "api_key",
            true,
            LocalizedText::text("API Key", "API Key"),
        )
        .with_placeholder(LocalizedText::text("Enter your API key", "输入 API Key"));

        let view = field_view(&field, &FormValues::new());
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["type"], "text");
        assert_eq!(json["key"], "api_key");
        assert_eq!(json["required"], true);
        assert_eq!(json["placeholder"]["zh-Hans"], "输入 API Key");
        assert!(json.get("options").is_none());
    }

    #[test]
    fn radio_field_view_carries_its_options() {
        let field = FieldDescriptor::radio(
            "mode",
            true,
            LocalizedText::text("Mode", "模式"),
            vec![
                crate::field::FieldOption::uniform("fast"),
                crate::field::FieldOption::uniform("smart"),
            ],
        );
        let json = serde_json::to_value(field_view(&field, &FormValues::new())).unwrap();
        assert_eq!(json["type"], "radio");
        assert_eq!(json["options"][0]["key"], "fast");
        assert_eq!(json["options"][1]["label"]["en"], "smart");
    }
}
