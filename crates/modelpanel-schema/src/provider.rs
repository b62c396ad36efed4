use crate::field::FieldDescriptor;
use modelpanel_types::{FormValues, IconHandle, Localized, LocalizedText, ProviderId};

/// Entry in the provider picker list.
#[derive(Debug, Clone)]
pub struct SelectorEntry {
    pub name: LocalizedText,
    pub icon: IconHandle,
}

/// Entry in the configured-providers summary list.
#[derive(Debug, Clone)]
pub struct ItemEntry {
    pub key: ProviderId,
    pub title_icon: Localized<IconHandle>,
}

/// External documentation link shown in the modal header.
#[derive(Debug, Clone)]
pub struct HelpLink {
    pub href: String,
    pub label: LocalizedText,
}

/// The configuration form for one provider.
#[derive(Debug, Clone)]
pub struct ModalConfig {
    /// Must equal the owning [`ItemEntry::key`].
    pub key: ProviderId,
    pub title: LocalizedText,
    pub icon: IconHandle,
    pub link: HelpLink,
    /// Values pre-filled when the modal opens. Partial: only fields with a
    /// meaningful default appear.
    pub default_value: FormValues,
    /// Field keys that must hold a non-empty value before submission.
    pub validate_keys: Vec<String>,
    /// Canonical render order.
    pub fields: Vec<FieldDescriptor>,
}

/// Everything the settings UI needs to offer, list, and configure one
/// third-party model provider. Built once at startup, read-only after.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub selector: SelectorEntry,
    pub item: ItemEntry,
    pub modal: ModalConfig,
}

impl ProviderConfig {
    pub fn id(&self) -> ProviderId {
        self.item.key
    }

    pub fn field(&self, key: &str) -> Option<&FieldDescriptor> {
        self.modal.fields.iter().find(|f| f.key == key)
    }
}
