//! Static registry of every provider descriptor the settings UI offers.

use crate::tuya_openai;
use modelpanel_schema::{check_integrity, ProviderConfig, SchemaError, SelectorEntry};
use modelpanel_types::ProviderId;
use once_cell::sync::Lazy;
use tracing::debug;

/// Registered descriptors, in picker display order.
static CONFIGS: Lazy<Vec<&'static ProviderConfig>> =
    Lazy::new(|| vec![&*tuya_openai::CONFIG]);

/// All registered descriptors, in picker display order.
pub fn all() -> &'static [&'static ProviderConfig] {
    &CONFIGS
}

/// Look up a descriptor by provider id.
pub fn get(id: ProviderId) -> Option<&'static ProviderConfig> {
    let found = CONFIGS.iter().copied().find(|c| c.id() == id);
    if found.is_none() {
        debug!(provider = %id, "no descriptor registered");
    }
    found
}

/// Picker entries for every registered provider.
pub fn selectors() -> Vec<(ProviderId, &'static SelectorEntry)> {
    CONFIGS.iter().map(|c| (c.id(), &c.selector)).collect()
}

/// Run the integrity checks over every registered descriptor. Called at
/// startup so an authoring mistake fails fast instead of surfacing as a
/// broken form.
pub fn check_all() -> Result<(), SchemaError> {
    for config in CONFIGS.iter() {
        check_integrity(config)?;
    }
    Ok(())
}
