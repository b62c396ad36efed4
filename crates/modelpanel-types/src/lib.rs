pub mod icon;
pub mod locale;
pub mod provider_id;

pub use icon::IconHandle;
pub use locale::{Locale, Localized, LocalizedText};
pub use provider_id::{ParseProviderIdError, ProviderId};

use std::collections::HashMap;

/// Current values of a provider configuration form, keyed by field key.
/// Absent keys mean the field has never been touched.
pub type FormValues = HashMap<String, String>;
