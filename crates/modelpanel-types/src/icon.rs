use serde::{Deserialize, Serialize};

/// Opaque handle to a frontend icon asset.
///
/// The settings UI resolves the asset name against its icon set; this crate
/// never loads or renders anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconHandle {
    pub asset: String,
}

impl IconHandle {
    pub fn new(asset: &str) -> Self {
        Self {
            asset: asset.to_string(),
        }
    }
}
