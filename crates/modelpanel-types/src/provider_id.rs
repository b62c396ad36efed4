use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a third-party model-provider integration.
///
/// The same id names the provider in the picker list, the summary item, and
/// the configuration modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderId {
    Openai,
    AzureOpenai,
    Anthropic,
    Replicate,
    HuggingfaceHub,
    TuyaOpenai,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Openai => "openai",
            ProviderId::AzureOpenai => "azure_openai",
            ProviderId::Anthropic => "anthropic",
            ProviderId::Replicate => "replicate",
            ProviderId::HuggingfaceHub => "huggingface_hub",
            ProviderId::TuyaOpenai => "tuya_openai",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown provider id: {0}")]
pub struct ParseProviderIdError(String);

impl FromStr for ProviderId {
    type Err = ParseProviderIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai" => Ok(ProviderId::Openai),
            "azure_openai" => Ok(ProviderId::AzureOpenai),
            "anthropic" => Ok(ProviderId::Anthropic),
            "replicate" => Ok(ProviderId::Replicate),
            "huggingface_hub" => Ok(ProviderId::HuggingfaceHub),
            "tuya_openai" => Ok(ProviderId::TuyaOpenai),
            other => Err(ParseProviderIdError(other.to_string())),
        }
    }
}
