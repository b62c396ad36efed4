//! Tuya OpenAI Service: Azure-OpenAI-compatible deployments fronted by a
//! Tuya scene, selected by deployment name plus a base model.

use modelpanel_schema::{
    FieldDescriptor, FieldOption, HelpLink, ItemEntry, ModalConfig, ProviderConfig, SelectorEntry,
};
use modelpanel_types::{FormValues, IconHandle, Localized, LocalizedText, ProviderId};
use once_cell::sync::Lazy;

pub const MODEL_NAME: &str = "model_name";
pub const MODEL_TYPE: &str = "model_type";
pub const OPENAI_API_BASE: &str = "openai_api_base";
pub const OPENAI_API_KEY: &str = "openai_api_key";
pub const SCENE_ID: &str = "scene_id";
pub const BASE_MODEL_NAME: &str = "base_model_name";

pub const MODEL_TYPE_TEXT_GENERATION: &str = "text-generation";
pub const MODEL_TYPE_EMBEDDINGS: &str = "embeddings";

/// Base models selectable for text-generation deployments, in display order.
pub const TEXT_GENERATION_BASE_MODELS: [&str; 4] =
    ["gpt-35-turbo", "gpt-35-turbo-16k", "gpt-4", "gpt-4-32k"];

/// Base models selectable for embedding deployments.
pub const EMBEDDINGS_BASE_MODELS: [&str; 1] = ["text-embedding-ada-002"];

/// Option rule for `base_model_name`: the selectable base models depend on
/// the current `model_type`. Total: unset or unrecognized model types yield
/// an empty list, and the host re-evaluates on every `model_type` change.
pub fn base_model_options(values: &FormValues) -> Vec<FieldOption> {
    let models: &[&str] = match values.get(MODEL_TYPE).map(String::as_str) {
        Some(MODEL_TYPE_TEXT_GENERATION) => &TEXT_GENERATION_BASE_MODELS,
        Some(MODEL_TYPE_EMBEDDINGS) => &EMBEDDINGS_BASE_MODELS,
        _ => return Vec::new(),
    };
    models.iter().map(|m| FieldOption::uniform(m)).collect()
}

pub static CONFIG: Lazy<ProviderConfig> = Lazy::new(|| {
    let mut default_value = FormValues::new();
    default_value.insert(MODEL_TYPE.to_string(), MODEL_TYPE_TEXT_GENERATION.to_string());

    ProviderConfig {
        selector: SelectorEntry {
            name: LocalizedText::uniform("Tuya OpenAI Service".to_string()),
            icon: IconHandle::new("openai-blue"),
        },
        item: ItemEntry {
            key: ProviderId::TuyaOpenai,
            title_icon: Localized::uniform(IconHandle::new("tuya-openai-service-text")),
        },
        modal: ModalConfig {
            key: ProviderId::TuyaOpenai,
            title: LocalizedText::uniform("Tuya OpenAI Service Model".to_string()),
            icon: IconHandle::new("tuya-openai-service"),
            link: HelpLink {
                href: "https://tuya.com/".to_string(),
                label: LocalizedText::text(
                    "Get your Scene Id from Tuya",
                    "从 Tuya 获取场景ID",
                ),
            },
            default_value,
            validate_keys: vec![
                MODEL_NAME.to_string(),
                MODEL_TYPE.to_string(),
                OPENAI_API_BASE.to_string(),
                OPENAI_API_KEY.to_string(),
                BASE_MODEL_NAME.to_string(),
            ],
            fields: vec![
                FieldDescriptor::text(
                    MODEL_NAME,
                    true,
                    LocalizedText::text("Deployment Name", "部署名称"),
                )
                .with_placeholder(LocalizedText::text(
                    "Enter your Deployment Name here, matching the Tuya deployment name.",
                    "在此输入您的部署名称，需要与 Tuya 的部署名称匹配",
                )),
                FieldDescriptor::radio(
                    MODEL_TYPE,
                    true,
                    LocalizedText::text("Model Type", "模型类型"),
                    vec![
                        FieldOption::new(
                            MODEL_TYPE_TEXT_GENERATION,
                            LocalizedText::text("Text Generation", "文本生成"),
                        ),
                        FieldOption::new(
                            MODEL_TYPE_EMBEDDINGS,
                            LocalizedText::text("Embeddings", "Embeddings"),
                        ),
                    ],
                ),
                FieldDescriptor::text(
                    OPENAI_API_BASE,
                    true,
                    LocalizedText::text("API Endpoint URL", "API 域名"),
                )
                .with_placeholder(LocalizedText::text(
                    "Enter your API Endpoint, eg: https://example.com/xxx",
                    "在此输入您的 API 域名，如：https://example.com/xxx",
                )),
                FieldDescriptor::text(
                    OPENAI_API_KEY,
                    true,
                    LocalizedText::text("API Key", "API Key"),
                )
                .with_placeholder(LocalizedText::text(
                    "Enter your API key here",
                    "在此输入您的 API Key",
                )),
                FieldDescriptor::text(
                    SCENE_ID,
                    true,
                    LocalizedText::text("Scene ID", "Scene ID"),
                )
                .with_placeholder(LocalizedText::text(
                    "Enter your scene id here",
                    "在此输入您的场景id",
                )),
                FieldDescriptor::select_dynamic(
                    BASE_MODEL_NAME,
                    true,
                    LocalizedText::text("Base Model", "基础模型"),
                    base_model_options,
                ),
            ],
        },
    }
});
