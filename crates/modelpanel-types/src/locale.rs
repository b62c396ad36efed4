use serde::{Deserialize, Serialize};
use std::fmt;

/// Locales the settings UI ships translations for.
///
/// The set is closed: adding a locale means adding a variant here and a
/// field to [`Localized`], so every localized value stays complete by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-Hans")]
    ZhHans,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::ZhHans];

    /// BCP 47 code used on the wire and in the frontend.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::ZhHans => "zh-Hans",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One value per supported locale.
///
/// Serializes as a locale-code-keyed map, e.g.
/// `{"en": "Model Type", "zh-Hans": "模型类型"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    #[serde(rename = "en")]
    pub en: T,
    #[serde(rename = "zh-Hans")]
    pub zh_hans: T,
}

pub type LocalizedText = Localized<String>;

impl<T> Localized<T> {
    pub fn new(en: T, zh_hans: T) -> Self {
        Self { en, zh_hans }
    }

    pub fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::En => &self.en,
            Locale::ZhHans => &self.zh_hans,
        }
    }
}

impl<T: Clone> Localized<T> {
    /// Same value in every locale. Used for labels that are not translated,
    /// like model names.
    pub fn uniform(value: T) -> Self {
        Self {
            en: value.clone(),
            zh_hans: value,
        }
    }
}

impl LocalizedText {
    pub fn text(en: &str, zh_hans: &str) -> Self {
        Self::new(en.to_string(), zh_hans.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_codes_round_trip_through_serde() {
        for locale in Locale::ALL {
            let json = serde_json::to_string(&locale).unwrap();
            assert_eq!(json, format!("\"{}\"", locale.code()));
            let back: Locale = serde_json::from_str(&json).unwrap();
            assert_eq!(back, locale);
        }
    }

    #[test]
    fn localized_serializes_every_locale() {
        let label = LocalizedText::text("Model Type", "模型类型");
        let value = serde_json::to_value(&label).unwrap();
        let map = value.as_object().unwrap();
        for locale in Locale::ALL {
            assert!(
                map.contains_key(locale.code()),
                "missing locale {} in serialized label",
                locale
            );
        }
    }

    #[test]
    fn uniform_matches_in_all_locales() {
        let label = LocalizedText::uniform("gpt-4".to_string());
        assert_eq!(label.get(Locale::En), label.get(Locale::ZhHans));
    }
}
