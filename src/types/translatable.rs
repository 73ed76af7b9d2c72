use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// User-facing text keyed by language tag. The host picks the locale.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translatable(BTreeMap<String, String>);

impl Translatable {
    pub fn new(en: impl Into<String>, nl: impl Into<String>) -> Self {
        let mut texts = BTreeMap::new();
        texts.insert("en".to_string(), en.into());
        texts.insert("nl".to_string(), nl.into());
        Self(texts)
    }

    /// Same text in every supported language.
    pub fn untranslated(text: &str) -> Self {
        Self::new(text, text)
    }

    pub fn get(&self, lang: &str) -> Option<&str> {
        self.0.get(lang).map(String::as_str)
    }
}
