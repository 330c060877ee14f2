use std::{
    fmt,
    str::FromStr,
};

use serde::{
    Deserialize,
    Serialize,
};

use super::LingotError;

/// Target languages the agent accepts. The wire form is the English name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Spanish,
    French,
    German,
    Italian,
    Portuguese,
    Japanese,
    Korean,
    Chinese,
}

impl Language {
    pub const ALL: &'static [Language] = &[
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Portuguese,
        Language::Japanese,
        Language::Korean,
        Language::Chinese,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::Portuguese => "Portuguese",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
            Language::Chinese => "Chinese",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = LingotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .iter()
            .copied()
            .find(|language| language.as_str() == s)
            .ok_or_else(|| LingotError::UnknownLanguage(s.to_string()))
    }
}

/// Model identifiers the agent accepts, in the order they are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Model {
    #[serde(rename = "gpt-5-nano")]
    Gpt5Nano,
    #[serde(rename = "gpt-5-mini")]
    Gpt5Mini,
    #[serde(rename = "gpt-5")]
    Gpt5,
}

impl Model {
    pub const ALL: &'static [Model] = &[Model::Gpt5Nano, Model::Gpt5Mini, Model::Gpt5];

    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Gpt5Nano => "gpt-5-nano",
            Model::Gpt5Mini => "gpt-5-mini",
            Model::Gpt5 => "gpt-5",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Model {
    type Err = LingotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Model::ALL
            .iter()
            .copied()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| LingotError::UnknownModel(s.to_string()))
    }
}

/// One submission to the agent. Built fresh per submit, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    pub text: String,
    pub to_language: Language,
    pub model: Model,
}

/// The agent's reply. Replaces the previous result wholesale on every
/// successful call; `history` is the server-side log, not accumulated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub translation: String,
    pub tokens: u64,
    pub translation_count: u64,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub text: String,
    pub to_language: Language,
    pub model: Model,
    pub translation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_wire_shape_is_camel_case() {
        let request = TranslationRequest {
            text: "Hello, how are you today?".to_string(),
            to_language: Language::Spanish,
            model: Model::Gpt5Nano,
        };

        let value = serde_json::to_value(&request).expect("serialize request");
        assert_eq!(
            value,
            serde_json::json!({
                "text": "Hello, how are you today?",
                "toLanguage": "Spanish",
                "model": "gpt-5-nano",
            })
        );
    }

    #[test]
    fn result_parses_server_payload() {
        let payload = r#"{
            "translation": "Hola, ¿cómo estás hoy?",
            "tokens": 12,
            "translationCount": 1,
            "history": [
                {
                    "text": "Hello, how are you today?",
                    "toLanguage": "Spanish",
                    "model": "gpt-5-nano",
                    "translation": "Hola, ¿cómo estás hoy?"
                }
            ]
        }"#;

        let result: TranslationResult = serde_json::from_str(payload).expect("parse result");
        assert_eq!(result.translation, "Hola, ¿cómo estás hoy?");
        assert_eq!(result.tokens, 12);
        assert_eq!(result.translation_count, 1);
        assert_eq!(result.history.len(), 1);

        let entry = &result.history[0];
        assert_eq!(entry.text, "Hello, how are you today?");
        assert_eq!(entry.to_language, Language::Spanish);
        assert_eq!(entry.model, Model::Gpt5Nano);
        assert_eq!(entry.translation, "Hola, ¿cómo estás hoy?");
    }

    #[test]
    fn result_tolerates_missing_history() {
        let result: TranslationResult =
            serde_json::from_str(r#"{"translation": "Bonjour", "tokens": 3, "translationCount": 7}"#)
                .expect("parse result without history");
        assert!(result.history.is_empty());
    }

    #[test]
    fn language_round_trips_through_str() {
        for language in Language::ALL {
            assert_eq!(Language::from_str(language.as_str()).unwrap(), *language);
        }
        assert!(Language::from_str("Klingon").is_err());
    }

    #[test]
    fn model_round_trips_through_str() {
        for model in Model::ALL {
            assert_eq!(Model::from_str(model.as_str()).unwrap(), *model);
        }
        assert!(Model::from_str("gpt-2").is_err());
    }

    #[test]
    fn enum_sequences_are_deduplicated() {
        let mut languages: Vec<&str> = Language::ALL.iter().map(|l| l.as_str()).collect();
        languages.sort_unstable();
        languages.dedup();
        assert_eq!(languages.len(), Language::ALL.len());

        let mut models: Vec<&str> = Model::ALL.iter().map(|m| m.as_str()).collect();
        models.sort_unstable();
        models.dedup();
        assert_eq!(models.len(), Model::ALL.len());
    }
}
