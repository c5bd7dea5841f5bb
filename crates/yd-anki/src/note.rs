use serde_json::json;
use yd_config::{Config, ConfigError};
use yd_core::{Accent, LookupResult};

/// Everything needed to create one Anki note for a looked-up word
#[derive(Debug, Clone)]
pub struct NoteMeta {
    pub deck: String,
    pub model: String,
    pub front: String,
    pub back: String,
    pub allow_duplicate: bool,
    pub tags: Vec<String>,
    /// Attached to the front field as `<front>.mp3`
    pub audio_url: String,
}

impl NoteMeta {
    /// Front is the queried word, back the rendered HTML, audio the US voice
    pub fn from_lookup(
        result: &LookupResult,
        config: &Config,
        allow_duplicate: bool,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            deck: config.anki.deck()?.to_string(),
            model: config.anki.model.clone(),
            front: yd_core::front_label(result).to_string(),
            back: yd_core::render_flashcard_back(result),
            allow_duplicate,
            tags: vec![config.anki.tag.clone()],
            audio_url: result.audio_link(Accent::Us, &config.network.api_url),
        })
    }

    pub fn audio_filename(&self) -> String {
        format!("{}.mp3", self.front)
    }

    /// `params` object of an `addNote` action
    pub(crate) fn to_params(&self) -> serde_json::Value {
        json!({
            "note": {
                "deckName": self.deck,
                "modelName": self.model,
                "fields": {
                    "Front": self.front,
                    "Back": self.back
                },
                "options": {
                    "allowDuplicate": self.allow_duplicate
                },
                "audio": {
                    "url": self.audio_url,
                    "filename": self.audio_filename(),
                    "fields": ["Front"],
                    "skipHash": ""
                },
                "tags": self.tags
            }
        })
    }
}
