use anyhow::Context;
use yd_anki::{AnkiConnectClient, NoteMeta};
use yd_config::Config;
use yd_core::LookupResult;

/// Push the looked-up word into the configured Anki deck
pub async fn handle_card_creation(
    config: &Config,
    result: &LookupResult,
    allow_duplicate: bool,
) -> anyhow::Result<u64> {
    let note = NoteMeta::from_lookup(result, config, allow_duplicate)?;

    if note.back.is_empty() {
        tracing::warn!("Flashcard back is empty, adding {:?} without a definition", note.front);
    }

    let client = AnkiConnectClient::new(config.anki.url.clone(), config.anki.timeout())?;

    yd_anki::add_card(&client, &note)
        .await
        .with_context(|| format!("Failed to add {:?} to Anki", note.front))
}
