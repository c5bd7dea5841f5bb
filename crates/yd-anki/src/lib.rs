mod client;
mod note;

pub use client::AnkiConnectClient;
pub use note::NoteMeta;

use anyhow::Result;

/// Add a card to Anki using the provided client
pub async fn add_card(client: &AnkiConnectClient, note: &NoteMeta) -> Result<u64> {
    tracing::debug!("Adding note {:?} to deck {:?}", note.front, note.deck);

    let id = client.add_note(note).await?;
    tracing::info!("Added card to Anki: note_id={}", id);

    Ok(id)
}
