//! Best-effort pronunciation playback.
//!
//! The audio is fetched over HTTP, decoded as mp3 and played on the default
//! output device. Playback blocks a worker thread until the clip ends.

use std::io::Cursor;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info};

pub struct AudioPlayer {
    client: reqwest::Client,
}

impl AudioPlayer {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build audio HTTP client")?;

        Ok(Self { client })
    }

    /// Fetch `url` and play it to the end
    pub async fn play(&self, url: &str) -> Result<()> {
        let bytes = self.fetch(url).await?;
        debug!("Fetched {} bytes of audio", bytes.len());

        tokio::task::spawn_blocking(move || play_blocking(bytes))
            .await
            .context("Audio playback task panicked")?
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch audio from {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!("Audio request returned status {}", response.status());
        }

        let bytes = response.bytes().await.context("Failed to read audio body")?;
        Ok(bytes.to_vec())
    }
}

fn decode(bytes: Vec<u8>) -> Result<rodio::Decoder<Cursor<Vec<u8>>>> {
    rodio::Decoder::new(Cursor::new(bytes)).context("Failed to decode audio")
}

fn play_blocking(bytes: Vec<u8>) -> Result<()> {
    let source = decode(bytes)?;

    // The stream must outlive the sink or playback stops immediately.
    let (_stream, stream_handle) =
        rodio::OutputStream::try_default().context("No audio output device")?;
    let sink = rodio::Sink::try_new(&stream_handle).context("Failed to create audio sink")?;

    sink.append(source);
    info!("Playing pronunciation");
    sink.sleep_until_end();

    Ok(())
}
