use std::future::Future;
use std::time::Duration;

use yd_audio::AudioPlayer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// Playback ended, successfully or not, before the wait elapsed
    Finished,
    /// The wait elapsed first and playback was left running
    TimedOut,
}

/// Play `url` in the background for at most `wait`
pub async fn speak(url: String, fetch_timeout: Duration, wait: Duration) -> PlaybackOutcome {
    race_playback(
        async move {
            let player = AudioPlayer::new(fetch_timeout)?;
            player.play(&url).await
        },
        wait,
    )
    .await
}

/// Race `playback` on a spawned task against `wait`.
///
/// The task is never cancelled; if the wait wins it is simply abandoned.
pub async fn race_playback<F>(playback: F, wait: Duration) -> PlaybackOutcome
where
    F: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    let (done_tx, done_rx) = kanal::bounded_async::<()>(1);

    tokio::spawn(async move {
        if let Err(e) = playback.await {
            tracing::warn!("Audio playback failed: {:#}", e);
        }
        // Nobody is listening any more once the wait elapsed.
        let _ = done_tx.send(()).await;
    });

    tokio::select! {
        _ = done_rx.recv() => PlaybackOutcome::Finished,
        _ = tokio::time::sleep(wait) => {
            tracing::debug!("Audio still playing after {:?}, exiting", wait);
            PlaybackOutcome::TimedOut
        }
    }
}
