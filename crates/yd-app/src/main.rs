use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use yd_config::Config;
use yd_core::Accent;
use yd_translator::{Translator, YoudaoClient};

pub mod cli;
pub mod error;
pub mod flashcard;
pub mod speech;


use self::cli::Cli;
use self::error::AppError;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::new();

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("failed to start async runtime: {e}");
            return ExitCode::from(2);
        }
    };

    let outcome = runtime.block_on(run(cli, &config));

    // Playback still running after the wait is abandoned, not awaited.
    runtime.shutdown_background();

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_target(false)
        .init();
}

/// Look up, print, then optionally create a card and speak
pub async fn run(cli: Cli, config: &Config) -> anyhow::Result<()> {
    // The word goes upstream exactly as typed; trimming only gates emptiness.
    let word = cli.word.as_str();
    if word.trim().is_empty() {
        return Err(AppError::EmptyWord.into());
    }

    let translator = YoudaoClient::new(
        config.network.api_url.clone(),
        config.network.request_timeout(),
    )?;
    tracing::debug!("Looking up {:?} with {}", word, translator.metadata().name);

    let result = translator
        .lookup(word)
        .await
        .with_context(|| format!("Failed to look up {:?}", word))?;

    if result.is_invalid() {
        return Err(AppError::InvalidWord(word.to_string()).into());
    }

    if let Some(headword) = result.headword() {
        if headword != word {
            tracing::info!("{:?} resolved to headword {:?}", word, headword);
        }
    }

    // print result first
    println!("{}", yd_core::render_report(&result));

    if cli.anki {
        flashcard::handle_card_creation(config, &result, cli.allow_dup).await?;
    }

    if cli.speech {
        let url = result.audio_link(Accent::Us, &config.network.api_url);
        speech::speak(url, config.network.request_timeout(), config.audio.wait()).await;
    }

    Ok(())
}
