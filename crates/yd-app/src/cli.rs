use clap::Parser;

/// yd is translate command line program
#[derive(Debug, Parser)]
#[command(name = "yd", version)]
pub struct Cli {
    /// The word to translate
    #[arg(short, long)]
    pub word: String,

    /// Import the result to Anki
    #[arg(long)]
    pub anki: bool,

    /// Let Anki accept a note that duplicates an existing one
    #[arg(long, requires = "anki")]
    pub allow_dup: bool,

    /// Speak the word after printing the result
    #[arg(short, long)]
    pub speech: bool,

    /// Debug logging on stderr (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}
