#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("you must specify a word to translate")]
    EmptyWord,

    #[error("{0} may be an invalid word")]
    InvalidWord(String),
}
