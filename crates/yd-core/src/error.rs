#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Malformed dictionary payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Flashcard template error: {0}")]
    Template(#[from] minijinja::Error),
}
