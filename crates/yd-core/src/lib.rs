pub mod error;
pub mod model;
mod payload;
pub mod render;

pub use error::{DecodeError, RenderError};
pub use model::{Accent, DictionaryEntry, LookupResult, Pronunciations};
pub use render::{front_label, render_flashcard_back, render_report, try_render_flashcard_back};
