use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::parse_var;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    /// How long the process waits for playback before exiting anyway
    pub wait_ms: u64,
}

impl AudioConfig {
    pub(crate) fn from_vars(var: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            wait_ms: parse_var(var, "YD_AUDIO_WAIT_MS").unwrap_or(2000),
        }
    }

    pub fn wait(&self) -> Duration {
        Duration::from_millis(self.wait_ms)
    }
}
