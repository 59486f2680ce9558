use std::io;
use std::path::PathBuf;

use cannon_core::settings::SettingsError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("failed to spawn game loop thread")]
    Spawn(#[source] io::Error),
    #[error("game loop thread panicked")]
    LoopPanicked,
    #[error("failed to serialize snapshot")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write snapshot to {path:?}")]
    WriteSnapshot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
