use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Score out of range: {0} (expected 0..=1000000)")]
    ScoreOutOfRange(u32),

    #[error("Chart level out of range: {0} (expected 1..=19)")]
    LevelOutOfRange(u8),

    #[error("Cannot reconstruct: score is required")]
    ScoreRequired,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
