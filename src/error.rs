pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid diagram description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("No input provided")]
    EmptyInput,

    #[error("Unknown flowchart direction: {0} (expected TD, TB, LR, BT or RL)")]
    UnknownDirection(String),
}
