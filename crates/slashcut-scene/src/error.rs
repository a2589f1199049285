//! 场景错误定义

use slashcut_core::SlashError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Slash rejected: {0}")]
    Slash(#[from] SlashError),

    #[error("Invalid body #{index}: {source}")]
    InvalidBody {
        index: usize,
        #[source]
        source: SlashError,
    },
}
