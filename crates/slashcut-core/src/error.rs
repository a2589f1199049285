//! 切割引擎错误定义

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SlashError {
    #[error("Degenerate cut: start and end points coincide")]
    DegenerateInput,

    #[error("Slash too short: {length} <= {min}")]
    SlashTooShort { length: f64, min: f64 },

    #[error("Malformed polygon: {vertices} vertices, at least 3 required")]
    MalformedPolygon { vertices: usize },
}
