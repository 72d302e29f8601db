//! 错误定义

use thiserror::Error;

/// 尺寸标注构造错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasureError {
    #[error("Can not create a measurement with length 0 at ({x}, {y})")]
    ZeroLength { x: f64, y: f64 },
}

/// 样式加载错误
#[derive(Error, Debug)]
pub enum StyleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
