//! # 统一错误处理模块
//!
//! 定义 readfit 的所有错误类型，使用 `thiserror` 派生。
//!
//! 只有数据源整体不可用才是硬错误；单元格解析失败一律降级为空值，
//! 不会出现在这里。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// readfit 统一错误类型
#[derive(Error, Debug)]
pub enum ReadfitError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 数据源错误
    // ─────────────────────────────────────────────────────────────
    #[error("Data source '{source_name}' is unavailable: {path}\nReason: {reason}")]
    SourceUnavailable {
        source_name: String,
        path: String,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown reading system: {0}")]
    UnknownSystem(String),

    #[error("Selection '{system}' has no level chosen")]
    MissingLevel { system: String },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 图表错误
    // ─────────────────────────────────────────────────────────────
    #[error("Chart rendering failed: {0}")]
    ChartError(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ReadfitError>;
