//! # 工具函数模块
//!
//! 提供美化输出、加载进度提示和图表导出。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 子模块: output, progress, chart

pub mod chart;
pub mod output;
pub mod progress;
