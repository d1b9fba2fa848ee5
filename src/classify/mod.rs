//! # 分类与评估模块
//!
//! 把难度值放到分位带上打标签，并据此生成面向孩子和家长的文字与阅读顺序。
//! 这里的函数都是纯函数，只读取 `Dataset`。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `dataset/`, `models/`
//! - 子模块: classifier, narrative, report

pub mod classifier;
pub mod narrative;
pub mod report;

pub use report::{build_assessment, Assessment, Profile};
