//! # 数据模型模块
//!
//! 定义分级体系、级别条目、年龄分位带与评估结果的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `dataset/`, `classify/` 和 `commands/` 使用
//! - 子模块: system, bands, assessment

pub mod assessment;
pub mod bands;
pub mod system;

pub use assessment::{Classification, FitTag, Gender, Selection, Tone};
pub use bands::AgeBandSet;
pub use system::{CatalogEntry, LevelEntry, ReadingSystem};
