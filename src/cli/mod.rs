//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `systems`: 列出体系目录
//! - `levels`: 列出某体系的有序级别
//! - `bands`: 各年龄的分位带
//! - `assess`: 评估所选读物与孩子年龄的匹配度
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: data, catalog, assess

pub mod assess;
pub mod catalog;
pub mod data;

use clap::{Parser, Subcommand};

/// readfit - 分级读物难度匹配评估
#[derive(Parser)]
#[command(name = "readfit")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Normalize leveled-reader difficulty data and assess reading fit by age",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub data: data::DataArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// List reading systems that have at least one level
    Systems(catalog::SystemsArgs),

    /// List the ordered levels of one reading system
    Levels(catalog::LevelsArgs),

    /// Show P20/P40/P60/P80 difficulty bands for every age
    Bands(catalog::BandsArgs),

    /// Assess how chosen levels fit a child's age band
    Assess(assess::AssessArgs),
}
