//! # 目录类子命令 CLI 定义
//!
//! - `systems`: 体系目录
//! - `levels`: 某体系的级别列表
//! - `bands`: 年龄分位带
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/catalog.rs`

use clap::Args;
use std::path::PathBuf;

/// systems 子命令参数
#[derive(Args, Debug)]
pub struct SystemsArgs {
    /// Only show systems whose name or id contains this text (case-insensitive)
    #[arg(long)]
    pub filter: Option<String>,
}

/// levels 子命令参数
#[derive(Args, Debug)]
pub struct LevelsArgs {
    /// Reading system name or id
    pub system: String,

    /// Also write the level list to a CSV file
    #[arg(long)]
    pub output_csv: Option<PathBuf>,
}

/// bands 子命令参数
#[derive(Args, Debug)]
pub struct BandsArgs {
    /// Also write the band table to a CSV file
    #[arg(long)]
    pub output_csv: Option<PathBuf>,
}
