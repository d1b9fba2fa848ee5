//! # assess 子命令 CLI 定义
//!
//! 选择孩子画像与若干本读物（体系 + 级别），生成阅读体验报告。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/assess.rs`

use crate::models::{Gender, Selection};

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 性别参数
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum GenderArg {
    Female,
    Male,
}

impl From<GenderArg> for Gender {
    fn from(g: GenderArg) -> Self {
        match g {
            GenderArg::Female => Gender::Female,
            GenderArg::Male => Gender::Male,
        }
    }
}

/// assess 子命令参数
#[derive(Args, Debug)]
pub struct AssessArgs {
    /// Child's age (3-15)
    #[arg(long, value_parser = clap::value_parser!(u32).range(3..=15))]
    pub age: u32,

    /// Child's gender, shown in the report header
    #[arg(long, value_enum)]
    pub gender: Option<GenderArg>,

    /// A chosen book as "<system>::<level>" (repeatable, e.g. --pick "RAZ::J")
    #[arg(long = "pick", value_parser = parse_pick, required = true)]
    pub picks: Vec<Selection>,

    /// Write the per-book table to a CSV file
    #[arg(long)]
    pub output_csv: Option<PathBuf>,

    /// Draw the chosen levels against the age bands (PNG, or SVG by extension)
    #[arg(long)]
    pub plot: Option<PathBuf>,

    /// Figure width in pixels
    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    /// Figure height in pixels
    #[arg(long, default_value_t = 640)]
    pub height: u32,
}

/// 解析 "<体系>::<级别>"
pub fn parse_pick(input: &str) -> Result<Selection, String> {
    let (system, level) = input.split_once("::").ok_or_else(|| {
        format!(
            "Invalid pick '{}'. Use \"<system>::<level>\", e.g. \"Oxford Reading Tree::Stage 5\"",
            input
        )
    })?;
    let system = system.trim();
    if system.is_empty() {
        return Err(format!("Invalid pick '{}': system is empty", input));
    }
    Ok(Selection {
        system: system.to_string(),
        level: level.trim().to_string(),
    })
}
