//! # readfit - 分级读物难度匹配评估
//!
//! 把多个分级阅读体系的级别难度统一到 Lexile 数值，
//! 按孩子年龄计算难度分位带，并评估所选读物的匹配度。
//!
//! ## 子命令
//! - `systems` - 体系目录
//! - `levels`  - 某体系的有序级别与元数据
//! - `bands`   - 各年龄的 P20/P40/P60/P80 分位带
//! - `assess`  - 阅读体验报告
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── dataset/   (加载、合并、分位带)
//!   │     ├── classify/  (分类、文字评价、报告)
//!   │     ├── parsers/   (数值/年龄/标识解析)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod classify;
mod cli;
mod commands;
mod dataset;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    // RUST_LOG overrides, e.g. RUST_LOG=readfit=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("readfit=warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.data, cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
