//! # 数据源参数
//!
//! 所有子命令共享的数据源与分位带参数，可通过环境变量提供。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/mod.rs` 加载数据集

use clap::Args;
use std::path::PathBuf;

/// 数据源参数
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Directory containing the CSV exports of the source spreadsheets
    #[arg(long, global = true, default_value = "data", env = "READFIT_DATA_DIR")]
    pub data_dir: PathBuf,

    /// Metadata table (基本信息); discovered in --data-dir if omitted
    #[arg(long, global = true, env = "READFIT_METADATA")]
    pub metadata: Option<PathBuf>,

    /// Calibration table, processed first; discovered in --data-dir if omitted
    #[arg(long, global = true, env = "READFIT_CALIBRATION")]
    pub calibration: Option<PathBuf>,

    /// Difficulty table (语言难度数值表), processed second; discovered in --data-dir if omitted
    #[arg(long, global = true, env = "READFIT_DIFFICULTY")]
    pub difficulty: Option<PathBuf>,

    /// Minimum observations for an age to get its own bands (otherwise global bands are used)
    #[arg(long, global = true, default_value_t = 8)]
    pub min_samples: usize,
}
