//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。每次运行只加载一次数据集，之后所有查询只读。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `dataset/`, `classify/`, `utils/`
//! - 子模块: catalog, assess

pub mod assess;
pub mod catalog;

use crate::cli::data::DataArgs;
use crate::cli::Commands;
use crate::dataset::{self, BandOptions, Dataset, SourcePaths};
use crate::error::Result;
use crate::utils::{output, progress};

/// 执行命令
pub fn run(data: DataArgs, cmd: Commands) -> Result<()> {
    let dataset = load_dataset(&data)?;

    match cmd {
        Commands::Systems(args) => catalog::execute_systems(&dataset, args),
        Commands::Levels(args) => catalog::execute_levels(&dataset, args),
        Commands::Bands(args) => catalog::execute_bands(&dataset, args),
        Commands::Assess(args) => assess::execute(&dataset, args),
    }
}

/// 定位并加载数据集
fn load_dataset(args: &DataArgs) -> Result<Dataset> {
    let paths = SourcePaths::resolve(
        &args.data_dir,
        args.metadata.clone(),
        args.calibration.clone(),
        args.difficulty.clone(),
    )?;
    let options = BandOptions {
        min_samples: args.min_samples,
        ..BandOptions::default()
    };

    let spinner = progress::create_spinner("Loading source tables...");
    let result = dataset::load(&paths, &options);
    spinner.finish_and_clear();
    let dataset = result?;

    output::print_info(&format!(
        "Loaded {} reading systems ({} difficulty observations)",
        dataset.catalog().len(),
        dataset.band_table().global_samples
    ));
    if paths.metadata.is_none() {
        output::print_warning("No metadata table found; system names are shown as ids.");
    }

    Ok(dataset)
}
