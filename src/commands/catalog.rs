//! # 目录类命令实现
//!
//! - `systems`: 体系目录表
//! - `levels`: 体系元数据与有序级别表，可导出 CSV
//! - `bands`: 各年龄分位带表，可导出 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/catalog.rs` 定义的参数
//! - 使用 `dataset/`
//! - 使用 `utils/output.rs`

use crate::cli::catalog::{BandsArgs, LevelsArgs, SystemsArgs};
use crate::dataset::{BandSource, Dataset};
use crate::error::{ReadfitError, Result};
use crate::models::AgeBandSet;
use crate::utils::output;

use serde::Serialize;
use std::path::Path;
use tabled::{Table, Tabled};

/// 体系目录行
#[derive(Debug, Clone, Tabled)]
struct SystemRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Publisher")]
    publisher: String,
    #[tabled(rename = "Levels")]
    levels: usize,
    #[tabled(rename = "Range")]
    level_range: String,
}

/// 级别行（终端与 CSV 共用）
#[derive(Debug, Clone, Tabled, Serialize)]
struct LevelRow {
    #[tabled(rename = "#")]
    #[serde(rename = "order")]
    order: usize,
    #[tabled(rename = "Level")]
    level: String,
    #[tabled(rename = "Lexile")]
    lexile: String,
    #[tabled(rename = "Raw")]
    raw: String,
    #[tabled(rename = "Band")]
    band: String,
    #[tabled(rename = "Features")]
    features: String,
    #[tabled(rename = "Source")]
    source: String,
}

/// 分位带行（终端与 CSV 共用）
#[derive(Debug, Clone, Tabled, Serialize)]
struct BandRow {
    #[tabled(rename = "Age")]
    age: String,
    #[tabled(rename = "Samples")]
    samples: usize,
    #[tabled(rename = "Bands from")]
    source: String,
    #[tabled(rename = "P20")]
    p20: String,
    #[tabled(rename = "P40")]
    p40: String,
    #[tabled(rename = "P60")]
    p60: String,
    #[tabled(rename = "P80")]
    p80: String,
}

/// 执行 systems 命令
pub fn execute_systems(dataset: &Dataset, args: SystemsArgs) -> Result<()> {
    output::print_header("Reading Systems");

    let filter = args.filter.map(|f| f.to_lowercase());
    let rows: Vec<SystemRow> = dataset
        .catalog()
        .iter()
        .filter(|c| match &filter {
            Some(f) => c.name.to_lowercase().contains(f) || c.id.contains(f),
            None => true,
        })
        .map(|c| {
            let meta = dataset.system(&c.id);
            SystemRow {
                name: c.name.clone(),
                id: c.id.clone(),
                publisher: meta.map(|m| m.publisher.clone()).unwrap_or_default(),
                levels: dataset.levels(&c.id).len(),
                level_range: meta.map(|m| m.level_range.clone()).unwrap_or_default(),
            }
        })
        .collect();

    if rows.is_empty() {
        output::print_warning("No reading systems match.");
        return Ok(());
    }

    println!("{}", Table::new(&rows));
    output::print_info(&format!("{} systems", rows.len()));
    Ok(())
}

/// 执行 levels 命令
pub fn execute_levels(dataset: &Dataset, args: LevelsArgs) -> Result<()> {
    let entry = dataset
        .resolve_system(&args.system)
        .ok_or_else(|| ReadfitError::UnknownSystem(args.system.clone()))?;

    output::print_header(&format!("Levels of {}", entry.name));

    if let Some(meta) = dataset.system(&entry.id) {
        for (key, value) in [
            ("出版者", &meta.publisher),
            ("课程定位", &meta.positioning),
            ("分级范围", &meta.level_range),
            ("难度说明", &meta.difficulty_note),
            ("文本特征", &meta.text_features),
        ] {
            if !value.is_empty() {
                output::print_kv(key, value);
            }
        }
        println!();
    }

    let rows: Vec<LevelRow> = dataset
        .levels(&entry.id)
        .iter()
        .enumerate()
        .map(|(i, e)| LevelRow {
            order: i + 1,
            level: e.level.clone(),
            lexile: e.difficulty_label(),
            raw: e.raw_difficulty.clone(),
            band: e.band.clone(),
            features: e.features.clone(),
            source: e.source.clone(),
        })
        .collect();

    println!("{}", Table::new(&rows));

    if let Some(path) = &args.output_csv {
        write_csv(&rows, path)?;
        output::print_success(&format!("Levels saved to '{}'", path.display()));
    }
    Ok(())
}

/// 执行 bands 命令
pub fn execute_bands(dataset: &Dataset, args: BandsArgs) -> Result<()> {
    output::print_header("Difficulty Bands by Age");

    let table = dataset.band_table();
    let mut rows: Vec<BandRow> = table
        .by_age
        .iter()
        .map(|(age, entry)| {
            let source = match entry.source {
                BandSource::OwnBucket => "own bucket",
                BandSource::GlobalFallback => "global",
            };
            band_row(age.to_string(), entry.samples, source, &entry.bands)
        })
        .collect();
    rows.push(band_row(
        "all".to_string(),
        table.global_samples,
        "global",
        &table.global,
    ));

    println!("{}", Table::new(&rows));
    output::print_info(
        "统计口径：按年龄段观测到的 Lexile 分布计算分位（P20/P40/P60/P80）；样本不足时使用全局分布。",
    );

    if let Some(path) = &args.output_csv {
        write_csv(&rows, path)?;
        output::print_success(&format!("Bands saved to '{}'", path.display()));
    }
    Ok(())
}

fn band_row(age: String, samples: usize, source: &str, bands: &AgeBandSet) -> BandRow {
    let fmt = |v: Option<f64>| v.map(|x| format!("{:.1}", x)).unwrap_or_else(|| "-".to_string());
    BandRow {
        age,
        samples,
        source: source.to_string(),
        p20: fmt(bands.p20),
        p40: fmt(bands.p40),
        p60: fmt(bands.p60),
        p80: fmt(bands.p80),
    }
}

/// 保存表格行到 CSV
fn write_csv<T: Serialize>(rows: &[T], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(|e| ReadfitError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;
    Ok(())
}
