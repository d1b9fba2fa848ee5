//! # assess 命令实现
//!
//! 生成并打印阅读体验报告：
//! 1. 孩子画像与年龄分位带
//! 2. 整体匹配（中位数）与均值、跨度
//! 3. 逐本表格
//! 4. 孩子视角评价与家长阅读顺序建议
//! 5. 理论提示、阅读建议和数据提醒
//!
//! 可选导出逐本 CSV 和分位带图表。
//!
//! ## 依赖关系
//! - 使用 `cli/assess.rs` 定义的参数
//! - 使用 `classify/report.rs` 生成报告
//! - 使用 `utils/output.rs`, `utils/chart.rs`

use crate::classify::{build_assessment, Assessment, Profile};
use crate::cli::assess::AssessArgs;
use crate::dataset::Dataset;
use crate::error::{ReadfitError, Result};
use crate::utils::chart::{self, ChartPoint};
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};
use tracing::debug;

/// 报告表格行
#[derive(Debug, Clone, Tabled)]
struct ItemRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "体系")]
    system: String,
    #[tabled(rename = "级别")]
    level: String,
    #[tabled(rename = "Lexile")]
    lexile: String,
    #[tabled(rename = "匹配")]
    tag: String,
    #[tabled(rename = "提示")]
    hint: String,
}

/// 执行 assess 命令
pub fn execute(dataset: &Dataset, args: AssessArgs) -> Result<()> {
    let profile = Profile {
        age: args.age,
        gender: args.gender.map(Into::into),
    };
    debug!(age = profile.age, picks = args.picks.len(), "building assessment");

    let report = build_assessment(dataset, profile, &args.picks)?;

    print_report(&report);

    if let Some(path) = &args.output_csv {
        save_items_csv(&report, path)?;
        output::print_success(&format!("Report table saved to '{}'", path.display()));
    }

    if let Some(path) = &args.plot {
        let points: Vec<ChartPoint> = report
            .items
            .iter()
            .zip(report.values())
            .map(|(item, value)| ChartPoint {
                label: format!("{} · {}", item.system_name, item.level),
                value,
            })
            .collect();
        let title = format!("Age {} difficulty bands", report.profile.age);
        chart::generate_band_chart(
            &points,
            &report.bands,
            &title,
            path,
            (args.width, args.height),
        )?;
        output::print_success(&format!("Band chart saved to '{}'", path.display()));
    }

    Ok(())
}

fn print_report(report: &Assessment) {
    output::print_header("阅读体验报告");

    let who = match report.profile.gender {
        Some(g) => format!("{} 岁 · {}", report.profile.age, g),
        None => format!("{} 岁", report.profile.age),
    };
    output::print_kv("孩子", &who);
    output::print_kv("分位带", &band_summary(report));
    println!(
        "  {:<10} {} {}",
        "整体匹配",
        output::tag_badge(report.overall.tag),
        report.overall.message
    );
    output::print_kv("中位数", &lexile_or_dash(report.median));
    output::print_kv("均值", &lexile_or_dash(report.mean.map(|m| m.round())));
    output::print_kv("跨度", &lexile_or_dash(report.spread));

    output::print_section("逐本匹配");
    let rows: Vec<ItemRow> = report
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| ItemRow {
            index: i + 1,
            system: item.system_name.clone(),
            level: item.level.clone(),
            lexile: item.difficulty_label(),
            tag: item.classification.tag.label().to_string(),
            hint: item.hint.clone(),
        })
        .collect();
    println!("{}", Table::new(&rows));

    output::print_section("孩子视角");
    println!("  {}", report.child_text);

    output::print_section("家长建议");
    let order: Vec<String> = report
        .parent_advice
        .order
        .iter()
        .filter_map(|&i| report.items.get(i))
        .enumerate()
        .map(|(n, item)| format!("第{}本 → {} · {}", n + 1, item.system_name, item.level))
        .collect();
    for line in &order {
        println!("  {}", line);
    }
    println!("  {}", report.parent_advice.text);

    output::print_section("为什么这样安排");
    for note in &report.theory_notes {
        println!("  - {}", note);
    }

    output::print_section("阅读建议");
    for item in &report.items {
        println!("  {} · {}：{}", item.system_name, item.level, item.suggestion);
    }

    if !report.warnings.is_empty() {
        println!();
        for warning in &report.warnings {
            output::print_warning(warning);
        }
    }

    println!();
    output::print_separator();
    output::print_info(
        "按年龄段的 Lexile 分布取 P20–P80 划分偏易/舒适/最佳挑战/偏难；该年龄样本不足时使用全局分布。",
    );
}

fn band_summary(report: &Assessment) -> String {
    match report.bands.edges() {
        Some((p20, p40, p60, p80)) => format!(
            "P20 {:.0} · P40 {:.0} · P60 {:.0} · P80 {:.0}",
            p20, p40, p60, p80
        ),
        None => "该年龄段暂无基线".to_string(),
    }
}

fn lexile_or_dash(value: Option<f64>) -> String {
    value
        .map(|v| format!("{}L", v))
        .unwrap_or_else(|| "-".to_string())
}

/// 保存逐本结果到 CSV
fn save_items_csv(report: &Assessment, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(ReadfitError::CsvError)?;

    wtr.write_record([
        "index", "system", "level", "lexile", "raw", "band", "tag", "hint",
    ])?;

    for (i, item) in report.items.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            item.system_name.clone(),
            item.level.clone(),
            item.difficulty.map(|v| v.to_string()).unwrap_or_default(),
            item.raw_difficulty.clone(),
            item.band.clone(),
            item.classification.tag.label().to_string(),
            item.hint.clone(),
        ])?;
    }

    wtr.flush().map_err(|e| ReadfitError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;
    Ok(())
}
