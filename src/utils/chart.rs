//! # 分位带图表
//!
//! 使用 `plotters` 把所选读物的难度画在孩子年龄的分位带上，
//! 对应报告的图片导出。
//!
//! ## 功能
//! - 偏易 / 舒适 / 最佳挑战 / 偏难 四个区域着色
//! - P20/P40/P60/P80 参考线
//! - 每本书一个点，附级别标注
//! - 按扩展名输出 PNG 或 SVG
//!
//! ## 依赖关系
//! - 被 `commands/assess.rs` 调用
//! - 使用 `models/bands.rs`
//! - 使用 `plotters` 渲染图表

use crate::error::{ReadfitError, Result};
use crate::models::AgeBandSet;

use plotters::prelude::*;
use std::path::Path;

/// 图上的一个点
#[derive(Debug, Clone)]
pub struct ChartPoint {
    pub label: String,
    pub value: Option<f64>,
}

/// 生成分位带图表，扩展名为 `.svg` 时输出 SVG，否则输出 PNG
pub fn generate_band_chart(
    points: &[ChartPoint],
    bands: &AgeBandSet,
    title: &str,
    output_path: &Path,
    size: (u32, u32),
) -> Result<()> {
    let use_svg = output_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("svg"))
        .unwrap_or(false);

    if use_svg {
        let root = SVGBackend::new(output_path, size).into_drawing_area();
        draw_band_chart(&root, points, bands, title)?;
        root.present().map_err(chart_error)?;
    } else {
        let root = BitMapBackend::new(output_path, size).into_drawing_area();
        draw_band_chart(&root, points, bands, title)?;
        root.present().map_err(chart_error)?;
    }
    Ok(())
}

fn draw_band_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    points: &[ChartPoint],
    bands: &AgeBandSet,
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let values: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .filter_map(|(i, p)| p.value.map(|v| ((i + 1) as f64, v)))
        .collect();

    if values.is_empty() {
        return Err(ReadfitError::ChartError(
            "No selection has a numeric difficulty to plot".to_string(),
        ));
    }

    let edges = bands.edges();
    let (y_min, y_max) = y_range(&values, edges);
    let x_max = points.len() as f64 + 0.5;

    root.fill(&WHITE).map_err(chart_error)?;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 26).into_font())
        .margin(24)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.5..x_max, y_min..y_max)
        .map_err(chart_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(points.len())
        .x_label_formatter(&|x| format!("#{}", x.round() as i64))
        .x_desc("Selection")
        .y_desc("Lexile")
        .label_style(("sans-serif", 15))
        .draw()
        .map_err(chart_error)?;

    // 着色区域与参考线
    if let Some((p20, p40, p60, p80)) = edges {
        let regions = [
            (y_min, p20, RGBColor(240, 173, 78)),
            (p20, p60, RGBColor(92, 184, 92)),
            (p60, p80, RGBColor(66, 139, 202)),
            (p80, y_max, RGBColor(217, 83, 79)),
        ];
        chart
            .draw_series(regions.iter().map(|(lo, hi, color)| {
                Rectangle::new([(0.5, *lo), (x_max, *hi)], color.mix(0.15).filled())
            }))
            .map_err(chart_error)?;

        for (name, edge) in [("P20", p20), ("P40", p40), ("P60", p60), ("P80", p80)] {
            chart
                .draw_series(LineSeries::new(
                    [(0.5, edge), (x_max, edge)],
                    BLACK.mix(0.4).stroke_width(1),
                ))
                .map_err(chart_error)?;
            chart
                .draw_series(std::iter::once(Text::new(
                    format!("{} {:.0}", name, edge),
                    (0.55, edge),
                    ("sans-serif", 12).into_font().color(&BLACK.mix(0.6)),
                )))
                .map_err(chart_error)?;
        }
    }

    // 所选读物
    chart
        .draw_series(
            values
                .iter()
                .map(|(x, y)| Circle::new((*x, *y), 7, RGBColor(33, 37, 41).filled())),
        )
        .map_err(chart_error)?;

    for (i, point) in points.iter().enumerate() {
        if let Some(v) = point.value {
            chart
                .draw_series(std::iter::once(Text::new(
                    format!("{} ({}L)", point.label, v),
                    ((i + 1) as f64 + 0.08, v),
                    ("sans-serif", 14).into_font().color(&BLACK),
                )))
                .map_err(chart_error)?;
        }
    }

    Ok(())
}

/// y 轴范围：覆盖全部数值与分位线，上下留 10% 余量
fn y_range(values: &[(f64, f64)], edges: Option<(f64, f64, f64, f64)>) -> (f64, f64) {
    let mut lo = values.iter().map(|(_, y)| *y).fold(f64::INFINITY, f64::min);
    let mut hi = values
        .iter()
        .map(|(_, y)| *y)
        .fold(f64::NEG_INFINITY, f64::max);
    if let Some((p20, _, _, p80)) = edges {
        lo = lo.min(p20);
        hi = hi.max(p80);
    }
    let margin = ((hi - lo).abs() * 0.1).max(50.0);
    (lo - margin, hi + margin)
}

fn chart_error<E: std::fmt::Debug>(e: E) -> ReadfitError {
    ReadfitError::ChartError(format!("{:?}", e))
}
