//! # 阅读体验报告
//!
//! 把用户的选择解析到数据集中的级别条目，汇总成一份完整评估：
//! 逐本分类、整体分类（中位数）、均值与跨度、孩子/家长文字、提醒和阅读建议。
//!
//! 选择的 (体系, 级别) 不存在时不报错，该本按"未知"处理。
//!
//! ## 依赖关系
//! - 被 `commands/assess.rs` 调用
//! - 使用 `dataset/`, `classify/classifier.rs`, `classify/narrative.rs`

use super::classifier::{aggregate, classify};
use super::narrative::{child_evaluation_text, parent_sequence_advice, theory_notes, SequenceAdvice};
use crate::dataset::bands::median;
use crate::dataset::Dataset;
use crate::error::{ReadfitError, Result};
use crate::models::system::difficulty_label;
use crate::models::{AgeBandSet, Classification, Gender, Selection};
use crate::parsers::system_id;

use serde::Serialize;

const DEFAULT_SUGGESTION: &str = "暂无；可根据孩子表现加入复述、找关键词、跟读等任务。";
const WARN_PARTIAL_VALUES: &str = "部分级别为区间或文本型数值，已取中位估计或暂缺。";
const HINT_NOT_FOUND: &str = "数据集中未找到该级别";

/// 孩子画像
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub age: u32,
    pub gender: Option<Gender>,
}

/// 报告中的一本书
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentItem {
    pub system_id: String,
    pub system_name: String,
    pub level: String,
    /// 是否在数据集中找到该级别
    pub found: bool,
    pub difficulty: Option<f64>,
    pub raw_difficulty: String,
    pub band: String,
    pub classification: Classification,
    /// 表格中"提示"一栏
    pub hint: String,
    /// 来自数据的可读性提示
    pub suggestion: String,
}

impl AssessmentItem {
    /// 难度展示文本
    pub fn difficulty_label(&self) -> String {
        difficulty_label(self.difficulty, &self.raw_difficulty)
    }
}

/// 完整评估
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub profile: Profile,
    pub bands: AgeBandSet,
    pub items: Vec<AssessmentItem>,
    pub median: Option<f64>,
    pub mean: Option<f64>,
    pub spread: Option<f64>,
    pub overall: Classification,
    pub child_text: String,
    pub parent_advice: SequenceAdvice,
    pub theory_notes: Vec<String>,
    pub warnings: Vec<String>,
}

impl Assessment {
    /// 各本书的难度值（与 `items` 下标一致）
    pub fn values(&self) -> Vec<Option<f64>> {
        self.items.iter().map(|i| i.difficulty).collect()
    }
}

/// 生成评估
pub fn build_assessment(
    dataset: &Dataset,
    profile: Profile,
    selections: &[Selection],
) -> Result<Assessment> {
    if selections.is_empty() {
        return Err(ReadfitError::InvalidArgument(
            "未选择有效读物，请至少选择 1 本并指定级别。".to_string(),
        ));
    }
    if let Some(sel) = selections.iter().find(|s| s.level.trim().is_empty()) {
        return Err(ReadfitError::MissingLevel {
            system: sel.system.clone(),
        });
    }

    let bands = *dataset.bands_for_age(profile.age);

    let items: Vec<AssessmentItem> = selections
        .iter()
        .map(|sel| resolve_item(dataset, sel, &bands))
        .collect();

    let values: Vec<Option<f64>> = items.iter().map(|i| i.difficulty).collect();
    let present: Vec<f64> = values.iter().flatten().copied().collect();

    let mut warnings = Vec::new();
    if present.len() < items.len() {
        warnings.push(WARN_PARTIAL_VALUES.to_string());
    }
    let missing: Vec<String> = items
        .iter()
        .filter(|i| !i.found)
        .map(|i| format!("{} · {}", i.system_name, i.level))
        .collect();
    if !missing.is_empty() {
        warnings.push(format!("以下选择在数据集中不存在：{}", missing.join("、")));
    }

    let mean = if present.is_empty() {
        None
    } else {
        Some(present.iter().sum::<f64>() / present.len() as f64)
    };
    let spread = if present.is_empty() {
        None
    } else {
        let lo = present.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = present.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(hi - lo)
    };

    Ok(Assessment {
        profile,
        bands,
        median: median(&present),
        mean,
        spread,
        overall: aggregate(&values, &bands),
        child_text: child_evaluation_text(&values, &bands),
        parent_advice: parent_sequence_advice(&values, &bands),
        theory_notes: theory_notes().iter().map(|s| s.to_string()).collect(),
        warnings,
        items,
    })
}

fn resolve_item(dataset: &Dataset, sel: &Selection, bands: &AgeBandSet) -> AssessmentItem {
    let (id, name) = match dataset.resolve_system(&sel.system) {
        Some(entry) => (entry.id.clone(), entry.name.clone()),
        None => (system_id(&sel.system), sel.system.trim().to_string()),
    };
    let level = sel.level.trim();
    let entry = dataset.level(&id, level);
    let difficulty = entry.and_then(|e| e.difficulty);
    let classification = classify(difficulty, bands);

    let hint = if entry.is_none() {
        HINT_NOT_FOUND.to_string()
    } else {
        classification.message.clone()
    };

    let system_notes = dataset
        .system(&id)
        .map(|s| s.text_features.as_str())
        .unwrap_or("");
    let suggestion = entry
        .map(|e| e.features.as_str())
        .filter(|f| !f.is_empty())
        .or(Some(system_notes).filter(|f| !f.is_empty()))
        .unwrap_or(DEFAULT_SUGGESTION)
        .to_string();

    AssessmentItem {
        system_id: id,
        system_name: name,
        level: level.to_string(),
        found: entry.is_some(),
        difficulty,
        raw_difficulty: entry.map(|e| e.raw_difficulty.clone()).unwrap_or_default(),
        band: entry.map(|e| e.band.clone()).unwrap_or_default(),
        classification,
        hint,
        suggestion,
    }
}
