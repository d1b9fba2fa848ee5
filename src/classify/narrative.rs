//! # 评估文字生成
//!
//! 根据各本书的标签计数，从固定的优先级列表中挑选给孩子的话和给家长的建议，
//! 并给出推荐阅读顺序（偏易 -> 舒适/参考/未知 -> 最佳挑战 -> 偏难，同级保持原顺序）。
//!
//! ## 依赖关系
//! - 被 `classify/report.rs` 和 `commands/assess.rs` 使用
//! - 使用 `classify/classifier.rs`

use super::classifier::band_tag;
use crate::models::{AgeBandSet, FitTag};

use serde::Serialize;

/// 家长视角的阅读顺序建议
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceAdvice {
    /// 推荐顺序（输入下标）
    pub order: Vec<usize>,
    /// 建议文字
    pub text: String,
}

/// 各标签计数
#[derive(Debug, Default, Clone, Copy)]
struct TagCounts {
    easy: usize,
    comfy: usize,
    best: usize,
    hard: usize,
}

impl TagCounts {
    fn from_tags(tags: &[FitTag]) -> Self {
        let mut c = TagCounts::default();
        for tag in tags {
            match tag {
                FitTag::TooEasy => c.easy += 1,
                FitTag::Comfortable => c.comfy += 1,
                FitTag::BestChallenge => c.best += 1,
                FitTag::TooHard => c.hard += 1,
                FitTag::Reference | FitTag::Unknown => {}
            }
        }
        c
    }
}

fn tags_of(values: &[Option<f64>], bands: &AgeBandSet) -> Vec<FitTag> {
    values.iter().map(|v| band_tag(*v, bands)).collect()
}

/// 给孩子的话
pub fn child_evaluation_text(values: &[Option<f64>], bands: &AgeBandSet) -> String {
    let c = TagCounts::from_tags(&tags_of(values, bands));
    let mut parts = Vec::new();

    let headline = if c.hard >= 1 && c.best >= 1 {
        "今天有一部分内容会有点“挑战”，但也搭配了较合适的书，先稳稳读，再去挑战就很好。"
    } else if c.best >= 1 && c.easy >= 1 {
        "先读轻松的热身书，再读一点点挑战的内容，你会感觉既顺利又有提升。"
    } else if c.comfy >= 2 {
        "今天的书大多在你的舒适区内，你会读得比较流畅，适合练速度与表达。"
    } else if c.hard >= 2 {
        "今天的书整体偏难，别担心，我们可以配合听读或一起读。"
    } else {
        "今天这几本书难度搭配比较均衡，可以安心开读。"
    };
    parts.push(headline);

    if c.easy >= 1 {
        parts.push("有一本比较容易，适合做“热身”或“复读”，把语音语调练稳。");
    }
    if c.best >= 1 {
        parts.push("也有一本稍微有挑战，遇到生词可以先猜测、再查证，或者和家长一起读。");
    }
    if c.hard >= 1 {
        parts.push("如果感觉有点吃力，先听一遍音频再跟读，会轻松很多。");
    }

    parts.join(" ")
}

/// 推荐阅读顺序：按标签权重稳定排序
pub fn recommended_order(tags: &[FitTag]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..tags.len()).collect();
    order.sort_by_key(|&i| tags[i].order_rank());
    order
}

/// 给家长的顺序与建议
pub fn parent_sequence_advice(values: &[Option<f64>], bands: &AgeBandSet) -> SequenceAdvice {
    let tags = tags_of(values, bands);
    let order = recommended_order(&tags);

    let mut desc =
        vec!["建议阅读顺序：从较容易的开始热身 → 进入舒适区的主读本 → 最后处理略有挑战的文本。"];
    if tags.contains(&FitTag::TooHard) {
        desc.push("如出现“偏难”文本，请采用“先听后读/分段共读/关键词扫读后精读”等方式。");
    }
    if !tags.contains(&FitTag::TooEasy) {
        desc.push("当前组合缺少易文，建议补充一篇用于流利度或重复朗读练习。");
    }

    SequenceAdvice {
        order,
        text: desc.join(" "),
    }
}

/// 好的当日阅读的理论依据
pub fn theory_notes() -> &'static [&'static str] {
    &[
        "难度匹配：组合的中位难度落在舒适—轻挑战区间（约P40–P80）通常阅读体验最佳。",
        "流利度支持：加入一篇易文做热身/复读，有助于速度、准确与理解提升。",
        "听读结合：当包含偏难文本时，先听后读或边听边读能降低解码负荷，提升理解。",
        "体裁多样：若今天全是故事类，可偶尔加入信息类/说明文，帮助知识建构与结构意识。",
        "动机与选择：允许孩子对书目有选择权，更能促进投入与理解。",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bands() -> AgeBandSet {
        AgeBandSet {
            p20: Some(400.0),
            p40: Some(500.0),
            p60: Some(600.0),
            p80: Some(700.0),
        }
    }

    const EASY: Option<f64> = Some(300.0);
    const COMFY: Option<f64> = Some(550.0);
    const BEST: Option<f64> = Some(650.0);
    const HARD: Option<f64> = Some(900.0);

    #[test]
    fn test_headline_priority() {
        let b = bands();
        let text = child_evaluation_text(&[HARD, BEST, COMFY], &b);
        assert!(text.starts_with("今天有一部分内容会有点“挑战”"));

        let text = child_evaluation_text(&[EASY, BEST], &b);
        assert!(text.starts_with("先读轻松的热身书"));

        // 挑战 + 舒适 优先于 "大多舒适"
        let text = child_evaluation_text(&[COMFY, COMFY, BEST, HARD], &b);
        assert!(text.starts_with("今天有一部分内容"));

        let text = child_evaluation_text(&[COMFY, COMFY, BEST], &b);
        assert!(text.starts_with("今天的书大多在你的舒适区内"));

        let text = child_evaluation_text(&[HARD, HARD], &b);
        assert!(text.starts_with("今天的书整体偏难"));

        let text = child_evaluation_text(&[COMFY, None], &b);
        assert!(text.starts_with("今天这几本书难度搭配比较均衡"));
    }

    #[test]
    fn test_add_on_sentences() {
        let text = child_evaluation_text(&[EASY, BEST, HARD], &bands());
        assert!(text.contains("热身”或“复读"));
        assert!(text.contains("稍微有挑战"));
        assert!(text.contains("先听一遍音频"));

        let text = child_evaluation_text(&[COMFY], &bands());
        assert!(!text.contains("热身”或“复读"));
        assert!(!text.contains("先听一遍音频"));
    }

    #[test]
    fn test_recommended_order_is_stable() {
        let advice = parent_sequence_advice(&[HARD, None, BEST, EASY, COMFY], &bands());
        // 偏易(3) -> 未知(1)、舒适(4) 保持原顺序 -> 最佳挑战(2) -> 偏难(0)
        assert_eq!(advice.order, vec![3, 1, 4, 2, 0]);
    }

    #[test]
    fn test_parent_text() {
        let advice = parent_sequence_advice(&[HARD, COMFY], &bands());
        assert!(advice.text.contains("先听后读"));
        assert!(advice.text.contains("缺少易文"));

        let advice = parent_sequence_advice(&[EASY, COMFY], &bands());
        assert!(!advice.text.contains("先听后读"));
        assert!(!advice.text.contains("缺少易文"));
    }

    #[test]
    fn test_reference_bands_keep_input_order() {
        let advice = parent_sequence_advice(&[HARD, EASY], &AgeBandSet::EMPTY);
        assert_eq!(advice.order, vec![0, 1]);
    }

    #[test]
    fn test_theory_notes() {
        assert_eq!(theory_notes().len(), 5);
    }
}
