//! # 难度分类器
//!
//! 决策表（按顺序，首个命中即返回）：
//! ```text
//! 无数值            -> 未知
//! 分位带不完整      -> 参考
//! v <  P20          -> 偏易
//! v <  P40          -> 舒适
//! v <= P60          -> 舒适
//! v <= P80          -> 最佳挑战
//! 其余              -> 偏难
//! ```
//!
//! ## 依赖关系
//! - 被 `classify/narrative.rs`, `classify/report.rs` 使用
//! - 使用 `dataset/bands.rs` 的 `median`

use crate::dataset::bands::median;
use crate::models::{AgeBandSet, Classification, FitTag};

/// 无数值时的提示
pub const MSG_UNKNOWN: &str = "区间或文本型数值，已取中位估计";
/// 整体无可计算数值时的提示
pub const MSG_NO_VALUES: &str = "无可计算的 Lexile";

/// 单个难度值的标签
#[allow(clippy::if_same_then_else)]
pub fn band_tag(value: Option<f64>, bands: &AgeBandSet) -> FitTag {
    let Some(v) = value else {
        return FitTag::Unknown;
    };
    let Some((p20, p40, p60, p80)) = bands.edges() else {
        return FitTag::Reference;
    };

    if v < p20 {
        FitTag::TooEasy
    } else if v < p40 {
        FitTag::Comfortable
    } else if v <= p60 {
        FitTag::Comfortable
    } else if v <= p80 {
        FitTag::BestChallenge
    } else {
        FitTag::TooHard
    }
}

/// 单个难度值的分类结果（标签 + 建议）
pub fn classify(value: Option<f64>, bands: &AgeBandSet) -> Classification {
    let tag = band_tag(value, bands);
    Classification::new(tag, advice(tag))
}

/// 多个难度值的整体分类：取非空值的中位数再分类
pub fn aggregate(values: &[Option<f64>], bands: &AgeBandSet) -> Classification {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    match median(&present) {
        Some(m) => classify(Some(m), bands),
        None => Classification::new(FitTag::Unknown, MSG_NO_VALUES),
    }
}

fn advice(tag: FitTag) -> &'static str {
    match tag {
        FitTag::Unknown => MSG_UNKNOWN,
        FitTag::Reference => "年龄基线不足，按全局估计",
        FitTag::TooEasy => "建议提高级别或增加任务复杂度",
        FitTag::Comfortable => "流畅阅读，适合巩固",
        FitTag::BestChallenge => "略高于舒适，有助于提升",
        FitTag::TooHard => "建议拆分任务或加入听读支持",
    }
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

    #[test]
    fn test_boundaries() {
        let b = bands();
        assert_eq!(band_tag(Some(399.0), &b), FitTag::TooEasy);
        assert_eq!(band_tag(Some(400.0), &b), FitTag::Comfortable);
        assert_eq!(band_tag(Some(500.0), &b), FitTag::Comfortable);
        assert_eq!(band_tag(Some(600.0), &b), FitTag::Comfortable);
        assert_eq!(band_tag(Some(601.0), &b), FitTag::BestChallenge);
        assert_eq!(band_tag(Some(700.0), &b), FitTag::BestChallenge);
        assert_eq!(band_tag(Some(701.0), &b), FitTag::TooHard);
        assert_eq!(band_tag(None, &b), FitTag::Unknown);
    }

    #[test]
    fn test_incomplete_bands_are_reference() {
        let b = AgeBandSet {
            p80: None,
            ..bands()
        };
        assert_eq!(band_tag(Some(10.0), &b), FitTag::Reference);
        assert_eq!(band_tag(Some(10.0), &AgeBandSet::EMPTY), FitTag::Reference);
        // 无数值优先于分位带缺失
        assert_eq!(band_tag(None, &AgeBandSet::EMPTY), FitTag::Unknown);
    }

    #[test]
    fn test_classify_messages() {
        let c = classify(Some(650.0), &bands());
        assert_eq!(c.tag, FitTag::BestChallenge);
        assert_eq!(c.message, "略高于舒适，有助于提升");
        assert_eq!(classify(None, &bands()).message, MSG_UNKNOWN);
    }

    #[test]
    fn test_aggregate_uses_median_of_present_values() {
        let b = bands();
        // 中位数 450 -> 舒适
        let c = aggregate(&[Some(100.0), None, Some(450.0), Some(900.0)], &b);
        assert_eq!(c.tag, FitTag::Comfortable);
        // 偶数个取两中间值的平均: (650 + 750) / 2 = 700
        let c = aggregate(&[Some(650.0), Some(750.0)], &b);
        assert_eq!(c.tag, FitTag::BestChallenge);
    }

    #[test]
    fn test_aggregate_without_values_is_unknown() {
        let c = aggregate(&[None, None], &bands());
        assert_eq!(c.tag, FitTag::Unknown);
        assert_eq!(c.message, MSG_NO_VALUES);
        assert_eq!(aggregate(&[], &bands()).tag, FitTag::Unknown);
    }
}
