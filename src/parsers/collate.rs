//! # 名称排序
//!
//! 体系目录与无数值级别按中文习惯排序：使用 ICU 的 `zh` 排序规则，
//! 拉丁字母排在汉字之前，汉字按拼音。排序规则判为相等时再比较原文，保证排序完全确定。
//!
//! ## 依赖关系
//! - 被 `dataset/merger.rs` 使用
//! - 使用 `icu` crate (collator)

use icu::collator::{Collator, CollatorOptions};
use icu::locid::locale;
use std::cmp::Ordering;
use tracing::warn;

thread_local! {
    static ZH_COLLATOR: Option<Collator> = build_collator();
}

fn build_collator() -> Option<Collator> {
    match Collator::try_new(&locale!("zh").into(), CollatorOptions::new()) {
        Ok(collator) => Some(collator),
        Err(e) => {
            warn!(error = %e, "zh collator unavailable, names sort by code point");
            None
        }
    }
}

/// 比较两个显示名称
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let primary = ZH_COLLATOR.with(|collator| match collator {
        Some(c) => c.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()),
    });
    primary.then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&'static str]) -> Vec<&'static str> {
        let mut v = names.to_vec();
        v.sort_by(|a, b| compare_names(a, b));
        v
    }

    #[test]
    fn test_case_insensitive_first() {
        assert_eq!(compare_names("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_names("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn test_latin_before_cjk() {
        assert_eq!(
            sorted(&["牛津树", "Big Cat", "阿甲", "raz"]),
            vec!["Big Cat", "raz", "阿甲", "牛津树"]
        );
    }

    #[test]
    fn test_han_names_follow_pinyin() {
        // a < hai < niu < pei
        assert_eq!(
            sorted(&["培生", "牛津树", "阿甲", "海尼曼"]),
            vec!["阿甲", "海尼曼", "牛津树", "培生"]
        );
    }

    #[test]
    fn test_total_order_on_case_ties() {
        assert_ne!(compare_names("ORT", "ort"), Ordering::Equal);
        assert_eq!(
            compare_names("ORT", "ort"),
            compare_names("ort", "ORT").reverse()
        );
        assert_eq!(compare_names("same", "same"), Ordering::Equal);
    }
}
