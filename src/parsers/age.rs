//! # 年龄描述解析器
//!
//! 把 "6–7"、"3-5"、"6"、"约 7 岁（一年级）" 这类自由文本解析成整数年龄集合。
//!
//! ## 依赖关系
//! - 被 `dataset/merger.rs` 使用
//! - 使用 `regex` crate

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// 兜底提取时保留的年龄范围
pub const FALLBACK_AGE_MIN: u32 = 3;
pub const FALLBACK_AGE_MAX: u32 = 15;

static AGE_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*[–\-]\s*(\d+)").unwrap());
static BARE_INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// 解析年龄描述，返回升序去重的年龄集合
pub fn parse_ages(raw: &str) -> BTreeSet<u32> {
    let s = raw.trim();
    if s.is_empty() {
        return BTreeSet::new();
    }

    if let Some(caps) = AGE_RANGE.captures(s) {
        let a = caps[1].parse::<u32>().ok();
        let b = caps[2].parse::<u32>().ok();
        if let (Some(a), Some(b)) = (a, b) {
            return (a.min(b)..=a.max(b)).collect();
        }
    }

    if BARE_INTEGER.is_match(s) {
        return s.parse::<u32>().into_iter().collect();
    }

    // 兜底：提取全部数字并限制在合理年龄内
    DIGITS
        .find_iter(s)
        .filter_map(|m| m.as_str().parse::<u32>().ok())
        .filter(|age| (FALLBACK_AGE_MIN..=FALLBACK_AGE_MAX).contains(age))
        .collect()
}
