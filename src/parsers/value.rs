//! # 难度数值解析器
//!
//! 把 Lexile 单元格解析成单个数值。
//!
//! ## 支持的写法
//! ```text
//! 650          -> 650
//! 600-700      -> 650   (区间取 min/max 中点)
//! ~650, 700    -> 675
//! BR 10, BR10  -> -10   (BR 前缀强制取负)
//! N/A, na      -> 空
//! ```
//!
//! ## 依赖关系
//! - 被 `dataset/merger.rs` 使用
//! - 使用 `regex` crate

use regex::Regex;
use std::sync::LazyLock;

static TILDES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[～~≈∼]").unwrap());
static DASHES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[—–−]").unwrap());
// 单词边界只看 ASCII 字母数字，紧贴汉字的 "BR"、"NA" 也要识别
static NOT_APPLICABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[^A-Za-z0-9_])(?:n/?a|na)(?:$|[^A-Za-z0-9_])").unwrap()
});
static BEGINNING_READER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[^A-Za-z0-9_])br(?:$|[^A-Za-z0-9_]|\d)").unwrap()
});
static INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-?\d+").unwrap());

/// 解析可能为空的单元格
pub fn parse_cell(cell: Option<&str>) -> Option<f64> {
    cell.and_then(parse_value)
}

/// 解析难度文本，无法解析时返回 `None`
pub fn parse_value(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    // 统一波浪号与破折号
    let s = TILDES.replace_all(s, "~");
    let s = DASHES.replace_all(&s, "-");

    if NOT_APPLICABLE.is_match(&s) {
        return None;
    }

    let is_beginning_reader = BEGINNING_READER.is_match(&s);

    let nums: Vec<f64> = INTEGER
        .find_iter(&s)
        .filter_map(|m| {
            let text = m.as_str();
            // 数字之后的 "-" 是区间分隔符，不是负号
            let after_digit = s[..m.start()]
                .trim_end()
                .ends_with(|c: char| c.is_ascii_digit());
            let text = if after_digit {
                text.trim_start_matches('-')
            } else {
                text
            };
            text.parse::<f64>().ok()
        })
        .collect();

    match nums.as_slice() {
        [] => None,
        [single] if is_beginning_reader => Some(-single.abs()),
        [single] => Some(*single),
        many => {
            let lo = many.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = many.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            Some((lo + hi) / 2.0)
        }
    }
}
