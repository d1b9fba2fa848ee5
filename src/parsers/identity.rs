//! # 体系名称规范化
//!
//! 两张表里同一套读物的写法常有大小写、空格、括号差异，
//! 规范化后作为合并键使用。连字符、斜杠、加号保留。
//!
//! ## 依赖关系
//! - 被 `dataset/merger.rs` 和 `dataset/mod.rs` 使用
//! - 使用 `regex` crate

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static PARENTHESES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[（）()]").unwrap());
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\x{4e00}-\x{9fa5}\s\-/+]").unwrap());

/// 计算体系标识
pub fn system_id(name: &str) -> String {
    let s = name.trim().to_lowercase();
    let s = WHITESPACE_RUN.replace_all(&s, " ");
    let s = PARENTHESES.replace_all(&s, "");
    DISALLOWED.replace_all(&s, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_whitespace_folding() {
        assert_eq!(system_id(" Foo  Readers"), "foo readers");
        assert_eq!(system_id("foo readers"), "foo readers");
        assert_eq!(system_id("Name A"), system_id("name a "));
    }

    #[test]
    fn test_parentheses_and_punctuation() {
        assert_eq!(system_id("Oxford Reading Tree (ORT)"), "oxford reading tree ort");
        assert_eq!(system_id("牛津树（ORT）"), "牛津树ort");
        assert_eq!(system_id("Big Cat, Collins!"), "big cat collins");
    }

    #[test]
    fn test_keeps_meaningful_symbols() {
        assert_eq!(system_id("RAZ-Kids"), "raz-kids");
        assert_eq!(system_id("Phonics/Decodable"), "phonics/decodable");
        assert_eq!(system_id("Level 1+"), "level 1+");
    }

    #[test]
    fn test_empty() {
        assert_eq!(system_id("   "), "");
    }
}
