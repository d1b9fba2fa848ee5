//! # 分级体系数据模型
//!
//! 一个分级体系 (reading system) 由元数据和一组有序的级别条目组成。
//! 加载完成后这些结构只读。
//!
//! ## 依赖关系
//! - 被 `dataset/merger.rs` 构建
//! - 被 `classify/report.rs` 和 `commands/` 读取

use serde::{Deserialize, Serialize};

/// 分级体系元数据（来自"基本信息"表）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingSystem {
    /// 规范化后的体系标识
    pub id: String,

    /// 显示名称
    pub name: String,

    /// 出版者/来源
    pub publisher: String,

    /// 特点/课程定位
    pub positioning: String,

    /// 分级范围
    pub level_range: String,

    /// 难度/单词量/句子复杂度
    pub difficulty_note: String,

    /// 文本形式/可读性特征
    pub text_features: String,
}

/// 体系目录条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
}

/// 某体系中的一个级别
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelEntry {
    /// 级别名称，在所属体系内唯一
    pub level: String,

    /// 对应 Book Band / 注
    pub band: String,

    /// 原始难度文本
    pub raw_difficulty: String,

    /// 解析后的 Lexile 值
    pub difficulty: Option<f64>,

    /// 可比难度特征
    pub features: String,

    /// 来源标注
    pub source: String,
}

impl LevelEntry {
    pub fn difficulty_label(&self) -> String {
        difficulty_label(self.difficulty, &self.raw_difficulty)
    }
}

/// 终端展示用的难度文本：有数值时显示 `650L`，否则回退到原始文本，再回退到 `N/A`
pub fn difficulty_label(value: Option<f64>, raw: &str) -> String {
    match value {
        Some(v) => format!("{}L", v),
        None if !raw.is_empty() => raw.to_string(),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(raw: &str, difficulty: Option<f64>) -> LevelEntry {
        LevelEntry {
            level: "A".to_string(),
            band: String::new(),
            raw_difficulty: raw.to_string(),
            difficulty,
            features: String::new(),
            source: String::new(),
        }
    }

    #[test]
    fn test_difficulty_label() {
        assert_eq!(entry("600-700", Some(650.0)).difficulty_label(), "650L");
        assert_eq!(entry("BR", None).difficulty_label(), "BR");
        assert_eq!(entry("", None).difficulty_label(), "N/A");
        assert_eq!(entry("BR 10", Some(-10.0)).difficulty_label(), "-10L");
        assert_eq!(difficulty_label(None, "待定"), "待定");
        assert_eq!(difficulty_label(Some(0.0), "BR"), "0L");
    }
}
