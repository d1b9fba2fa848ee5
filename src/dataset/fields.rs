//! # 字段访问策略
//!
//! 各数据表对同一逻辑字段的列名写法不一。每个逻辑字段声明一组按优先级排列的
//! 候选列名，取第一个非空值；全部缺失时视为空字符串。
//!
//! ## 依赖关系
//! - 被 `dataset/merger.rs` 和 `dataset/loader.rs` 使用
//! - 无外部模块依赖

use std::collections::HashMap;

/// 一行原始表格数据：列名 -> 单元格文本
pub type Row = HashMap<String, String>;

/// 逻辑字段及其候选列名
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// 逻辑字段名
    pub name: &'static str,
    /// 候选列名（按优先级）
    pub columns: &'static [&'static str],
}

impl FieldSpec {
    /// 取第一个非空候选列的值（已去除首尾空白）
    pub fn lookup<'a>(&self, row: &'a Row) -> Option<&'a str> {
        self.columns
            .iter()
            .filter_map(|col| row.get(*col))
            .map(|v| v.trim())
            .find(|v| !v.is_empty())
    }

    /// 同 `lookup`，缺失时为空字符串
    pub fn get<'a>(&self, row: &'a Row) -> &'a str {
        self.lookup(row).unwrap_or("")
    }
}

// ─────────────────────────────────────────────────────────────
// 级别表（校准表 / 难度表）
// ─────────────────────────────────────────────────────────────

pub const SYSTEM: FieldSpec = FieldSpec {
    name: "system",
    columns: &["系统", "系列"],
};

pub const LEVEL: FieldSpec = FieldSpec {
    name: "level",
    columns: &["分级", "级别"],
};

pub const BAND: FieldSpec = FieldSpec {
    name: "band",
    columns: &["对应 Book Band / 注"],
};

pub const DIFFICULTY: FieldSpec = FieldSpec {
    name: "difficulty",
    columns: &["蓝思值 (Lexile)", "Lexile"],
};

pub const FEATURES: FieldSpec = FieldSpec {
    name: "features",
    columns: &["可比难度特征"],
};

pub const SOURCE: FieldSpec = FieldSpec {
    name: "source",
    columns: &["来源"],
};

pub const AGE: FieldSpec = FieldSpec {
    name: "age",
    columns: &["国内小读者年龄 (近似)", "中国年纪/年龄 (近似)", "年龄"],
};

// ─────────────────────────────────────────────────────────────
// 基本信息表
// ─────────────────────────────────────────────────────────────

pub const META_NAME: FieldSpec = FieldSpec {
    name: "name",
    columns: &["系列", "系统"],
};

pub const META_PUBLISHER: FieldSpec = FieldSpec {
    name: "publisher",
    columns: &["出版者/来源"],
};

pub const META_POSITIONING: FieldSpec = FieldSpec {
    name: "positioning",
    columns: &["特点/课程定位"],
};

pub const META_LEVEL_RANGE: FieldSpec = FieldSpec {
    name: "level_range",
    columns: &["分级范围"],
};

pub const META_DIFFICULTY_NOTE: FieldSpec = FieldSpec {
    name: "difficulty_note",
    columns: &["难度/单词量/句子复杂度"],
};

pub const META_TEXT_FEATURES: FieldSpec = FieldSpec {
    name: "text_features",
    columns: &["文本形式/可读性特征"],
};

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_priority_order() {
        let r = row(&[("系列", "Fallback"), ("系统", "Primary")]);
        assert_eq!(SYSTEM.get(&r), "Primary");
        assert_eq!(META_NAME.get(&r), "Fallback");
    }

    #[test]
    fn test_skips_empty_candidates() {
        let r = row(&[("蓝思值 (Lexile)", "  "), ("Lexile", "650L")]);
        assert_eq!(DIFFICULTY.get(&r), "650L");

        let r = row(&[("年龄", "6-7")]);
        assert_eq!(AGE.get(&r), "6-7");
    }

    #[test]
    fn test_missing_is_empty() {
        let r = row(&[("其他", "x")]);
        assert_eq!(LEVEL.get(&r), "");
        assert_eq!(BAND.get(&r), "");
    }
}
