//! # 评估结果数据模型
//!
//! 匹配标签、分类结果和用户选择。
//!
//! ## 依赖关系
//! - 被 `classify/` 构建
//! - 被 `cli/assess.rs` 和 `commands/assess.rs` 使用

use serde::{Deserialize, Serialize};

/// 难度匹配标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FitTag {
    /// 偏易
    TooEasy,
    /// 舒适
    Comfortable,
    /// 最佳挑战
    BestChallenge,
    /// 偏难
    TooHard,
    /// 参考（年龄基线不足）
    Reference,
    /// 未知（无数值）
    Unknown,
}

impl FitTag {
    /// 中文标签
    pub fn label(&self) -> &'static str {
        match self {
            FitTag::TooEasy => "偏易",
            FitTag::Comfortable => "舒适",
            FitTag::BestChallenge => "最佳挑战",
            FitTag::TooHard => "偏难",
            FitTag::Reference => "参考",
            FitTag::Unknown => "未知",
        }
    }

    /// 推荐阅读顺序中的排序权重
    pub fn order_rank(&self) -> u8 {
        match self {
            FitTag::TooEasy => 0,
            FitTag::Comfortable | FitTag::Reference | FitTag::Unknown => 1,
            FitTag::BestChallenge => 2,
            FitTag::TooHard => 3,
        }
    }

    /// 展示色调
    pub fn tone(&self) -> Tone {
        match self {
            FitTag::TooEasy => Tone::Warn,
            FitTag::Comfortable | FitTag::BestChallenge => Tone::Ok,
            FitTag::TooHard => Tone::Bad,
            FitTag::Reference | FitTag::Unknown => Tone::Neutral,
        }
    }
}

impl std::fmt::Display for FitTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 展示色调
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Ok,
    Warn,
    Bad,
    Neutral,
}

/// 分类结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub tag: FitTag,
    pub message: String,
}

impl Classification {
    pub fn new(tag: FitTag, message: impl Into<String>) -> Self {
        Classification {
            tag,
            message: message.into(),
        }
    }
}

/// 用户的一次选择：体系 + 级别
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub system: String,
    pub level: String,
}

/// 孩子性别（仅用于报告抬头）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Female => write!(f, "女"),
            Gender::Male => write!(f, "男"),
        }
    }
}
