//! # 年龄分位带数据模型
//!
//! 四个分位切点 P20/P40/P60/P80。数据不足时四个值均为空。
//!
//! ## 依赖关系
//! - 被 `dataset/bands.rs` 构建
//! - 被 `classify/` 使用

use serde::{Deserialize, Serialize};

/// 分位带
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AgeBandSet {
    pub p20: Option<f64>,
    pub p40: Option<f64>,
    pub p60: Option<f64>,
    pub p80: Option<f64>,
}

impl AgeBandSet {
    /// 全空的分位带
    pub const EMPTY: AgeBandSet = AgeBandSet {
        p20: None,
        p40: None,
        p60: None,
        p80: None,
    };

    /// 四个切点是否齐全，齐全时返回 (p20, p40, p60, p80)
    pub fn edges(&self) -> Option<(f64, f64, f64, f64)> {
        Some((self.p20?, self.p40?, self.p60?, self.p80?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_require_all_four() {
        let full = AgeBandSet {
            p20: Some(1.0),
            p40: Some(2.0),
            p60: Some(3.0),
            p80: Some(4.0),
        };
        assert_eq!(full.edges(), Some((1.0, 2.0, 3.0, 4.0)));

        let partial = AgeBandSet {
            p60: None,
            ..full
        };
        assert_eq!(partial.edges(), None);
        assert_eq!(AgeBandSet::EMPTY.edges(), None);
    }
}
