//! # 数据集模块
//!
//! 加载三张源表，合并成一个只读的 `Dataset`，并提供查询接口。
//! `Dataset` 由加载操作一次性构建，之后所有查询都只读取它。
//!
//! ## 数据流
//! ```text
//! loader (CSV -> Row)
//!   └── merger (upsert + 数值池)
//!         └── bands (年龄分位带)
//!               └── Dataset
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `classify/report.rs` 使用
//! - 使用 `parsers/`, `models/`
//! - 子模块: fields, loader, merger, bands

pub mod bands;
pub mod fields;
pub mod loader;
pub mod merger;

pub use bands::{BandOptions, BandSource, BandTable};
pub use loader::{load, SourcePaths};
pub use merger::{merge, SourceTables};

use crate::models::{AgeBandSet, CatalogEntry, LevelEntry, ReadingSystem};
use crate::parsers::system_id;

use std::collections::HashMap;

/// 规范化后的只读数据集
#[derive(Debug, Clone)]
pub struct Dataset {
    catalog: Vec<CatalogEntry>,
    systems: HashMap<String, ReadingSystem>,
    levels: HashMap<String, Vec<LevelEntry>>,
    bands: BandTable,
}

impl Dataset {
    /// 按显示名排序的体系目录（仅包含至少有一个级别的体系）
    pub fn catalog(&self) -> &[CatalogEntry] {
        &self.catalog
    }

    /// 体系元数据
    pub fn system(&self, id: &str) -> Option<&ReadingSystem> {
        self.systems.get(id)
    }

    /// 体系的有序级别列表，未知体系返回空
    pub fn levels(&self, id: &str) -> &[LevelEntry] {
        self.levels.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 查找某体系的某个级别
    pub fn level(&self, id: &str, level: &str) -> Option<&LevelEntry> {
        self.levels(id).iter().find(|e| e.level == level)
    }

    /// 按名称或标识查找目录条目
    pub fn resolve_system(&self, query: &str) -> Option<&CatalogEntry> {
        let id = system_id(query);
        self.catalog.iter().find(|c| c.id == id)
    }

    /// 某年龄的分位带，年龄超出范围时为全空分位带
    pub fn bands_for_age(&self, age: u32) -> &AgeBandSet {
        self.bands.for_age(age)
    }

    /// 全部分位带
    pub fn band_table(&self) -> &BandTable {
        &self.bands
    }
}
