//! # 数据集合并
//!
//! 先处理校准表（主表），再处理难度表（副表），逐行按 (体系, 级别) 做 upsert：
//! - 不存在则插入
//! - 已有条目无数值而新行有数值：替换（补缺）
//! - 已有条目有数值而新行无数值：保留已有条目
//! - 其余情况：新行覆盖（后写优先，副表覆盖主表）
//!
//! 每个解析出数值的行都会进入全局数值池，并按其年龄描述进入各年龄桶
//! （一个级别可以同时属于多个年龄）。
//!
//! ## 依赖关系
//! - 被 `dataset/loader.rs` 调用
//! - 使用 `parsers/`, `dataset/fields.rs`, `dataset/bands.rs`

use super::bands::{BandOptions, BandTable};
use super::fields::{self, Row};
use super::Dataset;
use crate::models::{CatalogEntry, LevelEntry, ReadingSystem};
use crate::parsers::{compare_names, parse_ages, parse_cell, system_id};

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info};

/// 三张原始数据表
#[derive(Debug, Clone, Default)]
pub struct SourceTables {
    /// 基本信息表（体系元数据）
    pub metadata: Vec<Row>,
    /// 校准表，主表，先处理
    pub calibration: Vec<Row>,
    /// 难度表，副表，后处理
    pub difficulty: Vec<Row>,
}

/// 级别表类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Calibration,
    Difficulty,
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableKind::Calibration => write!(f, "calibration"),
            TableKind::Difficulty => write!(f, "difficulty"),
        }
    }
}

/// upsert 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Inserted,
    FilledGap,
    KeptExisting,
    Replaced,
}

/// 按固定顺序合并三张表，得到只读数据集
pub fn merge(tables: &SourceTables, options: &BandOptions) -> Dataset {
    let mut merger = Merger::default();
    merger.add_metadata(&tables.metadata);
    merger.add_level_rows(&tables.calibration, TableKind::Calibration);
    merger.add_level_rows(&tables.difficulty, TableKind::Difficulty);
    merger.finish(options)
}

/// 合并过程中的可变状态，`finish` 之后转为 `Dataset`
#[derive(Debug, Default)]
pub struct Merger {
    systems: HashMap<String, ReadingSystem>,
    levels: BTreeMap<String, Vec<LevelEntry>>,
    global_pool: Vec<f64>,
    age_buckets: BTreeMap<u32, Vec<f64>>,
}

impl Merger {
    /// 读入基本信息表，同名体系以后出现者为准
    pub fn add_metadata(&mut self, rows: &[Row]) {
        for row in rows {
            let name = fields::META_NAME.get(row);
            if name.is_empty() {
                continue;
            }
            let id = system_id(name);
            self.systems.insert(
                id.clone(),
                ReadingSystem {
                    id,
                    name: name.to_string(),
                    publisher: fields::META_PUBLISHER.get(row).to_string(),
                    positioning: fields::META_POSITIONING.get(row).to_string(),
                    level_range: fields::META_LEVEL_RANGE.get(row).to_string(),
                    difficulty_note: fields::META_DIFFICULTY_NOTE.get(row).to_string(),
                    text_features: fields::META_TEXT_FEATURES.get(row).to_string(),
                },
            );
        }
    }

    /// 逐行读入一张级别表
    pub fn add_level_rows(&mut self, rows: &[Row], kind: TableKind) {
        let mut skipped = 0usize;
        for row in rows {
            let cell = fields::DIFFICULTY.lookup(row);
            let value = parse_cell(cell);

            // 数值池不看体系名，无体系名的行同样计入
            if let Some(v) = value {
                self.global_pool.push(v);
                for age in parse_ages(fields::AGE.get(row)) {
                    self.age_buckets.entry(age).or_default().push(v);
                }
            }

            let id = system_id(fields::SYSTEM.get(row));
            if id.is_empty() {
                skipped += 1;
                continue;
            }

            self.add_level(
                &id,
                LevelEntry {
                    level: fields::LEVEL.get(row).to_string(),
                    band: fields::BAND.get(row).to_string(),
                    raw_difficulty: cell.unwrap_or("").to_string(),
                    difficulty: value,
                    features: fields::FEATURES.get(row).to_string(),
                    source: fields::SOURCE.get(row).to_string(),
                },
            );
        }
        if skipped > 0 {
            debug!(
                table = %kind,
                field = fields::SYSTEM.name,
                skipped,
                "rows without a system name kept out of the catalog"
            );
        }
    }

    /// 按级别名 upsert 一个条目
    pub fn add_level(&mut self, id: &str, entry: LevelEntry) -> Upsert {
        let levels = self.levels.entry(id.to_string()).or_default();
        let Some(idx) = levels.iter().position(|e| e.level == entry.level) else {
            levels.push(entry);
            return Upsert::Inserted;
        };
        let existing = &mut levels[idx];

        match (existing.difficulty, entry.difficulty) {
            (None, Some(_)) => {
                *existing = entry;
                Upsert::FilledGap
            }
            (Some(_), None) => Upsert::KeptExisting,
            (old, new) => {
                if old != new {
                    debug!(
                        system = id,
                        level = %entry.level,
                        old = ?old,
                        new = ?new,
                        "conflicting difficulty values, later row wins"
                    );
                }
                *existing = entry;
                Upsert::Replaced
            }
        }
    }

    /// 排序、生成目录与分位带
    pub fn finish(self, options: &BandOptions) -> Dataset {
        let Merger {
            systems,
            mut levels,
            global_pool,
            age_buckets,
        } = self;

        for entries in levels.values_mut() {
            entries.sort_by(compare_levels);
        }

        let mut catalog: Vec<CatalogEntry> = levels
            .keys()
            .map(|id| CatalogEntry {
                id: id.clone(),
                name: systems
                    .get(id)
                    .map(|s| s.name.clone())
                    .unwrap_or_else(|| id.clone()),
            })
            .collect();
        catalog.sort_by(|a, b| compare_names(&a.name, &b.name));

        let bands = BandTable::build(&global_pool, &age_buckets, options);

        info!(
            systems = catalog.len(),
            levels = levels.values().map(Vec::len).sum::<usize>(),
            observations = global_pool.len(),
            "dataset normalized"
        );

        Dataset {
            catalog,
            systems,
            levels: levels.into_iter().collect(),
            bands,
        }
    }
}

/// 有数值的级别按数值升序且排在无数值级别之前；无数值级别按名称排序
fn compare_levels(a: &LevelEntry, b: &LevelEntry) -> Ordering {
    match (a.difficulty, b.difficulty) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => compare_names(&a.level, &b.level),
    }
}
