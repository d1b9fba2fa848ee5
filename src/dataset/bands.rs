//! # 分位带计算
//!
//! 对每个整数年龄计算 P20/P40/P60/P80；样本不足时回退到全局分位带。
//!
//! ## 依赖关系
//! - 被 `dataset/merger.rs` 调用
//! - 被 `classify/` 使用 (`quantile`, `median`)
//! - 使用 `models/bands.rs`

use crate::models::AgeBandSet;

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// 分位带构建参数
#[derive(Debug, Clone)]
pub struct BandOptions {
    /// 年龄桶至少需要的观测数，低于此值使用全局分位带
    pub min_samples: usize,
    /// 计算分位带的年龄范围
    pub ages: RangeInclusive<u32>,
}

impl Default for BandOptions {
    fn default() -> Self {
        BandOptions {
            min_samples: 8,
            ages: 3..=15,
        }
    }
}

/// 某年龄分位带的来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandSource {
    /// 由本年龄桶计算
    OwnBucket,
    /// 样本不足，使用全局分位带
    GlobalFallback,
}

/// 单个年龄的分位带
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeBands {
    pub bands: AgeBandSet,
    pub source: BandSource,
    /// 该年龄桶的观测数
    pub samples: usize,
}

/// 全部年龄的分位带
#[derive(Debug, Clone, PartialEq)]
pub struct BandTable {
    pub global: AgeBandSet,
    pub global_samples: usize,
    pub by_age: BTreeMap<u32, AgeBands>,
}

impl BandTable {
    /// 由全局池与年龄桶构建
    pub fn build(
        global_pool: &[f64],
        age_buckets: &BTreeMap<u32, Vec<f64>>,
        options: &BandOptions,
    ) -> Self {
        let global = band_set(global_pool);

        let by_age = options
            .ages
            .clone()
            .map(|age| {
                let bucket = age_buckets.get(&age).map(Vec::as_slice).unwrap_or(&[]);
                let entry = if bucket.len() >= options.min_samples {
                    AgeBands {
                        bands: band_set(bucket),
                        source: BandSource::OwnBucket,
                        samples: bucket.len(),
                    }
                } else {
                    AgeBands {
                        bands: global,
                        source: BandSource::GlobalFallback,
                        samples: bucket.len(),
                    }
                };
                (age, entry)
            })
            .collect();

        BandTable {
            global,
            global_samples: global_pool.len(),
            by_age,
        }
    }

    /// 某年龄的分位带；超出范围时返回全空分位带
    pub fn for_age(&self, age: u32) -> &AgeBandSet {
        self.by_age
            .get(&age)
            .map(|entry| &entry.bands)
            .unwrap_or(&AgeBandSet::EMPTY)
    }
}

/// 对任意顺序的数值计算四个分位切点
pub fn band_set(values: &[f64]) -> AgeBandSet {
    let sorted = sorted(values);
    AgeBandSet {
        p20: quantile(&sorted, 0.2),
        p40: quantile(&sorted, 0.4),
        p60: quantile(&sorted, 0.6),
        p80: quantile(&sorted, 0.8),
    }
}

/// 线性插值分位数，输入必须已升序排列
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = (sorted.len() - 1) as f64 * q;
    let base = pos.floor() as usize;
    let rest = pos - base as f64;
    match sorted.get(base + 1) {
        Some(next) => Some(sorted[base] + rest * (next - sorted[base])),
        None => Some(sorted[base]),
    }
}

/// 中位数（任意顺序输入）
pub fn median(values: &[f64]) -> Option<f64> {
    quantile(&sorted(values), 0.5)
}

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut v = values.to_vec();
    v.sort_by(|a, b| a.total_cmp(b));
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_quantile_interpolation() {
        let a = [10.0, 20.0, 30.0, 40.0, 50.0];
        assert_eq!(quantile(&a, 0.0), Some(10.0));
        assert_eq!(quantile(&a, 1.0), Some(50.0));
        assert_eq!(quantile(&a, 0.5), Some(30.0));
        // pos = 4 * 0.2 = 0.8
        assert_relative_eq!(quantile(&a, 0.2).unwrap(), 18.0, epsilon = 1e-9);
        assert_relative_eq!(quantile(&a, 0.8).unwrap(), 42.0, epsilon = 1e-9);
    }

    #[test]
    fn test_quantile_edge_cases() {
        assert_eq!(quantile(&[], 0.5), None);
        assert_eq!(quantile(&[7.0], 0.2), Some(7.0));
        assert_eq!(quantile(&[7.0], 0.8), Some(7.0));
        assert_eq!(band_set(&[]), AgeBandSet::EMPTY);
    }

    #[test]
    fn test_quantile_monotonic() {
        let a = sorted(&[300.0, -10.0, 820.0, 450.0, 450.0, 610.0, 90.0, 1000.0, 5.0]);
        let qs: Vec<f64> = [0.2, 0.4, 0.6, 0.8]
            .iter()
            .map(|q| quantile(&a, *q).unwrap())
            .collect();
        assert!(qs.windows(2).all(|w| w[0] <= w[1]));
        // 幂等：重复计算结果一致
        assert_eq!(quantile(&a, 0.4), quantile(&a, 0.4));
    }

    #[test]
    fn test_median() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_small_bucket_falls_back_to_global() {
        let global: Vec<f64> = (1..=20).map(|v| v as f64 * 50.0).collect();
        let mut buckets = BTreeMap::new();
        buckets.insert(6, vec![100.0, 200.0, 300.0]);
        buckets.insert(8, (1..=8).map(|v| v as f64 * 100.0).collect());

        let table = BandTable::build(&global, &buckets, &BandOptions::default());

        let six = table.by_age[&6];
        assert_eq!(six.source, BandSource::GlobalFallback);
        assert_eq!(six.samples, 3);
        assert_eq!(six.bands, table.global);
        assert_eq!(table.by_age[&3].bands, table.global);

        let eight = table.by_age[&8];
        assert_eq!(eight.source, BandSource::OwnBucket);
        assert_ne!(eight.bands, table.global);
        // 8 个样本 pos = 7 * 0.2 = 1.4
        assert_relative_eq!(eight.bands.p20.unwrap(), 240.0, epsilon = 1e-9);
    }

    #[test]
    fn test_age_range_and_out_of_range_lookup() {
        let table = BandTable::build(&[1.0, 2.0], &BTreeMap::new(), &BandOptions::default());
        assert_eq!(table.by_age.len(), 13);
        assert_eq!(table.by_age.keys().next(), Some(&3));
        assert_eq!(table.by_age.keys().last(), Some(&15));
        assert_eq!(table.for_age(2), &AgeBandSet::EMPTY);
        assert_eq!(table.for_age(9), &table.global);
    }

    #[test]
    fn test_empty_pool_yields_empty_bands() {
        let table = BandTable::build(&[], &BTreeMap::new(), &BandOptions::default());
        assert_eq!(table.global, AgeBandSet::EMPTY);
        assert_eq!(table.for_age(7).edges(), None);
    }
}
