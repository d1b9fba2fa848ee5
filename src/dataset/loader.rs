//! # 数据源加载
//!
//! 从 CSV 文件（电子表格各工作表的导出）读取原始行，并一次性构建 `Dataset`。
//!
//! ## 数据源定位
//! 显式给出的路径优先；其余的在数据目录中按文件名匹配：
//! - 基本信息表: `基本信息` / `metadata`
//! - 难度表: `语言难度数值表` / `difficulty`
//! - 校准表: `校准` / `calib` / `leveled`
//!
//! 校准表和难度表缺一不可，任何一张无法读取都会使整个加载失败，不做重试。
//! 基本信息表可选，缺失时体系显示名退化为标识。
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `dataset/merger.rs`
//! - 使用 `csv`, `regex` crate

use super::fields::Row;
use super::{merge, BandOptions, Dataset, SourceTables};
use crate::error::{ReadfitError, Result};

use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{info, warn};

static METADATA_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)基本信息|metadata").unwrap());
static DIFFICULTY_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)语言难度数值表|difficulty").unwrap());
static CALIBRATION_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)校准|calib|leveled").unwrap());

/// 三张源表的文件路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    pub metadata: Option<PathBuf>,
    pub calibration: PathBuf,
    pub difficulty: PathBuf,
}

impl SourcePaths {
    /// 合并显式路径与数据目录中的自动发现结果
    pub fn resolve(
        data_dir: &Path,
        metadata: Option<PathBuf>,
        calibration: Option<PathBuf>,
        difficulty: Option<PathBuf>,
    ) -> Result<Self> {
        let candidates = if calibration.is_some() && difficulty.is_some() && metadata.is_some() {
            Vec::new()
        } else {
            list_csv_files(data_dir)?
        };

        let metadata = metadata.or_else(|| find_file(&candidates, &METADATA_FILE));
        let calibration = match calibration {
            Some(p) => p,
            None => find_file(&candidates, &CALIBRATION_FILE)
                .ok_or_else(|| not_discovered("calibration", data_dir, &CALIBRATION_FILE))?,
        };
        let difficulty = match difficulty {
            Some(p) => p,
            None => find_file(&candidates, &DIFFICULTY_FILE)
                .ok_or_else(|| not_discovered("difficulty", data_dir, &DIFFICULTY_FILE))?,
        };

        if metadata.is_none() {
            warn!(dir = %data_dir.display(), "no metadata table found, display names fall back to ids");
        }

        Ok(SourcePaths {
            metadata,
            calibration,
            difficulty,
        })
    }
}

/// 读取全部源表并构建数据集
pub fn load(paths: &SourcePaths, options: &BandOptions) -> Result<Dataset> {
    let metadata = match &paths.metadata {
        Some(path) => read_table(path, "metadata")?,
        None => Vec::new(),
    };
    let calibration = read_table(&paths.calibration, "calibration")?;
    let difficulty = read_table(&paths.difficulty, "difficulty")?;

    info!(
        metadata = metadata.len(),
        calibration = calibration.len(),
        difficulty = difficulty.len(),
        "source tables loaded"
    );

    let tables = SourceTables {
        metadata,
        calibration,
        difficulty,
    };
    Ok(merge(&tables, options))
}

/// 读取一个带表头的 CSV 文件，每行转为 列名 -> 值 的映射
pub fn read_table(path: &Path, source_name: &str) -> Result<Vec<Row>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(|e| unavailable(source_name, path, e.to_string()))?;

    let headers = reader
        .headers()
        .map_err(|e| unavailable(source_name, path, e.to_string()))?
        .clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Row = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.to_string(), v.to_string()))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

/// 列出目录中的 CSV 文件（按文件名排序）
fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ReadfitError::DirectoryNotFound {
            path: dir.display().to_string(),
        });
    }

    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|e| unavailable("data directory", dir, e.to_string()))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .map(|e| e.eq_ignore_ascii_case("csv"))
                .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}

/// 找到第一个文件名匹配的文件
fn find_file(candidates: &[PathBuf], pattern: &Regex) -> Option<PathBuf> {
    candidates
        .iter()
        .find(|p| {
            p.file_stem()
                .and_then(|s| s.to_str())
                .map(|s| pattern.is_match(s))
                .unwrap_or(false)
        })
        .cloned()
}

fn unavailable(source_name: &str, path: &Path, reason: String) -> ReadfitError {
    ReadfitError::SourceUnavailable {
        source_name: source_name.to_string(),
        path: path.display().to_string(),
        reason,
    }
}

fn not_discovered(source_name: &str, dir: &Path, pattern: &Regex) -> ReadfitError {
    unavailable(
        source_name,
        dir,
        format!("no CSV file name matches /{}/", pattern.as_str()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    fn sample_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        write_file(
            dir.path(),
            "用户体验数据库_基本信息.csv",
            "系列,出版者/来源,文本形式/可读性特征\nFoo Readers,Foo Press,短句重复\n",
        );
        write_file(
            dir.path(),
            "leveled_readers_detailed_levels.csv",
            "系统,分级,蓝思值 (Lexile),国内小读者年龄 (近似)\nFoo Readers,A,500,6-7\nFoo Readers,B,600-700,7\n",
        );
        write_file(
            dir.path(),
            "用户体验数据库_语言难度数值表.csv",
            "系列,级别,Lexile,年龄\nfoo readers,A,n/a,6\nBar,1,BR 20,5\n",
        );
        write_file(dir.path(), "notes.txt", "ignored");
        dir
    }

    #[test]
    fn test_discover_sources() {
        let dir = sample_dir();
        let paths = SourcePaths::resolve(dir.path(), None, None, None).unwrap();
        assert!(paths
            .metadata
            .as_ref()
            .unwrap()
            .to_string_lossy()
            .contains("基本信息"));
        assert!(paths.calibration.to_string_lossy().contains("leveled"));
        assert!(paths.difficulty.to_string_lossy().contains("语言难度数值表"));
    }

    #[test]
    fn test_explicit_path_overrides_discovery() {
        let dir = sample_dir();
        let custom = write_file(dir.path(), "custom.csv", "系统,分级\n");
        let paths = SourcePaths::resolve(dir.path(), None, Some(custom.clone()), None).unwrap();
        assert_eq!(paths.calibration, custom);
    }

    #[test]
    fn test_missing_source_is_unavailable() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "calibration.csv", "系统,分级\n");
        let err = SourcePaths::resolve(dir.path(), None, None, None).unwrap_err();
        match err {
            ReadfitError::SourceUnavailable { source_name, .. } => {
                assert_eq!(source_name, "difficulty")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file_fails_load() {
        let dir = TempDir::new().unwrap();
        let paths = SourcePaths {
            metadata: None,
            calibration: dir.path().join("absent.csv"),
            difficulty: dir.path().join("absent2.csv"),
        };
        let err = load(&paths, &BandOptions::default()).unwrap_err();
        assert!(matches!(err, ReadfitError::SourceUnavailable { .. }));
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let err = SourcePaths::resolve(&dir.path().join("nope"), None, None, None).unwrap_err();
        assert!(matches!(err, ReadfitError::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_read_table_ragged_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_file(dir.path(), "t.csv", " 系统 ,分级,Lexile\nFoo,A\nFoo,B,300,extra\n");
        let rows = read_table(&path, "calibration").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("系统").map(String::as_str), Some("Foo"));
        assert!(rows[0].get("Lexile").is_none());
        assert_eq!(rows[1].get("Lexile").map(String::as_str), Some("300"));
    }

    #[test]
    fn test_load_end_to_end() {
        let dir = sample_dir();
        let paths = SourcePaths::resolve(dir.path(), None, None, None).unwrap();
        let ds = load(&paths, &BandOptions::default()).unwrap();

        let names: Vec<&str> = ds.catalog().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["bar", "Foo Readers"]);

        // 副表中的 n/a 不会覆盖主表中的 500
        assert_eq!(ds.level("foo readers", "A").unwrap().difficulty, Some(500.0));
        assert_eq!(ds.level("foo readers", "B").unwrap().difficulty, Some(650.0));
        assert_eq!(ds.level("bar", "1").unwrap().difficulty, Some(-20.0));
        assert_eq!(ds.band_table().global_samples, 3);
        assert_eq!(
            ds.system("foo readers").unwrap().text_features,
            "短句重复"
        );
    }
}
