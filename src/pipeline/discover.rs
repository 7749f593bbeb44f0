//! # 来源文件收集器
//!
//! 递归遍历根目录，按扩展名收集来源文件，按自然顺序返回。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `walkdir` 遍历目录

use crate::utils::natsort::natural_sort;

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 来源文件收集器
pub struct ArtifactCollector {
    /// 根目录
    root: PathBuf,
    /// 扩展名（不含点）
    extension: String,
    /// 文件名包含任一子串即跳过
    ignore: Vec<String>,
}

impl ArtifactCollector {
    /// 创建新的收集器
    pub fn new(root: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            root: root.into(),
            extension: extension.trim_start_matches('.').to_string(),
            ignore: Vec::new(),
        }
    }

    /// 跳过文件名包含这些子串的文件
    pub fn ignoring(mut self, names: &[&str]) -> Self {
        self.ignore = names.iter().map(|s| s.to_string()).collect();
        self
    }

    /// 收集所有匹配的文件
    pub fn collect(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(&self.root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.matches(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        natural_sort(&mut files, |p| p.display().to_string());
        files
    }

    fn matches(&self, path: &Path) -> bool {
        let ext_ok = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case(&self.extension))
            .unwrap_or(false);
        if !ext_ok {
            return false;
        }

        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };
        !self.ignore.iter().any(|pat| name.contains(pat.as_str()))
    }
}
