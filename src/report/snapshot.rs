//! # 结果快照
//!
//! 把完整的 来源文件 → 结果记录 映射写成易读的 JSON，覆盖旧文件。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `serde_json`

use crate::error::{ImgvibError, Result};
use crate::models::ResultSet;

use std::fs;
use std::path::Path;

/// 写出快照（覆盖）
pub fn write_snapshot(set: &ResultSet, path: &Path) -> Result<()> {
    let text = serde_json::to_string_pretty(set)?;
    fs::write(path, text + "\n").map_err(|e| ImgvibError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 读回快照
pub fn read_snapshot(path: &Path) -> Result<ResultSet> {
    let text = fs::read_to_string(path).map_err(|e| ImgvibError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(serde_json::from_str(&text)?)
}
