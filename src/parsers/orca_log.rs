//! # ORCA 日志频率读取
//!
//! 只读取日志末尾的 `VIBRATIONAL FREQUENCIES` 表，不解析其他内容。
//!
//! ## 表格式
//! ```text
//! -----------------------
//! VIBRATIONAL FREQUENCIES
//! -----------------------
//!
//!    0:         0.00 cm**-1
//!    6:      -372.47 cm**-1 ***imaginary mode***
//!    7:       102.41 cm**-1
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/imgvib.rs` 使用
//! - 使用 `models/mode.rs`

use crate::error::{ImgvibError, Result};
use crate::models::ListedFrequency;

use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

const FORMAT: &str = "ORCA log";
const TABLE_HEADER: &str = "VIBRATIONAL FREQUENCIES";

/// 虚频来源
pub trait FrequencySource {
    /// 按日志顺序返回全部虚频
    fn imaginary_frequencies(&self, path: &Path) -> Result<Vec<ListedFrequency>>;
}

/// 基于 ORCA 输出文件的虚频来源
#[derive(Debug, Default, Clone, Copy)]
pub struct OrcaLogFrequencies;

impl FrequencySource for OrcaLogFrequencies {
    fn imaginary_frequencies(&self, path: &Path) -> Result<Vec<ListedFrequency>> {
        let content = fs::read_to_string(path).map_err(|e| ImgvibError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        let table = parse_frequency_table(&content)
            .map_err(|reason| ImgvibError::parse(FORMAT, &path.display().to_string(), reason))?;

        Ok(table.into_iter().filter(|f| f.value < 0.0).collect())
    }
}

fn row_pattern() -> &'static Regex {
    static ROW: OnceLock<Regex> = OnceLock::new();
    ROW.get_or_init(|| {
        Regex::new(r"^\s*(\d+):\s+(\S+)\s+cm\*\*-1").expect("frequency row pattern is valid")
    })
}

/// 解析最后一个频率表（没有表时返回空列表）
pub fn parse_frequency_table(content: &str) -> std::result::Result<Vec<ListedFrequency>, String> {
    let start = match content.rfind(TABLE_HEADER) {
        Some(pos) => pos + TABLE_HEADER.len(),
        None => return Ok(Vec::new()),
    };

    let mut rows = Vec::new();
    for line in content[start..].lines() {
        let caps = match row_pattern().captures(line) {
            Some(c) => c,
            None => {
                // 表头下方的分隔线、空行、缩放因子说明
                if rows.is_empty() {
                    continue;
                }
                break;
            }
        };

        let listed_index: usize = caps[1]
            .parse()
            .map_err(|_| format!("invalid mode number '{}'", &caps[1]))?;
        let value: f64 = caps[2]
            .parse()
            .map_err(|_| format!("invalid frequency '{}' for mode {}", &caps[2], listed_index))?;

        rows.push(ListedFrequency {
            listed_index,
            value,
        });
    }

    Ok(rows)
}
