//! # ORCA .hess 振动谱解析器
//!
//! 从 Hessian 文件内嵌的 `$ir_spectrum` 块中直接提取虚频及其在完整谱中的位置。
//!
//! ## 块格式
//! ```text
//! $ir_spectrum
//! 4
//!    -120.50   0.000000   12.3456   0.0 0.0 0.0
//!      50.20   0.000000    1.2345   0.0 0.0 0.0
//!     -30.10   0.000000    0.5678   0.0 0.0 0.0
//!     200.00   0.000000    9.8765   0.0 0.0 0.0
//! $end
//! ```
//! 块以 `$end` 或后续的 `$job_list` 结束。每行第一个字段为频率 (cm⁻¹)，
//! 行号（从 0 开始）即模式索引。
//!
//! ## 依赖关系
//! - 被 `commands/hess.rs` 使用
//! - 使用 `models/mode.rs`

use crate::error::{ImgvibError, Result};
use crate::models::Mode;
use std::fs;
use std::path::Path;

const FORMAT: &str = "ORCA Hessian";
const START_MARKER: &str = "$ir_spectrum";
const END_MARKERS: [&str; 2] = ["$end", "$job_list"];

/// 解析 .hess 文件，返回全部虚频模式（按索引升序）
pub fn parse_hessian_file(path: &Path) -> Result<Vec<Mode>> {
    let content = fs::read_to_string(path).map_err(|e| ImgvibError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_hessian_content(&content).map_err(|reason| {
        ImgvibError::parse(FORMAT, &path.display().to_string(), reason)
    })
}

/// 从字符串内容解析虚频模式
///
/// 错误以纯文本原因返回，由调用方附加文件路径。
pub fn parse_hessian_content(content: &str) -> std::result::Result<Vec<Mode>, String> {
    let spectrum = parse_spectrum(content)?;
    Ok(imaginary_modes(&spectrum))
}

/// 提取完整振动谱（声明顺序）
pub fn parse_spectrum(content: &str) -> std::result::Result<Vec<f64>, String> {
    let mut lines = content.lines().map(str::trim);

    if !lines.any(|l| l == START_MARKER) {
        return Err(format!("no '{}' block", START_MARKER));
    }

    let mut declared: Option<usize> = None;
    let mut spectrum = Vec::new();
    let mut closed = false;

    for line in lines {
        if line.is_empty() {
            continue;
        }
        if END_MARKERS.iter().any(|m| line.starts_with(m)) {
            closed = true;
            break;
        }

        match declared {
            None => {
                let count = line
                    .parse::<usize>()
                    .map_err(|_| format!("invalid mode count '{}'", line))?;
                declared = Some(count);
            }
            Some(_) => {
                let field = line.split_whitespace().next().unwrap_or("");
                let value = field.parse::<f64>().map_err(|_| {
                    format!(
                        "invalid frequency '{}' on spectrum line {}",
                        field,
                        spectrum.len()
                    )
                })?;
                spectrum.push(value);
            }
        }
    }

    if !closed {
        return Err(format!(
            "'{}' block is not terminated by {}",
            START_MARKER,
            END_MARKERS.join(" or ")
        ));
    }

    let declared = declared.ok_or_else(|| "missing mode count".to_string())?;
    if declared != spectrum.len() {
        return Err(format!(
            "declared {} modes but found {} spectrum lines",
            declared,
            spectrum.len()
        ));
    }

    Ok(spectrum)
}

/// 选出严格为负的频率，保留原始位置
pub fn imaginary_modes(spectrum: &[f64]) -> Vec<Mode> {
    spectrum
        .iter()
        .enumerate()
        .map(|(index, &frequency)| Mode::new(index, frequency))
        .filter(Mode::is_imaginary)
        .collect()
}
