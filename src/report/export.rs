//! # 结果导出
//!
//! - CSV：每个模式一行，顺序与报告一致
//! - 终端汇总表（tabled）
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `csv`, `tabled`

use crate::error::{ImgvibError, Result};
use crate::models::ResultSet;

use std::path::Path;
use tabled::{Table, Tabled};

/// 汇总表行
#[derive(Debug, Clone, Tabled)]
struct SummaryRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Mode")]
    index: usize,
    #[tabled(rename = "ν (cm⁻¹)")]
    value: String,
    #[tabled(rename = "Movie")]
    movie: String,
}

/// 导出为 CSV
pub fn to_csv(set: &ResultSet, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["fn", "index", "value_cm-1", "movie"])?;

    for (_, records) in set.iter_natural() {
        for r in records {
            wtr.write_record([
                r.file.clone(),
                r.index.to_string(),
                format!("{:.2}", r.value),
                r.movie.clone(),
            ])?;
        }
    }

    wtr.flush().map_err(|e| ImgvibError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 生成终端汇总表
pub fn summary_table(set: &ResultSet) -> String {
    let rows: Vec<SummaryRow> = set
        .iter_natural()
        .into_iter()
        .flat_map(|(_, records)| records.iter())
        .map(|r| SummaryRow {
            file: r.file.clone(),
            index: r.index,
            value: format!("{:.2}", r.value),
            movie: r.movie.clone(),
        })
        .collect();

    Table::new(&rows).to_string()
}
