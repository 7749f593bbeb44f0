//! # 命令执行模块
//!
//! 按运行模式执行完整流程，并写出快照与报告。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `pipeline/`, `render/`, `report/`, `utils/`
//! - 子模块: imgvib, hess, trj

pub mod hess;
pub mod imgvib;
pub mod trj;

#[cfg(all(test, unix))]
mod stub_tools;

use crate::cli::{Cli, Mode};
use crate::error::{ImgvibError, Result};
use crate::models::{Mode as VibMode, ResultSet};
use crate::pipeline;
use crate::render::RenderConfig;
use crate::report::{export, html, snapshot};
use crate::utils::output;

use std::fs;
use std::path::{Path, PathBuf};

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    match cli.mode() {
        Mode::ImgVib => imgvib::execute(&cli),
        Mode::Hess => hess::execute(&cli),
        Mode::Trj => trj::execute(&cli),
    }
}

/// 某个模式的输出文件名
pub(crate) struct OutputNames {
    pub snapshot: &'static str,
    pub report: &'static str,
    pub csv: &'static str,
    pub title: &'static str,
}

/// 验证根目录
pub(crate) fn check_root(root: &Path) -> Result<()> {
    if !root.is_dir() {
        return Err(ImgvibError::DirectoryNotFound {
            path: root.display().to_string(),
        });
    }
    Ok(())
}

/// 打印渲染配置
pub(crate) fn print_render_config(config: &RenderConfig) {
    output::print_info(&format!(
        "Frames {}x{} via '{}' + '{}', output directories: {}",
        config.width, config.height, config.jmol, config.convert, config.dir_policy
    ));
}

/// 创建报告目录
pub(crate) fn prepare_report_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| ImgvibError::FileWriteError {
        path: dir.display().to_string(),
        source: e,
    })
}

/// 依次处理每个来源文件，任何错误立即终止
pub(crate) fn collect_results<F>(
    artifacts: &[PathBuf],
    modes_of: F,
    config: &RenderConfig,
) -> Result<ResultSet>
where
    F: Fn(&Path) -> Result<Vec<VibMode>>,
{
    let mut set = ResultSet::new();

    for (i, artifact) in artifacts.iter().enumerate() {
        let name = artifact.display().to_string();
        output::print_step(i + 1, artifacts.len(), &name);

        let modes = modes_of(artifact)?;
        if modes.is_empty() {
            output::print_skip(&format!("{}: no imaginary modes", name));
        }

        let records = pipeline::process_artifact(artifact, &modes, config)?;
        for r in &records {
            output::print_rendered(
                &format!("{} [mode {}, {:.2} cm-1]", name, r.index, r.value),
                &r.movie,
            );
        }

        set.insert(name, records);
    }

    Ok(set)
}

/// 写出快照、HTML 报告与 CSV
pub(crate) fn write_outputs(
    set: &ResultSet,
    names: &OutputNames,
    cli: &Cli,
    config: &RenderConfig,
) -> Result<()> {
    prepare_report_dir(&cli.report_dir)?;

    let snapshot_path = cli.report_dir.join(names.snapshot);
    snapshot::write_snapshot(set, &snapshot_path)?;
    output::print_success(&format!("Snapshot saved to '{}'", snapshot_path.display()));

    let report_path = cli.report_dir.join(names.report);
    let report = html::render_imgvib_report(set, names.title, &cli.report_dir, config);
    html::write_report(&report, &report_path)?;
    output::print_success(&format!("Report saved to '{}'", report_path.display()));

    if !cli.no_csv {
        let csv_path = cli.report_dir.join(names.csv);
        export::to_csv(set, &csv_path)?;
        output::print_success(&format!("CSV saved to '{}'", csv_path.display()));
    }

    if set.mode_count() > 0 {
        output::print_header("Imaginary Modes");
        println!("{}", export::summary_table(set));
    }

    output::print_separator();
    output::print_done(&format!(
        "Processed {} files, rendered {} imaginary modes",
        set.len(),
        set.mode_count()
    ));

    Ok(())
}
