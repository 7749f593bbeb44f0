//! # trj 模式
//!
//! 现成的轨迹文件 (*.trj) 直接渲染为动画，每个文件一个动画，
//! 生成 `trj_report.html`，不写快照。
//!
//! ## 依赖关系
//! - 使用 `render/movie.rs`, `report/html.rs`

use super::{check_root, prepare_report_dir, print_render_config};
use crate::cli::Cli;
use crate::error::Result;
use crate::models::TrajectoryMovie;
use crate::pipeline::ArtifactCollector;
use crate::render::{MovieRenderer, MovieTarget};
use crate::report::html;
use crate::utils::output;

const REPORT: &str = "trj_report.html";

/// 执行 trj 模式
pub fn execute(cli: &Cli) -> Result<()> {
    output::print_header("Trajectory Movies");
    check_root(&cli.root_dir)?;

    let config = cli.render.to_config();
    print_render_config(&config);
    let trajectories = ArtifactCollector::new(&cli.root_dir, "trj").collect();
    if trajectories.is_empty() {
        output::print_warning(&format!(
            "No trajectories (*.trj) found under '{}'",
            cli.root_dir.display()
        ));
    } else {
        output::print_info(&format!("Found {} trajectories", trajectories.len()));
    }

    let renderer = MovieRenderer::new(&config);
    let mut pairs = Vec::with_capacity(trajectories.len());

    for (i, trj) in trajectories.iter().enumerate() {
        let name = trj.display().to_string();
        output::print_step(i + 1, trajectories.len(), &name);

        let stem = trj
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "trajectory".to_string());
        let movie = renderer.render(trj, &MovieTarget::for_trajectory(stem))?;
        let movie = movie.display().to_string();

        output::print_rendered(&name, &movie);
        pairs.push(TrajectoryMovie {
            trajectory: name,
            movie,
        });
    }

    prepare_report_dir(&cli.report_dir)?;
    let report_path = cli.report_dir.join(REPORT);
    let report = html::render_trj_report(&pairs, &cli.report_dir, &config);
    html::write_report(&report, &report_path)?;
    output::print_success(&format!("Report saved to '{}'", report_path.display()));

    output::print_separator();
    output::print_done(&format!("Rendered {} trajectories", pairs.len()));

    Ok(())
}
