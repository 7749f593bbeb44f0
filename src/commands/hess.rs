//! # hess 模式
//!
//! ORCA Hessian 文件 (*.hess) → `$ir_spectrum` 中的虚频（位置即索引，可不连续）
//! → 轨迹 → 动画 → `hessvibs.json` + `hessvib_report.html`。
//! 任一文件的谱块缺失或损坏都会终止整个运行。
//!
//! ## 依赖关系
//! - 使用 `parsers/hessian.rs`
//! - 使用 `commands/mod.rs` 的共享流程

use super::{check_root, collect_results, print_render_config, write_outputs, OutputNames};
use crate::cli::Cli;
use crate::error::Result;
use crate::parsers::hessian;
use crate::pipeline::ArtifactCollector;
use crate::utils::output;

const NAMES: OutputNames = OutputNames {
    snapshot: "hessvibs.json",
    report: "hessvib_report.html",
    csv: "hessvibs.csv",
    title: "Imaginary vibrations (Hessian)",
};

/// 执行 hess 模式
pub fn execute(cli: &Cli) -> Result<()> {
    output::print_header("Imaginary Vibrations from ORCA Hessians");
    check_root(&cli.root_dir)?;

    let config = cli.render.to_config();
    print_render_config(&config);
    let hessians = ArtifactCollector::new(&cli.root_dir, "hess").collect();
    if hessians.is_empty() {
        output::print_warning(&format!(
            "No Hessian files (*.hess) found under '{}'",
            cli.root_dir.display()
        ));
    } else {
        output::print_info(&format!("Found {} Hessian files", hessians.len()));
    }

    let set = collect_results(&hessians, hessian::parse_hessian_file, &config)?;

    write_outputs(&set, &NAMES, cli, &config)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::commands::stub_tools;
    use crate::error::ImgvibError;
    use crate::report::snapshot::read_snapshot;

    use clap::Parser;
    use std::fs;
    use std::path::Path;

    const HESS: &str = "$orca_hessian_file\n\n$ir_spectrum\n4\n  -120.50  0.0  1.0  0.0 0.0 0.0\n    50.20  0.0  1.0  0.0 0.0 0.0\n   -30.10  0.0  1.0  0.0 0.0 0.0\n   200.00  0.0  1.0  0.0 0.0 0.0\n\n$end\n";

    #[test]
    fn test_hess_pipeline_with_stub_tools() {
        let (_guard, tools) = stub_tools::acquire();
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("calc");
        let report = tmp.path().join("report");
        fs::create_dir_all(root.join("ts1")).unwrap();
        let artifact = root.join("ts1/a.hess");
        fs::write(&artifact, HESS).unwrap();

        let cli = tools.cli(&root, &report, "--hess", "pltvib");

        // 重复运行：输出目录已存在不报错
        execute(&cli).unwrap();
        execute(&cli).unwrap();

        let set = read_snapshot(&report.join("hessvibs.json")).unwrap();
        let records = set.get(&artifact.display().to_string()).unwrap();
        let pairs: Vec<(usize, f64)> = records.iter().map(|r| (r.index, r.value)).collect();
        assert_eq!(pairs, vec![(0, -120.5), (2, -30.1)]);
        assert!(records[0].movie.ends_with("a_trj0/a_trj0.gif"));
        assert!(records[1].movie.ends_with("a_trj2/a_trj2.gif"));
        assert!(Path::new(&records[1].movie).exists());
        assert!(root.join("ts1/a_trj2/animate.spt").exists());

        let html = fs::read_to_string(report.join("hessvib_report.html")).unwrap();
        assert!(html.contains("../calc/ts1/a_trj0/a_trj0.gif"));
        assert!(report.join("hessvibs.csv").exists());
    }

    #[test]
    fn test_reordered_announcements_are_rejected() {
        let (_guard, tools) = stub_tools::acquire();
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("calc");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("a.hess"), HESS).unwrap();

        let cli = tools.cli(&root, &tmp.path().join("report"), "--hess", "pltvib_rev");
        assert!(matches!(
            execute(&cli),
            Err(ImgvibError::AlignmentMismatch { .. })
        ));
        assert!(!tmp.path().join("report/hessvibs.json").exists());
    }

    #[test]
    fn test_malformed_hessian_aborts_run() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("calc");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("bad.hess"), "$hessian\n1\n$end\n").unwrap();

        let cli = Cli::try_parse_from([
            "imgvib".to_string(),
            root.display().to_string(),
            "--hess".to_string(),
            "--report-dir".to_string(),
            tmp.path().join("report").display().to_string(),
        ])
        .unwrap();

        assert!(matches!(execute(&cli), Err(ImgvibError::ParseError { .. })));
        assert!(!tmp.path().join("report/hessvibs.json").exists());
    }
}
