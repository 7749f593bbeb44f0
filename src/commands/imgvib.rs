//! # imgvib 模式
//!
//! ORCA 日志 (*.out) → 虚频 → 轨迹 → 动画 → `imgvibs.json` + `imgvib_report.html`。
//! 文件名包含 `slurm` 的日志被跳过。
//!
//! ## 依赖关系
//! - 使用 `parsers/orca_log.rs`
//! - 使用 `commands/mod.rs` 的共享流程

use super::{check_root, collect_results, print_render_config, write_outputs, OutputNames};
use crate::cli::Cli;
use crate::error::Result;
use crate::parsers::{FrequencySource, OrcaLogFrequencies};
use crate::pipeline::ArtifactCollector;
use crate::utils::output;

const NAMES: OutputNames = OutputNames {
    snapshot: "imgvibs.json",
    report: "imgvib_report.html",
    csv: "imgvibs.csv",
    title: "Imaginary vibrations",
};

/// 执行 imgvib 模式
pub fn execute(cli: &Cli) -> Result<()> {
    output::print_header("Imaginary Vibrations from ORCA Logs");
    check_root(&cli.root_dir)?;

    let config = cli.render.to_config();
    let policy = cli.index_policy();
    print_render_config(&config);

    let logs = ArtifactCollector::new(&cli.root_dir, "out")
        .ignoring(&["slurm"])
        .collect();
    if logs.is_empty() {
        output::print_warning(&format!(
            "No ORCA logs (*.out) found under '{}'",
            cli.root_dir.display()
        ));
    } else {
        output::print_info(&format!(
            "Found {} ORCA logs, mode indices {}",
            logs.len(),
            policy
        ));
    }

    let source = OrcaLogFrequencies;
    let set = collect_results(
        &logs,
        |path| {
            let listed = source.imaginary_frequencies(path)?;
            Ok(policy.assign(&listed))
        },
        &config,
    )?;

    write_outputs(&set, &NAMES, cli, &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::snapshot::read_snapshot;

    use clap::Parser;
    use std::fs;

    const MINIMUM_LOG: &str = "\
VIBRATIONAL FREQUENCIES
-----------------------

   0:         0.00 cm**-1
   6:        85.10 cm**-1
   7:       412.77 cm**-1

NORMAL MODES
";

    const TS_LOG: &str = "\
VIBRATIONAL FREQUENCIES
-----------------------

   0:         0.00 cm**-1
   5:         0.00 cm**-1
   6:      -372.47 cm**-1 ***imaginary mode***
   7:       -41.03 cm**-1 ***imaginary mode***
   8:       102.41 cm**-1

NORMAL MODES
";

    #[cfg(unix)]
    #[test]
    fn test_imgvib_pipeline_with_stub_tools() {
        let (_guard, tools) = crate::commands::stub_tools::acquire();
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("calc");
        let report = tmp.path().join("report");
        fs::create_dir_all(&root).unwrap();
        let log = root.join("ts.out");
        fs::write(&log, TS_LOG).unwrap();

        execute(&tools.cli(&root, &report, "--imgvib", "pltvib")).unwrap();

        // 轨迹按 pltvib 的命名规则以模式索引编号
        assert!(root.join("ts.out.v006.xyz").exists());
        assert!(root.join("ts.out.v007.xyz").exists());

        let set = read_snapshot(&report.join("imgvibs.json")).unwrap();
        let records = set.get(&log.display().to_string()).unwrap();
        let pairs: Vec<(usize, f64)> = records.iter().map(|r| (r.index, r.value)).collect();
        assert_eq!(pairs, vec![(6, -372.47), (7, -41.03)]);
        assert!(records[0].movie.ends_with("ts_trj6/ts_trj6.gif"));
        assert!(records[1].movie.ends_with("ts_trj7/ts_trj7.gif"));
        assert!(records.iter().all(|r| std::path::Path::new(&r.movie).exists()));

        let html = fs::read_to_string(report.join("imgvib_report.html")).unwrap();
        assert!(html.contains("../calc/ts_trj7/ts_trj7.gif"));
        let csv = fs::read_to_string(report.join("imgvibs.csv")).unwrap();
        assert!(csv.contains(",6,-372.47,"));
    }

    #[test]
    fn test_minimum_has_no_modes_and_slurm_is_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("calc");
        let report = tmp.path().join("report");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("opt.out"), MINIMUM_LOG).unwrap();
        fs::write(root.join("slurm-42.out"), "not an ORCA log").unwrap();

        let cli = Cli::try_parse_from([
            "imgvib".to_string(),
            root.display().to_string(),
            "--imgvib".to_string(),
            "--report-dir".to_string(),
            report.display().to_string(),
        ])
        .unwrap();
        execute(&cli).unwrap();

        let set = read_snapshot(&report.join("imgvibs.json")).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.mode_count(), 0);
        assert!(set.get(&root.join("opt.out").display().to_string()).is_some());

        let html = fs::read_to_string(report.join("imgvib_report.html")).unwrap();
        assert!(html.contains("opt.out"));
        assert!(!html.contains("slurm-42.out"));
    }
}
