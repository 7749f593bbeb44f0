//! # 模式轨迹生成
//!
//! 对每个来源文件调用一次 `orca_pltvib <file> <i1> <i2> ...`，
//! 从标准输出中按打印顺序提取 `creating: <path>`，并为每条轨迹打上模式索引标签。
//!
//! 外部工具的打印顺序是唯一的对应依据，因此这里做两项校验：
//! - 轨迹数必须等于请求的模式数
//! - 文件名带有 `.vNNN.` 标签时，必须与对应位置请求的索引一致
//!
//! ## 依赖关系
//! - 被 `pipeline/mod.rs` 调用
//! - 使用 `render/command.rs`, `models/mode.rs`

use super::command::run_command;
use super::config::RenderConfig;
use crate::error::{ImgvibError, Result};
use crate::models::{Mode, TaggedTrajectory};

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

fn creating_pattern() -> &'static Regex {
    static CREATING: OnceLock<Regex> = OnceLock::new();
    CREATING.get_or_init(|| {
        Regex::new(r"(?m)^[ \t]*creating:[ \t]*(\S.*?)[ \t\r]*$").expect("creating pattern is valid")
    })
}

fn mode_tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"\.v(\d+)\.[^.]+$").expect("mode tag pattern is valid"))
}

/// 为一个来源文件生成全部模式轨迹
pub fn generate_trajectories(
    artifact: &Path,
    modes: &[Mode],
    config: &RenderConfig,
) -> Result<Vec<TaggedTrajectory>> {
    if modes.is_empty() {
        return Ok(Vec::new());
    }

    let workdir = artifact
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = artifact
        .file_name()
        .ok_or_else(|| ImgvibError::FileNotFound {
            path: artifact.display().to_string(),
        })?
        .to_string_lossy()
        .into_owned();

    let indices: Vec<usize> = modes.iter().map(|m| m.index).collect();
    let mut args = vec![file_name];
    args.extend(indices.iter().map(|i| i.to_string()));

    let stdout = run_command(&config.pltvib, &args, Some(workdir))?;

    let paths: Vec<PathBuf> = parse_created_paths(&stdout)
        .into_iter()
        .map(|p| if p.is_absolute() { p } else { workdir.join(p) })
        .collect();

    tag_trajectories(&artifact.display().to_string(), &indices, paths)
}

/// 按打印顺序提取 `creating: <path>`
pub fn parse_created_paths(stdout: &str) -> Vec<PathBuf> {
    creating_pattern()
        .captures_iter(stdout)
        .map(|c| PathBuf::from(&c[1]))
        .collect()
}

/// 从轨迹文件名读取模式索引标签（如 `ts.out.v006.xyz` → 6）
pub fn mode_tag(path: &Path) -> Option<usize> {
    let name = path.file_name()?.to_str()?;
    mode_tag_pattern().captures(name)?[1].parse().ok()
}

/// 按位置把请求的索引与轨迹路径配对，数目或标签不一致时报错
pub fn tag_trajectories(
    artifact: &str,
    indices: &[usize],
    paths: Vec<PathBuf>,
) -> Result<Vec<TaggedTrajectory>> {
    if indices.len() != paths.len() {
        return Err(ImgvibError::alignment(
            artifact,
            format!(
                "requested {} modes but the trajectory tool announced {} files",
                indices.len(),
                paths.len()
            ),
        ));
    }

    indices
        .iter()
        .zip(paths)
        .map(|(&index, path)| match mode_tag(&path) {
            Some(tag) if tag != index => Err(ImgvibError::alignment(
                artifact,
                format!(
                    "expected trajectory for mode {} but got '{}'",
                    index,
                    path.display()
                ),
            )),
            _ => Ok(TaggedTrajectory { index, path }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const STDOUT: &str = "\
orca_pltvib - plot vibrational modes
Reading file ts.out
creating: ts.out.v006.xyz
creating: ts.out.v007.xyz
done
";

    #[test]
    fn test_parse_created_paths_in_print_order() {
        let paths = parse_created_paths(STDOUT);
        assert_eq!(
            paths,
            vec![
                PathBuf::from("ts.out.v006.xyz"),
                PathBuf::from("ts.out.v007.xyz")
            ]
        );
    }

    #[test]
    fn test_parse_created_paths_none() {
        assert!(parse_created_paths("nothing to do\n").is_empty());
    }

    #[test]
    fn test_mode_tag() {
        assert_eq!(mode_tag(Path::new("dir/ts.out.v006.xyz")), Some(6));
        assert_eq!(mode_tag(Path::new("a.hess.v012.xyz")), Some(12));
        assert_eq!(mode_tag(Path::new("mode.xyz")), None);
    }

    #[test]
    fn test_tag_trajectories_pairs_positionally() {
        let tagged = tag_trajectories(
            "ts.out",
            &[6, 7],
            vec!["ts.out.v006.xyz".into(), "ts.out.v007.xyz".into()],
        )
        .unwrap();
        assert_eq!(tagged[0].index, 6);
        assert_eq!(tagged[1].path, PathBuf::from("ts.out.v007.xyz"));
    }

    #[test]
    fn test_tag_trajectories_count_mismatch() {
        let err = tag_trajectories("ts.out", &[6, 7], vec!["ts.out.v006.xyz".into()]);
        assert!(matches!(err, Err(ImgvibError::AlignmentMismatch { .. })));
    }

    #[test]
    fn test_tag_trajectories_reordered_output() {
        let err = tag_trajectories(
            "ts.out",
            &[6, 7],
            vec!["ts.out.v007.xyz".into(), "ts.out.v006.xyz".into()],
        );
        assert!(matches!(err, Err(ImgvibError::AlignmentMismatch { .. })));
    }

    #[test]
    fn test_untagged_paths_trusted_by_position() {
        let tagged = tag_trajectories("x.hess", &[0, 2], vec!["a.xyz".into(), "b.xyz".into()]);
        assert_eq!(tagged.unwrap()[1].index, 2);
    }
}
