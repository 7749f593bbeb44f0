//! # 处理流水线
//!
//! 单个来源文件的线性流程：
//! 模式列表 → 轨迹生成 → 逐条渲染动画 → 对齐为结果记录。
//! 全程单线程顺序执行，每个外部程序退出后才进行下一步。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `render/`, `models/`
//! - 子模块: discover, align

pub mod align;
pub mod discover;

pub use discover::ArtifactCollector;

use crate::error::Result;
use crate::models::{Mode, ResultRecord, TaggedMovie};
use crate::render::{generate_trajectories, MovieRenderer, MovieTarget, RenderConfig};

use std::path::Path;

/// 处理一个来源文件的全部虚频模式
pub fn process_artifact(
    artifact: &Path,
    modes: &[Mode],
    config: &RenderConfig,
) -> Result<Vec<ResultRecord>> {
    let trajectories = generate_trajectories(artifact, modes, config)?;

    let base_name = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_string());
    let renderer = MovieRenderer::new(config);

    let mut movies = Vec::with_capacity(trajectories.len());
    for trj in &trajectories {
        let target = MovieTarget::for_mode(base_name.as_str(), trj.index);
        let movie = renderer.render(&trj.path, &target)?;
        movies.push(TaggedMovie {
            index: trj.index,
            path: movie,
        });
    }

    align::assemble(&artifact.display().to_string(), modes, &trajectories, &movies)
}
