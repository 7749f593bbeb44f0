//! # 结果对齐
//!
//! 把模式（索引 + 频率）、轨迹、动画三个序列按位置合并为 `ResultRecord`。
//! 三者长度必须相同，且每个位置的模式索引标签一致，否则报错而不是静默错配。
//! 不排序、不去重，输出顺序与输入一致（索引升序）。
//!
//! ## 依赖关系
//! - 被 `pipeline/mod.rs` 调用
//! - 使用 `models/`

use crate::error::{ImgvibError, Result};
use crate::models::{Mode, ResultRecord, TaggedMovie, TaggedTrajectory};

/// 合并一个来源文件的全部结果
pub fn assemble(
    artifact: &str,
    modes: &[Mode],
    trajectories: &[TaggedTrajectory],
    movies: &[TaggedMovie],
) -> Result<Vec<ResultRecord>> {
    if modes.len() != trajectories.len() || modes.len() != movies.len() {
        return Err(ImgvibError::alignment(
            artifact,
            format!(
                "{} modes, {} trajectories, {} movies",
                modes.len(),
                trajectories.len(),
                movies.len()
            ),
        ));
    }

    modes
        .iter()
        .zip(trajectories)
        .zip(movies)
        .map(|((mode, trj), movie)| {
            if trj.index != mode.index || movie.index != mode.index {
                return Err(ImgvibError::alignment(
                    artifact,
                    format!(
                        "mode {} paired with trajectory {} and movie {}",
                        mode.index, trj.index, movie.index
                    ),
                ));
            }
            Ok(ResultRecord {
                file: artifact.to_string(),
                index: mode.index,
                value: mode.frequency,
                movie: movie.path.display().to_string(),
            })
        })
        .collect()
}
