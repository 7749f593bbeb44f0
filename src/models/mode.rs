//! # 振动模式数据模型
//!
//! 虚频模式在完整振动谱中的位置与频率值，以及由外部工具生成的轨迹文件。
//!
//! ## 索引约定
//! - `.hess` 文件：索引即谱线在 `$ir_spectrum` 块中的位置，可以不连续
//! - `.out` 日志：由 [`ModeIndexPolicy`] 决定，默认假设非线性分子，
//!   虚频从索引 6 开始连续排列
//!
//! ## 依赖关系
//! - 被 `parsers/`, `render/`, `pipeline/` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 非线性分子的平动 + 转动自由度数目
pub const NONLINEAR_OFFSET: usize = 6;

/// 单个振动模式
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mode {
    /// 在完整振动谱中的位置（从 0 开始，不重新编号）
    pub index: usize,

    /// 频率 (cm⁻¹)，负值表示虚频
    pub frequency: f64,
}

impl Mode {
    pub fn new(index: usize, frequency: f64) -> Self {
        Mode { index, frequency }
    }

    pub fn is_imaginary(&self) -> bool {
        self.frequency < 0.0
    }
}

/// 日志频率表中读到的一行
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListedFrequency {
    /// 日志中打印的模式编号
    pub listed_index: usize,
    /// 频率 (cm⁻¹)
    pub value: f64,
}

/// 日志来源虚频的索引分配策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeIndexPolicy {
    /// 第 n 个虚频的索引为 `offset + n`
    Contiguous { offset: usize },
    /// 直接使用日志打印的编号
    AsListed,
}

impl Default for ModeIndexPolicy {
    fn default() -> Self {
        ModeIndexPolicy::Contiguous {
            offset: NONLINEAR_OFFSET,
        }
    }
}

impl ModeIndexPolicy {
    /// 为日志中的虚频分配模式索引，顺序保持不变
    pub fn assign(&self, listed: &[ListedFrequency]) -> Vec<Mode> {
        match self {
            ModeIndexPolicy::Contiguous { offset } => listed
                .iter()
                .enumerate()
                .map(|(n, f)| Mode::new(offset + n, f.value))
                .collect(),
            ModeIndexPolicy::AsListed => listed
                .iter()
                .map(|f| Mode::new(f.listed_index, f.value))
                .collect(),
        }
    }
}

impl std::fmt::Display for ModeIndexPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModeIndexPolicy::Contiguous { offset } => write!(f, "contiguous from {}", offset),
            ModeIndexPolicy::AsListed => write!(f, "as listed"),
        }
    }
}

/// 带模式索引标签的轨迹文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedTrajectory {
    pub index: usize,
    pub path: PathBuf,
}

/// 带模式索引标签的动画文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedMovie {
    pub index: usize,
    pub path: PathBuf,
}
