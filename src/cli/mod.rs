//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 命令结构
//! `imgvib <ROOT_DIR> (--imgvib | --trj | --hess) [options]`
//! - `--imgvib`: ORCA 日志 (*.out) 中的虚频
//! - `--trj`: 现成的轨迹文件 (*.trj)
//! - `--hess`: ORCA Hessian 文件 (*.hess) 中的虚频
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: render

pub mod render;

use crate::models::ModeIndexPolicy;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// imgvib - 虚频模式动画报告
#[derive(Parser, Debug)]
#[command(name = "imgvib")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Render imaginary vibrational modes of ORCA calculations into an HTML report", long_about = None)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["imgvib", "trj", "hess"]),
))]
pub struct Cli {
    /// Root directory to scan recursively
    pub root_dir: PathBuf,

    /// Imaginary modes from ORCA logs (*.out, slurm logs ignored)
    #[arg(long)]
    pub imgvib: bool,

    /// Animate existing trajectories (*.trj)
    #[arg(long)]
    pub trj: bool,

    /// Imaginary modes from ORCA Hessian files (*.hess)
    #[arg(long)]
    pub hess: bool,

    /// Directory for the report, snapshot and CSV
    #[arg(long, default_value = ".")]
    pub report_dir: PathBuf,

    /// Index of the first imaginary mode in ORCA logs (6 for non-linear molecules)
    #[arg(long, default_value_t = crate::models::mode::NONLINEAR_OFFSET)]
    pub first_mode_index: usize,

    /// Use the mode numbers printed in ORCA logs instead of a contiguous offset
    #[arg(long, default_value_t = false, conflicts_with = "first_mode_index")]
    pub as_listed: bool,

    /// Skip CSV export
    #[arg(long, default_value_t = false)]
    pub no_csv: bool,

    #[command(flatten)]
    pub render: render::RenderArgs,
}

/// 运行模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    ImgVib,
    Trj,
    Hess,
}

impl Cli {
    /// 选中的运行模式（clap 保证恰好一个）
    pub fn mode(&self) -> Mode {
        if self.trj {
            Mode::Trj
        } else if self.hess {
            Mode::Hess
        } else {
            Mode::ImgVib
        }
    }

    /// 日志来源虚频的索引策略
    pub fn index_policy(&self) -> ModeIndexPolicy {
        if self.as_listed {
            ModeIndexPolicy::AsListed
        } else {
            ModeIndexPolicy::Contiguous {
                offset: self.first_mode_index,
            }
        }
    }
}
