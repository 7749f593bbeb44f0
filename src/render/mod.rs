//! # 渲染模块
//!
//! 调用外部程序把虚频模式渲染为动画。
//!
//! ## 子模块
//! - `config`: 渲染配置（外部程序、分辨率、目录命名策略）
//! - `command`: 外部命令执行
//! - `trajectory`: 调用 orca_pltvib 生成模式轨迹
//! - `movie`: 调用 Jmol 导出帧并用 ImageMagick 合成动画
//!
//! ## 依赖关系
//! - 被 `pipeline/` 和 `commands/` 使用
//! - 使用 `models/mode.rs`

pub mod command;
pub mod config;
pub mod movie;
pub mod trajectory;

pub use config::{DirSuffixPolicy, RenderConfig};
pub use movie::{MovieRenderer, MovieTarget};
pub use trajectory::generate_trajectories;
