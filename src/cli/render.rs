//! # 渲染参数 CLI 定义
//!
//! 外部程序、帧分辨率与目录命名策略，转换为 `RenderConfig`。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 展开
//! - 生成 `render/config.rs` 的 RenderConfig

use crate::render::{DirSuffixPolicy, RenderConfig};
use clap::Args;

/// 渲染参数
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Mode-to-trajectory tool
    #[arg(long, env = "IMGVIB_PLTVIB", default_value = "orca_pltvib")]
    pub pltvib: String,

    /// Jmol executable used to export frames
    #[arg(long, env = "IMGVIB_JMOL", default_value = "jmol")]
    pub jmol: String,

    /// ImageMagick convert executable used to merge frames
    #[arg(long, env = "IMGVIB_CONVERT", default_value = "convert")]
    pub convert: String,

    /// Frame width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Frame height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Filename prefix of exported frames
    #[arg(long, default_value = "movie")]
    pub frame_stem: String,

    /// Naming of the per-mode output directories
    #[arg(long, value_enum, default_value = "stem-and-index")]
    pub dir_policy: DirSuffixPolicy,
}

impl RenderArgs {
    /// 构造渲染配置
    pub fn to_config(&self) -> RenderConfig {
        RenderConfig {
            pltvib: self.pltvib.clone(),
            jmol: self.jmol.clone(),
            convert: self.convert.clone(),
            width: self.width,
            height: self.height,
            frame_stem: self.frame_stem.clone(),
            dir_policy: self.dir_policy,
            ..RenderConfig::default()
        }
    }
}
