//! # 渲染配置
//!
//! 由命令行参数构造一次，显式传入各组件。
//!
//! ## 依赖关系
//! - 被 `cli/`, `render/`, `report/` 使用
//! - 无外部模块依赖

use clap::ValueEnum;

/// 动画输出目录命名策略
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum DirSuffixPolicy {
    /// trj<index>
    IndexOnly,
    /// <stem>_trj<index>, for several artifacts sharing one directory
    #[default]
    StemAndIndex,
}

impl std::fmt::Display for DirSuffixPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirSuffixPolicy::IndexOnly => write!(f, "index-only"),
            DirSuffixPolicy::StemAndIndex => write!(f, "stem-and-index"),
        }
    }
}

/// 渲染配置
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// 模式 → 轨迹 工具
    pub pltvib: String,
    /// 帧渲染引擎
    pub jmol: String,
    /// 图像 → 动画 编码器
    pub convert: String,
    /// 导出帧宽度 (px)
    pub width: u32,
    /// 导出帧高度 (px)
    pub height: u32,
    /// 帧文件名前缀
    pub frame_stem: String,
    /// 输出目录命名策略
    pub dir_policy: DirSuffixPolicy,
    /// 报告中动画的显示宽度 (px)
    pub display_width: u32,
    /// 报告中动画的显示高度 (px)
    pub display_height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            pltvib: "orca_pltvib".to_string(),
            jmol: "jmol".to_string(),
            convert: "convert".to_string(),
            width: 800,
            height: 600,
            frame_stem: "movie".to_string(),
            dir_policy: DirSuffixPolicy::default(),
            display_width: 400,
            display_height: 300,
        }
    }
}
