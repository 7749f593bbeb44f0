//! # 工具函数模块
//!
//! 提供美化输出、进度条、自然排序等工具。
//!
//! ## 依赖关系
//! - 被 `commands/`, `render/`, `report/` 模块使用
//! - 子模块: output, progress, natsort

pub mod natsort;
pub mod output;
pub mod progress;
