//! # 报告模块
//!
//! 持久化结果集并生成静态报告。
//!
//! ## 子模块
//! - `snapshot`: JSON 快照（每次运行覆盖）
//! - `html`: 静态 HTML 报告
//! - `export`: CSV 导出与终端汇总表
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `models/result.rs`, `utils/natsort.rs`

pub mod export;
pub mod html;
pub mod snapshot;
