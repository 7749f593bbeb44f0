//! # 解析器模块
//!
//! 从 ORCA 输出中读取虚频。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: orca_log, hessian

pub mod hessian;
pub mod orca_log;

pub use orca_log::{FrequencySource, OrcaLogFrequencies};
