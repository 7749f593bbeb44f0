//! # 数据模型模块
//!
//! 定义振动模式、轨迹与结果记录的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `render/`, `pipeline/`, `report/` 使用
//! - 子模块: mode, result

pub mod mode;
pub mod result;

pub use mode::{ListedFrequency, Mode, ModeIndexPolicy, TaggedMovie, TaggedTrajectory};
pub use result::{ResultRecord, ResultSet, TrajectoryMovie};
