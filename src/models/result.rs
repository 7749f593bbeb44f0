//! # 结果记录数据模型
//!
//! `ResultRecord` 绑定来源文件、模式索引、频率与动画路径，是持久化与报告的最小单位。
//! `ResultSet` 以来源文件路径为键，每次运行重新构建并整体覆盖写出。
//!
//! ## 依赖关系
//! - 被 `pipeline/align.rs` 创建
//! - 被 `report/` 序列化与渲染

use crate::utils::natsort::natural_cmp;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 单个虚频模式的结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// 来源文件路径
    #[serde(rename = "fn")]
    pub file: String,

    /// 在完整振动谱中的索引
    pub index: usize,

    /// 频率 (cm⁻¹)
    pub value: f64,

    /// 动画文件路径
    pub movie: String,
}

/// 来源文件 → 结果记录列表
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    artifacts: BTreeMap<String, Vec<ResultRecord>>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入某个来源文件的全部记录（覆盖同名条目）
    pub fn insert(&mut self, artifact: impl Into<String>, records: Vec<ResultRecord>) {
        self.artifacts.insert(artifact.into(), records);
    }

    pub fn get(&self, artifact: &str) -> Option<&[ResultRecord]> {
        self.artifacts.get(artifact).map(|v| v.as_slice())
    }

    /// 来源文件数目
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// 全部模式数目
    pub fn mode_count(&self) -> usize {
        self.artifacts.values().map(|v| v.len()).sum()
    }

    /// 按来源文件名自然排序迭代，记录顺序保持不变
    pub fn iter_natural(&self) -> Vec<(&str, &[ResultRecord])> {
        let mut entries: Vec<(&str, &[ResultRecord])> = self
            .artifacts
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
            .collect();
        entries.sort_by(|a, b| natural_cmp(a.0, b.0));
        entries
    }
}

/// 轨迹模式下的一对 (轨迹文件, 动画文件)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrajectoryMovie {
    pub trajectory: String,
    pub movie: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(file: &str, index: usize, value: f64) -> ResultRecord {
        ResultRecord {
            file: file.to_string(),
            index,
            value,
            movie: format!("trj{}/trj{}.gif", index, index),
        }
    }

    #[test]
    fn test_iter_natural_orders_embedded_numbers() {
        let mut set = ResultSet::new();
        set.insert("run2.out", vec![record("run2.out", 6, -10.0)]);
        set.insert("run10.out", vec![record("run10.out", 6, -20.0)]);
        set.insert("run1.out", vec![record("run1.out", 6, -30.0)]);

        let order: Vec<&str> = set.iter_natural().into_iter().map(|(k, _)| k).collect();
        assert_eq!(order, vec!["run1.out", "run2.out", "run10.out"]);
    }

    #[test]
    fn test_records_keep_insertion_order() {
        let mut set = ResultSet::new();
        set.insert(
            "a.hess",
            vec![record("a.hess", 0, -120.5), record("a.hess", 2, -30.1)],
        );
        let records = set.get("a.hess").unwrap();
        assert_eq!(records[0].index, 0);
        assert_eq!(records[1].index, 2);
        assert_eq!(set.mode_count(), 2);
    }

    #[test]
    fn test_record_serializes_fn_field() {
        let json = serde_json::to_string(&record("x.out", 6, -1.0)).unwrap();
        assert!(json.contains("\"fn\":\"x.out\""));
    }
}
