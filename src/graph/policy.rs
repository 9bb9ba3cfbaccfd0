//! 边语义策略
//!
//! 有向/无向的差异在构造时以策略值选定，而不是通过子类覆写各个变更方法

use serde::{Deserialize, Serialize};

/// 边模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeMode {
    /// 有向：每个有序顶点对是一条独立的边
    Directed,
    /// 无向：边 (a,b) 与 (b,a) 互为镜像，作为一条逻辑边计数，标签保持一致
    Undirected,
}

impl EdgeMode {
    /// 是否镜像存储（无向模式）
    pub fn is_symmetric(&self) -> bool {
        matches!(self, EdgeMode::Undirected)
    }
}

impl Default for EdgeMode {
    fn default() -> Self {
        EdgeMode::Directed
    }
}
