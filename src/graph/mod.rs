//! 图核心模块
//!
//! 定义图的核心数据结构与边模式策略

mod graph;
mod policy;

pub use graph::{Graph, VertexSpec};
pub use policy::EdgeMode;
