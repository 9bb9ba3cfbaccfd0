//! 图算法模块
//!
//! 包含连通性分析与最短路径算法

mod connectivity;
mod shortest_path;

pub use connectivity::Connectivity;
pub use shortest_path::Dijkstra;
