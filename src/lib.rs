//! LiteGraph - 轻量级内存图库
//!
//! 面向进程内调用方的图抽象数据类型，支持：
//! - 有向 / 无向两种边模式（构造时选定）
//! - 顶点与边的任意标签
//! - 结构比较（子图、相等）与带标签的深拷贝
//! - 连通性分析（BFS 可达性、图反转、连通分量计数）
//! - 单源最短路径（Dijkstra）
//!
//! 图本身不是线程安全的：同一时刻至多允许一个写者；只有在没有
//! 写者活动时多个读者才能共享一个图，否则各线程应使用自己的
//! `clone()`。所有算法在确定的顶点枚举顺序（插入序）下是确定性的。

pub mod algorithm;
pub mod error;
pub mod graph;
pub mod types;

// 重导出常用类型
pub use algorithm::{Connectivity, Dijkstra};
pub use error::{Error, Result};
pub use graph::{EdgeMode, Graph, VertexSpec};
pub use types::{Label, PathInfo};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
