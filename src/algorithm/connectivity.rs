//! 连通性分析
//!
//! BFS 可达性、图反转、强连通启发式与连通分量计数。
//! 全部基于 [`Graph`] 的公开接口，反转返回新图，从不修改输入。

use crate::error::{Error, Result};
use crate::graph::Graph;
use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::hash::Hash;
use tracing::debug;

/// 连通性分析器
pub struct Connectivity<'a, V> {
    graph: &'a Graph<V>,
}

impl<'a, V> Connectivity<'a, V>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    /// 创建分析器
    pub fn new(graph: &'a Graph<V>) -> Self {
        Self { graph }
    }

    /// BFS 可达性：是否存在从 `start` 到 `goal` 的有向路径
    ///
    /// 每个顶点至多访问一次，`goal` 出队即返回 true；任一端点
    /// 未注册时报 `VertexNotFound`。O(V+E)
    pub fn reachable(&self, start: &V, goal: &V) -> Result<bool> {
        if !self.graph.has_vertex(start) {
            return Err(Error::VertexNotFound(format!("{:?}", start)));
        }
        if !self.graph.has_vertex(goal) {
            return Err(Error::VertexNotFound(format!("{:?}", goal)));
        }
        Ok(Self::bfs(self.graph, start, goal))
    }

    fn bfs(graph: &Graph<V>, start: &V, goal: &V) -> bool {
        let mut visited: HashSet<V> = HashSet::new();
        let mut queue: VecDeque<V> = VecDeque::new();
        visited.insert(start.clone());
        queue.push_back(start.clone());

        while let Some(node) = queue.pop_front() {
            if node == *goal {
                return true;
            }
            if let Ok(succ) = graph.adjacent_to(&node) {
                for next in succ {
                    if visited.insert(next.clone()) {
                        queue.push_back(next);
                    }
                }
            }
        }
        false
    }

    /// 反转图：每条边及其标签翻转方向，顶点标签与边模式保持不变
    ///
    /// 纯函数，返回新图，输入图不受任何影响；无向图的反转与原图相等
    pub fn reversed(&self) -> Graph<V> {
        let mut rev = Graph::with_mode(self.graph.mode());
        for v in self.graph.vertices() {
            rev.add_vertex(v.clone());
            if let Ok(Some(label)) = self.graph.vertex_label(v) {
                rev.label_vertex(v, label.clone()).ok();
            }
        }
        for (from, to) in self.graph.edges() {
            rev.add_edge(to, from);
            if let Ok(Some(label)) = self.graph.edge_label(from, to) {
                rev.label_edge(to, from, label.clone()).ok();
            }
        }
        rev
    }

    /// 强连通启发式：仅验证枚举序首、尾两个顶点相互可达
    ///
    /// 先在原图上检查首 -> 尾，再在反转图上检查首 -> 尾（等价于
    /// 原图上的尾 -> 首）。这不是完整的强连通判定（Kosaraju/Tarjan），
    /// 只证明所选的一对顶点相互可达。空图视为真
    pub fn is_probably_strongly_connected(&self) -> bool {
        let first = match self.graph.vertices().next() {
            Some(v) => v,
            None => return true,
        };
        let last = match self.graph.vertices().last() {
            Some(v) => v,
            None => return true,
        };

        if !Self::bfs(self.graph, first, last) {
            return false;
        }
        Self::bfs(&self.reversed(), first, last)
    }

    /// 连通分量计数
    ///
    /// 按枚举顺序对每个未访问顶点做一次沿出边的深度优先遍历。
    /// 无向图得到真实的连通分量数；有向图按前向可达性划分，
    /// 与弱连通分量不同
    pub fn component_count(&self) -> usize {
        let mut visited: HashSet<V> = HashSet::new();
        let mut count = 0;

        for v in self.graph.vertices() {
            if visited.contains(v) {
                continue;
            }
            count += 1;

            let mut stack = vec![v.clone()];
            visited.insert(v.clone());
            while let Some(node) = stack.pop() {
                if let Ok(succ) = self.graph.adjacent_to(&node) {
                    for next in succ {
                        if visited.insert(next.clone()) {
                            stack.push(next);
                        }
                    }
                }
            }
        }

        debug!(components = count, "连通分量计数完成");
        count
    }
}
