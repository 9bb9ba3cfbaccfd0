//! 图数据结构
//!
//! 基于邻接集合的内存图，支持有向/无向两种边模式、顶点/边标签、
//! 结构比较与深拷贝。顶点按插入顺序枚举，所有算法依赖该确定性顺序。
//!
//! 非线程安全：同一时刻至多一个写者；存在写者时读者须各自持有 `clone()`。

use super::policy::EdgeMode;
use crate::error::{Error, Result};
use crate::types::Label;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// 顶点描述符（构造用）
///
/// `out` 中尚未注册的邻居会被自动注册为顶点（允许前向引用）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexSpec<V> {
    /// 顶点标识
    pub id: V,
    /// 出边邻居列表
    pub out: Vec<V>,
}

impl<V> VertexSpec<V> {
    pub fn new(id: V, out: impl IntoIterator<Item = V>) -> Self {
        Self {
            id,
            out: out.into_iter().collect(),
        }
    }
}

/// 内存图
///
/// 顶点标识 `V` 由调用方选择，要求可比较、可哈希；数字、字符串或
/// 调用方自定义的枚举类型均可。混合标识通过枚举类型的 `V` 表达。
#[derive(Debug, Clone)]
pub struct Graph<V> {
    /// 顶点 -> 直接后继集合（插入序即枚举序）
    adjacency: IndexMap<V, IndexSet<V>>,
    /// 顶点标签
    vertex_labels: IndexMap<V, Label<V>>,
    /// 边标签（按精确有序顶点对存储，无向图两个方向各占一个槽位）
    edge_labels: IndexMap<(V, V), Label<V>>,
    /// 逻辑边数量（无向图的镜像对计为一条边）
    edge_count: usize,
    /// 边模式
    mode: EdgeMode,
}

impl<V> Graph<V>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    /// 创建空的有向图
    pub fn directed() -> Self {
        Self::with_mode(EdgeMode::Directed)
    }

    /// 创建空的无向图
    pub fn undirected() -> Self {
        Self::with_mode(EdgeMode::Undirected)
    }

    /// 按指定边模式创建空图
    pub fn with_mode(mode: EdgeMode) -> Self {
        Self {
            adjacency: IndexMap::new(),
            vertex_labels: IndexMap::new(),
            edge_labels: IndexMap::new(),
            edge_count: 0,
            mode,
        }
    }

    /// 从顶点描述符序列构造
    ///
    /// 描述符中出现的邻居若尚未注册会先被注册为顶点再连边，
    /// 因此与 `add_edge` 不同，这条路径不会丢弃任何边
    pub fn from_specs(mode: EdgeMode, specs: impl IntoIterator<Item = VertexSpec<V>>) -> Self {
        let mut graph = Self::with_mode(mode);
        for spec in specs {
            graph.add_vertex(spec.id.clone());
            for to in &spec.out {
                graph.add_vertex(to.clone());
                graph.add_edge(&spec.id, to);
            }
        }
        graph
    }

    /// 获取边模式
    pub fn mode(&self) -> EdgeMode {
        self.mode
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点；已存在时为幂等空操作
    pub fn add_vertex(&mut self, id: V) {
        self.adjacency.entry(id).or_default();
    }

    /// 删除顶点
    ///
    /// 级联删除其顶点标签、所有以它为端点的边（含反向）及相关边标签；
    /// 顶点不存在时为空操作
    pub fn remove_vertex(&mut self, id: &V) {
        if !self.has_vertex(id) {
            return;
        }

        let outgoing: Vec<V> = match self.adjacency.get(id) {
            Some(succ) => succ.iter().cloned().collect(),
            None => Vec::new(),
        };
        for to in &outgoing {
            self.remove_edge(id, to);
        }

        // 有向图中可能残留指向该顶点的入边
        let incoming: Vec<V> = self
            .adjacency
            .iter()
            .filter(|(_, succ)| succ.contains(id))
            .map(|(from, _)| from.clone())
            .collect();
        for from in &incoming {
            self.remove_edge(from, id);
        }

        self.adjacency.shift_remove(id);
        self.vertex_labels.shift_remove(id);
    }

    /// 顶点是否存在
    pub fn has_vertex(&self, id: &V) -> bool {
        self.adjacency.contains_key(id)
    }

    /// 顶点数量
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// 按枚举顺序遍历顶点标识
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    // ==================== 边操作 ====================

    /// 添加边
    ///
    /// 任一端点未注册时为空操作（构造路径见 [`Graph::from_specs`]）；
    /// 边已存在时幂等，计数器只为新边加一。无向图一次写入两个方向，
    /// 作为一条逻辑边计数
    pub fn add_edge(&mut self, from: &V, to: &V) {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return;
        }
        if self.has_edge(from, to) {
            return;
        }

        if let Some(succ) = self.adjacency.get_mut(from) {
            succ.insert(to.clone());
        }
        if self.mode.is_symmetric() && from != to {
            if let Some(succ) = self.adjacency.get_mut(to) {
                succ.insert(from.clone());
            }
        }
        self.edge_count += 1;
    }

    /// 删除边及其标签；边不存在时为空操作
    ///
    /// 无向图一次删除两个方向，计数器减一
    pub fn remove_edge(&mut self, from: &V, to: &V) {
        if !self.has_edge(from, to) {
            return;
        }

        if let Some(succ) = self.adjacency.get_mut(from) {
            succ.shift_remove(to);
        }
        self.edge_labels.shift_remove(&(from.clone(), to.clone()));

        if self.mode.is_symmetric() && from != to {
            if let Some(succ) = self.adjacency.get_mut(to) {
                succ.shift_remove(from);
            }
            self.edge_labels.shift_remove(&(to.clone(), from.clone()));
        }
        self.edge_count -= 1;
    }

    /// 边是否存在
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.adjacency
            .get(from)
            .map_or(false, |succ| succ.contains(to))
    }

    /// 逻辑边数量
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// 遍历所有有向顶点对
    ///
    /// 无向图的镜像边两个方向都会出现
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> {
        self.adjacency
            .iter()
            .flat_map(|(from, succ)| succ.iter().map(move |to| (from, to)))
    }

    /// 获取顶点的直接后继集合（副本）
    ///
    /// 返回值与内部状态无共享，修改它不影响图本身
    pub fn adjacent_to(&self, id: &V) -> Result<IndexSet<V>> {
        self.adjacency
            .get(id)
            .cloned()
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", id)))
    }

    /// 获取顶点的出度
    pub fn out_degree(&self, id: &V) -> Result<usize> {
        self.adjacency
            .get(id)
            .map(|succ| succ.len())
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", id)))
    }

    /// 获取顶点的入度
    pub fn in_degree(&self, id: &V) -> Result<usize> {
        if !self.has_vertex(id) {
            return Err(Error::VertexNotFound(format!("{:?}", id)));
        }
        Ok(self
            .adjacency
            .values()
            .filter(|succ| succ.contains(id))
            .count())
    }

    // ==================== 标签操作 ====================

    /// 设置顶点标签，覆盖已有标签
    pub fn label_vertex(&mut self, id: &V, label: impl Into<Label<V>>) -> Result<()> {
        if !self.has_vertex(id) {
            return Err(Error::VertexNotFound(format!("{:?}", id)));
        }
        self.vertex_labels.insert(id.clone(), label.into());
        Ok(())
    }

    /// 设置边标签，覆盖已有标签
    ///
    /// 无向图同时写入 (from,to) 与 (to,from) 两个槽位，保持二者一致
    pub fn label_edge(&mut self, from: &V, to: &V, label: impl Into<Label<V>>) -> Result<()> {
        if !self.has_edge(from, to) {
            return Err(Error::EdgeNotFound(format!("({:?}, {:?})", from, to)));
        }
        let label = label.into();
        if self.mode.is_symmetric() && from != to {
            self.edge_labels
                .insert((to.clone(), from.clone()), label.clone());
        }
        self.edge_labels.insert((from.clone(), to.clone()), label);
        Ok(())
    }

    /// 读取顶点标签
    ///
    /// 顶点不存在时报错；顶点存在但未设置标签时返回 `Ok(None)`
    pub fn vertex_label(&self, id: &V) -> Result<Option<&Label<V>>> {
        if !self.has_vertex(id) {
            return Err(Error::VertexNotFound(format!("{:?}", id)));
        }
        Ok(self.vertex_labels.get(id))
    }

    /// 读取边标签
    ///
    /// 边不存在时报错；边存在但未设置标签时返回 `Ok(None)`
    pub fn edge_label(&self, from: &V, to: &V) -> Result<Option<&Label<V>>> {
        if !self.has_edge(from, to) {
            return Err(Error::EdgeNotFound(format!("({:?}, {:?})", from, to)));
        }
        Ok(self.edge_labels.get(&(from.clone(), to.clone())))
    }

    /// 已设置标签的顶点数量
    pub fn vertex_label_count(&self) -> usize {
        self.vertex_labels.len()
    }

    /// 已设置标签的有向槽位数量
    ///
    /// 无向图的一条标注边占两个槽位（自环占一个）
    pub fn edge_label_count(&self) -> usize {
        self.edge_labels.len()
    }

    /// 清除全部顶点标签与边标签，图结构不变
    pub fn clear_labels(&mut self) {
        self.vertex_labels.clear();
        self.edge_labels.clear();
    }

    // ==================== 比较操作 ====================

    /// 是否为 `other` 的子图（忽略标签）
    ///
    /// 要求自身的每个顶点与每条边都存在于 `other` 中
    pub fn is_subgraph_of(&self, other: &Graph<V>) -> bool {
        self.adjacency.iter().all(|(from, succ)| {
            other.has_vertex(from) && succ.iter().all(|to| other.has_edge(from, to))
        })
    }

    /// 是否为 `other` 的子图，且自身的每个标签在 `other` 中等值存在
    pub fn is_subgraph_with_labels(&self, other: &Graph<V>) -> bool {
        self.is_subgraph_of(other)
            && self
                .vertex_labels
                .iter()
                .all(|(id, label)| other.vertex_labels.get(id) == Some(label))
            && self
                .edge_labels
                .iter()
                .all(|(pair, label)| other.edge_labels.get(pair) == Some(label))
    }

    /// 结构与标签完全一致（双向含标签子图 + 相同边模式）
    pub fn eq_with_labels(&self, other: &Graph<V>) -> bool {
        self.mode == other.mode
            && self.is_subgraph_with_labels(other)
            && other.is_subgraph_with_labels(self)
    }
}

/// 相等性：相同边模式且互为子图（忽略标签）
impl<V> PartialEq for Graph<V>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    fn eq(&self, other: &Self) -> bool {
        self.mode == other.mode && self.is_subgraph_of(other) && other.is_subgraph_of(self)
    }
}
