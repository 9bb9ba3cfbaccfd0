//! 最短路径算法
//!
//! 单源 Dijkstra：计算源点到每个顶点的最短距离，结果以
//! `Label::Path` 顶点标签写入输入图的内部克隆，输入图保持不变

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::{Label, PathInfo};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;
use std::hash::Hash;
use tracing::debug;

/// 堆中的候选项
///
/// 距离按反向比较构成最小堆，距离相同时按顶点枚举序取小
#[derive(Debug, Clone, Copy, PartialEq)]
struct State {
    distance: f64,
    index: usize,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 单源最短路径（Dijkstra）
///
/// 松弛时要求途经的边带有数值标签，缺失即报 `LabelMissing`；
/// 权重须非负，这一前置条件由调用方保证，算法本身不校验
pub struct Dijkstra<'a, V> {
    graph: &'a Graph<V>,
}

impl<'a, V> Dijkstra<'a, V>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    /// 创建算法实例
    pub fn new(graph: &'a Graph<V>) -> Self {
        Self { graph }
    }

    /// 计算从 `start` 出发的单源最短路径
    ///
    /// 返回输入图的克隆，结构与输入相等，每个顶点带
    /// `Label::Path(PathInfo { distance, predecessor })` 标签：
    /// 源点距离 0 无前驱，不可达顶点距离为无穷大且无前驱。
    /// 输入图及其标签完全不受影响。O((V+E) log V)
    pub fn shortest_paths(&self, start: &V) -> Result<Graph<V>> {
        let order: Vec<&V> = self.graph.vertices().collect();
        let index_of: HashMap<&V, usize> =
            order.iter().enumerate().map(|(i, v)| (*v, i)).collect();

        let start_index = match index_of.get(start) {
            Some(i) => *i,
            None => return Err(Error::VertexNotFound(format!("{:?}", start))),
        };

        let mut dist = vec![f64::INFINITY; order.len()];
        let mut prev: Vec<Option<usize>> = vec![None; order.len()];
        let mut settled = vec![false; order.len()];

        dist[start_index] = 0.0;
        let mut frontier = BinaryHeap::new();
        frontier.push(State {
            distance: 0.0,
            index: start_index,
        });

        while let Some(State { distance, index }) = frontier.pop() {
            // 延迟删除：同一顶点的过期候选项直接丢弃
            if settled[index] {
                continue;
            }
            settled[index] = true;

            let from = order[index];
            for to in self.graph.adjacent_to(from)? {
                let to_index = match index_of.get(&to) {
                    Some(i) => *i,
                    None => continue,
                };
                // 已定案的顶点不再松弛
                if settled[to_index] {
                    continue;
                }

                let weight = self
                    .graph
                    .edge_label(from, &to)?
                    .and_then(Label::as_weight)
                    .ok_or_else(|| Error::LabelMissing(format!("({:?}, {:?})", from, to)))?;

                let candidate = distance + weight;
                if candidate < dist[to_index] {
                    dist[to_index] = candidate;
                    prev[to_index] = Some(index);
                    frontier.push(State {
                        distance: candidate,
                        index: to_index,
                    });
                }
            }
        }

        let reached = dist.iter().filter(|d| d.is_finite()).count();
        debug!(start = ?start, reached, total = order.len(), "最短路径计算完成");

        let mut result = self.graph.clone();
        for (i, &v) in order.iter().enumerate() {
            let info = PathInfo::new(dist[i], prev[i].map(|p| (*order[p]).clone()));
            result.label_vertex(v, Label::Path(info))?;
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EdgeMode, VertexSpec};

    fn path_of(g: &Graph<u32>, v: u32) -> PathInfo<u32> {
        g.vertex_label(&v)
            .unwrap()
            .and_then(Label::as_path)
            .unwrap()
            .clone()
    }

    #[test]
    fn test_single_vertex() {
        let mut g = Graph::directed();
        g.add_vertex(1);

        let result = Dijkstra::new(&g).shortest_paths(&1).unwrap();

        assert_eq!(result, g);
        assert_eq!(path_of(&result, 1), PathInfo::source());
    }

    #[test]
    fn test_directed_three_vertices() {
        let mut g = Graph::from_specs(
            EdgeMode::Directed,
            vec![
                VertexSpec::new(1, vec![2, 3]),
                VertexSpec::new(2, vec![3]),
                VertexSpec::new(3, vec![]),
            ],
        );
        g.label_edge(&1, &2, 10i64).unwrap();
        g.label_edge(&1, &3, 5i64).unwrap();
        g.label_edge(&2, &3, 2i64).unwrap();

        let result = Dijkstra::new(&g).shortest_paths(&1).unwrap();

        // 与预期标注图完全一致
        let mut expected = g.clone();
        expected.label_vertex(&1, Label::Path(PathInfo::source())).unwrap();
        expected
            .label_vertex(&2, Label::Path(PathInfo::new(10.0, Some(1))))
            .unwrap();
        expected
            .label_vertex(&3, Label::Path(PathInfo::new(5.0, Some(1))))
            .unwrap();

        assert_eq!(result, g);
        assert!(expected.eq_with_labels(&result));
    }

    #[test]
    fn test_undirected_classic() {
        // 六顶点经典样例（维基百科示意图）
        let mut g = Graph::from_specs(
            EdgeMode::Undirected,
            vec![
                VertexSpec::new(1, vec![2, 3, 6]),
                VertexSpec::new(2, vec![3, 4]),
                VertexSpec::new(3, vec![4, 6]),
                VertexSpec::new(4, vec![5]),
                VertexSpec::new(5, vec![6]),
                VertexSpec::new(6, vec![]),
            ],
        );
        for (from, to, w) in [
            (1, 2, 7),
            (1, 3, 9),
            (1, 6, 14),
            (2, 3, 10),
            (2, 4, 15),
            (3, 4, 11),
            (3, 6, 2),
            (4, 5, 6),
            (5, 6, 9),
        ] {
            g.label_edge(&from, &to, w as i64).unwrap();
        }

        let result = Dijkstra::new(&g).shortest_paths(&1).unwrap();
        assert_eq!(result, g);

        for (v, distance, predecessor) in [
            (1, 0.0, None),
            (2, 7.0, Some(1)),
            (3, 9.0, Some(1)),
            (4, 20.0, Some(3)),
            (5, 20.0, Some(6)),
            (6, 11.0, Some(3)),
        ] {
            assert_eq!(
                path_of(&result, v),
                PathInfo::new(distance, predecessor),
                "顶点 {} 的标签不符",
                v
            );
        }
    }

    #[test]
    fn test_unreachable_vertices_keep_sentinel() {
        // 3 -> 4 虽未标注，但从 1 出发的松弛不会触及它
        let mut g = Graph::from_specs(
            EdgeMode::Directed,
            vec![
                VertexSpec::new(1, vec![2]),
                VertexSpec::new(3, vec![4]),
            ],
        );
        g.label_edge(&1, &2, 1i64).unwrap();

        let result = Dijkstra::new(&g).shortest_paths(&1).unwrap();

        assert_eq!(path_of(&result, 2), PathInfo::new(1.0, Some(1)));
        assert_eq!(path_of(&result, 3), PathInfo::unreachable());
        assert_eq!(path_of(&result, 4), PathInfo::unreachable());
    }

    #[test]
    fn test_label_missing() {
        let g = Graph::from_specs(
            EdgeMode::Directed,
            vec![VertexSpec::new(1, vec![2])],
        );

        assert!(matches!(
            Dijkstra::new(&g).shortest_paths(&1),
            Err(Error::LabelMissing(_))
        ));
    }

    #[test]
    fn test_non_numeric_label_rejected() {
        let mut g = Graph::from_specs(
            EdgeMode::Directed,
            vec![VertexSpec::new(1, vec![2])],
        );
        g.label_edge(&1, &2, "not a weight").unwrap();

        assert!(matches!(
            Dijkstra::new(&g).shortest_paths(&1),
            Err(Error::LabelMissing(_))
        ));
    }

    #[test]
    fn test_start_vertex_must_exist() {
        let g: Graph<u32> = Graph::directed();
        assert!(matches!(
            Dijkstra::new(&g).shortest_paths(&1),
            Err(Error::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_input_graph_untouched() {
        let mut g = Graph::from_specs(
            EdgeMode::Directed,
            vec![VertexSpec::new(1, vec![2]), VertexSpec::new(2, vec![])],
        );
        g.label_edge(&1, &2, 3i64).unwrap();
        g.label_vertex(&2, "keep me").unwrap();
        let snapshot = g.clone();

        let result = Dijkstra::new(&g).shortest_paths(&1).unwrap();

        assert!(g.eq_with_labels(&snapshot));
        // 结果图的顶点标签被覆盖为路径标签，边标签保留
        assert_eq!(
            result.edge_label(&1, &2).unwrap(),
            Some(&Label::Int(3))
        );
        assert_eq!(path_of(&result, 2), PathInfo::new(3.0, Some(1)));
    }

    #[test]
    fn test_longer_path_can_win() {
        // 直连 1 -> 4 权重 10，绕行 1 -> 2 -> 3 -> 4 合计 6
        let mut g = Graph::from_specs(
            EdgeMode::Directed,
            vec![
                VertexSpec::new(1, vec![2, 4]),
                VertexSpec::new(2, vec![3]),
                VertexSpec::new(3, vec![4]),
                VertexSpec::new(4, vec![]),
            ],
        );
        g.label_edge(&1, &2, 2i64).unwrap();
        g.label_edge(&1, &4, 10i64).unwrap();
        g.label_edge(&2, &3, 2i64).unwrap();
        g.label_edge(&3, &4, 2i64).unwrap();

        let result = Dijkstra::new(&g).shortest_paths(&1).unwrap();
        assert_eq!(path_of(&result, 4), PathInfo::new(6.0, Some(3)));
    }
}
