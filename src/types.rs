//! 标签值类型定义
//!
//! 顶点和边可以附加任意标签值，标签与图结构相互独立

use serde::{Deserialize, Serialize};

/// 标签值
///
/// `V` 是图的顶点标识类型，仅 `Path` 变体（最短路径结果）会引用它
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Label<V> {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// 最短路径结果标签（距离 + 前驱顶点）
    Path(PathInfo<V>),
}

impl<V> Label<V> {
    pub fn type_name(&self) -> &'static str {
        match self {
            Label::Bool(_) => "bool",
            Label::Int(_) => "int",
            Label::Float(_) => "float",
            Label::Text(_) => "text",
            Label::Path(_) => "path",
        }
    }

    /// 作为边权重读取（仅数值标签有效）
    pub fn as_weight(&self) -> Option<f64> {
        match self {
            Label::Int(v) => Some(*v as f64),
            Label::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Label::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Label::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_path(&self) -> Option<&PathInfo<V>> {
        match self {
            Label::Path(v) => Some(v),
            _ => None,
        }
    }
}

impl<V> From<bool> for Label<V> {
    fn from(v: bool) -> Self {
        Label::Bool(v)
    }
}

impl<V> From<i64> for Label<V> {
    fn from(v: i64) -> Self {
        Label::Int(v)
    }
}

impl<V> From<f64> for Label<V> {
    fn from(v: f64) -> Self {
        Label::Float(v)
    }
}

impl<V> From<String> for Label<V> {
    fn from(v: String) -> Self {
        Label::Text(v)
    }
}

impl<V> From<&str> for Label<V> {
    fn from(v: &str) -> Self {
        Label::Text(v.to_string())
    }
}

impl<V> From<PathInfo<V>> for Label<V> {
    fn from(v: PathInfo<V>) -> Self {
        Label::Path(v)
    }
}

/// 最短路径顶点标签
///
/// `distance` 为从源点出发的最短距离，不可达时为 `f64::INFINITY`；
/// `predecessor` 为最短路径上的前驱顶点，源点和不可达顶点为 `None`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathInfo<V> {
    pub distance: f64,
    pub predecessor: Option<V>,
}

impl<V> PathInfo<V> {
    pub fn new(distance: f64, predecessor: Option<V>) -> Self {
        Self {
            distance,
            predecessor,
        }
    }

    /// 源点标签（距离 0，无前驱）
    pub fn source() -> Self {
        Self::new(0.0, None)
    }

    /// 不可达顶点标签（距离无穷大，无前驱）
    pub fn unreachable() -> Self {
        Self::new(f64::INFINITY, None)
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_as_weight() {
        let l: Label<u32> = Label::Int(10);
        assert_eq!(l.as_weight(), Some(10.0));

        let l: Label<u32> = Label::Float(2.5);
        assert_eq!(l.as_weight(), Some(2.5));

        let l: Label<u32> = Label::Text("not a number".to_string());
        assert_eq!(l.as_weight(), None);
    }

    #[test]
    fn test_label_conversions() {
        assert_eq!(Label::<u32>::from(7i64), Label::Int(7));
        assert_eq!(Label::<u32>::from("tag"), Label::Text("tag".to_string()));
        assert_eq!(Label::<u32>::from(true), Label::Bool(true));
        assert_eq!(Label::<u32>::from(1.5f64).type_name(), "float");
    }

    #[test]
    fn test_path_info_sentinels() {
        let src: PathInfo<u32> = PathInfo::source();
        assert_eq!(src.distance, 0.0);
        assert!(src.predecessor.is_none());
        assert!(src.is_reachable());

        let far: PathInfo<u32> = PathInfo::unreachable();
        assert!(far.distance.is_infinite());
        assert!(!far.is_reachable());
        // 哨兵值相等性（不可达标签彼此相等）
        assert_eq!(far, PathInfo::unreachable());
    }
}
