//! 顶点定义
//!
//! 顶点只携带一个字符串标签（例如城市名），身份由图分配的 [`VertexId`] 决定

use super::edge::Edge;
use super::graph::Graph;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点 ID（图内唯一，删除后不复用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub u64);

impl VertexId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// 顶点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    /// 顶点 ID
    id: VertexId,
    /// 顶点标签
    label: String,
}

impl Vertex {
    /// 创建新顶点
    pub fn new(id: VertexId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }

    /// 获取顶点 ID
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 获取顶点标签
    pub fn label(&self) -> &str {
        &self.label
    }

    /// 标签是否等于给定值
    pub fn has_label(&self, label: &str) -> bool {
        self.label == label
    }

    /// 按边集合顺序返回关联到本顶点的所有边
    pub fn incident_edges<'g>(&self, graph: &'g Graph) -> Vec<&'g Edge> {
        graph.incident_edges_of(self.id)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_basic() {
        let v = Vertex::new(VertexId::new(1), "Boston");

        assert_eq!(v.id().as_u64(), 1);
        assert_eq!(v.label(), "Boston");
        assert!(v.has_label("Boston"));
        assert!(!v.has_label("boston"));
        assert_eq!(v.to_string(), "Boston");
    }

    #[test]
    fn test_vertex_incident_edges_follow_edge_order() {
        let mut graph = Graph::new();
        let a = graph.insert_vertex("A");
        let b = graph.insert_vertex("B");
        let c = graph.insert_vertex("C");
        graph.insert_edge(b, c, "3").unwrap();
        graph.insert_edge(a, b, "2").unwrap();
        graph.insert_edge(a, c, "7").unwrap();

        let vertex = graph.vertex(b).unwrap();
        let labels: Vec<&str> = vertex
            .incident_edges(&graph)
            .iter()
            .map(|e| e.label())
            .collect();
        assert_eq!(labels, vec!["3", "2"]);
    }
}
