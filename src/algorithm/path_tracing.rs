//! 路径查找算法
//!
//! 深度优先搜索，带回溯和已访问集合；返回第一条找到的路径，不保证最短。
//! 使用显式栈代替递归，每个栈帧记录当前顶点和其关联边的遍历位置。

use crate::error::{Error, Result};
use crate::graph::{Edge, EdgeId, Graph, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// 路径结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    /// 路径上的顶点序列
    pub vertices: Vec<VertexId>,
    /// 顶点标签序列（访问顺序）
    pub labels: Vec<String>,
    /// 路径上的边序列
    pub edges: Vec<EdgeId>,
    /// 路径长度（边数）
    pub length: usize,
    /// 路径总权重；任一边标签不是数值时为 None
    pub total_weight: Option<f64>,
}

impl PathResult {
    /// 标签序列是否与给定值一致
    pub fn labels_eq(&self, expected: &[&str]) -> bool {
        self.labels.iter().map(String::as_str).eq(expected.iter().copied())
    }
}

/// DFS 栈帧
struct Frame<'g> {
    vertex: VertexId,
    /// 进入该顶点所经过的边
    via: Option<&'g Edge>,
    /// 关联边（边集合顺序）
    edges: Vec<&'g Edge>,
    /// 下一条待检查的边
    next: usize,
}

/// 路径查找器
pub struct PathFinder<'g> {
    graph: &'g Graph,
    step_limit: Option<usize>,
}

impl<'g> PathFinder<'g> {
    /// 创建路径查找器
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            step_limit: None,
        }
    }

    /// 限制最多扩展的顶点数，超过后放弃搜索
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }

    fn frame(&self, vertex: VertexId, via: Option<&'g Edge>) -> Frame<'g> {
        Frame {
            vertex,
            via,
            edges: self.graph.incident_edges_of(vertex),
            next: 0,
        }
    }

    /// DFS 查找路径
    pub fn find_path(&self, start: VertexId, end: VertexId) -> Option<PathResult> {
        if self.graph.vertex(start).is_none() || self.graph.vertex(end).is_none() {
            return None;
        }

        let mut visited = HashSet::new();
        visited.insert(start);
        let mut stack = vec![self.frame(start, None)];

        if start == end {
            return Some(self.build_result(&stack));
        }

        let mut steps = 0usize;
        while let Some(top) = stack.last_mut() {
            if top.next >= top.edges.len() {
                // 所有邻居都无路可走，回溯
                stack.pop();
                continue;
            }

            let current = top.vertex;
            let edge = top.edges[top.next];
            top.next += 1;

            let Some(next) = edge.opposite(current) else {
                continue;
            };
            if !visited.insert(next) {
                continue;
            }

            steps += 1;
            if self.step_limit.is_some_and(|limit| steps > limit) {
                debug!(steps, "path search stopped at step limit");
                return None;
            }

            stack.push(self.frame(next, Some(edge)));
            if next == end {
                return Some(self.build_result(&stack));
            }
        }

        None
    }

    /// 按标签查找路径
    pub fn find_path_by_label(&self, start: &str, end: &str) -> Result<Option<PathResult>> {
        let s = self
            .graph
            .vertex_id(start)
            .ok_or_else(|| Error::VertexNotFound(start.to_string()))?;
        let e = self
            .graph
            .vertex_id(end)
            .ok_or_else(|| Error::VertexNotFound(end.to_string()))?;
        Ok(self.find_path(s, e))
    }

    /// 判断两点是否连通
    pub fn is_reachable(&self, start: VertexId, end: VertexId) -> bool {
        self.find_path(start, end).is_some()
    }

    fn build_result(&self, stack: &[Frame<'g>]) -> PathResult {
        let vertices: Vec<VertexId> = stack.iter().map(|f| f.vertex).collect();
        let labels = vertices
            .iter()
            .filter_map(|&id| self.graph.vertex(id))
            .map(|v| v.label().to_string())
            .collect();
        let path_edges: Vec<&Edge> = stack.iter().filter_map(|f| f.via).collect();
        let total_weight = path_edges.iter().map(|e| e.weight()).sum::<Option<f64>>();

        PathResult {
            vertices,
            labels,
            edges: path_edges.iter().map(|e| e.id()).collect(),
            length: path_edges.len(),
            total_weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_graph() -> Graph {
        // A - B - C - D，外加孤立顶点 Z
        let mut graph = Graph::new();
        let a = graph.insert_vertex("A");
        let b = graph.insert_vertex("B");
        let c = graph.insert_vertex("C");
        let d = graph.insert_vertex("D");
        graph.insert_vertex("Z");

        graph.insert_edge(a, b, "2").unwrap();
        graph.insert_edge(b, c, "3").unwrap();
        graph.insert_edge(c, d, "1").unwrap();

        graph
    }

    #[test]
    fn test_find_path_chain() {
        let graph = create_test_graph();
        let finder = PathFinder::new(&graph);

        let path = finder.find_path_by_label("A", "D").unwrap().unwrap();
        assert!(path.labels_eq(&["A", "B", "C", "D"]));
        assert_eq!(path.length, 3);
        assert_eq!(path.edges.len(), 3);
        assert_eq!(path.total_weight, Some(6.0));
    }

    #[test]
    fn test_find_path_trivial() {
        let graph = create_test_graph();
        let finder = PathFinder::new(&graph);

        let path = finder.find_path_by_label("C", "C").unwrap().unwrap();
        assert!(path.labels_eq(&["C"]));
        assert_eq!(path.length, 0);
        assert_eq!(path.total_weight, Some(0.0));

        let path = finder.find_path_by_label("Z", "Z").unwrap().unwrap();
        assert!(path.labels_eq(&["Z"]));
    }

    #[test]
    fn test_find_path_disconnected() {
        let graph = create_test_graph();
        let finder = PathFinder::new(&graph);

        assert!(finder.find_path_by_label("A", "Z").unwrap().is_none());
        let a = graph.vertex_id("A").unwrap();
        let z = graph.vertex_id("Z").unwrap();
        assert!(!finder.is_reachable(a, z));
    }

    #[test]
    fn test_find_path_unknown_vertex() {
        let graph = create_test_graph();
        let finder = PathFinder::new(&graph);

        assert!(matches!(
            finder.find_path_by_label("A", "Q"),
            Err(Error::VertexNotFound(ref l)) if l == "Q"
        ));
    }

    #[test]
    fn test_find_path_first_found_not_shortest() {
        // A-B, B-C, C-D, A-D：按边顺序 DFS 先走 A-B-C-D
        let mut graph = create_test_graph();
        graph.insert_edge_by_label("A", "D", "100").unwrap();

        let path = graph.find_path("A", "D").unwrap().unwrap();
        assert!(path.labels_eq(&["A", "B", "C", "D"]));
    }

    #[test]
    fn test_find_path_backtracks() {
        // A-B 是死路，A-C-D 可达
        let mut graph = Graph::new();
        let a = graph.insert_vertex("A");
        let b = graph.insert_vertex("B");
        let c = graph.insert_vertex("C");
        let d = graph.insert_vertex("D");
        let e = graph.insert_vertex("E");
        graph.insert_edge(a, b, "1").unwrap();
        graph.insert_edge(b, e, "1").unwrap();
        graph.insert_edge(a, c, "1").unwrap();
        graph.insert_edge(c, d, "x").unwrap();

        let path = PathFinder::new(&graph).find_path(a, d).unwrap();
        assert!(path.labels_eq(&["A", "C", "D"]));
        assert_eq!(path.total_weight, None);
    }

    #[test]
    fn test_find_path_with_cycle_terminates() {
        let mut graph = Graph::new();
        let a = graph.insert_vertex("A");
        let b = graph.insert_vertex("B");
        let c = graph.insert_vertex("C");
        let z = graph.insert_vertex("Z");
        graph.insert_edge(a, b, "1").unwrap();
        graph.insert_edge(b, c, "1").unwrap();
        graph.insert_edge(c, a, "1").unwrap();
        graph.insert_edge(a, a, "0").unwrap();

        assert!(PathFinder::new(&graph).find_path(a, z).is_none());
    }

    #[test]
    fn test_step_limit() {
        let graph = create_test_graph();
        let a = graph.vertex_id("A").unwrap();
        let d = graph.vertex_id("D").unwrap();

        assert!(PathFinder::new(&graph).with_step_limit(2).find_path(a, d).is_none());
        assert!(PathFinder::new(&graph).with_step_limit(3).find_path(a, d).is_some());
    }
}
