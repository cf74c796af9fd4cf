//! 图数据结构
//!
//! 图独占所有顶点和边，二者都按插入顺序保存在以 ID 为键的 arena 中。
//! 边只通过 ID 引用端点，删除顶点时级联删除其关联边，不会留下悬空引用。

use super::edge::{Edge, EdgeId};
use super::index::VertexIndex;
use super::vertex::{Vertex, VertexId};
use crate::algorithm::{PathFinder, PathResult};
use crate::error::{Error, Result};
use crate::import::GraphLoader;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// 关联边查询结果：对端顶点标签和边标签
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentEdge {
    /// 边 ID
    pub edge: EdgeId,
    /// 对端顶点标签
    pub other: String,
    /// 边标签
    pub label: String,
}

/// 无向标签图
#[derive(Debug, Clone)]
pub struct Graph {
    /// 顶点（插入顺序）
    vertices: IndexMap<VertexId, Vertex>,
    /// 边（插入顺序，决定输出顺序和 DFS 访问顺序）
    edges: IndexMap<EdgeId, Edge>,
    /// 标签索引
    vertex_index: VertexIndex,
    /// 下一个顶点 ID
    next_vertex_id: u64,
    /// 下一个边 ID
    next_edge_id: u64,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            vertices: IndexMap::new(),
            edges: IndexMap::new(),
            vertex_index: VertexIndex::new(),
            next_vertex_id: 1,
            next_edge_id: 1,
        }
    }

    /// 从文件加载图
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let (graph, _) = GraphLoader::default().load_file(path)?;
        Ok(graph)
    }

    /// 从文件加载图；文件不可读时返回空图并附带错误，由调用方决定如何报告
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> (Self, Option<Error>) {
        match Self::from_file(path) {
            Ok(graph) => (graph, None),
            Err(e) => {
                warn!(error = %e, "load failed, continuing with an empty graph");
                (Self::new(), Some(e))
            }
        }
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点（不检查标签唯一性）
    pub fn insert_vertex(&mut self, label: impl Into<String>) -> VertexId {
        let id = VertexId::new(self.next_vertex_id);
        self.next_vertex_id += 1;

        let vertex = Vertex::new(id, label);
        self.vertex_index.add(vertex.label(), id);
        debug!(vertex = %vertex.label(), %id, "vertex inserted");
        self.vertices.insert(id, vertex);

        id
    }

    /// 通过标签获取顶点（同名时先插入者优先）
    pub fn get_vertex(&self, label: &str) -> Option<&Vertex> {
        self.vertex_id(label).and_then(|id| self.vertices.get(&id))
    }

    /// 通过标签获取顶点 ID
    pub fn vertex_id(&self, label: &str) -> Option<VertexId> {
        self.vertex_index.get(label)
    }

    /// 通过 ID 获取顶点
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// 标签是否存在
    pub fn has_vertex(&self, label: &str) -> bool {
        self.vertex_index.contains(label)
    }

    /// 所有顶点（插入顺序）
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.values()
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 删除顶点，先级联删除所有关联边
    pub fn erase_vertex(&mut self, id: VertexId) -> Result<Vertex> {
        if !self.vertices.contains_key(&id) {
            return Err(Error::VertexNotFound(id.to_string()));
        }

        let incident: Vec<EdgeId> = self
            .edges
            .values()
            .filter(|e| e.touches(id))
            .map(Edge::id)
            .collect();
        for edge_id in incident {
            self.erase_edge(edge_id)?;
        }

        let vertex = self
            .vertices
            .shift_remove(&id)
            .ok_or_else(|| Error::VertexNotFound(id.to_string()))?;
        self.vertex_index.remove(vertex.label(), id);
        debug!(vertex = %vertex.label(), %id, "vertex erased");

        Ok(vertex)
    }

    /// 按标签删除顶点
    pub fn erase_vertex_by_label(&mut self, label: &str) -> Result<Vertex> {
        let id = self
            .vertex_id(label)
            .ok_or_else(|| Error::VertexNotFound(label.to_string()))?;
        self.erase_vertex(id)
    }

    // ==================== 边操作 ====================

    /// 添加边
    ///
    /// 底层插入原语：只校验两个端点存在，不做重复边检查。
    pub fn insert_edge(
        &mut self,
        vertex1: VertexId,
        vertex2: VertexId,
        label: impl Into<String>,
    ) -> Result<EdgeId> {
        if !self.vertices.contains_key(&vertex1) {
            return Err(Error::VertexNotFound(vertex1.to_string()));
        }
        if !self.vertices.contains_key(&vertex2) {
            return Err(Error::VertexNotFound(vertex2.to_string()));
        }

        let id = EdgeId::new(self.next_edge_id);
        self.next_edge_id += 1;

        let edge = Edge::new(id, vertex1, vertex2, label);
        debug!(%id, %vertex1, %vertex2, label = %edge.label(), "edge inserted");
        self.edges.insert(id, edge);

        Ok(id)
    }

    /// 按端点标签添加边（两次独立查找，不做重复边检查）
    pub fn insert_edge_by_label(
        &mut self,
        label1: &str,
        label2: &str,
        label: impl Into<String>,
    ) -> Result<EdgeId> {
        let v1 = self
            .vertex_id(label1)
            .ok_or_else(|| Error::VertexNotFound(label1.to_string()))?;
        let v2 = self
            .vertex_id(label2)
            .ok_or_else(|| Error::VertexNotFound(label2.to_string()))?;
        self.insert_edge(v1, v2, label)
    }

    /// 交互式插入入口：端点必须存在，且同一无序顶点对上不能已有边
    pub fn insert_edge_checked(
        &mut self,
        label1: &str,
        label2: &str,
        label: impl Into<String>,
    ) -> Result<EdgeId> {
        for l in [label1, label2] {
            if !self.has_vertex(l) {
                return Err(Error::VertexNotFound(l.to_string()));
            }
        }
        if self.is_edge_exists(label1, label2) {
            return Err(Error::EdgeAlreadyExists(
                label1.to_string(),
                label2.to_string(),
            ));
        }
        self.insert_edge_by_label(label1, label2, label)
    }

    /// 两个标签之间是否已有边（无向）；任一标签不存在时返回 false
    pub fn is_edge_exists(&self, label1: &str, label2: &str) -> bool {
        match (self.vertex_id(label1), self.vertex_id(label2)) {
            (Some(v1), Some(v2)) => self.edge_between(v1, v2).is_some(),
            _ => false,
        }
    }

    /// 获取连接两个顶点的第一条边
    pub fn edge_between(&self, a: VertexId, b: VertexId) -> Option<&Edge> {
        self.edges.values().find(|e| e.connects(a, b))
    }

    /// 获取边
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// 获取可变边（用于修改标签）
    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        self.edges.get_mut(&id)
    }

    /// 所有边（插入顺序）
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.values()
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 删除边（按 ID，只删除这一条）
    pub fn erase_edge(&mut self, id: EdgeId) -> Result<Edge> {
        let edge = self
            .edges
            .shift_remove(&id)
            .ok_or_else(|| Error::EdgeNotFound(id.to_string()))?;
        debug!(%id, label = %edge.label(), "edge erased");
        Ok(edge)
    }

    // ==================== 邻居查询 ====================

    /// 按边集合顺序返回关联到顶点的所有边
    pub fn incident_edges_of(&self, id: VertexId) -> Vec<&Edge> {
        self.edges.values().filter(|e| e.touches(id)).collect()
    }

    /// 按标签返回关联边；标签不存在时为空
    pub fn incident_edges(&self, label: &str) -> Vec<&Edge> {
        self.vertex_id(label)
            .map(|id| self.incident_edges_of(id))
            .unwrap_or_default()
    }

    /// 列出关联边的（对端标签，边标签）
    pub fn list_incident_edges(&self, label: &str) -> Result<Vec<IncidentEdge>> {
        let id = self
            .vertex_id(label)
            .ok_or_else(|| Error::VertexNotFound(label.to_string()))?;

        Ok(self
            .incident_edges_of(id)
            .into_iter()
            .filter_map(|e| {
                let other = e.opposite(id)?;
                Some(IncidentEdge {
                    edge: e.id(),
                    other: self.vertex(other)?.label().to_string(),
                    label: e.label().to_string(),
                })
            })
            .collect())
    }

    /// 获取邻居顶点（按边顺序，可能重复）
    pub fn neighbors(&self, id: VertexId) -> Vec<VertexId> {
        self.edges
            .values()
            .filter_map(|e| e.opposite(id))
            .collect()
    }

    /// 获取顶点的度
    pub fn degree(&self, id: VertexId) -> usize {
        self.edges.values().filter(|e| e.touches(id)).count()
    }

    /// 图是否为空
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // ==================== 路径查询 ====================

    /// 按标签查找一条路径（深度优先，首条即返回，不保证最短）
    pub fn find_path(&self, start: &str, end: &str) -> Result<Option<PathResult>> {
        PathFinder::new(self).find_path_by_label(start, end)
    }
}
