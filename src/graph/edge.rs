//! 边定义
//!
//! 无向边：两个端点加一个文本标签（通常是距离）

use crate::graph::vertex::VertexId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 边 ID（图内唯一，删除后不复用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub u64);

impl EdgeId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// 边
///
/// 相等性按无序端点对加标签判断，标签本身不是身份；删除始终按 [`EdgeId`] 进行。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// 边 ID
    id: EdgeId,
    /// 第一个端点
    vertex1: VertexId,
    /// 第二个端点
    vertex2: VertexId,
    /// 边标签
    label: String,
}

impl Edge {
    /// 创建新边
    pub fn new(id: EdgeId, vertex1: VertexId, vertex2: VertexId, label: impl Into<String>) -> Self {
        Self {
            id,
            vertex1,
            vertex2,
            label: label.into(),
        }
    }

    /// 获取边 ID
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// 获取边标签
    pub fn label(&self) -> &str {
        &self.label
    }

    /// 修改边标签
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn vertex1(&self) -> VertexId {
        self.vertex1
    }

    pub fn vertex2(&self) -> VertexId {
        self.vertex2
    }

    /// 顶点是否为本边的端点（邻接与关联在无向图中是同一判断）
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.vertex1 == vertex || self.vertex2 == vertex
    }

    /// 是否连接给定的无序顶点对
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.vertex1 == a && self.vertex2 == b) || (self.vertex1 == b && self.vertex2 == a)
    }

    /// 返回另一端点；顶点不是本边端点时返回 None
    pub fn opposite(&self, vertex: VertexId) -> Option<VertexId> {
        if vertex == self.vertex1 {
            Some(self.vertex2)
        } else if vertex == self.vertex2 {
            Some(self.vertex1)
        } else {
            None
        }
    }

    /// 标签解析为数值权重（非数值标签返回 None）
    pub fn weight(&self) -> Option<f64> {
        self.label.trim().parse::<f64>().ok()
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        other.connects(self.vertex1, self.vertex2) && self.label == other.label
    }
}

impl Eq for Edge {}
