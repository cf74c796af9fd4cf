//! LabelGraph - 标签无向图
//!
//! 从分隔文本文件加载的无向图（例如城市与距离），支持：
//! - 查询顶点的关联边
//! - 深度优先查找两点之间的一条路径
//! - 插入边（重复边检测）
//! - 删除顶点并级联删除关联边

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;

// 重导出常用类型
pub use algorithm::{PathFinder, PathResult};
pub use error::{Error, Result};
pub use graph::{Edge, EdgeId, Graph, IncidentEdge, Vertex, VertexId};
pub use import::{GraphLoader, ImportStats, LoaderOptions};
