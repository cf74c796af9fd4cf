//! 图算法模块
//!
//! 包含深度优先路径查找

mod path_tracing;

pub use path_tracing::{PathFinder, PathResult};
