//! 图索引
//!
//! 标签到顶点 ID 的内存索引

use crate::graph::vertex::VertexId;
use std::collections::HashMap;

/// 顶点标签索引
///
/// 同一标签可能对应多个顶点（加载时不做唯一性检查），按插入顺序保存，
/// 查找时返回最早插入的那个。
#[derive(Debug, Default, Clone)]
pub struct VertexIndex {
    /// 标签到顶点 ID 列表的映射
    label_to_ids: HashMap<String, Vec<VertexId>>,
}

impl VertexIndex {
    /// 创建新索引
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加标签索引
    pub fn add(&mut self, label: &str, vertex_id: VertexId) {
        self.label_to_ids
            .entry(label.to_string())
            .or_default()
            .push(vertex_id);
    }

    /// 通过标签查找顶点（先插入者优先）
    pub fn get(&self, label: &str) -> Option<VertexId> {
        self.label_to_ids
            .get(label)
            .and_then(|ids| ids.first())
            .copied()
    }

    /// 标签是否存在
    pub fn contains(&self, label: &str) -> bool {
        self.label_to_ids.contains_key(label)
    }

    /// 同一标签下的顶点数量
    pub fn count(&self, label: &str) -> usize {
        self.label_to_ids.get(label).map_or(0, Vec::len)
    }

    /// 移除顶点
    pub fn remove(&mut self, label: &str, vertex_id: VertexId) {
        if let Some(ids) = self.label_to_ids.get_mut(label) {
            ids.retain(|&id| id != vertex_id);
            if ids.is_empty() {
                self.label_to_ids.remove(label);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_inserted_wins() {
        let mut index = VertexIndex::new();
        index.add("A", VertexId::new(1));
        index.add("A", VertexId::new(2));

        assert_eq!(index.get("A"), Some(VertexId::new(1)));
        assert_eq!(index.count("A"), 2);

        index.remove("A", VertexId::new(1));
        assert_eq!(index.get("A"), Some(VertexId::new(2)));

        index.remove("A", VertexId::new(2));
        assert!(!index.contains("A"));
        assert_eq!(index.get("A"), None);
    }
}
