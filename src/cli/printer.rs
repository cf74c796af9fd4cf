//! 结果打印器
//!
//! 提供表格、纯文本和 JSON 三种输出格式

use crate::algorithm::PathResult;
use crate::graph::{Graph, IncidentEdge};
use clap::ValueEnum;
use prettytable::{format, row, Cell, Row, Table};
use serde_json::json;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// 表格模式
    #[default]
    Table,
    /// 纯文本模式
    Text,
    /// JSON 模式
    Json,
}

/// 结果打印器
#[derive(Debug, Default)]
pub struct Printer {
    format: OutputFormat,
}

impl Printer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// 打印关联边
    pub fn incident_edges(&self, vertex: &str, edges: &[IncidentEdge]) -> String {
        match self.format {
            OutputFormat::Json => pretty_json(&json!({
                "vertex": vertex,
                "edges": edges,
            })),
            OutputFormat::Text => {
                let mut output = format!("顶点 {} 的关联边:\n", vertex);
                for e in edges {
                    output.push_str(&format!("{} to {} is {}\n", vertex, e.other, e.label));
                }
                output
            }
            OutputFormat::Table => {
                if edges.is_empty() {
                    return format!("顶点 {} 没有关联边\n", vertex);
                }
                let mut table = Table::new();
                table.set_format(*format::consts::FORMAT_BOX_CHARS);
                table.set_titles(row!["From", "To", "Label"]);
                for e in edges {
                    table.add_row(Row::new(vec![
                        Cell::new(vertex),
                        Cell::new(&e.other),
                        Cell::new(&e.label),
                    ]));
                }
                format!("{}{} edge(s)\n", table, edges.len())
            }
        }
    }

    /// 打印路径
    pub fn path(&self, start: &str, end: &str, path: &PathResult) -> String {
        match self.format {
            OutputFormat::Json => pretty_json(&json!({
                "start": start,
                "end": end,
                "path": path.labels,
                "length": path.length,
                "total_weight": path.total_weight,
            })),
            OutputFormat::Text | OutputFormat::Table => {
                let mut output = format!("{} 到 {} 的路径:\n{}\n", start, end, path.labels.join(" to "));
                if let Some(total) = path.total_weight {
                    output.push_str(&format!("总权重: {}\n", total));
                }
                output
            }
        }
    }

    /// 无路径提示
    pub fn no_path(&self, start: &str, end: &str) -> String {
        match self.format {
            OutputFormat::Json => pretty_json(&json!({
                "start": start,
                "end": end,
                "path": null,
            })),
            _ => format!("未找到从 {} 到 {} 的路径\n", start, end),
        }
    }

    /// 打印所有顶点
    pub fn vertices(&self, graph: &Graph) -> String {
        match self.format {
            OutputFormat::Json => {
                let labels: Vec<&str> = graph.vertices().map(|v| v.label()).collect();
                pretty_json(&json!({ "vertices": labels }))
            }
            OutputFormat::Text => graph
                .vertices()
                .map(|v| format!("{}\n", v.label()))
                .collect(),
            OutputFormat::Table => {
                let mut table = Table::new();
                table.set_format(*format::consts::FORMAT_BOX_CHARS);
                table.set_titles(row!["Vertex", "Degree"]);
                for v in graph.vertices() {
                    table.add_row(row![v.label(), graph.degree(v.id()).to_string()]);
                }
                table.to_string()
            }
        }
    }

    /// 打印统计信息
    pub fn stats(&self, vertex_count: usize, edge_count: usize) -> String {
        match self.format {
            OutputFormat::Json => pretty_json(&json!({
                "vertex_count": vertex_count,
                "edge_count": edge_count,
            })),
            OutputFormat::Text => format!("顶点数: {}\n边数: {}\n", vertex_count, edge_count),
            OutputFormat::Table => {
                let mut table = Table::new();
                table.set_format(*format::consts::FORMAT_BOX_CHARS);
                table.set_titles(row!["Property", "Value"]);
                table.add_row(row!["Vertex Count", vertex_count.to_string()]);
                table.add_row(row!["Edge Count", edge_count.to_string()]);
                table.to_string()
            }
        }
    }

    /// 打印帮助信息
    pub fn help() -> String {
        r#"
═══════════════════════════════════════════════════════════════
                   LabelGraph CLI 命令帮助
═══════════════════════════════════════════════════════════════

  1, incident <顶点>             列出顶点的关联边
  2, path <起点> <终点>          查找一条路径（深度优先，非最短）
  3, insert <顶点1> <顶点2> <边> 插入边（已有边时拒绝）
  4, erase <顶点>                删除顶点及其关联边
  5, quit, exit, q               退出程序

  vertices, ls                   列出所有顶点
  stats, info                    显示图统计信息
  help, h, ?                     显示帮助

  只输入数字 1-4 时会逐项提示输入参数

═══════════════════════════════════════════════════════════════
"#
        .to_string()
    }
}

fn pretty_json(value: &serde_json::Value) -> String {
    let mut s = serde_json::to_string_pretty(value).unwrap_or_default();
    s.push('\n');
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn incident() -> Vec<IncidentEdge> {
        let mut graph = Graph::new();
        let a = graph.insert_vertex("A");
        let b = graph.insert_vertex("B");
        let c = graph.insert_vertex("C");
        graph.insert_edge(a, b, "2").unwrap();
        graph.insert_edge(b, c, "3").unwrap();
        graph.list_incident_edges("B").unwrap()
    }

    #[test]
    fn test_incident_text() {
        let printer = Printer::new(OutputFormat::Text);
        let output = printer.incident_edges("B", &incident());

        assert!(output.contains("B to A is 2\nB to C is 3\n"));
    }

    #[test]
    fn test_incident_table() {
        let printer = Printer::default();
        let output = printer.incident_edges("B", &incident());

        assert!(output.contains("Label"));
        assert!(output.contains("2 edge(s)"));
        assert!(printer.incident_edges("Z", &[]).contains("没有关联边"));
    }

    #[test]
    fn test_incident_json() {
        let printer = Printer::new(OutputFormat::Json);
        let output = printer.incident_edges("B", &incident());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["vertex"], "B");
        assert_eq!(value["edges"][0]["other"], "A");
        assert_eq!(value["edges"][1]["label"], "3");
    }

    #[test]
    fn test_stats_table() {
        let output = Printer::default().stats(4, 3);
        assert!(output.contains("Vertex Count"));
        assert!(output.contains("Edge Count"));
    }
}
