//! 数据导入模块
//!
//! 文本格式：
//! - 第一行：逗号分隔的顶点标签
//! - 之后每行：`端点1 \t 边标签 \t 端点2`
//!
//! 端点无法解析的行会被跳过并计数，不会导致加载失败。

use crate::error::{Error, Result};
use crate::graph::Graph;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

/// 导入统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportStats {
    pub vertices_imported: usize,
    pub edges_imported: usize,
    pub records_skipped: usize,
    pub duration_ms: u64,
}

/// 加载选项
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// 顶点行分隔符
    pub vertex_delimiter: char,
    /// 边记录字段分隔符
    pub field_delimiter: char,
    /// 是否去除字段首尾空白
    pub trim_fields: bool,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            vertex_delimiter: ',',
            field_delimiter: '\t',
            trim_fields: true,
        }
    }
}

/// 图加载器
#[derive(Debug, Clone, Default)]
pub struct GraphLoader {
    options: LoaderOptions,
}

impl GraphLoader {
    /// 创建加载器
    pub fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    /// 从文件加载
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<(Graph, ImportStats)> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::FileUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "loading graph");
        self.load_reader(BufReader::new(file))
    }

    /// 从字符串加载
    pub fn load_str(&self, content: &str) -> Result<(Graph, ImportStats)> {
        self.load_reader(content.as_bytes())
    }

    /// 从任意 BufRead 加载
    pub fn load_reader<R: BufRead>(&self, reader: R) -> Result<(Graph, ImportStats)> {
        let start = std::time::Instant::now();
        let mut graph = Graph::new();
        let mut stats = ImportStats::default();
        let mut lines = reader.split(b'\n');

        // 顶点行无法按 UTF-8 解码时按有损方式解码，不丢弃整个图
        if let Some(header) = lines.next() {
            let header = header?;
            let header = String::from_utf8_lossy(&header);
            if header.contains(char::REPLACEMENT_CHARACTER) {
                warn!("vertex line is not valid UTF-8, decoded lossily");
            }
            for label in header.split(self.options.vertex_delimiter) {
                let label = self.field(label);
                if label.is_empty() {
                    continue;
                }
                graph.insert_vertex(label);
                stats.vertices_imported += 1;
            }
        }

        // 行号从 1 开始，第 1 行是顶点行
        for (i, bytes) in lines.enumerate() {
            let line_no = i + 2;
            let result = match String::from_utf8(bytes?) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.import_record(&mut graph, &line, line_no),
                Err(_) => Err(Error::MalformedRecord {
                    line: line_no,
                    reason: "不是有效的 UTF-8".to_string(),
                }),
            };

            match result {
                Ok(()) => stats.edges_imported += 1,
                Err(e) => {
                    warn!(error = %e, "skipping record");
                    stats.records_skipped += 1;
                }
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            vertices = stats.vertices_imported,
            edges = stats.edges_imported,
            skipped = stats.records_skipped,
            "graph loaded"
        );
        Ok((graph, stats))
    }

    /// 解析并导入单条边记录
    fn import_record(&self, graph: &mut Graph, line: &str, line_no: usize) -> Result<()> {
        let malformed = |reason: String| Error::MalformedRecord {
            line: line_no,
            reason,
        };

        let mut parts = line.split(self.options.field_delimiter);
        let (Some(from), Some(label), Some(to)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed("字段数不足 3".to_string()));
        };
        let (from, label, to) = (self.field(from), self.field(label), self.field(to));

        let v1 = graph
            .vertex_id(from)
            .ok_or_else(|| malformed(format!("未知顶点 {}", from)))?;
        let v2 = graph
            .vertex_id(to)
            .ok_or_else(|| malformed(format!("未知顶点 {}", to)))?;
        graph.insert_edge(v1, v2, label)?;

        Ok(())
    }

    fn field<'a>(&self, raw: &'a str) -> &'a str {
        if self.options.trim_fields {
            raw.trim()
        } else {
            raw.trim_end_matches(['\r', '\n'])
        }
    }
}
