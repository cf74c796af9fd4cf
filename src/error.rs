//! 错误类型定义

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("无法打开文件 {}: {source}", .path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("边已存在: {0} - {1}")]
    EdgeAlreadyExists(String, String),

    #[error("边不存在: {0}")]
    EdgeNotFound(String),

    #[error("第 {line} 行记录无效: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("解析错误: {0}")]
    Parse(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// 是否为查找失败类错误
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::VertexNotFound(_) | Error::EdgeNotFound(_))
    }
}
