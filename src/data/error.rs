//! 数据加载错误类型定义

use std::path::PathBuf;
use thiserror::Error;

use crate::errors::NetError;

/// 数据加载、参数存取相关错误
#[derive(Debug, Error)]
pub enum DataError {
    /// 文件未找到
    #[error("文件未找到: {0}")]
    FileNotFound(PathBuf),

    /// IO 错误
    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV 解析错误
    #[error("CSV 错误: {0}")]
    CsvError(#[from] csv::Error),

    /// JSON 解析错误
    #[error("JSON 错误: {0}")]
    JsonError(#[from] serde_json::Error),

    /// 格式错误（如列数不符、像素越界）
    #[error("格式错误: {0}")]
    FormatError(String),

    /// 索引越界
    #[error("索引越界: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// （反）序列化错误
    #[error("序列化错误: {0}")]
    Serialization(String),

    /// 标签越界、形状不符等网络层面的错误
    #[error(transparent)]
    Net(#[from] NetError),
}
