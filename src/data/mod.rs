//! 数据加载模块
//!
//! 提供数据集加载、变换和提交文件输出功能。
//!
//! # 主要组件
//!
//! - [`DigitDataset`]: Kaggle "Digit Recognizer" 格式的 CSV 数据集
//! - [`transforms`]: 数据变换函数（归一化、one-hot 等）
//! - [`write_submission`]: 输出 `ImageId,Label` 格式的预测结果
//! - [`DataError`]: 数据加载错误类型
//!
//! # 使用示例
//!
//! ```ignore
//! use digit_recognizer::data::DigitDataset;
//!
//! let data = DigitDataset::from_csv("train.csv")?.shuffle(42);
//! let (dev, train) = data.split_dev(1000)?;
//! ```

pub mod datasets;
pub mod error;
pub mod transforms;


// Re-exports
pub use datasets::{DigitDataset, write_submission};
pub use error::DataError;
