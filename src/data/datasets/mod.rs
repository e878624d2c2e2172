//! 数据集模块

mod digits;

pub use digits::{DigitDataset, write_submission};
