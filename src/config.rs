//! 训练配置
//!
//! 核心接口只需要迭代次数和学习率两个参数，`TrainConfig`把它们与汇报间隔、随机种子、
//! 验证集大小打包在一起，便于从 JSON 文件读取。

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::DataError;
use crate::errors::NetError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    /// 迭代次数 N
    pub iterations: usize,
    /// 学习率 α
    pub learning_rate: f32,
    /// 每隔多少次迭代汇报一次训练准确率
    pub report_every: usize,
    /// 参数初始化与数据打乱所用的随机种子
    pub seed: u64,
    /// 从打乱后的训练数据中划出的验证集样本数
    pub dev_size: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            iterations: 500,
            learning_rate: 0.10,
            report_every: 10,
            seed: 42,
            dev_size: 1000,
        }
    }
}

impl TrainConfig {
    pub fn from_json_str(json: &str) -> Result<Self, DataError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DataError::FileNotFound(path.to_path_buf()));
        }
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<(), NetError> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(NetError::InvalidConfig(format!(
                "学习率须为正的有限值，实际为{}",
                self.learning_rate
            )));
        }
        if self.report_every == 0 {
            return Err(NetError::InvalidConfig("report_every 须大于0".to_string()));
        }
        Ok(())
    }
}
