use thiserror::Error;
mod ops;
pub use self::ops::*;

/// 网络计算（张量运算、前/反向传播、参数更新、训练）中可能出现的错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetError {
    // 张量二元运算或参数形状校验
    #[error("形状不一致，故无法{operator}：期望形状为{expected:?}，实际形状为{got:?}")]
    ShapeMismatch {
        operator: Operator,
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    #[error("第{index}个样本的标签{label}超出类别范围[0, {num_classes})")]
    InvalidLabel {
        label: i64,
        index: usize,
        num_classes: usize,
    },

    #[error("训练在第{iteration}次迭代时发散：参数或激活值中出现NaN/Inf")]
    DivergedTraining { iteration: usize },

    #[error("批次为空（样本数为0）")]
    EmptyBatch,

    #[error("配置无效：{0}")]
    InvalidConfig(String),
}

impl NetError {
    /// 便捷构造形状不一致错误
    pub fn shape_mismatch(operator: Operator, expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            operator,
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }
}
