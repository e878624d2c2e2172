/*
 * @Description  : 梯度下降优化器实现
 */

use super::base::{Optimizer, check_learning_rate};
use crate::errors::{NetError, Operator};
use crate::nn::{Gradients, Parameters};

/// SGD (梯度下降) 优化器
///
/// 本库每次迭代使用整个训练集，因此这里实际是全批量梯度下降
#[derive(Debug, Clone)]
pub struct SGD {
    learning_rate: f32,
    steps: usize,
}

impl SGD {
    /// 创建新的SGD优化器，学习率须为正
    pub fn new(learning_rate: f32) -> Result<Self, NetError> {
        Ok(Self {
            learning_rate: check_learning_rate(learning_rate)?,
            steps: 0,
        })
    }

    /// 已成功执行的更新次数
    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl Optimizer for SGD {
    /// 梯度下降更新：θ = θ - α * ∇θ
    fn step(&mut self, params: &mut Parameters, grads: &Gradients) -> Result<(), NetError> {
        // 先整体校验形状，避免只更新了一部分参数
        for (param, grad) in params.tensors().into_iter().zip(grads.tensors()) {
            if !param.is_same_shape(grad) {
                return Err(NetError::shape_mismatch(
                    Operator::SubAssign,
                    param.shape(),
                    grad.shape(),
                ));
            }
        }

        let snapshot = params.clone();
        let lr = self.learning_rate;
        for (param, grad) in params.tensors_mut().into_iter().zip(grads.tensors()) {
            param.sub_scaled_assign(lr, grad)?;
        }
        if let Err(e) = params.check_finite(self.steps) {
            *params = snapshot;
            return Err(e);
        }
        self.steps += 1;
        Ok(())
    }

    fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    fn set_learning_rate(&mut self, lr: f32) -> Result<(), NetError> {
        self.learning_rate = check_learning_rate(lr)?;
        Ok(())
    }
}
