/*
 * @Description  : 优化器基础trait
 */

use crate::errors::NetError;
use crate::nn::{Gradients, Parameters};

/// 优化器核心 trait
pub trait Optimizer {
    /// 用一次反向传播得到的梯度更新参数
    ///
    /// 训练循环：
    /// ```ignore
    /// let cache = forward(&params, &x)?;
    /// let grads = backward(&params, &cache, &x, &labels)?;
    /// optimizer.step(&mut params, &grads)?;
    /// ```
    ///
    /// 形状不一致时返回`ShapeMismatch`；更新后参数出现 NaN/Inf 时返回`DivergedTraining`
    /// （`iteration`为已成功执行的更新次数）。两种情况下参数都保持调用前的值
    fn step(&mut self, params: &mut Parameters, grads: &Gradients) -> Result<(), NetError>;

    /// 获取学习率
    fn learning_rate(&self) -> f32;

    /// 设置学习率；非正或非有限值返回`InvalidConfig`，原学习率保持不变
    fn set_learning_rate(&mut self, lr: f32) -> Result<(), NetError>;
}

/// 学习率须为正的有限值
pub(crate) fn check_learning_rate(lr: f32) -> Result<f32, NetError> {
    if lr.is_finite() && lr > 0.0 {
        Ok(lr)
    } else {
        Err(NetError::InvalidConfig(format!("学习率须为正的有限值，实际为{lr}")))
    }
}
