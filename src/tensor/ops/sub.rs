use crate::errors::{NetError, Operator};
use crate::tensor::Tensor;

impl Tensor {
    /// 逐元素相减，两者形状须严格一致
    pub fn checked_sub(&self, other: &Tensor) -> Result<Tensor, NetError> {
        if !self.is_same_shape(other) {
            return Err(NetError::shape_mismatch(Operator::Sub, self.shape(), other.shape()));
        }
        Ok(Tensor {
            data: &self.data - &other.data,
        })
    }

    /// 原地执行`self -= alpha * other`，用于梯度下降更新
    pub fn sub_scaled_assign(&mut self, alpha: f32, other: &Tensor) -> Result<(), NetError> {
        if !self.is_same_shape(other) {
            return Err(NetError::shape_mismatch(
                Operator::SubAssign,
                self.shape(),
                other.shape(),
            ));
        }
        self.data.scaled_add(-alpha, &other.data);
        Ok(())
    }
}
