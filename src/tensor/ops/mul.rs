use crate::errors::{NetError, Operator};
use crate::tensor::Tensor;
use std::ops::{Div, Mul};

impl Mul<f32> for Tensor {
    type Output = Tensor;

    fn mul(self, scalar: f32) -> Tensor {
        Tensor {
            data: self.data * scalar,
        }
    }
}
impl Mul<f32> for &Tensor {
    type Output = Tensor;

    fn mul(self, scalar: f32) -> Tensor {
        Tensor {
            data: &self.data * scalar,
        }
    }
}

impl Div<f32> for &Tensor {
    type Output = Tensor;

    fn div(self, scalar: f32) -> Tensor {
        Tensor {
            data: &self.data / scalar,
        }
    }
}

impl Tensor {
    /// 逐元素相乘（Hadamard积），两者形状须严格一致
    pub fn hadamard(&self, other: &Tensor) -> Result<Tensor, NetError> {
        if !self.is_same_shape(other) {
            return Err(NetError::shape_mismatch(
                Operator::Hadamard,
                self.shape(),
                other.shape(),
            ));
        }
        Ok(Tensor {
            data: &self.data * &other.data,
        })
    }
}
