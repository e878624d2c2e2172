use super::activation::relu_derivative;
use super::forward::{ForwardCache, check_batch};
use super::params::Parameters;
use super::NUM_CLASSES;
use crate::data::transforms::one_hot;
use crate::errors::{NetError, Operator};
use crate::tensor::Tensor;

/// 各参数的梯度，形状与`Parameters`一一对应
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub dw1: Tensor,
    pub db1: Tensor,
    pub dw2: Tensor,
    pub db2: Tensor,
}

impl Gradients {
    /// 按 (dW1, db1, dW2, db2) 的顺序
    pub fn tensors(&self) -> [&Tensor; 4] {
        [&self.dw1, &self.db1, &self.dw2, &self.db2]
    }
}

/// 反向传播（softmax + 交叉熵损失）：
/// - dZ2 = A2 − Y，dW2 = dZ2·A1ᵗ / m，db2 = Σ列 dZ2 / m
/// - dZ1 = (W2ᵗ·dZ2) ⊙ ReLU′(Z1)，dW1 = dZ1·Xᵗ / m，db1 = Σ列 dZ1 / m
///
/// 其中 Y 为`labels`的 one-hot 编码，m 取自`x`的列数
pub fn backward(
    params: &Parameters,
    cache: &ForwardCache,
    x: &Tensor,
    labels: &[usize],
) -> Result<Gradients, NetError> {
    let m = check_batch(x, Operator::Backward)?;
    if labels.len() != m {
        return Err(NetError::shape_mismatch(Operator::Backward, &[m], &[labels.len()]));
    }
    if cache.a2.shape() != [NUM_CLASSES, m] {
        return Err(NetError::shape_mismatch(
            Operator::Backward,
            &[NUM_CLASSES, m],
            cache.a2.shape(),
        ));
    }

    let one_hot_y = one_hot(labels, NUM_CLASSES)?;
    let inv_m = 1.0 / m as f32;

    let dz2 = cache.a2.checked_sub(&one_hot_y)?;
    let dw2 = dz2.mat_mul_transposed(&cache.a1)? * inv_m;
    let db2 = dz2.sum_rows() * inv_m;

    let dz1 = params
        .w2()
        .transposed_mat_mul(&dz2)?
        .hadamard(&relu_derivative(&cache.z1))?;
    let dw1 = dz1.mat_mul_transposed(x)? * inv_m;
    let db1 = dz1.sum_rows() * inv_m;

    Ok(Gradients { dw1, db1, dw2, db2 })
}
