use super::INPUT_SIZE;
use super::activation::{relu, softmax};
use super::params::Parameters;
use crate::errors::{NetError, Operator};
use crate::tensor::Tensor;

/// 一次前向传播的中间结果，全部形状为`[10, m]`，仅供同一次迭代的反向传播使用
#[derive(Debug, Clone)]
pub struct ForwardCache {
    pub z1: Tensor,
    pub a1: Tensor,
    pub z2: Tensor,
    pub a2: Tensor,
}

/// 前向传播：
/// - Z1 = W1·X + b1，A1 = ReLU(Z1)
/// - Z2 = W2·A1 + b2，A2 = softmax(Z2)
///
/// `x`的形状须为`[784, m]`且`m ≥ 1`
pub fn forward(params: &Parameters, x: &Tensor) -> Result<ForwardCache, NetError> {
    check_batch(x, Operator::Forward)?;

    let z1 = params.w1().mat_mul(x)?.add_column(params.b1())?;
    let a1 = relu(&z1);
    let z2 = params.w2().mat_mul(&a1)?.add_column(params.b2())?;
    let a2 = softmax(&z2);

    Ok(ForwardCache { z1, a1, z2, a2 })
}

/// 校验输入批次并返回样本数`m`
pub(crate) fn check_batch(x: &Tensor, operator: Operator) -> Result<usize, NetError> {
    if x.rows() != INPUT_SIZE {
        return Err(NetError::shape_mismatch(
            operator,
            &[INPUT_SIZE, x.cols()],
            x.shape(),
        ));
    }
    if x.cols() == 0 {
        return Err(NetError::EmptyBatch);
    }
    Ok(x.cols())
}
