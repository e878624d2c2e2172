use crate::errors::{NetError, Operator};
use crate::tensor::Tensor;

impl Tensor {
    /// 矩阵乘法：`self`的列数必须等于`other`的行数
    pub fn mat_mul(&self, other: &Tensor) -> Result<Tensor, NetError> {
        if self.cols() != other.rows() {
            return Err(NetError::shape_mismatch(
                Operator::MatMul,
                &[self.cols(), other.cols()],
                other.shape(),
            ));
        }
        Ok(Tensor {
            data: self.data.dot(&other.data),
        })
    }

    /// 转置，返回新的张量（内存为标准行优先布局）
    pub fn transpose(&self) -> Tensor {
        Tensor {
            data: self.data.t().as_standard_layout().to_owned(),
        }
    }
}

impl Tensor {
    /// 计算`self · otherᵗ`，不显式构造转置矩阵。
    /// 两者的列数必须相等
    pub fn mat_mul_transposed(&self, other: &Tensor) -> Result<Tensor, NetError> {
        if self.cols() != other.cols() {
            return Err(NetError::shape_mismatch(
                Operator::MatMul,
                &[other.rows(), self.cols()],
                other.shape(),
            ));
        }
        Ok(Tensor {
            data: self.data.dot(&other.data.t()),
        })
    }

    /// 计算`selfᵗ · other`，不显式构造转置矩阵。
    /// 两者的行数必须相等
    pub fn transposed_mat_mul(&self, other: &Tensor) -> Result<Tensor, NetError> {
        if self.rows() != other.rows() {
            return Err(NetError::shape_mismatch(
                Operator::MatMul,
                &[self.rows(), other.cols()],
                other.shape(),
            ));
        }
        Ok(Tensor {
            data: self.data.t().dot(&other.data),
        })
    }
}
