use crate::errors::{NetError, Operator};
use crate::tensor::Tensor;

impl Tensor {
    /// 将形状为`[rows, 1]`的列向量加到`self`的每一列上（偏置广播）。
    /// 除此之外不做任何广播，行数不一致或`column`不是列向量都会返回错误。
    pub fn add_column(&self, column: &Tensor) -> Result<Tensor, NetError> {
        if column.cols() != 1 || column.rows() != self.rows() {
            return Err(NetError::shape_mismatch(
                Operator::AddColumn,
                &[self.rows(), 1],
                column.shape(),
            ));
        }
        Ok(Tensor {
            data: &self.data + &column.data,
        })
    }
}
