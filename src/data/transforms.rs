//! 数据变换函数
//!
//! 提供常用的数据预处理操作，如归一化、one-hot 编码等。

use crate::errors::NetError;
use crate::tensor::Tensor;

/// 将 0-255 像素值归一化到 0-1
///
/// # 参数
/// - `tensor`: 输入 Tensor，值范围 [0, 255]
///
/// # 返回
/// 归一化后的 Tensor，值范围 [0, 1]
pub fn normalize_pixels(tensor: &Tensor) -> Tensor {
    tensor / 255.0
}

/// 将类别索引转换为 one-hot 编码
///
/// # 参数
/// - `labels`: 长度为 m 的类别索引，值须在 0..num_classes 内
/// - `num_classes`: 类别总数（固定值，不从数据中推断）
///
/// # 返回
/// one-hot 编码 Tensor，形状 [num_classes, m]，第 j 列在第`labels[j]`行为 1；
/// 任一标签越界则返回`InvalidLabel`
///
/// # 示例
/// ```ignore
/// let encoded = one_hot(&[0, 2, 1], 3)?;
/// // 结果: [[1,0,0], [0,0,1], [0,1,0]]
/// ```
pub fn one_hot(labels: &[usize], num_classes: usize) -> Result<Tensor, NetError> {
    let m = labels.len();
    let mut encoded = Tensor::zeros(num_classes, m);
    for (j, &label) in labels.iter().enumerate() {
        if label >= num_classes {
            return Err(NetError::InvalidLabel {
                label: label as i64,
                index: j,
                num_classes,
            });
        }
        encoded[[label, j]] = 1.0;
    }
    Ok(encoded)
}
