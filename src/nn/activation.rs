//! 激活函数：隐藏层用 ReLU，输出层用按列计算的 softmax

use ndarray::Axis;

use crate::tensor::Tensor;

/// ReLU(z) = max(z, 0)，逐元素计算。NaN 原样保留，以便后续的发散检测能够发现它
pub fn relu(z: &Tensor) -> Tensor {
    z.map(|x| if x < 0.0 { 0.0 } else { x })
}

/// ReLU 的导数：z > 0 处为 1，其余为 0
pub fn relu_derivative(z: &Tensor) -> Tensor {
    z.map(|x| if x > 0.0 { 1.0 } else { 0.0 })
}

/// 对形状为`[类别数, 样本数]`的矩阵逐列计算 softmax，使每一列都是一个概率分布。
///
/// 计算前先减去该列的最大值，结果不变，但可避免`exp`上溢。
pub fn softmax(z: &Tensor) -> Tensor {
    let mut data = z.data().clone();
    for mut column in data.axis_iter_mut(Axis(1)) {
        let max = column.fold(f32::NEG_INFINITY, |acc, &x| acc.max(x));
        column.mapv_inplace(|x| (x - max).exp());
        let sum = column.sum();
        column.mapv_inplace(|x| x / sum);
    }
    Tensor::from_array(data)
}
