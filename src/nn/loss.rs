use crate::errors::{NetError, Operator};
use crate::tensor::Tensor;

/// 平均交叉熵损失：−(1/m)·Σⱼ ln A2[labelⱼ, j]
///
/// `a2`为 softmax 输出（`[类别数, m]`），概率被截断到`f32::MIN_POSITIVE`以免出现`ln 0`；
/// 若所需的概率中有 NaN，损失为 NaN
pub fn cross_entropy(a2: &Tensor, labels: &[usize]) -> Result<f32, NetError> {
    let m = a2.cols();
    if m == 0 {
        return Err(NetError::EmptyBatch);
    }
    if labels.len() != m {
        return Err(NetError::shape_mismatch(Operator::Loss, &[m], &[labels.len()]));
    }

    let mut total = 0.0;
    for (j, &label) in labels.iter().enumerate() {
        if label >= a2.rows() {
            return Err(NetError::InvalidLabel {
                label: label as i64,
                index: j,
                num_classes: a2.rows(),
            });
        }
        let p = a2[[label, j]];
        // `max`会把 NaN 吞掉
        total -= if p.is_nan() { p } else { p.max(f32::MIN_POSITIVE).ln() };
    }
    Ok(total / m as f32)
}
