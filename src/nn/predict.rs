use super::INPUT_SIZE;
use super::forward::forward;
use super::params::Parameters;
use crate::errors::{NetError, Operator};
use crate::tensor::Tensor;

/// 每个样本（列）取概率最大的类别；并列时取下标最小者
pub fn predictions(a2: &Tensor) -> Vec<usize> {
    a2.argmax_columns()
}

/// 预测与真实标签相同的比例，取值在[0, 1]
pub fn accuracy(predictions: &[usize], labels: &[usize]) -> Result<f32, NetError> {
    if predictions.len() != labels.len() {
        return Err(NetError::shape_mismatch(
            Operator::Accuracy,
            &[labels.len()],
            &[predictions.len()],
        ));
    }
    if labels.is_empty() {
        return Err(NetError::EmptyBatch);
    }
    let correct = predictions
        .iter()
        .zip(labels)
        .filter(|(p, y)| p == y)
        .count();
    Ok(correct as f32 / labels.len() as f32)
}

/// 对一个批次（`[784, m]`）做前向传播并返回预测标签
pub fn make_predictions(params: &Parameters, x: &Tensor) -> Result<Vec<usize>, NetError> {
    let cache = forward(params, x)?;
    Ok(predictions(&cache.a2))
}

/// 对单个样本推理。`pixels`须是已归一化到[0, 1]的784个像素
pub fn predict_one(params: &Parameters, pixels: &[f32]) -> Result<usize, NetError> {
    if pixels.len() != INPUT_SIZE {
        return Err(NetError::shape_mismatch(
            Operator::Forward,
            &[INPUT_SIZE],
            &[pixels.len()],
        ));
    }
    let x = Tensor::from_vec(pixels.to_vec(), INPUT_SIZE, 1)?;
    let predicted = make_predictions(params, &x)?;
    Ok(predicted[0])
}

/// 在给定数据（通常是验证集）上的准确率
pub fn evaluate(params: &Parameters, x: &Tensor, labels: &[usize]) -> Result<f32, NetError> {
    let predicted = make_predictions(params, x)?;
    accuracy(&predicted, labels)
}
