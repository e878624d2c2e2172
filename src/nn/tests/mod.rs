mod activation;
mod predict;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::nn::{INPUT_SIZE, NUM_CLASSES};
use crate::tensor::Tensor;

/// 构造一个可分的合成数据集：类别 c 的样本在第 c 段（每段 78 个像素）较亮，其余像素为弱噪声
pub(super) fn synthetic_batch(m: usize, seed: u64) -> (Tensor, Vec<usize>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let segment = INPUT_SIZE / NUM_CLASSES;
    let labels: Vec<usize> = (0..m).map(|j| j % NUM_CLASSES).collect();
    let mut pixels = Vec::with_capacity(INPUT_SIZE * m);
    for &label in &labels {
        for i in 0..INPUT_SIZE {
            let value = if i / segment == label {
                rng.gen_range(0.6..1.0)
            } else {
                rng.gen_range(0.0..0.1)
            };
            pixels.push(value);
        }
    }
    let x = Tensor::from_columns(pixels, INPUT_SIZE, m).unwrap();
    (x, labels)
}
