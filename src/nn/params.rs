/*
 * @Description  : 两层网络（784→10→10）的参数存储：初始化、形状校验、发散检测与存取
 */

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::{HIDDEN_SIZE, INPUT_SIZE, NUM_CLASSES};
use crate::data::DataError;
use crate::errors::{NetError, Operator};
use crate::tensor::Tensor;

pub const W1_SHAPE: [usize; 2] = [HIDDEN_SIZE, INPUT_SIZE];
pub const B1_SHAPE: [usize; 2] = [HIDDEN_SIZE, 1];
pub const W2_SHAPE: [usize; 2] = [NUM_CLASSES, HIDDEN_SIZE];
pub const B2_SHAPE: [usize; 2] = [NUM_CLASSES, 1];

/// 网络的全部可训练参数
///
/// 形状固定为 W1:[10, 784]、b1:[10, 1]、W2:[10, 10]、b2:[10, 1]，
/// 任何构造途径都会校验形状，因此持有`Parameters`即意味着网络结构合法。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    w1: Tensor,
    b1: Tensor,
    w2: Tensor,
    b2: Tensor,
}

impl Parameters {
    /// 各元素独立服从`[-0.5, 0.5)`上的均匀分布
    pub fn new_random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            w1: Tensor::new_random(-0.5, 0.5, W1_SHAPE[0], W1_SHAPE[1], rng),
            b1: Tensor::new_random(-0.5, 0.5, B1_SHAPE[0], B1_SHAPE[1], rng),
            w2: Tensor::new_random(-0.5, 0.5, W2_SHAPE[0], W2_SHAPE[1], rng),
            b2: Tensor::new_random(-0.5, 0.5, B2_SHAPE[0], B2_SHAPE[1], rng),
        }
    }

    /// 同`new_random`，但使用给定种子，保证可重复
    pub fn new_seeded(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new_random(&mut rng)
    }

    /// 全零参数，主要用于手工构造参数的场景
    pub fn zeros() -> Self {
        Self {
            w1: Tensor::zeros(W1_SHAPE[0], W1_SHAPE[1]),
            b1: Tensor::zeros(B1_SHAPE[0], B1_SHAPE[1]),
            w2: Tensor::zeros(W2_SHAPE[0], W2_SHAPE[1]),
            b2: Tensor::zeros(B2_SHAPE[0], B2_SHAPE[1]),
        }
    }

    /// 由4个张量组装参数，任一形状不符即返回`ShapeMismatch`
    pub fn from_tensors(w1: Tensor, b1: Tensor, w2: Tensor, b2: Tensor) -> Result<Self, NetError> {
        let params = Self { w1, b1, w2, b2 };
        params.validate()?;
        Ok(params)
    }

    pub fn w1(&self) -> &Tensor {
        &self.w1
    }

    pub fn b1(&self) -> &Tensor {
        &self.b1
    }

    pub fn w2(&self) -> &Tensor {
        &self.w2
    }

    pub fn b2(&self) -> &Tensor {
        &self.b2
    }

    /// 按 (W1, b1, W2, b2) 的顺序
    pub fn tensors(&self) -> [&Tensor; 4] {
        [&self.w1, &self.b1, &self.w2, &self.b2]
    }

    pub(crate) fn tensors_mut(&mut self) -> [&mut Tensor; 4] {
        [&mut self.w1, &mut self.b1, &mut self.w2, &mut self.b2]
    }

    pub fn into_tensors(self) -> (Tensor, Tensor, Tensor, Tensor) {
        (self.w1, self.b1, self.w2, self.b2)
    }

    /// 校验4个参数的形状
    pub fn validate(&self) -> Result<(), NetError> {
        let expected = [W1_SHAPE, B1_SHAPE, W2_SHAPE, B2_SHAPE];
        for (tensor, shape) in self.tensors().into_iter().zip(expected.iter()) {
            if tensor.shape() != shape {
                return Err(NetError::shape_mismatch(
                    Operator::LoadParameters,
                    shape,
                    tensor.shape(),
                ));
            }
        }
        Ok(())
    }

    pub fn is_all_finite(&self) -> bool {
        self.tensors().iter().all(|t| t.is_all_finite())
    }

    /// 若任一参数含 NaN/Inf，返回`DivergedTraining`
    pub fn check_finite(&self, iteration: usize) -> Result<(), NetError> {
        if self.is_all_finite() {
            Ok(())
        } else {
            Err(NetError::DivergedTraining { iteration })
        }
    }
}

// 保存和加载参数
impl Parameters {
    /// 以 bincode 格式写入本地文件
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DataError> {
        let writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(writer, self).map_err(|e| DataError::Serialization(e.to_string()))
    }

    /// 从本地文件加载，并重新校验形状
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DataError::FileNotFound(path.to_path_buf()));
        }
        let reader = BufReader::new(File::open(path)?);
        let params: Self = bincode::deserialize_from(reader)
            .map_err(|e| DataError::Serialization(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }
}
