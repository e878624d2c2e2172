//! # 张量（矩阵）模块
//!
//! 本库中网络的全部数值都是二阶张量（矩阵），因此`Tensor`只是对`ndarray::Array2<f32>`的一层薄封装：
//! - 列向量用形状`[n, 1]`表示（如偏置）；
//! - 一个批次的样本按列排布，形状为`[特征数, 样本数]`。
//!
//! 与形状有关的二元运算均返回`Result`，形状不一致时给出[`NetError::ShapeMismatch`]，不做任何隐式广播。

use ndarray::{Array2, ShapeBuilder};
use rand::Rng;
use rand::distributions::{Distribution, Uniform};
use serde::{Deserialize, Serialize};

use crate::errors::{NetError, Operator};

mod index;
mod ops {
    pub mod add;
    pub mod mat_mul;
    pub mod mul;
    pub mod others;
    pub mod sub;
}

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tensor {
    data: Array2<f32>,
}

impl Tensor {
    /// 按行优先顺序，用`data`创建形状为`[rows, cols]`的张量。
    /// `data`的长度必须等于`rows * cols`，否则会panic。
    pub fn new(data: &[f32], shape: &[usize; 2]) -> Tensor {
        assert_eq!(
            data.len(),
            shape[0] * shape[1],
            "数据长度{}与形状{:?}不符",
            data.len(),
            shape
        );
        Self::from_vec(data.to_vec(), shape[0], shape[1]).unwrap_or_else(|e| panic!("{e}"))
    }

    /// 同`new`，但取得数据所有权，且长度不符时返回错误而非panic
    pub fn from_vec(data: Vec<f32>, rows: usize, cols: usize) -> Result<Tensor, NetError> {
        let got = vec![data.len()];
        Array2::from_shape_vec((rows, cols), data)
            .map(|data| Tensor { data })
            .map_err(|_| NetError::ShapeMismatch {
                operator: Operator::Construct,
                expected: vec![rows * cols],
                got,
            })
    }

    /// 按列优先顺序（即每`rows`个连续元素构成一列）创建张量，
    /// 适合把逐样本读入的像素直接排成`[784, m]`的批次
    pub fn from_columns(data: Vec<f32>, rows: usize, cols: usize) -> Result<Tensor, NetError> {
        let got = vec![data.len()];
        Array2::from_shape_vec((rows, cols).f(), data)
            .map(|data| Tensor {
                data: data.as_standard_layout().to_owned(),
            })
            .map_err(|_| NetError::ShapeMismatch {
                operator: Operator::Construct,
                expected: vec![rows * cols],
                got,
            })
    }

    pub fn from_array(data: Array2<f32>) -> Tensor {
        Tensor { data }
    }

    pub fn zeros(rows: usize, cols: usize) -> Tensor {
        Tensor {
            data: Array2::zeros((rows, cols)),
        }
    }

    /// 创建一个随机张量，各元素独立服从`[min, max)`上的均匀分布
    pub fn new_random<R: Rng + ?Sized>(min: f32, max: f32, rows: usize, cols: usize, rng: &mut R) -> Tensor {
        let uniform = Uniform::new(min, max);
        Tensor {
            data: Array2::from_shape_simple_fn((rows, cols), || uniform.sample(&mut *rng)),
        }
    }
}

impl Tensor {
    pub fn data(&self) -> &Array2<f32> {
        &self.data
    }

    /// 形状，恒为`[行数, 列数]`
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn is_same_shape(&self, other: &Self) -> bool {
        self.shape() == other.shape()
    }

    /// 所有元素是否都是有限值（不含NaN和±Inf）
    pub fn is_all_finite(&self) -> bool {
        self.data.iter().all(|x| x.is_finite())
    }
}
