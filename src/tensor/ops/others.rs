use crate::tensor::Tensor;
use ndarray::{Axis, Zip};

impl Tensor {
    /// 逐元素映射，返回新张量
    pub fn map<F: Fn(f32) -> f32>(&self, f: F) -> Tensor {
        Tensor {
            data: self.data.mapv(f),
        }
    }

    /// 对所有元素求和
    pub fn sum(&self) -> f32 {
        let mut value = 0.0;
        Zip::from(&self.data).for_each(|a| value += a);
        value
    }

    /// 沿列方向把每一行加总，`[r, c]` -> `[r, 1]`
    pub fn sum_rows(&self) -> Tensor {
        Tensor {
            data: self.data.sum_axis(Axis(1)).insert_axis(Axis(1)),
        }
    }

    /// 每一列中最大值所在的行号；若有多个相同的最大值，取行号最小者
    pub fn argmax_columns(&self) -> Vec<usize> {
        self.data
            .axis_iter(Axis(1))
            .map(|column| {
                let mut best = 0;
                for (i, &value) in column.iter().enumerate() {
                    if value > column[best] {
                        best = i;
                    }
                }
                best
            })
            .collect()
    }

    /// 取出第`index`列，结果形状为`[rows, 1]`
    pub fn column(&self, index: usize) -> Tensor {
        Tensor {
            data: self.data.column(index).to_owned().insert_axis(Axis(1)),
        }
    }

    /// 按给定顺序挑选若干列组成新张量
    pub fn select_columns(&self, indices: &[usize]) -> Tensor {
        Tensor {
            data: self.data.select(Axis(1), indices),
        }
    }
}
