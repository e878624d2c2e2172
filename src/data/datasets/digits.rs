//! Kaggle "Digit Recognizer" 手写数字数据集
//!
//! 支持：
//! - CSV 表格解析：训练集为`label,pixel0,...,pixel783`，测试集没有`label`列（首行均为表头）
//! - 像素归一化 (0-255 → 0-1)
//! - 按种子打乱、划分验证集
//! - 以`ImageId,Label`格式输出预测结果

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::data::error::DataError;
use crate::data::transforms::normalize_pixels;
use crate::errors::NetError;
use crate::nn::{INPUT_SIZE, NUM_CLASSES};
use crate::tensor::Tensor;

/// 手写数字数据集
///
/// 图像按列存放：形状为`[784, N]`，每列是一个已归一化到[0, 1]的样本；
/// 标签（若有）与列一一对应。
#[derive(Debug, Clone)]
pub struct DigitDataset {
    /// 图像数据 [784, N]
    images: Tensor,
    /// 标签，测试集为 None
    labels: Option<Vec<usize>>,
}

impl DigitDataset {
    /// 加载带标签的训练表格
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self, DataError> {
        Self::from_reader(open(path.as_ref())?)
    }

    /// 加载不带标签的测试表格
    pub fn unlabeled_from_csv(path: impl AsRef<Path>) -> Result<Self, DataError> {
        Self::unlabeled_from_reader(open(path.as_ref())?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataError> {
        parse_table(reader, true)
    }

    pub fn unlabeled_from_reader<R: Read>(reader: R) -> Result<Self, DataError> {
        parse_table(reader, false)
    }

    /// 由已归一化的图像`[784, N]`和可选标签直接构造
    pub fn from_parts(images: Tensor, labels: Option<Vec<usize>>) -> Result<Self, DataError> {
        if images.rows() != INPUT_SIZE {
            return Err(DataError::FormatError(format!(
                "图像须为{}行，实际为{}行",
                INPUT_SIZE,
                images.rows()
            )));
        }
        if let Some(labels) = &labels {
            if labels.len() != images.cols() {
                return Err(DataError::FormatError(format!(
                    "标签数{}与样本数{}不一致",
                    labels.len(),
                    images.cols()
                )));
            }
            check_labels(labels)?;
        }
        Ok(Self { images, labels })
    }

    /// 返回数据集中的样本数量
    pub fn len(&self) -> usize {
        self.images.cols()
    }

    /// 数据集是否为空
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 获取所有图像（用于批量处理）
    pub fn images(&self) -> &Tensor {
        &self.images
    }

    /// 获取所有标签；测试集返回 None
    pub fn labels(&self) -> Option<&[usize]> {
        self.labels.as_deref()
    }

    /// 获取所有标签；没有标签时返回错误
    pub fn require_labels(&self) -> Result<&[usize], DataError> {
        self.labels()
            .ok_or_else(|| DataError::FormatError("该数据集没有标签列".to_string()))
    }

    /// 获取第 index 个样本
    ///
    /// # 返回
    /// (image, label) 元组，image 形状为 [784, 1]
    pub fn get(&self, index: usize) -> Result<(Tensor, Option<usize>), DataError> {
        if index >= self.len() {
            return Err(DataError::IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        let label = self.labels.as_ref().map(|labels| labels[index]);
        Ok((self.images.column(index), label))
    }

    /// 按种子随机打乱样本顺序
    pub fn shuffle(self, seed: u64) -> Self {
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.shuffle(&mut StdRng::seed_from_u64(seed));
        self.select(&order)
    }

    /// 取前`dev_size`个样本作验证集，其余作训练集，返回 (dev, train)
    pub fn split_dev(self, dev_size: usize) -> Result<(Self, Self), DataError> {
        if dev_size > self.len() {
            return Err(DataError::IndexOutOfBounds {
                index: dev_size,
                len: self.len(),
            });
        }
        let dev_indices: Vec<usize> = (0..dev_size).collect();
        let train_indices: Vec<usize> = (dev_size..self.len()).collect();
        Ok((self.select(&dev_indices), self.select(&train_indices)))
    }

    fn select(&self, indices: &[usize]) -> Self {
        Self {
            images: self.images.select_columns(indices),
            labels: self
                .labels
                .as_ref()
                .map(|labels| indices.iter().map(|&i| labels[i]).collect()),
        }
    }
}

/// 以`ImageId,Label`格式写出预测结果，ImageId 从 1 开始
pub fn write_submission<W: Write>(writer: W, predictions: &[usize]) -> Result<(), DataError> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(["ImageId", "Label"])?;
    for (i, label) in predictions.iter().enumerate() {
        writer.write_record([(i + 1).to_string(), label.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

fn open(path: &Path) -> Result<File, DataError> {
    if !path.exists() {
        return Err(DataError::FileNotFound(path.to_path_buf()));
    }
    Ok(File::open(path)?)
}

fn check_labels(labels: &[usize]) -> Result<(), NetError> {
    match labels.iter().position(|&l| l >= NUM_CLASSES) {
        Some(index) => Err(NetError::InvalidLabel {
            label: labels[index] as i64,
            index,
            num_classes: NUM_CLASSES,
        }),
        None => Ok(()),
    }
}

/// 解析 CSV 表格。有标签时每行 785 列，否则 784 列
fn parse_table<R: Read>(reader: R, labeled: bool) -> Result<DigitDataset, DataError> {
    let expected_columns = INPUT_SIZE + usize::from(labeled);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut pixels: Vec<f32> = Vec::new();
    let mut labels: Vec<usize> = Vec::new();

    for (row, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() != expected_columns {
            return Err(DataError::FormatError(format!(
                "第{}个样本有{}列，应为{}列",
                row,
                record.len(),
                expected_columns
            )));
        }

        let mut cells = record.iter();
        if labeled {
            let cell = cells.next().unwrap_or_default();
            labels.push(parse_label(cell, row)?);
        }
        for (col, cell) in cells.enumerate() {
            pixels.push(parse_pixel(cell, row, col)?);
        }
    }

    let m = pixels.len() / INPUT_SIZE;
    let images = normalize_pixels(&Tensor::from_columns(pixels, INPUT_SIZE, m)?);
    Ok(DigitDataset {
        images,
        labels: labeled.then_some(labels),
    })
}

fn parse_label(cell: &str, row: usize) -> Result<usize, DataError> {
    let label: i64 = cell
        .parse()
        .map_err(|_| DataError::FormatError(format!("第{row}个样本的标签`{cell}`不是整数")))?;
    if !(0..NUM_CLASSES as i64).contains(&label) {
        return Err(NetError::InvalidLabel {
            label,
            index: row,
            num_classes: NUM_CLASSES,
        }
        .into());
    }
    Ok(label as usize)
}

fn parse_pixel(cell: &str, row: usize, col: usize) -> Result<f32, DataError> {
    cell.parse::<u8>().map(f32::from).map_err(|_| {
        DataError::FormatError(format!(
            "第{row}个样本的pixel{col}值`{cell}`不是[0, 255]内的整数"
        ))
    })
}
