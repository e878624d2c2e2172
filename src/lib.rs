//! # Digit Recognizer
//!
//! `digit_recognizer`用纯rust从零实现了一个两层全连接网络（784 → 10 → 10），
//! 在 MNIST 手写数字上做全批量梯度下降训练：参数初始化、前向传播、手工推导的反向传播、
//! 参数更新以及预测与准确率评估都直接在矩阵上完成，不依赖自动微分。
//!

pub mod config;
pub mod data;
pub mod errors;
pub mod nn;
pub mod tensor;
pub mod utils;

pub use config::TrainConfig;
pub use errors::NetError;
