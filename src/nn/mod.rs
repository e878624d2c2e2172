//! # 两层全连接网络
//!
//! 结构固定为 784 →(ReLU) 10 →(softmax) 10，不使用自动微分，
//! 前向传播、反向传播与参数更新均直接在矩阵上手工实现。
//!
//! ```ignore
//! use digit_recognizer::nn::{Parameters, Trainer, evaluate};
//!
//! let mut params = Parameters::new_seeded(42);
//! let mut trainer = Trainer::new(500, 0.1)?;
//! trainer.fit(&mut params, train.images(), train_labels)?;
//! let dev_accuracy = evaluate(&params, dev.images(), dev_labels)?;
//! ```

pub mod activation;
mod backward;
mod forward;
pub mod loss;
pub mod optimizer;
mod params;
mod predict;
pub mod stop;
mod trainer;

#[cfg(test)]
mod tests;

/// 输入层大小（28×28 像素）
pub const INPUT_SIZE: usize = 784;
/// 隐藏层大小
pub const HIDDEN_SIZE: usize = 10;
/// 类别数（数字 0-9）
pub const NUM_CLASSES: usize = 10;

pub use activation::{relu, relu_derivative, softmax};
pub use backward::{Gradients, backward};
pub use forward::{ForwardCache, forward};
pub use loss::cross_entropy;
pub use optimizer::{Optimizer, SGD};
pub use params::{B1_SHAPE, B2_SHAPE, Parameters, W1_SHAPE, W2_SHAPE};
pub use predict::{accuracy, evaluate, make_predictions, predict_one, predictions};
pub use stop::{AnyOf, Interrupt, LossBelow, MaxIterations, Progress, StopCondition, StopReason};
pub use trainer::{TrainReport, Trainer, TrainingState, train};
