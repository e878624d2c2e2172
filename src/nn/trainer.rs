/*
 * @Description  : 训练循环：反复执行 前向传播 → 反向传播 → 参数更新，
 *                 定期汇报训练准确率，遇到 NaN/Inf 立即停止
 */

use log::{debug, info, warn};

use super::backward::backward;
use super::forward::forward;
use super::loss::cross_entropy;
use super::optimizer::{Optimizer, SGD};
use super::params::Parameters;
use super::predict::{accuracy, predictions};
use super::stop::{MaxIterations, Progress, StopCondition, StopReason};
use crate::config::TrainConfig;
use crate::errors::NetError;
use crate::tensor::Tensor;

/// 训练器所处的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingState {
    Uninitialized,
    Running,
    Finished,
    Interrupted,
    Diverged,
    /// 因形状、标签等错误中止
    Failed,
}

/// 一次训练的结果摘要
#[derive(Debug, Clone, PartialEq)]
pub struct TrainReport {
    pub iterations: usize,
    pub stop_reason: StopReason,
    /// 最后一次迭代（更新前）的平均交叉熵损失
    pub final_loss: Option<f32>,
    /// 最近一次汇报的训练准确率
    pub last_accuracy: Option<f32>,
}

pub struct Trainer<O: Optimizer = SGD> {
    optimizer: O,
    stop_condition: Box<dyn StopCondition>,
    report_every: usize,
    state: TrainingState,
    loss_history: Vec<f32>,
}

impl Trainer<SGD> {
    /// 以固定迭代次数和学习率创建训练器（默认每10次迭代汇报一次准确率）
    pub fn new(iterations: usize, learning_rate: f32) -> Result<Self, NetError> {
        Ok(Self::with_optimizer(SGD::new(learning_rate)?, iterations))
    }

    pub fn from_config(config: &TrainConfig) -> Result<Self, NetError> {
        config.validate()?;
        Ok(Self::new(config.iterations, config.learning_rate)?.report_every(config.report_every))
    }
}

impl<O: Optimizer> Trainer<O> {
    pub fn with_optimizer(optimizer: O, iterations: usize) -> Self {
        Self {
            optimizer,
            stop_condition: Box::new(MaxIterations(iterations)),
            report_every: 10,
            state: TrainingState::Uninitialized,
            loss_history: Vec::new(),
        }
    }

    /// 替换停止条件（默认是构造时给出的迭代次数）
    pub fn stop_condition(mut self, condition: impl StopCondition + 'static) -> Self {
        self.stop_condition = Box::new(condition);
        self
    }

    /// 每隔`every`次迭代汇报一次训练准确率；0 表示从不汇报
    pub fn report_every(mut self, every: usize) -> Self {
        self.report_every = every;
        self
    }

    pub fn state(&self) -> TrainingState {
        self.state
    }

    pub fn optimizer(&self) -> &O {
        &self.optimizer
    }

    /// 每次迭代的训练损失（按迭代顺序）
    pub fn loss_history(&self) -> &[f32] {
        &self.loss_history
    }

    /// 在整个训练集`x`（`[784, m]`）上训练`params`。
    ///
    /// 每次迭代使用全部样本，迭代严格有序。出错时训练立即停止并返回错误；
    /// 若是发散（`DivergedTraining`），`params`会被恢复为最后一次完整且有限的迭代结果。
    pub fn fit(
        &mut self,
        params: &mut Parameters,
        x: &Tensor,
        labels: &[usize],
    ) -> Result<TrainReport, NetError> {
        params.validate()?;
        self.state = TrainingState::Running;
        self.loss_history.clear();

        let mut progress = Progress::default();
        let result = loop {
            if let Some(reason) = self.stop_condition.check(&progress) {
                break Ok(reason);
            }
            match self.iterate(params, x, labels, &mut progress) {
                Ok(()) => progress.completed_iterations += 1,
                Err(e) => break Err(e),
            }
        };

        match result {
            Ok(reason) => {
                self.state = match reason {
                    StopReason::Interrupted => TrainingState::Interrupted,
                    _ => TrainingState::Finished,
                };
                info!(
                    "训练结束（{:?}）：共{}次迭代，最终损失 {:?}，最近训练准确率 {:?}",
                    reason, progress.completed_iterations, progress.last_loss, progress.last_accuracy
                );
                Ok(TrainReport {
                    iterations: progress.completed_iterations,
                    stop_reason: reason,
                    final_loss: progress.last_loss,
                    last_accuracy: progress.last_accuracy,
                })
            }
            Err(e) => {
                self.state = match e {
                    NetError::DivergedTraining { .. } => TrainingState::Diverged,
                    _ => TrainingState::Failed,
                };
                warn!("训练在第{}次迭代中止：{}", progress.completed_iterations, e);
                Err(e)
            }
        }
    }

    /// 单次迭代：前向 → 损失/准确率 → 反向 → 更新 → 发散检测
    fn iterate(
        &mut self,
        params: &mut Parameters,
        x: &Tensor,
        labels: &[usize],
        progress: &mut Progress,
    ) -> Result<(), NetError> {
        let iteration = progress.completed_iterations;

        let cache = forward(params, x)?;
        if !cache.a2.is_all_finite() || !cache.z1.is_all_finite() {
            return Err(NetError::DivergedTraining { iteration });
        }

        let loss = cross_entropy(&cache.a2, labels)?;
        self.loss_history.push(loss);
        progress.last_loss = Some(loss);
        debug!("第{iteration}次迭代：损失 {loss:.6}");

        if self.report_every > 0 && iteration % self.report_every == 0 {
            let acc = accuracy(&predictions(&cache.a2), labels)?;
            progress.last_accuracy = Some(acc);
            info!("第{iteration}次迭代：训练准确率 {acc:.4}，损失 {loss:.4}");
        }

        let grads = backward(params, &cache, x, labels)?;
        let snapshot = params.clone();
        // 其他`Optimizer`实现未必自行检查或恢复
        let result = self
            .optimizer
            .step(params, &grads)
            .and_then(|()| params.check_finite(iteration));
        match result {
            Ok(()) => Ok(()),
            Err(NetError::DivergedTraining { .. }) => {
                *params = snapshot;
                Err(NetError::DivergedTraining { iteration })
            }
            Err(e) => {
                *params = snapshot;
                Err(e)
            }
        }
    }
}

/// 便捷入口：用随机种子初始化参数，在`x`上以学习率`learning_rate`训练`iterations`次
pub fn train(
    x: &Tensor,
    labels: &[usize],
    iterations: usize,
    learning_rate: f32,
    seed: u64,
) -> Result<Parameters, NetError> {
    let mut params = Parameters::new_seeded(seed);
    Trainer::new(iterations, learning_rate)?.fit(&mut params, x, labels)?;
    Ok(params)
}
