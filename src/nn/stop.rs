//! 训练的停止条件
//!
//! 默认策略是固定迭代次数（[`MaxIterations`]）。停止条件是一个关于迭代进度
//! （已完成的迭代数、最近一次的损失与准确率）的谓词，可以组合，也可以直接传入闭包。

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 每次迭代开始前交给停止条件的进度信息
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Progress {
    /// 已完成的迭代数（即下一次迭代的下标）
    pub completed_iterations: usize,
    /// 上一次迭代前向传播得到的平均交叉熵损失
    pub last_loss: Option<f32>,
    /// 最近一次汇报的训练准确率
    pub last_accuracy: Option<f32>,
}

/// 训练结束的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// 达到迭代上限
    IterationLimit,
    /// 满足了收敛条件（如损失低于阈值）
    Converged,
    /// 被外部中断
    Interrupted,
}

pub trait StopCondition {
    /// 返回`Some`表示在开始下一次迭代前停止
    fn check(&mut self, progress: &Progress) -> Option<StopReason>;
}

impl<F> StopCondition for F
where
    F: FnMut(&Progress) -> Option<StopReason>,
{
    fn check(&mut self, progress: &Progress) -> Option<StopReason> {
        self(progress)
    }
}

/// 完成`n`次迭代后停止；`n`为0时一次也不迭代
#[derive(Debug, Clone, Copy)]
pub struct MaxIterations(pub usize);

impl StopCondition for MaxIterations {
    fn check(&mut self, progress: &Progress) -> Option<StopReason> {
        (progress.completed_iterations >= self.0).then_some(StopReason::IterationLimit)
    }
}

/// 损失低于阈值时停止
#[derive(Debug, Clone, Copy)]
pub struct LossBelow(pub f32);

impl StopCondition for LossBelow {
    fn check(&mut self, progress: &Progress) -> Option<StopReason> {
        match progress.last_loss {
            Some(loss) if loss < self.0 => Some(StopReason::Converged),
            _ => None,
        }
    }
}

/// 外部中断标志：在其他线程（或信号处理函数）中置为`true`后，
/// 训练会在当前迭代完成后停止，参数保持为最后一次完整迭代的结果
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    flag: Arc<AtomicBool>,
}

impl Interrupt {
    pub fn new() -> Self {
        Self::default()
    }

    /// 共享的标志，可交给其他线程
    pub fn flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.flag)
    }

    pub fn trigger(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }
}

impl StopCondition for Interrupt {
    fn check(&mut self, _progress: &Progress) -> Option<StopReason> {
        self.flag
            .load(Ordering::SeqCst)
            .then_some(StopReason::Interrupted)
    }
}

/// 任一条件满足即停止，按加入顺序检查
#[derive(Default)]
pub struct AnyOf {
    conditions: Vec<Box<dyn StopCondition>>,
}

impl AnyOf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn or(mut self, condition: impl StopCondition + 'static) -> Self {
        self.conditions.push(Box::new(condition));
        self
    }
}

impl StopCondition for AnyOf {
    fn check(&mut self, progress: &Progress) -> Option<StopReason> {
        self.conditions.iter_mut().find_map(|c| c.check(progress))
    }
}
