use std::fmt::{self, Display};

/// 触发形状检查的运算
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Construct,
    MatMul,
    AddColumn,
    Sub,
    Hadamard,
    SubAssign,
    Forward,
    Backward,
    Loss,
    Accuracy,
    LoadParameters,
}
impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operation_name = match self {
            Operator::Construct => "创建张量",
            Operator::MatMul => "矩阵相乘",
            Operator::AddColumn => "按列广播相加",
            Operator::Sub => "相减",
            Operator::Hadamard => "逐元素相乘",
            Operator::SubAssign => "自相减",
            Operator::Forward => "前向传播",
            Operator::Backward => "反向传播",
            Operator::Loss => "计算损失",
            Operator::Accuracy => "计算准确率",
            Operator::LoadParameters => "载入参数",
        };
        write!(f, "{}", operation_name)
    }
}
