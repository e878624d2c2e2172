mod base;
mod sgd;

pub use base::Optimizer;
pub use sgd::SGD;
