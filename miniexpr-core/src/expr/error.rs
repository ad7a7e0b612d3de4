//! Expression error types

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum EvalError {
    #[error("term stack underflow at byte {index}")]
    StackUnderflow { index: usize },
}

impl EvalError {
    pub fn underflow(index: usize) -> Self {
        EvalError::StackUnderflow { index }
    }
}
