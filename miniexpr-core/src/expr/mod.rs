//! Expression evaluation module
//!
//! Provides operator classification and the one-pass evaluator.

pub mod error;
pub mod eval;
pub mod op;

pub use error::EvalError;
pub use eval::eval_expr;
pub use op::Op;
