//! miniexpr Core Library
//!
//! Single-pass evaluation of arithmetic expression tokens over single-digit
//! operands joined by `+`, `-` and `*`. Multiplication binds tighter than
//! the additive operators and is resolved eagerly against a term stack.

pub mod expr;

pub use expr::{eval_expr, EvalError, Op};
