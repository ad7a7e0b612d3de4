//! Single-pass expression evaluator
//!
//! Scans the token left to right. Additive terms are pushed onto a stack
//! (negated for subtraction) and multiplication is applied eagerly to the
//! stack top, which gives `*` precedence over `+` and `-` without building
//! an AST. The stack is summed once the scan completes.

use super::error::EvalError;
use super::op::Op;

/// Evaluate an expression token of single-digit operands joined by
/// `+`, `-` and `*`.
///
/// A digit character replaces the running term value outright, so a
/// multi-digit run collapses to its final digit ("12" evaluates to 2).
/// The current term is flushed on every operator character and,
/// unconditionally, on the last character of the token; a trailing
/// operator therefore closes the preceding term and is never applied.
/// Input is not validated beyond these rules: malformed tokens produce
/// a result by the same scan, not an error.
pub fn eval_expr(token: &str) -> Result<i64, EvalError> {
    let mut stack: Vec<i64> = Vec::new();
    let mut term: i64 = 0;
    let mut pending = Op::Add;

    let mut chars = token.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if let Some(d) = c.to_digit(10) {
            term = i64::from(d);
        }

        let op = Op::from_char(c);
        if op.is_some() || chars.peek().is_none() {
            match pending {
                Op::Add => stack.push(term),
                Op::Sub => stack.push(-term),
                Op::Mul => {
                    let top = stack.pop().ok_or_else(|| EvalError::underflow(i))?;
                    stack.push(top * term);
                }
            }
            // A flush triggered by the trailing digit has no operator to
            // record; the pending one is simply never consulted again.
            if let Some(op) = op {
                pending = op;
            }
            term = 0;
        }
    }

    Ok(stack.iter().sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_digit() {
        assert_eq!(eval_expr("7").unwrap(), 7);
        assert_eq!(eval_expr("0").unwrap(), 0);
    }

    #[test]
    fn test_addition() {
        assert_eq!(eval_expr("3+5").unwrap(), 8);
    }

    #[test]
    fn test_subtraction() {
        assert_eq!(eval_expr("9-4").unwrap(), 5);
    }

    #[test]
    fn test_multiplication() {
        assert_eq!(eval_expr("2*3").unwrap(), 6);
    }

    #[test]
    fn test_multiplication_precedence() {
        assert_eq!(eval_expr("2+3*4").unwrap(), 14);
    }

    #[test]
    fn test_chained_additive() {
        assert_eq!(eval_expr("1+2-3").unwrap(), 0);
    }

    #[test]
    fn test_mixed_operators() {
        assert_eq!(eval_expr("3*2+5-1").unwrap(), 10);
    }

    #[test]
    fn test_negative_result() {
        assert_eq!(eval_expr("1-9").unwrap(), -8);
    }

    #[test]
    fn test_multiplication_chain() {
        assert_eq!(eval_expr("2*3*4").unwrap(), 24);
    }

    // A digit overwrites the running term, it does not accumulate.
    #[test]
    fn test_multi_digit_collapses_to_last_digit() {
        assert_eq!(eval_expr("12").unwrap(), 2);
        assert_eq!(eval_expr("12+3").unwrap(), 5);
    }

    // A trailing operator flushes the previous term and is then dropped.
    #[test]
    fn test_trailing_operator() {
        assert_eq!(eval_expr("3*").unwrap(), 3);
        assert_eq!(eval_expr("5+").unwrap(), 5);
    }

    // The initial pending '+' pushes the zero term at the first boundary,
    // so a leading '*' multiplies against zero rather than underflowing.
    #[test]
    fn test_leading_operator() {
        assert_eq!(eval_expr("*3").unwrap(), 0);
        assert_eq!(eval_expr("-3").unwrap(), -3);
    }

    #[test]
    fn test_empty_token() {
        assert_eq!(eval_expr("").unwrap(), 0);
    }

    // Unknown characters only flush when they end the token.
    #[test]
    fn test_unknown_character_is_skipped() {
        assert_eq!(eval_expr("3a5").unwrap(), 5);
    }
}
