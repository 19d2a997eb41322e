//! Arithmetic error types.

use super::arith::BinaryOp;
use thiserror::Error;

/// Errors raised when combining two numeric values.
///
/// Deferred expressions report these from `eval()`, observable cells from
/// their derived-value operations. Composition itself never fails.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Arithmetic overflow in '{op}'")]
    Overflow { op: BinaryOp },
}
