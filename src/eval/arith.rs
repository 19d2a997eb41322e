//! Checked binary arithmetic shared by deferred expressions and cells.

use super::error::ArithmeticError;
use std::fmt;

/// The four operators an expression or cell can be combined with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Operator symbol, e.g. `"+"`.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Numeric values that can be combined with a [`BinaryOp`].
///
/// Integers use checked operations, so overflow is reported as
/// [`ArithmeticError::Overflow`] rather than wrapping or panicking.
/// Integer division truncates toward zero (`10 / 4 == 2`); use `f64`
/// operands for a fractional quotient. Floats follow IEEE-754 except for division by zero, which is
/// rejected with [`ArithmeticError::DivisionByZero`].
///
/// # Example
///
/// ```rust
/// use tether::eval::{Arithmetic, ArithmeticError, BinaryOp};
///
/// assert_eq!(i32::apply(BinaryOp::Mul, 6, 7), Ok(42));
/// assert_eq!(
///     i32::apply(BinaryOp::Div, 1, 0),
///     Err(ArithmeticError::DivisionByZero)
/// );
/// assert_eq!(
///     u8::apply(BinaryOp::Add, 255, 1),
///     Err(ArithmeticError::Overflow { op: BinaryOp::Add })
/// );
/// ```
pub trait Arithmetic: Copy {
    /// Combine `lhs` and `rhs` with `op`.
    fn apply(op: BinaryOp, lhs: Self, rhs: Self) -> Result<Self, ArithmeticError>;
}

macro_rules! impl_integer_arithmetic {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Arithmetic for $ty {
                fn apply(op: BinaryOp, lhs: Self, rhs: Self) -> Result<Self, ArithmeticError> {
                    let result = match op {
                        BinaryOp::Add => lhs.checked_add(rhs),
                        BinaryOp::Sub => lhs.checked_sub(rhs),
                        BinaryOp::Mul => lhs.checked_mul(rhs),
                        BinaryOp::Div => {
                            if rhs == 0 {
                                return Err(ArithmeticError::DivisionByZero);
                            }
                            lhs.checked_div(rhs)
                        }
                    };
                    result.ok_or(ArithmeticError::Overflow { op })
                }
            }
        )*
    };
}

macro_rules! impl_float_arithmetic {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Arithmetic for $ty {
                fn apply(op: BinaryOp, lhs: Self, rhs: Self) -> Result<Self, ArithmeticError> {
                    match op {
                        BinaryOp::Add => Ok(lhs + rhs),
                        BinaryOp::Sub => Ok(lhs - rhs),
                        BinaryOp::Mul => Ok(lhs * rhs),
                        BinaryOp::Div if rhs == 0.0 => Err(ArithmeticError::DivisionByZero),
                        BinaryOp::Div => Ok(lhs / rhs),
                    }
                }
            }
        )*
    };
}

impl_integer_arithmetic!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_arithmetic!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_division_truncates() {
        assert_eq!(i32::apply(BinaryOp::Div, 10, 4), Ok(2));
        assert_eq!(i32::apply(BinaryOp::Div, -7, 2), Ok(-3));
        assert_eq!(f64::apply(BinaryOp::Div, 10.0, 4.0), Ok(2.5));
    }

    #[test]
    fn integer_ops_combine_values() {
        assert_eq!(i64::apply(BinaryOp::Add, 10, 20), Ok(30));
        assert_eq!(i64::apply(BinaryOp::Sub, 10, 20), Ok(-10));
        assert_eq!(i64::apply(BinaryOp::Mul, 10, 20), Ok(200));
        assert_eq!(i64::apply(BinaryOp::Div, 20, 10), Ok(2));
    }

    #[test]
    fn integer_division_by_zero_is_rejected() {
        assert_eq!(
            u32::apply(BinaryOp::Div, 10, 0),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn integer_overflow_reports_operator() {
        assert_eq!(
            i8::apply(BinaryOp::Mul, 100, 2),
            Err(ArithmeticError::Overflow { op: BinaryOp::Mul })
        );
        assert_eq!(
            u8::apply(BinaryOp::Sub, 0, 1),
            Err(ArithmeticError::Overflow { op: BinaryOp::Sub })
        );
        // MIN / -1 does not fit
        assert_eq!(
            i32::apply(BinaryOp::Div, i32::MIN, -1),
            Err(ArithmeticError::Overflow { op: BinaryOp::Div })
        );
    }

    #[test]
    fn float_division_by_zero_is_rejected() {
        assert_eq!(
            f64::apply(BinaryOp::Div, 1.5, 0.0),
            Err(ArithmeticError::DivisionByZero)
        );
        assert_eq!(f64::apply(BinaryOp::Div, 3.0, 2.0), Ok(1.5));
    }

    #[test]
    fn operator_symbols_display() {
        assert_eq!(BinaryOp::Add.to_string(), "+");
        assert_eq!(BinaryOp::Div.to_string(), "/");
        assert_eq!(
            ArithmeticError::Overflow { op: BinaryOp::Sub }.to_string(),
            "Arithmetic overflow in '-'"
        );
    }
}
