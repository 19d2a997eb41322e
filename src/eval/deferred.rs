//! Deferred expressions evaluated fresh on every request.

use super::arith::{Arithmetic, BinaryOp};
use super::error::ArithmeticError;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::rc::Rc;

/// Type alias for the computation wrapped by a [`Deferred`].
type Compute<'a, T> = Rc<dyn Fn() -> Result<T, ArithmeticError> + 'a>;

/// A computation whose evaluation is postponed until [`Deferred::eval`].
///
/// Building an expression never runs it. Every call to `eval` re-runs the
/// computation, and for composed expressions every operand as well, so
/// any external state borrowed by the closures is read at evaluation time.
/// Results are never cached.
///
/// Composed expressions share their operands, so cloning is cheap and one
/// expression can feed several parents.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use tether::eval::Deferred;
///
/// let x = Cell::new(5);
/// let doubled = Deferred::new(|| x.get() * 2);
///
/// x.set(10);
/// assert_eq!(doubled.eval(), Ok(20));
///
/// let sum = &doubled + &Deferred::constant(1);
/// assert_eq!(sum.eval(), Ok(21));
/// ```
pub struct Deferred<'a, T> {
    compute: Compute<'a, T>,
}

impl<'a, T: 'a> Deferred<'a, T> {
    /// Wrap an infallible computation.
    pub fn new<F>(compute: F) -> Self
    where
        F: Fn() -> T + 'a,
    {
        Self::try_new(move || Ok(compute()))
    }

    /// Wrap a computation that may fail with an [`ArithmeticError`].
    pub fn try_new<F>(compute: F) -> Self
    where
        F: Fn() -> Result<T, ArithmeticError> + 'a,
    {
        Self {
            compute: Rc::new(compute),
        }
    }

    /// An expression that always yields `value`.
    pub fn constant(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(move || value.clone())
    }

    /// Run the computation and return its result.
    ///
    /// May be called any number of times; each call is independent.
    pub fn eval(&self) -> Result<T, ArithmeticError> {
        (self.compute)()
    }

    /// Post-process the result without evaluating now.
    ///
    /// ```rust
    /// use tether::eval::Deferred;
    ///
    /// let chained = Deferred::new(|| 10 + 20).then(|r| r * 2);
    /// assert_eq!(chained.eval(), Ok(60));
    /// ```
    pub fn then<U, F>(&self, transform: F) -> Deferred<'a, U>
    where
        U: 'a,
        F: Fn(T) -> U + 'a,
    {
        let source = self.clone();
        Deferred::try_new(move || source.eval().map(&transform))
    }

    /// Like [`then`](Self::then), for transforms that can fail.
    pub fn try_then<U, F>(&self, transform: F) -> Deferred<'a, U>
    where
        U: 'a,
        F: Fn(T) -> Result<U, ArithmeticError> + 'a,
    {
        let source = self.clone();
        Deferred::try_new(move || source.eval().and_then(&transform))
    }
}

impl<'a, T: Arithmetic + 'a> Deferred<'a, T> {
    /// Combine two expressions with `op`.
    ///
    /// Neither operand is evaluated here. At `eval` time the left operand is
    /// evaluated first, then the right, and the results are combined.
    pub fn combine(&self, other: &Deferred<'a, T>, op: BinaryOp) -> Self {
        let lhs = self.clone();
        let rhs = other.clone();
        Deferred::try_new(move || {
            let left = lhs.eval()?;
            let right = rhs.eval()?;
            T::apply(op, left, right)
        })
    }
}

impl<T> Clone for Deferred<'_, T> {
    fn clone(&self) -> Self {
        Self {
            compute: Rc::clone(&self.compute),
        }
    }
}

impl<T> fmt::Debug for Deferred<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred").finish_non_exhaustive()
    }
}

macro_rules! impl_deferred_op {
    ($($trait:ident, $method:ident, $op:expr;)*) => {
        $(
            impl<'a, T: Arithmetic + 'a> $trait for Deferred<'a, T> {
                type Output = Deferred<'a, T>;

                fn $method(self, rhs: Self) -> Self::Output {
                    self.combine(&rhs, $op)
                }
            }

            impl<'a, 'b, T: Arithmetic + 'a> $trait<&'b Deferred<'a, T>> for &'b Deferred<'a, T> {
                type Output = Deferred<'a, T>;

                fn $method(self, rhs: &'b Deferred<'a, T>) -> Self::Output {
                    self.combine(rhs, $op)
                }
            }
        )*
    };
}

impl_deferred_op! {
    Add, add, BinaryOp::Add;
    Sub, sub, BinaryOp::Sub;
    Mul, mul, BinaryOp::Mul;
    Div, div, BinaryOp::Div;
}
