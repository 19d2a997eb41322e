//! Deferred arithmetic expressions.
//!
//! An expression graph is built from closures and combined with
//! `+ - * /` (or [`Deferred::combine`]) without evaluating anything.
//! Evaluation is explicit, repeatable and never cached: closures that
//! borrow external state see whatever that state holds at `eval` time.
//!
//! # Example
//!
//! ```rust
//! use tether::eval::{ArithmeticError, Deferred};
//!
//! let a = Deferred::new(|| 10);
//! let b = Deferred::new(|| 20);
//!
//! assert_eq!((&a + &b).eval(), Ok(30));
//! assert_eq!((&a * &b).eval(), Ok(200));
//!
//! let broken = &a / &Deferred::constant(0);
//! assert_eq!(broken.eval(), Err(ArithmeticError::DivisionByZero));
//! ```

mod arith;
mod deferred;
mod error;

pub use arith::{Arithmetic, BinaryOp};
pub use deferred::Deferred;
pub use error::ArithmeticError;
