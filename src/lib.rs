//! Tether: deferred expressions, observable cells and a labeled state machine
//!
//! Three small building blocks with real state and ordering semantics:
//!
//! - **Deferred expressions** ([`eval`]): arithmetic graphs built from
//!   closures, evaluated only on request and re-evaluated fresh every time
//! - **Observable cells** ([`reactive`]): a value with one listener that is
//!   notified synchronously on every write
//! - **Labeled state machine** ([`fsm`]): named states with entry actions and
//!   transition actions keyed by `(from, to)` state names
//!
//! Everything is single-threaded and synchronous. Errors are never swallowed:
//! arithmetic failures surface as [`ArithmeticError`], and failures inside
//! caller-supplied actions are returned unchanged.
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use tether::{Deferred, LabeledState, ObservableCell, StateMachine};
//!
//! let x = Cell::new(5);
//! let doubled = Deferred::new(|| x.get() * 2);
//! x.set(10);
//! assert_eq!(doubled.eval(), Ok(20));
//!
//! let mut temperature = ObservableCell::new(20);
//! let raised = temperature.checked_add(5).unwrap();
//! temperature.set(*raised.get()).unwrap();
//! assert_eq!(temperature.to_string(), "25");
//!
//! let idle = LabeledState::new("Idle", || {});
//! let busy = LabeledState::new("Busy", || {});
//! let mut machine = StateMachine::new(idle).unwrap();
//! machine.transition_to(&busy).unwrap();
//! assert_eq!(machine.current_name(), "Busy");
//! ```

pub mod eval;
pub mod fsm;
pub mod reactive;

// Re-export commonly used types
pub use eval::{Arithmetic, ArithmeticError, BinaryOp, Deferred};
pub use fsm::{LabeledState, StateMachine, StateMachineBuilder, TransitionKey};
pub use reactive::ObservableCell;
