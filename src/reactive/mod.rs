//! Observable values.
//!
//! An [`ObservableCell`] holds one value and calls a single bound listener
//! synchronously whenever the value is written. Arithmetic on a cell
//! produces a fresh, unbound cell rather than mutating the original.

mod cell;

pub use cell::ObservableCell;
