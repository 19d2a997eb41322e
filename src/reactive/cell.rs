//! Single-value cell with one change listener.

use crate::eval::{Arithmetic, ArithmeticError, BinaryOp};
use std::convert::Infallible;
use std::fmt;

/// Type alias for change listeners, called with `(old, new)`.
type Listener<'a, T, E> = Box<dyn FnMut(&T, &T) -> Result<(), E> + 'a>;

/// A mutable value that notifies a bound listener on every write.
///
/// There is exactly one listener slot. Binding a new listener replaces the
/// previous one. [`set`](Self::set) always fires the listener, even when the
/// new value equals the old one, and does so before returning.
///
/// Listeners that can fail use the error type `E`; their errors are returned
/// from `set` unchanged. Cells built with [`new`](ObservableCell::new) use
/// `Infallible`.
///
/// The listener cannot borrow the cell it is bound to while `set` runs, so
/// recursive writes from inside a listener do not compile.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use tether::reactive::ObservableCell;
///
/// let changes = RefCell::new(Vec::new());
/// let mut counter = ObservableCell::new(0);
/// counter.bind(|old, new| changes.borrow_mut().push((*old, *new)));
///
/// counter.set(1).unwrap();
/// counter.set(5).unwrap();
///
/// assert_eq!(*counter.get(), 5);
/// assert_eq!(*changes.borrow(), vec![(0, 1), (1, 5)]);
/// ```
pub struct ObservableCell<'a, T, E = Infallible> {
    value: T,
    listener: Option<Listener<'a, T, E>>,
}

impl<'a, T> ObservableCell<'a, T> {
    /// Create an unbound cell.
    pub fn new(value: T) -> Self {
        Self {
            value,
            listener: None,
        }
    }

    /// Create a cell with a listener already bound.
    pub fn with_listener<F>(value: T, listener: F) -> Self
    where
        F: FnMut(&T, &T) + 'a,
    {
        let mut cell = Self::new(value);
        cell.bind(listener);
        cell
    }
}

impl<'a, T, E> ObservableCell<'a, T, E> {
    /// Create an unbound cell whose listeners may fail with `E`.
    pub fn fallible(value: T) -> Self {
        Self {
            value,
            listener: None,
        }
    }

    /// Create a cell with a fallible listener already bound.
    pub fn try_with_listener<F>(value: T, listener: F) -> Self
    where
        F: FnMut(&T, &T) -> Result<(), E> + 'a,
    {
        let mut cell = Self::fallible(value);
        cell.try_bind(listener);
        cell
    }

    /// Current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value, then notify the listener with `(old, new)`.
    ///
    /// The value is updated before the listener runs, so a listener error
    /// leaves the new value in place.
    pub fn set(&mut self, value: T) -> Result<(), E> {
        let old = std::mem::replace(&mut self.value, value);
        tracing::trace!(bound = self.listener.is_some(), "observable cell updated");
        match self.listener.as_mut() {
            Some(listener) => listener(&old, &self.value),
            None => Ok(()),
        }
    }

    /// Bind a listener, replacing any previous one.
    pub fn bind<F>(&mut self, mut listener: F)
    where
        F: FnMut(&T, &T) + 'a,
    {
        let wrapped: Listener<'a, T, E> = Box::new(move |old: &T, new: &T| {
            listener(old, new);
            Ok(())
        });
        self.listener = Some(wrapped);
    }

    /// Bind a listener that can fail, replacing any previous one.
    pub fn try_bind<F>(&mut self, listener: F)
    where
        F: FnMut(&T, &T) -> Result<(), E> + 'a,
    {
        self.listener = Some(Box::new(listener));
    }

    /// Remove the listener. Returns whether one was bound.
    pub fn unbind(&mut self) -> bool {
        self.listener.take().is_some()
    }

    /// Whether a listener is bound.
    pub fn is_bound(&self) -> bool {
        self.listener.is_some()
    }

    /// Consume the cell, returning its value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Clone, E> ObservableCell<'_, T, E> {
    /// Copy of the current value.
    pub fn value(&self) -> T {
        self.value.clone()
    }
}

impl<'a, T: Arithmetic, E> ObservableCell<'a, T, E> {
    /// Combine the current value with `operand` into a new, unbound cell.
    ///
    /// `self` is never modified and its listener is not carried over.
    pub fn derive(&self, op: BinaryOp, operand: T) -> Result<Self, ArithmeticError> {
        let value = T::apply(op, self.value, operand)?;
        Ok(Self::fallible(value))
    }

    /// New cell holding the sum of the current value and `operand`.
    pub fn checked_add(&self, operand: T) -> Result<Self, ArithmeticError> {
        self.derive(BinaryOp::Add, operand)
    }

    /// New cell holding the difference of the current value and `operand`.
    pub fn checked_sub(&self, operand: T) -> Result<Self, ArithmeticError> {
        self.derive(BinaryOp::Sub, operand)
    }

    /// New cell holding the product of the current value and `operand`.
    pub fn checked_mul(&self, operand: T) -> Result<Self, ArithmeticError> {
        self.derive(BinaryOp::Mul, operand)
    }

    /// New cell holding the quotient of the current value and `operand`.
    pub fn checked_div(&self, operand: T) -> Result<Self, ArithmeticError> {
        self.derive(BinaryOp::Div, operand)
    }
}

impl<T: fmt::Display, E> fmt::Display for ObservableCell<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<T: fmt::Debug, E> fmt::Debug for ObservableCell<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableCell")
            .field("value", &self.value)
            .field("bound", &self.is_bound())
            .finish()
    }
}
