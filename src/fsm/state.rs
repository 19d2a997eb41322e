//! Named states with entry actions.

use std::convert::Infallible;
use std::fmt;
use std::rc::Rc;

/// Type alias for entry actions. Shared so a state can be cloned freely.
type EntryAction<'a, E> = Rc<dyn Fn() -> Result<(), E> + 'a>;

/// A named state whose entry action runs every time it is entered.
///
/// The name identifies the state inside a [`StateMachine`](super::StateMachine);
/// transition actions are registered by name pair. Cloning shares the entry
/// action.
///
/// Calling [`enter`](Self::enter) directly always runs the action. Only the
/// state machine decides when a state is actually entered.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use tether::fsm::LabeledState;
///
/// let entries = Cell::new(0);
/// let idle = LabeledState::new("Idle", || entries.set(entries.get() + 1));
///
/// idle.enter().unwrap();
/// idle.enter().unwrap();
///
/// assert_eq!(idle.name(), "Idle");
/// assert_eq!(entries.get(), 2);
/// ```
pub struct LabeledState<'a, E = Infallible> {
    name: String,
    on_enter: EntryAction<'a, E>,
}

impl<'a> LabeledState<'a> {
    /// Create a state with an infallible entry action.
    pub fn new<F>(name: impl Into<String>, on_enter: F) -> Self
    where
        F: Fn() + 'a,
    {
        Self::fallible(name, move || {
            on_enter();
            Ok(())
        })
    }
}

impl<'a, E: 'a> LabeledState<'a, E> {
    /// Create a state whose entry action can fail with `E`.
    pub fn fallible<F>(name: impl Into<String>, on_enter: F) -> Self
    where
        F: Fn() -> Result<(), E> + 'a,
    {
        Self {
            name: name.into(),
            on_enter: Rc::new(on_enter),
        }
    }

    /// Create a state with no entry side effect.
    pub fn passive(name: impl Into<String>) -> Self {
        Self::fallible(name, || Ok(()))
    }
}

impl<E> LabeledState<'_, E> {
    /// The state's label, used to key transitions.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the entry action.
    pub fn enter(&self) -> Result<(), E> {
        (self.on_enter)()
    }
}

impl<E> Clone for LabeledState<'_, E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            on_enter: Rc::clone(&self.on_enter),
        }
    }
}

impl<E> fmt::Debug for LabeledState<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabeledState")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<E> fmt::Display for LabeledState<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
