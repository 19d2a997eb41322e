//! State machine with per-transition side effects.

use super::history::{TransitionHistory, TransitionRecord};
use super::state::LabeledState;
use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;

/// Type alias for transition actions.
pub(crate) type TransitionAction<'a, E> = Box<dyn FnMut() -> Result<(), E> + 'a>;

/// Ordered `(from, to)` pair of state names keying the transition registry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TransitionKey {
    pub from: String,
    pub to: String,
}

impl TransitionKey {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Key for moving from `from` to `to`.
    pub fn between<E>(from: &LabeledState<'_, E>, to: &LabeledState<'_, E>) -> Self {
        Self::new(from.name(), to.name())
    }
}

impl fmt::Display for TransitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Finite-state machine that runs an action keyed by `(from, to)`.
///
/// The machine enters its initial state on construction. Each call to
/// [`transition_to`](Self::transition_to) runs the action registered for the
/// pair of the current and target state names, if any, then moves to the
/// target and runs its entry action. Unregistered pairs are allowed and
/// simply skip the action step. There are no terminal states and no
/// reachability checks.
///
/// Actions and entry actions cannot mutably borrow the machine, so calling
/// `transition_to` from inside one is rejected at compile time.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use tether::fsm::{LabeledState, StateMachine};
///
/// let handovers = Cell::new(0);
/// let red = LabeledState::new("Red", || {});
/// let green = LabeledState::new("Green", || {});
///
/// let mut machine = StateMachine::new(red.clone()).unwrap();
/// machine.add_transition(&red, &green, || handovers.set(handovers.get() + 1));
///
/// machine.transition_to(&green).unwrap().transition_to(&red).unwrap();
///
/// assert_eq!(machine.current_name(), "Red");
/// assert_eq!(handovers.get(), 1);
/// assert_eq!(machine.history().path(), vec!["Red", "Green", "Red"]);
/// ```
pub struct StateMachine<'a, E = Infallible> {
    current: LabeledState<'a, E>,
    transitions: HashMap<TransitionKey, TransitionAction<'a, E>>,
    history: TransitionHistory,
}

impl<'a, E: 'a> StateMachine<'a, E> {
    /// Create a machine and enter `initial`.
    ///
    /// The machine keeps the last
    /// [`DEFAULT_HISTORY_CAPACITY`](super::DEFAULT_HISTORY_CAPACITY) transition
    /// records; use [`StateMachineBuilder`](super::StateMachineBuilder) to
    /// choose another bound.
    ///
    /// An entry failure is returned unchanged and no machine is created.
    pub fn new(initial: LabeledState<'a, E>) -> Result<Self, E> {
        Self::with_history(initial, TransitionHistory::new())
    }

    pub(crate) fn with_history(
        initial: LabeledState<'a, E>,
        history: TransitionHistory,
    ) -> Result<Self, E> {
        tracing::debug!(state = initial.name(), "entering initial state");
        initial.enter()?;
        Ok(Self {
            current: initial,
            transitions: HashMap::new(),
            history,
        })
    }

    /// Register an action for moving from `from` to `to`.
    ///
    /// Replaces any action already registered for the same ordered pair.
    pub fn add_transition<F>(
        &mut self,
        from: &LabeledState<'a, E>,
        to: &LabeledState<'a, E>,
        mut action: F,
    ) where
        F: FnMut() + 'a,
    {
        self.add_fallible_transition(from, to, move || {
            action();
            Ok(())
        });
    }

    /// Register an action that can fail with `E`.
    pub fn add_fallible_transition<F>(
        &mut self,
        from: &LabeledState<'a, E>,
        to: &LabeledState<'a, E>,
        action: F,
    ) where
        F: FnMut() -> Result<(), E> + 'a,
    {
        self.insert_action(TransitionKey::between(from, to), Box::new(action));
    }

    pub(crate) fn insert_action(&mut self, key: TransitionKey, action: TransitionAction<'a, E>) {
        tracing::trace!(transition = %key, "registering transition action");
        if self.transitions.insert(key, action).is_some() {
            tracing::debug!("replaced existing transition action");
        }
    }

    /// Move to `next`.
    ///
    /// Runs the registered action for `(current, next)` first. If it fails,
    /// the error is returned and the machine stays where it was. Otherwise
    /// `next` becomes current, the move is recorded, and `next` is entered.
    /// An entry failure is returned after the move has happened.
    pub fn transition_to(&mut self, next: &LabeledState<'a, E>) -> Result<&mut Self, E> {
        let key = TransitionKey::between(&self.current, next);

        let action_ran = match self.transitions.get_mut(&key) {
            Some(action) => {
                action()?;
                true
            }
            None => {
                tracing::trace!(transition = %key, "no action registered, skipping");
                false
            }
        };

        tracing::debug!(from = %key.from, to = %key.to, action_ran, "transitioning");
        self.current = next.clone();
        self.history
            .record(TransitionRecord::new(key.from, key.to, action_ran));
        self.current.enter()?;
        Ok(self)
    }

    /// The state the machine is in.
    pub fn current(&self) -> &LabeledState<'a, E> {
        &self.current
    }

    /// Name of the current state.
    pub fn current_name(&self) -> &str {
        self.current.name()
    }

    /// Whether an action is registered for `(from, to)`.
    pub fn has_transition(&self, from: &str, to: &str) -> bool {
        self.transitions.contains_key(&TransitionKey::new(from, to))
    }

    /// Number of registered transition actions.
    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// Completed transitions, oldest first.
    pub fn history(&self) -> &TransitionHistory {
        &self.history
    }
}

impl<E> fmt::Debug for StateMachine<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.transitions.keys().collect();
        keys.sort_by(|a, b| (&a.from, &a.to).cmp(&(&b.from, &b.to)));
        f.debug_struct("StateMachine")
            .field("current", &self.current.name())
            .field("transitions", &keys)
            .field("history_len", &self.history.len())
            .finish()
    }
}
