//! Builder for constructing state machines.

use super::error::BuildError;
use super::history::TransitionHistory;
use super::machine::{StateMachine, TransitionAction, TransitionKey};
use super::state::LabeledState;
use std::convert::Infallible;

/// Builder for constructing state machines with a fluent API.
///
/// Transition actions are collected first and registered in order after the
/// initial state has been entered, so a later registration for the same pair
/// wins, exactly as with [`StateMachine::add_transition`].
///
/// # Example
///
/// ```rust
/// use tether::fsm::{LabeledState, StateMachineBuilder};
///
/// let red = LabeledState::new("Red", || {});
/// let green = LabeledState::new("Green", || {});
///
/// let mut machine = StateMachineBuilder::new()
///     .initial(red.clone())
///     .transition(&red, &green, || println!("go"))
///     .history_capacity(16)
///     .build()
///     .unwrap();
///
/// machine.transition_to(&green).unwrap();
/// assert_eq!(machine.current_name(), "Green");
/// ```
pub struct StateMachineBuilder<'a, E = Infallible> {
    initial: Option<LabeledState<'a, E>>,
    transitions: Vec<(TransitionKey, TransitionAction<'a, E>)>,
    history: TransitionHistory,
}

impl<'a, E: 'a> StateMachineBuilder<'a, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
            history: TransitionHistory::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: LabeledState<'a, E>) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add an infallible transition action.
    pub fn transition<F>(
        self,
        from: &LabeledState<'a, E>,
        to: &LabeledState<'a, E>,
        mut action: F,
    ) -> Self
    where
        F: FnMut() + 'a,
    {
        self.fallible_transition(from, to, move || {
            action();
            Ok(())
        })
    }

    /// Add a transition action that can fail with `E`.
    pub fn fallible_transition<F>(
        mut self,
        from: &LabeledState<'a, E>,
        to: &LabeledState<'a, E>,
        action: F,
    ) -> Self
    where
        F: FnMut() -> Result<(), E> + 'a,
    {
        let action: TransitionAction<'a, E> = Box::new(action);
        self.transitions.push((TransitionKey::between(from, to), action));
        self
    }

    /// Keep at most `capacity` transition records.
    ///
    /// Defaults to [`DEFAULT_HISTORY_CAPACITY`](super::DEFAULT_HISTORY_CAPACITY).
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history = TransitionHistory::bounded(capacity);
        self
    }

    /// Keep every transition record for the life of the machine.
    pub fn unbounded_history(mut self) -> Self {
        self.history = TransitionHistory::unbounded();
        self
    }

    /// Build the machine, entering the initial state.
    pub fn build(self) -> Result<StateMachine<'a, E>, BuildError<E>> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let state = initial.name().to_string();
        let mut machine = StateMachine::with_history(initial, self.history)
            .map_err(|source| BuildError::EntryFailed { state, source })?;

        for (key, action) in self.transitions {
            machine.insert_action(key, action);
        }

        Ok(machine)
    }
}

impl<'a, E: 'a> Default for StateMachineBuilder<'a, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Debug, PartialEq)]
    struct Refused;

    #[test]
    fn builder_validates_required_fields() {
        let result = StateMachineBuilder::<Infallible>::new().build();
        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_registers_transitions() {
        let moves = Cell::new(0);
        let a = LabeledState::new("A", || {});
        let b = LabeledState::new("B", || {});

        let mut machine = StateMachineBuilder::new()
            .initial(a.clone())
            .transition(&a, &b, || moves.set(moves.get() + 1))
            .transition(&b, &a, || moves.set(moves.get() + 10))
            .build()
            .unwrap();

        assert_eq!(machine.transition_count(), 2);
        machine.transition_to(&b).unwrap().transition_to(&a).unwrap();
        assert_eq!(moves.get(), 11);
    }

    #[test]
    fn later_registration_wins() {
        let winner = Cell::new("");
        let a = LabeledState::new("A", || {});
        let b = LabeledState::new("B", || {});

        let mut machine = StateMachineBuilder::new()
            .initial(a.clone())
            .transition(&a, &b, || winner.set("first"))
            .transition(&a, &b, || winner.set("second"))
            .build()
            .unwrap();

        machine.transition_to(&b).unwrap();
        assert_eq!(winner.get(), "second");
    }

    #[test]
    fn builder_enters_initial_state_once() {
        let entries = Cell::new(0);
        let start = LabeledState::new("Start", || entries.set(entries.get() + 1));

        let _machine = StateMachineBuilder::new().initial(start).build().unwrap();

        assert_eq!(entries.get(), 1);
    }

    #[test]
    fn entry_failure_is_reported_with_state_name() {
        let start = LabeledState::fallible("Start", || Err(Refused));

        let result = StateMachineBuilder::new().initial(start).build();

        match result {
            Err(BuildError::EntryFailed { state, source }) => {
                assert_eq!(state, "Start");
                assert_eq!(source, Refused);
            }
            other => panic!("Expected EntryFailed, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn history_capacity_bounds_records() {
        let a = LabeledState::new("A", || {});
        let b = LabeledState::new("B", || {});

        let mut machine = StateMachineBuilder::new()
            .initial(a.clone())
            .history_capacity(2)
            .build()
            .unwrap();

        for _ in 0..3 {
            machine.transition_to(&b).unwrap().transition_to(&a).unwrap();
        }

        assert_eq!(machine.history().len(), 2);
        assert_eq!(machine.history().capacity(), Some(2));
        assert_eq!(machine.history().path(), vec!["A", "B", "A"]);
    }

    #[test]
    fn huge_history_capacity_builds() {
        let a = LabeledState::new("A", || {});
        let b = LabeledState::new("B", || {});

        let mut machine = StateMachineBuilder::new()
            .initial(a.clone())
            .history_capacity(usize::MAX)
            .build()
            .unwrap();

        machine.transition_to(&b).unwrap().transition_to(&a).unwrap();
        assert_eq!(machine.history().len(), 2);
        assert_eq!(machine.history().capacity(), Some(usize::MAX));
    }

    #[test]
    fn unbounded_history_opts_out_of_eviction() {
        let a = LabeledState::new("A", || {});

        let mut machine = StateMachineBuilder::new()
            .initial(a.clone())
            .unbounded_history()
            .build()
            .unwrap();

        for _ in 0..=crate::fsm::DEFAULT_HISTORY_CAPACITY {
            machine.transition_to(&a).unwrap();
        }

        assert!(machine.history().capacity().is_none());
        assert_eq!(
            machine.history().len(),
            crate::fsm::DEFAULT_HISTORY_CAPACITY + 1
        );
    }
}
